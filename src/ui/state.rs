//! App 状态定义 (Model)
//!
//! 包含选择状态（类别、源/目标单位、输入值）与显示状态（结果、提示）

use crate::models::Category;

/// 初始结果占位文字
pub const RESULT_PLACEHOLDER: &str = "Result";

/// 应用状态
pub struct App {
    pub category: Category,
    pub source_unit: &'static str,
    pub destination_unit: &'static str,
    pub input_buffer: String,
    pub converted_value: String,
    pub message: Option<Message>,
    pub focus: Field,
    pub mode: AppMode,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Picking(Picker),
}

/// 下拉选择弹窗
#[derive(Debug, Clone, PartialEq)]
pub struct Picker {
    pub target: Selector,
    pub index: usize,
}

/// 可下拉选择的字段
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selector {
    Category,
    Source,
    Destination,
}

/// 可获得焦点的字段，顺序即 Tab 顺序
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    Category,
    Source,
    Destination,
    Value,
    Convert,
}

/// 结果下方的提示信息
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Advisory(String),
    Error(String),
}

impl Field {
    const ORDER: [Field; 5] = [
        Field::Category,
        Field::Source,
        Field::Destination,
        Field::Value,
        Field::Convert,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Field {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Field {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// 对应的下拉选择器（如有）
    pub fn selector(self) -> Option<Selector> {
        match self {
            Field::Category => Some(Selector::Category),
            Field::Source => Some(Selector::Source),
            Field::Destination => Some(Selector::Destination),
            Field::Value | Field::Convert => None,
        }
    }
}

impl Message {
    pub fn text(&self) -> &str {
        match self {
            Message::Advisory(text) | Message::Error(text) => text,
        }
    }
}

impl App {
    /// 创建新的应用实例，单位取该类别的默认值
    pub fn new(category: Category) -> Self {
        let (source_unit, destination_unit) = category.default_units();
        Self {
            category,
            source_unit,
            destination_unit,
            input_buffer: String::new(),
            converted_value: RESULT_PLACEHOLDER.to_string(),
            message: None,
            focus: Field::Category,
            mode: AppMode::Normal,
        }
    }

    /// 选择器当前可选项
    pub fn options(&self, selector: Selector) -> Vec<&'static str> {
        match selector {
            Selector::Category => Category::ALL.iter().map(|c| c.name()).collect(),
            Selector::Source | Selector::Destination => self.category.units().to_vec(),
        }
    }

    /// 选择器当前选中的值
    pub fn current_option(&self, selector: Selector) -> &'static str {
        match selector {
            Selector::Category => self.category.name(),
            Selector::Source => self.source_unit,
            Selector::Destination => self.destination_unit,
        }
    }
}
