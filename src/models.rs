use serde::{Deserialize, Serialize};
use std::fmt;

/// 长度单位（按界面顺序）
pub const LENGTH_UNITS: [&str; 7] = [
    "Inch",
    "Foot",
    "Yard",
    "Mile",
    "Centimeter",
    "Meter",
    "Kilometer",
];

/// 重量单位
pub const WEIGHT_UNITS: [&str; 5] = ["Pound", "Ounce", "Ton", "Kilogram", "Gram"];

/// 温度单位
pub const TEMPERATURE_UNITS: [&str; 3] = ["Celsius", "Fahrenheit", "Kelvin"];

/// 度量类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Length,
    Weight,
    Temperature,
}

impl Category {
    /// 全部类别，顺序即下拉列表顺序
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
        }
    }

    /// 按名称精确查找
    pub fn from_name(name: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// 该类别下的有序单位列表
    pub fn units(self) -> &'static [&'static str] {
        match self {
            Category::Length => &LENGTH_UNITS,
            Category::Weight => &WEIGHT_UNITS,
            Category::Temperature => &TEMPERATURE_UNITS,
        }
    }

    /// 默认的 (源单位, 目标单位)
    pub fn default_units(self) -> (&'static str, &'static str) {
        match self {
            Category::Length => ("Inch", "Centimeter"),
            Category::Weight => ("Pound", "Kilogram"),
            Category::Temperature => ("Celsius", "Fahrenheit"),
        }
    }

    pub fn contains(self, unit: &str) -> bool {
        self.units().contains(&unit)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 按类别名称取单位列表，未知名称回退到 Length
pub fn units_for(category: &str) -> &'static [&'static str] {
    Category::from_name(category)
        .unwrap_or(Category::Length)
        .units()
}

/// 按类别名称取默认单位对，未知名称回退到 Length
pub fn default_units_for(category: &str) -> (&'static str, &'static str) {
    Category::from_name(category)
        .unwrap_or(Category::Length)
        .default_units()
}
