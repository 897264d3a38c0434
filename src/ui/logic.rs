//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑、类别/单位选择规则以及换算按钮的行为

use tracing::{debug, info, warn};

use super::actions::Action;
use super::state::{App, AppMode, Message, Picker, Selector};
use crate::convert::{format_echo, parse_value, perform_conversion};
use crate::models::Category;

/// 同单位换算时的提示
pub const SAME_UNIT_ADVISORY: &str = "Value is same because of the same unit conversion";

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),

            Action::OpenPicker => self.open_picker(),
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::Cancel => self.cancel(),
            Action::Submit => {
                if let AppMode::Picking(picker) = &self.mode {
                    let picker = picker.clone();
                    self.confirm_pick(picker);
                }
            }

            Action::Input(c) => {
                if self.mode == AppMode::Normal {
                    self.input_buffer.push(c);
                }
            }
            Action::DeleteChar => {
                if self.mode == AppMode::Normal {
                    self.input_buffer.pop();
                }
            }

            Action::Convert => self.convert(),
        }
        false
    }

    // ============ 类别/单位选择 ============

    /// 切换类别，并把源/目标单位重置为该类别的默认值
    pub fn select_category(&mut self, category: Category) {
        let (source, destination) = category.default_units();
        self.category = category;
        self.source_unit = source;
        self.destination_unit = destination;
        info!(%category, source, destination, "category changed");
    }

    /// 设置源单位，不属于当前类别的单位被忽略
    pub fn select_source(&mut self, unit: &str) {
        if let Some(unit) = self.lookup_unit(unit) {
            self.source_unit = unit;
        }
    }

    /// 设置目标单位，不属于当前类别的单位被忽略
    pub fn select_destination(&mut self, unit: &str) {
        if let Some(unit) = self.lookup_unit(unit) {
            self.destination_unit = unit;
        }
    }

    fn lookup_unit(&self, unit: &str) -> Option<&'static str> {
        let found = self.category.units().iter().find(|u| **u == unit).copied();
        if found.is_none() {
            warn!(unit, category = %self.category, "unit not in category, ignored");
        }
        found
    }

    // ============ 下拉选择弹窗 ============

    /// 为当前焦点字段打开下拉选择，初始高亮当前值
    pub fn open_picker(&mut self) {
        let Some(target) = self.focus.selector() else {
            return;
        };
        let current = self.current_option(target);
        let index = self
            .options(target)
            .iter()
            .position(|o| *o == current)
            .unwrap_or(0);
        self.mode = AppMode::Picking(Picker { target, index });
    }

    pub fn move_up(&mut self) {
        if let AppMode::Picking(picker) = &mut self.mode {
            if picker.index > 0 {
                picker.index -= 1;
            }
        }
    }

    pub fn move_down(&mut self) {
        let len = match &self.mode {
            AppMode::Picking(picker) => self.options(picker.target).len(),
            AppMode::Normal => return,
        };
        if let AppMode::Picking(picker) = &mut self.mode {
            if picker.index + 1 < len {
                picker.index += 1;
            }
        }
    }

    /// 确认下拉选择
    pub fn confirm_pick(&mut self, picker: Picker) {
        let options = self.options(picker.target);
        if let Some(choice) = options.get(picker.index).copied() {
            match picker.target {
                Selector::Category => {
                    if let Some(category) = Category::from_name(choice) {
                        self.select_category(category);
                    }
                }
                Selector::Source => self.select_source(choice),
                Selector::Destination => self.select_destination(choice),
            }
        }
        self.mode = AppMode::Normal;
    }

    /// 关闭弹窗，不修改选择
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
    }

    // ============ 换算 ============

    /// 换算按钮：解析输入 -> 同单位直接回显 -> 否则调用换算引擎
    pub fn convert(&mut self) {
        let value = match parse_value(&self.input_buffer) {
            Ok(value) => value,
            Err(e) => {
                warn!(input = %self.input_buffer, "rejected input");
                self.message = Some(Message::Error(e.to_string()));
                self.converted_value.clear();
                return;
            }
        };

        if self.source_unit == self.destination_unit {
            self.converted_value = format_echo(value, self.destination_unit);
            self.message = Some(Message::Advisory(SAME_UNIT_ADVISORY.to_string()));
            return;
        }

        self.converted_value = perform_conversion(
            value,
            self.category,
            self.source_unit,
            self.destination_unit,
        );
        self.message = None;
        debug!(
            value,
            category = %self.category,
            from = self.source_unit,
            to = self.destination_unit,
            result = %self.converted_value,
            "converted"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::{Field, RESULT_PLACEHOLDER};

    fn app_with_input(input: &str) -> App {
        let mut app = App::new(Category::Length);
        app.input_buffer = input.to_string();
        app
    }

    #[test]
    fn test_new_app_uses_category_defaults() {
        let app = App::new(Category::Weight);
        assert_eq!(app.source_unit, "Pound");
        assert_eq!(app.destination_unit, "Kilogram");
        assert_eq!(app.converted_value, RESULT_PLACEHOLDER);
        assert!(app.message.is_none());
    }

    #[test]
    fn test_convert_default_length_pair() {
        let mut app = app_with_input("1");
        app.convert();
        assert_eq!(app.converted_value, "2.540000 Centimeter");
        assert!(app.message.is_none());
    }

    #[test]
    fn test_invalid_input_clears_result() {
        let mut app = app_with_input("1");
        app.convert();
        app.input_buffer = "abc".to_string();
        app.convert();
        assert_eq!(app.converted_value, "");
        assert_eq!(
            app.message,
            Some(Message::Error(
                "Invalid input, please enter a valid number".to_string()
            ))
        );
    }

    #[test]
    fn test_same_unit_echoes_value_with_advisory() {
        let mut app = app_with_input("5");
        app.select_destination("Inch");
        app.convert();
        assert_eq!(app.converted_value, "5.0 Inch");
        assert_eq!(
            app.message,
            Some(Message::Advisory(SAME_UNIT_ADVISORY.to_string()))
        );
    }

    #[test]
    fn test_successful_convert_clears_previous_message() {
        let mut app = app_with_input("oops");
        app.convert();
        assert!(matches!(app.message, Some(Message::Error(_))));

        app.input_buffer = "100".to_string();
        app.select_source("Meter");
        app.select_destination("Kilometer");
        app.convert();
        assert_eq!(app.converted_value, "0.100000 Kilometer");
        assert!(app.message.is_none());
    }

    #[test]
    fn test_category_change_resets_units() {
        let mut app = App::new(Category::Length);
        app.select_source("Mile");
        app.select_destination("Meter");

        app.select_category(Category::Temperature);
        assert_eq!(app.source_unit, "Celsius");
        assert_eq!(app.destination_unit, "Fahrenheit");

        app.select_category(Category::Weight);
        assert_eq!((app.source_unit, app.destination_unit), ("Pound", "Kilogram"));

        // 重新选择同一类别也会重置
        app.select_destination("Gram");
        app.select_category(Category::Weight);
        assert_eq!(app.destination_unit, "Kilogram");
    }

    #[test]
    fn test_units_outside_category_are_ignored() {
        let mut app = App::new(Category::Temperature);
        app.select_source("Meter");
        app.select_destination("Gram");
        assert_eq!(app.source_unit, "Celsius");
        assert_eq!(app.destination_unit, "Fahrenheit");
    }

    #[test]
    fn test_temperature_through_app() {
        let mut app = App::new(Category::Temperature);
        app.input_buffer = "212".to_string();
        app.select_source("Fahrenheit");
        app.select_destination("Celsius");
        app.convert();
        assert_eq!(app.converted_value, "100.000000 Celsius");
    }

    #[test]
    fn test_picker_opens_on_current_value() {
        let mut app = App::new(Category::Length);
        app.focus = Field::Destination;
        app.dispatch(Action::OpenPicker);
        assert_eq!(
            app.mode,
            AppMode::Picking(Picker {
                target: Selector::Destination,
                index: 4,
            })
        );
    }

    #[test]
    fn test_picker_does_not_open_on_value_field() {
        let mut app = App::new(Category::Length);
        app.focus = Field::Value;
        app.open_picker();
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_pick_category_through_dispatch() {
        let mut app = App::new(Category::Length);
        app.dispatch(Action::OpenPicker);
        app.dispatch(Action::MoveSelectionDown);
        app.dispatch(Action::MoveSelectionDown);
        app.dispatch(Action::MoveSelectionDown);
        app.dispatch(Action::Submit);

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.category, Category::Temperature);
        assert_eq!(app.source_unit, "Celsius");
        assert_eq!(app.destination_unit, "Fahrenheit");
    }

    #[test]
    fn test_pick_source_unit() {
        let mut app = App::new(Category::Weight);
        app.focus = Field::Source;
        app.dispatch(Action::OpenPicker);
        app.dispatch(Action::MoveSelectionUp);
        app.dispatch(Action::MoveSelectionDown);
        app.dispatch(Action::Submit);
        assert_eq!(app.source_unit, "Ounce");
        assert_eq!(app.destination_unit, "Kilogram");
    }

    #[test]
    fn test_cancel_picker_keeps_selection() {
        let mut app = App::new(Category::Length);
        app.dispatch(Action::OpenPicker);
        app.dispatch(Action::MoveSelectionDown);
        app.dispatch(Action::Cancel);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.category, Category::Length);
    }

    #[test]
    fn test_typing_into_value_field() {
        let mut app = App::new(Category::Length);
        for c in "12x".chars() {
            app.dispatch(Action::Input(c));
        }
        app.dispatch(Action::DeleteChar);
        assert_eq!(app.input_buffer, "12");
        assert!(!app.dispatch(Action::Convert));
        assert_eq!(app.converted_value, "30.480000 Centimeter");
    }
}
