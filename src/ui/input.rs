//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode, Field};

/// 根据当前模式、焦点和按键获取对应的 Action
pub fn get_action(mode: &AppMode, focus: Field, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Normal => match key {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Enter => match focus {
                Field::Value | Field::Convert => Some(Action::Convert),
                _ => Some(Action::OpenPicker),
            },
            // 输入框宽松接收任意字符，由换算前的解析负责校验
            KeyCode::Char(c) if focus == Field::Value => Some(Action::Input(c)),
            KeyCode::Backspace if focus == Field::Value => Some(Action::DeleteChar),
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('c') => Some(Action::Convert),
            _ => None,
        },
        AppMode::Picking(_) => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(&app.mode, app.focus, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}
