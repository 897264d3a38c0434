//! 通用 UI 组件
//!
//! 对话框、输入框、按钮等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn focus_style(is_focused: bool, active_color: Color) -> Style {
    if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// [组件] 带有标题和样式的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    active_color: Color,
) {
    let input = Paragraph::new(value)
        .style(focus_style(is_focused, active_color))
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(input, area);
}

/// [组件] 只读下拉框，显示当前选中值
pub fn render_selector_widget(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    selected: &str,
    is_focused: bool,
) {
    let text = format!("{} ▾", selected);
    render_input_widget(frame, area, label, &text, is_focused, Color::Yellow);
}

/// [组件] 按钮
pub fn render_button_widget(frame: &mut Frame, area: Rect, label: &str, is_focused: bool) {
    let style = if is_focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}
