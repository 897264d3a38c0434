//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::state::{App, AppMode, Field, Message, Picker, RESULT_PLACEHOLDER, Selector};
use components::{
    render_button_widget, render_dialog_framework, render_input_widget, render_selector_widget,
};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(3), // 类别
            Constraint::Length(3), // 源单位
            Constraint::Length(3), // 目标单位
            Constraint::Length(3), // 输入
            Constraint::Length(3), // 按钮
            Constraint::Length(1), // 提示
            Constraint::Length(3), // 结果
            Constraint::Min(0),
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_selectors(frame, app, [chunks[1], chunks[2], chunks[3]]);
    render_input_widget(
        frame,
        chunks[4],
        "Enter value",
        &app.input_buffer,
        app.focus == Field::Value,
        Color::Yellow,
    );
    render_button_widget(frame, chunks[5], "Convert", app.focus == Field::Convert);
    render_message(frame, app, chunks[6]);
    render_result(frame, app, chunks[7]);
    render_help(frame, app, chunks[9]);

    // 渲染弹窗
    if let AppMode::Picking(picker) = &app.mode {
        render_picker_dialog(frame, app, picker);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Unit Converter")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn selector_label(selector: Selector) -> &'static str {
    match selector {
        Selector::Category => "Category",
        Selector::Source => "From",
        Selector::Destination => "To",
    }
}

fn render_selectors(frame: &mut Frame, app: &App, areas: [Rect; 3]) {
    let fields = [Field::Category, Field::Source, Field::Destination];
    for (field, area) in fields.into_iter().zip(areas) {
        if let Some(selector) = field.selector() {
            render_selector_widget(
                frame,
                area,
                selector_label(selector),
                app.current_option(selector),
                app.focus == field,
            );
        }
    }
}

fn render_message(frame: &mut Frame, app: &App, area: Rect) {
    let Some(message) = &app.message else {
        return;
    };
    let color = match message {
        Message::Advisory(_) => Color::Yellow,
        Message::Error(_) => Color::Red,
    };
    let line = Paragraph::new(message.text()).style(Style::default().fg(color));
    frame.render_widget(line, area);
}

fn render_result(frame: &mut Frame, app: &App, area: Rect) {
    if app.converted_value.is_empty() {
        return;
    }
    let style = if app.converted_value == RESULT_PLACEHOLDER {
        Style::default().fg(Color::Gray)
    } else {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    };
    let result = Paragraph::new(app.converted_value.as_str())
        .style(style)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(result, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match (&app.mode, app.focus) {
        (AppMode::Picking(_), _) => "[j/k] 选择  [Enter] 确认  [Esc] 取消",
        (AppMode::Normal, Field::Value) => "输入数值  [Enter] 换算  [Tab] 下一项  [Esc] 退出",
        (AppMode::Normal, Field::Convert) => {
            "[Enter/c] 换算  [Tab/Shift+Tab] 切换  [q/Esc] 退出"
        }
        (AppMode::Normal, _) => "[Enter] 选择  [Tab/Shift+Tab] 切换  [c] 换算  [q/Esc] 退出",
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_picker_dialog(frame: &mut Frame, app: &App, picker: &Picker) {
    let area = centered_rect(50, 50, frame.area());
    let inner = render_dialog_framework(frame, area, selector_label(picker.target));

    let current = app.current_option(picker.target);
    let items: Vec<ListItem> = app
        .options(picker.target)
        .into_iter()
        .enumerate()
        .map(|(i, option)| {
            let marker = if option == current { "● " } else { "  " };
            let style = if i == picker.index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![Span::styled(
                format!("{}{}", marker, option),
                style,
            )]))
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(picker.index));

    frame.render_stateful_widget(list, inner, &mut state);
}
