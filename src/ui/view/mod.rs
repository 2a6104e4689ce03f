//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::state::{App, Dialog};
use crate::models::Item;
use components::{
    button, render_dialog_framework, render_input_widget, text_width, truncate_to_width,
};
use layouts::centered_rect;

const EDIT_LABEL: &str = "Edit";
const DELETE_LABEL: &str = "Delete";
const HIGHLIGHT_SYMBOL: &str = "> ";

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题 + 添加按钮
            Constraint::Min(5),    // 列表
            Constraint::Length(4), // 详情
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_list(frame, app, chunks[1]);
    render_details(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);

    if let Dialog::Open { .. } = &app.dialog {
        render_edit_dialog(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            app.title.as_str(),
            Style::default()
                .fg(app.theme.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        button("[a] Add Item", app.theme.accent),
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// 单行条目：文本 + 右侧的 Edit / Delete
fn item_line<'a>(item: &'a Item, app: &App, width: usize) -> Line<'a> {
    let actions_width = EDIT_LABEL.len() + 2 + DELETE_LABEL.len();
    let max_text = width.saturating_sub(actions_width + 1);

    let text_span = if item.text.is_empty() {
        Span::styled("(empty)", Style::default().fg(app.theme.muted))
    } else if text_width(&item.text) > max_text {
        Span::styled(
            truncate_to_width(&item.text, max_text),
            Style::default().fg(app.theme.text),
        )
    } else {
        Span::styled(item.text.as_str(), Style::default().fg(app.theme.text))
    };

    let padding = width.saturating_sub(text_span.width() + actions_width).max(1);

    Line::from(vec![
        text_span,
        Span::raw(" ".repeat(padding)),
        Span::styled(EDIT_LABEL, Style::default().fg(app.theme.text)),
        Span::raw("  "),
        Span::styled(DELETE_LABEL, Style::default().fg(app.theme.danger)),
    ])
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let width = usize::from(area.width.saturating_sub(2)).saturating_sub(HIGHLIGHT_SYMBOL.len());

    let items: Vec<ListItem> = app
        .store
        .items()
        .iter()
        .map(|item| ListItem::new(item_line(item, app, width)))
        .collect();

    let title = format!("{} ({})", app.title, app.store.len());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if !app.store.is_empty() {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_details(frame: &mut Frame, app: &App, area: Rect) {
    let content = match app.selected_item() {
        Some(item) => format!(
            "{}\nAdded: {}",
            if item.text.is_empty() {
                "(empty)"
            } else {
                item.text.as_str()
            },
            item.created_at.format("%Y-%m-%d %H:%M")
        ),
        None => "No items yet, press 'a' to add one".to_string(),
    };

    let details = Paragraph::new(content)
        .style(Style::default().fg(app.theme.text))
        .block(Block::default().title("Details").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    frame.render_widget(details, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.dialog {
        Dialog::Closed => {
            "[a] Add  [e/Enter] Edit  [d] Delete  [j/k] Navigate  [q] Quit".to_string()
        }
        Dialog::Open { .. } => format!("[Enter] {}  [Esc] Cancel", app.dialog.submit_label()),
    };

    let text = match app.message.as_deref() {
        Some(message) => format!("{help_text}  |  {message}"),
        None => help_text,
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(app.theme.muted))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_edit_dialog(frame: &mut Frame, app: &App) {
    let label = app.dialog.submit_label();
    let area = centered_rect(80, 7, frame.area());
    let inner = render_dialog_framework(frame, area, label, &app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 输入框
            Constraint::Length(1),
            Constraint::Length(1), // 按钮
            Constraint::Min(0),
        ])
        .split(inner);

    render_input_widget(frame, chunks[0], &app.input_buffer, "Enter text", &app.theme);

    let buttons = Line::from(vec![
        button(&format!("[Enter] {label}"), app.theme.accent),
        Span::raw("  "),
        button("[Esc] Cancel", app.theme.muted),
    ]);
    frame.render_widget(Paragraph::new(buttons), chunks[2]);
}
