//! 通用 UI 组件
//!
//! 对话框、输入框、按钮等通用组件

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::config::Theme;

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(theme.accent).bg(theme.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// 字符串的显示宽度（宽字符占两列）
pub fn text_width(text: &str) -> usize {
    Span::raw(text).width()
}

fn char_width(c: char) -> usize {
    let mut buf = [0u8; 4];
    text_width(c.encode_utf8(&mut buf))
}

/// 按显示宽度截断，超出时以 `…` 结尾，结果不超过 max 列
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text_width(text) <= max {
        return text.to_string();
    }

    let budget = max.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = char_width(c);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if max > 0 {
        out.push('…');
    }
    out
}

/// 宽度不超过 max 列的最长后缀
pub fn tail_within_width(text: &str, max: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (index, c) in text.char_indices().rev() {
        let w = char_width(c);
        if used + w > max {
            break;
        }
        used += w;
        start = index;
    }
    &text[start..]
}

/// [组件] 单行文本输入框，内容为空时显示占位文字
///
/// 内容超出宽度时只显示末尾部分，光标始终可见。
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    value: &str,
    placeholder: &str,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.text));
    let inner = block.inner(area);

    // 留一列给光标
    let visible = tail_within_width(value, usize::from(inner.width.saturating_sub(1)));

    let text = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(theme.muted))
    } else {
        Span::styled(
            visible,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(Paragraph::new(text).block(block), area);

    let offset = u16::try_from(text_width(visible)).unwrap_or(u16::MAX);
    let cursor_x = inner.x + offset.min(inner.width.saturating_sub(1));
    frame.set_cursor_position(Position::new(cursor_x, inner.y));
}

/// [组件] 按钮标签
pub fn button(label: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {label} "),
        Style::default()
            .fg(Color::White)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    )
}
