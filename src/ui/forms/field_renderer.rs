//! Field rendering utilities for forms

use crate::state::{FieldHint, FieldName};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw an input box. Placeholder hints show dimmed inside an empty box,
/// label hints become the box title.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    hint: &FieldHint,
    value: &str,
    is_active: bool,
    is_multiline: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = match hint {
        FieldHint::Label(label) => format!(" {label} "),
        FieldHint::Placeholder(_) => format!(" {} ", field.caption()),
    };

    let cursor = if is_active { "▌" } else { "" };
    let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));

    let content = if value.is_empty() {
        let mut spans = vec![cursor_span];
        if let FieldHint::Placeholder(placeholder) = hint {
            spans.push(Span::styled(
                *placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
        }
        Paragraph::new(Line::from(spans))
    } else if is_multiline {
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![Span::styled(value, style), cursor_span]))
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the inline error line beneath a field
pub fn draw_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let line = Line::from(vec![
            Span::styled(" ✗ ", Style::default().fg(Color::Red)),
            Span::styled(message, Style::default().fg(Color::Red)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
