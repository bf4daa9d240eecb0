//! Contact form rendering

use super::field_renderer::{draw_error, draw_field};
use crate::state::{Element, FieldName, Projection};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by the multiline message box
const MESSAGE_HEIGHT: u16 = 5;

/// Draw the contact form from its projection
pub fn draw(frame: &mut Frame, area: Rect, view: &Projection) {
    let block = Block::default()
        .title(format!(" {} ", view.header().unwrap_or_default()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let has_displays = view.displays().next().is_some();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(if has_displays {
            vec![Constraint::Percentage(60), Constraint::Percentage(40)]
        } else {
            vec![Constraint::Percentage(100)]
        })
        .split(inner);

    draw_inputs(frame, columns[0], view);

    if has_displays {
        draw_submission(frame, columns[1], view);
    }
}

fn draw_inputs(frame: &mut Frame, area: Rect, view: &Projection) {
    let mut constraints = Vec::new();
    for element in &view.elements {
        if let Element::Input { is_multiline, .. } = element {
            let height = if *is_multiline { MESSAGE_HEIGHT } else { 3 };
            constraints.push(Constraint::Length(height)); // Input
            constraints.push(Constraint::Length(1)); // Error line
        }
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let mut row = 0;
    for element in &view.elements {
        match element {
            Element::Input {
                field,
                hint,
                value,
                is_active,
                is_multiline,
            } => {
                draw_field(
                    frame,
                    chunks[row],
                    *field,
                    hint,
                    value,
                    *is_active,
                    *is_multiline,
                );
                draw_error(frame, chunks[row + 1], view.error_for(*field));
                row += 2;
            }
            Element::SubmitButton { is_active } => {
                let button_area = Rect {
                    width: chunks[row].width.min(12),
                    ..chunks[row]
                };
                render_button(frame, button_area, "Submit", *is_active);
            }
            _ => {}
        }
    }
}

fn draw_submission(frame: &mut Frame, area: Rect, view: &Projection) {
    let mut lines = Vec::new();
    for (field, value) in view.displays() {
        lines.push(Line::from(Span::styled(
            format!("{}:", field.caption()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        if field == FieldName::Message {
            lines.extend(value.split('\n').map(|l| Line::from(l.to_string())));
        } else {
            lines.push(Line::from(value.to_string()));
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Submitted ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(paragraph, area);
}
