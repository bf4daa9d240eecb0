//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::project;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    let view = project(&app.state.form);
    forms::draw_contact_form(frame, main_area, &view);

    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render_buffer(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn render(app: &App) -> String {
        buffer_text(&render_buffer(app))
    }

    /// Foreground colour of the status bar text starting with `needle`
    fn status_bar_color(buffer: &Buffer, needle: &str) -> Option<Color> {
        let y = buffer.area.bottom() - 1;
        let row: String = (buffer.area.left()..buffer.area.right())
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect();
        let x = row.find(needle)? as u16;
        Some(buffer[(x, y)].fg)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .unwrap();
        }
    }

    fn next_field(app: &mut App) {
        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE))
            .unwrap();
    }

    fn submit(app: &mut App) {
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
            .unwrap();
    }

    #[test]
    fn test_renders_without_errors() {
        let app = App::new(&FormConfig::default());
        let screen = render(&app);
        assert!(!screen.contains('✗'));
    }

    #[test]
    fn test_renders_header_and_placeholders() {
        let app = App::new(&FormConfig::default());
        let screen = render(&app);
        assert!(screen.contains("Contact Form"));
        assert!(screen.contains("Edd"));
        assert!(screen.contains("Burke"));
        assert!(screen.contains("bluebill1049@hotmail.com"));
        assert!(screen.contains("Message"));
        assert!(screen.contains("Submit"));
    }

    #[test]
    fn test_renders_inline_error() {
        let mut app = App::new(&FormConfig::default());
        type_text(&mut app, "bob");
        let screen = render(&app);
        assert!(screen.contains("firstName must have at least 5 characters."));
    }

    #[test]
    fn test_renders_submitted_panel_without_message() {
        let mut app = App::new(&FormConfig::default());
        type_text(&mut app, "Rebecca");
        next_field(&mut app);
        type_text(&mut app, "Adams");
        next_field(&mut app);
        type_text(&mut app, "anemail@email.com");
        submit(&mut app);

        let screen = render(&app);
        assert!(screen.contains("Submitted"));
        assert!(screen.contains("First Name:"));
        assert!(screen.contains("Last Name:"));
        assert!(screen.contains("Email:"));
        assert!(!screen.contains("Message:"));
    }

    #[test]
    fn test_status_color_follows_last_submit_outcome() {
        let mut app = App::new(&FormConfig::default());
        submit(&mut app);
        assert_eq!(
            status_bar_color(&render_buffer(&app), "Not submitted"),
            Some(Color::Red)
        );

        type_text(&mut app, "Rebecca");
        next_field(&mut app);
        type_text(&mut app, "Adams");
        next_field(&mut app);
        type_text(&mut app, "anemail@email.com");
        submit(&mut app);
        // shorten the first name below its minimum after submitting
        for code in [KeyCode::BackTab, KeyCode::BackTab] {
            app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
                .unwrap();
        }
        for _ in 0..3 {
            app.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE))
                .unwrap();
        }
        assert!(!project(&app.state.form).errors().is_empty());
        assert_eq!(
            status_bar_color(&render_buffer(&app), "Submitted"),
            Some(Color::Green)
        );
    }

    #[test]
    fn test_renders_submitted_message() {
        let mut app = App::new(&FormConfig::default());
        type_text(&mut app, "Rebecca");
        next_field(&mut app);
        type_text(&mut app, "Adams");
        next_field(&mut app);
        type_text(&mut app, "anemail@email.com");
        next_field(&mut app);
        type_text(&mut app, "testing is great");
        submit(&mut app);

        let screen = render(&app);
        assert!(screen.contains("Message:"));
        assert!(screen.matches("testing is great").count() >= 2);
    }
}
