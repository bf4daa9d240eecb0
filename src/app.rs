//! Application state and core logic

use crate::config::FormConfig;
use crate::state::{AppState, Form, FormEvent, StatusMessage};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &FormConfig) -> Self {
        Self {
            state: AppState::new(config),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press on the contact form
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            // Submit (Ctrl+S)
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('r') if ctrl => {
                self.dispatch(FormEvent::Reset);
                self.state.status_message = None;
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter => {
                if self.state.form.is_buttons_row_active() {
                    self.submit();
                } else if self.state.form.is_active_field_multiline() {
                    self.state.form.input_char('\n');
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Char(c) if !ctrl => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    fn submit(&mut self) {
        self.dispatch(FormEvent::SubmitRequested);
    }

    /// Apply an event to the form and record the outcome for the status bar
    fn dispatch(&mut self, event: FormEvent) {
        let is_submit = matches!(event, FormEvent::SubmitRequested);
        match self.state.form.apply(event) {
            Ok(()) if is_submit => {
                let text = if self.state.form.clears_on_submit() {
                    "Submitted, form cleared"
                } else {
                    "Submitted"
                };
                self.state.status_message = Some(StatusMessage::info(text));
            }
            Ok(()) => {}
            Err(e) => {
                self.state.status_message =
                    Some(StatusMessage::error(format!("Not submitted: {e}")));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{project, FieldName};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn press_ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn new_app() -> App {
        App::new(&FormConfig::default())
    }

    mod quitting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_should_quit_initially_false() {
            assert!(!new_app().should_quit());
        }

        #[test]
        fn test_escape_quits() {
            let mut app = new_app();
            press(&mut app, KeyCode::Esc);
            assert!(app.should_quit());
        }

        #[test]
        fn test_ctrl_c_quits_without_typing() {
            let mut app = new_app();
            press_ctrl(&mut app, 'c');
            assert!(app.should_quit());
            assert_eq!(app.state.form.first_name.as_text(), "");
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_goes_to_active_field() {
            let mut app = new_app();
            type_text(&mut app, "bob");
            assert_eq!(app.state.form.first_name.as_text(), "bob");
            assert_eq!(
                project(&app.state.form).errors(),
                vec!["firstName must have at least 5 characters."]
            );
        }

        #[test]
        fn test_tab_moves_to_next_field() {
            let mut app = new_app();
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "Burke");
            assert_eq!(app.state.form.last_name.as_text(), "Burke");
        }

        #[test]
        fn test_backtab_from_first_field_focuses_button() {
            let mut app = new_app();
            press(&mut app, KeyCode::BackTab);
            assert!(app.state.form.is_buttons_row_active());
        }

        #[test]
        fn test_enter_on_single_line_field_advances() {
            let mut app = new_app();
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.form.active_field(), 1);
        }

        #[test]
        fn test_enter_in_message_inserts_newline() {
            let mut app = new_app();
            app.state.form.set_active_field(3);
            type_text(&mut app, "a");
            press(&mut app, KeyCode::Enter);
            type_text(&mut app, "b");
            assert_eq!(app.state.form.message.as_text(), "a\nb");
        }

        #[test]
        fn test_backspace_removes_char() {
            let mut app = new_app();
            type_text(&mut app, "Edgar");
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.state.form.first_name.as_text(), "Edga");
            assert!(app.state.form.error_for(FieldName::FirstName).is_some());
        }
    }

    mod submitting {
        use super::*;
        use pretty_assertions::assert_eq;

        fn fill_valid(app: &mut App) {
            type_text(app, "Rebecca");
            press(app, KeyCode::Tab);
            type_text(app, "Adams");
            press(app, KeyCode::Tab);
            type_text(app, "anemail@email.com");
        }

        #[test]
        fn test_ctrl_s_on_empty_form_reports_errors() {
            let mut app = new_app();
            press_ctrl(&mut app, 's');
            assert_eq!(project(&app.state.form).errors().len(), 3);
            assert_eq!(
                app.state.status_text(),
                Some("Not submitted: 3 field(s) failed validation")
            );
        }

        #[test]
        fn test_enter_on_button_submits() {
            let mut app = new_app();
            fill_valid(&mut app);
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Tab);
            assert!(app.state.form.is_buttons_row_active());
            press(&mut app, KeyCode::Enter);
            let view = project(&app.state.form);
            assert_eq!(view.display(FieldName::LastName), Some("Adams"));
            assert_eq!(app.state.status_text(), Some("Submitted"));
        }

        #[test]
        fn test_status_stays_success_after_later_invalid_edit() {
            let mut app = new_app();
            fill_valid(&mut app);
            press_ctrl(&mut app, 's');
            press(&mut app, KeyCode::BackTab);
            for _ in 0..3 {
                press(&mut app, KeyCode::Backspace);
            }
            assert!(app.state.form.error_for(FieldName::FirstName).is_some());
            assert_eq!(
                app.state.status_message,
                Some(StatusMessage::info("Submitted"))
            );
        }

        #[test]
        fn test_rejected_submit_status_is_error() {
            let mut app = new_app();
            press_ctrl(&mut app, 's');
            assert!(app.state.status_message.as_ref().unwrap().is_error);
        }

        #[test]
        fn test_ctrl_r_resets_form() {
            let mut app = new_app();
            fill_valid(&mut app);
            press_ctrl(&mut app, 's');
            press_ctrl(&mut app, 'r');
            assert!(app.state.form.submission().is_none());
            assert!(app.state.status_message.is_none());
            assert_eq!(app.state.form.email.as_text(), "");
        }

        #[test]
        fn test_clear_on_submit_from_config() {
            let config = FormConfig {
                clear_on_submit: Some(true),
                ..Default::default()
            };
            let mut app = App::new(&config);
            fill_valid(&mut app);
            press_ctrl(&mut app, 's');
            assert_eq!(app.state.form.first_name.as_text(), "");
            assert_eq!(
                project(&app.state.form).display(FieldName::FirstName),
                Some("Rebecca")
            );
            assert_eq!(app.state.status_text(), Some("Submitted, form cleared"));
        }
    }
}
