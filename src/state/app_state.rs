//! Application state definitions

use super::forms::ContactForm;
use crate::config::FormConfig;

/// Outcome of the last submit, shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: ContactForm,
    pub status_message: Option<StatusMessage>,
}

impl AppState {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            form: ContactForm::with_clear_on_submit(config.clear_on_submit()),
            status_message: None,
        }
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status_message.as_ref().map(|m| m.text.as_str())
    }
}
