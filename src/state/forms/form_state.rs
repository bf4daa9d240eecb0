//! Contact form state machine

use super::field::{FieldName, FormField};
use super::validation::{validate, ValidationError};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Discrete inputs the form reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    #[allow(dead_code)]
    InputChanged { field: FieldName, value: String },
    SubmitRequested,
    Reset,
}

/// Values captured at the instant a submit passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    pub fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{failing} field(s) failed validation")]
    Invalid { failing: usize },
}

/// Index of the submit button in the focus ring
pub const SUBMIT_BUTTON_INDEX: usize = 4;

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    errors: BTreeMap<FieldName, ValidationError>,
    submission: Option<Submission>,
    clear_on_submit: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::with_clear_on_submit(false)
    }

    /// Create a form that empties its inputs after each accepted submit
    pub fn with_clear_on_submit(clear_on_submit: bool) -> Self {
        Self {
            first_name: FormField::with_placeholder(FieldName::FirstName, "Edd"),
            last_name: FormField::with_placeholder(FieldName::LastName, "Burke"),
            email: FormField::with_placeholder(FieldName::Email, "bluebill1049@hotmail.com"),
            message: FormField::with_label(FieldName::Message, "Message", true),
            active_field_index: 0,
            errors: BTreeMap::new(),
            submission: None,
            clear_on_submit,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Message => &mut self.message,
        }
    }

    /// Active errors in field order
    pub fn errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.values()
    }

    #[allow(dead_code)]
    pub fn error_for(&self, field: FieldName) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    pub fn clears_on_submit(&self) -> bool {
        self.clear_on_submit
    }

    /// Returns true if the submit button currently has focus
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    /// Apply one event to the form
    pub fn apply(&mut self, event: FormEvent) -> Result<(), FormError> {
        match event {
            FormEvent::InputChanged { field, value } => {
                self.field_mut(field).set_text(value);
                self.revalidate(field);
                Ok(())
            }
            FormEvent::SubmitRequested => self.submit().map(|_| ()),
            FormEvent::Reset => {
                *self = Self::with_clear_on_submit(self.clear_on_submit);
                Ok(())
            }
        }
    }

    /// Type a character into the active input
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.get_active_field_mut() else {
            return;
        };
        field.push_char(c);
        let name = field.name;
        self.revalidate(name);
    }

    /// Delete the last character of the active input
    pub fn backspace(&mut self) {
        let Some(field) = self.get_active_field_mut() else {
            return;
        };
        field.pop_char();
        let name = field.name;
        self.revalidate(name);
    }

    fn revalidate(&mut self, field: FieldName) {
        match validate(field, self.field(field).as_text()) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(err) => {
                tracing::debug!(%field, error = %err, "field failed validation");
                self.errors.insert(field, err);
            }
        }
    }

    /// Validate every required field and capture a submission if all pass
    pub fn submit(&mut self) -> Result<&Submission, FormError> {
        let errors: BTreeMap<_, _> = FieldName::REQUIRED
            .into_iter()
            .filter_map(|field| {
                validate(field, self.field(field).as_text())
                    .err()
                    .map(|err| (field, err))
            })
            .collect();

        if !errors.is_empty() {
            let failing = errors.len();
            self.errors = errors;
            tracing::info!(failing, "submit rejected");
            return Err(FormError::Invalid { failing });
        }

        self.errors.clear();
        let snapshot = Submission {
            first_name: self.first_name.as_text().to_string(),
            last_name: self.last_name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            message: self.message.as_text().to_string(),
        };
        match serde_json::to_string(&snapshot) {
            Ok(json) => tracing::info!(submission = %json, "submit accepted"),
            Err(e) => tracing::warn!("failed to serialize submission: {e}"),
        }

        if self.clear_on_submit {
            for field in FieldName::ALL {
                self.field_mut(field).clear();
            }
        }

        Ok(&*self.submission.insert(snapshot))
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // four inputs, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.first_name),
            1 => Some(&mut self.last_name),
            2 => Some(&mut self.email),
            3 => Some(&mut self.message),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.first_name),
            1 => Some(&self.last_name),
            2 => Some(&self.email),
            3 => Some(&self.message),
            // Index 4 is the submit button, no FormField for it
            _ => None,
        }
    }
}
