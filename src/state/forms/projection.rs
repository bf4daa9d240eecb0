//! Projection of form state into the elements shown on screen
//!
//! Drawing code only consumes a [`Projection`]; it never reads the form
//! directly. Queries on the projection locate elements the same way a user
//! does: by header text, by an input's placeholder or label, by the error
//! list, and by the per-field submitted-value displays.

use super::field::{FieldHint, FieldName};
use super::form_state::{ContactForm, Form};

pub const HEADER_TEXT: &str = "Contact Form";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Header(&'static str),
    Input {
        field: FieldName,
        hint: FieldHint,
        value: String,
        is_active: bool,
        is_multiline: bool,
    },
    Error {
        field: FieldName,
        message: String,
    },
    SubmitButton {
        is_active: bool,
    },
    /// A submitted value, present only after a successful submit
    Display {
        field: FieldName,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub elements: Vec<Element>,
}

/// Build the element list for the current form state
pub fn project(form: &ContactForm) -> Projection {
    let mut elements = vec![Element::Header(HEADER_TEXT)];

    for (index, name) in FieldName::ALL.into_iter().enumerate() {
        let field = form.field(name);
        elements.push(Element::Input {
            field: name,
            hint: field.hint.clone(),
            value: field.as_text().to_string(),
            is_active: form.active_field() == index,
            is_multiline: field.is_multiline,
        });
    }

    elements.extend(form.errors().map(|err| Element::Error {
        field: err.field(),
        message: err.to_string(),
    }));

    elements.push(Element::SubmitButton {
        is_active: form.is_buttons_row_active(),
    });

    if let Some(submission) = form.submission() {
        for name in FieldName::ALL {
            let value = submission.value(name);
            if name == FieldName::Message && value.is_empty() {
                continue;
            }
            elements.push(Element::Display {
                field: name,
                value: value.to_string(),
            });
        }
    }

    Projection { elements }
}

impl Projection {
    pub fn header(&self) -> Option<&str> {
        self.elements.iter().find_map(|e| match e {
            Element::Header(text) => Some(*text),
            _ => None,
        })
    }

    /// Find the input identified by a placeholder or label
    #[allow(dead_code)]
    pub fn find_input(&self, hint_text: &str) -> Option<FieldName> {
        self.elements.iter().find_map(|e| match e {
            Element::Input { field, hint, .. } if hint.text() == hint_text => Some(*field),
            _ => None,
        })
    }

    /// Error messages in field order
    #[allow(dead_code)]
    pub fn errors(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Error { message, .. } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn error_for(&self, field: FieldName) -> Option<&str> {
        self.elements.iter().find_map(|e| match e {
            Element::Error { field: f, message } if *f == field => Some(message.as_str()),
            _ => None,
        })
    }

    #[allow(dead_code)]
    pub fn display(&self, field: FieldName) -> Option<&str> {
        self.elements.iter().find_map(|e| match e {
            Element::Display { field: f, value } if *f == field => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn displays(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.elements.iter().filter_map(|e| match e {
            Element::Display { field, value } => Some((*field, value.as_str())),
            _ => None,
        })
    }
}
