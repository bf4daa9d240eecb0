//! Form field value objects

use std::fmt;

/// The four inputs of the contact form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Message,
    ];

    /// Fields checked on submit
    pub const REQUIRED: [FieldName; 3] =
        [FieldName::FirstName, FieldName::LastName, FieldName::Email];

    /// Key used in error messages
    pub fn key(self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::Message => "message",
        }
    }

    /// Human-readable caption for the submitted-values panel
    pub fn caption(self) -> &'static str {
        match self {
            FieldName::FirstName => "First Name",
            FieldName::LastName => "Last Name",
            FieldName::Email => "Email",
            FieldName::Message => "Message",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How an input is identified on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldHint {
    Placeholder(&'static str),
    Label(&'static str),
}

impl FieldHint {
    pub fn text(&self) -> &'static str {
        match self {
            FieldHint::Placeholder(s) | FieldHint::Label(s) => s,
        }
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub hint: FieldHint,
    pub value: String,
    pub is_multiline: bool,
}

impl FormField {
    /// Create an empty single-line field identified by a placeholder
    pub fn with_placeholder(name: FieldName, placeholder: &'static str) -> Self {
        Self {
            name,
            hint: FieldHint::Placeholder(placeholder),
            value: String::new(),
            is_multiline: false,
        }
    }

    /// Create an empty field identified by a label
    pub fn with_label(name: FieldName, label: &'static str, is_multiline: bool) -> Self {
        Self {
            name,
            hint: FieldHint::Label(label),
            value: String::new(),
            is_multiline,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
