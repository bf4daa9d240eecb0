//! Per-field validation rules

use super::field::FieldName;
use email_address::{EmailAddress, Options};
use thiserror::Error;

/// Minimum number of characters in a first name
pub const FIRST_NAME_MIN_LEN: usize = 5;

/// Bare `local@domain` addresses only
fn email_options() -> Options {
    Options::default()
        .without_display_text()
        .without_domain_literal()
}

/// A rule violation on a single input's current value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is a required field")]
    Required(FieldName),
    #[error("{field} must have at least {min} characters.")]
    TooShort { field: FieldName, min: usize },
    #[error("email must be a valid email address.")]
    InvalidEmail,
}

impl ValidationError {
    pub fn field(&self) -> FieldName {
        match self {
            ValidationError::Required(field) | ValidationError::TooShort { field, .. } => *field,
            ValidationError::InvalidEmail => FieldName::Email,
        }
    }
}

/// Check one field's value against its rule
pub fn validate(field: FieldName, value: &str) -> Result<(), ValidationError> {
    match field {
        FieldName::FirstName => {
            if value.is_empty() {
                Err(ValidationError::Required(field))
            } else if value.chars().count() < FIRST_NAME_MIN_LEN {
                Err(ValidationError::TooShort {
                    field,
                    min: FIRST_NAME_MIN_LEN,
                })
            } else {
                Ok(())
            }
        }
        FieldName::LastName => {
            if value.is_empty() {
                Err(ValidationError::Required(field))
            } else {
                Ok(())
            }
        }
        FieldName::Email => {
            if EmailAddress::parse_with_options(value, email_options()).is_ok() {
                Ok(())
            } else {
                Err(ValidationError::InvalidEmail)
            }
        }
        FieldName::Message => Ok(()),
    }
}
