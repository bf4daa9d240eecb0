//! Form domain layer
//!
//! Field values, validation rules, the contact form state machine and the
//! projection of that state into on-screen elements.

mod field;
mod form_state;
mod projection;
mod validation;

pub use field::{FieldHint, FieldName};
pub use form_state::{ContactForm, Form, FormEvent};
pub use projection::{project, Element, Projection};
