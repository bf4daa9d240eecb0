//! Form rendering module
//!
//! - `field_renderer`: input box and inline error drawing
//! - `contact_form`: the contact form and its submitted-values panel

mod contact_form;
mod field_renderer;

pub use contact_form::draw as draw_contact_form;
