//! Form domain layer
//!
//! Type-safe field handling for the contact form.

mod contact_form;
mod field;

pub use contact_form::{ContactButton, ContactField, ContactForm, Form};
pub use field::FormField;
