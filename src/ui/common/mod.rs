//! Common reusable UI components
//!
//! Form inputs shared by the contact form and anything else that collects
//! visitor input.

pub mod form;

pub use form::{FormField, SelectField, TextAreaField};
