//! Common reusable UI components

pub mod form;
pub mod message;

pub use form::{InputField, TextAreaField};
pub use message::{ErrorMessage, SuccessMessage};
