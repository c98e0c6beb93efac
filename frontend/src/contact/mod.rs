//! Project inquiry form: validation, submission and the relay it posts to.

pub mod controller;
pub mod field;
pub mod form;
pub mod relay;
pub mod submission;
pub mod validation;

pub use form::ContactForm;
