//! Domain entities for the registration form.

pub mod draft;

pub use draft::{RegistrationDraft, UserRole};
