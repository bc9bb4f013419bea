//! Shared types for the registration workflow.

pub mod errors;
pub mod requests;
pub mod responses;

pub use errors::{TransportError, UnknownRole, ValidationError, GENERIC_SERVER_MESSAGE};
pub use requests::RegistrationRequest;
pub use responses::{ErrorBody, RegisteredUser};
