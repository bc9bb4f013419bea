//! Registration services.

pub mod form;
pub mod gateway;
pub mod navigation;
pub mod outcome;

pub use form::{FormState, SubmissionState, SubmitOutcome, REGISTRATION_CONFIRMATION};
pub use gateway::{GatewayResponse, HttpRegistrationGateway, RegistrationGateway};
pub use navigation::Navigator;
pub use outcome::classify;
