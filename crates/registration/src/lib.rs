//! # Catalog Registration Crate
//!
//! Self-service account registration for the library catalog front end. The
//! crate owns the in-progress form, validates it locally, and submits it to
//! the external authentication service.
//!
//! ## Architecture
//!
//! - **Entities**: the editable draft and the account role
//! - **Types**: wire requests, responses, and error types
//! - **Utils**: pure field validators
//! - **Services**: the HTTP gateway, response classification, navigation hooks,
//!   and the `FormState` submission state machine
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_registration::{FormState, HttpRegistrationGateway, SubmitOutcome};
//!
//! let gateway = HttpRegistrationGateway::new(&config.auth_service)?;
//! let mut form = FormState::new(gateway, navigator, "/login");
//! form.set_email("jdoe@mail.uc.edu");
//! match form.submit().await {
//!     SubmitOutcome::Succeeded(_) => {}
//!     SubmitOutcome::Invalid(error) | SubmitOutcome::Failed(error) => eprintln!("{error}"),
//! }
//! ```

pub mod entities;
pub mod services;
pub mod types;
pub mod utils;

pub use entities::{RegistrationDraft, UserRole};
pub use services::{
    classify, FormState, GatewayResponse, HttpRegistrationGateway, Navigator,
    RegistrationGateway, SubmissionState, SubmitOutcome, REGISTRATION_CONFIRMATION,
};
pub use types::{
    RegisteredUser, RegistrationRequest, TransportError, UnknownRole, ValidationError,
    GENERIC_SERVER_MESSAGE,
};
pub use utils::validation::{is_institutional_email, is_strong_password, validate_draft};
