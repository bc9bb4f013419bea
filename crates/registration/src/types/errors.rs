//! Error types for the registration workflow.

use thiserror::Error;

/// Shown when the authentication service rejects a request without a usable message.
pub const GENERIC_SERVER_MESSAGE: &str = "An error occurred";

/// The single error currently shown on the registration form.
///
/// `Display` renders the exact message presented to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    EmptyField,

    #[error("Email must be a valid @mail.uc.edu email")]
    InvalidEmailDomain,

    #[error("Password must be at least 6 characters long and contain both letters and numbers")]
    WeakPassword,

    #[error("Password does not match.")]
    PasswordMismatch,

    #[error("{0}")]
    ServerRejected(String),

    #[error("Unable to reach the authentication service. Please try again.")]
    NetworkFailure,
}

impl ValidationError {
    /// True for errors detected before any request is sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ValidationError::EmptyField
                | ValidationError::InvalidEmailDomain
                | ValidationError::WeakPassword
                | ValidationError::PasswordMismatch
        )
    }
}

/// Failures that prevent the HTTP exchange from completing.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to authentication service timed out")]
    Timeout,

    #[error("could not connect to authentication service: {0}")]
    Connect(String),

    #[error("authentication service request failed: {0}")]
    Request(#[source] reqwest::Error),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Request(err)
        }
    }
}

impl From<TransportError> for ValidationError {
    fn from(_: TransportError) -> Self {
        ValidationError::NetworkFailure
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown user role: {0}")]
pub struct UnknownRole(pub String);
