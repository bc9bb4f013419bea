//! The registration form and its submission state machine.

use tracing::{debug, info, warn};

use crate::entities::{RegistrationDraft, UserRole};
use crate::services::gateway::RegistrationGateway;
use crate::services::navigation::Navigator;
use crate::services::outcome::classify;
use crate::types::{RegisteredUser, RegistrationRequest, ValidationError};
use crate::utils::validation::validate_draft;

pub const REGISTRATION_CONFIRMATION: &str = "Registration successful! Please log in.";

/// Where a submit attempt currently stands.
///
/// `Validating`, `Invalid`, `Submitting` and `Failed` only last for the
/// duration of a `submit` call. Between calls the form is either `Idle` or,
/// after navigation, `Succeeded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A local check failed; nothing was sent.
    Invalid(ValidationError),
    /// The request was sent but rejected or could not complete.
    Failed(ValidationError),
    /// The account was created. Carries the parsed account when the service
    /// returned one.
    Succeeded(Option<RegisteredUser>),
}

/// Owns the registration draft and the single visible error.
pub struct FormState<G, N> {
    draft: RegistrationDraft,
    error: Option<ValidationError>,
    state: SubmissionState,
    registered: Option<RegisteredUser>,
    gateway: G,
    navigator: N,
    login_route: String,
}

impl<G, N> FormState<G, N>
where
    G: RegistrationGateway,
    N: Navigator,
{
    pub fn new(gateway: G, navigator: N, login_route: impl Into<String>) -> Self {
        Self {
            draft: RegistrationDraft::default(),
            error: None,
            state: SubmissionState::Idle,
            registered: None,
            gateway,
            navigator,
            login_route: login_route.into(),
        }
    }

    pub fn with_draft(mut self, draft: RegistrationDraft) -> Self {
        self.draft = draft;
        self
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.draft.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.draft.last_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.draft.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.draft.password = value.into();
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.draft.confirm_password = value.into();
    }

    pub fn set_role(&mut self, role: UserRole) {
        self.draft.role = role;
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn registered_user(&self) -> Option<&RegisteredUser> {
        self.registered.as_ref()
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    /// Validate the draft and, if it passes, send it to the authentication service.
    ///
    /// Validation completes before any request is issued, and a failed check
    /// sends nothing. The only suspension point is the gateway call. Once the
    /// form has succeeded and navigated away, further calls return the same
    /// success without contacting the service again.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state == SubmissionState::Succeeded {
            debug!("registration already completed, ignoring submit");
            return SubmitOutcome::Succeeded(self.registered.clone());
        }

        self.error = None;
        self.transition(SubmissionState::Validating);

        if let Err(error) = validate_draft(&self.draft) {
            self.transition(SubmissionState::Invalid);
            debug!(%error, "registration draft rejected locally");
            return SubmitOutcome::Invalid(self.settle(error));
        }

        let request = RegistrationRequest::from_draft(&self.draft);
        self.transition(SubmissionState::Submitting);

        let result = match self.gateway.register(&request).await {
            Ok(response) => classify(&response),
            Err(error) => {
                warn!(%error, "registration request did not complete");
                Err(ValidationError::from(error))
            }
        };

        match result {
            Ok(user) => {
                self.transition(SubmissionState::Succeeded);
                info!(user_id = ?user.as_ref().map(|user| user.id), "registration succeeded");
                self.registered = user.clone();
                self.navigator.confirm(REGISTRATION_CONFIRMATION);
                self.navigator.navigate(&self.login_route);
                SubmitOutcome::Succeeded(user)
            }
            Err(error) => {
                self.transition(SubmissionState::Failed);
                SubmitOutcome::Failed(self.settle(error))
            }
        }
    }

    /// Record the error and return to `Idle` so the user can try again.
    fn settle(&mut self, error: ValidationError) -> ValidationError {
        self.error = Some(error.clone());
        self.transition(SubmissionState::Idle);
        error
    }

    fn transition(&mut self, next: SubmissionState) {
        debug!(from = ?self.state, to = ?next, "registration state change");
        self.state = next;
    }
}
