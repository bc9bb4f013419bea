//! Which form fields the console asks for, and when.

use catalog_registration::{
    FormState, Navigator, RegistrationDraft, RegistrationGateway, ValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email (@mail.uc.edu)",
            Field::Password => "Password (input is visible)",
            Field::ConfirmPassword => "Confirm password (input is visible)",
        }
    }

    /// Secret fields never show their current value as a default.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }

    pub fn value(self, draft: &RegistrationDraft) -> &str {
        match self {
            Field::FirstName => draft.first_name.as_str(),
            Field::LastName => draft.last_name.as_str(),
            Field::Email => draft.email.as_str(),
            Field::Password => draft.password.as_str(),
            Field::ConfirmPassword => draft.confirm_password.as_str(),
        }
    }

    pub fn apply<G, N>(self, form: &mut FormState<G, N>, value: String)
    where
        G: RegistrationGateway,
        N: Navigator,
    {
        match self {
            Field::FirstName => form.set_first_name(value),
            Field::LastName => form.set_last_name(value),
            Field::Email => form.set_email(value),
            Field::Password => form.set_password(value),
            Field::ConfirmPassword => form.set_confirm_password(value),
        }
    }
}

/// Fields still missing before the first submit.
pub fn missing_fields(draft: &RegistrationDraft) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|field| field.value(draft).trim().is_empty())
        .collect()
}

/// Fields to ask for again after a local check failed.
///
/// Server and network failures return nothing: the draft itself may be fine.
pub fn fields_to_revisit(error: &ValidationError, draft: &RegistrationDraft) -> Vec<Field> {
    match error {
        ValidationError::EmptyField => missing_fields(draft),
        ValidationError::InvalidEmailDomain => vec![Field::Email],
        ValidationError::WeakPassword | ValidationError::PasswordMismatch => {
            vec![Field::Password, Field::ConfirmPassword]
        }
        ValidationError::ServerRejected(_) | ValidationError::NetworkFailure => Vec::new(),
    }
}

/// What to do after the service rejected the draft or could not be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryChoice {
    Resend,
    Edit,
    Quit,
}

impl RetryChoice {
    /// Read a retry answer. An empty answer resends.
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "" => Some(RetryChoice::Resend),
            "edit" | "e" => Some(RetryChoice::Edit),
            "q" | "quit" => Some(RetryChoice::Quit),
            _ => None,
        }
    }
}
