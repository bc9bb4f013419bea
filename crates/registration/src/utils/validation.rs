//! Input validation for the registration form.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::entities::RegistrationDraft;
use crate::types::ValidationError;

const INSTITUTIONAL_EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@mail\.uc\.edu$";

pub const MIN_PASSWORD_LENGTH: usize = 6;

static INSTITUTIONAL_EMAIL: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(INSTITUTIONAL_EMAIL_PATTERN).ok());

/// Check that an address belongs to the `mail.uc.edu` domain.
///
/// The domain must match exactly, including case. No trimming or other
/// normalisation happens here.
pub fn is_institutional_email(email: &str) -> bool {
    INSTITUTIONAL_EMAIL
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

/// Check that a password has at least one letter and one digit and is at least
/// [`MIN_PASSWORD_LENGTH`] characters long.
///
/// Any other characters may appear and count toward the length.
pub fn is_strong_password(password: &str) -> bool {
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    has_letter && has_digit && password.chars().count() >= MIN_PASSWORD_LENGTH
}

type DraftCheck = fn(&RegistrationDraft) -> Result<(), ValidationError>;

/// Submit-time checks, in the order they are reported.
const DRAFT_CHECKS: [DraftCheck; 4] = [
    require_all_fields,
    require_institutional_email,
    require_strong_password,
    require_matching_passwords,
];

/// Run every submit-time check and stop at the first failure.
pub fn validate_draft(draft: &RegistrationDraft) -> Result<(), ValidationError> {
    DRAFT_CHECKS.iter().try_for_each(|check| check(draft))
}

fn require_all_fields(draft: &RegistrationDraft) -> Result<(), ValidationError> {
    if draft
        .required_fields()
        .iter()
        .any(|value| value.trim().is_empty())
    {
        return Err(ValidationError::EmptyField);
    }
    Ok(())
}

fn require_institutional_email(draft: &RegistrationDraft) -> Result<(), ValidationError> {
    if !is_institutional_email(&draft.email) {
        return Err(ValidationError::InvalidEmailDomain);
    }
    Ok(())
}

fn require_strong_password(draft: &RegistrationDraft) -> Result<(), ValidationError> {
    if !is_strong_password(&draft.password) {
        return Err(ValidationError::WeakPassword);
    }
    Ok(())
}

fn require_matching_passwords(draft: &RegistrationDraft) -> Result<(), ValidationError> {
    if draft.password != draft.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}
