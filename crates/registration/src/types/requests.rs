//! Request bodies sent to the authentication service.

use std::fmt;

use serde::Serialize;

use crate::entities::RegistrationDraft;

/// Body of `POST /auth/register`.
///
/// Built fresh for every submit attempt and never changed afterwards, so the
/// fields are only readable through accessors.
#[derive(Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    user_type_id: i64,
}

impl RegistrationRequest {
    pub fn from_draft(draft: &RegistrationDraft) -> Self {
        Self {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            password: draft.password.clone(),
            user_type_id: draft.role.code(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn user_type_id(&self) -> i64 {
        self.user_type_id
    }
}

impl From<&RegistrationDraft> for RegistrationRequest {
    fn from(draft: &RegistrationDraft) -> Self {
        Self::from_draft(draft)
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("user_type_id", &self.user_type_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::UserRole;
    use serde_json::json;

    fn draft(role: UserRole) -> RegistrationDraft {
        RegistrationDraft {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jdoe@mail.uc.edu".into(),
            password: "abc123".into(),
            confirm_password: "abc123".into(),
            role,
        }
    }

    #[test]
    fn serializes_camel_case_body_with_role_code() {
        let request = RegistrationRequest::from_draft(&draft(UserRole::Admin));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "jdoe@mail.uc.edu",
                "password": "abc123",
                "userTypeId": 1
            })
        );
    }

    #[test]
    fn role_name_never_reaches_the_wire() {
        let request = RegistrationRequest::from(&draft(UserRole::User));
        let body = serde_json::to_string(&request).unwrap();

        assert_eq!(request.user_type_id(), 2);
        assert!(!body.contains("\"role\""));
        assert!(!body.contains("confirm"));
    }

    #[test]
    fn untrimmed_values_are_sent_as_entered() {
        let mut input = draft(UserRole::User);
        input.first_name = "  Jane ".into();
        let request = RegistrationRequest::from_draft(&input);
        assert_eq!(request.first_name(), "  Jane ");
    }
}
