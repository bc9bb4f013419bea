//! Classification of completed responses from the authentication service.

use tracing::{debug, warn};

use crate::services::gateway::GatewayResponse;
use crate::types::{ErrorBody, RegisteredUser, ValidationError, GENERIC_SERVER_MESSAGE};

/// Turn a completed exchange into either the created account or a rejection.
///
/// A 2xx status always succeeds. The body is parsed on a best-effort basis
/// and only feeds logging. Any other status becomes `ServerRejected`, carrying
/// the body's `message` verbatim or the generic fallback.
pub fn classify(response: &GatewayResponse) -> Result<Option<RegisteredUser>, ValidationError> {
    if response.is_success() {
        let user = serde_json::from_str::<RegisteredUser>(&response.body)
            .map_err(|error| {
                debug!(status = response.status, %error, "registration success body not recognised");
            })
            .ok();
        return Ok(user);
    }

    let message = rejection_message(&response.body);
    warn!(status = response.status, %message, "registration rejected by authentication service");
    Err(ValidationError::ServerRejected(message))
}

fn rejection_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| GENERIC_SERVER_MESSAGE.to_string())
}
