//! Interpretation of API responses into user-facing outcomes.
//!
//! Pure functions over `Result<ApiResponse, ApiError>`; no I/O.

use account_client::{ApiError, ApiResponse, UserProfile};

use crate::messages;
use crate::state::ProfileForm;

/// Final result of one submission, carrying the message to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded(String),
    Rejected(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Succeeded(m) | Outcome::Rejected(m) => m,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded(_))
    }
}

/// Message for a failed response: the server's `detail`, else `fallback`.
/// A body that cannot be read as JSON gives the unexpected-error message.
fn rejection(resp: &ApiResponse, fallback: &str) -> String {
    match resp.detail() {
        Ok(Some(detail)) => detail,
        Ok(None) => fallback.to_string(),
        Err(_) => messages::UNEXPECTED_ERROR.to_string(),
    }
}

/// `PUT /users/me`: any 2xx succeeds.
pub fn profile_update(result: &Result<ApiResponse, ApiError>) -> Outcome {
    match result {
        Ok(resp) if resp.is_success() => Outcome::Succeeded(messages::PROFILE_UPDATED.to_string()),
        Ok(resp) => Outcome::Rejected(rejection(resp, messages::PROFILE_UPDATE_FAILED)),
        Err(_) => Outcome::Rejected(messages::UNEXPECTED_ERROR.to_string()),
    }
}

/// `POST /users/me/change-password`: only 204 succeeds, other 2xx included.
pub fn password_change(result: &Result<ApiResponse, ApiError>) -> Outcome {
    match result {
        Ok(resp) if resp.status == 204 => {
            Outcome::Succeeded(messages::PASSWORD_CHANGED.to_string())
        }
        Ok(resp) => Outcome::Rejected(rejection(resp, messages::PASSWORD_CHANGE_FAILED)),
        Err(_) => Outcome::Rejected(messages::UNEXPECTED_ERROR.to_string()),
    }
}

/// `GET /users/me`: decode the body into form values.
pub fn loaded_profile(resp: &ApiResponse) -> Result<ProfileForm, ApiError> {
    let user: UserProfile = resp.parse()?;
    Ok(ProfileForm::from_user(user))
}
