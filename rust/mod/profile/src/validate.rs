//! Local checks run before any request leaves the client.
//!
//! Pure functions: `(credential, form) -> Result<request, message>`.
//! An `Err` carries the message to show; nothing is sent.

use account_client::{PasswordChange, ProfileUpdate};

use crate::messages;
use crate::state::{PasswordForm, ProfileForm};

/// Minimum new password length, counted in UTF-16 code units like a
/// browser's `String.length`.
pub const MIN_PASSWORD_LEN: usize = 8;

/// A request body paired with the token that will authorize it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorized<T> {
    pub token: String,
    pub body: T,
}

fn require_token(token: Option<String>) -> Result<String, &'static str> {
    token
        .filter(|t| !t.is_empty())
        .ok_or(messages::NOT_AUTHENTICATED)
}

/// Check the profile form and shape the update body.
///
/// Fields are trimmed; the trimmed values are what gets sent.
pub fn prepare_profile_update(
    token: Option<String>,
    form: &ProfileForm,
) -> Result<Authorized<ProfileUpdate>, &'static str> {
    let token = require_token(token)?;

    let update = ProfileUpdate {
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        username: form.username.trim().to_string(),
        email: form.email.trim().to_string(),
    };

    if update.first_name.is_empty()
        || update.last_name.is_empty()
        || update.username.is_empty()
        || update.email.is_empty()
    {
        return Err(messages::ALL_FIELDS_REQUIRED);
    }

    Ok(Authorized {
        token,
        body: update,
    })
}

/// Check the password form and shape the change body.
///
/// Values are taken raw (no trimming). Checks run in order and the first
/// failure wins: all present, new equals confirm, new is long enough.
pub fn prepare_password_change(
    token: Option<String>,
    form: &PasswordForm,
) -> Result<Authorized<PasswordChange>, &'static str> {
    let token = require_token(token)?;

    if form.current_password.is_empty()
        || form.new_password.is_empty()
        || form.confirm_new_password.is_empty()
    {
        return Err(messages::ALL_FIELDS_REQUIRED);
    }
    if form.new_password != form.confirm_new_password {
        return Err(messages::PASSWORDS_DO_NOT_MATCH);
    }
    if form.new_password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(messages::PASSWORD_TOO_SHORT);
    }

    Ok(Authorized {
        token,
        body: PasswordChange {
            current_password: form.current_password.clone(),
            new_password: form.new_password.clone(),
            confirm_new_password: form.confirm_new_password.clone(),
        },
    })
}
