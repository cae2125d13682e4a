//! `account password` commands.

use std::process::ExitCode;

use anyhow::Result;

use account_profile::{EditPasswordFieldReq, Page, PasswordField, SubmitPasswordReq};

use super::{exit_code, open_app};
use crate::config::ClientConfig;

const PASSWORD_PAGE: Page = Page {
    profile_form: false,
    password_form: true,
};

/// Fill the password form and submit it. Checks run in the controller,
/// so mismatches and short passwords are reported like any other message.
pub async fn change(
    config: &ClientConfig,
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<ExitCode> {
    let app = open_app(config)?;
    app.mount(PASSWORD_PAGE).await;

    for (field, value) in [
        (PasswordField::Current, current),
        (PasswordField::New, new),
        (PasswordField::Confirm, confirm),
    ] {
        app.emit(EditPasswordFieldReq::new(field, value)).await;
    }
    let outcome = app.emit(SubmitPasswordReq).await;
    Ok(exit_code(outcome.as_ref()))
}
