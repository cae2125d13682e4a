//! `account profile` commands.

use std::process::ExitCode;

use anyhow::Result;

use account_profile::{
    EditProfileFieldReq, Page, ProfileField, ProfileForm, ProfileState, SubmitProfileReq,
};

use super::{exit_code, open_app};
use crate::config::ClientConfig;

const PROFILE_PAGE: Page = Page {
    profile_form: true,
    password_form: false,
};

/// Values given on the command line; `None` keeps the loaded value.
#[derive(Debug, Default)]
pub struct Edits {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
}

impl Edits {
    fn into_requests(self) -> Vec<EditProfileFieldReq> {
        [
            (ProfileField::FirstName, self.first_name),
            (ProfileField::LastName, self.last_name),
            (ProfileField::Username, self.username),
            (ProfileField::Email, self.email),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| EditProfileFieldReq::new(field, v)))
        .collect()
    }
}

/// Load the profile and print it.
pub async fn show(config: &ClientConfig, json_output: bool) -> Result<ExitCode> {
    let app = open_app(config)?;
    app.mount(PROFILE_PAGE).await;

    let Some(form) = loaded_form(app.profile()) else {
        eprintln!("No profile loaded. Check `account token status` and the server URL.");
        return Ok(ExitCode::FAILURE);
    };
    print_form(&form, json_output)?;
    Ok(ExitCode::SUCCESS)
}

/// Load the profile, apply edits, submit.
pub async fn update(config: &ClientConfig, edits: Edits) -> Result<ExitCode> {
    let app = open_app(config)?;
    app.mount(PROFILE_PAGE).await;

    for edit in edits.into_requests() {
        app.emit(edit).await;
    }
    let outcome = app.emit(SubmitProfileReq).await;
    Ok(exit_code(outcome.as_ref()))
}

/// The form, if a load filled it. Blank values still count as loaded.
fn loaded_form(state: ProfileState) -> Option<ProfileForm> {
    state.loaded.then_some(state.form)
}

fn print_form(form: &ProfileForm, json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(form)?);
        return Ok(());
    }
    for field in ProfileField::ALL {
        println!("{:<12} {}", format!("{}:", field.id()), form.get(field));
    }
    Ok(())
}
