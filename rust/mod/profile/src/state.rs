//! Form state: stored at `profile/state` and `password/state`.

use std::fmt;
use std::str::FromStr;

use account_client::UserProfile;
use serde::{Deserialize, Serialize};

// ── Forms ───────────────────────────────────────────────────────────

/// The two forms on the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormId {
    Profile,
    Password,
}

impl FormId {
    /// Element id of the form itself.
    pub fn element_id(self) -> &'static str {
        match self {
            FormId::Profile => "profile-form",
            FormId::Password => "password-form",
        }
    }

    /// Element id of the form's status message.
    pub fn message_id(self) -> &'static str {
        match self {
            FormId::Profile => "profile-message",
            FormId::Password => "password-message",
        }
    }

    /// State path of the form.
    pub fn path(self) -> &'static str {
        match self {
            FormId::Profile => ProfileState::PATH,
            FormId::Password => PasswordState::PATH,
        }
    }
}

/// Whether a form has a request in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// Returned when an element id names no field of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

// ── Profile form ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    FirstName,
    LastName,
    Username,
    Email,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Username,
        ProfileField::Email,
    ];

    /// Element id, which is also the JSON key on the wire.
    pub fn id(self) -> &'static str {
        match self {
            ProfileField::FirstName => "first_name",
            ProfileField::LastName => "last_name",
            ProfileField::Username => "username",
            ProfileField::Email => "email",
        }
    }
}

impl FromStr for ProfileField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileField::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Profile form field values, exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
}

impl ProfileForm {
    /// Populate from a server profile; missing fields become empty.
    pub fn from_user(user: UserProfile) -> Self {
        Self {
            first_name: user.first_name.unwrap_or_default(),
            last_name: user.last_name.unwrap_or_default(),
            username: user.username.unwrap_or_default(),
            email: user.email.unwrap_or_default(),
        }
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Username => &self.username,
            ProfileField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Username => &mut self.username,
            ProfileField::Email => &mut self.email,
        };
        *slot = value.into();
    }
}

/// Profile form plus its status message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub form: ProfileForm,
    pub message: String,
    pub phase: FormPhase,
    /// True once a load has filled the form from the server.
    pub loaded: bool,
}

impl ProfileState {
    pub const PATH: &'static str = "profile/state";
}

// ── Password form ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordField {
    Current,
    New,
    Confirm,
}

impl PasswordField {
    pub const ALL: [PasswordField; 3] = [
        PasswordField::Current,
        PasswordField::New,
        PasswordField::Confirm,
    ];

    pub fn id(self) -> &'static str {
        match self {
            PasswordField::Current => "current_password",
            PasswordField::New => "new_password",
            PasswordField::Confirm => "confirm_new_password",
        }
    }
}

impl FromStr for PasswordField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PasswordField::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Password form values. Write-only: never filled from the server.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

impl PasswordForm {
    pub fn set(&mut self, field: PasswordField, value: impl Into<String>) {
        let slot = match field {
            PasswordField::Current => &mut self.current_password,
            PasswordField::New => &mut self.new_password,
            PasswordField::Confirm => &mut self.confirm_new_password,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        self.current_password.is_empty()
            && self.new_password.is_empty()
            && self.confirm_new_password.is_empty()
    }
}

impl fmt::Debug for PasswordForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |s: &String| if s.is_empty() { "" } else { "***" };
        f.debug_struct("PasswordForm")
            .field("current_password", &mask(&self.current_password))
            .field("new_password", &mask(&self.new_password))
            .field("confirm_new_password", &mask(&self.confirm_new_password))
            .finish()
    }
}

/// Password form plus its status message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordState {
    pub form: PasswordForm,
    pub message: String,
    pub phase: FormPhase,
}

impl PasswordState {
    pub const PATH: &'static str = "password/state";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_ids_match_page_contract() {
        let ids: Vec<&str> = ProfileField::ALL.iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec!["first_name", "last_name", "username", "email"]);

        let ids: Vec<&str> = PasswordField::ALL.iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec!["current_password", "new_password", "confirm_new_password"]);

        assert_eq!(FormId::Profile.element_id(), "profile-form");
        assert_eq!(FormId::Profile.message_id(), "profile-message");
        assert_eq!(FormId::Password.element_id(), "password-form");
        assert_eq!(FormId::Password.message_id(), "password-message");
    }

    #[test]
    fn field_parse() {
        assert_eq!("email".parse::<ProfileField>(), Ok(ProfileField::Email));
        assert_eq!("new_password".parse::<PasswordField>(), Ok(PasswordField::New));
        assert_eq!(
            "password".parse::<PasswordField>(),
            Err(UnknownField("password".into()))
        );
    }

    #[test]
    fn from_user_fills_missing_with_empty() {
        let form = ProfileForm::from_user(UserProfile {
            first_name: Some("Ada".into()),
            last_name: None,
            username: Some("ada".into()),
            email: None,
        });
        assert_eq!(form.first_name, "Ada");
        assert_eq!(form.last_name, "");
        assert_eq!(form.get(ProfileField::Username), "ada");
        assert_eq!(form.email, "");
    }

    #[test]
    fn password_form_debug_masks_values() {
        let mut form = PasswordForm::default();
        form.set(PasswordField::New, "sekrit-value");
        let rendered = format!("{:?}", form);
        assert!(!rendered.contains("sekrit-value"));
        assert!(!form.is_empty());
    }
}
