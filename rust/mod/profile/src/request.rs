//! Request definitions.
//!
//! Each struct is a typed request payload with a `PATH` const. Front ends
//! emit them into [`crate::ProfileApp`]; user input travels as edit requests.

use crate::state::{FormId, PasswordField, ProfileField};

/// Fetch the current user and fill the profile form.
#[derive(Debug, Clone)]
pub struct LoadProfileReq;

impl LoadProfileReq {
    pub const PATH: &'static str = "profile/load";
}

/// Submit the profile form.
#[derive(Debug, Clone)]
pub struct SubmitProfileReq;

impl SubmitProfileReq {
    pub const PATH: &'static str = "profile/submit";
}

/// Submit the password form.
#[derive(Debug, Clone)]
pub struct SubmitPasswordReq;

impl SubmitPasswordReq {
    pub const PATH: &'static str = "password/submit";
}

/// Set one profile field.
#[derive(Debug, Clone)]
pub struct EditProfileFieldReq {
    pub field: ProfileField,
    pub value: String,
}

impl EditProfileFieldReq {
    pub const PATH: &'static str = "profile/edit";

    pub fn new(field: ProfileField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Set one password field.
#[derive(Clone)]
pub struct EditPasswordFieldReq {
    pub field: PasswordField,
    pub value: String,
}

impl EditPasswordFieldReq {
    pub const PATH: &'static str = "password/edit";

    pub fn new(field: PasswordField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

impl std::fmt::Debug for EditPasswordFieldReq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditPasswordFieldReq")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

/// Any request the controller handles.
#[derive(Debug, Clone)]
pub enum Request {
    LoadProfile(LoadProfileReq),
    SubmitProfile(SubmitProfileReq),
    SubmitPassword(SubmitPasswordReq),
    EditProfile(EditProfileFieldReq),
    EditPassword(EditPasswordFieldReq),
}

impl Request {
    pub fn path(&self) -> &'static str {
        match self {
            Request::LoadProfile(_) => LoadProfileReq::PATH,
            Request::SubmitProfile(_) => SubmitProfileReq::PATH,
            Request::SubmitPassword(_) => SubmitPasswordReq::PATH,
            Request::EditProfile(_) => EditProfileFieldReq::PATH,
            Request::EditPassword(_) => EditPasswordFieldReq::PATH,
        }
    }

    /// The form whose handlers serve this request.
    pub fn form(&self) -> FormId {
        match self {
            Request::LoadProfile(_) | Request::SubmitProfile(_) | Request::EditProfile(_) => {
                FormId::Profile
            }
            Request::SubmitPassword(_) | Request::EditPassword(_) => FormId::Password,
        }
    }
}

macro_rules! impl_into_request {
    ($($req:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$req> for Request {
                fn from(req: $req) -> Self {
                    Request::$variant(req)
                }
            }
        )*
    };
}

impl_into_request!(
    LoadProfileReq => LoadProfile,
    SubmitProfileReq => SubmitProfile,
    SubmitPasswordReq => SubmitPassword,
    EditProfileFieldReq => EditProfile,
    EditPasswordFieldReq => EditPassword,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_and_forms() {
        let req: Request = SubmitPasswordReq.into();
        assert_eq!(req.path(), "password/submit");
        assert_eq!(req.form(), FormId::Password);

        let req: Request = EditProfileFieldReq::new(ProfileField::Email, "x@y.z").into();
        assert_eq!(req.path(), "profile/edit");
        assert_eq!(req.form(), FormId::Profile);

        assert_eq!(Request::from(LoadProfileReq).form(), FormId::Profile);
    }

    #[test]
    fn password_edit_debug_omits_value() {
        let req = EditPasswordFieldReq::new(PasswordField::Current, "hunter22");
        assert!(!format!("{:?}", req).contains("hunter22"));
    }
}
