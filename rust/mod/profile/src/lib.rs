//! Profile page controller.
//!
//! Drives two forms against the account API: the profile form (load,
//! edit, update) and the password form (edit, change). Rust owns the form
//! state and every decision; a front end only renders [`ProfileState`] and
//! [`PasswordState`] and forwards user input as requests.
//!
//! # Layout
//!
//! - `state`: per-form state and the element ids front ends bind to
//! - `request`: typed request payloads, each with a `PATH`
//! - `validate` / `outcome`: pure decision functions (no I/O)
//! - `store`: form state store with change subscriptions
//! - `handlers`: async handlers sequencing token → check → HTTP → state
//! - `app`: the facade a front end mounts and emits requests into
//!
//! # Example
//!
//! ```ignore
//! let bff = ProfileBff::new(api, tokens);
//! let app = ProfileApp::new(bff);
//!
//! app.subscribe(Some(FormId::Profile), |change| render(change));
//! app.mount(Page::full()).await; // loads the profile
//!
//! app.emit(EditProfileFieldReq::new(ProfileField::Email, "a@b.c")).await;
//! app.emit(SubmitProfileReq).await;
//! ```

pub mod app;
pub mod handlers;
pub mod messages;
pub mod outcome;
pub mod request;
pub mod state;
pub mod store;
pub mod validate;

#[cfg(test)]
mod testing;

pub use app::{Page, ProfileApp};
pub use handlers::ProfileBff;
pub use outcome::Outcome;
pub use request::{
    EditPasswordFieldReq, EditProfileFieldReq, LoadProfileReq, Request, SubmitPasswordReq,
    SubmitProfileReq,
};
pub use state::{
    FormId, FormPhase, PasswordField, PasswordForm, PasswordState, ProfileField, ProfileForm,
    ProfileState,
};
pub use store::{FormChange, FormStore, SubmitGuard, SubscriptionId};
