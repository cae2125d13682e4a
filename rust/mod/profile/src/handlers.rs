//! Handler implementations.
//!
//! Each handler sequences: read token → pure check → HTTP call → pure
//! interpretation → state write. Decisions live in `validate` and
//! `outcome`; nothing here inspects field values or status codes.

use std::sync::Arc;

use account_client::{AccountApi, TokenSource};
use tracing::{debug, warn};

use crate::outcome::{self, Outcome};
use crate::request::{EditPasswordFieldReq, EditProfileFieldReq};
use crate::state::{FormId, FormPhase, PasswordForm};
use crate::store::FormStore;
use crate::validate;

/// Backend context for the profile page handlers.
pub struct ProfileBff {
    api: Arc<dyn AccountApi>,
    tokens: Arc<dyn TokenSource>,
}

impl ProfileBff {
    pub fn new(api: Arc<dyn AccountApi>, tokens: Arc<dyn TokenSource>) -> Self {
        Self { api, tokens }
    }

    /// Current session token. Read fresh for every action.
    async fn token(&self) -> Option<String> {
        match self.tokens.token().await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "token read failed, treating session as absent");
                None
            }
        }
    }

    /// Handle `profile/load`.
    ///
    /// Without a token this is a no-op. Failures leave the form and the
    /// message untouched and are only logged.
    pub async fn handle_load_profile(&self, store: &FormStore) {
        let Some(token) = self.token().await else {
            debug!("no session token, profile load skipped");
            return;
        };

        let loaded = match self.api.get_me(&token).await {
            Ok(resp) => outcome::loaded_profile(&resp),
            Err(e) => Err(e),
        };

        match loaded {
            Ok(form) => store.update_profile(|s| {
                s.form = form;
                s.loaded = true;
            }),
            Err(e) => warn!(error = %e, "profile load failed"),
        }
    }

    /// Handle `profile/submit`.
    ///
    /// Returns `None` when dropped because a submission is in flight.
    pub async fn handle_submit_profile(&self, store: &FormStore) -> Option<Outcome> {
        let Some(guard) = store.begin_submit(FormId::Profile) else {
            debug!("profile submission already in flight, dropped");
            return None;
        };

        let token = self.token().await;
        let form = store.profile().form;

        let outcome = match validate::prepare_profile_update(token, &form) {
            Err(message) => Outcome::Rejected(message.to_string()),
            Ok(req) => {
                let result = self.api.update_me(&req.token, &req.body).await;
                outcome::profile_update(&result)
            }
        };

        store.update_profile(|s| {
            s.phase = FormPhase::Idle;
            s.message = outcome.message().to_string();
        });
        guard.complete();
        debug!(success = outcome.is_success(), "profile submission finished");

        if outcome.is_success() {
            self.handle_load_profile(store).await;
        }
        Some(outcome)
    }

    /// Handle `password/submit`.
    ///
    /// Returns `None` when dropped because a submission is in flight.
    pub async fn handle_submit_password(&self, store: &FormStore) -> Option<Outcome> {
        let Some(guard) = store.begin_submit(FormId::Password) else {
            debug!("password submission already in flight, dropped");
            return None;
        };

        let token = self.token().await;
        let form = store.password().form;

        let outcome = match validate::prepare_password_change(token, &form) {
            Err(message) => Outcome::Rejected(message.to_string()),
            Ok(req) => {
                let result = self.api.change_password(&req.token, &req.body).await;
                outcome::password_change(&result)
            }
        };

        store.update_password(|s| {
            s.phase = FormPhase::Idle;
            s.message = outcome.message().to_string();
            if outcome.is_success() {
                s.form = PasswordForm::default();
            }
        });
        guard.complete();
        debug!(success = outcome.is_success(), "password submission finished");

        Some(outcome)
    }

    /// Handle `profile/edit`.
    pub async fn handle_edit_profile(&self, req: &EditProfileFieldReq, store: &FormStore) {
        store.update_profile(|s| s.form.set(req.field, req.value.clone()));
    }

    /// Handle `password/edit`.
    pub async fn handle_edit_password(&self, req: &EditPasswordFieldReq, store: &FormStore) {
        store.update_password(|s| s.form.set(req.field, req.value.clone()));
    }
}
