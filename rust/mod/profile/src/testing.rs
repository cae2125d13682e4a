//! In-memory account API for handler tests.

use std::sync::{Arc, Mutex};

use account_client::{AccountApi, ApiError, ApiResponse, PasswordChange, ProfileUpdate};
use async_trait::async_trait;
use tokio::sync::Notify;

/// Pauses a call until the test releases it.
pub struct Gate {
    pub entered: Notify,
    pub release: Notify,
}

/// Scripted `AccountApi`.
///
/// `GET` returns the current user body. `PUT` echoes the update into the
/// user body (or stores the scripted stored body instead) and answers 200
/// unless a reply is scripted. `POST` answers 204 unless a reply is scripted.
pub struct FakeApi {
    me: Mutex<ApiResponse>,
    update_reply: Mutex<Option<ApiResponse>>,
    stored_after_update: Mutex<Option<String>>,
    password_reply: Mutex<ApiResponse>,
    calls: Mutex<Vec<&'static str>>,
    tokens: Mutex<Vec<String>>,
    last_update: Mutex<Option<ProfileUpdate>>,
    last_password: Mutex<Option<PasswordChange>>,
    gate: Mutex<Option<Arc<Gate>>>,
}

impl FakeApi {
    pub fn with_user(body: &str) -> Arc<Self> {
        Arc::new(Self {
            me: Mutex::new(ApiResponse::new(200, body)),
            update_reply: Mutex::new(None),
            stored_after_update: Mutex::new(None),
            password_reply: Mutex::new(ApiResponse::new(204, "")),
            calls: Mutex::new(Vec::new()),
            tokens: Mutex::new(Vec::new()),
            last_update: Mutex::new(None),
            last_password: Mutex::new(None),
            gate: Mutex::new(None),
        })
    }

    pub fn set_me(&self, resp: ApiResponse) {
        *self.me.lock().unwrap() = resp;
    }

    pub fn set_update_reply(&self, resp: ApiResponse) {
        *self.update_reply.lock().unwrap() = Some(resp);
    }

    /// Body the server keeps after an accepted `PUT`, in place of the echo.
    pub fn set_stored_after_update(&self, body: &str) {
        *self.stored_after_update.lock().unwrap() = Some(body.to_string());
    }

    pub fn set_password_reply(&self, resp: ApiResponse) {
        *self.password_reply.lock().unwrap() = resp;
    }

    /// Hold every subsequent call until `release` is notified.
    pub fn gate(&self) -> Arc<Gate> {
        let gate = Arc::new(Gate {
            entered: Notify::new(),
            release: Notify::new(),
        });
        *self.gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    /// Stop holding calls.
    pub fn ungate(&self) {
        *self.gate.lock().unwrap() = None;
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn tokens_seen(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }

    pub fn last_update(&self) -> Option<ProfileUpdate> {
        self.last_update.lock().unwrap().clone()
    }

    pub fn last_password(&self) -> Option<PasswordChange> {
        self.last_password.lock().unwrap().clone()
    }

    async fn record(&self, call: &'static str, token: &str) {
        self.calls.lock().unwrap().push(call);
        self.tokens.lock().unwrap().push(token.to_string());
        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
    }
}

#[async_trait]
impl AccountApi for FakeApi {
    async fn get_me(&self, token: &str) -> Result<ApiResponse, ApiError> {
        self.record("GET /users/me", token).await;
        Ok(self.me.lock().unwrap().clone())
    }

    async fn update_me(&self, token: &str, update: &ProfileUpdate) -> Result<ApiResponse, ApiError> {
        self.record("PUT /users/me", token).await;
        *self.last_update.lock().unwrap() = Some(update.clone());

        let scripted = self.update_reply.lock().unwrap().clone();
        if let Some(reply) = scripted {
            return Ok(reply);
        }
        let body = serde_json::to_string(update).map_err(|e| ApiError::Decode(e.to_string()))?;
        let stored = self.stored_after_update.lock().unwrap().clone();
        *self.me.lock().unwrap() = ApiResponse::new(200, stored.unwrap_or_else(|| body.clone()));
        Ok(ApiResponse::new(200, body))
    }

    async fn change_password(
        &self,
        token: &str,
        change: &PasswordChange,
    ) -> Result<ApiResponse, ApiError> {
        self.record("POST /users/me/change-password", token).await;
        *self.last_password.lock().unwrap() = Some(change.clone());
        Ok(self.password_reply.lock().unwrap().clone())
    }
}
