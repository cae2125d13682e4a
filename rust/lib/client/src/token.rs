use std::sync::Arc;

use account_storage::{LocalStorage, ACCESS_TOKEN_KEY};

use crate::error::ApiError;

/// Pluggable token provider. Called at the start of every action.
///
/// Returns `Ok(None)` when there is no session ("not authenticated").
/// Implementations must not validate token shape or expiry; the API does.
#[async_trait::async_trait]
pub trait TokenSource: Send + Sync + 'static {
    async fn token(&self) -> Result<Option<String>, ApiError>;
}

/// No authentication: every action sees an absent token.
pub struct NoAuth;

#[async_trait::async_trait]
impl TokenSource for NoAuth {
    async fn token(&self) -> Result<Option<String>, ApiError> {
        Ok(None)
    }
}

/// Static bearer token (already obtained externally).
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait::async_trait]
impl TokenSource for StaticToken {
    async fn token(&self) -> Result<Option<String>, ApiError> {
        if self.0.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.0.clone()))
    }
}

/// Reads `access_token` from local storage on every call.
///
/// Nothing is cached, so a token written or cleared by another process
/// is seen by the next action.
pub struct StorageToken {
    storage: Arc<dyn LocalStorage>,
}

impl StorageToken {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self { storage }
    }
}

#[async_trait::async_trait]
impl TokenSource for StorageToken {
    async fn token(&self) -> Result<Option<String>, ApiError> {
        let token = self.storage.get_item(ACCESS_TOKEN_KEY)?;
        Ok(token.filter(|t| !t.is_empty()))
    }
}
