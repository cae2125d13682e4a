use tracing::debug;

use crate::error::ApiError;
use crate::types::{ApiResponse, PasswordChange, ProfileUpdate};

/// Current-user resource.
pub const ME_PATH: &str = "/users/me";

/// Password change action on the current user.
pub const CHANGE_PASSWORD_PATH: &str = "/users/me/change-password";

/// The three account endpoints the profile page talks to.
///
/// Every call carries the caller's bearer token. Responses come back raw;
/// only transport failures are errors here.
#[async_trait::async_trait]
pub trait AccountApi: Send + Sync + 'static {
    /// `GET /users/me`.
    async fn get_me(&self, token: &str) -> Result<ApiResponse, ApiError>;

    /// `PUT /users/me` with a JSON body.
    async fn update_me(&self, token: &str, update: &ProfileUpdate) -> Result<ApiResponse, ApiError>;

    /// `POST /users/me/change-password` with a JSON body.
    async fn change_password(
        &self,
        token: &str,
        change: &PasswordChange,
    ) -> Result<ApiResponse, ApiError>;
}

/// `AccountApi` over HTTP.
pub struct HttpAccountApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAccountApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(builder: reqwest::RequestBuilder) -> Result<ApiResponse, ApiError> {
        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        debug!(status, body_len = body.len(), "response received");
        Ok(ApiResponse { status, body })
    }
}

#[async_trait::async_trait]
impl AccountApi for HttpAccountApi {
    async fn get_me(&self, token: &str) -> Result<ApiResponse, ApiError> {
        debug!(path = ME_PATH, "GET");
        let req = self.http.get(self.url(ME_PATH)).bearer_auth(token);
        Self::send(req).await
    }

    async fn update_me(&self, token: &str, update: &ProfileUpdate) -> Result<ApiResponse, ApiError> {
        debug!(path = ME_PATH, "PUT");
        let req = self
            .http
            .put(self.url(ME_PATH))
            .bearer_auth(token)
            .json(update);
        Self::send(req).await
    }

    async fn change_password(
        &self,
        token: &str,
        change: &PasswordChange,
    ) -> Result<ApiResponse, ApiError> {
        debug!(path = CHANGE_PASSWORD_PATH, "POST");
        let req = self
            .http
            .post(self.url(CHANGE_PASSWORD_PATH))
            .bearer_auth(token)
            .json(change);
        Self::send(req).await
    }
}
