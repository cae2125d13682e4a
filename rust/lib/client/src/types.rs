use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ── Wire bodies ─────────────────────────────────────────────────────

/// `GET /users/me` response. Every field is optional on the wire; the
/// server also sends fields (id, timestamps) that are ignored here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// `PUT /users/me` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
}

/// `POST /users/me/change-password` body.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

impl fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordChange")
            .field("current_password", &"***")
            .field("new_password", &"***")
            .field("confirm_new_password", &"***")
            .finish()
    }
}

// ── Raw response ────────────────────────────────────────────────────

/// Status and body of a completed HTTP exchange.
///
/// Endpoints differ in what counts as success (any 2xx vs. exactly 204),
/// so the client hands back the raw pair and callers decide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode a 2xx JSON body, mapping other statuses to `ApiError::Server`.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(ApiError::Server {
                status: self.status,
                message: self.body.clone(),
            });
        }
        serde_json::from_str(&self.body)
            .map_err(|e| ApiError::Decode(format!("response body: {}", e)))
    }

    /// Extract the conventional `detail` string from an error body.
    ///
    /// `Ok(None)` when the body is JSON without a usable `detail`;
    /// `Err` when the body is not JSON at all, or is JSON `null`.
    pub fn detail(&self) -> Result<Option<String>, ApiError> {
        let value: serde_json::Value = serde_json::from_str(&self.body)
            .map_err(|e| ApiError::Decode(format!("error body: {}", e)))?;
        if value.is_null() {
            return Err(ApiError::Decode("error body is null".into()));
        }
        Ok(value
            .get("detail")
            .and_then(|d| d.as_str())
            .filter(|d| !d.is_empty())
            .map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_profile_tolerates_missing_and_extra_fields() {
        let body = r#"{"id": 7, "username": "alice", "email": null, "created_at": "2024-01-01"}"#;
        let profile: UserProfile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.username.as_deref(), Some("alice"));
        assert!(profile.first_name.is_none());
        assert!(profile.email.is_none());
    }

    #[test]
    fn parse_rejects_non_success() {
        let resp = ApiResponse::new(401, r#"{"detail":"Not authenticated"}"#);
        match resp.parse::<UserProfile>().unwrap_err() {
            ApiError::Server { status, .. } => assert_eq!(status, 401),
            other => panic!("expected Server, got {:?}", other),
        }
    }

    #[test]
    fn detail_from_json_body() {
        let resp = ApiResponse::new(400, r#"{"detail":"Email already in use"}"#);
        assert_eq!(resp.detail().unwrap().as_deref(), Some("Email already in use"));
    }

    #[test]
    fn detail_absent_or_not_a_string() {
        assert_eq!(ApiResponse::new(400, "{}").detail().unwrap(), None);
        assert_eq!(ApiResponse::new(400, r#"{"detail":""}"#).detail().unwrap(), None);
        // Validation errors carry a list, which has no single message.
        let list = r#"{"detail":[{"loc":["body","email"],"msg":"field required"}]}"#;
        assert_eq!(ApiResponse::new(422, list).detail().unwrap(), None);
    }

    #[test]
    fn detail_errors_on_non_json() {
        let resp = ApiResponse::new(502, "<html>Bad Gateway</html>");
        assert!(matches!(resp.detail(), Err(ApiError::Decode(_))));
        assert!(matches!(ApiResponse::new(500, "").detail(), Err(ApiError::Decode(_))));
        assert!(matches!(ApiResponse::new(500, "null").detail(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn password_change_debug_hides_secrets() {
        let change = PasswordChange {
            current_password: "hunter22".into(),
            new_password: "correct-horse".into(),
            confirm_new_password: "correct-horse".into(),
        };
        let rendered = format!("{:?}", change);
        assert!(!rendered.contains("hunter22"));
        assert!(!rendered.contains("correct-horse"));
    }
}
