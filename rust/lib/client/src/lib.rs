//! HTTP client for the account endpoints of the backend.
//!
//! Authentication is handled by pluggable [`TokenSource`] implementations;
//! the default reads the bearer token from local storage on every call.
//!
//! # Usage
//!
//! ```ignore
//! use account_client::{AccountApi, HttpAccountApi, StorageToken, TokenSource};
//!
//! let tokens = StorageToken::new(storage);
//! let api = HttpAccountApi::new("http://localhost:8000");
//! if let Some(token) = tokens.token().await? {
//!     let me: UserProfile = api.get_me(&token).await?.parse()?;
//! }
//! ```

pub mod error;
pub mod http;
pub mod token;
pub mod types;


pub use error::ApiError;
pub use http::{AccountApi, HttpAccountApi, CHANGE_PASSWORD_PATH, ME_PATH};
pub use token::{NoAuth, StaticToken, StorageToken, TokenSource};
pub use types::{ApiResponse, PasswordChange, ProfileUpdate, UserProfile};
