//! Local persistent key-value storage for client-side session data.
//!
//! Plays the role a browser's `localStorage` plays for a web page: a small
//! string-to-string map that survives restarts and is written by flows
//! outside this workspace (e.g. a login flow storing `access_token`).

pub mod error;
pub mod memory;
pub mod redb;
pub mod traits;

pub use error::StorageError;
pub use memory::MemoryStorage;
pub use redb::RedbStorage;
pub use traits::{LocalStorage, ACCESS_TOKEN_KEY};
