use crate::error::StorageError;

/// Well-known key holding the bearer token of the current session.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// LocalStorage is a persistent string key-value store.
///
/// Mirrors the `getItem` / `setItem` / `removeItem` surface of browser
/// storage. Reads have no side effects; a missing key is `Ok(None)`.
pub trait LocalStorage: Send + Sync {
    /// Get the value for a key. Returns None if the key does not exist.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Set a key, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
