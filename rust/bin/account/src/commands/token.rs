//! `account token` commands.
//!
//! Manage the `access_token` entry the profile page reads. Issuing tokens
//! is the login flow's job, not this tool's.

use anyhow::Result;

use account_storage::{LocalStorage, ACCESS_TOKEN_KEY};

use super::open_storage;
use crate::config::ClientConfig;

pub fn set(config: &ClientConfig, token: &str) -> Result<()> {
    let token = token.trim();
    if token.is_empty() {
        anyhow::bail!("Token cannot be empty.");
    }
    store(open_storage(config)?.as_ref(), token)?;
    println!("Token saved to {}.", config.storage_path().display());
    Ok(())
}

pub fn clear(config: &ClientConfig) -> Result<()> {
    open_storage(config)?.remove_item(ACCESS_TOKEN_KEY)?;
    println!("Token cleared.");
    Ok(())
}

pub fn status(config: &ClientConfig) -> Result<()> {
    if is_present(open_storage(config)?.as_ref())? {
        println!("Token present.");
    } else {
        println!("No token stored.");
    }
    Ok(())
}

fn store(storage: &dyn LocalStorage, token: &str) -> Result<()> {
    storage.set_item(ACCESS_TOKEN_KEY, token)?;
    Ok(())
}

fn is_present(storage: &dyn LocalStorage) -> Result<bool> {
    let token = storage.get_item(ACCESS_TOKEN_KEY)?;
    Ok(token.is_some_and(|t| !t.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &tempfile::TempDir) -> ClientConfig {
        ClientConfig {
            server: String::new(),
            storage: dir.path().join("storage.redb").display().to_string(),
        }
    }

    #[test]
    fn test_set_then_clear() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        set(&config, "  jwt-value ").unwrap();
        {
            let storage = open_storage(&config).unwrap();
            assert_eq!(
                storage.get_item(ACCESS_TOKEN_KEY).unwrap().as_deref(),
                Some("jwt-value")
            );
            assert!(is_present(storage.as_ref()).unwrap());
        }

        clear(&config).unwrap();
        let storage = open_storage(&config).unwrap();
        assert!(!is_present(storage.as_ref()).unwrap());
    }

    #[test]
    fn test_empty_token_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(set(&config_in(&dir), "   ").is_err());
    }

    #[test]
    fn test_empty_value_counts_as_absent() {
        let storage = account_storage::MemoryStorage::new();
        storage.set_item(ACCESS_TOKEN_KEY, "").unwrap();
        assert!(!is_present(&storage).unwrap());
    }
}
