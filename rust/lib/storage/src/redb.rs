use std::path::Path;
use std::sync::Arc;

use redb::{Database, TableDefinition};
use tracing::debug;

use crate::error::StorageError;
use crate::traits::LocalStorage;

const TABLE: TableDefinition<&str, &str> = TableDefinition::new("local_storage");

/// RedbStorage keeps local storage in a redb database file so values
/// survive restarts of the client.
pub struct RedbStorage {
    db: Arc<Database>,
}

impl RedbStorage {
    /// Open or create the storage file at the given path.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| StorageError::Open(format!("{}: {}", parent.display(), e)))?;
            }
        }
        let db = Database::create(path)
            .map_err(|e| StorageError::Open(format!("{}: {}", path.display(), e)))?;

        // Create the table up front so reads on a fresh file find it.
        let write_txn = db
            .begin_write()
            .map_err(|e| StorageError::Storage(e.to_string()))?;
        {
            let _table = write_txn
                .open_table(TABLE)
                .map_err(|e| StorageError::Storage(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| StorageError::Storage(e.to_string()))?;

        debug!(path = %path.display(), "opened local storage");
        Ok(Self { db: Arc::new(db) })
    }
}

impl LocalStorage for RedbStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| StorageError::Storage(e.to_string()))?;
        let table = read_txn
            .open_table(TABLE)
            .map_err(|e| StorageError::Storage(e.to_string()))?;

        match table.get(key) {
            Ok(Some(val)) => Ok(Some(val.value().to_string())),
            Ok(None) => Ok(None),
            Err(e) => Err(StorageError::Storage(e.to_string())),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| StorageError::Storage(e.to_string()))?;
        {
            let mut table = write_txn
                .open_table(TABLE)
                .map_err(|e| StorageError::Storage(e.to_string()))?;
            table
                .insert(key, value)
                .map_err(|e| StorageError::Storage(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| StorageError::Storage(e.to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| StorageError::Storage(e.to_string()))?;
        {
            let mut table = write_txn
                .open_table(TABLE)
                .map_err(|e| StorageError::Storage(e.to_string()))?;
            table
                .remove(key)
                .map_err(|e| StorageError::Storage(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| StorageError::Storage(e.to_string()))
    }
}
