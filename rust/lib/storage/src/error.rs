use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to open storage: {0}")]
    Open(String),

    #[error("storage error: {0}")]
    Storage(String),
}
