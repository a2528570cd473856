//! Storage Errors

/// Common result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised while persisting widget state
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// No window or localStorage access denied
    Unavailable(String),
    /// The backend rejected the write (quota, private mode)
    Write(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Write(msg) => write!(f, "Storage write failed: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialize(e.to_string())
    }
}
