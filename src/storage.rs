//! Storage Adapter
//!
//! JSON records in the browser's localStorage. Absent or malformed data
//! reads as "nothing stored" so callers fall back to defaults.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StorageError, StorageResult};
use crate::models::{TaskRecord, Theme};

/// Synchronous string key-value store
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let storage = Self::local_storage().ok_or_else(|| {
            StorageError::Unavailable("localStorage is not accessible".to_string())
        })?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-memory store for tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    reject_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, like a full quota
    pub fn rejecting() -> Self {
        Self {
            reject_writes: true,
            ..Self::default()
        }
    }

    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.reject_writes {
            return Err(StorageError::Write(format!("quota exceeded for `{}`", key)));
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read and decode a JSON record
pub fn load_json<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = store.get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("[STORAGE] ignoring malformed `{}` record: {}", key, e);
            None
        }
    }
}

/// Encode and write a JSON record
pub fn save_json<S, T>(store: &S, key: &str, value: &T) -> StorageResult<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw)
}

/// Stored task list, empty when absent or malformed
pub fn load_tasks<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Vec<TaskRecord> {
    load_json(store, key).unwrap_or_default()
}

pub fn save_tasks<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
    records: &[TaskRecord],
) -> StorageResult<()> {
    save_json(store, key, records)
}

/// Stored theme, light when absent or unrecognized
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Theme {
    store.get_item(key).map(|raw| Theme::parse(&raw)).unwrap_or_default()
}

/// Themes are stored as the bare string, not JSON
pub fn save_theme<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
    theme: Theme,
) -> StorageResult<()> {
    store.set_item(key, theme.as_str())
}
