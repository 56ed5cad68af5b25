//! Durable storage of the preference.
//!
//! Values are kept the way browser local storage keeps them: a string per
//! key, the boolean JSON-encoded as `"true"` / `"false"`.

use rustc_hash::FxHashMap;
use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Storage failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage cannot be read or written (disabled, missing permissions, ...)
    #[error("storage `{0}` is unavailable")]
    Unavailable(PathBuf, #[source] io::Error),

    /// Storage file exists but is not a JSON object of strings
    #[error("storage `{0}` is corrupt")]
    Corrupt(PathBuf, #[source] serde_json::Error),
}

/// Key/value storage holding the boolean preference.
pub trait PreferenceStore {
    /// Stored value under `key`; `Ok(None)` when nothing usable is stored.
    fn load(&self, key: &str) -> Result<Option<bool>, StoreError>;

    fn save(&mut self, key: &str, dark: bool) -> Result<(), StoreError>;
}

/// Decode a stored string; anything but a JSON boolean counts as absent.
fn decode(raw: &str) -> Option<bool> {
    serde_json::from_str::<bool>(raw).ok()
}

fn encode(dark: bool) -> String {
    dark.to_string()
}

// ============================================================================
// MemoryStore
// ============================================================================

/// In-memory storage, also the session-only fallback.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored string, as a browser devtools panel would show it.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<bool>, StoreError> {
        Ok(self.raw(key).and_then(decode))
    }

    fn save(&mut self, key: &str, dark: bool) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), encode(dark));
        Ok(())
    }
}

// ============================================================================
// FileStore
// ============================================================================

/// JSON file storage: `{ "darkMode": "true" }`.
///
/// Other keys in the file are preserved on save.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(StoreError::Unavailable(self.path.clone(), err)),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|err| StoreError::Corrupt(self.path.clone(), err))
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<bool>, StoreError> {
        Ok(self.read_all()?.get(key).and_then(|raw| decode(raw)))
    }

    fn save(&mut self, key: &str, dark: bool) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking the write.
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(StoreError::Corrupt(..)) => BTreeMap::new(),
            Err(err) => return Err(err),
        };
        values.insert(key.to_string(), encode(dark));

        let unavailable = |err| StoreError::Unavailable(self.path.clone(), err);
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(unavailable)?;
        }
        let json = serde_json::to_string_pretty(&values)
            .map_err(|err| StoreError::Corrupt(self.path.clone(), err))?;
        fs::write(&self.path, json).map_err(unavailable)?;
        Ok(())
    }
}
