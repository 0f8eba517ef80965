//! # Local Durable Storage
//!
//! Plain string key/value entries that outlive a session: the auth token, the
//! mirrored component selection and the onboarding flag. Values are stored as
//! strings; structured values (the selection) are JSON-encoded by the caller.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{AppError, Result};
use shared::Component;

/// Bearer token attached to every API call when present.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// JSON array mirror of the store's component selection.
pub const SELECTED_COMPONENTS_KEY: &str = "selectedComponents";
/// `"true"` once onboarding was completed.
pub const ONBOARDING_COMPLETED_KEY: &str = "onboardingCompleted";

pub trait LocalStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory storage, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// Storage backed by a single JSON object on disk.
///
/// The whole map is rewritten on every change through a temp file and a
/// rename, so a crash never leaves a half-written file behind.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open (or create) the storage file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let entries = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::Storage(format!("corrupt storage file {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "Local storage opened");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl LocalStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock();
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}

/// Read the bearer token, treating blank values as absent.
pub fn auth_token(storage: &dyn LocalStorage) -> Result<Option<String>> {
    Ok(storage
        .get(AUTH_TOKEN_KEY)?
        .filter(|token| !token.trim().is_empty()))
}

/// Read the mirrored selection. A corrupt mirror reads as empty.
pub fn load_selected_components(storage: &dyn LocalStorage) -> Result<Vec<Component>> {
    let Some(raw) = storage.get(SELECTED_COMPONENTS_KEY)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(components) => Ok(components),
        Err(e) => {
            tracing::warn!(error = %e, "Discarding unreadable component selection mirror");
            Ok(Vec::new())
        }
    }
}

pub fn save_selected_components(storage: &dyn LocalStorage, components: &[Component]) -> Result<()> {
    storage.set(SELECTED_COMPONENTS_KEY, &serde_json::to_string(components)?)
}

pub fn onboarding_completed(storage: &dyn LocalStorage) -> Result<bool> {
    Ok(storage.get(ONBOARDING_COMPLETED_KEY)?.as_deref() == Some("true"))
}

pub fn mark_onboarding_completed(storage: &dyn LocalStorage) -> Result<()> {
    storage.set(ONBOARDING_COMPLETED_KEY, "true")
}
