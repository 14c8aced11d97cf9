//! Preference storage
//!
//! Small key/value persistence for user preferences:
//! - `localStorage` in the browser
//! - one file per key under the user's data directory on native platforms
//! - an in-memory map for tests and headless use

use anyhow::Result;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context;
#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// The store for the current platform.
pub fn default_store() -> Arc<dyn PreferenceStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(LocalStorage)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(FileStore::in_data_dir())
    }
}

// ============================================
// In-memory
// ============================================

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| anyhow::anyhow!("preference store poisoned: {e}"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================
// Native: one file per key
// ============================================

#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    dir: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn in_data_dir() -> Self {
        if let Some(data_dir) = dirs::data_local_dir() {
            return Self::new(data_dir.join("softsell").join("preferences"));
        }

        Self::new(PathBuf::from("cache").join("preferences"))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(sanitize_key(key))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key))
            .ok()
            .map(|value| value.trim().to_string())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;
        let path = self.path_for(key);
        fs::write(&path, value).with_context(|| format!("failed to write {}", path.display()))
    }
}

// ============================================
// Browser: window.localStorage
// ============================================

#[cfg(target_arch = "wasm32")]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| anyhow::anyhow!("localStorage is unavailable"))
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| anyhow::anyhow!("localStorage write failed: {e:?}"))
    }
}

/// Sanitize a key for filesystem use
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}
