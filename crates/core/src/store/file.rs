//! JSON file store under the user's config directory (~/.config/unitgate/)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

use super::PersistedStore;

const STORE_DIR: &str = "unitgate";
const STORE_FILENAME: &str = "entitlement.json";

/// Persists entries as one flat JSON object of strings.
///
/// Every write replaces the whole file through a temp-file rename, so a
/// reader sees either the old document or the new one.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.config/unitgate/entitlement.json`.
    pub fn open_default() -> Result<Self, StoreError> {
        default_path().map(Self::new).ok_or(StoreError::NoLocation)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %self.path.display(), error = %e, "could not read entitlement store");
                }
                return BTreeMap::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring unparsable entitlement store");
                BTreeMap::new()
            }
        }
    }

    fn write_all(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let json = serde_json::to_string_pretty(map)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PersistedStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.set_all(&[(key, value)])
    }

    fn set_all(&self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
        let mut map = self.read_all();
        for (key, value) in entries {
            map.insert(key.to_string(), value.to_string());
        }
        self.write_all(&map)
    }
}

/// Returns `~/.config/unitgate/entitlement.json`, if a config dir exists.
pub fn default_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(STORE_DIR).join(STORE_FILENAME))
}
