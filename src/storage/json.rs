//! JSON file-based preference store.
//!
//! Preferences live in a small human-readable JSON file. Writes go to a
//! temporary file first and are then renamed over the target, so a crash
//! never leaves a half-written file behind.

use crate::domain::error::{Result, ViewerError};
use crate::storage::backend::PreferenceStore;
use crate::storage::models::PreferenceEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// JSON storage container format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    #[serde(default)]
    slots: BTreeMap<String, PreferenceEntry>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            slots: BTreeMap::new(),
        }
    }
}

/// JSON file preference store.
///
/// The whole file is loaded on creation and kept in memory. Every `set`
/// writes it back; if that write fails the change is kept in memory and
/// retried when the store is dropped.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "slots": {
///     "theme": { "value": "dark", "updated_at": 1718000000 }
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonPreferenceStore {
    file_path: PathBuf,
    data: StorageData,
    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonPreferenceStore {
    /// Creates or opens a preference file.
    ///
    /// If the file exists, loads existing data. Otherwise starts empty; the
    /// file is only created on the first write. Parent directories are created
    /// automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use databook_viewer::storage::{JsonPreferenceStore, PreferenceStore};
    ///
    /// let mut store = JsonPreferenceStore::new("/tmp/databook-viewer/preferences.json".into())?;
    /// store.set("theme", "dark")?;
    /// # Ok::<(), databook_viewer::ViewerError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty store");
            StorageData::default()
        };

        tracing::debug!(slot_count = data.slots.len(), "preference store initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| ViewerError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(version = data.version, slots = data.slots.len(), "loaded preference data");
        Ok(data)
    }

    /// Saves data to disk using write-to-temp and rename.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| ViewerError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "preferences saved");
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, slot: &str) -> Result<Option<String>> {
        let value = self.data.slots.get(slot).map(|e| e.value.clone());
        tracing::debug!(slot, found = value.is_some(), "preference lookup");
        Ok(value)
    }

    fn set(&mut self, slot: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set_preference", slot, value).entered();

        if self.data.slots.get(slot).is_some_and(|e| e.value == value) {
            tracing::trace!("value unchanged");
            return Ok(());
        }

        self.data.slots.insert(slot.to_string(), PreferenceEntry::new(value));
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonPreferenceStore {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty preferences on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save preferences on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::THEME_SLOT;

    #[test]
    fn value_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        {
            let mut store = JsonPreferenceStore::new(path.clone()).unwrap();
            assert_eq!(store.get(THEME_SLOT).unwrap(), None);
            store.set(THEME_SLOT, "dark").unwrap();
        }

        let store = JsonPreferenceStore::new(path.clone()).unwrap();
        assert_eq!(store.get(THEME_SLOT).unwrap().as_deref(), Some("dark"));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn file_is_not_created_until_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        drop(JsonPreferenceStore::new(path.clone()).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();

        let err = JsonPreferenceStore::new(path).unwrap_err();
        assert!(matches!(err, ViewerError::Storage(_)));
    }

    #[test]
    fn file_format_is_versioned() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut store = JsonPreferenceStore::new(path.clone()).unwrap();
        store.set(THEME_SLOT, "light").unwrap();

        let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["version"], 1);
        assert_eq!(raw["slots"]["theme"]["value"], "light");
    }
}
