//! In-memory preference store.

use crate::domain::error::Result;
use crate::storage::backend::PreferenceStore;
use crate::storage::models::PreferenceEntry;
use std::collections::BTreeMap;

/// Preference store that forgets everything when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    slots: BTreeMap<String, PreferenceEntry>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata of a slot, including when it was last written.
    #[must_use]
    pub fn entry(&self, slot: &str) -> Option<&PreferenceEntry> {
        self.slots.get(slot)
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.get(slot).map(|e| e.value.clone()))
    }

    fn set(&mut self, slot: &str, value: &str) -> Result<()> {
        self.slots.insert(slot.to_string(), PreferenceEntry::new(value));
        Ok(())
    }
}
