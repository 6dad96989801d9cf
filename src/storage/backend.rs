//! Preference store abstraction.
//!
//! This module defines the [`PreferenceStore`] trait over named preference
//! slots. The page keeps exactly one slot today, [`THEME_SLOT`], but the
//! store does not care what the slots hold.

use crate::domain::error::Result;

/// Slot holding the colour mode, `light` or `dark`.
pub const THEME_SLOT: &str = "theme";

/// Abstraction over preference persistence backends.
///
/// # Implementations
///
/// - [`JsonPreferenceStore`](crate::storage::JsonPreferenceStore): JSON file
///   with atomic writes
/// - [`MemoryPreferenceStore`](crate::storage::MemoryPreferenceStore): lives
///   only as long as the page session
///
/// # Examples
///
/// ```
/// use databook_viewer::storage::{MemoryPreferenceStore, PreferenceStore, THEME_SLOT};
///
/// let mut store = MemoryPreferenceStore::new();
/// store.set(THEME_SLOT, "dark")?;
/// assert_eq!(store.get(THEME_SLOT)?.as_deref(), Some("dark"));
/// # Ok::<(), databook_viewer::ViewerError>(())
/// ```
pub trait PreferenceStore {
    /// Reads a slot. Returns `Ok(None)` if the slot was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, slot: &str) -> Result<Option<String>>;

    /// Writes a slot, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, slot: &str, value: &str) -> Result<()>;
}
