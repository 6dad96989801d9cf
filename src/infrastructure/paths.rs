//! Storage locations on the host filesystem.

use crate::domain::error::{Result, ViewerError};
use std::path::PathBuf;

/// Directory name under the platform data directory.
pub const APP_DIR_NAME: &str = "databook-viewer";

/// File name of the preference store inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// File name of the log inside the data directory.
pub const LOG_FILE: &str = "databook-viewer.log";

/// Returns the data directory for viewer files.
///
/// Resolves to the platform data directory joined with `databook-viewer`,
/// e.g. `~/.local/share/databook-viewer` on Linux.
///
/// # Errors
///
/// Returns [`ViewerError::Config`] if the platform has no data directory.
pub fn get_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| ViewerError::Config("could not determine data directory".to_string()))
}

/// Default location of the preference store.
///
/// # Errors
///
/// Returns [`ViewerError::Config`] if the platform has no data directory.
pub fn default_preferences_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(PREFERENCES_FILE))
}
