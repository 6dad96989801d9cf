//! Storage record models for the preference layer.

use serde::{Deserialize, Serialize};

/// One stored preference value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceEntry {
    pub value: String,

    /// Unix timestamp of the last write.
    pub updated_at: i64,
}

impl PreferenceEntry {
    /// Creates an entry stamped with the current time.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            updated_at: chrono::Utc::now().timestamp(),
        }
    }
}
