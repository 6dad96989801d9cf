//! Storage layer for page preferences.
//!
//! # Modules
//!
//! - `backend`: Preference store trait and slot names
//! - `json`: JSON file-backed store
//! - `memory`: In-memory store
//! - `models`: Stored record types

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::{PreferenceStore, THEME_SLOT};
pub use json::JsonPreferenceStore;
pub use memory::MemoryPreferenceStore;
pub use models::PreferenceEntry;
