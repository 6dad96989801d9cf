//! Infrastructure layer for filesystem locations.

pub mod paths;

pub use paths::{default_preferences_path, get_data_dir};
