//! Databook viewer: paginated, searchable table views with row selection for
//! databook data pages.
//!
//! A data page embeds one table view over its own dataset and, optionally, a
//! grid of cards each opening its own table inside an overlay. This crate
//! provides:
//! - Case-insensitive substring search across every field of a record
//! - Fixed-size pagination with a windowed page-number control
//! - Single-row selection with a field preview and a commit hook
//! - Global search across all cards with annotated results
//! - A light/dark colour mode persisted across page loads

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (runtime.rs)                               │  ← Host entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Table views, pagination, search                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │
//! │ (ui/)         │   │ (storage/)    │
//! │ - Rendering   │   │ - JSON I/O    │
//! │ - Theming     │   │ - Backend API │
//! │ - Components  │   │               │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Record, dataset and card models (domain/)        │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing-subscriber setup                         │
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Page state machine with event/action model
//! - [`domain`]: Core domain types (records, cards, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: Preference persistence
//! - [`ui`]: Markup rendering with theme support
//! - [`runtime`]: Event dispatch and action execution
//! - [`observability`]: Logging setup
//!
//! # Configuration
//!
//! The hosting page hands configuration over as a string map:
//!
//! ```text
//! rows_per_page = "50"
//! default_theme = "dark"
//! theme_file    = "/srv/databook/theme.toml"
//! trace_level   = "debug"
//! ```
//!
//! or from a TOML file with the same keys, read by [`Config::from_toml_file`].
//!
//! # Page Lifecycle
//!
//! 1. **Load**:
//!    - Parse configuration
//!    - Initialize tracing (optional)
//!    - Parse the dataset and card handoff into a [`Page`]
//!    - Start a [`Viewer`], which restores the colour mode and renders
//!
//! 2. **Interaction**:
//!    - The host maps DOM events to [`Event`]s
//!    - [`Viewer::dispatch`] runs [`handle_event`], executes the returned
//!      [`Action`]s and re-renders when state changed
//!
//! # Example
//!
//! ```
//! use databook_viewer::app::{ViewKind, LogSink};
//! use databook_viewer::storage::MemoryPreferenceStore;
//! use databook_viewer::{initialize, Config, Dataset, Event, MarkupDocument, Viewer};
//!
//! let config = Config::default();
//! let dataset = Dataset::from_json(r#"[{"Name": "Water", "Formula": "H2O"}]"#)?;
//! let page = initialize(&config, dataset, Vec::new())?;
//!
//! let mut viewer = Viewer::new(page, MarkupDocument::standard_page(), MemoryPreferenceStore::new(), LogSink);
//! viewer.dispatch(&Event::SelectRow { view: ViewKind::Main, index: 0 });
//! viewer.dispatch(&Event::Commit(ViewKind::Main));
//! # Ok::<(), databook_viewer::ViewerError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Explicit View Instances
//!
//! The main view and the card overlay view are two instances of one
//! [`TableView`](app::TableView), each with its own anchors. Nothing is
//! shared between them.
//!
//! ## Selection by Dataset Position
//!
//! A selection is the index of a record in its dataset, so it survives any
//! re-render of the page it is on.
//!
//! ## Immutable View Models
//!
//! Rendering is a pure projection of state:
//! - State transitions live in the event handler
//! - Components turn view models into markup
//! - Every render rebuilds the markup from scratch

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod runtime;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, Event, Page, SelectionSink, ViewKind};
pub use domain::{Card, Dataset, Record, Result, ViewerError};
pub use runtime::Viewer;
pub use ui::{ColorMode, MarkupDocument, Surface, Theme};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Page configuration.
///
/// # Example
///
/// ```toml
/// rows_per_page = 25
/// default_theme = "dark"
/// theme_file = "/srv/databook/theme.toml"
/// preferences_path = "/var/lib/databook/preferences.json"
/// trace_level = "debug"
/// log_to_file = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Records per table page. Default: 50
    pub rows_per_page: usize,

    /// Colour mode used when no preference is stored. Default: `light`
    pub default_theme: ColorMode,

    /// Path to a custom TOML theme file with `[light]` and `[dark]`
    /// palettes. See [`ui::theme`] for format.
    pub theme_file: Option<PathBuf>,

    /// Preference file location. Defaults to `preferences.json` in the data
    /// directory.
    pub preferences_path: Option<PathBuf>,

    /// Tracing level.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Write logs to the rotating log file instead of stderr. Default: true
    pub log_to_file: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows_per_page: app::pagination::DEFAULT_ROWS_PER_PAGE,
            default_theme: ColorMode::default(),
            theme_file: None,
            preferences_path: None,
            trace_level: None,
            log_to_file: true,
        }
    }
}

impl Config {
    /// Parses configuration from the page's string map.
    ///
    /// # Parsing Rules
    ///
    /// - `rows_per_page`: String → `usize`, must be positive (falls back to 50)
    /// - `default_theme`: `light` or `dark` (falls back to `light`)
    /// - `theme_file`, `preferences_path`: String → `Option<PathBuf>`
    /// - `trace_level`: String → `Option<String>`
    /// - `log_to_file`: `true` or `false` (falls back to `true`)
    ///
    /// Empty values count as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use databook_viewer::{ColorMode, Config};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("rows_per_page".to_string(), "20".to_string());
    /// map.insert("default_theme".to_string(), "dark".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.rows_per_page, 20);
    /// assert_eq!(config.default_theme, ColorMode::Dark);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| config.get(key).map(|s| s.trim()).filter(|s| !s.is_empty());

        let rows_per_page = get("rows_per_page")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.rows_per_page);

        let default_theme = get("default_theme")
            .and_then(|s| s.parse::<ColorMode>().ok())
            .unwrap_or(defaults.default_theme);

        let log_to_file = get("log_to_file")
            .and_then(|s| s.parse::<bool>().ok())
            .unwrap_or(defaults.log_to_file);

        Self {
            rows_per_page,
            default_theme,
            theme_file: get("theme_file").map(PathBuf::from),
            preferences_path: get("preferences_path").map(PathBuf::from),
            trace_level: get("trace_level").map(String::from),
            log_to_file,
        }
    }

    /// Reads configuration from a TOML file. Missing keys take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Config`] if the file cannot be read or parsed,
    /// or if `rows_per_page` is zero.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ViewerError::Config(format!("failed to read config file: {e}")))?;
        let config: Self =
            toml::from_str(&contents).map_err(|e| ViewerError::Config(format!("failed to parse config TOML: {e}")))?;

        if config.rows_per_page == 0 {
            return Err(ViewerError::Config("rows_per_page must be positive".to_string()));
        }
        Ok(config)
    }

    /// Resolved preference file location.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Config`] if no path is configured and the
    /// platform has no data directory.
    pub fn preferences_file(&self) -> Result<PathBuf> {
        self.preferences_path
            .clone()
            .map_or_else(infrastructure::default_preferences_path, Ok)
    }
}

/// Builds the page state for a data page.
///
/// # Errors
///
/// Returns [`ViewerError::Theme`] if the built-in palettes fail to parse.
///
/// # Example
///
/// ```rust
/// use databook_viewer::{initialize, Card, Config, Dataset};
///
/// let cards = Card::list_from_json(
///     r#"[{"db_id": "1", "db_name": "REF-1", "table_id": "7", "table_name": "gases", "table_data": []}]"#,
/// )?;
/// let page = initialize(&Config::default(), Dataset::default(), cards)?;
/// assert_eq!(page.cards.len(), 1);
/// # Ok::<(), databook_viewer::ViewerError>(())
/// ```
pub fn initialize(config: &Config, dataset: Dataset, cards: Vec<Card>) -> Result<Page> {
    tracing::debug!(
        records = dataset.len(),
        cards = cards.len(),
        rows_per_page = config.rows_per_page,
        "initializing databook viewer"
    );
    Page::new(dataset, cards, config)
}

/// Opens the JSON preference store at the configured location.
///
/// # Errors
///
/// Returns an error if the location cannot be resolved or the existing file
/// cannot be read or parsed.
pub fn open_preferences(config: &Config) -> Result<storage::JsonPreferenceStore> {
    storage::JsonPreferenceStore::new(config.preferences_file()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_map(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn unparsable_values_fall_back() {
        let config = Config::from_map(&map(&[
            ("rows_per_page", "0"),
            ("default_theme", "sepia"),
            ("log_to_file", "maybe"),
            ("trace_level", " "),
        ]));
        assert_eq!(config.rows_per_page, 50);
        assert_eq!(config.default_theme, ColorMode::Light);
        assert!(config.log_to_file);
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn map_values_are_parsed() {
        let config = Config::from_map(&map(&[
            ("rows_per_page", "10"),
            ("theme_file", "/srv/theme.toml"),
            ("preferences_path", "/tmp/prefs.json"),
            ("log_to_file", "false"),
        ]));
        assert_eq!(config.rows_per_page, 10);
        assert_eq!(config.theme_file, Some(PathBuf::from("/srv/theme.toml")));
        assert_eq!(config.preferences_file().unwrap(), PathBuf::from("/tmp/prefs.json"));
        assert!(!config.log_to_file);
    }

    #[test]
    fn toml_file_with_partial_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rows_per_page = 25\ndefault_theme = \"dark\"").unwrap();

        let config = Config::from_toml_file(file.path()).unwrap();
        assert_eq!(config.rows_per_page, 25);
        assert_eq!(config.default_theme, ColorMode::Dark);
        assert!(config.log_to_file);
    }

    #[test]
    fn toml_file_rejects_zero_page_size() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rows_per_page = 0").unwrap();

        let err = Config::from_toml_file(file.path()).unwrap_err();
        assert!(matches!(err, ViewerError::Config(_)));
    }

    #[test]
    fn open_preferences_at_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            preferences_path: Some(dir.path().join("prefs.json")),
            ..Config::default()
        };
        let store = open_preferences(&config).unwrap();
        assert_eq!(store.path(), dir.path().join("prefs.json"));
    }
}
