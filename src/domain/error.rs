//! Error types for the databook viewer.
//!
//! This module defines the centralized error type [`ViewerError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! None of these errors is fatal to a page session: event handling and rendering
//! log them and carry on with the previous state.

use thiserror::Error;

/// The main error type for viewer operations.
///
/// # Examples
///
/// ```
/// use databook_viewer::ViewerError;
///
/// fn find_anchor(id: &str) -> Result<(), ViewerError> {
///     Err(ViewerError::MissingAnchor(id.to_string()))
/// }
///
/// assert!(find_anchor("dataTable").is_err());
/// ```
#[derive(Debug, Error)]
pub enum ViewerError {
    /// A render target element was not registered on the surface.
    ///
    /// The string is the anchor id that could not be found.
    #[error("Missing render anchor: {0}")]
    MissingAnchor(String),

    /// Preference storage failed.
    ///
    /// Occurs when reading from or writing to the preference backend fails.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The page-scoped data handoff could not be parsed.
    #[error("Data error: {0}")]
    Data(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A global search was requested with a blank query.
    #[error("Please enter a search term.")]
    EmptyQuery,

    /// A card index did not refer to any loaded card.
    #[error("Unknown card index: {0}")]
    UnknownCard(usize),
}

/// A specialized `Result` type for viewer operations.
pub type Result<T> = std::result::Result<T, ViewerError>;
