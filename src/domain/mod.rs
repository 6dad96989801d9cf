//! Domain layer for the databook viewer.
//!
//! This module contains the data types the views operate on, independent of
//! rendering or storage concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: Record and dataset types, plus the value string form
//! - [`card`]: Card bundles of table metadata and records

pub mod card;
pub mod error;
pub mod record;

pub use card::{Card, CardMeta};
pub use error::{Result, ViewerError};
pub use record::{string_form, Dataset, Record};
