//! Composable markup component renderers.
//!
//! Each component turns one piece of view state into an HTML fragment. They
//! are pure string builders; writing the fragments to a surface is the
//! renderer's job.
//!
//! # Components
//!
//! - [`table`]: Table header and body rows with selection controls
//! - [`pagination`]: Windowed page-number list and summary line
//! - [`preview`]: Label/value preview of the selected record
//! - [`cards`]: Card grid with "View Table" controls
//! - [`search_results`]: Global search result list

pub mod cards;
pub mod pagination;
pub mod preview;
pub mod search_results;
pub mod table;

pub use cards::render_cards;
pub use pagination::render_pagination;
pub use preview::{render_preview, NO_SELECTION};
pub use search_results::{render_search_results, NO_RESULTS};
pub use table::{render_table, PLACEHOLDER_ROW};
