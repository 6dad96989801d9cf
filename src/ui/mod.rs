//! Markup rendering layer with component-based architecture.
//!
//! This module turns page state into HTML fragments and writes them to an
//! injected render target.
//!
//! # Architecture
//!
//! ```text
//! TableView → compute_viewmodel → TableViewModel → components → Surface
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable table state
//! - [`renderer`]: Top-level rendering coordinator and anchor checks
//! - [`components`]: Composable markup component renderers
//! - [`helpers`]: Escaping and label formatting
//! - [`surface`]: Render target trait and the in-memory document
//! - [`theme`]: Colour modes and palettes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod surface;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render_footer_year, render_page, render_table_view};
pub use surface::{MarkupDocument, PageAnchors, Surface, ViewAnchors};
pub use theme::{ColorMode, Theme, Themes};
pub use viewmodel::{PaginationInfo, PreviewField, RowItem, TableViewModel};
