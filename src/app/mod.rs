//! Application layer coordinating page state, events, and actions.
//!
//! This layer sits between the runtime and the domain/ui layers. It follows
//! a unidirectional data flow:
//!
//! ```text
//! UI Event → handle_event → Page / TableView transitions → Actions → Side Effects
//!                                     ↓
//!                          compute_viewmodel → ui renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands and the selection sink seam
//! - [`handler`]: Event processing and state transition coordinator
//! - [`modal`]: Table view bound to the card overlay
//! - [`pagination`]: Page arithmetic and the page-number window
//! - [`search`]: Cross-table global search
//! - [`state`]: Page state container
//! - [`table_view`]: Search, paging and selection of one table

pub mod actions;
pub mod handler;
pub mod modal;
pub mod pagination;
pub mod search;
pub mod state;
pub mod table_view;

pub use actions::{Action, LogSink, Overlay, SelectionSink};
pub use handler::{handle_event, Event};
pub use modal::ModalTableView;
pub use search::{search_cards, SearchMatch};
pub use state::Page;
pub use table_view::{TableView, ViewKind};
