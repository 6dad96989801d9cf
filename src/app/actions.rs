//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! State transitions happen inside the handler; anything that reaches
//! outside the page state (the selection sink, preference storage, overlay
//! widgets, user notices) is described here and carried out by
//! [`Viewer`](crate::runtime::Viewer).
//!
//! # Example
//!
//! ```
//! use databook_viewer::app::{Action, Overlay};
//!
//! let actions = vec![Action::ShowOverlay(Overlay::SearchResults)];
//! assert_eq!(actions.len(), 1);
//! ```

use super::table_view::ViewKind;
use crate::domain::Record;
use crate::ui::theme::ColorMode;

/// Overlay widgets the page can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Card table overlay, backed by the modal table view.
    CardTable,
    /// Global search result list.
    SearchResults,
}

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hands a committed record to the selection sink.
    CommitSelection {
        /// View the record was committed from.
        origin: ViewKind,
        record: Record,
    },

    /// Stores the colour mode under the theme preference slot.
    PersistTheme(ColorMode),

    ShowOverlay(Overlay),

    HideOverlay(Overlay),

    /// Empties a view's search input after a reset.
    ClearSearchInput(ViewKind),

    /// Shows a blocking notice to the user.
    Alert(String),
}

/// Receiver of committed selections.
///
/// Implemented for any `FnMut(ViewKind, &Record)`, so a closure is enough:
///
/// ```
/// use databook_viewer::app::{SelectionSink, ViewKind};
/// use databook_viewer::Record;
///
/// let mut committed = Vec::new();
/// let mut sink = |origin: ViewKind, record: &Record| committed.push((origin, record.clone()));
/// sink.commit(ViewKind::Main, &Record::from_pairs([("Name", "Water")]));
/// assert_eq!(committed.len(), 1);
/// ```
pub trait SelectionSink {
    fn commit(&mut self, origin: ViewKind, record: &Record);
}

impl<F> SelectionSink for F
where
    F: FnMut(ViewKind, &Record),
{
    fn commit(&mut self, origin: ViewKind, record: &Record) {
        self(origin, record);
    }
}

/// Sink that only logs what it receives.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SelectionSink for LogSink {
    fn commit(&mut self, origin: ViewKind, record: &Record) {
        tracing::info!(view = ?origin, field_count = record.len(), "selection committed");
    }
}
