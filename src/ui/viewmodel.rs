//! View model types representing renderable table state.
//!
//! View models are computed from a [`TableView`](crate::app::TableView) via
//! `compute_viewmodel()` and consumed by the components. They carry no
//! business logic, only display-ready data: capitalized headers, cell text,
//! selection marks and the pagination layout.
//!
//! # Example
//!
//! ```
//! use databook_viewer::ui::viewmodel::{RowItem, TableViewModel};
//!
//! let vm = TableViewModel {
//!     columns: vec!["Name".to_string()],
//!     rows: vec![RowItem {
//!         global_index: 0,
//!         cells: vec!["Water".to_string()],
//!         is_selected: true,
//!     }],
//!     pagination: None,
//!     preview: None,
//!     commit_enabled: true,
//! };
//! assert!(!vm.is_empty());
//! ```

use crate::app::pagination::PageWindow;

/// Everything needed to render one table view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewModel {
    /// Header labels, capitalized, in the first record's key order.
    pub columns: Vec<String>,

    /// Rows of the current page.
    pub rows: Vec<RowItem>,

    /// Pagination layout, `None` when the page is empty.
    pub pagination: Option<PaginationInfo>,

    /// Side-panel fields of the selected record, `None` without a selection.
    pub preview: Option<Vec<PreviewField>>,

    /// Whether the commit control(s) are enabled.
    pub commit_enabled: bool,
}

impl TableViewModel {
    /// Model of a view whose current page has no rows.
    #[must_use]
    pub const fn empty(preview: Option<Vec<PreviewField>>, commit_enabled: bool) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            pagination: None,
            preview,
            commit_enabled,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One table body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowItem {
    /// Position of the row in the filtered view, carried as `data-index`.
    pub global_index: usize,

    /// Cell text, one per column.
    pub cells: Vec<String>,

    pub is_selected: bool,
}

/// Pagination widget and summary line layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    pub window: PageWindow,

    /// 1-based position of the first row shown.
    pub first_shown: usize,

    /// 1-based position of the last row shown.
    pub last_shown: usize,

    /// Size of the filtered view.
    pub total_entries: usize,
}

/// Label/value pair of the selection preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewField {
    /// Capitalized field name, without the trailing colon.
    pub label: String,
    pub value: String,
}
