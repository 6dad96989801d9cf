//! Modal table view: the table workflow inside the card overlay.
//!
//! A [`ModalTableView`] wraps a [`TableView`] whose dataset is swapped in from
//! a [`Card`] each time the overlay opens. Dismissing the overlay, by any
//! means, resets the wrapped view so a later open starts clean.

use super::table_view::{TableView, ViewKind};
use crate::domain::{Card, CardMeta, Dataset, Record};
use crate::ui::surface::ViewAnchors;

/// Table view bound to the card overlay.
#[derive(Debug, Clone)]
pub struct ModalTableView {
    /// The table workflow. Search, paging and selection go straight to it.
    pub table: TableView,

    card: Option<CardMeta>,
    title: String,
    open: bool,
}

impl ModalTableView {
    #[must_use]
    pub fn new(rows_per_page: usize) -> Self {
        Self::with_anchors(ViewAnchors::for_kind(ViewKind::Modal), rows_per_page)
    }

    #[must_use]
    pub fn with_anchors(anchors: ViewAnchors, rows_per_page: usize) -> Self {
        Self {
            table: TableView::with_anchors(ViewKind::Modal, anchors, Dataset::default(), rows_per_page),
            card: None,
            title: String::new(),
            open: false,
        }
    }

    /// Loads `card`'s records, titles the overlay with its table name and
    /// marks the overlay open. All search, paging and selection state is
    /// reset.
    pub fn open_for(&mut self, card: &Card) {
        tracing::debug!(
            table_name = %card.table_name,
            record_count = card.table_data.len(),
            "opening card table"
        );

        self.table.replace_dataset(card.dataset());
        self.card = Some(card.meta());
        self.title.clone_from(&card.table_name);
        self.open = true;
    }

    /// Resets modal state after the overlay was dismissed.
    ///
    /// The card's dataset stays loaded; only derived state is cleared.
    pub fn on_close(&mut self) {
        if self.open {
            tracing::debug!(title = %self.title, "card table closed");
        }
        self.table.reset();
        self.open = false;
    }

    /// Confirms the current selection.
    ///
    /// Returns the record to finalize and closes the overlay, or returns
    /// `None` and leaves the overlay open when nothing is selected.
    pub fn confirm(&mut self) -> Option<Record> {
        let record = self.table.commit_selection().cloned()?;
        self.on_close();
        Some(record)
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Overlay title: the open card's table name.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Metadata of the card last opened.
    #[must_use]
    pub const fn card(&self) -> Option<&CardMeta> {
        self.card.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, records: Vec<Record>) -> Card {
        Card {
            db_id: "1".to_string(),
            db_name: "CUSTOM-REF-1".to_string(),
            table_id: "7".to_string(),
            table_name: name.to_string(),
            table_description: None,
            table_data: records,
        }
    }

    fn gases() -> Vec<Record> {
        vec![
            Record::from_pairs([("Name", "Argon"), ("Formula", "Ar")]),
            Record::from_pairs([("Name", "Nitrogen"), ("Formula", "N2")]),
        ]
    }

    #[test]
    fn open_loads_card_and_titles_overlay() {
        let mut modal = ModalTableView::new(50);
        modal.open_for(&card("gases", gases()));

        assert!(modal.is_open());
        assert_eq!(modal.title(), "gases");
        assert_eq!(modal.table.filtered_len(), 2);
        assert_eq!(modal.card().unwrap().table_id, "7");
    }

    #[test]
    fn reopening_never_leaks_previous_state() {
        let mut modal = ModalTableView::new(50);
        modal.open_for(&card("gases", gases()));
        modal.table.set_search_term("argon");
        modal.table.select_row(0);

        modal.on_close();
        assert!(!modal.is_open());
        assert_eq!(modal.table.search_term(), "");
        assert!(modal.table.selected_record().is_none());

        modal.open_for(&card("liquids", vec![Record::from_pairs([("Name", "Water")])]));
        assert_eq!(modal.table.filtered_len(), 1);
        assert!(!modal.table.commit_enabled());
    }

    #[test]
    fn confirm_hands_back_record_and_closes() {
        let mut modal = ModalTableView::new(50);
        modal.open_for(&card("gases", gases()));

        assert!(modal.confirm().is_none());
        assert!(modal.is_open());

        modal.table.select_row(1);
        let record = modal.confirm().unwrap();
        assert_eq!(record.cell_text("Name"), "Nitrogen");
        assert!(!modal.is_open());
        assert!(modal.table.selected_record().is_none());
    }
}
