//! Event handling and state transition logic.
//!
//! [`handle_event`] is the one place page state changes. It pattern-matches
//! an [`Event`], drives the table views, and returns whether the page needs a
//! re-render together with the [`Action`]s the runtime must carry out.
//!
//! # Event Types
//!
//! - **Table**: `SearchInput`, `GoToPage`, `NextPage`, `PrevPage`,
//!   `SelectRow`, `Commit`, `Reset`, each addressed to one view
//! - **Card overlay**: `OpenCard`, `ModalSelect`, `ModalConfirm`,
//!   `ModalDismissed`
//! - **Page**: `GlobalSearch`, `ToggleTheme`
//!
//! # Example
//!
//! ```
//! use databook_viewer::app::{handle_event, Event, Page, ViewKind};
//! use databook_viewer::{Config, Dataset};
//!
//! let dataset = Dataset::from_json(r#"[{"Name": "Water"}, {"Name": "Ethanol"}]"#)?;
//! let mut page = Page::new(dataset, Vec::new(), &Config::default())?;
//!
//! let (render, actions) = handle_event(&mut page, &Event::search(ViewKind::Main, "eth"))?;
//! assert!(render && actions.is_empty());
//! assert_eq!(page.main.filtered_len(), 1);
//! # Ok::<(), databook_viewer::ViewerError>(())
//! ```

use super::actions::{Action, Overlay};
use super::search::search_cards;
use super::state::Page;
use super::table_view::ViewKind;
use crate::domain::{Result, ViewerError};

/// User interactions with the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search input of a view changed.
    SearchInput { view: ViewKind, term: String },

    /// A page-number control was activated.
    GoToPage { view: ViewKind, page: usize },

    NextPage(ViewKind),

    PrevPage(ViewKind),

    /// A row's selection control was activated. `index` is the row's
    /// `data-index`.
    SelectRow { view: ViewKind, index: usize },

    /// A view's commit control was activated.
    Commit(ViewKind),

    /// A view's reset control was activated.
    Reset(ViewKind),

    /// A card's "View Table" control was activated.
    OpenCard(usize),

    /// The card overlay's select control was activated.
    ModalSelect,

    /// The card overlay's confirm control was activated.
    ModalConfirm,

    /// The card overlay was dismissed by close button, backdrop or escape.
    ModalDismissed,

    /// The global search control was activated with the given query.
    GlobalSearch(String),

    ToggleTheme,
}

impl Event {
    /// Shorthand for [`Event::SearchInput`].
    #[must_use]
    pub fn search(view: ViewKind, term: impl Into<String>) -> Self {
        Self::SearchInput {
            view,
            term: term.into(),
        }
    }
}

/// Processes an event, mutates page state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `false` when the event was
/// a no-op (an out-of-range page, a row off the current page, an unknown
/// card, a commit without selection).
///
/// # Errors
///
/// Returns errors from operations the page cannot recover from on its own.
/// A blank global search is not one of them: it is reported to the user
/// through [`Action::Alert`].
pub fn handle_event(page: &mut Page, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchInput { view, term } => {
            page.view_mut(*view).set_search_term(term);
            Ok((true, vec![]))
        }
        Event::GoToPage { view, page: n } => Ok((page.view_mut(*view).go_to_page(*n), vec![])),
        Event::NextPage(view) => Ok((page.view_mut(*view).next_page(), vec![])),
        Event::PrevPage(view) => Ok((page.view_mut(*view).prev_page(), vec![])),
        Event::SelectRow { view, index } => Ok((page.view_mut(*view).select_row(*index), vec![])),
        Event::Commit(view) => {
            let actions = page
                .view(*view)
                .commit_selection()
                .map(|record| Action::CommitSelection {
                    origin: *view,
                    record: record.clone(),
                })
                .into_iter()
                .collect();
            Ok((false, actions))
        }
        Event::Reset(view) => {
            page.view_mut(*view).reset();
            Ok((true, vec![Action::ClearSearchInput(*view)]))
        }
        Event::OpenCard(index) => {
            let Some(card) = page.cards.get(*index) else {
                tracing::debug!(error = %ViewerError::UnknownCard(*index), "card request ignored");
                return Ok((false, vec![]));
            };

            page.modal.open_for(card);
            Ok((
                true,
                vec![
                    Action::ClearSearchInput(ViewKind::Modal),
                    Action::ShowOverlay(Overlay::CardTable),
                ],
            ))
        }
        Event::ModalSelect => {
            let has_selection = page.modal.table.selected_record().is_some();
            tracing::debug!(has_selection, "modal selection previewed");
            Ok((has_selection, vec![]))
        }
        Event::ModalConfirm => {
            let Some(record) = page.modal.confirm() else {
                tracing::debug!("modal confirm without selection ignored");
                return Ok((false, vec![]));
            };

            Ok((
                true,
                vec![
                    Action::CommitSelection {
                        origin: ViewKind::Modal,
                        record,
                    },
                    Action::HideOverlay(Overlay::CardTable),
                    Action::ClearSearchInput(ViewKind::Modal),
                ],
            ))
        }
        Event::ModalDismissed => {
            page.modal.on_close();
            Ok((true, vec![Action::ClearSearchInput(ViewKind::Modal)]))
        }
        Event::GlobalSearch(query) => match search_cards(&page.cards, query) {
            Ok(matches) => {
                page.search_results = Some(matches);
                Ok((true, vec![Action::ShowOverlay(Overlay::SearchResults)]))
            }
            Err(ViewerError::EmptyQuery) => {
                Ok((false, vec![Action::Alert(ViewerError::EmptyQuery.to_string())]))
            }
            Err(e) => Err(e),
        },
        Event::ToggleTheme => {
            page.color_mode = page.color_mode.toggled();
            tracing::debug!(mode = %page.color_mode, "colour mode toggled");
            Ok((true, vec![Action::PersistTheme(page.color_mode)]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Card, Dataset, Record};
    use crate::ui::theme::ColorMode;
    use crate::Config;

    fn page() -> Page {
        let dataset = Dataset::new(vec![
            Record::from_pairs([("Name", "Water"), ("Formula", "H2O")]),
            Record::from_pairs([("Name", "Ethanol"), ("Formula", "C2H5OH")]),
        ]);
        let cards = Card::list_from_json(
            r#"[{"db_id": "1", "db_name": "REF-1", "table_id": "2", "table_name": "gases",
                 "table_data": [{"Name": "Argon", "Formula": "Ar"}, {"Name": "Neon", "Formula": "Ne"}]}]"#,
        )
        .unwrap();
        Page::new(dataset, cards, &Config::default()).unwrap()
    }

    fn run(page: &mut Page, event: Event) -> (bool, Vec<Action>) {
        handle_event(page, &event).unwrap()
    }

    #[test]
    fn out_of_range_page_skips_render() {
        let mut page = page();
        assert_eq!(run(&mut page, Event::GoToPage { view: ViewKind::Main, page: 2 }), (false, vec![]));
        assert_eq!(run(&mut page, Event::NextPage(ViewKind::Main)), (false, vec![]));
    }

    #[test]
    fn commit_without_selection_does_nothing() {
        let mut page = page();
        assert_eq!(run(&mut page, Event::Commit(ViewKind::Main)), (false, vec![]));
    }

    #[test]
    fn commit_hands_selected_record_to_sink() {
        let mut page = page();
        run(&mut page, Event::SelectRow { view: ViewKind::Main, index: 1 });

        let (_, actions) = run(&mut page, Event::Commit(ViewKind::Main));
        assert_eq!(
            actions,
            vec![Action::CommitSelection {
                origin: ViewKind::Main,
                record: Record::from_pairs([("Name", "Ethanol"), ("Formula", "C2H5OH")]),
            }]
        );
    }

    #[test]
    fn reset_clears_input() {
        let mut page = page();
        run(&mut page, Event::search(ViewKind::Main, "eth"));
        let (render, actions) = run(&mut page, Event::Reset(ViewKind::Main));
        assert!(render);
        assert_eq!(actions, vec![Action::ClearSearchInput(ViewKind::Main)]);
        assert_eq!(page.main.filtered_len(), 2);
    }

    #[test]
    fn open_card_and_confirm() {
        let mut page = page();
        let (render, actions) = run(&mut page, Event::OpenCard(0));
        assert!(render);
        assert!(actions.contains(&Action::ShowOverlay(Overlay::CardTable)));
        assert_eq!(page.modal.title(), "gases");

        assert_eq!(run(&mut page, Event::ModalConfirm), (false, vec![]));

        run(&mut page, Event::SelectRow { view: ViewKind::Modal, index: 1 });
        assert!(run(&mut page, Event::ModalSelect).0);

        let (_, actions) = run(&mut page, Event::ModalConfirm);
        assert!(matches!(
            &actions[0],
            Action::CommitSelection { origin: ViewKind::Modal, record } if record.cell_text("Name") == "Neon"
        ));
        assert!(actions.contains(&Action::HideOverlay(Overlay::CardTable)));
        assert!(!page.modal.is_open());
    }

    #[test]
    fn unknown_card_is_ignored() {
        let mut page = page();
        assert_eq!(run(&mut page, Event::OpenCard(9)), (false, vec![]));
        assert!(!page.modal.is_open());
    }

    #[test]
    fn dismissing_modal_resets_it() {
        let mut page = page();
        run(&mut page, Event::OpenCard(0));
        run(&mut page, Event::search(ViewKind::Modal, "neon"));
        run(&mut page, Event::SelectRow { view: ViewKind::Modal, index: 0 });

        run(&mut page, Event::ModalDismissed);
        assert_eq!(page.modal.table.search_term(), "");
        assert!(!page.modal.table.commit_enabled());
    }

    #[test]
    fn blank_global_search_alerts_without_overlay() {
        let mut page = page();
        let (render, actions) = run(&mut page, Event::GlobalSearch("  ".to_string()));
        assert!(!render);
        assert_eq!(actions, vec![Action::Alert("Please enter a search term.".to_string())]);
        assert!(page.search_results.is_none());
    }

    #[test]
    fn global_search_leaves_views_alone() {
        let mut page = page();
        run(&mut page, Event::search(ViewKind::Main, "wat"));

        let (_, actions) = run(&mut page, Event::GlobalSearch("ar".to_string()));
        assert_eq!(actions, vec![Action::ShowOverlay(Overlay::SearchResults)]);
        assert_eq!(page.search_results.as_ref().unwrap().len(), 1);
        assert_eq!(page.main.search_term(), "wat");
        assert!(!page.modal.is_open());
    }

    #[test]
    fn toggle_theme_persists_new_mode() {
        let mut page = page();
        let (_, actions) = run(&mut page, Event::ToggleTheme);
        assert_eq!(page.color_mode, ColorMode::Dark);
        assert_eq!(actions, vec![Action::PersistTheme(ColorMode::Dark)]);
    }
}
