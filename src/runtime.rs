//! Page runtime: wires page state to a surface, a preference store and a
//! selection sink.
//!
//! [`Viewer`] is what a host embeds. It owns the [`Page`], translates each
//! [`Event`] through [`handle_event`], carries out the resulting
//! [`Action`]s and re-renders the surface when the handler asks for it.
//!
//! # Example
//!
//! ```
//! use databook_viewer::app::{LogSink, ViewKind};
//! use databook_viewer::storage::MemoryPreferenceStore;
//! use databook_viewer::{Config, Dataset, Event, MarkupDocument, Page, Viewer};
//!
//! let dataset = Dataset::from_json(r#"[{"Name": "Water"}, {"Name": "Ethanol"}]"#)?;
//! let page = Page::new(dataset, Vec::new(), &Config::default())?;
//! let mut viewer = Viewer::new(page, MarkupDocument::standard_page(), MemoryPreferenceStore::new(), LogSink);
//!
//! assert!(viewer.dispatch(&Event::search(ViewKind::Main, "eth")));
//! assert!(!viewer.surface().inner_html("dataTable").unwrap_or_default().contains("Water"));
//! # Ok::<(), databook_viewer::ViewerError>(())
//! ```

use crate::app::{handle_event, Action, Event, Overlay, Page, SelectionSink};
use crate::storage::{PreferenceStore, THEME_SLOT};
use crate::ui::{render_footer_year, render_page, ColorMode, Surface};
use chrono::Datelike;

/// A running data page.
#[derive(Debug)]
pub struct Viewer<S, P, K> {
    page: Page,
    surface: S,
    preferences: P,
    sink: K,
}

impl<S, P, K> Viewer<S, P, K>
where
    S: Surface,
    P: PreferenceStore,
    K: SelectionSink,
{
    /// Starts a page session.
    ///
    /// Restores the stored colour mode, writes the footer year and renders
    /// every projection once. A stored mode that cannot be read or parsed is
    /// logged and the page keeps its configured default.
    pub fn new(mut page: Page, surface: S, preferences: P, sink: K) -> Self {
        let _span = tracing::debug_span!("viewer_start").entered();

        match preferences.get(THEME_SLOT) {
            Ok(Some(stored)) => match stored.parse::<ColorMode>() {
                Ok(mode) => page.color_mode = mode,
                Err(e) => tracing::warn!(error = %e, "ignoring stored colour mode"),
            },
            Ok(None) => tracing::debug!("no stored colour mode"),
            Err(e) => tracing::warn!(error = %e, "failed to read colour mode preference"),
        }

        let mut viewer = Self {
            page,
            surface,
            preferences,
            sink,
        };

        let year = chrono::Local::now().year();
        if let Err(e) = render_footer_year(&viewer.page, &mut viewer.surface, year) {
            tracing::warn!(error = %e, "failed to write footer year");
        }
        viewer.render();

        tracing::debug!(
            rows = viewer.page.main.filtered_len(),
            cards = viewer.page.cards.len(),
            mode = %viewer.page.color_mode,
            "viewer started"
        );
        viewer
    }

    /// Processes one user interaction.
    ///
    /// Returns whether the surface was re-rendered. Errors are logged and the
    /// page keeps its previous state.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.page, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled successfully");
                if should_render {
                    self.render();
                }
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Re-renders every projection from the current page state.
    pub fn render(&mut self) {
        if let Err(e) = render_page(&self.page, &mut self.surface) {
            tracing::warn!(error = %e, "render failed");
        }
    }

    fn execute_action(&mut self, action: &Action) {
        let _span = tracing::debug_span!("execute_action", action = ?action).entered();

        let result = match action {
            Action::CommitSelection { origin, record } => {
                self.sink.commit(*origin, record);
                Ok(())
            }
            Action::PersistTheme(mode) => self.preferences.set(THEME_SLOT, mode.as_str()),
            Action::ShowOverlay(overlay) => {
                let id = self.overlay_anchor(*overlay).to_string();
                self.surface.show_overlay(&id)
            }
            Action::HideOverlay(overlay) => {
                let id = self.overlay_anchor(*overlay).to_string();
                self.surface.hide_overlay(&id)
            }
            Action::ClearSearchInput(kind) => {
                let id = self.page.view(*kind).anchors.search_input.clone();
                if self.surface.has_anchor(&id) {
                    self.surface.set_value(&id, "")
                } else {
                    Ok(())
                }
            }
            Action::Alert(message) => {
                self.surface.alert(message);
                Ok(())
            }
        };

        if let Err(e) = result {
            tracing::warn!(error = %e, "action failed");
        }
    }

    fn overlay_anchor(&self, overlay: Overlay) -> &str {
        match overlay {
            Overlay::CardTable => &self.page.anchors.modal,
            Overlay::SearchResults => &self.page.anchors.search_modal,
        }
    }

    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub const fn preferences(&self) -> &P {
        &self.preferences
    }

    /// Ends the session, handing back the surface, store and sink.
    pub fn into_parts(self) -> (S, P, K) {
        (self.surface, self.preferences, self.sink)
    }
}
