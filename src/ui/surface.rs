//! Render targets addressed by anchor ids.
//!
//! The renderer never touches a live document directly. It writes through the
//! [`Surface`] trait, which a host implements over whatever it renders into.
//! [`MarkupDocument`] is the in-memory implementation: a map of anchor id to
//! element state, used by tests and by hosts that serialize markup
//! themselves.

use crate::app::ViewKind;
use crate::domain::{Result, ViewerError};
use std::collections::BTreeMap;

/// Element ids one table view renders into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewAnchors {
    pub search_input: String,
    pub table: String,
    pub pagination: String,
    pub preview: String,
    pub reset_button: String,
    /// Controls enabled only while a selection exists.
    pub commit_buttons: Vec<String>,
    /// Radio group name of the row selection controls.
    pub radio_name: String,
}

impl ViewAnchors {
    /// Anchors of the stock page layout for `kind`.
    #[must_use]
    pub fn for_kind(kind: ViewKind) -> Self {
        match kind {
            ViewKind::Main => Self {
                search_input: "searchInput".to_string(),
                table: "dataTable".to_string(),
                pagination: "paginationControls".to_string(),
                preview: "selectedData".to_string(),
                reset_button: "resetButton".to_string(),
                commit_buttons: vec!["selectButton".to_string()],
                radio_name: "tableSelection".to_string(),
            },
            ViewKind::Modal => Self {
                search_input: "modalSearchInput".to_string(),
                table: "modalDataTable".to_string(),
                pagination: "modalPaginationControls".to_string(),
                preview: "modalSelectedData".to_string(),
                reset_button: "modalResetButton".to_string(),
                commit_buttons: vec![
                    "modalSelectButton".to_string(),
                    "modalConfirmButton".to_string(),
                ],
                radio_name: "modalTableSelection".to_string(),
            },
        }
    }

    /// Anchors a table render writes to. The pagination anchor is left out;
    /// the table renders without one.
    #[must_use]
    pub fn required(&self) -> Vec<&str> {
        let mut ids = vec![self.table.as_str(), self.preview.as_str()];
        ids.extend(self.commit_buttons.iter().map(String::as_str));
        ids
    }
}

/// Page-level element ids outside the two table views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAnchors {
    pub body: String,
    pub theme_toggle: String,
    pub current_year: String,
    pub card_section: String,
    pub modal: String,
    pub modal_title: String,
    pub search_input: String,
    pub search_results: String,
    pub search_modal: String,
}

impl Default for PageAnchors {
    fn default() -> Self {
        Self {
            body: "body".to_string(),
            theme_toggle: "darkModeToggle".to_string(),
            current_year: "currentYear".to_string(),
            card_section: "cardSection".to_string(),
            modal: "tableContentModal".to_string(),
            modal_title: "tableContentModalLabel".to_string(),
            search_input: "componentSearchInput".to_string(),
            search_results: "searchResultsList".to_string(),
            search_modal: "searchResultsModal".to_string(),
        }
    }
}

/// A render target made of elements addressed by id.
///
/// Writes to an id the surface does not have fail with
/// [`ViewerError::MissingAnchor`]. Renderers call [`has_anchor`] for every id
/// they need before writing anything.
///
/// [`has_anchor`]: Surface::has_anchor
pub trait Surface {
    fn has_anchor(&self, id: &str) -> bool;

    /// Replaces the element's children with `html`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::MissingAnchor`] if `id` is unknown.
    fn set_inner_html(&mut self, id: &str, html: &str) -> Result<()>;

    /// Sets the value of an input element.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::MissingAnchor`] if `id` is unknown.
    fn set_value(&mut self, id: &str, value: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns [`ViewerError::MissingAnchor`] if `id` is unknown.
    fn set_disabled(&mut self, id: &str, disabled: bool) -> Result<()>;

    /// # Errors
    ///
    /// Returns [`ViewerError::MissingAnchor`] if `id` is unknown.
    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<()>;

    /// Shows an overlay element.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::MissingAnchor`] if `id` is unknown.
    fn show_overlay(&mut self, id: &str) -> Result<()>;

    /// Hides an overlay element.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::MissingAnchor`] if `id` is unknown.
    fn hide_overlay(&mut self, id: &str) -> Result<()>;

    /// Presents a blocking notice to the user.
    fn alert(&mut self, message: &str) {
        tracing::info!(message, "alert");
    }

    /// Returns the first of `ids` the surface lacks.
    fn first_missing<'a>(&self, ids: &[&'a str]) -> Option<&'a str> {
        ids.iter().copied().find(|id| !self.has_anchor(id))
    }
}

/// State of one element of a [`MarkupDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub inner_html: String,
    pub value: String,
    pub disabled: bool,
    pub visible: bool,
    pub attributes: BTreeMap<String, String>,
}

/// In-memory [`Surface`].
///
/// # Example
///
/// ```
/// use databook_viewer::ui::surface::{MarkupDocument, Surface};
///
/// let mut doc = MarkupDocument::with_anchors(["dataTable"]);
/// doc.set_inner_html("dataTable", "<tr></tr>")?;
/// assert_eq!(doc.inner_html("dataTable"), Some("<tr></tr>"));
/// assert!(doc.set_value("missing", "x").is_err());
/// # Ok::<(), databook_viewer::ViewerError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkupDocument {
    elements: BTreeMap<String, Element>,
    alerts: Vec<String>,
}

impl MarkupDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document with an empty element for each id.
    pub fn with_anchors<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut doc = Self::new();
        for id in ids {
            doc.add_anchor(id);
        }
        doc
    }

    /// Creates a document with every anchor of the stock page layout.
    #[must_use]
    pub fn standard_page() -> Self {
        let page = PageAnchors::default();
        let mut ids = vec![
            page.body,
            page.theme_toggle,
            page.current_year,
            page.card_section,
            page.modal,
            page.modal_title,
            page.search_input,
            page.search_results,
            page.search_modal,
        ];
        for kind in [ViewKind::Main, ViewKind::Modal] {
            let view = ViewAnchors::for_kind(kind);
            ids.extend([view.search_input, view.table, view.pagination, view.preview, view.reset_button]);
            ids.extend(view.commit_buttons);
        }
        Self::with_anchors(ids)
    }

    pub fn add_anchor(&mut self, id: impl Into<String>) {
        self.elements.entry(id.into()).or_default();
    }

    pub fn remove_anchor(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    #[must_use]
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    #[must_use]
    pub fn inner_html(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.inner_html.as_str())
    }

    #[must_use]
    pub fn value(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.value.as_str())
    }

    #[must_use]
    pub fn is_disabled(&self, id: &str) -> Option<bool> {
        self.elements.get(id).map(|e| e.disabled)
    }

    #[must_use]
    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.elements.get(id).map(|e| e.visible)
    }

    #[must_use]
    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.elements
            .get(id)
            .and_then(|e| e.attributes.get(name))
            .map(String::as_str)
    }

    /// Alerts raised so far, oldest first.
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut Element> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| ViewerError::MissingAnchor(id.to_string()))
    }
}

impl Surface for MarkupDocument {
    fn has_anchor(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_inner_html(&mut self, id: &str, html: &str) -> Result<()> {
        self.element_mut(id)?.inner_html = html.to_string();
        Ok(())
    }

    fn set_value(&mut self, id: &str, value: &str) -> Result<()> {
        self.element_mut(id)?.value = value.to_string();
        Ok(())
    }

    fn set_disabled(&mut self, id: &str, disabled: bool) -> Result<()> {
        self.element_mut(id)?.disabled = disabled;
        Ok(())
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<()> {
        self.element_mut(id)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn show_overlay(&mut self, id: &str) -> Result<()> {
        self.element_mut(id)?.visible = true;
        Ok(())
    }

    fn hide_overlay(&mut self, id: &str) -> Result<()> {
        self.element_mut(id)?.visible = false;
        Ok(())
    }

    fn alert(&mut self, message: &str) {
        tracing::info!(message, "alert");
        self.alerts.push(message.to_string());
    }
}
