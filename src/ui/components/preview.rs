//! Selection preview panel.

use crate::ui::helpers::html_escape;
use crate::ui::viewmodel::PreviewField;
use std::fmt::Write;

/// Markup shown when nothing is selected.
pub const NO_SELECTION: &str = "<p>No data selected</p>";

/// Renders the selected record as label/value pairs, in record key order.
#[must_use]
pub fn render_preview(fields: Option<&[PreviewField]>) -> String {
    let Some(fields) = fields else {
        return NO_SELECTION.to_string();
    };

    let mut html = String::from(r#"<div class="row">"#);
    for field in fields {
        let _ = write!(
            html,
            r#"<div class="col-md-6 mb-2"><div class="fw-bold">{}:</div><div>{}</div></div>"#,
            html_escape(&field.label),
            html_escape(&field.value)
        );
    }
    html.push_str("</div>");
    html
}
