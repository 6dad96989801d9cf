//! Table component renderer.
//!
//! Renders a [`TableViewModel`] into the inner markup of a `<table>`: a
//! header row (`Select` plus one column per field) and one body row per
//! record, each led by a radio selection control.

use crate::ui::helpers::html_escape;
use crate::ui::viewmodel::{RowItem, TableViewModel};
use std::fmt::Write;

/// Body shown when the current page has no rows.
pub const PLACEHOLDER_ROW: &str =
    r#"<tr><td colspan="100%" class="text-center">No data available</td></tr>"#;

/// Renders the whole table: `<thead>` and `<tbody>`.
///
/// # Parameters
///
/// * `vm` - View model of the current page
/// * `radio_name` - Name shared by the row radio controls
///
/// # Returns
///
/// Markup for the table element's children. An empty page yields an empty
/// header row and the [`PLACEHOLDER_ROW`] body.
#[must_use]
pub fn render_table(vm: &TableViewModel, radio_name: &str) -> String {
    if vm.is_empty() {
        return format!("<thead><tr></tr></thead><tbody>{PLACEHOLDER_ROW}</tbody>");
    }

    let mut html = String::from("<thead>");
    html.push_str(&render_table_headers(&vm.columns));
    html.push_str("</thead><tbody>");
    for row in &vm.rows {
        html.push_str(&render_table_row(row, radio_name));
    }
    html.push_str("</tbody>");
    html
}

fn render_table_headers(columns: &[String]) -> String {
    let mut html = String::from("<tr><th>Select</th>");
    for column in columns {
        let _ = write!(html, "<th>{}</th>", html_escape(column));
    }
    html.push_str("</tr>");
    html
}

fn render_table_row(row: &RowItem, radio_name: &str) -> String {
    let (class, checked) = if row.is_selected {
        (r#" class="selected-row""#, " checked")
    } else {
        ("", "")
    };

    let mut html = format!(
        r#"<tr data-index="{index}"{class}><td><input type="radio" name="{name}" class="form-check-input"{checked}></td>"#,
        index = row.global_index,
        name = html_escape(radio_name),
    );
    for cell in &row.cells {
        let _ = write!(html, "<td>{}</td>", html_escape(cell));
    }
    html.push_str("</tr>");
    html
}
