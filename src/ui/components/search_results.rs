//! Global search result list.

use crate::app::search::SearchMatch;
use crate::ui::helpers::html_escape;
use std::fmt::Write;

pub const NO_RESULTS: &str = r#"<li class="list-group-item">No results found.</li>"#;

/// Renders one list item per match, or the [`NO_RESULTS`] placeholder.
#[must_use]
pub fn render_search_results(matches: &[SearchMatch]) -> String {
    if matches.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut html = String::new();
    for m in matches {
        let _ = write!(
            html,
            concat!(
                r#"<li class="list-group-item">"#,
                "<div>🔍 <strong>Record:</strong> {name}</div>",
                "<div>📝 <strong>Formula:</strong> {formula}</div>",
                "<div>📚 <strong>Databook:</strong> {db_name} (Id: {db_id})</div>",
                "<div>📊 <strong>Table:</strong> {table_name} (Id: {table_id})</div>",
                "</li>"
            ),
            name = html_escape(&m.record_name()),
            formula = html_escape(&m.record_formula()),
            db_name = html_escape(&m.db_name),
            db_id = html_escape(&m.db_id),
            table_name = html_escape(&m.table_name),
            table_id = html_escape(&m.table_id),
        );
    }
    html
}
