//! Card grid renderer.
//!
//! One column per card, each with a "View Table" control whose `data-index`
//! is the card's position in the collection.

use crate::domain::Card;
use crate::ui::helpers::html_escape;
use std::fmt::Write;

/// Renders the whole card grid.
#[must_use]
pub fn render_cards(cards: &[Card]) -> String {
    let mut html = String::new();
    for (index, card) in cards.iter().enumerate() {
        let _ = write!(
            html,
            concat!(
                r#"<div class="col-md-4 mb-3"><div class="card" data-index="{index}">"#,
                r#"<div class="card-body d-flex flex-column">"#,
                r#"<h5 class="card-title">📊 {name}</h5>"#,
                r#"<p class="card-text"><strong>🆔 Databook ID:</strong> {db_id}<br>"#,
                r#"<strong>🆔 Table ID:</strong> {table_id}</p>"#,
                r#"<p class="card-text"><strong>📝 Table Description:</strong><br>{description}</p>"#,
                r#"<div class="mt-auto"><button class="btn btn-primary view-table-btn" data-index="{index}">🔍 View Table</button></div>"#,
                "</div></div></div>"
            ),
            index = index,
            name = html_escape(&card.table_name),
            db_id = html_escape(&card.db_id),
            table_id = html_escape(&card.table_id),
            description = html_escape(card.description()),
        );
    }
    html
}
