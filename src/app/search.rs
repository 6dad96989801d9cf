//! Cross-table search over every card's records.
//!
//! This is read-only discovery: it scans the card collection with the same
//! predicate the table views use and returns a flat, annotated match list.
//! No table view is touched.

use crate::domain::{Card, Record, Result, ViewerError};

/// Placeholder shown for record fields a match does not carry.
pub const NOT_AVAILABLE: &str = "N/A";

/// One record that matched a global search, with its card's metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMatch {
    pub db_name: String,
    pub db_id: String,
    pub table_name: String,
    pub table_id: String,
    pub record: Record,
}

impl SearchMatch {
    /// The record's `Name` field, or `N/A`.
    #[must_use]
    pub fn record_name(&self) -> String {
        self.field_or_na("Name")
    }

    /// The record's `Formula` field, or `N/A`.
    #[must_use]
    pub fn record_formula(&self) -> String {
        self.field_or_na("Formula")
    }

    fn field_or_na(&self, key: &str) -> String {
        let text = self.record.cell_text(key);
        if text.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            text
        }
    }
}

/// Searches all cards for records matching `query`.
///
/// The query is trimmed and matched case-insensitively against every field's
/// string form. Matches come back in card order, then record order.
///
/// # Errors
///
/// Returns [`ViewerError::EmptyQuery`] if the trimmed query is empty.
///
/// # Examples
///
/// ```
/// use databook_viewer::app::search::search_cards;
/// use databook_viewer::Card;
///
/// let cards = Card::list_from_json(r#"[{
///     "db_id": "1", "db_name": "REF", "table_id": "2", "table_name": "gases",
///     "table_data": [{"Name": "Argon"}, {"Name": "Neon"}]
/// }]"#)?;
/// let matches = search_cards(&cards, "  NEON ")?;
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].record_formula(), "N/A");
/// # Ok::<(), databook_viewer::ViewerError>(())
/// ```
pub fn search_cards(cards: &[Card], query: &str) -> Result<Vec<SearchMatch>> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return Err(ViewerError::EmptyQuery);
    }

    let _span = tracing::debug_span!("search_cards", card_count = cards.len(), term_len = term.len())
        .entered();

    let matches: Vec<SearchMatch> = cards
        .iter()
        .flat_map(|card| {
            let term = term.as_str();
            card.table_data
                .iter()
                .filter(move |record| record.matches(term))
                .map(move |record| SearchMatch {
                    db_name: card.db_name.clone(),
                    db_id: card.db_id.clone(),
                    table_name: card.table_name.clone(),
                    table_id: card.table_id.clone(),
                    record: record.clone(),
                })
        })
        .collect();

    tracing::debug!(match_count = matches.len(), "global search finished");
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<Card> {
        Card::list_from_json(
            r#"[
                {"db_id": "1", "db_name": "REF-1", "table_id": "10", "table_name": "gases",
                 "table_data": [{"Name": "Argon", "Formula": "Ar"}, {"Name": "Methane", "Formula": "CH4"}]},
                {"db_id": "2", "db_name": "REF-2", "table_id": "20", "table_name": "liquids",
                 "table_data": [{"Name": "Methanol", "Formula": "CH3OH"}, {"Name": "Water", "Formula": "H2O"}]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn blank_query_is_rejected() {
        assert!(matches!(search_cards(&cards(), "   "), Err(ViewerError::EmptyQuery)));
    }

    #[test]
    fn matches_keep_card_then_record_order() {
        let matches = search_cards(&cards(), "meth").unwrap();
        let names: Vec<String> = matches.iter().map(SearchMatch::record_name).collect();
        assert_eq!(names, vec!["Methane", "Methanol"]);

        assert_eq!(matches[0].table_name, "gases");
        assert_eq!(matches[0].db_id, "1");
        assert_eq!(matches[1].db_name, "REF-2");
        assert_eq!(matches[1].table_id, "20");
        assert_eq!(matches[1].record_formula(), "CH3OH");
    }

    #[test]
    fn no_match_is_an_empty_list() {
        assert!(search_cards(&cards(), "xenon").unwrap().is_empty());
    }
}
