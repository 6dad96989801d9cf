//! Card domain model.
//!
//! A card bundles one databook table's metadata with its own record list. The
//! hosting page hands cards over as a JSON array; the card grid lets the user
//! pick one, which then backs the modal table view.

use crate::domain::error::{Result, ViewerError};
use crate::domain::record::{Dataset, Record};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One databook table offered in the card grid.
///
/// Field names follow the page data handoff format, so a card deserializes
/// straight from the objects in `cardData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(deserialize_with = "id_string")]
    pub db_id: String,
    #[serde(default)]
    pub db_name: String,
    #[serde(deserialize_with = "id_string")]
    pub table_id: String,
    pub table_name: String,
    #[serde(default)]
    pub table_description: Option<String>,
    #[serde(default)]
    pub table_data: Vec<Record>,
}

impl Card {
    /// Parses the card collection handed over by the hosting page.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Data`] if the payload is not an array of cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use databook_viewer::Card;
    ///
    /// let cards = Card::list_from_json(r#"[{
    ///     "db_id": "1", "db_name": "CUSTOM-REF-1",
    ///     "table_id": "2", "table_name": "vapor-pressure",
    ///     "table_data": [{"Name": "Water", "Formula": "H2O"}]
    /// }]"#)?;
    /// assert_eq!(cards[0].dataset().len(), 1);
    /// # Ok::<(), databook_viewer::ViewerError>(())
    /// ```
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        let cards: Vec<Self> = serde_json::from_str(json)
            .map_err(|e| ViewerError::Data(format!("failed to parse card data: {e}")))?;

        tracing::debug!(card_count = cards.len(), "cards loaded");
        Ok(cards)
    }

    /// Description text shown on the card, with the fallback for cards that
    /// carry none.
    #[must_use]
    pub fn description(&self) -> &str {
        self.table_description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("No description available.")
    }

    /// Snapshot of the card's records as a dataset.
    #[must_use]
    pub fn dataset(&self) -> Dataset {
        Dataset::new(self.table_data.clone())
    }

    /// Identifying metadata without the record list.
    #[must_use]
    pub fn meta(&self) -> CardMeta {
        CardMeta {
            db_id: self.db_id.clone(),
            db_name: self.db_name.clone(),
            table_id: self.table_id.clone(),
            table_name: self.table_name.clone(),
        }
    }
}

/// Accepts identifiers serialized either as strings or as numbers.
fn id_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Databook and table identifiers of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMeta {
    pub db_id: String,
    pub db_name: String,
    pub table_id: String,
    pub table_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_falls_back_when_missing_or_blank() {
        let mut cards = Card::list_from_json(
            r#"[{"db_id": "1", "table_id": "1", "table_name": "t", "table_description": ""}]"#,
        )
        .unwrap();
        assert_eq!(cards[0].description(), "No description available.");

        cards[0].table_description = Some("Antoine constants".to_string());
        assert_eq!(cards[0].description(), "Antoine constants");
    }

    #[test]
    fn numeric_identifiers_are_accepted() {
        let cards = Card::list_from_json(
            r#"[{"db_id": 1, "table_id": 12, "table_name": "general-data"}]"#,
        )
        .unwrap();
        assert_eq!(cards[0].db_id, "1");
        assert_eq!(cards[0].table_id, "12");
    }

    #[test]
    fn missing_table_data_means_empty_dataset() {
        let cards =
            Card::list_from_json(r#"[{"db_id": "1", "table_id": "1", "table_name": "t"}]"#).unwrap();
        assert!(cards[0].dataset().is_empty());
        assert_eq!(cards[0].meta().db_name, "");
    }
}
