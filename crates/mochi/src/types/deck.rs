//! Deck-related types.

use serde::Deserialize;

use super::{lenient_bool, lenient_opt_string, lenient_string};

/// A named collection of cards.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Deck {
    /// The deck ID.
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    /// The deck name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// ID of the parent deck, for nested decks.
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub parent_id: Option<String>,
    /// Whether the deck is archived.
    #[serde(rename = "archived?", default, deserialize_with = "lenient_bool")]
    pub archived: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_names() {
        let deck: Deck = serde_json::from_value(serde_json::json!({
            "id": "d1",
            "name": "Japanese",
            "parent-id": "d0",
            "archived?": true,
            "sort": 3
        }))
        .unwrap();

        assert_eq!(deck.id, "d1");
        assert_eq!(deck.name, "Japanese");
        assert_eq!(deck.parent_id.as_deref(), Some("d0"));
        assert!(deck.archived);
    }

    #[test]
    fn missing_and_null_fields_are_blank() {
        let deck: Deck = serde_json::from_value(serde_json::json!({ "name": null })).unwrap();
        assert_eq!(deck, Deck::default());
    }

    #[test]
    fn mistyped_fields_are_blank() {
        let deck: Deck = serde_json::from_value(serde_json::json!({
            "id": "d1",
            "name": 42,
            "parent-id": {"id": "d0"}
        }))
        .unwrap();

        assert_eq!(deck.id, "d1");
        assert_eq!(deck.name, "");
        assert_eq!(deck.parent_id, None);
    }
}
