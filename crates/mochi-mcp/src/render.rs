//! Plain-text rendering of Mochi responses.
//!
//! Tool output is meant to be read by a model, so everything here produces
//! short labelled lines rather than JSON.

use std::fmt::Display;

use mochi::{Card, Deck, Page};

/// Number of characters of card content shown in listings.
pub const PREVIEW_CHARS: usize = 100;

/// Render a failed operation as `Error <doing>: <message>`.
pub fn error(doing: &str, err: &impl Display) -> String {
    format!("Error {}: {}", doing, err)
}

pub fn decks(page: &Page<Deck>) -> String {
    let mut out = String::from("Your Mochi Decks:\n\n");

    for deck in &page.docs {
        out.push_str(&format!("ID: {}\nName: {}\n\n", deck.id, deck.name));
    }

    if let Some(bookmark) = page.next_bookmark() {
        out.push_str(&format!(
            "\nMore decks available. Use bookmark: {}",
            bookmark
        ));
    }

    out
}

pub fn created(card: &Card) -> String {
    format!("Card created successfully with ID: {}", card.id)
}

pub fn card(card: &Card) -> String {
    let mut out = format!(
        "Card ID: {}\nDeck ID: {}\nContent: {}\nCreated: {}\nUpdated: {}\n",
        card.id,
        card.deck_id,
        card.content,
        card.created().unwrap_or_default(),
        card.updated().unwrap_or_default(),
    );

    if !card.tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", card.tags.join(", ")));
    }

    out
}

pub fn updated(card_id: &str) -> String {
    format!("Card {} updated successfully", card_id)
}

pub fn deleted(card_id: &str) -> String {
    format!("Card {} deleted successfully", card_id)
}

pub fn cards(page: &Page<Card>, deck_id: Option<&str>) -> String {
    let mut out = match deck_id {
        Some(deck_id) => format!("Cards for deck {}:\n\n", deck_id),
        None => String::from("Cards:\n\n"),
    };

    for card in &page.docs {
        let name = card
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("Untitled");

        out.push_str(&format!("ID: {}\n", card.id));
        out.push_str(&format!("Name: {}\n", name));
        out.push_str(&format!("Deck ID: {}\n", card.deck_id));
        out.push_str(&format!("Content: {}\n", preview(&card.content)));
        if !card.tags.is_empty() {
            out.push_str(&format!("Tags: {}\n", card.tags.join(", ")));
        }
        out.push_str(&format!(
            "Created: {}\n\n",
            card.created().unwrap_or_default()
        ));
    }

    if let Some(bookmark) = page.next_bookmark() {
        out.push_str(&format!(
            "More cards available. Use bookmark: {}",
            bookmark
        ));
    }

    out
}

/// Truncate content to [`PREVIEW_CHARS`] characters, marking the cut with `...`.
pub fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mochi::Timestamp;

    fn deck(id: &str, name: &str) -> Deck {
        Deck {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn error_quotes_message() {
        assert_eq!(
            error("fetching decks", &"connection refused"),
            "Error fetching decks: connection refused"
        );
    }

    #[test]
    fn decks_in_received_order() {
        let page = Page {
            docs: vec![deck("d2", "Zulu"), deck("d1", "Alpha")],
            bookmark: None,
        };

        assert_eq!(
            decks(&page),
            "Your Mochi Decks:\n\nID: d2\nName: Zulu\n\nID: d1\nName: Alpha\n\n"
        );
    }

    #[test]
    fn decks_bookmark_is_last_line() {
        let page = Page {
            docs: vec![deck("d1", "Alpha")],
            bookmark: Some("b2".to_string()),
        };

        let out = decks(&page);
        assert!(out.ends_with("\nMore decks available. Use bookmark: b2"));
        assert_eq!(out.lines().last(), Some("More decks available. Use bookmark: b2"));
    }

    #[test]
    fn decks_without_bookmark_has_no_notice() {
        let page = Page {
            docs: vec![deck("d1", "Alpha")],
            bookmark: Some(String::new()),
        };
        assert!(!decks(&page).contains("bookmark"));
    }

    #[test]
    fn card_details() {
        let c = Card {
            id: "c1".to_string(),
            deck_id: "d1".to_string(),
            content: "hi".to_string(),
            tags: vec!["x".to_string(), "y".to_string()],
            created_at: Some(Timestamp {
                date: Some("2024-01-01".to_string()),
            }),
            ..Default::default()
        };

        assert_eq!(
            card(&c),
            "Card ID: c1\nDeck ID: d1\nContent: hi\nCreated: 2024-01-01\nUpdated: \nTags: x, y\n"
        );
    }

    #[test]
    fn card_without_tags_has_no_tag_line() {
        let c = Card {
            id: "c1".to_string(),
            ..Default::default()
        };
        assert!(!card(&c).contains("Tags:"));
    }

    #[test]
    fn preview_truncates_long_content() {
        let long = "a".repeat(150);
        let out = preview(&long);
        assert_eq!(out.len(), 103);
        assert_eq!(out, format!("{}...", "a".repeat(100)));
    }

    #[test]
    fn preview_keeps_short_content() {
        let short = "b".repeat(50);
        assert_eq!(preview(&short), short);

        let exact = "c".repeat(100);
        assert_eq!(preview(&exact), exact);
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let long = "é".repeat(120);
        let out = preview(&long);
        assert_eq!(out.chars().count(), 103);
        assert!(out.starts_with(&"é".repeat(100)));
    }

    #[test]
    fn cards_listing() {
        let page = Page {
            docs: vec![
                Card {
                    id: "c1".to_string(),
                    deck_id: "d1".to_string(),
                    name: Some("Greeting".to_string()),
                    content: "hello".to_string(),
                    tags: vec!["lang".to_string()],
                    created_at: Some(Timestamp {
                        date: Some("2024-02-02".to_string()),
                    }),
                    ..Default::default()
                },
                Card {
                    id: "c2".to_string(),
                    deck_id: "d1".to_string(),
                    content: "bye".to_string(),
                    ..Default::default()
                },
            ],
            bookmark: Some("next".to_string()),
        };

        assert_eq!(
            cards(&page, Some("d1")),
            "Cards for deck d1:\n\n\
             ID: c1\nName: Greeting\nDeck ID: d1\nContent: hello\nTags: lang\nCreated: 2024-02-02\n\n\
             ID: c2\nName: Untitled\nDeck ID: d1\nContent: bye\nCreated: \n\n\
             More cards available. Use bookmark: next"
        );
    }

    #[test]
    fn cards_unfiltered_header() {
        let out = cards(&Page::default(), None);
        assert_eq!(out, "Cards:\n\n");
    }
}
