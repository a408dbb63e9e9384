//! Tool handlers.
//!
//! Each handler performs one Mochi call and renders the outcome as text.
//! Remote failures never escape as errors: they come back as
//! `Error <doing>: <message>` text in place of the normal output.

use mochi::{CardUpdate, ListCards, MochiClient, NewCard};
use tracing::{debug, info, warn};

use crate::render;

fn failure(doing: &str, err: &mochi::Error) -> String {
    warn!(error = %err, "Error {}", doing);
    render::error(doing, err)
}

/// Treat empty strings from the caller as "not supplied".
fn supplied(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub async fn list_decks(client: &MochiClient, bookmark: Option<&str>) -> String {
    let bookmark = supplied(bookmark);
    debug!(bookmark = ?bookmark, "Listing decks");

    match client.decks().list(bookmark).await {
        Ok(page) => {
            debug!(count = page.docs.len(), more = page.has_more(), "Listed decks");
            render::decks(&page)
        }
        Err(e) => failure("fetching decks", &e),
    }
}

pub async fn create_card(
    client: &MochiClient,
    deck_id: &str,
    content: &str,
    tags: Option<Vec<String>>,
) -> String {
    debug!(deck_id, tags = ?tags, "Creating card");

    let mut card = NewCard::new(deck_id, content);
    if let Some(tags) = tags {
        card = card.tags(tags);
    }

    match client.cards().create(&card).await {
        Ok(created) => {
            info!(card_id = %created.id, deck_id, "Card created");
            render::created(&created)
        }
        Err(e) => failure("creating card", &e),
    }
}

pub async fn get_card(client: &MochiClient, card_id: &str) -> String {
    debug!(card_id, "Getting card");

    match client.cards().get(card_id).await {
        Ok(card) => render::card(&card),
        Err(e) => failure("fetching card", &e),
    }
}

pub async fn update_card(client: &MochiClient, card_id: &str, update: CardUpdate) -> String {
    debug!(card_id, empty = update.is_empty(), update = ?update, "Updating card");

    match client.cards().update(card_id, &update).await {
        Ok(_) => {
            info!(card_id, "Card updated");
            render::updated(card_id)
        }
        Err(e) => failure("updating card", &e),
    }
}

pub async fn delete_card(client: &MochiClient, card_id: &str) -> String {
    debug!(card_id, "Deleting card");

    match client.cards().delete(card_id).await {
        Ok(()) => {
            info!(card_id, "Card deleted");
            render::deleted(card_id)
        }
        Err(e) => failure("deleting card", &e),
    }
}

pub async fn list_cards(
    client: &MochiClient,
    deck_id: Option<&str>,
    limit: i64,
    bookmark: Option<&str>,
) -> String {
    let deck_id = supplied(deck_id);
    let bookmark = supplied(bookmark);
    debug!(deck_id = ?deck_id, limit, bookmark = ?bookmark, "Listing cards");

    let mut query = ListCards::new().limit(limit);
    if let Some(deck_id) = deck_id {
        query = query.deck(deck_id);
    }
    if let Some(bookmark) = bookmark {
        query = query.bookmark(bookmark);
    }

    match client.cards().list(&query).await {
        Ok(page) => {
            debug!(count = page.docs.len(), more = page.has_more(), "Listed cards");
            render::cards(&page, deck_id)
        }
        Err(e) => failure("fetching cards", &e),
    }
}
