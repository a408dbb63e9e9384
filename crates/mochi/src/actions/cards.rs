//! Card-related Mochi actions.
//!
//! # Example
//!
//! ```no_run
//! use mochi::{CardUpdate, ListCards, MochiClient, NewCard};
//!
//! # async fn example() -> mochi::Result<()> {
//! let client = MochiClient::builder().api_key("my-key").build()?;
//!
//! let card = client
//!     .cards()
//!     .create(&NewCard::new("deck123", "What is 2 + 2?\n---\n4").tags(["math"]))
//!     .await?;
//!
//! client
//!     .cards()
//!     .update(&card.id, &CardUpdate::new().archived(true))
//!     .await?;
//!
//! let page = client.cards().list(&ListCards::new().deck("deck123")).await?;
//! println!("{} cards", page.docs.len());
//! # Ok(())
//! # }
//! ```

use reqwest::Method;

use crate::client::MochiClient;
use crate::error::Result;
use crate::types::{Card, CardUpdate, ListCards, NewCard, Page};

/// Provides access to card-related operations.
///
/// Obtained via [`MochiClient::cards()`].
#[derive(Debug)]
pub struct CardActions<'a> {
    pub(crate) client: &'a MochiClient,
}

impl<'a> CardActions<'a> {
    /// List one page of cards, optionally filtered by deck.
    pub async fn list(&self, query: &ListCards) -> Result<Page<Card>> {
        let pairs = query.query_pairs()?;
        self.client
            .fetch(Method::GET, &["cards"], &pairs, None)
            .await
    }

    /// Create a card. Returns the card as stored by Mochi.
    pub async fn create(&self, card: &NewCard) -> Result<Card> {
        let body = serde_json::to_value(card)?;
        self.client
            .fetch(Method::POST, &["cards"], &[], Some(body))
            .await
    }

    /// Get a single card by ID.
    pub async fn get(&self, card_id: &str) -> Result<Card> {
        self.client
            .fetch(Method::GET, &["cards", card_id], &[], None)
            .await
    }

    /// Apply a partial update to a card.
    ///
    /// Returns the updated card when Mochi echoes it back.
    pub async fn update(&self, card_id: &str, update: &CardUpdate) -> Result<Option<Card>> {
        let body = serde_json::to_value(update)?;
        self.client
            .fetch_optional(Method::POST, &["cards", card_id], Some(body))
            .await
    }

    /// Permanently delete a card.
    pub async fn delete(&self, card_id: &str) -> Result<()> {
        self.client
            .execute(Method::DELETE, &["cards", card_id])
            .await
    }
}
