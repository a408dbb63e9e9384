//! Deck-related Mochi actions.
//!
//! # Example
//!
//! ```no_run
//! use mochi::MochiClient;
//!
//! # async fn example() -> mochi::Result<()> {
//! let client = MochiClient::builder().api_key("my-key").build()?;
//!
//! // Walk every page of decks
//! let mut bookmark = None;
//! loop {
//!     let page = client.decks().list(bookmark.as_deref()).await?;
//!     for deck in &page.docs {
//!         println!("{}", deck.name);
//!     }
//!     match page.next_bookmark() {
//!         Some(next) => bookmark = Some(next.to_string()),
//!         None => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::Method;

use crate::client::MochiClient;
use crate::error::Result;
use crate::types::{Deck, Page};

/// Provides access to deck-related operations.
///
/// Obtained via [`MochiClient::decks()`].
#[derive(Debug)]
pub struct DeckActions<'a> {
    pub(crate) client: &'a MochiClient,
}

impl<'a> DeckActions<'a> {
    /// List one page of decks.
    ///
    /// Pass the bookmark from a previous page to continue the listing.
    pub async fn list(&self, bookmark: Option<&str>) -> Result<Page<Deck>> {
        let query: Vec<(&str, String)> = bookmark
            .map(|b| ("bookmark", b.to_string()))
            .into_iter()
            .collect();
        self.client
            .fetch(Method::GET, &["decks"], &query, None)
            .await
    }
}
