//! Action groups for the Mochi API.
//!
//! Each group is obtained from the client and borrows it:
//!
//! - [`DeckActions`] via [`MochiClient::decks()`](crate::MochiClient::decks)
//! - [`CardActions`] via [`MochiClient::cards()`](crate::MochiClient::cards)

mod cards;
mod decks;

pub use cards::CardActions;
pub use decks::DeckActions;
