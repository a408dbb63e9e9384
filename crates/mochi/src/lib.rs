//! An async Rust client for the [Mochi](https://mochi.cards) flashcards API.
//!
//! # Quick Start
//!
//! ```no_run
//! use mochi::MochiClient;
//!
//! # async fn example() -> mochi::Result<()> {
//! let client = MochiClient::builder()
//!     .api_key(std::env::var("MOCHI_API_KEY").unwrap_or_default())
//!     .build()?;
//!
//! let card = client.cards().get("abc123").await?;
//! println!("{}", card.content);
//! # Ok(())
//! # }
//! ```
//!
//! # Action Groups
//!
//! - [`MochiClient::decks()`] - List decks
//! - [`MochiClient::cards()`] - List, create, read, update, and delete cards
//!
//! # Authentication
//!
//! Mochi uses HTTP Basic auth with the API key as the username and an empty
//! password. A client built without a key sends no credentials, and Mochi
//! answers with an error status that surfaces as [`Error::Status`].

pub mod actions;
pub mod client;
pub mod error;
pub mod types;

pub use client::{ClientBuilder, DEFAULT_TIMEOUT, DEFAULT_URL, MochiClient};
pub use error::{Error, Result};
pub use types::{Card, CardUpdate, Deck, ListCards, NewCard, Page, Timestamp};
