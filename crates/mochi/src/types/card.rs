//! Card-related types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{lenient_bool, lenient_opt_string, lenient_string, lenient_strings};
use crate::error::{Error, Result};

/// A single flashcard.
///
/// Every field tolerates being absent, `null`, or of the wrong JSON type in
/// the response; such values come back blank rather than failing the whole
/// request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Card {
    /// The card ID.
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    /// ID of the deck containing the card.
    #[serde(default, deserialize_with = "lenient_string")]
    pub deck_id: String,
    /// Optional card name.
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub name: Option<String>,
    /// Markdown content.
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
    /// All tags on the card, including ones written inline in the content.
    #[serde(default, deserialize_with = "lenient_strings")]
    pub tags: Vec<String>,
    /// Tags set explicitly rather than parsed from the content.
    #[serde(default, deserialize_with = "lenient_strings")]
    pub manual_tags: Vec<String>,
    /// Whether the card is archived.
    #[serde(rename = "archived?", default, deserialize_with = "lenient_bool")]
    pub archived: bool,
    /// Creation time.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<Timestamp>,
    /// Last modification time.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<Timestamp>,
}

impl Card {
    /// The creation date string, if Mochi sent one.
    pub fn created(&self) -> Option<&str> {
        self.created_at.as_ref().and_then(|t| t.date.as_deref())
    }

    /// The last-updated date string, if Mochi sent one.
    pub fn updated(&self) -> Option<&str> {
        self.updated_at.as_ref().and_then(|t| t.date.as_deref())
    }
}

/// Mochi wraps timestamps as `{"date": "..."}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timestamp {
    /// ISO-8601 date string.
    pub date: Option<String>,
}

/// Anything but an object is `None`; a non-string `date` is a blank date.
fn lenient_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(Some(Timestamp {
            date: map.get("date").and_then(Value::as_str).map(str::to_string),
        })),
        _ => Ok(None),
    }
}

/// Request body for creating a card.
///
/// # Example
///
/// ```
/// use mochi::NewCard;
///
/// let card = NewCard::new("deck123", "# Question\n---\nAnswer")
///     .tags(["japanese", "verbs"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct NewCard {
    /// Markdown content.
    pub content: String,
    /// Deck to add the card to.
    pub deck_id: String,
    /// Tags to attach. Omitted from the body when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_tags: Option<Vec<String>>,
}

impl NewCard {
    /// Create a card body for the given deck.
    pub fn new(deck_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            deck_id: deck_id.into(),
            manual_tags: None,
        }
    }

    /// Set the card's tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.manual_tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

/// A partial card update.
///
/// Only fields that were set are sent; everything else is left untouched on
/// the server. An update with nothing set is sent as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CardUpdate {
    /// New markdown content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Deck to move the card to.
    #[serde(rename = "deck-id", skip_serializing_if = "Option::is_none")]
    pub deck_id: Option<String>,
    /// Archive or unarchive the card.
    #[serde(rename = "archived?", skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    /// Replacement tag list.
    #[serde(rename = "manual-tags", skip_serializing_if = "Option::is_none")]
    pub manual_tags: Option<Vec<String>>,
}

impl CardUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Move the card to another deck.
    pub fn deck(mut self, deck_id: impl Into<String>) -> Self {
        self.deck_id = Some(deck_id.into());
        self
    }

    /// Set the archived flag.
    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    /// Replace the tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.manual_tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.deck_id.is_none()
            && self.archived.is_none()
            && self.manual_tags.is_none()
    }
}

/// Query for listing cards.
///
/// Parameters are only sent when they change the server's behaviour: the
/// deck filter and bookmark when set, and the limit when it differs from
/// [`ListCards::DEFAULT_LIMIT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCards {
    deck_id: Option<String>,
    limit: i64,
    bookmark: Option<String>,
}

impl ListCards {
    /// Page size Mochi uses when no limit is sent.
    pub const DEFAULT_LIMIT: i64 = 10;
    /// Largest page size Mochi accepts.
    pub const MAX_LIMIT: i64 = 100;

    /// List all cards with the default page size.
    pub fn new() -> Self {
        Self {
            deck_id: None,
            limit: Self::DEFAULT_LIMIT,
            bookmark: None,
        }
    }

    /// Only list cards in this deck.
    pub fn deck(mut self, deck_id: impl Into<String>) -> Self {
        self.deck_id = Some(deck_id.into());
        self
    }

    /// Set the page size (1 to 100).
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Continue from a bookmark returned by a previous page.
    pub fn bookmark(mut self, bookmark: impl Into<String>) -> Self {
        self.bookmark = Some(bookmark.into());
        self
    }

    pub(crate) fn query_pairs(&self) -> Result<Vec<(&'static str, String)>> {
        if !(1..=Self::MAX_LIMIT).contains(&self.limit) {
            return Err(Error::InvalidArgument(format!(
                "limit must be between 1 and {}, got {}",
                Self::MAX_LIMIT,
                self.limit
            )));
        }

        let mut pairs = Vec::new();
        if let Some(deck_id) = &self.deck_id {
            pairs.push(("deck-id", deck_id.clone()));
        }
        if self.limit != Self::DEFAULT_LIMIT {
            pairs.push(("limit", self.limit.to_string()));
        }
        if let Some(bookmark) = &self.bookmark {
            pairs.push(("bookmark", bookmark.clone()));
        }
        Ok(pairs)
    }
}

impl Default for ListCards {
    fn default() -> Self {
        Self::new()
    }
}
