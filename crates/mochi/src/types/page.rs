//! Paginated list envelope.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::{lenient_docs, lenient_opt_string};

/// One page of a listing.
///
/// Mochi returns listings in pages of `docs`. When more items exist the
/// response carries an opaque `bookmark`; pass it back unmodified to fetch the
/// next page. Entries that are not documents at all are skipped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Page<T> {
    /// Items in the order the server returned them.
    #[serde(default = "Vec::new", deserialize_with = "lenient_docs")]
    pub docs: Vec<T>,
    /// Continuation cursor, present only when more items exist.
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub bookmark: Option<String>,
}

impl<T> Page<T> {
    /// The continuation bookmark, if more items are available.
    ///
    /// An empty bookmark string is treated the same as no bookmark.
    pub fn next_bookmark(&self) -> Option<&str> {
        self.bookmark.as_deref().filter(|b| !b.is_empty())
    }

    /// Whether another page can be requested.
    pub fn has_more(&self) -> bool {
        self.next_bookmark().is_some()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            docs: Vec::new(),
            bookmark: None,
        }
    }
}
