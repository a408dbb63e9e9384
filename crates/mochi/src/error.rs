//! Error types for the mochi crate.
//!
//! Every failure of a Mochi API call ends up as one [`Error`]. Callers that
//! only need a human-readable reason can rely on its `Display` output, which
//! always carries the underlying message.
//!
//! # Example
//!
//! ```no_run
//! use mochi::{Error, MochiClient};
//!
//! # async fn example() -> mochi::Result<()> {
//! let client = MochiClient::builder().api_key("my-key").build()?;
//!
//! match client.cards().get("abc123").await {
//!     Ok(card) => println!("{}", card.content),
//!     Err(Error::Status { status, .. }) if status.as_u16() == 404 => {
//!         eprintln!("No such card");
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// The error type for Mochi API operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    ///
    /// Covers DNS failures, refused connections and broken transfers.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    /// Mochi answered with a non-success status code.
    ///
    /// `message` holds the status line, followed by the response body when
    /// Mochi sent one (it usually describes what was wrong with the request).
    #[error("{message}")]
    Status {
        /// The HTTP status returned.
        status: StatusCode,
        /// Status line plus response body text.
        message: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response body was empty where a document was expected.
    #[error("Mochi returned an empty response")]
    EmptyResponse,

    /// An argument was rejected before any request was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn status(status: StatusCode, url: &str, body: &str) -> Self {
        let body = body.trim();
        let mut message = format!("HTTP {} for url '{}'", status, url);
        if !body.is_empty() {
            message.push_str(": ");
            message.push_str(body);
        }
        Error::Status { status, message }
    }
}

/// A specialized Result type for Mochi API operations.
pub type Result<T> = std::result::Result<T, Error>;
