//! The Mochi client and builder.

use std::fmt;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::actions::{CardActions, DeckActions};
use crate::error::{Error, Result};

/// Default base URL for the Mochi API.
pub const DEFAULT_URL: &str = "https://app.mochi.cards/api";

/// Default timeout for requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The main client for interacting with the Mochi API.
///
/// Cloning is cheap and clones share one connection pool.
///
/// # Example
///
/// ```no_run
/// use mochi::MochiClient;
///
/// # async fn example() -> mochi::Result<()> {
/// let client = MochiClient::builder().api_key("my-key").build()?;
///
/// let page = client.decks().list(None).await?;
/// for deck in &page.docs {
///     println!("{}: {}", deck.id, deck.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MochiClient {
    http_client: Client,
    base_url: Url,
    api_key: Option<String>,
    timeout: Duration,
}

impl MochiClient {
    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Access deck operations.
    pub fn decks(&self) -> DeckActions<'_> {
        DeckActions { client: self }
    }

    /// Access card operations.
    pub fn cards(&self) -> CardActions<'_> {
        CardActions { client: self }
    }

    /// The base URL every path is resolved against.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Whether requests carry credentials.
    pub fn is_authenticated(&self) -> bool {
        self.api_key.is_some()
    }

    /// Request a document that must be present in the response.
    pub(crate) async fn fetch<R>(
        &self,
        method: Method,
        path: &[&str],
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<R>
    where
        R: DeserializeOwned,
    {
        match self.send(method, path, query, body).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Err(Error::EmptyResponse),
        }
    }

    /// Request a document where an empty response is also a success.
    pub(crate) async fn fetch_optional<R>(
        &self,
        method: Method,
        path: &[&str],
        body: Option<Value>,
    ) -> Result<Option<R>>
    where
        R: DeserializeOwned,
    {
        self.send(method, path, &[], body)
            .await?
            .map(serde_json::from_value)
            .transpose()
            .map_err(Error::from)
    }

    /// Perform a request whose response body is irrelevant.
    pub(crate) async fn execute(&self, method: Method, path: &[&str]) -> Result<()> {
        self.send(method, path, &[], None).await.map(|_| ())
    }

    /// Send a request and normalize the outcome.
    ///
    /// Every outbound call goes through here. Returns `Ok(Some(_))` for a
    /// 2xx with a JSON body, `Ok(None)` for a 2xx with an empty body, and an
    /// error for network failures, timeouts, and non-2xx statuses.
    pub async fn send(
        &self,
        method: Method,
        path: &[&str],
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Option<Value>> {
        let url = self.endpoint(path)?;

        let mut request = self.http_client.request(method, url);
        if let Some(key) = &self.api_key {
            request = request.basic_auth(key, Some(""));
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let url = response.url().to_string();
        let text = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(Error::status(status, &url, &text));
        }
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text)?))
    }

    fn endpoint(&self, path: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::InvalidArgument(format!("base URL '{}' cannot take a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout(self.timeout)
        } else {
            Error::Http(err)
        }
    }
}

impl fmt::Debug for MochiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MochiClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for creating a customized [`MochiClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use mochi::MochiClient;
///
/// # fn example() -> mochi::Result<()> {
/// let client = MochiClient::builder()
///     .api_key("my-secret-key")
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the API base URL.
    ///
    /// Defaults to `https://app.mochi.cards/api`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key used for HTTP Basic authentication.
    ///
    /// Without a key requests are sent unauthenticated.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the API key if one is given.
    pub fn maybe_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<MochiClient> {
        let base_url = Url::parse(&self.base_url).map_err(|e| {
            Error::InvalidArgument(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()?;

        Ok(MochiClient {
            http_client,
            base_url,
            api_key: self.api_key,
            timeout: self.timeout,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}
