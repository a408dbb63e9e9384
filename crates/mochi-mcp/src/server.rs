//! The MCP server exposing Mochi tools.

use mochi::{CardUpdate, ListCards, MochiClient};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars, tool, tool_handler, tool_router,
};
use tracing::warn;

use crate::handlers;

// ============================================================================
// Tool Parameters
// ============================================================================

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ListDecksParams {
    /// Bookmark returned by a previous call, to fetch the next page
    #[serde(default)]
    pub bookmark: Option<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CreateCardParams {
    /// ID of the deck to add the card to
    pub deck_id: String,
    /// Markdown content for the card (separate front and back with a line containing ---)
    pub content: String,
    /// Tags to add to the card
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetCardParams {
    /// ID of the card to retrieve
    pub card_id: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct UpdateCardParams {
    /// ID of the card to update
    pub card_id: String,
    /// New markdown content
    #[serde(default)]
    pub content: Option<String>,
    /// Deck ID to move the card to
    #[serde(default)]
    pub deck_id: Option<String>,
    /// Archive (true) or unarchive (false) the card
    #[serde(default)]
    pub archived: Option<bool>,
    /// Tags replacing the card's existing tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl UpdateCardParams {
    fn to_update(&self) -> CardUpdate {
        CardUpdate {
            content: self.content.clone(),
            deck_id: self.deck_id.clone(),
            archived: self.archived,
            manual_tags: self.tags.clone(),
        }
    }
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DeleteCardParams {
    /// ID of the card to delete
    pub card_id: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ListCardsParams {
    /// Only list cards in this deck
    #[serde(default)]
    pub deck_id: Option<String>,
    /// Number of cards per page (1-100, default 10)
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Bookmark returned by a previous call, to fetch the next page
    #[serde(default)]
    pub bookmark: Option<String>,
}

fn default_limit() -> i64 {
    ListCards::DEFAULT_LIMIT
}

fn text(output: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(output)])
}

// ============================================================================
// Server Implementation
// ============================================================================

#[derive(Clone)]
pub struct MochiServer {
    client: MochiClient,
    tool_router: ToolRouter<MochiServer>,
    read_only: bool,
}

impl MochiServer {
    pub fn new(client: MochiClient, read_only: bool) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
            read_only,
        }
    }

    /// Refusal text for a write attempted in read-only mode.
    fn check_write(&self, operation: &str, doing: &str) -> Option<String> {
        if self.read_only {
            warn!("Blocked write operation in read-only mode: {}", operation);
            Some(format!(
                "Error {}: write operation '{}' is not allowed in read-only mode",
                doing, operation
            ))
        } else {
            None
        }
    }
}

#[tool_router]
impl MochiServer {
    #[tool(
        description = "List all decks in your Mochi account. Pass the bookmark from a previous result to get the next page."
    )]
    async fn mochi_list_decks(
        &self,
        Parameters(params): Parameters<ListDecksParams>,
    ) -> Result<CallToolResult, McpError> {
        let output = handlers::list_decks(&self.client, params.bookmark.as_deref()).await;
        Ok(text(output))
    }

    #[tool(description = "Create a new card in a Mochi deck. Returns the new card ID.")]
    async fn mochi_create_card(
        &self,
        Parameters(params): Parameters<CreateCardParams>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(refusal) = self.check_write("mochi_create_card", "creating card") {
            return Ok(text(refusal));
        }
        let output =
            handlers::create_card(&self.client, &params.deck_id, &params.content, params.tags)
                .await;
        Ok(text(output))
    }

    #[tool(description = "Get details of a specific Mochi card.")]
    async fn mochi_get_card(
        &self,
        Parameters(params): Parameters<GetCardParams>,
    ) -> Result<CallToolResult, McpError> {
        let output = handlers::get_card(&self.client, &params.card_id).await;
        Ok(text(output))
    }

    #[tool(
        description = "Update an existing Mochi card. Only the fields provided are changed; tags replace the existing tags."
    )]
    async fn mochi_update_card(
        &self,
        Parameters(params): Parameters<UpdateCardParams>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(refusal) = self.check_write("mochi_update_card", "updating card") {
            return Ok(text(refusal));
        }
        let output =
            handlers::update_card(&self.client, &params.card_id, params.to_update()).await;
        Ok(text(output))
    }

    #[tool(description = "Delete a Mochi card permanently.")]
    async fn mochi_delete_card(
        &self,
        Parameters(params): Parameters<DeleteCardParams>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(refusal) = self.check_write("mochi_delete_card", "deleting card") {
            return Ok(text(refusal));
        }
        let output = handlers::delete_card(&self.client, &params.card_id).await;
        Ok(text(output))
    }

    #[tool(
        description = "List cards, optionally filtered by deck. Limit is the page size (1-100, default 10); pass the bookmark from a previous result to get the next page."
    )]
    async fn mochi_list_cards(
        &self,
        Parameters(params): Parameters<ListCardsParams>,
    ) -> Result<CallToolResult, McpError> {
        let output = handlers::list_cards(
            &self.client,
            params.deck_id.as_deref(),
            params.limit,
            params.bookmark.as_deref(),
        )
        .await;
        Ok(text(output))
    }
}

#[tool_handler]
impl ServerHandler for MochiServer {
    fn get_info(&self) -> ServerInfo {
        let mode = if self.read_only { " (read-only)" } else { "" };
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(format!(
                "Mochi flashcard decks and cards{}. \
                 Tools: mochi_list_decks, mochi_list_cards, mochi_get_card, \
                 mochi_create_card, mochi_update_card, mochi_delete_card. \
                 Listings are paged; resubmit the returned bookmark to continue.",
                mode
            )),
        }
    }
}
