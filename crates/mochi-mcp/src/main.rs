//! MCP server for Mochi flashcards.
//!
//! Exposes deck and card operations of the Mochi REST API as tools for LLM
//! assistants, served over stdio.

mod handlers;
mod render;
mod server;

use std::time::Duration;

use clap::Parser;
use mochi::MochiClient;
use rmcp::ServiceExt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::server::MochiServer;

// ============================================================================
// CLI Arguments
// ============================================================================

/// MCP server for Mochi flashcard decks and cards.
#[derive(Parser, Debug)]
#[command(name = "mochi-mcp")]
#[command(version, about, long_about = None)]
struct Args {
    /// Mochi API key, sent as the HTTP Basic auth username
    #[arg(long, env = "MOCHI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Mochi API base URL
    #[arg(long, env = "MOCHI_BASE_URL", default_value = mochi::DEFAULT_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "MOCHI_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// Read-only mode (disables creating, updating and deleting cards)
    #[arg(long, env = "MOCHI_READ_ONLY", default_value_t = false)]
    read_only: bool,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();

    init_tracing(args.verbose);

    if let Ok(path) = &dotenv {
        info!(path = %path.display(), "Loaded environment file");
    }

    let client = MochiClient::builder()
        .url(&args.base_url)
        .maybe_api_key(args.api_key.filter(|key| !key.is_empty()))
        .timeout(Duration::from_secs(args.timeout))
        .build()?;

    info!(
        base_url = %client.base_url(),
        authenticated = client.is_authenticated(),
        read_only = args.read_only,
        timeout_secs = args.timeout,
        "Starting mochi-mcp server"
    );
    if !client.is_authenticated() {
        warn!("No API key configured (set MOCHI_API_KEY); requests will be unauthenticated");
    }

    let server = MochiServer::new(client, args.read_only);

    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let mcp_server = server.serve(transport).await?;
    mcp_server.waiting().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_defaults() {
        let args = Args::try_parse_from(["mochi-mcp"]).unwrap();
        assert_eq!(args.timeout, 30);
        assert!(!args.read_only);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn args_overrides() {
        let args = Args::try_parse_from([
            "mochi-mcp",
            "--api-key",
            "k",
            "--base-url",
            "http://localhost:9000/api",
            "--timeout",
            "5",
            "--read-only",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.api_key.as_deref(), Some("k"));
        assert_eq!(args.base_url, "http://localhost:9000/api");
        assert_eq!(args.timeout, 5);
        assert!(args.read_only);
        assert_eq!(args.verbose, 2);
    }
}
