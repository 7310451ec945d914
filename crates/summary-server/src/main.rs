//! MCP server entry point for codebase-summary instructions.
//!
//! # Usage
//!
//! Run the server via stdio transport:
//!
//! ```bash
//! summary-mcp
//! ```
//!
//! Or configure in Cursor's MCP settings:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "summary": {
//!       "command": "summary-mcp",
//!       "env": { "SUMMARY_OUTPUT_DIR": "./docs" }
//!     }
//!   }
//! }
//! ```
//!
//! Configuration comes from `SUMMARY_OUTPUT_DIR`,
//! `SUMMARY_INCLUDE_GIT_HISTORY`, and `SUMMARY_DEBUG`.

use anyhow::Result;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use summary_mcp_core::SummaryConfig;
use summary_mcp_server::SummaryService;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is for MCP protocol)
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,summary_mcp_server=debug")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();

    let config = SummaryConfig::from_env()?;

    tracing::info!(
        output_directory = config.output_directory.as_deref(),
        "Starting summary-mcp v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Create and run the service with stdio transport
    let service = SummaryService::new(config).serve(stdio()).await?;
    service.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
