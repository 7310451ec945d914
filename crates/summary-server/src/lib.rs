//! MCP server library for codebase-summary instructions.
//!
//! This crate exposes a single fixed instruction document - a description
//! of how an AI coding assistant should inspect a codebase and author
//! `codebase_summary.md` - through three MCP access surfaces:
//!
//! 1. **Tool** `generate-system-summary-instructions` - JSON text, with an
//!    optional per-call `outputPath` override
//! 2. **Resource** `summary://instructions` - the same JSON under a fixed
//!    URI, ambient configuration only
//! 3. **Prompt** `system-summary-template` - a user-role message wrapping
//!    the JSON, with optional codebase-path and focus-area lines
//!
//! The server never inspects a codebase itself: the document tells an
//! external consumer (Cursor) what to inspect and what to write. Every
//! call is stateless and builds the document fresh from the ambient
//! [`SummaryConfig`](summary_mcp_core::SummaryConfig).
//!
//! # Examples
//!
//! ```no_run
//! use rmcp::ServiceExt;
//! use rmcp::transport::stdio;
//! use summary_mcp_core::SummaryConfig;
//! use summary_mcp_server::SummaryService;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let service = SummaryService::new(SummaryConfig::default())
//!     .serve(stdio())
//!     .await?;
//! service.waiting().await?;
//! # Ok(())
//! # }
//! ```

pub mod service;
pub mod types;

pub use service::{INSTRUCTIONS_URI, SummaryService};
pub use types::{GenerateInstructionsParams, SummaryPromptArgs};
