//! MCP service exposing the instruction document through three surfaces.
//!
//! 1. Tool `generate-system-summary-instructions` - returns the document as
//!    JSON text, honoring a per-call `outputPath` override
//! 2. Resource `summary://instructions` - returns the document as JSON with
//!    an `application/json` mime type, ambient configuration only
//! 3. Prompt `system-summary-template` - wraps the document in a user-role
//!    message with optional codebase-path and focus-area lines
//!
//! All three call the same pure builder in `summary-mcp-core`; the service
//! holds no mutable state and every invocation is independent.

use crate::types::{GenerateInstructionsParams, SummaryPromptArgs};
use rmcp::handler::server::ServerHandler;
use rmcp::handler::server::router::prompt::PromptRouter;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    AnnotateAble, CallToolResult, Content, GetPromptRequestParam, GetPromptResult, Implementation,
    ListPromptsResult, ListResourcesResult, PaginatedRequestParam, PromptMessage,
    PromptMessageRole, ProtocolVersion, RawResource, ReadResourceRequestParam, ReadResourceResult,
    ResourceContents, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{
    ErrorData as McpError, prompt, prompt_handler, prompt_router, tool, tool_handler, tool_router,
};
use summary_mcp_core::{InstructionDocument, SummaryConfig};

/// Fixed address of the instructions resource.
pub const INSTRUCTIONS_URI: &str = "summary://instructions";

/// Reminder steps appended to every composed prompt message.
const CLOSING_CHECKLIST: &str = "\nBefore you finish:\n\
     1. Confirm every required field is present and non-empty.\n\
     2. Render status_summary as a Markdown table with a header row.\n\
     3. Apply the file_format rules to every heading, table, and list.\n\
     4. Write the result to codebase_summary.md at the location given in output_file.\n";

/// MCP server for codebase-summary instructions.
///
/// Stateless: the ambient [`SummaryConfig`] is fixed at construction and
/// every call builds a fresh document from it.
#[derive(Clone)]
pub struct SummaryService {
    /// Ambient configuration applied uniformly across calls.
    config: SummaryConfig,

    /// Tool router for MCP protocol
    tool_router: ToolRouter<Self>,

    /// Prompt router for MCP protocol
    prompt_router: PromptRouter<Self>,
}

impl std::fmt::Debug for SummaryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SummaryService {
    /// Creates the service with the given ambient configuration.
    #[must_use]
    pub fn new(config: SummaryConfig) -> Self {
        Self {
            config,
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    /// Builds the document and serializes it as pretty JSON.
    ///
    /// The per-call override, when present, takes precedence over the
    /// configured output directory; with neither, the location falls back
    /// to `"workspace root"`.
    ///
    /// # Errors
    ///
    /// Returns an internal error if JSON serialization fails.
    pub fn instructions_json(&self, override_path: Option<&str>) -> Result<String, McpError> {
        let location = self.config.resolve_location(override_path);
        let document = InstructionDocument::build(location);
        serde_json::to_string_pretty(&document).map_err(|e| {
            McpError::internal_error(format!("Failed to serialize instructions: {e}"), None)
        })
    }

    /// Reads the instructions resource at `uri`.
    ///
    /// The resource surface accepts no per-call override: the document is
    /// always built from the ambient configuration alone.
    ///
    /// # Errors
    ///
    /// Returns a resource-not-found error for any URI other than
    /// [`INSTRUCTIONS_URI`].
    pub fn read_instructions(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        if uri != INSTRUCTIONS_URI {
            return Err(McpError::resource_not_found(
                format!("unknown resource URI: {uri}"),
                Some(serde_json::json!({ "uri": uri })),
            ));
        }

        let json = self.instructions_json(None)?;
        Ok(ReadResourceResult {
            contents: vec![json_contents(uri, json)],
        })
    }

    /// Composes the prompt-surface message body.
    ///
    /// The document itself is built from ambient configuration; the two
    /// arguments only add trailing lines. The closing checklist is always
    /// appended.
    ///
    /// # Errors
    ///
    /// Returns an internal error if JSON serialization fails.
    pub fn compose_prompt_text(&self, args: &SummaryPromptArgs) -> Result<String, McpError> {
        let json = self.instructions_json(None)?;

        let mut message =
            format!("Please generate a codebase summary by following these instructions:\n\n{json}\n");

        if let Some(path) = args.codebase_path.as_deref() {
            message.push_str(&format!(
                "\nThe codebase to summarize is located at: {path}\n"
            ));
        }

        if let Some(area) = args.focus_area.as_deref() {
            message.push_str(&format!(
                "\nFocus area: {area}. Give this area extra depth and emphasis in the summary.\n"
            ));
        }

        message.push_str(CLOSING_CHECKLIST);
        Ok(message)
    }
}

#[tool_router]
impl SummaryService {
    /// Returns the instruction document as formatted JSON text.
    ///
    /// Accepts any `outputPath` string, including empty; no validation is
    /// performed on its contents.
    #[tool(
        name = "generate-system-summary-instructions",
        description = "Return the JSON instructions for generating codebase_summary.md. Accepts an optional outputPath that overrides the configured output directory."
    )]
    async fn generate_summary_instructions(
        &self,
        Parameters(params): Parameters<GenerateInstructionsParams>,
    ) -> Result<CallToolResult, McpError> {
        let json = self.instructions_json(params.output_path.as_deref())?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[prompt_router]
impl SummaryService {
    /// Conversational variant of the instructions.
    #[prompt(
        name = "system-summary-template",
        description = "Ask for a codebase summary following the standard instructions, optionally naming the codebase path and a focus area."
    )]
    async fn system_summary_template(
        &self,
        Parameters(args): Parameters<SummaryPromptArgs>,
    ) -> Result<GetPromptResult, McpError> {
        let text = self.compose_prompt_text(&args)?;
        Ok(GetPromptResult {
            description: Some("Template for generating a codebase summary".to_string()),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        })
    }
}

#[tool_handler]
#[prompt_handler]
impl ServerHandler for SummaryService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Serve the standard instructions for generating codebase_summary.md. \
                 Call generate-system-summary-instructions for the JSON document, read \
                 summary://instructions for the same content as a resource, or use the \
                 system-summary-template prompt for a conversational variant."
                    .to_string(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        let mut resource = RawResource::new(INSTRUCTIONS_URI, "system-summary-instructions");
        resource.description =
            Some("Instructions for generating a codebase summary, as JSON".to_string());
        resource.mime_type = Some("application/json".to_string());

        Ok(ListResourcesResult {
            resources: vec![resource.no_annotation()],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read_instructions(&uri)
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Wraps JSON text as resource contents with an `application/json` mime type.
fn json_contents(uri: &str, text: String) -> ResourceContents {
    let mut contents = ResourceContents::text(text, uri);
    if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
        *mime_type = Some("application/json".to_string());
    }
    contents
}
