//! Parameter types for the server's access surfaces.
//!
//! Wire field names are camelCase to match the published MCP surface; the
//! structs keep Rust naming internally. No field is validated beyond its
//! type: any string, including the empty string, is accepted.

use schemars::JsonSchema;
use serde::Deserialize;

/// Parameters for the `generate-system-summary-instructions` tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GenerateInstructionsParams {
    /// Directory the summary file should be written to. Overrides the
    /// server's configured output directory for this call only.
    #[serde(rename = "outputPath")]
    pub output_path: Option<String>,
}

/// Arguments for the `system-summary-template` prompt.
///
/// Neither argument affects document construction; both are appended to the
/// composed message as free text when supplied.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SummaryPromptArgs {
    /// Path of the codebase the summary should cover.
    #[serde(rename = "codebasePath")]
    pub codebase_path: Option<String>,

    /// Area of the codebase to emphasize in the summary.
    #[serde(rename = "focusArea")]
    pub focus_area: Option<String>,
}
