//! The instruction document and its pure builder.
//!
//! The document is the single domain entity of this workspace: a static
//! description of how an external assistant should inspect a codebase and
//! author `codebase_summary.md`. Every access surface of the server returns
//! the same structure; the only computed part is `output_file.location`.
//!
//! Construction is deterministic and infallible. There is no I/O, no
//! timestamp, and no randomness anywhere in the structure, so two builds
//! with the same location are deeply equal.
//!
//! # Examples
//!
//! ```
//! use summary_mcp_core::InstructionDocument;
//!
//! let doc = InstructionDocument::build("workspace root");
//! assert_eq!(doc.fields_to_generate.len(), 5);
//! assert_eq!(doc.output_file.name, "codebase_summary.md");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// File name of the summary artifact the consumer is asked to produce.
pub const OUTPUT_FILE_NAME: &str = "codebase_summary.md";

/// The full instruction document returned by every access surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionDocument {
    /// What the consumer is ultimately asked to achieve.
    pub goal: String,

    /// The five summary fields, in the order they must appear in the
    /// generated Markdown.
    pub fields_to_generate: Vec<FieldSpec>,

    /// Names of the fields the consumer must fill before answering user
    /// questions about the codebase. Always a subset of
    /// `fields_to_generate` names.
    pub required_fields_for_user_question: Vec<String>,

    /// Where and under what name the summary file must be written.
    pub output_file: OutputFile,

    /// Markdown formatting rules for the generated file.
    pub file_format: FileFormat,

    /// One prompt template per field, keyed by field name.
    pub prompt_templates: BTreeMap<String, String>,

    /// Step-by-step guidance for the consumer, grouped by phase.
    pub notes_for_cursor: NotesForCursor,
}

/// One named section of the target Markdown summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name (also the Markdown section identifier).
    pub name: String,

    /// What the section should contain.
    pub description: String,

    /// Whether the section must be present in the generated summary.
    pub required: bool,

    /// Template the consumer should follow when generating this section.
    pub prompt_template: String,

    /// Sketch of the expected Markdown shape, where one helps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_format: Option<String>,
}

/// Name, format, and location of the summary artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFile {
    /// Always `codebase_summary.md`.
    pub name: String,

    /// Always `markdown`.
    pub format: String,

    /// Directory the consumer should write the file to. The only computed
    /// value in the document.
    pub location: String,
}

/// Markdown formatting rules, grouped by construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFormat {
    /// Heading-level rules.
    pub headings: Vec<String>,

    /// Table rules.
    pub tables: Vec<String>,

    /// List and checkbox rules.
    pub bullet_points: Vec<String>,
}

/// Ordered guidance for the consumer, one list per phase. Steps are
/// numbered within the strings themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesForCursor {
    /// How to inspect the codebase before writing anything.
    pub codebase_inspection: Vec<String>,

    /// How to generate each field.
    pub generation_process: Vec<String>,

    /// Constraints on the written artifact.
    pub output_requirements: Vec<String>,
}

impl InstructionDocument {
    /// Assembles the full instruction document.
    ///
    /// `location` becomes `output_file.location` verbatim; callers resolve
    /// override/ambient precedence before calling (see
    /// [`SummaryConfig::resolve_location`](crate::SummaryConfig::resolve_location)).
    /// Everything else is literal data. `prompt_templates` and
    /// `required_fields_for_user_question` are derived from the field
    /// specs, so their invariants hold by construction.
    #[must_use]
    pub fn build(location: &str) -> Self {
        let fields = field_specs();

        let required_fields_for_user_question = fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.name.clone())
            .collect();

        let prompt_templates = fields
            .iter()
            .map(|field| (field.name.clone(), field.prompt_template.clone()))
            .collect();

        Self {
            goal: GOAL.to_string(),
            fields_to_generate: fields,
            required_fields_for_user_question,
            output_file: OutputFile {
                name: OUTPUT_FILE_NAME.to_string(),
                format: "markdown".to_string(),
                location: location.to_string(),
            },
            file_format: format_rules(),
            prompt_templates,
            notes_for_cursor: cursor_notes(),
        }
    }
}

// ============================================================================
// Static document text
// ============================================================================

const GOAL: &str = "Produce a codebase_summary.md that gives an AI assistant enough context \
     to answer questions about this project without re-reading the entire source tree.";

/// The five summary fields, in their fixed order.
fn field_specs() -> Vec<FieldSpec> {
    vec![
        spec(
            "overview",
            "What the project is, the problem it solves, and how the major pieces fit together.",
            true,
            "Write two to three paragraphs describing what this codebase does, the main \
             technologies in use, and how the top-level components relate to each other.",
            None,
        ),
        spec(
            "status_summary",
            "Current state of each major component or feature area.",
            true,
            "For each major component, record its name, its current status (stable, in \
             progress, broken, or deprecated), and a one-line note on recent changes. \
             Present the result as a Markdown table.",
            Some(
                "| Component | Status | Notes |\n\
                 |-----------|--------|-------|\n\
                 | auth | stable | token refresh added |",
            ),
        ),
        spec(
            "flow_summary",
            "How a typical request or unit of work moves through the system.",
            true,
            "Describe the main control and data flow end to end: entry points, the layers \
             a request passes through, and where side effects happen.",
            None,
        ),
        spec(
            "todo_list",
            "Outstanding work items discovered in the code and its history.",
            false,
            "Collect open work items from TODO and FIXME comments and from visibly \
             incomplete features, and list them as Markdown checkboxes grouped by area.",
            Some(
                "- [ ] auth: rotate signing keys\n\
                 - [ ] api: paginate the /events endpoint",
            ),
        ),
        spec(
            "key_notes",
            "Conventions, caveats, and gotchas a newcomer must know.",
            true,
            "List the non-obvious facts about this codebase: naming conventions, \
             invariants, fragile areas, and anything that would surprise a new \
             contributor.",
            None,
        ),
    ]
}

/// Markdown formatting rules for the generated summary.
fn format_rules() -> FileFormat {
    FileFormat {
        headings: strings(&[
            "Use # only for the document title, \"Codebase Summary\".",
            "Use ## for each generated field, in the order listed in fields_to_generate.",
            "Use ### for subsections within a field.",
        ]),
        tables: strings(&[
            "Use GitHub-flavored Markdown tables.",
            "status_summary must be rendered as a table with a header row.",
            "Keep table cells to a single line.",
        ]),
        bullet_points: strings(&[
            "Use - for unordered lists.",
            "Indent nested items by two spaces.",
            "Render todo_list items as - [ ] checkboxes.",
        ]),
    }
}

/// Phase-by-phase guidance for the consumer.
///
/// The include_git_history and debug steps are static text: the
/// corresponding configuration options are surfaced here for the consumer
/// to act on, never branched on by this server.
fn cursor_notes() -> NotesForCursor {
    NotesForCursor {
        codebase_inspection: strings(&[
            "1. Start from the project manifest and README to establish the project's purpose.",
            "2. Walk the source tree top-down, reading module roots before leaf files.",
            "3. Scan for TODO and FIXME comments to seed the todo_list field.",
            "4. If the include_git_history option is enabled (it is by default), also review \
             recent commit messages for in-flight work.",
        ]),
        generation_process: strings(&[
            "1. Generate each field using its entry in prompt_templates, in the order given \
             by fields_to_generate.",
            "2. Fill every required field; todo_list may be omitted only when no open work \
             items exist.",
            "3. Follow the file_format rules for all Markdown structure.",
            "4. If the debug option is enabled, narrate which files informed each field as \
             you work.",
        ]),
        output_requirements: strings(&[
            "1. Write the finished summary to the file named in output_file, at the location \
             given there.",
            "2. Title the document \"Codebase Summary\".",
            "3. Summarize; do not paste file contents verbatim.",
            "4. Overwrite any existing summary file rather than appending to it.",
        ]),
    }
}

// ============================================================================
// Construction helpers
// ============================================================================

fn spec(
    name: &str,
    description: &str,
    required: bool,
    prompt_template: &str,
    example_format: Option<&str>,
) -> FieldSpec {
    FieldSpec {
        name: name.to_string(),
        description: description.to_string(),
        required,
        prompt_template: prompt_template.to_string(),
        example_format: example_format.map(str::to_string),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}
