//! Integration tests for the three access surfaces.
//!
//! Every surface is a pure transform over the same builder, so the tests
//! drive the public service API end to end and check the behavioral
//! contract: precedence of the output location, invariance of the static
//! document body, and the shape of each surface's output.

use summary_mcp_core::{DEFAULT_LOCATION, InstructionDocument, SummaryConfig};
use summary_mcp_server::{INSTRUCTIONS_URI, SummaryPromptArgs, SummaryService};

fn parse_document(json: &str) -> InstructionDocument {
    serde_json::from_str(json).expect("surface output should parse as an instruction document")
}

#[test]
fn all_surfaces_serve_the_same_document_under_ambient_config() {
    let config = SummaryConfig::builder().output_directory("./cfg").build();
    let service = SummaryService::new(config);

    let tool_json = service.instructions_json(None).unwrap();
    let resource = service.read_instructions(INSTRUCTIONS_URI).unwrap();
    let prompt_text = service
        .compose_prompt_text(&SummaryPromptArgs::default())
        .unwrap();

    let rmcp::model::ResourceContents::TextResourceContents { text, .. } = &resource.contents[0]
    else {
        panic!("expected text resource contents");
    };

    assert_eq!(&tool_json, text);
    assert!(prompt_text.contains(&tool_json));
}

#[test]
fn output_location_precedence_chain() {
    let configured = SummaryService::new(
        SummaryConfig::builder().output_directory("./cfg").build(),
    );
    let unconfigured = SummaryService::new(SummaryConfig::default());

    let with_override = parse_document(&configured.instructions_json(Some("./override")).unwrap());
    assert_eq!(with_override.output_file.location, "./override");

    let ambient = parse_document(&configured.instructions_json(None).unwrap());
    assert_eq!(ambient.output_file.location, "./cfg");

    let fallback = parse_document(&unconfigured.instructions_json(None).unwrap());
    assert_eq!(fallback.output_file.location, DEFAULT_LOCATION);
}

#[test]
fn resource_surface_never_sees_per_call_overrides() {
    // The read path takes no override parameter at all; even when the tool
    // surface is used with one, the resource keeps the ambient value.
    let service = SummaryService::new(
        SummaryConfig::builder().output_directory("./cfg").build(),
    );

    let _ = service.instructions_json(Some("./override")).unwrap();

    let resource = service.read_instructions(INSTRUCTIONS_URI).unwrap();
    let rmcp::model::ResourceContents::TextResourceContents { text, .. } = &resource.contents[0]
    else {
        panic!("expected text resource contents");
    };
    assert_eq!(parse_document(text).output_file.location, "./cfg");
}

#[test]
fn served_document_satisfies_all_invariants_after_round_trip() {
    let service = SummaryService::new(SummaryConfig::default());
    let doc = parse_document(&service.instructions_json(None).unwrap());

    let names: Vec<&str> = doc
        .fields_to_generate
        .iter()
        .map(|field| field.name.as_str())
        .collect();
    assert_eq!(
        names,
        ["overview", "status_summary", "flow_summary", "todo_list", "key_notes"]
    );

    for field in &doc.fields_to_generate {
        assert_eq!(field.required, field.name != "todo_list");
        assert!(doc.prompt_templates.contains_key(&field.name));
    }
    assert_eq!(doc.prompt_templates.len(), 5);

    assert_eq!(
        doc.required_fields_for_user_question,
        ["overview", "status_summary", "flow_summary", "key_notes"]
    );

    assert_eq!(doc.output_file.name, "codebase_summary.md");
    assert_eq!(doc.output_file.format, "markdown");
    assert!(!doc.goal.is_empty());
}

#[test]
fn prompt_lines_track_their_arguments() {
    let service = SummaryService::new(SummaryConfig::default());

    let full = service
        .compose_prompt_text(&SummaryPromptArgs {
            codebase_path: Some("./src".to_string()),
            focus_area: Some("backend".to_string()),
        })
        .unwrap();
    assert!(full.contains("./src"));
    assert!(full.contains("backend"));

    let bare = service
        .compose_prompt_text(&SummaryPromptArgs::default())
        .unwrap();
    assert!(!bare.contains("located at"));
    assert!(!bare.contains("Focus area"));

    // The closing checklist is identical either way.
    let checklist_start = "Before you finish:";
    let full_tail = &full[full.find(checklist_start).unwrap()..];
    let bare_tail = &bare[bare.find(checklist_start).unwrap()..];
    assert_eq!(full_tail, bare_tail);
}
