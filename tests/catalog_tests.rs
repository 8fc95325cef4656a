// ABOUTME: Integration tests for catalog parsing and validation
// ABOUTME: Tests YAML/JSON loading, schema binding, and validation reports

use promptforge::catalog::{Catalog, CatalogValidator};
use promptforge::template::{DelimiterStyle, VariableKind};

mod common;
use common::{TestCatalogBuilder, TestEnvironment};

#[test]
fn test_parse_catalog_with_all_vardef_shapes() {
    let yaml = r#"
tools:
  - name: Slide Deck
    description: Prompts for slide deck generation
    roles:
      Designer:
        description: Visual design prompts
        template: "Style: {style}\nTopic: {topic}\nRequirements:\n{notes__multi}"
        vars:
          style: ["minimal", "retro", "corporate"]
          topic: "what the deck is about"
          notes__multi: ["large type", "few words", "high contrast"]
      Writer:
        template: "Write copy about {topic} in a {tone} tone"
        vars:
          topic: "the subject"
          tone:
            kind: single_choice
            options: ["formal", "casual"]
"#;

    let catalog = Catalog::from_yaml(yaml).unwrap();
    assert_eq!(catalog.tool_names(), vec!["Slide Deck"]);

    let tool = catalog.get_tool("Slide Deck").unwrap();
    assert_eq!(tool.role_names(), vec!["Designer", "Writer"]);

    let designer = catalog.get_role("Slide Deck", "Designer").unwrap();
    let schema = designer.schema();
    assert_eq!(schema.resolve_kind("style"), VariableKind::SingleChoice);
    assert_eq!(schema.resolve_kind("topic"), VariableKind::FreeText);
    assert_eq!(schema.resolve_kind("notes__multi"), VariableKind::MultiChoice);

    let writer = catalog.get_role("Slide Deck", "Writer").unwrap();
    let schema = writer.schema();
    assert_eq!(schema.resolve_kind("tone"), VariableKind::SingleChoice);
    assert_eq!(schema.options("tone"), &["formal", "casual"]);
}

#[test]
fn test_role_syntax_defaults_to_brace() {
    let yaml = r#"
tools:
  - name: Example
    roles:
      Default:
        template: "{x}"
"#;
    let catalog = Catalog::from_yaml(yaml).unwrap();
    let role = catalog.get_role("Example", "Default").unwrap();
    assert_eq!(role.syntax, DelimiterStyle::Brace);
}

#[test]
fn test_role_syntax_can_be_declared() {
    let yaml = r#"
tools:
  - name: Example
    roles:
      Default:
        template: "<x>"
        syntax: bracket
"#;
    let catalog = Catalog::from_yaml(yaml).unwrap();
    let role = catalog.get_role("Example", "Default").unwrap();
    assert_eq!(role.syntax, DelimiterStyle::Bracket);
}

#[test]
fn test_catalog_roundtrip_through_file() {
    let env = TestEnvironment::new();
    let path = env.path("catalog.yaml");

    TestCatalogBuilder::new()
        .add_tool("Audio Overview")
        .add_role("Audio Overview", "Host", "Host: {host}\nTopics:\n{topics__multi}")
        .with_options_var("Audio Overview", "Host", "host", &["calm", "energetic"])
        .with_options_var("Audio Overview", "Host", "topics__multi", &["intro", "recap"])
        .write_to_file(&path);

    let catalog = Catalog::from_file(&path).unwrap();
    let role = catalog.get_role("Audio Overview", "Host").unwrap();
    assert_eq!(role.vars.len(), 2);
}

#[test]
fn test_json_catalog_from_file() {
    let env = TestEnvironment::new();
    let path = env.write_file(
        "catalog.json",
        r#"{
          "tools": [
            {
              "name": "Example",
              "description": "From JSON",
              "roles": {
                "Default": {
                  "description": "",
                  "template": "Topic: {topic}",
                  "vars": { "topic": ["a", "b"] }
                }
              }
            }
          ]
        }"#,
    );

    let catalog = Catalog::from_file(&path).unwrap();
    let role = catalog.get_role("Example", "Default").unwrap();
    assert_eq!(role.schema().options("topic"), &["a", "b"]);
}

#[test]
fn test_duplicate_tool_names_rejected() {
    let yaml = r#"
tools:
  - name: Example
    roles:
      Default:
        template: "{x}"
  - name: Example
    roles:
      Default:
        template: "{y}"
"#;
    assert!(Catalog::from_yaml(yaml).is_err());
}

#[test]
fn test_validator_reports_structural_errors() {
    // Built directly so parsing does not fail fast
    let catalog = TestCatalogBuilder::new().build();
    let report = CatalogValidator::new().validate(&catalog);
    assert!(!report.is_valid);
    assert!(!report.errors.is_empty());
}

#[test]
fn test_validator_cross_references_template_and_vars() {
    let catalog = TestCatalogBuilder::new()
        .add_tool("Example")
        .add_role("Example", "Default", "Uses {bound} and {unbound}")
        .with_default_var("Example", "Default", "bound", "text")
        .with_default_var("Example", "Default", "orphan", "never used")
        .build();

    let report = CatalogValidator::new().validate(&catalog);
    assert!(report.is_valid);
    assert_eq!(report.warnings.len(), 2);
    assert!(report.warnings.iter().any(|w| w.contains("'unbound'")));
    assert!(report.warnings.iter().any(|w| w.contains("'orphan'")));
}
