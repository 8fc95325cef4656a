// ABOUTME: Error types for catalog parsing and validation
// ABOUTME: Defines specific error types for catalog module operations

use thiserror::Error;

use crate::template::VariableKind;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Unknown role '{role}' in tool '{tool}'")]
    UnknownRole { tool: String, role: String },

    #[error("Validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Empty catalog: no tools defined")]
    EmptyCatalog,

    #[error("Tool name cannot be empty")]
    EmptyToolName,

    #[error("Duplicate tool name: {name}")]
    DuplicateTool { name: String },

    #[error("Tool '{tool}' has no roles")]
    NoRoles { tool: String },

    #[error("Role '{role}' in tool '{tool}' has an empty template")]
    EmptyTemplate { tool: String, role: String },

    #[error("Variable '{name}' in role '{tool}/{role}' has an empty option list")]
    EmptyOptions {
        tool: String,
        role: String,
        name: String,
    },

    #[error("Variable '{name}' in role '{tool}/{role}' declares {kind} but supplies no options")]
    MissingOptions {
        tool: String,
        role: String,
        name: String,
        kind: VariableKind,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
