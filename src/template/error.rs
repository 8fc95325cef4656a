// ABOUTME: Error types for template value-store mutations
// ABOUTME: Defines boundary rejection errors for kind and option mismatches

use thiserror::Error;

use super::schema::VariableKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    #[error("Variable '{name}' is a {kind} variable and cannot take this value")]
    KindMismatch { name: String, kind: VariableKind },

    #[error("Option '{option}' is not in the option list for variable '{name}'")]
    UnknownOption { name: String, option: String },
}

pub type Result<T> = std::result::Result<T, TemplateError>;
