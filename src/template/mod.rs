// ABOUTME: Template engine module for promptforge prompt generation
// ABOUTME: Provides placeholder extraction, variable schemas, and substitution

pub mod engine;
pub mod error;
pub mod schema;
pub mod store;
pub mod syntax;

pub use engine::TemplateEngine;
pub use error::{Result, TemplateError};
pub use schema::{VariableKind, VariableSchema, VariableSpec, MULTI_SUFFIX};
pub use store::{Value, ValueStore};
pub use syntax::DelimiterStyle;
