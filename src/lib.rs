// ABOUTME: Main library module for the promptforge prompt generation engine
// ABOUTME: Exports all core modules and provides the public API

pub mod catalog;
pub mod cli;
pub mod session;
pub mod template;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogValidator, Role, Tool};
pub use cli::{App, Args, Config};
pub use session::Session;
pub use template::{
    DelimiterStyle, TemplateEngine, Value, ValueStore, VariableKind, VariableSchema, VariableSpec,
};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
