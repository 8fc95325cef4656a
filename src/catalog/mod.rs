// ABOUTME: Catalog module for tool and role definitions
// ABOUTME: Exports catalog parsing, validation, and data structures

pub mod error;
pub mod tool;
pub mod validation;

pub use error::{CatalogError, ValidationError};
pub use tool::{Catalog, Role, Tool, VarDef};
pub use validation::{CatalogValidator, ValidationReport};
