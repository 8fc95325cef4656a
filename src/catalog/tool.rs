// ABOUTME: Catalog data structures for tools, roles, and variable definitions
// ABOUTME: Parses YAML or JSON catalogs mapping roles to templates and schemas

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{CatalogError, Result, ValidationError};
use crate::template::{DelimiterStyle, VariableKind, VariableSchema, VariableSpec};

fn default_syntax() -> DelimiterStyle {
    DelimiterStyle::Brace
}

/// An ordered collection of tools loaded from an external catalog file. The
/// catalog is read-only input: promptforge never fetches or mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub description: Option<String>,
    pub roles: IndexMap<String, Role>,
}

/// One role of a tool: a template plus the variable definitions that feed
/// its placeholders. Catalog templates use brace syntax unless declared
/// otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub description: String,
    pub template: String,
    #[serde(default = "default_syntax")]
    pub syntax: DelimiterStyle,
    #[serde(default)]
    pub vars: IndexMap<String, VarDef>,
}

/// Variable definition as it appears in catalog files. The compact forms
/// match the catalog shape observed in the wild: a bare string is a literal
/// default for a free-text variable, a bare list is an option list. The
/// expanded form declares the kind explicitly and wins over the name-suffix
/// convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VarDef {
    Default(String),
    Options(Vec<String>),
    Spec(VariableSpec),
}

impl VarDef {
    pub fn to_spec(&self) -> VariableSpec {
        match self {
            VarDef::Default(text) => VariableSpec::with_default(text.clone()),
            VarDef::Options(options) => VariableSpec {
                kind: None,
                options: options.clone(),
                default: None,
            },
            VarDef::Spec(spec) => spec.clone(),
        }
    }
}

impl Catalog {
    /// Parse a catalog from a YAML or JSON file, selected by extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(CatalogError::IoError)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }

    /// Parse a catalog from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let catalog: Catalog = serde_yaml::from_str(content).map_err(CatalogError::YamlError)?;
        catalog.validate_structure()?;
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(content).map_err(CatalogError::JsonError)?;
        catalog.validate_structure()?;
        Ok(catalog)
    }

    /// Validate basic catalog structure, failing on the first problem.
    pub fn validate_structure(&self) -> Result<()> {
        match self.structural_errors().into_iter().next() {
            Some(error) => Err(CatalogError::ValidationError(error)),
            None => Ok(()),
        }
    }

    /// Collect every structural problem in the catalog.
    pub fn structural_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.tools.is_empty() {
            errors.push(ValidationError::EmptyCatalog);
        }

        let mut seen = std::collections::HashSet::new();
        for tool in &self.tools {
            if tool.name.trim().is_empty() {
                errors.push(ValidationError::EmptyToolName);
            } else if !seen.insert(tool.name.clone()) {
                errors.push(ValidationError::DuplicateTool {
                    name: tool.name.clone(),
                });
            }

            if tool.roles.is_empty() {
                errors.push(ValidationError::NoRoles {
                    tool: tool.name.clone(),
                });
            }

            for (role_name, role) in &tool.roles {
                if role.template.trim().is_empty() {
                    errors.push(ValidationError::EmptyTemplate {
                        tool: tool.name.clone(),
                        role: role_name.clone(),
                    });
                }

                for (var_name, def) in &role.vars {
                    match def {
                        VarDef::Options(options) if options.is_empty() => {
                            errors.push(ValidationError::EmptyOptions {
                                tool: tool.name.clone(),
                                role: role_name.clone(),
                                name: var_name.clone(),
                            });
                        }
                        VarDef::Spec(spec) => {
                            if let Some(
                                kind @ (VariableKind::SingleChoice | VariableKind::MultiChoice),
                            ) = spec.kind
                            {
                                if spec.options.is_empty() {
                                    errors.push(ValidationError::MissingOptions {
                                        tool: tool.name.clone(),
                                        role: role_name.clone(),
                                        name: var_name.clone(),
                                        kind,
                                    });
                                }
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        errors
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name.as_str()).collect()
    }

    pub fn get_tool(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.name == name)
    }

    /// Look up a role by tool and role name with descriptive errors.
    pub fn get_role(&self, tool_name: &str, role_name: &str) -> Result<&Role> {
        let tool = self.get_tool(tool_name).ok_or_else(|| CatalogError::UnknownTool {
            name: tool_name.to_string(),
        })?;
        tool.roles.get(role_name).ok_or_else(|| CatalogError::UnknownRole {
            tool: tool_name.to_string(),
            role: role_name.to_string(),
        })
    }
}

impl Tool {
    pub fn role_names(&self) -> Vec<&str> {
        self.roles.keys().map(|name| name.as_str()).collect()
    }
}

impl Role {
    /// Bind this role's variable definitions into a schema for rendering.
    pub fn schema(&self) -> VariableSchema {
        let mut schema = VariableSchema::new();
        for (name, def) in &self.vars {
            schema.insert(name.clone(), def.to_spec());
        }
        schema
    }
}
