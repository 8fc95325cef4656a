// ABOUTME: Variable schema types and kind resolution for template placeholders
// ABOUTME: Maps placeholder names to free-text, single-choice, or multi-choice variables

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved name suffix marking a placeholder as multi-choice when the
/// schema does not declare a kind explicitly.
pub const MULTI_SUFFIX: &str = "__multi";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    /// Arbitrary unconstrained text
    FreeText,
    /// Exactly one option from a fixed, ordered option list
    SingleChoice,
    /// An ordered, de-duplicated subset of a fixed option list
    MultiChoice,
}

impl VariableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableKind::FreeText => "free_text",
            VariableKind::SingleChoice => "single_choice",
            VariableKind::MultiChoice => "multi_choice",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schema entry for a single placeholder name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableSpec {
    /// Explicitly declared kind. Takes precedence over the name-suffix
    /// convention when both are present.
    #[serde(default)]
    pub kind: Option<VariableKind>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub default: Option<String>,
}

impl VariableSpec {
    pub fn free_text() -> Self {
        Self::default()
    }

    pub fn with_default(default: impl Into<String>) -> Self {
        Self {
            default: Some(default.into()),
            ..Self::default()
        }
    }

    pub fn single_choice(options: Vec<String>) -> Self {
        Self {
            kind: Some(VariableKind::SingleChoice),
            options,
            default: None,
        }
    }

    pub fn multi_choice(options: Vec<String>) -> Self {
        Self {
            kind: Some(VariableKind::MultiChoice),
            options,
            default: None,
        }
    }
}

/// Ordered mapping from placeholder name to its variable specification.
/// Loaded once per session and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableSchema {
    vars: IndexMap<String, VariableSpec>,
}

impl VariableSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, spec: VariableSpec) {
        self.vars.insert(name.into(), spec);
    }

    pub fn get(&self, name: &str) -> Option<&VariableSpec> {
        self.vars.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &VariableSpec)> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Resolve the kind of a placeholder name. Precedence: an explicitly
    /// declared kind wins, then the reserved multi-choice name suffix, then
    /// the presence of an option list implies single-choice. Names with no
    /// schema entry and no suffix resolve to free-text.
    pub fn resolve_kind(&self, name: &str) -> VariableKind {
        if let Some(kind) = self.get(name).and_then(|spec| spec.kind) {
            return kind;
        }
        if name.ends_with(MULTI_SUFFIX) {
            return VariableKind::MultiChoice;
        }
        match self.get(name) {
            Some(spec) if !spec.options.is_empty() => VariableKind::SingleChoice,
            _ => VariableKind::FreeText,
        }
    }

    /// Option list declared for a name; empty for unknown names.
    pub fn options(&self, name: &str) -> &[String] {
        self.get(name).map(|spec| spec.options.as_slice()).unwrap_or(&[])
    }

    /// Declared default text for a name, if any.
    pub fn default_value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|spec| spec.default.as_deref())
    }
}
