// ABOUTME: Typed value store for placeholder values within one editing session
// ABOUTME: Provides kind-checked mutation helpers including multi-select toggling

use indexmap::{IndexMap, IndexSet};

use super::error::{Result, TemplateError};
use super::schema::{VariableKind, VariableSchema};

/// Current value of one placeholder. The shape follows the variable's kind;
/// mutations through [`ValueStore`] keep the two consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Unconstrained text for a free-text variable
    Text(String),
    /// One option chosen from a single-choice option list
    Choice(String),
    /// Ordered, de-duplicated selections for a multi-choice variable
    Selections(IndexSet<String>),
}

impl Value {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Choice(option) => Some(option),
            Value::Selections(_) => None,
        }
    }

    pub fn as_selections(&self) -> Option<&IndexSet<String>> {
        match self {
            Value::Selections(items) => Some(items),
            _ => None,
        }
    }
}

/// Mutable mapping from placeholder name to its current value, scoped to one
/// editing session. Absence of an entry is a meaningful state (unset). All
/// mutations are validated against the schema at the boundary; a rejected
/// mutation leaves the store unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueStore {
    values: IndexMap<String, Value>,
}

impl ValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remove all entries. Used on reset and on tool/role switch.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Set a free-text value. An empty string is a valid, distinct state
    /// from unset. Rejected if the schema resolves the name to a choice kind.
    pub fn set_text(
        &mut self,
        schema: &VariableSchema,
        name: &str,
        value: impl Into<String>,
    ) -> Result<()> {
        match schema.resolve_kind(name) {
            VariableKind::FreeText => {
                self.values.insert(name.to_string(), Value::Text(value.into()));
                Ok(())
            }
            kind => Err(TemplateError::KindMismatch {
                name: name.to_string(),
                kind,
            }),
        }
    }

    /// Select one option for a single-choice variable, replacing any
    /// previous choice. The option must appear in the schema's option list.
    pub fn set_choice(
        &mut self,
        schema: &VariableSchema,
        name: &str,
        option: impl Into<String>,
    ) -> Result<()> {
        let option = option.into();
        match schema.resolve_kind(name) {
            VariableKind::SingleChoice => {
                let options = schema.options(name);
                if !options.iter().any(|candidate| candidate == &option) {
                    return Err(TemplateError::UnknownOption {
                        name: name.to_string(),
                        option,
                    });
                }
                self.values.insert(name.to_string(), Value::Choice(option));
                Ok(())
            }
            kind => Err(TemplateError::KindMismatch {
                name: name.to_string(),
                kind,
            }),
        }
    }

    /// Toggle one option of a multi-choice variable: remove it if selected,
    /// otherwise append it to the end of the selection. Toggling is its own
    /// inverse. An absent entry behaves as an empty selection, and a
    /// selection emptied by toggling is removed entirely.
    pub fn toggle(
        &mut self,
        schema: &VariableSchema,
        name: &str,
        option: impl Into<String>,
    ) -> Result<()> {
        let option = option.into();
        match schema.resolve_kind(name) {
            VariableKind::MultiChoice => {
                let options = schema.options(name);
                if !options.is_empty() && !options.iter().any(|candidate| candidate == &option) {
                    return Err(TemplateError::UnknownOption {
                        name: name.to_string(),
                        option,
                    });
                }
                let mut items = match self.values.shift_remove(name) {
                    Some(Value::Selections(items)) => items,
                    _ => IndexSet::new(),
                };
                if !items.shift_remove(&option) {
                    items.insert(option);
                }
                if !items.is_empty() {
                    self.values.insert(name.to_string(), Value::Selections(items));
                }
                Ok(())
            }
            kind => Err(TemplateError::KindMismatch {
                name: name.to_string(),
                kind,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::schema::VariableSpec;

    fn options(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn choice_schema() -> VariableSchema {
        let mut schema = VariableSchema::new();
        schema.insert("color", VariableSpec::single_choice(options(&["red", "green"])));
        schema.insert("tags__multi", VariableSpec::multi_choice(options(&["a", "b", "c"])));
        schema
    }

    #[test]
    fn test_set_text_free_text() {
        let schema = VariableSchema::new();
        let mut store = ValueStore::new();

        store.set_text(&schema, "subject", "Ada").unwrap();
        assert_eq!(store.get("subject"), Some(&Value::Text("Ada".to_string())));

        // Empty string is a valid value, distinct from unset
        store.set_text(&schema, "subject", "").unwrap();
        assert_eq!(store.get("subject"), Some(&Value::Text(String::new())));
    }

    #[test]
    fn test_set_text_rejected_for_choice_kind() {
        let schema = choice_schema();
        let mut store = ValueStore::new();

        let err = store.set_text(&schema, "color", "anything").unwrap_err();
        assert_eq!(
            err,
            TemplateError::KindMismatch {
                name: "color".to_string(),
                kind: VariableKind::SingleChoice,
            }
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_choice_validates_option() {
        let schema = choice_schema();
        let mut store = ValueStore::new();

        store.set_choice(&schema, "color", "green").unwrap();
        assert_eq!(store.get("color"), Some(&Value::Choice("green".to_string())));

        let err = store.set_choice(&schema, "color", "purple").unwrap_err();
        assert!(matches!(err, TemplateError::UnknownOption { .. }));
        // Previous choice survives the rejected mutation
        assert_eq!(store.get("color"), Some(&Value::Choice("green".to_string())));
    }

    #[test]
    fn test_toggle_appends_in_selection_order() {
        let schema = choice_schema();
        let mut store = ValueStore::new();

        store.toggle(&schema, "tags__multi", "c").unwrap();
        store.toggle(&schema, "tags__multi", "a").unwrap();

        let items = store.get("tags__multi").unwrap().as_selections().unwrap();
        let ordered: Vec<&String> = items.iter().collect();
        assert_eq!(ordered, vec!["c", "a"]);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let schema = choice_schema();
        let mut store = ValueStore::new();
        store.toggle(&schema, "tags__multi", "a").unwrap();
        store.toggle(&schema, "tags__multi", "b").unwrap();

        let before = store.clone();
        store.toggle(&schema, "tags__multi", "c").unwrap();
        store.toggle(&schema, "tags__multi", "c").unwrap();
        assert_eq!(store, before);
    }

    #[test]
    fn test_toggle_removes_preserving_order() {
        let schema = choice_schema();
        let mut store = ValueStore::new();
        for option in ["a", "b", "c"] {
            store.toggle(&schema, "tags__multi", option).unwrap();
        }

        store.toggle(&schema, "tags__multi", "b").unwrap();
        let items = store.get("tags__multi").unwrap().as_selections().unwrap();
        let ordered: Vec<&String> = items.iter().collect();
        assert_eq!(ordered, vec!["a", "c"]);
    }

    #[test]
    fn test_toggle_to_empty_removes_entry() {
        let schema = choice_schema();
        let mut store = ValueStore::new();
        store.toggle(&schema, "tags__multi", "a").unwrap();
        store.toggle(&schema, "tags__multi", "a").unwrap();
        assert!(!store.contains("tags__multi"));
    }

    #[test]
    fn test_toggle_without_declared_options() {
        // Suffix-convention variables with no schema entry accept any option
        let schema = VariableSchema::new();
        let mut store = ValueStore::new();
        store.toggle(&schema, "notes__multi", "anything").unwrap();
        assert!(store.contains("notes__multi"));
    }

    #[test]
    fn test_toggle_rejected_for_scalar_kind() {
        let schema = choice_schema();
        let mut store = ValueStore::new();
        let err = store.toggle(&schema, "color", "red").unwrap_err();
        assert!(matches!(err, TemplateError::KindMismatch { .. }));
    }

    #[test]
    fn test_clear_resets_everything() {
        let schema = choice_schema();
        let mut store = ValueStore::new();
        store.set_choice(&schema, "color", "red").unwrap();
        store.toggle(&schema, "tags__multi", "a").unwrap();

        store.clear();
        assert!(store.is_empty());
    }
}
