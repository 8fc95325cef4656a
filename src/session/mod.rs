// ABOUTME: Editing session state owning one template, schema, and value store
// ABOUTME: Routes kind-checked mutations and recomputes rendered output on demand

use crate::catalog::Role;
use crate::template::{
    DelimiterStyle, Result, TemplateEngine, ValueStore, VariableSchema,
};

/// One editing session: a template, the schema bound to it, and the value
/// store the caller fills in. The session exclusively owns its store; there
/// is no process-wide state. Switching to another template or role replaces
/// the entire session wholesale, discarding previous values.
#[derive(Debug, Clone)]
pub struct Session {
    engine: TemplateEngine,
    template: String,
    schema: VariableSchema,
    store: ValueStore,
}

impl Session {
    pub fn new(
        template: impl Into<String>,
        schema: VariableSchema,
        syntax: DelimiterStyle,
    ) -> Self {
        Self {
            engine: TemplateEngine::new(syntax),
            template: template.into(),
            schema,
            store: ValueStore::new(),
        }
    }

    /// Start a session for one catalog role.
    pub fn for_role(role: &Role) -> Self {
        Self::new(role.template.clone(), role.schema(), role.syntax)
    }

    /// Replace the whole session state. The previous value store is
    /// discarded, never carried across templates.
    pub fn switch(
        &mut self,
        template: impl Into<String>,
        schema: VariableSchema,
        syntax: DelimiterStyle,
    ) {
        *self = Self::new(template, schema, syntax);
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn schema(&self) -> &VariableSchema {
        &self.schema
    }

    pub fn store(&self) -> &ValueStore {
        &self.store
    }

    pub fn syntax(&self) -> DelimiterStyle {
        self.engine.syntax()
    }

    /// Placeholder names the template references, in first-occurrence order.
    pub fn placeholders(&self) -> Vec<String> {
        self.engine.extract(&self.template)
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.store.set_text(&self.schema, name, value)
    }

    pub fn set_choice(&mut self, name: &str, option: impl Into<String>) -> Result<()> {
        self.store.set_choice(&self.schema, name, option)
    }

    pub fn toggle(&mut self, name: &str, option: impl Into<String>) -> Result<()> {
        self.store.toggle(&self.schema, name, option)
    }

    /// Clear every stored value, keeping the template and schema.
    pub fn reset(&mut self) {
        self.store.clear();
    }

    /// Render the current output. Derived, never stored: recomputed from
    /// template, schema, and store on every call.
    pub fn render(&self) -> String {
        self.engine.render(&self.template, &self.schema, &self.store)
    }
}
