// ABOUTME: Placeholder extraction and substitution engine
// ABOUTME: Renders templates by replacing placeholders with schema-resolved values

use indexmap::{IndexMap, IndexSet};

use super::schema::{VariableKind, VariableSchema};
use super::store::{Value, ValueStore};
use super::syntax::DelimiterStyle;

/// Prefix for each rendered multi-choice item
const BULLET: &str = "• ";
/// Marker rendered for a multi-choice placeholder with no selections
const EMPTY_SELECTION: &str = "• (none)";

/// One piece of a scanned template: literal text between placeholders, or
/// the name enclosed by a delimiter pair.
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// Pure extraction and substitution over a single delimiter style. Holds no
/// mutable state; extraction and rendering are functions of their inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateEngine {
    syntax: DelimiterStyle,
}

impl TemplateEngine {
    pub fn new(syntax: DelimiterStyle) -> Self {
        Self { syntax }
    }

    pub fn syntax(&self) -> DelimiterStyle {
        self.syntax
    }

    /// Extract the distinct placeholder names a template references, in
    /// first-occurrence order. Extraction is purely syntactic; names are not
    /// checked against any schema. Dangling delimiters yield no placeholder.
    pub fn extract(&self, template: &str) -> Vec<String> {
        let mut names: IndexSet<&str> = IndexSet::new();
        self.scan(template, |segment| {
            if let Segment::Placeholder(name) = segment {
                names.insert(name);
            }
        });
        names.into_iter().map(|name| name.to_string()).collect()
    }

    /// Render a template against a schema and value store. Total and pure:
    /// every input combination produces output and the store is never
    /// touched. Every occurrence of a placeholder is replaced in a single
    /// left-to-right pass over the original template; substituted values are
    /// never re-scanned, so a value containing delimiter-like text stays
    /// inert.
    pub fn render(&self, template: &str, schema: &VariableSchema, store: &ValueStore) -> String {
        let mut resolved: IndexMap<&str, String> = IndexMap::new();
        let mut output = String::with_capacity(template.len());
        self.scan(template, |segment| match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder(name) => {
                let value = resolved
                    .entry(name)
                    .or_insert_with(|| self.resolve_value(name, schema, store));
                output.push_str(value);
            }
        });
        output
    }

    /// Compute the substitution text for one placeholder name.
    fn resolve_value(&self, name: &str, schema: &VariableSchema, store: &ValueStore) -> String {
        match schema.resolve_kind(name) {
            VariableKind::MultiChoice => match store.get(name).and_then(Value::as_selections) {
                Some(items) if !items.is_empty() => items
                    .iter()
                    .map(|item| format!("{}{}", BULLET, item))
                    .collect::<Vec<_>>()
                    .join("\n"),
                _ => EMPTY_SELECTION.to_string(),
            },
            kind => {
                if let Some(value) = store.get(name).and_then(Value::as_scalar) {
                    return value.to_string();
                }
                // Unset single-choice behaves as if the first option were
                // pre-selected
                if kind == VariableKind::SingleChoice {
                    if let Some(first) = schema.options(name).first() {
                        return first.clone();
                    }
                }
                match schema.default_value(name) {
                    Some(default) => default.to_string(),
                    None => self.syntax.delimit(name),
                }
            }
        }
    }

    /// Walk the template left to right, emitting literal runs and
    /// placeholder names. Delimiters do not nest: the first close delimiter
    /// after an open terminates the placeholder. An open delimiter with no
    /// following close, and an empty delimiter pair, are literal text.
    fn scan<'a>(&self, template: &'a str, mut visit: impl FnMut(Segment<'a>)) {
        let open = self.syntax.open();
        let close = self.syntax.close();
        let mut rest = template;
        loop {
            let Some(start) = rest.find(open) else { break };
            let body = &rest[start + open.len_utf8()..];
            let Some(end) = body.find(close) else { break };
            if end == 0 {
                let split = start + open.len_utf8() + close.len_utf8();
                visit(Segment::Literal(&rest[..split]));
                rest = &rest[split..];
                continue;
            }
            if start > 0 {
                visit(Segment::Literal(&rest[..start]));
            }
            visit(Segment::Placeholder(&body[..end]));
            rest = &body[end + close.len_utf8()..];
        }
        if !rest.is_empty() {
            visit(Segment::Literal(rest));
        }
    }
}
