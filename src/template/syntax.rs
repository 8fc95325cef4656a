// ABOUTME: Placeholder delimiter syntax definitions
// ABOUTME: Supports bracket (<name>) and brace ({name}) placeholder forms

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The delimiter pair a template uses for its placeholders. A template uses
/// exactly one style; the style is selected per use site, never auto-detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterStyle {
    /// `<name>` placeholders, used for free-form user-authored templates
    #[default]
    Bracket,
    /// `{name}` placeholders, used for catalog-driven templates
    Brace,
}

impl DelimiterStyle {
    pub fn open(&self) -> char {
        match self {
            DelimiterStyle::Bracket => '<',
            DelimiterStyle::Brace => '{',
        }
    }

    pub fn close(&self) -> char {
        match self {
            DelimiterStyle::Bracket => '>',
            DelimiterStyle::Brace => '}',
        }
    }

    /// The literal delimited form of a placeholder name, e.g. `<name>`.
    /// Unset free-text placeholders render as this form unchanged.
    pub fn delimit(&self, name: &str) -> String {
        format!("{}{}{}", self.open(), name, self.close())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DelimiterStyle::Bracket => "bracket",
            DelimiterStyle::Brace => "brace",
        }
    }
}

impl fmt::Display for DelimiterStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DelimiterStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "bracket" => Ok(DelimiterStyle::Bracket),
            "brace" => Ok(DelimiterStyle::Brace),
            other => Err(format!(
                "unknown delimiter style '{}', expected 'bracket' or 'brace'",
                other
            )),
        }
    }
}
