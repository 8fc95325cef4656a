// ABOUTME: Catalog validation logic and template cross-checking
// ABOUTME: Reports structural errors and placeholder/schema mismatches

use super::error::ValidationError;
use super::tool::Catalog;
use crate::template::TemplateEngine;

#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<String>,
    pub is_valid: bool,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            is_valid: true,
        }
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CatalogValidator;

impl CatalogValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a complete catalog. Structural problems are errors;
    /// placeholder/schema mismatches are warnings because rendering has
    /// defined fallback behavior for both directions.
    pub fn validate(&self, catalog: &Catalog) -> ValidationReport {
        let mut report = ValidationReport::new();

        report.errors = catalog.structural_errors();
        self.check_placeholder_bindings(catalog, &mut report);

        report.is_valid = report.errors.is_empty();
        report
    }

    /// Cross-check each role's template placeholders against its variable
    /// definitions.
    fn check_placeholder_bindings(&self, catalog: &Catalog, report: &mut ValidationReport) {
        for tool in &catalog.tools {
            for (role_name, role) in &tool.roles {
                let engine = TemplateEngine::new(role.syntax);
                let placeholders = engine.extract(&role.template);
                let schema = role.schema();

                for name in &placeholders {
                    if !schema.contains(name) {
                        report.warnings.push(format!(
                            "Role '{}/{}' references '{}' with no variable definition; it will render with fallback behavior",
                            tool.name, role_name, name
                        ));
                    }
                }

                for (name, _) in schema.iter() {
                    if !placeholders.iter().any(|placeholder| placeholder == name) {
                        report.warnings.push(format!(
                            "Role '{}/{}' defines variable '{}' that its template never references",
                            tool.name, role_name, name
                        ));
                    }
                }
            }
        }
    }
}

impl Default for CatalogValidator {
    fn default() -> Self {
        Self::new()
    }
}
