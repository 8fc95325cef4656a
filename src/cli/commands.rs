// ABOUTME: Command implementations for the promptforge CLI
// ABOUTME: Handles render, list, show, vars, and validate commands

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use super::args::Args;
use super::config::Config;
use crate::catalog::{Catalog, CatalogValidator};
use crate::session::Session;
use crate::template::{DelimiterStyle, TemplateEngine, VariableSchema};

/// Options for the render command, collected from CLI arguments.
pub struct RenderOptions {
    pub template: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub tool: Option<String>,
    pub role: Option<String>,
    pub vars: Vec<String>,
    pub selects: Vec<String>,
    pub toggles: Vec<String>,
    pub syntax: Option<DelimiterStyle>,
    pub output: Option<PathBuf>,
}

/// Render a free-form template or a catalog role
pub fn render(options: RenderOptions, config: &Config) -> Result<()> {
    let mut session = open_session(&options, config)?;

    for (name, value) in Args::parse_pairs(&options.vars)? {
        session.set_text(&name, value)?;
    }
    for (name, option) in Args::parse_pairs(&options.selects)? {
        session.set_choice(&name, option)?;
    }
    for (name, option) in Args::parse_pairs(&options.toggles)? {
        session.toggle(&name, option)?;
    }

    let rendered = session.render();

    match options.output {
        Some(path) => {
            std::fs::write(&path, &rendered).map_err(|e| {
                anyhow::anyhow!("Failed to write output file '{}': {}", path.display(), e)
            })?;
            info!("Rendered output written to: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Build the session the render command operates on: either a catalog role
/// or a free-form template file.
fn open_session(options: &RenderOptions, config: &Config) -> Result<Session> {
    let catalog_path = options
        .catalog
        .clone()
        .or_else(|| config.default_catalog.clone());

    if options.tool.is_some() || options.role.is_some() {
        let Some(path) = catalog_path else {
            return Err(anyhow::anyhow!(
                "--tool/--role require a catalog (pass --catalog or set default_catalog)"
            ));
        };
        let catalog = load_catalog(&path)?;

        let tool = match &options.tool {
            Some(name) => catalog.get_tool(name).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown tool '{}'. Available tools: {}",
                    name,
                    catalog.tool_names().join(", ")
                )
            })?,
            None => &catalog.tools[0],
        };

        let (role_name, role) = match &options.role {
            Some(name) => (
                name.as_str(),
                tool.roles.get(name).ok_or_else(|| {
                    anyhow::anyhow!(
                        "Unknown role '{}' in tool '{}'. Available roles: {}",
                        name,
                        tool.name,
                        tool.role_names().join(", ")
                    )
                })?,
            ),
            None => {
                let (name, role) = tool
                    .roles
                    .first()
                    .ok_or_else(|| anyhow::anyhow!("Tool '{}' has no roles", tool.name))?;
                (name.as_str(), role)
            }
        };

        info!("Rendering role '{}' from tool '{}'", role_name, tool.name);
        return Ok(Session::for_role(role));
    }

    let Some(template_path) = &options.template else {
        return Err(anyhow::anyhow!(
            "Either a template file or --catalog with --tool/--role is required"
        ));
    };
    let template = std::fs::read_to_string(template_path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read template file '{}': {}",
            template_path.display(),
            e
        )
    })?;
    let syntax = options.syntax.unwrap_or(config.syntax);

    info!(
        "Rendering free-form template: {} ({} syntax)",
        template_path.display(),
        syntax
    );
    Ok(Session::new(template, VariableSchema::new(), syntax))
}

/// List the tools and roles a catalog provides
pub fn list_catalog(catalog_path: PathBuf, _config: &Config) -> Result<()> {
    let catalog = load_catalog(&catalog_path)?;

    for tool in &catalog.tools {
        println!("{}", tool.name);
        if let Some(ref description) = tool.description {
            println!("  {}", description);
        }
        for (role_name, role) in &tool.roles {
            if role.description.is_empty() {
                println!("  - {}", role_name);
            } else {
                println!("  - {}: {}", role_name, role.description);
            }
        }
    }

    Ok(())
}

/// Show one role's description, template, and variables
pub fn show_role(
    catalog_path: PathBuf,
    tool_name: String,
    role_name: String,
    _config: &Config,
) -> Result<()> {
    let catalog = load_catalog(&catalog_path)?;
    let role = catalog.get_role(&tool_name, &role_name)?;
    let schema = role.schema();

    println!("Tool: {}", tool_name);
    println!("Role: {}", role_name);
    if !role.description.is_empty() {
        println!("Description: {}", role.description);
    }
    println!("Syntax: {}", role.syntax);
    println!();
    println!("Template:");
    for line in role.template.lines() {
        println!("  {}", line);
    }
    println!();
    println!("Variables:");
    let placeholders = TemplateEngine::new(role.syntax).extract(&role.template);
    for name in &placeholders {
        print_variable(&schema, name, "");
    }
    // Schema entries the template never references still belong to the role
    for (name, _) in schema.iter() {
        if !placeholders.iter().any(|placeholder| placeholder == name) {
            print_variable(&schema, name, " [unreferenced]");
        }
    }

    Ok(())
}

fn print_variable(schema: &VariableSchema, name: &str, note: &str) {
    let kind = schema.resolve_kind(name);
    let options = schema.options(name);
    if options.is_empty() {
        println!("  {} ({}){}", name, kind, note);
    } else {
        println!("  {} ({}): {}{}", name, kind, options.join(", "), note);
    }
}

/// Extract placeholder names from a template file
pub fn extract_vars(
    template_path: PathBuf,
    syntax: Option<DelimiterStyle>,
    config: &Config,
) -> Result<()> {
    let template = std::fs::read_to_string(&template_path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read template file '{}': {}",
            template_path.display(),
            e
        )
    })?;

    let engine = TemplateEngine::new(syntax.unwrap_or(config.syntax));
    for name in engine.extract(&template) {
        println!("{}", name);
    }

    Ok(())
}

/// Validate a catalog file and print a report
pub fn validate_catalog(catalog_path: PathBuf, _config: &Config) -> Result<()> {
    info!("Validating catalog: {}", catalog_path.display());

    let content = std::fs::read_to_string(&catalog_path)?;
    let catalog = match catalog_path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str::<Catalog>(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog: {}", e))?,
        _ => serde_yaml::from_str::<Catalog>(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog: {}", e))?,
    };

    let report = CatalogValidator::new().validate(&catalog);

    for warning in &report.warnings {
        println!("warning: {}", warning);
    }
    for error in &report.errors {
        println!("error: {}", error);
    }

    if report.is_valid {
        println!(
            "✓ Catalog is valid ({} tools, {} warnings)",
            catalog.tools.len(),
            report.warnings.len()
        );
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "Catalog validation failed with {} errors",
            report.errors.len()
        ))
    }
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    Catalog::from_file(path)
        .map_err(|e| anyhow::anyhow!("Failed to load catalog '{}': {}", path.display(), e))
}
