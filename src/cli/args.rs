// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for promptforge

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::template::DelimiterStyle;

#[derive(Parser)]
#[command(name = "promptforge")]
#[command(about = "A CLI for rendering prompts from placeholder templates and tool catalogs")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template with supplied variable values
    Render {
        #[arg(help = "Path to a free-form template file")]
        template: Option<PathBuf>,

        #[arg(long, help = "Render a catalog role instead of a template file")]
        catalog: Option<PathBuf>,

        #[arg(long, help = "Tool name within the catalog")]
        tool: Option<String>,

        #[arg(long, help = "Role name within the tool")]
        role: Option<String>,

        #[arg(
            short = 'V',
            long = "var",
            help = "Free-text variable value (name=value)"
        )]
        vars: Vec<String>,

        #[arg(long = "select", help = "Single-choice selection (name=option)")]
        selects: Vec<String>,

        #[arg(long = "toggle", help = "Toggle a multi-choice option (name=option)")]
        toggles: Vec<String>,

        #[arg(short, long, help = "Delimiter syntax for free-form templates")]
        syntax: Option<DelimiterStyle>,

        #[arg(short, long, help = "Write output to file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// List the tools and roles a catalog provides
    List {
        #[arg(help = "Path to catalog YAML or JSON file")]
        catalog: PathBuf,
    },

    /// Show one role's description, template, and variables
    Show {
        #[arg(help = "Path to catalog YAML or JSON file")]
        catalog: PathBuf,

        #[arg(help = "Tool name within the catalog")]
        tool: String,

        #[arg(help = "Role name within the tool")]
        role: String,
    },

    /// Extract placeholder names from a template
    Vars {
        #[arg(help = "Path to template file")]
        template: PathBuf,

        #[arg(short, long, help = "Delimiter syntax")]
        syntax: Option<DelimiterStyle>,
    },

    /// Validate a catalog file and report problems
    Validate {
        #[arg(help = "Path to catalog YAML or JSON file")]
        catalog: PathBuf,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse name=value pairs, preserving order and repeats
    pub fn parse_pairs(pairs: &[String]) -> anyhow::Result<Vec<(String, String)>> {
        let mut parsed = Vec::with_capacity(pairs.len());

        for pair in pairs {
            if let Some((name, value)) = pair.split_once('=') {
                parsed.push((name.to_string(), value.to_string()));
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid variable format '{}'. Expected 'name=value'",
                    pair
                ));
            }
        }

        Ok(parsed)
    }
}
