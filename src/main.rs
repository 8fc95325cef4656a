// ABOUTME: Binary entry point for the promptforge CLI
// ABOUTME: Parses arguments, loads configuration, and runs the application

use anyhow::Result;
use promptforge::cli::{App, Args};

fn main() -> Result<()> {
    let args = Args::parse_args();
    let mut app = App::from_args(&args)?;

    app.run(args)?;

    Ok(())
}
