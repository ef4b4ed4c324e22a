//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

use crate::config::CONFIG_FILE;

const DEFAULT_CONFIG: &str = r#"# structure-lint configuration

[analyzer]
# Project root to analyze; must contain the source marker folder
# (default: current directory)
root = "."

# Substring patterns to exclude from discovery
exclude = [
    "node_modules",
    "dist",
    "build",
]

# Folder separating the source root from project content
source_marker = "src"

# Respect .gitignore files
respect_gitignore = true
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} if your source root is not ./src");
    println!("  2. Run: structure-lint check");

    Ok(())
}
