use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::core::config::{CONFIG_FILE, DEFAULT_IMPORT_WINDOW, DEFAULT_LOOKAHEAD_WINDOW};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path to the project (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing .rowguard.yml
    #[arg(long)]
    pub force: bool,
}

pub fn execute(args: &InitArgs) -> Result<()> {
    let path = args
        .path
        .canonicalize()
        .with_context(|| format!("cannot resolve project root {}", args.path.display()))?;
    let config_path = path.join(CONFIG_FILE);

    if config_path.exists() && !args.force {
        eprintln!(
            "  {} {} already exists. Use {} to overwrite.",
            "SKIP".yellow(),
            CONFIG_FILE,
            "--force".bold()
        );
        return Ok(());
    }

    std::fs::write(&config_path, generate_config())
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    eprintln!("  {} {} created", "DONE".green(), CONFIG_FILE);
    eprintln!("  Edit {} to tune the codemods.", config_path.display());

    Ok(())
}

fn generate_config() -> String {
    format!(
        r#"# rowguard configuration

# Non-blank lines inspected after a fetchone() assignment for an existing check
lookahead_window: {DEFAULT_LOOKAHEAD_WINDOW}

# Lines scanned from the top of a file for the import block
import_window: {DEFAULT_IMPORT_WINDOW}

# Directory names skipped in addition to venv, .venv and __pycache__
exclude_dirs: []
  # - migrations
"#
    )
}
