use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::output::ReportFormatter;
use crate::cli::progress::RunProgress;
use crate::codemods::default_registry;
use crate::core::project::Project;
use crate::core::runner::Runner;

#[derive(Args, Debug)]
pub struct CodemodArgs {
    /// Root of the project to rewrite (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Report format
    #[arg(long, default_value = "table", value_parser = ["table", "json"])]
    pub format: String,
}

pub fn execute(name: &str, args: &CodemodArgs) -> Result<()> {
    let project = Project::new(&args.path)?;
    let registry = default_registry();
    let codemod = registry
        .find_codemod(name)
        .ok_or_else(|| {
            anyhow!(
                "unknown codemod: {} (available: {})",
                name,
                registry.names().join(", ")
            )
        })?;

    eprintln!("  {} {}", "RUN".cyan(), codemod.description());
    let progress = RunProgress::new();
    let result = Runner::new(codemod).run_with_progress(&project, |rel| {
        progress.set_file(rel);
    });
    progress.finish();
    let result = result?;

    ReportFormatter::new(&args.format).display(&result)
}
