pub mod commands;
pub mod output;
pub mod progress;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rowguard", version, about = "Enforce row fetch safety checks in a Python codebase")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add check_row_or_abort after unchecked result.fetchone() assignments
    AddRowChecks(commands::codemod::CodemodArgs),
    /// Split result.fetchone()[0] into a guarded fetch
    SplitIndexedFetch(commands::codemod::CodemodArgs),
    /// Rewrite getattr(result, 'rowcount', 0) lookups
    Rowcount(commands::codemod::CodemodArgs),
    /// Write a .rowguard.yml with the default settings
    Init(commands::init::InitArgs),
}
