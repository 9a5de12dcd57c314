mod cli;
mod codemods;
mod core;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::AddRowChecks(args) => {
            cli::commands::codemod::execute("add-row-checks", args)?;
        }
        Commands::SplitIndexedFetch(args) => {
            cli::commands::codemod::execute("split-indexed-fetch", args)?;
        }
        Commands::Rowcount(args) => {
            cli::commands::codemod::execute("rowcount", args)?;
        }
        Commands::Init(args) => {
            cli::commands::init::execute(args)?;
        }
    }

    Ok(())
}
