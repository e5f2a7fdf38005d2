mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Configure { data_dir, show } => {
            commands::configure::handle(data_dir, show)?;
        }

        Commands::Stats { dir } => {
            commands::stats::handle(dir)?;
        }

        Commands::Lookup {
            query,
            dir,
            tiles,
            full,
        } => {
            commands::lookup::handle(&query, dir, tiles, full)?;
        }

        Commands::Export {
            dir,
            output,
            elements,
        } => {
            commands::export::handle(dir, &output, elements)?;
        }
    }

    Ok(())
}
