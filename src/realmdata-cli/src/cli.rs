//! CLI argument definitions for realmdata
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "realmdata")]
#[command(about = "Game asset registry inspector", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set the default asset data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },

    /// Load a data directory and print registry statistics
    #[command(visible_alias = "s")]
    Stats {
        /// Asset data directory (uses configured default if not provided)
        #[arg(env = "REALMDATA_DIR")]
        dir: Option<PathBuf>,
    },

    /// Resolve a StringId or TypeId in either direction
    #[command(visible_alias = "l")]
    Lookup {
        /// StringId (case-insensitive) or numeric TypeId (hex or decimal)
        query: String,

        /// Asset data directory (uses configured default if not provided)
        #[arg(short, long, env = "REALMDATA_DIR")]
        dir: Option<PathBuf>,

        /// Search the tile namespace instead of objects
        #[arg(short, long)]
        tiles: bool,

        /// Print the retained element as YAML
        #[arg(short, long)]
        full: bool,
    },

    /// Export descriptor views as JSON files
    #[command(visible_alias = "e")]
    Export {
        /// Asset data directory (uses configured default if not provided)
        #[arg(env = "REALMDATA_DIR")]
        dir: Option<PathBuf>,

        /// Output directory for the JSON files
        #[arg(short, long)]
        output: PathBuf,

        /// Also export the retained raw elements
        #[arg(long)]
        elements: bool,
    },
}
