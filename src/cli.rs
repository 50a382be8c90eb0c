use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mscmap")]
#[command(
    about = "Compare MSC classification methods across zbMATH and Mathematical Reviews",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recompute the ranked table, bar chart and confusion heatmap
    Show {
        /// Reference dataset (zb1 or mr1)
        #[arg(short, long)]
        source: Option<String>,

        /// Minimum support count (p) for a class to be shown
        #[arg(short, long)]
        minimum: Option<String>,

        /// Method whose F1 score orders the table
        #[arg(long)]
        sort: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the top N table rows
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Configuration file (defaults to discovering .mscmap.toml)
        #[arg(short, long, env = "MSCMAP_CONFIG")]
        config: Option<PathBuf>,

        /// Directory holding the dataset CSV files
        #[arg(long = "data-dir", env = "MSCMAP_DATA_DIR")]
        data_dir: Option<PathBuf>,

        /// Disable colors and styling
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// List the selectable sources and sort methods
    Methods,

    /// Initialize a new .mscmap.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Show { verbosity, .. } => *verbosity,
            _ => 0,
        }
    }
}
