//! CLI for building arcgis-explorer deep links.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use explorer_link_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_from_map, run_link};

/// Top-level CLI for the explorer link builder.
#[derive(Debug, Parser)]
#[command(name = "explorer-link")]
#[command(about = "Build arcgis-explorer deep links and share intents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Link parameters given on the command line.
#[derive(Debug, Clone, Args)]
pub struct LinkArgs {
    /// Portal item id of the map.
    #[arg(long)]
    pub item_id: String,

    /// Center on a free-text address instead of a coordinate.
    #[arg(long, conflicts_with_all = ["x", "y", "wkid"])]
    pub address: Option<String>,

    /// Center x (longitude unless --wkid says otherwise).
    #[arg(long, requires = "y", allow_negative_numbers = true)]
    pub x: Option<f64>,

    /// Center y (latitude unless --wkid says otherwise).
    #[arg(long, requires = "x", allow_negative_numbers = true)]
    pub y: Option<f64>,

    /// Spatial reference of --x/--y; reprojected to WGS84 when not 4326.
    #[arg(long, requires = "x")]
    pub wkid: Option<u32>,

    /// Map scale denominator (defaults to the configured scale).
    #[arg(long)]
    pub scale: Option<f64>,

    /// Map rotation in degrees (defaults to the configured rotation).
    #[arg(long, allow_negative_numbers = true)]
    pub rotation: Option<f64>,
}

/// What to print for a built link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputKind {
    /// The bare URI.
    Uri,
    /// A view intent as JSON.
    View,
    /// A share intent as JSON.
    Share,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the deep-link URI.
    Uri {
        #[command(flatten)]
        link: LinkArgs,
    },

    /// Print a view intent wrapping the URI.
    View {
        #[command(flatten)]
        link: LinkArgs,
    },

    /// Print a plain-text share intent carrying the URI.
    Share {
        #[command(flatten)]
        link: LinkArgs,
    },

    /// Build a link from a saved map view state (.json or .toml).
    FromMap {
        /// Path to the map view state file.
        path: PathBuf,

        /// Output form.
        #[arg(long, value_enum, default_value_t = OutputKind::Uri)]
        output: OutputKind,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Uri { link } => run_link(&cfg, &link, OutputKind::Uri)?,
            CliCommand::View { link } => run_link(&cfg, &link, OutputKind::View)?,
            CliCommand::Share { link } => run_link(&cfg, &link, OutputKind::Share)?,
            CliCommand::FromMap { path, output } => run_from_map(&cfg, &path, output)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
