//! Green Chilli - restaurant menu catalog browser
//!
//! Thin presentation layer over `chilli_common`: an interactive TUI
//! (`browse`), a one-shot stdout renderer (`list`) and the persisted
//! theme preference (`theme`).

mod commands;
mod tui;

use std::path::{Path, PathBuf};

use anyhow::Result;
use chilli_common::catalog::{self, MenuItem};
use chilli_common::config::Config;
use clap::{Parser, Subcommand};
use tracing::error;

/// Fallback catalog location relative to the working directory.
const DEFAULT_DATA_FILE: &str = "data/menu.json";

#[derive(Parser)]
#[command(name = "chilli")]
#[command(about = "Green Chilli - restaurant menu catalog browser", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the menu data file (overrides the configured default)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the menu in the interactive TUI (default)
    Browse,

    /// Print the menu once to stdout
    List {
        /// Restrict to one category
        #[arg(long)]
        category: Option<String>,

        /// Search dish names and descriptions
        #[arg(long)]
        search: Option<String>,
    },

    /// Show or set the persisted theme ("dark" or "light")
    Theme { value: Option<String> },
}

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let Cli { data, command } = Cli::parse();
    let mut config = Config::load();

    match command.unwrap_or(Commands::Browse) {
        Commands::Browse => {
            let items = load_items(data.as_deref(), &config)?;
            tui::run(items, config)
        }
        Commands::List { category, search } => {
            let items = load_items(data.as_deref(), &config)?;
            commands::list(&items, category, search)
        }
        Commands::Theme { value } => commands::theme(&mut config, value),
    }
}

/// Resolve the catalog path (flag, then config, then the bundled default)
/// and load it. A failure here is fatal: one message, no partial UI.
fn load_items(cli_path: Option<&Path>, config: &Config) -> Result<Vec<MenuItem>> {
    let path = cli_path
        .map(Path::to_path_buf)
        .or_else(|| config.data_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    catalog::load_catalog(&path).map_err(|e| {
        error!("catalog load failed: {e}");
        anyhow::Error::new(e).context("could not load the menu, nothing to show")
    })
}
