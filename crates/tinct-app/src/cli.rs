use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tinct: convert colors between HEX, RGB and HSL and keep a saved palette.
#[derive(Parser, Debug)]
#[command(name = "tinct", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `tinct=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Directory holding the saved palette.
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show a color (`#hex`, `rgb(...)` or `hsl(...)`) in all three forms.
    Convert {
        color: String,

        /// Print the fields as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Manage saved colors.
    #[command(subcommand)]
    Palette(PaletteCommand),
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum PaletteCommand {
    /// List saved colors, most recent first.
    List,

    /// Save a color at the front of the palette.
    Add { color: String },

    /// Remove the saved color at INDEX (as shown by `list`).
    Remove { index: usize },
}

pub fn parse() -> Args {
    Args::parse()
}
