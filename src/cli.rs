use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_PALETTE_FILE: &str = "16-ansi-color-palette.json";

/// Colorchart CLI entrypoint.
#[derive(Parser, Debug)]
#[command(name = "colorchart", version, about = "ANSI color code reference chart")]
pub struct Cli {
    /// Print extra diagnostics on stderr.
    #[arg(short, long)]
    pub debug: bool,

    /// Show hex values and 24-bit swatches from a palette file.
    #[arg(
        short = 't',
        long = "theme",
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = DEFAULT_PALETTE_FILE
    )]
    pub theme: Option<PathBuf>,

    /// Render the contrast variation matrices.
    #[arg(short = 'v', long)]
    pub variations: bool,
}
