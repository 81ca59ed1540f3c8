//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use folio_core::Theme;

/// A personal portfolio that lives in your terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start in this theme, overriding the config file.
    #[arg(long, value_name = "dark|light", value_parser = parse_theme)]
    pub theme: Option<Theme>,

    /// Disable the particle background and pointer trail.
    #[arg(long)]
    pub no_effects: bool,

    /// Write the effective configuration to the config file and exit.
    #[arg(long)]
    pub write_config: bool,

    /// Append logs to this file instead of the default data directory.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    s.parse()
}
