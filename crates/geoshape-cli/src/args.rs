//! Command-line argument definitions for the geoshape CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input path, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the geoshape document validator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input shape document
    #[arg(help = "Path to the input TOML shape document")]
    pub input: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
