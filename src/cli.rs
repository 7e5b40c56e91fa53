//! Command-line interface definitions for Recon Report.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The output directory can also be provided through an environment variable.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the Recon Report application.
///
/// # Examples
///
/// ```sh
/// # Render results collected for a target
/// recon_report -i ./results.json -t example.com
///
/// # With a custom output directory and config
/// recon_report -i ./results.json -t example.com -o ./out -c ./config.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Result tree JSON written by the collection tasks
    #[arg(short, long)]
    pub input: PathBuf,

    /// Target label shown in the report
    #[arg(short, long)]
    pub target: String,

    /// Directory that receives the JSON dump and the HTML report
    #[arg(short, long, env = "RECON_OUTPUT_DIR", default_value = "reports")]
    pub output_dir: PathBuf,

    /// Optional path to config.yaml file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
