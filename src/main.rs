//! # Recon Report
//!
//! Renders the result tree of a reconnaissance run into a JSON dump and a
//! navigable HTML report.
//!
//! ## Usage
//!
//! ```sh
//! recon_report -i ./results.json -t example.com -o ./reports
//! ```
//!
//! ## Flow
//!
//! 1. **Load**: Read the configuration and the collected result tree
//! 2. **Output**: Write the JSON dump and the HTML report side by side
//!
//! Output failures are logged and never change the exit status; only an
//! unreadable configuration or result tree does.

use clap::Parser;
use recon_report::{models, outputs, DocumentAssembler, ReportConfig};
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;

use cli::Cli;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("recon_report starting up");

    let args = Cli::parse();
    debug!(input = %args.input.display(), output_dir = %args.output_dir.display(), "Parsed CLI arguments");

    let config = ReportConfig::load(args.config.as_deref())?;
    let tree = Arc::new(models::load_result_tree(&args.input)?);
    info!(sections = tree.len(), target = %args.target, "Loaded result tree");

    let json_path = config.json_path(&args.output_dir);
    let html_path = config.html_path(&args.output_dir);
    let assembler = DocumentAssembler::new(config.brand.clone());

    // ---- Write both artifacts; each writer logs its own outcome ----
    let dump_tree = Arc::clone(&tree);
    let dump = tokio::task::spawn_blocking(move || outputs::write_dump(&dump_tree, &json_path));

    let report_tree = Arc::clone(&tree);
    let target = args.target.clone();
    let report = tokio::task::spawn_blocking(move || {
        outputs::write_html_report(&assembler, &target, &report_tree, &html_path)
    });

    let (dump, report) = tokio::join!(dump, report);
    dump?;
    report?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
