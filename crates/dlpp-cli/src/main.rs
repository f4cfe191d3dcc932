mod cli;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::Result;
use clap::Parser;
use dlpolyparse::workflows::parse;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("dlpp v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    match parse::run(&cli.input, &cli.output) {
        Ok(report) => {
            info!(
                "Parsed {} rows across {} columns into '{}'.",
                report.rows,
                report.columns,
                cli.output.display()
            );
            Ok(())
        }
        Err(e) => {
            error!("Parse failed: {}", e);
            Err(e.into())
        }
    }
}
