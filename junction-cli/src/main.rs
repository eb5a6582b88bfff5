//! Entry point for the `junction` binary.
//!
//! Initialises logging, parses arguments with clap, runs the requested
//! queries and writes the summary to stdout. Failures are logged with their
//! stable error code and mapped to a non-zero exit status.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use junction_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError, LoggingState},
};
use tracing::{debug, error, field};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    match logging::init_logging() {
        Ok(LoggingState::Installed(format)) => debug!(?format, "logging installed"),
        Ok(LoggingState::AlreadyConfigured { reason }) => {
            debug!(%reason, "keeping existing subscriber");
        }
        Err(err) => {
            report_logging_init_error(&err);
            return ExitCode::FAILURE;
        }
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .and_then(CliError::code)
            .map(field::display);

        error!(error = %format!("{err:#}"), code, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is unavailable until logging initialises"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
