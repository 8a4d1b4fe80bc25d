//! Command-line layer: argument parsing, command dispatch and reporting.

use anyhow::Result;

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

/// Run the parsed command, print its report and return the exit status.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(command) = args.command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(command)?;
    report::print(&result, verbose);

    Ok(result.exit_status())
}
