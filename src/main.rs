use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use depdiff::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    depdiff::logging::init(args.verbose());

    match depdiff::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{} {:#}", "error:".bold().red(), err);
            ExitStatus::Error.into()
        }
    }
}
