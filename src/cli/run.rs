use anyhow::Result;

use super::{
    args::Command,
    commands::{CommandResult, compare::compare, init::init},
};

/// Dispatch to the command handler.
///
/// # Returns
/// - `Ok(CommandResult)` with the summary to report and the exit behaviour
/// - `Err` if the command cannot run (bad config, unreadable text source, ...)
pub fn run(command: Command) -> Result<CommandResult> {
    match command {
        Command::Compare(cmd) => compare(cmd),
        Command::Init(cmd) => init(cmd),
    }
}
