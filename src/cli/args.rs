//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `compare`: Extract script references from the text source and each
//!   structured source, then report what the sides have in common
//! - `init`: Write a default `.depdiffrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::KeyMode;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// The parsed command, or `None` after printing help when none was given.
    pub fn command_or_help(self) -> Option<Command> {
        if self.command.is_none() {
            Self::command().print_help().ok();
        }
        self.command
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Compare(cmd)) => cmd.args.common.verbose,
            Some(Command::Init(cmd)) => cmd.common.verbose,
            None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory that relative source paths and the config search start from
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Flat text source, e.g. a parameter file (overrides config file)
    #[arg(long, value_name = "PATH")]
    pub text: Option<String>,

    /// Structured JSON source; may be a glob and may be repeated (overrides config file)
    #[arg(long, value_name = "PATH")]
    pub structured: Vec<String>,

    /// File extension to look for, without the dot; may be repeated (overrides config file)
    #[arg(long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// How matched file names are keyed for comparison (overrides config file)
    #[arg(long, value_enum)]
    pub key_mode: Option<KeyMode>,

    /// Exit with status 1 when any source has references the other lacks
    #[arg(long)]
    pub fail_on_diff: bool,
}

#[derive(Debug, Args)]
pub struct CompareCommand {
    #[command(flatten)]
    pub args: CompareArgs,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare .ksh/.btq references between the text source and each structured source
    Compare(CompareCommand),
    /// Initialize a new .depdiffrc.json configuration file
    Init(InitCommand),
}
