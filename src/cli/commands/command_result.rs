use std::path::PathBuf;

use crate::{
    cli::exit_status::ExitStatus,
    core::{Comparison, Extraction, SourceError},
};

#[derive(Debug)]
pub enum CommandSummary {
    Compare(CompareSummary),
    Init(InitSummary),
}

/// Everything the reporter needs for one `compare` run.
#[derive(Debug)]
pub struct CompareSummary {
    /// Configured extensions, lower-cased, in report order.
    pub extensions: Vec<String>,
    /// Display label of the text source.
    pub text_label: String,
    pub text: Extraction,
    /// One entry per structured source, in processing order.
    pub sources: Vec<SourceOutcome>,
    /// Structured source globs that matched nothing.
    pub unmatched: Vec<String>,
}

/// Outcome for one structured source. A failure here does not affect the others.
#[derive(Debug)]
pub struct SourceOutcome {
    pub label: String,
    pub result: Result<SourceReport, SourceError>,
}

#[derive(Debug)]
pub struct SourceReport {
    pub extraction: Extraction,
    /// The structured source is the first side, the text source the second.
    pub comparison: Comparison,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running depdiff commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Structured sources that could not be loaded or parsed.
    pub failed_sources: usize,
    /// Keys present on one side only, summed over all comparisons.
    pub difference_count: usize,
    /// If true, differences alone make the run fail.
    pub fail_on_diff: bool,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.failed_sources > 0 || (self.fail_on_diff && self.difference_count > 0) {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl CompareSummary {
    pub fn failed_count(&self) -> usize {
        self.sources.iter().filter(|s| s.result.is_err()).count()
    }

    pub fn difference_count(&self) -> usize {
        self.sources
            .iter()
            .filter_map(|s| s.result.as_ref().ok())
            .map(|r| r.comparison.difference_count())
            .sum()
    }
}
