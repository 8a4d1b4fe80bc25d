//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow depdiff to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, CompareSummary, InitSummary, SourceReport};
use crate::core::{
    CommonEntry, Comparison, ExtractedFile, Extraction, SourceError, describe_extensions,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout, warnings to stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());

    if let CommandSummary::Compare(summary) = &result.summary {
        print_unmatched_to(&summary.unmatched, &mut io::stderr().lock());
    }
}

/// Print a command result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Compare(summary) => report_to(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init_to(summary, writer),
    }
}

/// Render a full `compare` report: the text source's files, then per
/// structured source its files by extension and the comparison, then a summary.
pub fn report_to<W: Write>(summary: &CompareSummary, verbose: bool, writer: &mut W) {
    let described = describe_extensions(&summary.extensions);

    print_found_to(
        &summary.text_label,
        &summary.text,
        &described,
        verbose,
        writer,
    );

    for source in &summary.sources {
        let _ = writeln!(writer);
        let _ = writeln!(writer, "{}", format!("== {} ==", source.label).bold());

        match &source.result {
            Ok(report) => {
                print_source_to(summary, &source.label, report, &described, verbose, writer)
            }
            Err(err) => print_source_error_to(err, writer),
        }
    }

    let _ = writeln!(writer);
    print_summary_to(summary, writer);
}

/// Print a warning for every structured source glob that matched nothing.
pub fn print_unmatched_to<W: Write>(unmatched: &[String], writer: &mut W) {
    for entry in unmatched {
        let _ = writeln!(
            writer,
            "{} no file matches '{}'",
            "warning:".bold().yellow(),
            entry
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

/// `error: <kind>: <message>: <cause>...`, walking the whole cause chain.
fn print_source_error_to<W: Write>(err: &SourceError, writer: &mut W) {
    let mut message = err.to_string();
    let mut cause = std::error::Error::source(err);
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    let _ = writeln!(
        writer,
        "{} {}: {}",
        "error:".bold().red(),
        err.kind(),
        message
    );
}

fn print_source_to<W: Write>(
    summary: &CompareSummary,
    label: &str,
    report: &SourceReport,
    described: &str,
    verbose: bool,
    writer: &mut W,
) {
    let extraction = &report.extraction;
    if extraction.is_empty() {
        let _ = writeln!(writer, "No {} files present in {}", described, label);
    } else {
        let _ = writeln!(writer, "Files found in {}:", label);
        for ext in &summary.extensions {
            let files: Vec<_> = extraction.with_extension(ext).map(|(_, f)| f).collect();
            if files.is_empty() {
                let _ = writeln!(writer, "  .{}: {}", ext, "none".dimmed());
                continue;
            }
            let _ = writeln!(writer, "  .{}:", ext);
            for file in files {
                let _ = writeln!(writer, "    {}", format_file(file, verbose));
            }
        }
    }

    let _ = writeln!(writer);
    print_comparison_to(
        &report.comparison,
        label,
        &summary.text_label,
        described,
        writer,
    );
}

fn print_found_to<W: Write>(
    label: &str,
    extraction: &Extraction,
    described: &str,
    verbose: bool,
    writer: &mut W,
) {
    if extraction.is_empty() {
        let _ = writeln!(writer, "No {} files present in {}", described, label);
        return;
    }

    let _ = writeln!(writer, "Files found in {}:", label);
    for (_, file) in extraction.iter() {
        let _ = writeln!(writer, "  {}", format_file(file, verbose));
    }
}

fn format_file(file: &ExtractedFile, verbose: bool) -> String {
    let others: Vec<&str> = file.other_variants().collect();
    if !verbose || others.is_empty() {
        return file.original.clone();
    }
    format!(
        "{} {}",
        file.original,
        format!("(also: {})", others.join(", ")).dimmed()
    )
}

fn print_comparison_to<W: Write>(
    comparison: &Comparison,
    first_label: &str,
    second_label: &str,
    described: &str,
    writer: &mut W,
) {
    if comparison.is_empty() {
        let _ = writeln!(
            writer,
            "No {} files present in either {} or {}",
            described, first_label, second_label
        );
        return;
    }

    let _ = writeln!(writer, "{}", "--- Comparison Result ---".bold());

    let _ = writeln!(writer);
    if comparison.common.is_empty() {
        let _ = writeln!(writer, "No common dependencies found");
    } else {
        let _ = writeln!(writer, "{}", "Common dependencies:".green());
        print_common_to(&comparison.common, writer);
    }

    if !comparison.only_in_first.is_empty() {
        let _ = writeln!(writer);
        let _ = writeln!(
            writer,
            "{}",
            format!("Dependencies only in {}:", first_label).yellow()
        );
        for entry in &comparison.only_in_first {
            let _ = writeln!(writer, "  {}", entry.original);
        }
    }

    if !comparison.only_in_second.is_empty() {
        let _ = writeln!(writer);
        let _ = writeln!(
            writer,
            "{}",
            format!("Dependencies only in {}:", second_label).yellow()
        );
        for entry in &comparison.only_in_second {
            let _ = writeln!(writer, "  {}", entry.original);
        }
    }
}

/// Both spellings side by side, first column padded to its widest entry.
fn print_common_to<W: Write>(common: &[CommonEntry], writer: &mut W) {
    let width = common
        .iter()
        .map(|e| UnicodeWidthStr::width(e.first.as_str()))
        .max()
        .unwrap_or(0);

    for entry in common {
        let padding = width - UnicodeWidthStr::width(entry.first.as_str());
        let _ = writeln!(
            writer,
            "  {}{:padding$} {} {}",
            entry.first,
            "",
            "|".blue(),
            entry.second,
            padding = padding
        );
    }
}

fn print_summary_to<W: Write>(summary: &CompareSummary, writer: &mut W) {
    let compared = summary.sources.len();
    let failed = summary.failed_count();
    let differences = summary.difference_count();
    let head = format!(
        "Compared {} structured {} against {}",
        compared,
        if compared == 1 { "source" } else { "sources" },
        summary.text_label
    );

    if failed == 0 && differences == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{}: no differences", head).green()
        );
        return;
    }

    let mut parts = Vec::new();
    if differences > 0 {
        parts.push(format!(
            "{} {}",
            differences,
            if differences == 1 {
                "difference"
            } else {
                "differences"
            }
        ));
    }
    if failed > 0 {
        parts.push(format!("{} failed", failed));
    }
    let _ = writeln!(
        writer,
        "{} {}: {}",
        FAILURE_MARK.red(),
        head,
        parts.join(", ")
    );
}

fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}

// ============================================================
// Tests
// ============================================================
