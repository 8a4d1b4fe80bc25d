use std::path::Path;

use anyhow::{Context, Result};

use super::{
    CommandResult, CommandSummary, CompareSummary, SourceOutcome, SourceReport,
    context::CompareContext,
};
use crate::{
    cli::args::CompareCommand,
    core::{
        Extraction, Extractor, compare as compare_extractions, load_structured, load_text,
        release_structured, resolve_path, resolve_sources,
    },
};

/// Compare the text source against every structured source.
///
/// The text source is shared by every comparison, so failing to read it is
/// fatal. A structured source that is missing or malformed is recorded in its
/// own [`SourceOutcome`] and the remaining sources are still processed.
pub fn compare(cmd: CompareCommand) -> Result<CommandResult> {
    let ctx = CompareContext::new(&cmd.args)?;
    let config = &ctx.config;

    let pattern = config.reference_pattern()?;
    let extractor = Extractor::new(&pattern, config.key_mode);

    let text_path = resolve_path(ctx.root(), &config.text_source);
    let text_content = load_text(&text_path).context("Failed to load the text source")?;
    let text = extractor.extract_text(&text_content);

    let scan = resolve_sources(ctx.root(), &config.structured_sources);
    let sources: Vec<SourceOutcome> = scan
        .sources
        .iter()
        .map(|path| SourceOutcome {
            label: display_label(ctx.root(), path),
            result: compare_source(&extractor, path, &text),
        })
        .collect();

    let summary = CompareSummary {
        extensions: pattern.extensions().to_vec(),
        text_label: display_label(ctx.root(), &text_path),
        text,
        sources,
        unmatched: scan.unmatched,
    };

    Ok(CommandResult {
        failed_sources: summary.failed_count(),
        difference_count: summary.difference_count(),
        fail_on_diff: config.fail_on_diff,
        summary: CommandSummary::Compare(summary),
    })
}

fn compare_source(
    extractor: &Extractor<'_>,
    path: &Path,
    text: &Extraction,
) -> Result<SourceReport, crate::core::SourceError> {
    let document = load_structured(path).inspect_err(|e| {
        tracing::debug!("skipping {}: {}", path.display(), e);
    })?;
    let extraction = extractor.extract_value(&document);
    release_structured(document);
    let comparison = compare_extractions(&extraction, text);
    Ok(SourceReport {
        extraction,
        comparison,
    })
}

/// Path as shown in reports: relative to `root` when it lies inside it.
fn display_label(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
