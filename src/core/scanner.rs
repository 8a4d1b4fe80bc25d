use std::{
    collections::BTreeSet,
    path::{Component, Path, PathBuf},
};

use glob::glob;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal file paths.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of resolving structured source entries.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files to process, in the order their entries were given.
    pub sources: Vec<PathBuf>,
    /// Glob entries that matched no file.
    pub unmatched: Vec<String>,
}

/// Resolve source entries against `base_dir`.
///
/// Glob entries expand to the regular files they match, sorted. Literal entries are
/// kept even when the file does not exist so that loading reports it.
/// A path produced by more than one entry is only listed once.
pub fn resolve_sources(base_dir: &Path, entries: &[String]) -> ScanResult {
    let mut result = ScanResult::default();
    let mut seen: BTreeSet<PathBuf> = BTreeSet::new();

    for entry in entries {
        let full = resolve_path(base_dir, entry);

        if !is_glob_pattern(entry) {
            if seen.insert(full.clone()) {
                result.sources.push(full);
            }
            continue;
        }

        let pattern_str = full.to_string_lossy();
        let mut matched: Vec<PathBuf> = match glob(&pattern_str) {
            Ok(paths) => paths
                .filter_map(|path| match path {
                    Ok(path) => Some(path),
                    Err(e) => {
                        tracing::warn!("cannot access path: {}", e);
                        None
                    }
                })
                .filter(|path| path.is_file())
                .collect(),
            Err(e) => {
                tracing::warn!("invalid glob pattern '{}': {}", entry, e);
                Vec::new()
            }
        };
        matched.sort();

        if matched.is_empty() {
            tracing::debug!("no file matches '{}'", entry);
            result.unmatched.push(entry.clone());
        }

        for path in matched {
            if seen.insert(path.clone()) {
                result.sources.push(path);
            }
        }
    }

    result
}

/// Join a relative path onto `base_dir`, leaving absolute paths alone.
///
/// A `base_dir` of `.` leaves the path untouched so reports show it as given.
pub fn resolve_path(base_dir: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let is_cur_dir = base_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        return p.to_path_buf();
    }
    // Strip leading "./" so joins become "<root>/x" instead of "<root>/./x".
    let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
    base_dir.join(rel)
}
