//! Comparison keys for matched file references.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a matched reference is turned into its comparison key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyMode {
    /// Unify separators, collapse the path, then lower-case.
    #[default]
    Normalize,
    /// Lower-case only. `Scripts\a.ksh` and `scripts/a.ksh` stay distinct.
    CaseFold,
}

impl KeyMode {
    pub fn key(self, original: &str) -> String {
        match self {
            KeyMode::Normalize => normalize(original),
            KeyMode::CaseFold => original.to_lowercase(),
        }
    }
}

/// Canonical comparison key for a matched reference.
///
/// Backslashes become forward slashes, the path is collapsed lexically
/// (`.`, `..` and repeated separators) and the result is lower-cased.
/// No filesystem access is involved.
///
/// ```
/// use depdiff::core::normalize;
///
/// assert_eq!(normalize(r"Scripts\Build.BTQ"), "scripts/build.btq");
/// assert_eq!(normalize("run/./old/../job.ksh"), "run/job.ksh");
/// ```
pub fn normalize(original: &str) -> String {
    let unified = original.replace('\\', "/");
    collapse_path(&unified).to_lowercase()
}

fn collapse_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                // `..` above the root stays at the root
                _ if rooted => {}
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}
