//! File-reference pattern.
//!
//! A reference is a token bounded by word boundaries, made of word characters,
//! `.`, `/`, `\` or `-`, ending in `.<ext>` where `<ext>` is one of the
//! configured extensions. Matching is case-insensitive.

use regex::Regex;
use thiserror::Error;

/// Extensions recognised when no configuration overrides them.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ksh", "btq"];

/// The compiled reference pattern together with the extension set it was built from.
///
/// Built once at startup and passed explicitly to every [`Extractor`](super::Extractor).
#[derive(Debug, Clone)]
pub struct ReferencePattern {
    regex: Regex,
    extensions: Vec<String>,
}

/// Failure to build a [`ReferencePattern`].
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("at least one file extension is required")]
    NoExtensions,
    #[error("invalid reference pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// A single match of the reference pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch<'a> {
    pub text: &'a str,
    /// The configured extension the token ends in, as the regex matched it
    /// case-insensitively (`.KSH` and `.kſh` both give `ksh`).
    pub extension: &'a str,
}

impl ReferencePattern {
    /// Compile the pattern for the given extensions.
    ///
    /// Extensions are lower-cased and deduplicated, keeping their first position.
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Result<Self, PatternError> {
        let mut normalized: Vec<String> = Vec::with_capacity(extensions.len());
        for ext in extensions {
            let ext = ext.as_ref().to_lowercase();
            if !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }

        if normalized.is_empty() {
            return Err(PatternError::NoExtensions);
        }

        // One capture group per extension, in `normalized` order.
        let alternation = normalized
            .iter()
            .map(|ext| format!("({})", regex::escape(ext)))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&format!(r"(?i)\b[\w./\\-]+\.(?:{})\b", alternation))?;

        Ok(Self {
            regex,
            extensions: normalized,
        })
    }

    /// Lower-cased extensions, in configuration order.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Iterate over every non-overlapping match in `text`.
    pub fn find_iter<'t>(&'t self, text: &'t str) -> impl Iterator<Item = RawMatch<'t>> + 't {
        self.regex.captures_iter(text).filter_map(move |caps| {
            let token = caps.get(0)?;
            let group = (1..caps.len()).find(|&i| caps.get(i).is_some())?;
            Some(RawMatch {
                text: token.as_str(),
                extension: self.extensions.get(group - 1)?,
            })
        })
    }
}

/// `.a`, `.a or .b`, `.a, .b or .c`.
pub fn describe_extensions<S: AsRef<str>>(extensions: &[S]) -> String {
    let dotted: Vec<String> = extensions
        .iter()
        .map(|e| format!(".{}", e.as_ref()))
        .collect();
    match dotted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

impl Default for ReferencePattern {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS).expect("default reference pattern must compile")
    }
}
