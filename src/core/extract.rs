//! Reference extraction from flat text and from JSON documents.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use super::{normalize::KeyMode, pattern::ReferencePattern};

/// A matched file reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReference {
    /// The token exactly as found, including any path prefix.
    pub original: String,
    /// Comparison key derived from `original`.
    pub key: String,
    /// Lower-cased extension, always a member of the pattern's extension set.
    pub extension: String,
}

/// Everything recorded for one comparison key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    /// The most recently encountered original spelling.
    pub original: String,
    pub extension: String,
    /// Every original spelling that produced this key.
    pub variants: BTreeSet<String>,
}

impl ExtractedFile {
    /// Spellings other than the representative one.
    pub fn other_variants(&self) -> impl Iterator<Item = &str> {
        self.variants
            .iter()
            .map(String::as_str)
            .filter(move |v| *v != self.original)
    }
}

/// References found in one source, keyed and ordered by comparison key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    entries: BTreeMap<String, ExtractedFile>,
}

impl Extraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reference. A later original replaces the earlier representative
    /// for the same key; all spellings stay in `variants`.
    pub fn insert(&mut self, reference: FileReference) {
        let FileReference {
            original,
            key,
            extension,
        } = reference;

        let entry = self.entries.entry(key).or_insert_with(|| ExtractedFile {
            original: original.clone(),
            extension: extension.clone(),
            variants: BTreeSet::new(),
        });
        entry.variants.insert(original.clone());
        entry.original = original;
        entry.extension = extension;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&ExtractedFile> {
        self.entries.get(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtractedFile)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries with the given (lower-cased) extension, in key order.
    pub fn with_extension<'a>(
        &'a self,
        extension: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a ExtractedFile)> + 'a {
        self.iter().filter(move |(_, f)| f.extension == extension)
    }

    /// Number of keys that were reached through more than one spelling.
    pub fn collision_count(&self) -> usize {
        self.entries
            .values()
            .filter(|f| f.variants.len() > 1)
            .count()
    }
}

impl FromIterator<FileReference> for Extraction {
    fn from_iter<I: IntoIterator<Item = FileReference>>(iter: I) -> Self {
        let mut extraction = Extraction::new();
        for reference in iter {
            extraction.insert(reference);
        }
        extraction
    }
}

/// Scans text and JSON values for file references.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'p> {
    pattern: &'p ReferencePattern,
    mode: KeyMode,
}

impl<'p> Extractor<'p> {
    pub fn new(pattern: &'p ReferencePattern, mode: KeyMode) -> Self {
        Self { pattern, mode }
    }

    /// Every reference in `text`, in order of appearance.
    pub fn references<'t>(&'t self, text: &'t str) -> impl Iterator<Item = FileReference> + 't {
        self.pattern.find_iter(text).map(move |m| FileReference {
            original: m.text.to_string(),
            key: self.mode.key(m.text),
            extension: m.extension.to_string(),
        })
    }

    /// Extract from a flat text document.
    pub fn extract_text(&self, text: &str) -> Extraction {
        let mut extraction = Extraction::new();
        self.scan_into(text, &mut extraction);
        tracing::debug!(
            references = extraction.len(),
            collisions = extraction.collision_count(),
            "extracted references from text"
        );
        extraction
    }

    /// Extract from every string leaf of a JSON document.
    ///
    /// Object values and array elements are visited depth-first in document
    /// order. Object keys, numbers, booleans and null are ignored. The walk
    /// uses an explicit stack so nesting depth is bounded only by memory.
    pub fn extract_value(&self, value: &Value) -> Extraction {
        let mut extraction = Extraction::new();
        let mut stack: Vec<&Value> = vec![value];
        let mut leaves = 0usize;

        while let Some(node) = stack.pop() {
            match node {
                Value::Object(map) => stack.extend(map.values().rev()),
                Value::Array(items) => stack.extend(items.iter().rev()),
                Value::String(s) => {
                    leaves += 1;
                    self.scan_into(s, &mut extraction);
                }
                Value::Null | Value::Bool(_) | Value::Number(_) => {}
            }
        }

        tracing::debug!(
            string_leaves = leaves,
            references = extraction.len(),
            collisions = extraction.collision_count(),
            "extracted references from document"
        );
        extraction
    }

    fn scan_into(&self, text: &str, extraction: &mut Extraction) {
        for reference in self.references(text) {
            extraction.insert(reference);
        }
    }
}
