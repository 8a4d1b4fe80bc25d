//! Three-way comparison of two extractions over their comparison keys.

use super::extract::Extraction;

/// A key present in both sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonEntry {
    pub key: String,
    /// Original spelling in the first source.
    pub first: String,
    /// Original spelling in the second source.
    pub second: String,
}

/// A key present in exactly one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneSidedEntry {
    pub key: String,
    pub original: String,
}

/// Result of [`compare`]. Every list is sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    pub common: Vec<CommonEntry>,
    pub only_in_first: Vec<OneSidedEntry>,
    pub only_in_second: Vec<OneSidedEntry>,
}

impl Comparison {
    /// Neither source contained any reference.
    pub fn is_empty(&self) -> bool {
        self.common.is_empty() && self.only_in_first.is_empty() && self.only_in_second.is_empty()
    }

    /// Keys that appear on one side only.
    pub fn difference_count(&self) -> usize {
        self.only_in_first.len() + self.only_in_second.len()
    }

    pub fn has_differences(&self) -> bool {
        self.difference_count() > 0
    }
}

/// Split the keys of `first` and `second` into common, first-only and second-only.
pub fn compare(first: &Extraction, second: &Extraction) -> Comparison {
    let mut result = Comparison::default();

    for (key, file) in first.iter() {
        match second.get(key) {
            Some(other) => result.common.push(CommonEntry {
                key: key.to_string(),
                first: file.original.clone(),
                second: other.original.clone(),
            }),
            None => result.only_in_first.push(OneSidedEntry {
                key: key.to_string(),
                original: file.original.clone(),
            }),
        }
    }

    result.only_in_second = second
        .iter()
        .filter(|(key, _)| !first.contains_key(key))
        .map(|(key, file)| OneSidedEntry {
            key: key.to_string(),
            original: file.original.clone(),
        })
        .collect();

    result
}
