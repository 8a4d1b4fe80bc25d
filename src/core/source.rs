//! Loading source documents from disk.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Failure to load one source. Each source fails independently.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read {}", .path.display())]
    Missing { path: PathBuf, source: io::Error },
    #[error("cannot parse {} as JSON", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl SourceError {
    pub fn path(&self) -> &Path {
        match self {
            SourceError::Missing { path, .. } | SourceError::Malformed { path, .. } => path,
        }
    }

    /// Short label used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::Missing { .. } => "missing source",
            SourceError::Malformed { .. } => "malformed input",
        }
    }
}

/// Read a flat text source in full.
pub fn load_text(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|source| SourceError::Missing {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a structured (JSON) source.
pub fn load_structured(path: &Path) -> Result<Value, SourceError> {
    let content = load_text(path)?;
    parse_structured(path, &content)
}

/// Parse structured content already in memory. `path` is only used for errors.
///
/// Nesting depth is not limited; deep documents grow the stack on the heap.
pub fn parse_structured(path: &Path, content: &str) -> Result<Value, SourceError> {
    let mut json = serde_json::Deserializer::from_str(content);
    json.disable_recursion_limit();
    Value::deserialize(serde_stacker::Deserializer::new(&mut json))
        .and_then(|value| json.end().map(|()| value))
        .map_err(|source| SourceError::Malformed {
            path: path.to_path_buf(),
            source,
        })
}

/// Drop a document without recursing into it.
pub fn release_structured(document: Value) {
    let mut stack = vec![document];
    while let Some(value) = stack.pop() {
        match value {
            Value::Array(items) => stack.extend(items),
            Value::Object(members) => stack.extend(members.into_iter().map(|(_, v)| v)),
            _ => {}
        }
    }
}
