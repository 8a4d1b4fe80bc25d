//! Core extraction and comparison engine.
//!
//! ## Pipeline
//!
//! 1. **Load**: read the flat text source and each structured (JSON) source
//! 2. **Extract**: scan text, or every string leaf of a JSON document, with the
//!    [`ReferencePattern`] and key each match through [`KeyMode`]
//! 3. **Compare**: split the keys of two [`Extraction`]s into common,
//!    first-only and second-only
//!
//! Nothing here prints; rendering lives in `cli::report`.

pub mod compare;
pub mod extract;
pub mod normalize;
pub mod pattern;
pub mod scanner;
pub mod source;

pub use compare::{CommonEntry, Comparison, OneSidedEntry, compare};
pub use extract::{ExtractedFile, Extraction, Extractor, FileReference};
pub use normalize::{KeyMode, normalize};
pub use pattern::{
    DEFAULT_EXTENSIONS, PatternError, RawMatch, ReferencePattern, describe_extensions,
};
pub use scanner::{ScanResult, resolve_path, resolve_sources};
pub use source::{
    SourceError, load_structured, load_text, parse_structured, release_structured,
};
