//! depdiff - script dependency comparison
//!
//! depdiff finds `.ksh` and `.btq` file references in a flat parameter file
//! and in JSON job definitions, then reports which references both sides
//! share and which appear on one side only.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Reference pattern, extraction, key normalization and comparison
//! - `logging`: Diagnostic tracing setup

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
