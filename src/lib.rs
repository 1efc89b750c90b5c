//! Assetforge - PNG to JPEG asset flattening
//!
//! This library crate exposes the converter for the CLI and for integration testing.

pub mod config;
pub mod convert;
pub mod report;
pub mod scanner;

pub use convert::{convert_file, ConversionSummary, Converter, FileOutcome};
pub use report::LineReporter;
