//! Assetforge-Common: Shared error types and path utilities.
//!
//! This crate provides common functionality used across assetforge:
//!
//! - **Path Utilities**: Source matching and output path derivation
//! - **Error Handling**: The conversion error taxonomy and result alias
//!
//! # Examples
//!
//! ```
//! use assetforge_common::paths::{is_source_image, output_path_for};
//! use std::path::{Path, PathBuf};
//!
//! assert!(is_source_image(Path::new("logo.png")));
//! assert_eq!(output_path_for(Path::new("logo.png")), PathBuf::from("logo.jpg"));
//! ```

pub mod error;
pub mod paths;

pub use error::{Error, ErrorKind, Result};
