//! Common error types used throughout assetforge.
//!
//! Per-file failures fall into a closed set of kinds (decode, normalize,
//! encode) so callers can tell them apart without matching on message text.
//! Batch-level failures (the image directory itself) use `Io` and `Config`.

use std::path::{Path, PathBuf};

/// Common error type for assetforge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source file could not be opened or decoded as an image.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The decoded image could not be flattened to opaque RGB.
    #[error("failed to normalize {}: {reason}", path.display())]
    Normalize { path: PathBuf, reason: String },

    /// The output file could not be encoded or written.
    #[error("failed to encode {}: {reason}", path.display())]
    Encode { path: PathBuf, reason: String },

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration was provided.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Discriminant of [`Error`] for callers that only care about the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Decode,
    Normalize,
    Encode,
    Io,
    Config,
}

impl Error {
    /// Create a new Decode error.
    pub fn decode(path: impl AsRef<Path>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a new Normalize error.
    pub fn normalize<S: Into<String>>(path: impl AsRef<Path>, reason: S) -> Self {
        Self::Normalize {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create a new Encode error.
    pub fn encode<S: Into<String>>(path: impl AsRef<Path>, reason: S) -> Self {
        Self::Encode {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create a new Config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Normalize { .. } => ErrorKind::Normalize,
            Self::Encode { .. } => ErrorKind::Encode,
            Self::Io(_) => ErrorKind::Io,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Failure detail without the path prefix, used in per-file report lines.
    pub fn detail(&self) -> String {
        match self {
            Self::Decode { source, .. } => source.to_string(),
            Self::Normalize { reason, .. } | Self::Encode { reason, .. } => reason.clone(),
            Self::Io(e) => e.to_string(),
            Self::Config(msg) => msg.clone(),
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
