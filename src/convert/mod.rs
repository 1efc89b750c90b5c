//! PNG to JPEG batch conversion.
//!
//! Every PNG directly inside the image directory is decoded, flattened onto
//! white and written next to the source as a `.jpg`. Files are handled one at a
//! time and a failure only affects the file it happened on.

pub mod encode;
pub mod flatten;

use std::fmt;
use std::path::{Path, PathBuf};

use assetforge_common::paths::{display_name, output_path_for};
use assetforge_common::{Error, Result};
use image::{DynamicImage, ImageError, ImageReader};
use tracing::{debug, info, warn};

use crate::config::{default_image_dir, ConverterConfig};
use crate::scanner::source_images;

pub use encode::{encode_jpeg, write_jpeg, QUALITY};
pub use flatten::{composite_onto, flatten, BACKGROUND};

/// Result of handling one source file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The JPEG was written.
    Converted { source: PathBuf, output: PathBuf },
    /// Dry run: the JPEG would have been written.
    Planned { source: PathBuf, output: PathBuf },
    /// Decoding, flattening or encoding failed.
    Failed { source: PathBuf, error: Error },
}

impl FileOutcome {
    pub fn source(&self) -> &Path {
        match self {
            Self::Converted { source, .. }
            | Self::Planned { source, .. }
            | Self::Failed { source, .. } => source,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Converted { source, output } => write!(
                f,
                "Converted {} to {}",
                display_name(source),
                display_name(output)
            ),
            Self::Planned { source, output } => write!(
                f,
                "Would convert {} to {}",
                display_name(source),
                display_name(output)
            ),
            Self::Failed { source, error } => write!(
                f,
                "Error converting {}: {}",
                display_name(source),
                error.detail()
            ),
        }
    }
}

/// Every per-file outcome of one batch, in processing order.
#[derive(Debug, Default)]
pub struct ConversionSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl ConversionSummary {
    pub fn converted(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Converted { .. }))
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    pub fn converted_count(&self) -> usize {
        self.converted().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Converts the PNG assets of a single directory.
#[derive(Debug, Clone)]
pub struct Converter {
    image_dir: PathBuf,
    remove_source: bool,
    dry_run: bool,
}

impl Converter {
    /// Create a converter for `image_dir` that keeps its source files.
    pub fn new(image_dir: impl Into<PathBuf>) -> Self {
        Self {
            image_dir: image_dir.into(),
            remove_source: false,
            dry_run: false,
        }
    }

    /// Build a converter from configuration, falling back to the
    /// executable-anchored asset directory when none is set.
    pub fn from_config(config: &ConverterConfig) -> anyhow::Result<Self> {
        let image_dir = match &config.image_dir {
            Some(dir) => dir.clone(),
            None => default_image_dir()?,
        };
        Ok(Self::new(image_dir).with_remove_source(config.remove_source))
    }

    /// Delete each source file after its JPEG has been written.
    pub fn with_remove_source(mut self, remove_source: bool) -> Self {
        self.remove_source = remove_source;
        self
    }

    /// Only report what would be converted.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    /// Convert every source image in the directory.
    pub fn convert_all(&self) -> Result<ConversionSummary> {
        self.convert_all_with_progress(|_| {})
    }

    /// Convert every source image, handing each outcome to `on_outcome` as
    /// soon as it is known.
    ///
    /// Only a directory that cannot be created is an error. Per-file failures
    /// are recorded in the summary and the batch carries on.
    pub fn convert_all_with_progress<F>(&self, mut on_outcome: F) -> Result<ConversionSummary>
    where
        F: FnMut(&FileOutcome),
    {
        std::fs::create_dir_all(&self.image_dir)?;
        info!("Converting PNG images in {:?}", self.image_dir);

        let mut summary = ConversionSummary::default();
        for source in source_images(&self.image_dir) {
            let outcome = self.process(source);
            on_outcome(&outcome);
            summary.outcomes.push(outcome);
        }

        info!(
            "Conversion finished: {} converted, {} failed",
            summary.converted_count(),
            summary.failed_count()
        );
        Ok(summary)
    }

    fn process(&self, source: PathBuf) -> FileOutcome {
        if self.dry_run {
            let output = output_path_for(&source);
            return FileOutcome::Planned { source, output };
        }

        match convert_file(&source) {
            Ok(output) => {
                info!("Converted {:?} to {:?}", source, output);
                if self.remove_source {
                    remove_source(&source);
                }
                FileOutcome::Converted { source, output }
            }
            Err(error) => {
                warn!("Failed to convert {:?}: {}", source, error);
                FileOutcome::Failed { source, error }
            }
        }
    }
}

/// Decode, flatten and re-encode a single PNG, returning the JPEG path.
pub fn convert_file(source: &Path) -> Result<PathBuf> {
    let rgb = {
        let img = decode(source)?;
        flatten(img, source)?
    };

    let output = output_path_for(source);
    write_jpeg(&rgb, &output)?;
    Ok(output)
}

/// Open and decode `path`. The file handle lives only for this call.
fn decode(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| Error::decode(path, ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| Error::decode(path, ImageError::IoError(e)))?;

    let img = reader.decode().map_err(|e| Error::decode(path, e))?;
    debug!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}

fn remove_source(source: &Path) {
    match std::fs::remove_file(source) {
        Ok(()) => debug!("Removed source {:?}", source),
        Err(e) => warn!("Failed to remove source {:?}: {}", source, e),
    }
}
