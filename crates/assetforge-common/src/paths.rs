//! Path utilities for matching source images and deriving output paths.
//!
//! Matching follows a `*.png` glob: it is case-sensitive (`logo.PNG` is skipped)
//! and a file named exactly `.png` matches, converting to `.png.jpg`.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Extension of the files that get converted.
pub const SOURCE_EXTENSION: &str = "png";

/// Extension given to converted files.
pub const OUTPUT_EXTENSION: &str = "jpg";

/// Check if a path names a source image.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use assetforge_common::paths::is_source_image;
///
/// assert!(is_source_image(Path::new("hero.png")));
/// assert!(is_source_image(Path::new("/path/to/icon.png")));
/// assert!(!is_source_image(Path::new("hero.PNG")));
/// assert!(!is_source_image(Path::new("hero.jpg")));
/// ```
pub fn is_source_image(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    // `.png` has no extension as far as `Path` is concerned
    name.strip_suffix(SOURCE_EXTENSION)
        .is_some_and(|stem| stem.ends_with('.'))
}

/// Output path for a source image: same directory and stem, `.jpg` extension.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use assetforge_common::paths::output_path_for;
///
/// assert_eq!(
///     output_path_for(Path::new("/assets/images/hero.png")),
///     PathBuf::from("/assets/images/hero.jpg")
/// );
/// ```
#[must_use]
pub fn output_path_for(source: &Path) -> PathBuf {
    source.with_extension(OUTPUT_EXTENSION)
}

/// Bare file name used in report lines, falling back to the whole path.
pub fn display_name(path: &Path) -> Cow<'_, str> {
    match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => path.to_string_lossy(),
    }
}
