//! Source image discovery.
//!
//! Only the top level of the image directory is considered. Sub-directories are
//! never descended into.

use assetforge_common::paths::is_source_image;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Lazily yield the PNG files directly inside `dir`, in filesystem order.
pub fn source_images(dir: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry in {:?}: {}", e.path(), e);
                None
            }
        })
        .filter(|entry| {
            let keep = entry.file_type().is_file() && is_source_image(entry.path());
            if !keep {
                debug!("Ignoring {:?}", entry.path());
            }
            keep
        })
        .map(|entry| entry.into_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = source_images(dir)
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_finds_only_png_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.png"), b"").unwrap();
        fs::write(dir.path().join("b.png"), b"").unwrap();
        fs::write(dir.path().join("c.jpg"), b"").unwrap();
        fs::write(dir.path().join("d.PNG"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();

        assert_eq!(names(dir.path()), vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_does_not_recurse() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("icons");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("deep.png"), b"").unwrap();
        fs::write(dir.path().join("top.png"), b"").unwrap();

        assert_eq!(names(dir.path()), vec!["top.png"]);
    }

    #[test]
    fn test_skips_directories_named_like_png() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("folder.png")).unwrap();

        assert!(names(dir.path()).is_empty());
    }

    #[test]
    fn test_bare_dot_png_is_found() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".png"), b"").unwrap();

        assert_eq!(names(dir.path()), vec![".png"]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(source_images(dir.path()).count(), 0);
    }

    #[test]
    fn test_yields_full_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.png"), b"").unwrap();

        let paths: Vec<PathBuf> = source_images(dir.path()).collect();
        assert_eq!(paths, vec![dir.path().join("a.png")]);
    }
}
