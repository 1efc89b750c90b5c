mod types;

pub use types::*;

use anyhow::{Context, Result};
use assetforge_common::Error;
use std::path::{Path, PathBuf};

/// Path segments below the install root where web assets live.
const ASSET_SEGMENTS: [&str; 3] = ["src", "assets", "images"];

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./assetforge.toml", "~/.config/assetforge/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Asset directory derived from the install location of the running binary.
///
/// The anchor is the executable itself, not the working directory, so the
/// result is `<exe>/../../src/assets/images`.
pub fn default_image_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    Ok(image_dir_from_anchor(&exe))
}

/// `anchor`'s grandparent joined with `src/assets/images`.
pub fn image_dir_from_anchor(anchor: &Path) -> PathBuf {
    let root = anchor
        .parent()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new(""));
    ASSET_SEGMENTS
        .iter()
        .fold(root.to_path_buf(), |dir, segment| dir.join(segment))
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if let Some(dir) = &config.converter.image_dir {
        if dir.as_os_str().is_empty() {
            return Err(Error::config("converter.image_dir cannot be empty").into());
        }
        if dir.exists() && !dir.is_dir() {
            return Err(Error::config(format!(
                "converter.image_dir is not a directory: {:?}",
                dir
            ))
            .into());
        }
    }

    Ok(())
}
