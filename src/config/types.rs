use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub converter: ConverterConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConverterConfig {
    /// Directory holding the PNG assets (default: `<install root>/src/assets/images`)
    #[serde(default)]
    pub image_dir: Option<PathBuf>,

    /// Delete each source PNG once its JPEG has been written (default: false)
    #[serde(default)]
    pub remove_source: bool,
}
