use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "assetforge")]
#[command(
    author,
    version,
    about = "Convert PNG assets to JPEG on a white background"
)]
pub struct Cli {
    /// Directory holding the PNG files (default: <install root>/src/assets/images)
    pub dir: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Delete each PNG after it has been converted
    #[arg(long)]
    pub remove_source: bool,

    /// Show what would be converted without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
