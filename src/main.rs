mod cli;

use assetforge::{config, Converter, LineReporter};

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "assetforge=debug,assetforge_common=debug".to_string()
        } else {
            "assetforge=info".to_string()
        }
    });

    // Report lines own stdout
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = config::load_config_or_default(cli.config.as_deref())?;

    // CLI overrides config
    if let Some(dir) = cli.dir {
        config.converter.image_dir = Some(dir);
    }
    if cli.remove_source {
        config.converter.remove_source = true;
    }

    let converter = Converter::from_config(&config.converter)?.with_dry_run(cli.dry_run);

    let mut reporter = LineReporter::stdout();
    converter
        .convert_all_with_progress(|outcome| reporter.report(outcome))
        .with_context(|| {
            format!(
                "Failed to prepare image directory: {}",
                converter.image_dir().display()
            )
        })?;

    Ok(())
}
