//! sokoban - Sokoban level file viewer
//!
//! Parses a level file and prints the levels it contains.

mod args;
mod output;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use sokoban_config::{ViewerConfig, DEFAULT_CONFIG_FILE};
use sokoban_levels::LevelLoader;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing before the options file is read so its warnings show.
    // RUST_LOG takes precedence over the configured level.
    let env_filter = EnvFilter::try_from_default_env().ok();
    let filter_from_env = env_filter.is_some();
    let (filter, filter_handle) = reload::Layer::new(
        env_filter.unwrap_or_else(|| EnvFilter::new(ViewerConfig::default().log_level)),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.resolve_config(Path::new(DEFAULT_CONFIG_FILE))?;
    if !filter_from_env {
        filter_handle
            .reload(EnvFilter::new(&config.log_level))
            .context("failed to apply configured log level")?;
    }

    config.display();

    info!("Reading levels from {}", cli.file.display());
    let levels = LevelLoader::load_file(&cli.file)
        .with_context(|| format!("failed to parse {}", cli.file.display()))?;

    let selected = output::select_levels(&levels, config.level)?;
    let rendered = output::render(&selected, config.format, config.pretty_json)?;
    println!("{}", rendered);

    Ok(())
}
