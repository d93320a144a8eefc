//! Command-line arguments and how they combine with the options file

use anyhow::Context;
use clap::Parser;
use sokoban_config::{OutputFormat, ViewerConfig};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "sokoban", version, about = "Parse and inspect Sokoban level files")]
pub struct Cli {
    /// Level file to read
    pub file: PathBuf,

    /// Options file (defaults to ./sokoban.txt)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: summary, debug or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Only print the level at this 0-based index
    #[arg(short, long)]
    pub level: Option<usize>,
}

impl Cli {
    /// Build the effective configuration
    ///
    /// An explicit `--config` file must load. Without one, `default_path` is
    /// read if possible and defaults are used otherwise. Flags given on the
    /// command line win over file values.
    pub fn resolve_config(&self, default_path: &Path) -> anyhow::Result<ViewerConfig> {
        let mut config = match &self.config {
            Some(path) => ViewerConfig::load_from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => ViewerConfig::load_or_default(default_path),
        };

        if let Some(format) = self.format {
            config.format = format;
        }
        if self.level.is_some() {
            config.level = self.level;
        }

        Ok(config)
    }
}
