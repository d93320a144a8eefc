//! Sokoban Viewer Configuration
//!
//! Loads viewer settings from a plain-text options file:
//!
//! ```text
//! # sokoban.txt
//! loglevel = debug
//! format = json
//! level = 0
//! prettyjson = false
//! ```
//!
//! Blank lines and `#` comments are skipped. Unknown keys are ignored and
//! malformed values keep their defaults.

use sokoban_core::{Result, SokobanError};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Default options file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "sokoban.txt";

/// How parsed levels are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per level
    #[default]
    Summary,
    /// Rust debug representation
    Debug,
    /// JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = SokobanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "summary" => Ok(OutputFormat::Summary),
            "debug" => Ok(OutputFormat::Debug),
            "json" => Ok(OutputFormat::Json),
            other => Err(SokobanError::Config(format!("unknown output format: {}", other))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Summary => "summary",
            OutputFormat::Debug => "debug",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Viewer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Default log filter (from "loglevel" option)
    pub log_level: String,
    /// Output format (from "format" option)
    pub format: OutputFormat,
    /// Only print this level index (from "level" option)
    pub level: Option<usize>,
    /// Pretty-print JSON output (from "prettyjson" option)
    pub pretty_json: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            format: OutputFormat::Summary,
            level: None,
            pretty_json: true,
        }
    }
}

impl ViewerConfig {
    /// Load configuration from an options file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Load configuration, falling back to defaults when the file cannot be read
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(config) => {
                tracing::debug!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", path.display(), e);
                tracing::warn!("Using default configuration");
                Self::default()
            }
        }
    }

    /// Parse options file content
    pub fn parse(content: &str) -> Self {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                config.parse_option(key.trim(), value.trim());
            }
        }

        config
    }

    fn parse_option(&mut self, key: &str, value: &str) {
        match key {
            "loglevel" => self.log_level = value.to_lowercase(),
            "format" => match value.parse() {
                Ok(format) => self.format = format,
                Err(e) => tracing::warn!("Ignoring format = {}: {}", value, e),
            },
            "level" => match value.parse() {
                Ok(index) => self.level = Some(index),
                Err(_) => tracing::warn!("Ignoring level = {}: not a level index", value),
            },
            "prettyjson" => match value.parse() {
                Ok(pretty) => self.pretty_json = pretty,
                Err(_) => tracing::warn!("Ignoring prettyjson = {}: expected true or false", value),
            },
            _ => {
                tracing::warn!("Unknown config option: {} = {}", key, value);
            }
        }
    }

    /// Display configuration summary
    pub fn display(&self) {
        tracing::debug!("Viewer configuration:");
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Format: {}", self.format);
        match self.level {
            Some(index) => tracing::debug!("  Level: {}", index),
            None => tracing::debug!("  Level: all"),
        }
        tracing::debug!("  Pretty JSON: {}", self.pretty_json);
    }
}
