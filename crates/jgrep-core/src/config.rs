//! Configuration types for jgrep.
//!
//! [`Config::load`] layers `~/.config/jgrep/config.toml` (if present) on top
//! of the embedded defaults. [`Config::defaults`] returns the same defaults
//! without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::scan::{DEFAULT_KEY_PATTERN, DEFAULT_VALUE_PATTERN};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[scan]
key_pattern   = '[a-zA-Z0-9_\-]*'
value_pattern = '"?[^",]*(?:[",]|$)'

[output]
format = "lines"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/jgrep/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[scan]` section: the free-side patterns used when a side is not
/// constrained by the caller's terms.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_key_pattern")]
    pub key_pattern: String,
    #[serde(default = "default_value_pattern")]
    pub value_pattern: String,
}

fn default_key_pattern() -> String { DEFAULT_KEY_PATTERN.to_string() }
fn default_value_pattern() -> String { DEFAULT_VALUE_PATTERN.to_string() }

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            key_pattern: default_key_pattern(),
            value_pattern: default_value_pattern(),
        }
    }
}

/// `[output]` section, read by the CLI.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How the CLI prints tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line.
    #[default]
    Lines,
    /// A single JSON array.
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/jgrep/config.toml`, layered on top of the
    /// built-in defaults. A missing file is not an error.
    pub fn load() -> anyhow::Result<Self> {
        Self::layered(&config_path(), false)
    }

    /// Same as [`Config::load`] with an explicitly named file, which must
    /// exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        Self::layered(path, true)
    }

    fn layered(path: &Path, required: bool) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(required))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("jgrep")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
