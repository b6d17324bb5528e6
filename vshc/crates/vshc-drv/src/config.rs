//! Configuration module for the vshc driver.
//!
//! Settings come from `vshc.toml`. Missing keys take their defaults and
//! command-line flags override whatever the file says.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DriverError, Result};
use crate::output::OutputFormat;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "vshc.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Lexing options.
    #[serde(default)]
    pub lex: LexConfig,

    /// Output options.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Lexing options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexConfig {
    /// Include `Comment` tokens in printed output.
    #[serde(default = "default_true")]
    pub emit_comments: bool,

    /// Worker threads for multi-file runs; 0 means one per CPU.
    #[serde(default)]
    pub jobs: usize,
}

/// Output options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Token listing format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Colored diagnostics.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LexConfig {
    fn default() -> Self {
        Self {
            emit_comments: true,
            jobs: 0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

/// Resolves a requested worker count; 0 selects one worker per CPU.
pub fn worker_count(jobs: usize) -> usize {
    if jobs == 0 {
        num_cpus::get()
    } else {
        jobs
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/vshc/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| {
            DriverError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("vshc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("vshc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
