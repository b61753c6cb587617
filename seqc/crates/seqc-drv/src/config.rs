//! Configuration for the seqc driver.
//!
//! Settings come from a `seqc.toml` file. Command-line flags override them.
//! A file given explicitly whose name ends in `.json` is read as JSON.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use seqc_lex::RenderFormat;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeqcError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "seqc.toml";

/// Input file used when none is given on the command line.
pub const DEFAULT_INPUT: &str = "input1.hl";

/// Driver configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Source file scanned when no INPUT argument is given.
    #[serde(default = "default_input")]
    pub default_input: PathBuf,

    /// Token stream destination. `None` means stdout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Token stream format.
    #[serde(default)]
    pub format: RenderFormat,

    /// Debug-level logging.
    #[serde(default)]
    pub verbose: bool,

    /// ANSI colours in log output.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_input: default_input(),
            output: None,
            format: RenderFormat::default(),
            verbose: false,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/seqc/`
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
            return Err(SeqcError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|source| SeqcError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            return Ok(serde_json::from_str(&content)?);
        }

        toml::from_str(&content)
            .map_err(|e| SeqcError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Save configuration as TOML to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SeqcError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SeqcError::Config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content).map_err(|source| SeqcError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("seqc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("seqc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
