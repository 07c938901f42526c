//! `nstat.toml` configuration.
//!
//! ```toml
//! [output]
//! format = "table"   # or "json"
//! precision = 6
//!
//! [log]
//! level = "warn"
//! ```
//!
//! Every key is optional; missing sections fall back to their defaults.

use clap::ValueEnum;
use derive_getters::Getters;
use serde_derive::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONF_FILE: &str = "nstat.toml";

#[derive(Debug, Error)]
pub enum ConfError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone)]
pub struct OutputConf {
    #[serde(default)]
    pub format: OutputFormat,
    /// Digits after the decimal point for float results in table output
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConf {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: default_precision(),
        }
    }
}

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone)]
pub struct LogConf {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConf {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone, Default, Getters)]
pub struct NstatConf {
    #[serde(default)]
    output: OutputConf,
    #[serde(default)]
    log: LogConf,
}

fn default_precision() -> usize {
    6
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl NstatConf {
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, ConfError> {
        toml::from_str(content).map_err(|source| ConfError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &content)
    }

    /// An explicit path must exist. Without one, `nstat.toml` in `work_dir`
    /// is used when present, defaults otherwise.
    pub fn resolve(explicit: Option<&Path>, work_dir: &Path) -> Result<Self, ConfError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let implicit = work_dir.join(DEFAULT_CONF_FILE);
        if implicit.is_file() {
            Self::load(&implicit)
        } else {
            Ok(Self::default())
        }
    }

    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.output.format = format;
        }
        self
    }
}
