use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::error::{DataCompareError, Result};

/// Config files searched when `--config` is not given
pub const DEFAULT_CONFIG_PATHS: &[&str] = &["data_compare.toml", ".data_compare.toml", "config/default.toml"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub targets: TargetsConfig,
    pub reader: ReaderConfig,
    pub output: OutputConfig,
}

/// What to do when a file in the target folder cannot be read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TargetErrorPolicy {
    /// Log a warning and continue with the next file
    #[default]
    Skip,
    /// Stop the whole run
    Abort,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetsConfig {
    pub on_error: TargetErrorPolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// 1-based column to read from CSV and spreadsheet files; all cells when unset
    pub column: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write the JSON run summary
    pub summary: Option<PathBuf>,
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load an explicit config file, or the first readable default one.
    ///
    /// An explicit path must load; default locations only warn on failure.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(DataCompareError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            let config = Self::from_file(path)?;
            info!("Loaded config from {}", path.display());
            return Ok(config);
        }

        for path in DEFAULT_CONFIG_PATHS {
            let path = Path::new(path);
            if !path.is_file() {
                continue;
            }
            match Self::from_file(path) {
                Ok(config) => {
                    info!("Loaded config from {}", path.display());
                    return Ok(config);
                }
                Err(e) => {
                    warn!("Failed to load config from {}: {}", path.display(), e);
                }
            }
        }

        Ok(Config::default())
    }

    fn validate(&self) -> Result<()> {
        if self.reader.column == Some(0) {
            return Err(DataCompareError::Config(
                "reader.column is 1-based and must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
