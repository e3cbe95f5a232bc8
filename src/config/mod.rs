use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::analysis::returns::{ReturnCalculator, DEFAULT_PRICE_COLUMN, DEFAULT_RETURN_COLUMN};
use crate::templates::emitter::TemplateEmitter;
use crate::templates::DEFAULT_BASE_NAME;

pub const DEFAULT_CONFIG_PATH: &str = "config/toolkit.yaml";
pub const DEFAULT_INPUT_PATH: &str = "daily_bitcoin_ohlc.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnSettings {
    pub input_path: PathBuf,
    pub price_column: String,
    pub return_column: String,
}

impl Default for ReturnSettings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            price_column: DEFAULT_PRICE_COLUMN.to_string(),
            return_column: DEFAULT_RETURN_COLUMN.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    pub default_base_name: String,
    pub output_dir: PathBuf,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            default_base_name: DEFAULT_BASE_NAME.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub returns: ReturnSettings,
    pub templates: TemplateSettings,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn return_calculator(&self) -> ReturnCalculator {
        ReturnCalculator::new(&self.returns.price_column, &self.returns.return_column)
    }

    pub fn template_emitter(&self) -> TemplateEmitter {
        TemplateEmitter::new(&self.templates.output_dir)
    }
}
