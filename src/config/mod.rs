use crate::error::{EntityError, Result};
use crate::models::Change;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub entity: EntityConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EntityConfig {
    /// Which changes refresh an entity's last-modified time.
    #[serde(default)]
    pub touch_on: TouchPolicy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TouchPolicy {
    /// Any effective change to id, title or slug.
    #[default]
    EveryMutation,
    /// Only the first id assignment.
    IdOnly,
}

impl TouchPolicy {
    pub fn covers(self, change: Change) -> bool {
        match self {
            Self::EveryMutation => true,
            Self::IdOnly => change == Change::Id,
        }
    }
}

impl FromStr for TouchPolicy {
    type Err = EntityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "every-mutation" => Ok(Self::EveryMutation),
            "id-only" => Ok(Self::IdOnly),
            other => Err(EntityError::config(format!(
                "unknown touch policy '{}', expected 'every-mutation' or 'id-only'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for TouchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EveryMutation => write!(f, "every-mutation"),
            Self::IdOnly => write!(f, "id-only"),
        }
    }
}

fn default_log_filter() -> String {
    "pebble_entity=info".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| EntityError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.logging.filter.trim().is_empty() {
            return Err(EntityError::config("logging.filter must not be empty"));
        }
        Ok(())
    }
}
