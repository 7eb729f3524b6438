use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_EMOJI_BASE_URL: &str =
    "https://emoji.aranja.com/static/emoji-data/img-apple-160/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid spacing `{name}` = {value} in {config_path}: must be a non-negative number")]
    InvalidSpacing {
        config_path: PathBuf,
        name: &'static str,
        value: f32,
    },
}

/// Gap before a group, in ems of the surrounding text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingConfig {
    /// Between consecutive list items.
    pub small: f32,
    /// Before the first item of a list.
    pub large: f32,
    pub default: f32,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            small: 0.5,
            large: 1.2,
            default: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub spacing: SpacingConfig,
    /// Prefix for emoji image URLs. May also be a local directory; `~` and
    /// environment variables are expanded on load.
    pub emoji_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spacing: SpacingConfig::default(),
            emoji_base_url: DEFAULT_EMOJI_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.validate(config_path)?;

        // Expand shell variables and tilde in a local emoji directory
        if let Some(expanded) = Self::expand(&config.emoji_base_url) {
            config.emoji_base_url = expanded;
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads from `path` when given, else from the default location, falling
    /// back to defaults when the file does not exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let loaded = match path {
            Some(p) => Self::load_from_path(p)?,
            None => Self::load()?,
        };
        Ok(loaded.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-elements");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn validate(&self, config_path: &Path) -> Result<(), ConfigError> {
        let s = &self.spacing;
        for (name, value) in [("small", s.small), ("large", s.large), ("default", s.default)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidSpacing {
                    config_path: config_path.to_path_buf(),
                    name,
                    value,
                });
            }
        }
        Ok(())
    }

    fn expand(value: &str) -> Option<String> {
        shellexpand::full(value).ok().map(|s| s.into_owned())
    }
}
