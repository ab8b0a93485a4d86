use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::paginator::DEFAULT_PAGE_NAME;
use crate::utils::expand_tilde;
use crate::{MetaError, MetaResult};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TitleConfig {
    pub default: Option<String>,
    pub separator: String,
    pub max_length: Option<usize>,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            default: None,
            separator: " | ".to_string(),
            max_length: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DescriptionConfig {
    pub max_length: Option<usize>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub page_name: String,
    pub robots: Option<String>,
    pub title: TitleConfig,
    pub description: DescriptionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_name: DEFAULT_PAGE_NAME.to_string(),
            robots: None,
            title: TitleConfig::default(),
            description: DescriptionConfig::default(),
        }
    }
}

impl Config {
    pub fn from_toml(s: &str) -> MetaResult<Self> {
        let config: Config = toml::from_str(s)?;
        if config.page_name.trim().is_empty() {
            return Err(MetaError::Config("page_name must not be empty".to_string()));
        }
        Ok(config)
    }

    pub fn load_from(path: &Path) -> MetaResult<Self> {
        let path = expand_tilde(path.to_path_buf())?;
        debug!(path = %path.display(), "loading config");
        let config_string = fs::read_to_string(&path)?;
        Self::from_toml(&config_string)
    }

    /// Load `config.toml` from the platform config dir, or defaults if absent.
    pub fn load() -> MetaResult<Self> {
        let config_file = Self::default_path()?;
        if !config_file.exists() {
            debug!(path = %config_file.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&config_file)
    }

    pub fn default_path() -> MetaResult<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "metatags", "metatags")
            .ok_or_else(|| MetaError::Config("Could not open config dirs.".to_string()))?;
        Ok(project_dirs.config_dir().join("config.toml"))
    }
}
