use crate::remote::DEFAULT_REMOTE_NAME;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
}

#[derive(Debug, Deserialize)]
pub struct RemoteConfig {
    /// Remote to prefer when a repository has several
    #[serde(default = "default_remote_name")]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserConfig {
    /// Print the URL instead of launching a browser
    #[serde(default)]
    pub print_only: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            name: default_remote_name(),
        }
    }
}

fn default_remote_name() -> String {
    DEFAULT_REMOTE_NAME.to_string()
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("git-browse");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from the default location, or return default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load config from `path`, or return default if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Remote name to prefer, with a CLI value taking precedence
    pub fn remote_name<'a>(&'a self, cli: Option<&'a str>) -> &'a str {
        cli.unwrap_or(&self.remote.name)
    }
}
