use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub commands: CommandConfigs,
}

impl Default for Config {
    fn default() -> Self {
        load_default_config()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub verbose: bool,
}

/// Configuration for individual commands
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CommandConfigs {
    #[serde(default)]
    pub squash: SquashConfig,

    #[serde(default)]
    pub merge: MergeConfig,
}

/// Configuration for the squash command
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SquashConfig {
    /// How many commits `gitx squash` covers when `--number` is not given.
    pub number: Option<u32>,
}

/// Configuration for the merge command
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct MergeConfig {
    /// When set, skips the push question after a merge: `true` pushes
    /// automatically, `false` never pushes. Unset asks the operator.
    pub auto_push: Option<bool>,
}

impl Config {
    /// Load configuration from the standard config paths
    pub fn load() -> Result<Self> {
        // Try loading in this order:
        // 1. .gitx.yaml in current directory (repo-specific)
        // 2. ~/.config/gitx/config.yaml (user-specific)
        // 3. Default configuration

        if let Ok(config) = Self::load_from_path(&PathBuf::from(".gitx.yaml")) {
            return Ok(config);
        }

        if let Some(user_config_path) = Self::user_config_path() {
            if let Ok(config) = Self::load_from_path(&user_config_path) {
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file does not exist: {}", path.display());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Get the user configuration path
    pub fn user_config_path() -> Option<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("gitx").join("config.yaml"))
        } else {
            // Fallback to home directory
            dirs::home_dir()
                .map(|home_dir| home_dir.join(".config").join("gitx").join("config.yaml"))
        }
    }

    /// Create a sample configuration file
    pub fn create_sample_config() -> Result<String> {
        // Start with default config and add sample customizations
        let mut sample = load_default_config();

        sample.behavior.verbose = true;
        sample.commands.squash.number = Some(3);
        sample.commands.merge.auto_push = Some(true);

        serde_yaml::to_string(&sample).context("Failed to serialize sample configuration")
    }
}

/// Load the complete default configuration from embedded YAML
pub fn load_default_config() -> Config {
    // Embed the default configuration at compile time
    const DEFAULT_CONFIG: &str = include_str!("../config/default_config.yaml");

    serde_yaml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded default configuration")
}
