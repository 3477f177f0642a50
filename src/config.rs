//! Simulator configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main simulator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated delay bounds
    pub delays: DelayConfig,

    /// Channel capacities
    pub channels: ChannelConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .mentorsim.yml
        let local_config = PathBuf::from(".mentorsim.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/mentorsim/mentorsim.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("mentorsim").join("mentorsim.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!(
                            "Failed to load config from {}: {}",
                            user_config.display(),
                            e
                        );
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Simulated delay bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayConfig {
    /// Upper bound on a student's programming time, in microseconds
    #[serde(rename = "think-max-us")]
    pub think_max_us: u64,

    /// Duration of one tutoring session, in microseconds
    #[serde(rename = "session-us")]
    pub session_us: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            think_max_us: 2000,
            session_us: 200,
        }
    }
}

/// Channel capacities
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Buffer size of the coordinator's arrival inbox
    #[serde(rename = "coordinator-inbox")]
    pub coordinator_inbox: usize,

    /// Buffer size of each student's private inbox
    #[serde(rename = "student-inbox")]
    pub student_inbox: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            coordinator_inbox: 1024,
            student_inbox: 1,
        }
    }
}
