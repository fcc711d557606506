//! Main application configuration
//!
//! Configuration comes from a TOML file or from environment variables, with
//! defaults for anything not set. CLI flags are applied on top in `main`.

use crate::config::lineup::LineupSettings;
use crate::config::roster::RosterSettings;
use crate::error::LineupError;
use crate::formation::Formation;
use crate::types::Attribute;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub roster: RosterSettings,
    pub lineup: LineupSettings,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name used in logs
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "lineup-builder".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(|key| env::var(key).ok())?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; missing keys keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(raw)?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Override settings from variables returned by `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Service settings
        if let Some(name) = lookup("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Some(log_level) = lookup("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Roster settings
        if let Some(url) = lookup("ROSTER_URL") {
            self.roster.url = url;
        }
        if let Some(file) = lookup("ROSTER_FILE") {
            self.roster.file = Some(PathBuf::from(file));
        }

        // Lineup settings
        if let Some(formation) = lookup("TEAM_A_FORMATION") {
            self.lineup.team_a_formation = formation;
        }
        if let Some(formation) = lookup("TEAM_B_FORMATION") {
            self.lineup.team_b_formation = formation;
        }
        if let Some(sort) = lookup("DEFAULT_SORT") {
            self.lineup.default_sort = sort
                .parse::<Attribute>()
                .map_err(|_| anyhow!("Invalid DEFAULT_SORT value: {}", sort))?;
        }

        Ok(())
    }

    /// Formation for team A's new board
    pub fn team_a_formation(&self) -> Formation {
        Formation::resolve(&self.lineup.team_a_formation).formation
    }

    /// Formation for team B's new board
    pub fn team_b_formation(&self) -> Formation {
        Formation::resolve(&self.lineup.team_b_formation).formation
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate roster source
    if config.roster.file.is_none() && config.roster.url.trim().is_empty() {
        return Err(anyhow!("Roster URL cannot be empty when no roster file is set"));
    }

    // Validate formations
    for (team, code) in [
        ("A", &config.lineup.team_a_formation),
        ("B", &config.lineup.team_b_formation),
    ] {
        if Formation::from_code(code).is_none() {
            return Err(LineupError::ConfigurationError {
                message: format!("Unknown formation for team {}: {}", team, code),
            }
            .into());
        }
    }

    Ok(())
}
