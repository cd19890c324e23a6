// src/config/loader.rs
//! Layered program configuration loader
//!
//! Built-in defaults, then every configured TOML file that exists, then
//! `TRIGSYNC_*` environment overrides. Nested keys use a double underscore:
//! `TRIGSYNC_DEFAULT_TRIGGER_MODE=rising_edge` sets `default_trigger_mode`.

use crate::config::{constants::{env as env_consts, paths}, ProgramConfig, ValidationError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Path does not exist
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML syntax or type mismatch
    #[error("Configuration parse error: {0}")]
    ParseError(String),

    /// Every violation found by [`ProgramConfig::validate`]
    #[error("Configuration validation errors: {}", format_validation(.0))]
    ValidationError(Vec<ValidationError>),

    /// File could not be read or written
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("\n  {}", e))
        .collect()
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Configuration loader merging defaults, files and environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_paths: Vec<PathBuf>,
    env_prefix: String,
    current_config: ProgramConfig,
}

impl ConfigLoader {
    /// Loader over the standard discovery paths
    pub fn new() -> Self {
        Self::with_paths(Self::discover_config_paths())
    }

    /// Loader over custom paths, later paths taking precedence
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            config_paths: paths,
            env_prefix: env_consts::ENV_PREFIX.to_string(),
            current_config: ProgramConfig::default(),
        }
    }

    /// Use a different environment prefix
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = prefix.to_string();
        self
    }

    /// Files consulted by [`ConfigLoader::load`], lowest precedence first
    pub fn config_paths(&self) -> &[PathBuf] {
        &self.config_paths
    }

    /// Load, merge and validate the program configuration
    pub fn load(&mut self) -> Result<ProgramConfig, ConfigError> {
        let config = self.load_and_merge_configs()?;
        info!(
            cycles = config.cycles,
            channels = config.channels.len(),
            "loaded program configuration"
        );
        self.current_config = config.clone();
        Ok(config)
    }

    /// Last successfully loaded configuration
    pub fn current_config(&self) -> &ProgramConfig {
        &self.current_config
    }

    /// Validate a single file without merging it
    pub fn validate_config_file<P: AsRef<Path>>(&self, path: P) -> Result<ProgramConfig, ConfigError> {
        let value = self.load_config_file(path)?;
        let config: ProgramConfig = value.try_into()?;
        config.validate().map_err(ConfigError::ValidationError)?;
        Ok(config)
    }

    /// Write the current configuration as TOML
    pub fn export_config<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let toml_content = toml::to_string_pretty(&self.current_config)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    fn load_and_merge_configs(&self) -> Result<ProgramConfig, ConfigError> {
        let mut merged = toml::Value::try_from(ProgramConfig::default())
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        for config_path in &self.config_paths {
            match self.load_config_file(config_path) {
                Ok(file_config) => {
                    debug!(path = %config_path.display(), "merging configuration file");
                    merge_toml_values(&mut merged, file_config);
                }
                Err(ConfigError::FileNotFound(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        self.apply_environment_overrides(&mut merged);

        let config: ProgramConfig = merged
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;
        config.validate().map_err(ConfigError::ValidationError)?;
        Ok(config)
    }

    fn load_config_file<P: AsRef<Path>>(&self, path: P) -> Result<toml::Value, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn apply_environment_overrides(&self, config: &mut toml::Value) {
        for (key, value) in std::env::vars() {
            let Some(stripped) = key.strip_prefix(&self.env_prefix) else {
                continue;
            };
            let config_key = stripped.to_lowercase().replace("__", ".");
            debug!(key = %key, config_key = %config_key, "applying environment override");
            set_nested_value(config, &config_key, parse_env_value(&value));
        }
    }

    fn discover_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(paths::SYSTEM_CONFIG_PATH)];

        if let Some(home_dir) = home_dir() {
            paths.push(home_dir.join(paths::USER_CONFIG_DIR).join("program.toml"));
        }

        paths.push(PathBuf::from(paths::DEFAULT_CONFIG_FILE));
        paths.push(PathBuf::from(paths::LOCAL_CONFIG_FILE));
        paths
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn merge_toml_values(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(base_value) => merge_toml_values(base_value, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        // Arrays (the channel list) replace rather than concatenate
        (base_value, overlay_value) => *base_value = overlay_value,
    }
}

fn parse_env_value(value: &str) -> toml::Value {
    if let Ok(int_val) = value.parse::<i64>() {
        toml::Value::Integer(int_val)
    } else if let Ok(float_val) = value.parse::<f64>() {
        toml::Value::Float(float_val)
    } else if let Ok(bool_val) = value.parse::<bool>() {
        toml::Value::Boolean(bool_val)
    } else {
        toml::Value::String(value.to_string())
    }
}

fn set_nested_value(config: &mut toml::Value, path: &str, value: toml::Value) {
    let mut parts = path.split('.').peekable();
    let mut current = config;

    while let Some(part) = parts.next() {
        let toml::Value::Table(table) = current else {
            return;
        };
        if parts.peek().is_none() {
            table.insert(part.to_string(), value);
            return;
        }
        current = table
            .entry(part.to_string())
            .or_insert_with(|| toml::Value::Table(toml::value::Table::new()));
    }
}

fn home_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("USERPROFILE").map(PathBuf::from)
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var_os("HOME").map(PathBuf::from)
    }
}
