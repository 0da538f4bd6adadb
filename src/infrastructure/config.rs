use crate::domain::error::DetectError;
use crate::domain::model::DetectionMethod;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the detection service; `/detect` and `/health` are appended.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub default_method: DetectionMethod,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    pub http_proxy: Option<String>,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_enable_emoji")]
    pub enable_emoji: bool,
    #[serde(default = "default_animate")]
    pub animate: bool,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Logging {
    /// `tracing` filter directive for the configured level; unknown levels mean warn.
    pub fn filter_directive(&self) -> &'static str {
        match self.level.to_ascii_uppercase().as_str() {
            "DEBUG" => "debug",
            "INFO" => "info",
            "WARN" => "warn",
            "ERROR" => "error",
            _ => "warn",
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: "WARN".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            default_method: DetectionMethod::Both,
            timeout_secs: default_timeout_secs(),
            http_proxy: None,
            theme: default_theme(),
            enable_emoji: true,
            animate: true,
            logging: Logging::default(),
        }
    }
}

// Defaults
fn default_endpoint() -> String {
    "http://127.0.0.1:5001".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_theme() -> String {
    "temp".to_string()
}
fn default_enable_emoji() -> bool {
    true
}
fn default_animate() -> bool {
    true
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

impl Config {
    /// `{endpoint}/{path}` without doubled slashes.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("langid").join("config.toml"))
}

pub fn load_config() -> Result<Config, DetectError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

/// Read a config file; a missing file yields defaults and a malformed one
/// warns and yields defaults.
pub fn load_config_from(path: &Path) -> Result<Config, DetectError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    match toml::from_str::<Config>(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Warning: Failed to parse config file: {}. Using defaults.",
                e
            );
            Ok(Config::default())
        }
    }
}

pub fn generate_config_sample() -> Result<(), DetectError> {
    let path = get_config_path()
        .ok_or_else(|| DetectError::Config("Cannot determine config directory".to_string()))?;
    if write_config_sample(&path)? {
        println!("Generated config file at: {}", path.display());
    } else {
        eprintln!("Config file already exists at: {}", path.display());
    }
    Ok(())
}

/// Write the default config to `path`. Returns `false` if the file already exists.
pub fn write_config_sample(path: &Path) -> Result<bool, DetectError> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let sample = Config::default();
    let toml_content = toml::to_string_pretty(&sample)
        .map_err(|e| DetectError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, toml_content)
        .map_err(|e| DetectError::Config(format!("Failed to write config file: {}", e)))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_joins_cleanly() {
        let mut config = Config::default();
        assert_eq!(config.url_for("/detect"), "http://127.0.0.1:5001/detect");

        config.endpoint = "https://lang.example.com/api/".to_string();
        assert_eq!(config.url_for("health"), "https://lang.example.com/api/health");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config: Config = toml::from_str("default_method = \"traditional\"").unwrap();
        assert_eq!(config.default_method, DetectionMethod::Traditional);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.animate);
        assert_eq!(config.logging.level, "WARN");
    }
}
