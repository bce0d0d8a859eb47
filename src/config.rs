//! playqr runtime configuration handling

use crate::error::{Error, Result};
use crate::link::DEFAULT_FILENAME;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Base URL of the instant play page on the local venue network.
pub const DEFAULT_BASE_URL: &str = "http://192.168.1.100:8000/instant-play.html";

/// Default edge length of the printed code, in pixels.
pub const DEFAULT_SIZE: u32 = 400;

/// Top-level configuration structure loaded from disk or environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayqrConfig {
    /// Defaults for the generated code
    pub generator: GeneratorOptions,
    /// Logging configuration
    pub logging: LoggingOptions,
}

impl PlayqrConfig {
    /// Load configuration from an explicit path or fall back to discovered defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit_path {
            Self::from_file(path)?
        } else if let Some(path) = Self::discover_file()? {
            tracing::info!("Using configuration file: {}", path.display());
            Self::from_file(&path)?
        } else {
            tracing::debug!("No playqr.toml / playqr.yaml found, using defaults");
            Self::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Attempt to locate a configuration file in common locations.
    fn discover_file() -> Result<Option<PathBuf>> {
        let cwd =
            env::current_dir().map_err(|e| Error::Config(format!("Failed to read cwd: {e}")))?;
        for candidate in ["playqr.toml", "playqr.yaml", "playqr.yml"] {
            let path = cwd.join(candidate);
            if path.exists() {
                return Ok(Some(path));
            }
        }

        if let Some(xdg_config) = env::var_os("XDG_CONFIG_HOME") {
            let base = PathBuf::from(xdg_config).join("playqr");
            for candidate in ["config.toml", "config.yaml"] {
                let path = base.join(candidate);
                if path.exists() {
                    return Ok(Some(path));
                }
            }
        }

        Ok(None)
    }

    /// Read configuration from a concrete file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;

        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
            .as_str()
        {
            "toml" => toml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse TOML {}: {e}", path.display()))
            }),
            "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse YAML {}: {e}", path.display()))
            }),
            other => Err(Error::Config(format!(
                "Unsupported config format '{}', expected toml/yaml",
                other
            ))),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply `PLAYQR_*` overrides read through `var`; malformed values are errors.
    fn apply_overrides<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.generator.apply_overrides(&var)?;
        self.logging.apply_overrides(&var)
    }

    fn validate(&self) -> Result<()> {
        if self.generator.size == 0 {
            return Err(Error::Config("generator.size must be greater than zero".into()));
        }
        if self.generator.base_url.is_empty() {
            return Err(Error::Config("generator.base_url must not be empty".into()));
        }
        Ok(())
    }
}

/// Defaults applied before command-line overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Instant play page the codes link to
    pub base_url: String,
    /// Edge length of the written image in pixels
    pub size: u32,
    /// Filename used when no table identifier is given
    pub default_filename: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            size: DEFAULT_SIZE,
            default_filename: DEFAULT_FILENAME.to_string(),
        }
    }
}

impl GeneratorOptions {
    fn apply_overrides<F>(&mut self, var: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("PLAYQR_BASE_URL") {
            self.base_url = url;
        }
        if let Some(size) = var("PLAYQR_SIZE") {
            self.size = size
                .trim()
                .parse::<u32>()
                .map_err(|e| Error::Config(format!("Invalid PLAYQR_SIZE '{size}': {e}")))?;
        }
        if let Some(name) = var("PLAYQR_DEFAULT_FILENAME") {
            self.default_filename = name;
        }
        Ok(())
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Default log level (overridable via `PLAYQR_LOG_LEVEL`)
    pub level: String,
    /// Optional log file path for teeing structured logs
    pub file: Option<PathBuf>,
    /// ANSI colors in stderr logging; unset means "only when stderr is a terminal"
    pub color: Option<bool>,
    /// Optional log rotation strategy applied to `file`
    pub rotation: Option<LogRotation>,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            color: None,
            rotation: None,
        }
    }
}

impl LoggingOptions {
    fn apply_overrides<F>(&mut self, var: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = var("PLAYQR_LOG_LEVEL") {
            self.level = level;
        }
        if let Some(file) = var("PLAYQR_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }
        if let Some(color) = var("PLAYQR_LOG_COLOR") {
            self.color = match color.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => Some(false),
                "1" | "true" | "on" => Some(true),
                "auto" => None,
                _ => {
                    return Err(Error::Config(format!(
                        "Invalid PLAYQR_LOG_COLOR '{color}', expected on/off/auto"
                    )));
                }
            };
        }
        if let Some(rotation) = var("PLAYQR_LOG_ROTATION") {
            let parsed = LogRotation::parse(&rotation).ok_or_else(|| {
                Error::Config(format!(
                    "Invalid PLAYQR_LOG_ROTATION '{rotation}', expected hourly or daily"
                ))
            })?;
            self.rotation = Some(parsed);
        }
        Ok(())
    }
}

/// Supported log rotation policies for file sinks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// Rotate log files once per hour
    Hourly,
    /// Rotate log files once per day
    Daily,
}

impl LogRotation {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            _ => None,
        }
    }
}
