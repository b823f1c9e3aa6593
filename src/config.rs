use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::driver::{default_packages, BatchOptions, ErrorPolicy, OutputFormat, Package};
use crate::message::MessageLocale;

pub const DEFAULT_CONFIG_PATH: &str = "config/tracker.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub on_error: String,
    pub packages: Vec<Package>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            on_error: "abort".to_string(),
            packages: Vec::new(),
        }
    }
}

impl BatchConfig {
    pub fn to_policy(&self) -> Result<ErrorPolicy, String> {
        ErrorPolicy::from_str(&self.on_error)
            .ok_or_else(|| format!("invalid error policy (abort|skip): {}", self.on_error))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub locale: String,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            format: "text".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn to_locale(&self) -> Result<MessageLocale, String> {
        MessageLocale::from_str(&self.locale)
            .ok_or_else(|| format!("invalid locale (en|ru): {}", self.locale))
    }

    pub fn to_format(&self) -> Result<OutputFormat, String> {
        OutputFormat::from_str(&self.format)
            .ok_or_else(|| format!("invalid output format (text|json): {}", self.format))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub batch: BatchConfig,
    pub output: OutputConfig,
}

impl TrackerConfig {
    /// Config shipped by `init-config`: defaults plus the demo packages.
    pub fn sample() -> Self {
        let mut config = Self::default();
        config.batch.packages = default_packages();
        config
    }

    /// Read the config file (defaults when it is absent), layer the `FITNESS_*`
    /// variables on top and reject values the batch options cannot use.
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_deref() {
            Some(path) if path.exists() => Self::read(path)?,
            _ => TrackerConfig::default(),
        };

        config.apply_env_overrides();
        config
            .to_options()
            .map_err(|err| format!("invalid config: {}", err))?;
        Ok((config, config_path))
    }

    fn read(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|err| format!("failed to read config {}: {}", path.display(), err))?;
        toml::from_str(&contents)
            .map_err(|err| format!("failed to parse config {}: {}", path.display(), err))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir)
                .map_err(|err| format!("failed to create {}: {}", dir.display(), err))?,
            _ => {}
        }
        std::fs::write(path, payload)
            .map_err(|err| format!("failed to write {}: {}", path.display(), err))
    }

    pub fn packages(&self) -> Vec<Package> {
        if self.batch.packages.is_empty() {
            default_packages()
        } else {
            self.batch.packages.clone()
        }
    }

    pub fn to_options(&self) -> Result<BatchOptions, String> {
        Ok(BatchOptions {
            on_error: self.batch.to_policy()?,
            locale: self.output.to_locale()?,
            format: self.output.to_format()?,
        })
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(on_error) = env::var("FITNESS_ON_ERROR") {
            if !on_error.trim().is_empty() {
                self.batch.on_error = on_error;
            }
        }
        if let Ok(locale) = env::var("FITNESS_LOCALE") {
            if !locale.trim().is_empty() {
                self.output.locale = locale;
            }
        }
        if let Ok(format) = env::var("FITNESS_OUTPUT_FORMAT") {
            if !format.trim().is_empty() {
                self.output.format = format;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    let path = env::var("FITNESS_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    Some(PathBuf::from(path))
}
