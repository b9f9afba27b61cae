use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use relationdex_core::FrequencyDays;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "relationdex";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_TALK_FREQUENCY_DAYS: u32 = 30;
pub const DEFAULT_SEE_FREQUENCY_DAYS: u32 = 90;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub default_talk_frequency: FrequencyDays,
    pub default_see_frequency: FrequencyDays,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_talk_frequency: FrequencyDays::new(DEFAULT_TALK_FREQUENCY_DAYS),
            default_see_frequency: FrequencyDays::new(DEFAULT_SEE_FREQUENCY_DAYS),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_talk_frequency_days: Option<FrequencyDays>,
    default_see_frequency_days: Option<FrequencyDays>,
}

/// Loads the config file. An explicit path must exist; the implicit XDG
/// location falls back to defaults when absent.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)))
}

fn merge_config(parsed: ConfigFile) -> AppConfig {
    let mut config = AppConfig::default();
    if let Some(days) = parsed.default_talk_frequency_days {
        config.default_talk_frequency = days;
    }
    if let Some(days) = parsed.default_see_frequency_days {
        config.default_see_frequency = days;
    }
    config
}
