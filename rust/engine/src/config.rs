//! Table rule configuration.
//!
//! Values are resolved in order: built-in defaults, then the TOML file named
//! by `HOLDEM_CONFIG`, then the `HOLDEM_SMALL_BLIND` / `HOLDEM_BIG_BLIND`
//! environment variables. The result is validated before it is returned.
//!
//! ```toml
//! [blinds]
//! small_blind = 25
//! big_blind = 50
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::rules::{ActionChecker, BlindStructure};

pub const CONFIG_ENV: &str = "HOLDEM_CONFIG";
pub const SMALL_BLIND_ENV: &str = "HOLDEM_SMALL_BLIND";
pub const BIG_BLIND_ENV: &str = "HOLDEM_BIG_BLIND";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesConfig {
    pub blinds: BlindStructure,
}

impl RulesConfig {
    pub fn checker(&self) -> ActionChecker {
        ActionChecker::new(self.blinds)
    }

    /// Parses a TOML document on top of the defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        let mut sources = ConfigSources::default();
        apply_file(&mut cfg, &mut sources, toml::from_str(s)?);
        validate(&cfg)?;
        Ok(cfg)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: RulesConfig,
    pub sources: ConfigSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

pub fn load() -> Result<RulesConfig, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = RulesConfig::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        apply_file(&mut cfg, &mut sources, toml::from_str(&s)?);
    }

    if let Some(v) = env_chips(SMALL_BLIND_ENV)? {
        cfg.blinds.small_blind = v;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(v) = env_chips(BIG_BLIND_ENV)? {
        cfg.blinds.big_blind = v;
        sources.big_blind = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    blinds: FileBlinds,
}

#[derive(Debug, Default, Deserialize)]
struct FileBlinds {
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
}

fn apply_file(cfg: &mut RulesConfig, sources: &mut ConfigSources, f: FileConfig) {
    if let Some(v) = f.blinds.small_blind {
        cfg.blinds.small_blind = v;
        sources.small_blind = ValueSource::File;
    }
    if let Some(v) = f.blinds.big_blind {
        cfg.blinds.big_blind = v;
        sources.big_blind = ValueSource::File;
    }
}

fn env_chips(key: &str) -> Result<Option<u32>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a chip count, got {v:?}"))),
        _ => Ok(None),
    }
}

fn validate(cfg: &RulesConfig) -> Result<(), ConfigError> {
    cfg.blinds
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}
