//! Layered configuration: built-in defaults, then the TOML file named by
//! `EQUISIM_CONFIG`, then `EQUISIM_*` environment variables. Command-line
//! flags are applied on top by the individual commands.

use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;
use tracing::debug;

pub const CONFIG_PATH_VAR: &str = "EQUISIM_CONFIG";
pub const ITERATIONS_VAR: &str = "EQUISIM_ITERATIONS";
pub const SEED_VAR: &str = "EQUISIM_SEED";
pub const WORKERS_VAR: &str = "EQUISIM_WORKERS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub iterations: u64,
    pub seed: Option<u64>,
    pub workers: usize,
    /// Runs shorter than this print an accuracy warning.
    pub warn_below: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            seed: None,
            workers: 1,
            warn_below: 500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub iterations: ValueSource,
    pub seed: ValueSource,
    pub workers: ValueSource,
    pub warn_below: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            iterations: ValueSource::Default,
            seed: ValueSource::Default,
            workers: ValueSource::Default,
            warn_below: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    iterations: Option<u64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    workers: Option<usize>,
    #[serde(default)]
    warn_below: Option<u64>,
}

/// Resolves configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    resolve(|key| std::env::var(key).ok())
}

/// Resolves configuration reading variables through `var`, so callers can
/// substitute the environment.
pub fn resolve<F>(var: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = var(CONFIG_PATH_VAR)
        && !path.is_empty()
    {
        debug!(%path, "reading config file");
        let s = fs::read_to_string(&path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.iterations {
            cfg.iterations = v;
            sources.iterations = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.workers {
            cfg.workers = v;
            sources.workers = ValueSource::File;
        }
        if let Some(v) = f.warn_below {
            cfg.warn_below = v;
            sources.warn_below = ValueSource::File;
        }
    }

    if let Some(v) = var(ITERATIONS_VAR)
        && !v.is_empty()
    {
        cfg.iterations = parse_env(ITERATIONS_VAR, &v)?;
        sources.iterations = ValueSource::Env;
    }
    if let Some(v) = var(SEED_VAR)
        && !v.is_empty()
    {
        cfg.seed = Some(parse_env(SEED_VAR, &v)?);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = var(WORKERS_VAR)
        && !v.is_empty()
    {
        cfg.workers = parse_env(WORKERS_VAR, &v)?;
        sources.workers = ValueSource::Env;
    }

    validate(&cfg)?;
    debug!(?cfg, ?sources, "configuration resolved");
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("{key} is not a valid number: '{raw}'")))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.iterations == 0 {
        return Err(ConfigError::Invalid("iterations must be >= 1".into()));
    }
    if cfg.workers == 0 {
        return Err(ConfigError::Invalid("workers must be >= 1".into()));
    }
    Ok(())
}
