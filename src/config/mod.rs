use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub environment: String,
    pub host: String,
    pub port: u16,
    /// Request timeout in seconds
    pub request_timeout: u64,
    pub log_level: String,
    pub log_format: LogFormat,
    /// JSON array of movies loaded into the store at startup
    pub seed_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow::anyhow!("Invalid LOG_FORMAT: {}", other)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout: 30,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            seed_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup, falling back to defaults
    /// for unset keys. Set but malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let request_timeout = parse_or(&lookup, "REQUEST_TIMEOUT", defaults.request_timeout)?;
        if request_timeout == 0 {
            anyhow::bail!("REQUEST_TIMEOUT must be greater than 0 seconds");
        }

        Ok(Config {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            request_timeout,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_format: parse_or(&lookup, "LOG_FORMAT", defaults.log_format)?,
            seed_file: lookup("MOVIES_SEED_FILE")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("{} environment variable is invalid: {:?}", key, raw)),
        None => Ok(default),
    }
}
