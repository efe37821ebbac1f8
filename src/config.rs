//! Process configuration, read from the environment (and `.env`) at startup.

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_LIVE_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Clone)]
pub struct Config {
    /// Default PageSpeed API key, used when a caller does not pass one.
    pub api_key: Option<String>,
    pub api_url: String,
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
    pub live_interval: Duration,
}

// keeps the key out of logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .field("api_url", &self.api_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("request_timeout", &self.request_timeout)
            .field("live_interval", &self.live_interval)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            live_interval: Duration::from_secs(DEFAULT_LIVE_INTERVAL_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from any variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Config::default();

        Ok(Config {
            api_key: get("GOOGLE_API_KEY"),
            api_url: get("PAGESPEED_API_URL").unwrap_or(defaults.api_url),
            host: get("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", get("PORT"))?.unwrap_or(defaults.port),
            request_timeout: parse_var("PAGESPEED_TIMEOUT_SECS", get("PAGESPEED_TIMEOUT_SECS"))?
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            live_interval: parse_var(
                "LIVE_UPDATE_INTERVAL_SECS",
                get("LIVE_UPDATE_INTERVAL_SECS"),
            )?
            .filter(|secs: &u64| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.live_interval),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    value: Option<String>,
) -> Result<Option<T>, ConfigError> {
    match value {
        None => Ok(None),
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
