//! Startup configuration.
//!
//! Resolved once from the environment in `main` and passed into the app
//! builder; request handlers never read environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use romantica_catalog::loader::DEFAULT_LATENCY;
use romantica_messaging::DEFAULT_PHONE;
use romantica_observability::LogFormat;

pub const ENV_ADDR: &str = "STOREFRONT_ADDR";
pub const ENV_LATENCY_MS: &str = "CATALOG_LATENCY_MS";
pub const ENV_CATALOG_FILE: &str = "CATALOG_FILE";
pub const ENV_WHATSAPP_PHONE: &str = "WHATSAPP_PHONE";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

const DEFAULT_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: {message}")]
    Invalid { var: &'static str, message: String },
}

impl ConfigError {
    fn invalid(var: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            var,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub bind_addr: SocketAddr,
    /// Simulated catalog round trip per page load.
    pub catalog_latency: Duration,
    /// JSON sheet export to serve instead of the built-in catalog.
    pub catalog_file: Option<PathBuf>,
    pub whatsapp_phone: String,
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(DEFAULT_ADDR),
            catalog_latency: DEFAULT_LATENCY,
            catalog_file: None,
            whatsapp_phone: DEFAULT_PHONE.to_string(),
            log_format: LogFormat::Json,
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable lookup; unset or blank variables take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(addr) = get(ENV_ADDR) {
            config.bind_addr = addr
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid(ENV_ADDR, format!("{e}")))?;
        }

        if let Some(ms) = get(ENV_LATENCY_MS) {
            let ms: u64 = ms
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid(ENV_LATENCY_MS, format!("{e}")))?;
            config.catalog_latency = Duration::from_millis(ms);
        }

        config.catalog_file = get(ENV_CATALOG_FILE).map(PathBuf::from);

        if let Some(phone) = get(ENV_WHATSAPP_PHONE) {
            let phone = phone.trim();
            if !phone.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ConfigError::invalid(
                    ENV_WHATSAPP_PHONE,
                    "must contain digits only (international format, no '+')",
                ));
            }
            config.whatsapp_phone = phone.to_string();
        }

        if let Some(format) = get(ENV_LOG_FORMAT) {
            config.log_format = format
                .parse()
                .map_err(|e: String| ConfigError::invalid(ENV_LOG_FORMAT, e))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.catalog_latency, Duration::from_millis(1000));
        assert_eq!(config.whatsapp_phone, "94701234567");
    }

    #[test]
    fn reads_every_variable() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            (ENV_ADDR, "127.0.0.1:3000"),
            (ENV_LATENCY_MS, "0"),
            (ENV_CATALOG_FILE, "/srv/catalog.json"),
            (ENV_WHATSAPP_PHONE, "15550001111"),
            (ENV_LOG_FORMAT, "pretty"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.catalog_latency, Duration::ZERO);
        assert_eq!(config.catalog_file, Some(PathBuf::from("/srv/catalog.json")));
        assert_eq!(config.whatsapp_phone, "15550001111");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_malformed_values() {
        let err = StorefrontConfig::from_lookup(lookup(&[(ENV_LATENCY_MS, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: ENV_LATENCY_MS, .. }));

        let err = StorefrontConfig::from_lookup(lookup(&[(ENV_WHATSAPP_PHONE, "+94 70")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: ENV_WHATSAPP_PHONE, .. }));

        assert!(StorefrontConfig::from_lookup(lookup(&[(ENV_ADDR, "nowhere")])).is_err());
        assert!(StorefrontConfig::from_lookup(lookup(&[(ENV_LOG_FORMAT, "xml")])).is_err());
    }
}
