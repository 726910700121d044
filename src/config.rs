use std::env;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// HTTP server settings.
///
/// Read from the environment (after `.env` is loaded):
/// - `WORK_FRIENDS_HOST` (default `127.0.0.1`)
/// - `WORK_FRIENDS_PORT` (default `8080`)
/// - `WORK_FRIENDS_PLAYGROUND` (default `true`), serves the GraphQL playground
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_playground: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            enable_playground: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("WORK_FRIENDS_HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(port) = lookup("WORK_FRIENDS_PORT") {
            config.port = port.trim().parse::<u16>().map_err(|e| {
                ConfigError::InvalidValue {
                    key: "WORK_FRIENDS_PORT".to_string(),
                    value: port.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(flag) = lookup("WORK_FRIENDS_PLAYGROUND") {
            config.enable_playground = parse_flag("WORK_FRIENDS_PLAYGROUND", &flag)?;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), ("127.0.0.1".to_string(), 8080));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("WORK_FRIENDS_HOST", "0.0.0.0"),
            ("WORK_FRIENDS_PORT", " 9090 "),
            ("WORK_FRIENDS_PLAYGROUND", "off"),
        ]))
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9090);
        assert!(!config.enable_playground);
    }

    #[test]
    fn test_blank_host_keeps_default() {
        let config = ServerConfig::from_lookup(lookup(&[("WORK_FRIENDS_HOST", "  ")])).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup(&[("WORK_FRIENDS_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "WORK_FRIENDS_PORT"));
    }

    #[test]
    fn test_invalid_playground_flag() {
        let err =
            ServerConfig::from_lookup(lookup(&[("WORK_FRIENDS_PLAYGROUND", "maybe")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for WORK_FRIENDS_PLAYGROUND: maybe (expected a boolean)"
        );
    }
}
