//! Server configuration

use std::path::PathBuf;
use tracing::warn;

/// Primary port variable
pub const PORT_ENV: &str = "PORT";
/// Consulted when `PORT` is unset or unusable
pub const FALLBACK_PORT_ENV: &str = "SALES_EFFICIENCY_PORT";
pub const ADDRESS_ENV: &str = "SALES_EFFICIENCY_ADDRESS";
pub const DATA_DIR_ENV: &str = "SALES_EFFICIENCY_DATA_DIR";

pub const DEFAULT_PORT: u16 = 5001;

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Port
    pub port: u16,
    /// Dataset directory (None = built-in dataset)
    pub data_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            data_dir: None,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        for key in [PORT_ENV, FALLBACK_PORT_ENV] {
            let Some(raw) = lookup(key) else { continue };
            match raw.trim().parse::<u16>() {
                Ok(port) => {
                    config.port = port;
                    break;
                }
                Err(e) => warn!("Ignoring {}={:?}: {}", key, raw, e),
            }
        }

        if let Some(address) = lookup(ADDRESS_ENV).filter(|a| !a.trim().is_empty()) {
            config.address = address.trim().to_string();
        }
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|d| !d.trim().is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }

        config
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.address, "0.0.0.0");
        assert_eq!(config.port, 5001);
        assert!(config.data_dir.is_none());
        assert_eq!(config.bind_addr(), "0.0.0.0:5001");
    }

    #[test]
    fn test_port_precedence() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "8080"), (FALLBACK_PORT_ENV, "9090")]));
        assert_eq!(config.port, 8080);

        let config = ServerConfig::from_lookup(lookup(&[(FALLBACK_PORT_ENV, "9090")]));
        assert_eq!(config.port, 9090);

        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_bad_port_falls_through() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "http"), (FALLBACK_PORT_ENV, "7000")]));
        assert_eq!(config.port, 7000);

        let config = ServerConfig::from_lookup(lookup(&[("PORT", "99999")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_address_and_data_dir() {
        let config = ServerConfig::from_lookup(lookup(&[
            (ADDRESS_ENV, "127.0.0.1"),
            (DATA_DIR_ENV, "/srv/dashboard"),
        ]));
        assert_eq!(config.address, "127.0.0.1");
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/dashboard")));
    }
}
