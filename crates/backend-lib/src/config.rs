// ============================
// crates/backend-lib/src/config.rs
// ============================
//! Configuration management.
use std::net::SocketAddr;

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_bind_addr() -> SocketAddr {
    "127.0.0.1:3000".parse().expect("static default address")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from `config/default.*` (optional) with `COURSEBOOK_*`
    /// environment overrides on top.
    pub fn load() -> Result<Self> {
        Self::load_from("config/default")
    }

    /// Load settings from an explicit config file location.
    pub fn load_from(path: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("COURSEBOOK"))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_load_without_config_file() {
        // No config file present: defaults apply
        let settings = Settings::load_from("does-not-exist").unwrap();
        assert_eq!(settings.bind_addr, Settings::default().bind_addr);
    }
}
