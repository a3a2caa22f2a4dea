//! Gateway configuration.
//!
//! | Source | Precedence |
//! |--------|------------|
//! | `TRAILMATE__*` env vars (e.g. `TRAILMATE__PORT`) | highest |
//! | file at `TRAILMATE_CONFIG`, else `config/gateway.toml` | middle |
//! | built-in defaults | lowest |
//!
//! A `.env` file in the working directory is loaded first, so it can set either kind of variable.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/gateway";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Name reported by `/health` logs and the status endpoint.
    pub app_name: String,
    pub host: String,
    pub port: u16,
    /// Artificial latency of the mock itinerary generator.
    pub itinerary_delay_ms: u64,
    /// When set, dispatched SOS alerts are also POSTed here.
    #[serde(default)]
    pub dispatch_webhook_url: Option<String>,
    /// Allow any origin (mobile dev clients on the LAN).
    #[serde(default)]
    pub cors_permissive: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            app_name: "TrailMate Gateway".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8000,
            itinerary_delay_ms: 2000,
            dispatch_webhook_url: None,
            cors_permissive: false,
        }
    }
}

impl GatewayConfig {
    /// Loads `.env`, then the config file named by `TRAILMATE_CONFIG` (or the default path), then env overrides.
    pub fn load() -> Result<Self, config::ConfigError> {
        let _ = dotenvy::dotenv();
        let path = std::env::var("TRAILMATE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let builder = config::Config::builder()
            .set_default("app_name", defaults.app_name)?
            .set_default("host", defaults.host)?
            .set_default("port", defaults.port as i64)?
            .set_default("itinerary_delay_ms", defaults.itinerary_delay_ms as i64)?
            .set_default("cors_permissive", defaults.cors_permissive)?;

        let builder = if Path::new(config_path).exists() || Path::new(&format!("{}.toml", config_path)).exists() {
            builder.add_source(config::File::with_name(config_path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("TRAILMATE").separator("__"))
            .build()?;

        let mut cfg: Self = built.try_deserialize()?;
        if cfg
            .dispatch_webhook_url
            .as_deref()
            .map(|u| u.trim().is_empty())
            .unwrap_or(false)
        {
            cfg.dispatch_webhook_url = None;
        }
        Ok(cfg)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn itinerary_delay(&self) -> Duration {
        Duration::from_millis(self.itinerary_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = GatewayConfig::load_from("/nonexistent/trailmate-gateway").unwrap();
        assert_eq!(cfg.port, GatewayConfig::default().port);
        assert_eq!(cfg.itinerary_delay(), Duration::from_millis(2000));
        assert!(cfg.dispatch_webhook_url.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gateway.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "port = 9100\nitinerary_delay_ms = 50\ndispatch_webhook_url = \"\"").unwrap();

        let cfg = GatewayConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.port, 9100);
        assert_eq!(cfg.bind_addr(), "127.0.0.1:9100");
        assert_eq!(cfg.itinerary_delay_ms, 50);
        assert!(cfg.dispatch_webhook_url.is_none());
    }
}
