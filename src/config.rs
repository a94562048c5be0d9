use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::pricing::PricingTable;
use crate::usage::UsageInput;
use crate::validation::{validate_pricing, validate_usage};

/// Environment variable prefix, e.g. `COST_ESTIMATOR__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "COST_ESTIMATOR";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    /// Effective unit prices; built-in defaults when omitted
    pub pricing: PricingTable,
    /// Form values shown before the user enters anything
    pub defaults: UsageInput,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// `text` or `json`
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "/metrics".to_string(),
        }
    }
}

/// Load configuration from `path` (optional) layered with environment overrides
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.host.is_empty() {
        anyhow::bail!("Server host cannot be empty");
    }

    match cfg.server.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid log format '{}': expected 'text' or 'json'", other),
    }

    if cfg.metrics.enabled && !cfg.metrics.endpoint.starts_with('/') {
        anyhow::bail!(
            "Metrics endpoint must start with '/': {}",
            cfg.metrics.endpoint
        );
    }

    validate_pricing(&cfg.pricing).map_err(|e| anyhow::anyhow!("[pricing] {}", e))?;
    validate_usage(&cfg.defaults).map_err(|e| anyhow::anyhow!("[defaults] {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = Config::default();
        assert!(validate_config(&cfg).is_ok());
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.pricing, PricingTable::default());
    }

    #[test]
    fn test_validate_config_rejects_unknown_log_format() {
        let mut cfg = Config::default();
        cfg.server.log_format = "yaml".to_string();

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_validate_config_rejects_negative_price() {
        let mut cfg = Config::default();
        cfg.pricing.search_cost_per_call = -0.5;

        let err = validate_config(&cfg).unwrap_err().to_string();
        assert!(err.contains("[pricing]"));
        assert!(err.contains("search_cost_per_call"));
    }

    #[test]
    fn test_validate_config_rejects_bad_defaults() {
        let mut cfg = Config::default();
        cfg.defaults.contract.enterprise_discount = 2.0;

        let err = validate_config(&cfg).unwrap_err().to_string();
        assert!(err.contains("[defaults]"));
        assert!(err.contains("contract.enterprise_discount"));
    }

    #[test]
    fn test_validate_config_metrics_endpoint() {
        let mut cfg = Config::default();
        cfg.metrics.endpoint = "metrics".to_string();
        assert!(validate_config(&cfg).is_err());

        cfg.metrics.enabled = false;
        assert!(validate_config(&cfg).is_ok());
    }
}
