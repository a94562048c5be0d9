use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;
use video_cost_estimator::{config, server};

/// Execute the serve command
///
/// Loads configuration, applies the command-line bind overrides and runs the
/// HTTP server until SIGINT/SIGTERM.
pub async fn execute(config_path: &Path, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut cfg = config::load_config(config_path)?;

    if let Some(host) = host {
        cfg.server.host = host;
    }
    if let Some(port) = port {
        cfg.server.port = port;
    }

    println!(
        "{} {}:{}",
        "Starting cost estimator on".green(),
        cfg.server.host,
        cfg.server.port
    );
    info!(
        metrics_enabled = cfg.metrics.enabled,
        "Starting cost estimator in foreground mode"
    );

    server::start_server(cfg).await
}
