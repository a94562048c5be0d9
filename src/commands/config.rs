use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;
use video_cost_estimator::config::{self, Config};

/// Execute the config show command
///
/// Displays the effective configuration (file, environment and defaults merged)
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
///
/// Validates the configuration file
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    if !config_path.exists() {
        println!(
            "{} {} not found, using built-in defaults",
            "!".yellow(),
            config_path.display()
        );
    }

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    for line in summary_lines(&cfg) {
        println!("  {}", line);
    }

    info!("Configuration validation successful");
    Ok(())
}

fn summary_lines(cfg: &Config) -> Vec<String> {
    vec![
        format!("Server: {}:{}", cfg.server.host, cfg.server.port),
        format!("Log Level: {} ({})", cfg.server.log_level, cfg.server.log_format),
        format!(
            "Metrics: {}",
            if cfg.metrics.enabled {
                cfg.metrics.endpoint.as_str()
            } else {
                "disabled"
            }
        ),
        format!(
            "Default Contract: {} year(s), {} reindex/year, {:.1}% discount",
            cfg.defaults.contract.contract_years,
            cfg.defaults.contract.reindex_frequency_per_year,
            cfg.defaults.contract.enterprise_discount * 100.0
        ),
    ]
}
