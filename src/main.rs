use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use video_cost_estimator::{config, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // Logging settings come from the config file when it loads cleanly;
    // commands report configuration errors themselves
    let server_cfg = config::load_config(&args.config)
        .map(|cfg| cfg.server)
        .unwrap_or_default();
    init_tracing(&server_cfg.log_level, &server_cfg.log_format);

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Estimate(estimate_args) => {
            commands::estimate::execute(&args.config, &estimate_args)?;
        }
        cli::Commands::Pricing { action } => match action {
            cli::PricingCommands::Show { pricing } => {
                commands::pricing::show(&args.config, pricing)?
            }
        },
        cli::Commands::Serve { host, port } => {
            commands::serve::execute(&args.config, host, port).await?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("Video Cost Estimator v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
