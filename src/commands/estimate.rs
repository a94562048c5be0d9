use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::{info, warn};
use video_cost_estimator::{
    config,
    pricing::{compute, load_pricing_file},
    report::{render_report, MoneyPrecision, ReportOptions},
    validation::validate_usage,
};

use crate::cli::EstimateArgs;

/// Execute the estimate command
///
/// Merges the given flags onto the configured defaults, validates them and
/// prints the year-by-year breakdown.
pub fn execute(config_path: &Path, args: &EstimateArgs) -> Result<()> {
    let cfg = config::load_config(config_path)?;

    let usage = args.apply_to(&cfg.defaults);
    if let Err(e) = validate_usage(&usage) {
        warn!(field = %e.field(), "Rejected estimate input");
        return Err(e.into());
    }

    let pricing = match &args.pricing {
        Some(path) => load_pricing_file(path, &cfg.pricing)?,
        None => cfg.pricing.clone(),
    };

    let result = compute(&usage, &pricing);
    info!(
        contract_years = usage.contract.contract_years,
        total_cost = result.total_cost,
        final_cost = result.final_cost,
        "Computed estimate"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let options = ReportOptions {
        precision: if args.whole_dollars {
            MoneyPrecision::WholeDollars
        } else {
            MoneyPrecision::Cents
        },
        hide_zero: args.hide_zero,
    };

    println!("{}", "Contract Cost Estimate".green().bold());
    println!();
    print!(
        "{}",
        render_report(&result, usage.contract.enterprise_discount, &options)
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use video_cost_estimator::validation::ValidationError;

    #[test]
    fn test_invalid_flags_return_field_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = EstimateArgs {
            contract_years: Some(250),
            ..EstimateArgs::default()
        };

        let err = execute(&dir.path().join("missing.toml"), &args).unwrap_err();
        let validation = err.downcast_ref::<ValidationError>().unwrap();
        assert_eq!(validation.field(), "contract.contract_years");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'contract.contract_years': must be at most 100, got 250"
        );
    }
}
