use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Initialize Prometheus metrics exporter
///
/// Fails if a global recorder is already installed.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {}", e))?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!("cost_estimates_total", "Total number of cost estimates computed");
    describe_counter!(
        "cost_validation_errors_total",
        "Total number of rejected estimate inputs"
    );
    describe_histogram!(
        "cost_estimate_duration_seconds",
        "Estimate computation duration in seconds"
    );
    describe_histogram!(
        "cost_estimate_contract_years",
        "Contract length of each estimate in years"
    );
    describe_histogram!(
        "cost_estimate_final_usd",
        "Final discounted contract cost of each estimate"
    );
    describe_gauge!(
        "cost_estimator_info",
        "Estimator version and build information"
    );

    gauge!("cost_estimator_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a completed estimate
pub fn record_estimate(source: &str, contract_years: u32, final_cost: f64) {
    counter!("cost_estimates_total", "source" => source.to_string()).increment(1);

    // Recorded as a value: label values must stay bounded
    histogram!("cost_estimate_contract_years", "source" => source.to_string())
        .record(f64::from(contract_years));
    histogram!("cost_estimate_final_usd", "source" => source.to_string()).record(final_cost);
}

/// Record computation duration
pub fn record_duration(source: &str, duration: Duration) {
    histogram!(
        "cost_estimate_duration_seconds",
        "source" => source.to_string(),
    )
    .record(duration.as_secs_f64());
}

/// Record a rejected input
pub fn record_validation_error(source: &str, field: &str) {
    counter!(
        "cost_validation_errors_total",
        "source" => source.to_string(),
        "field" => field.to_string(),
    )
    .increment(1);
}
