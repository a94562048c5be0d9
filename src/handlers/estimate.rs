use crate::{
    config::Config,
    error::AppError,
    metrics,
    pricing::{compute, ContractResult, PricingOverride},
    usage::UsageInput,
    validation::validate_usage,
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Application state
///
/// Read-only: every request computes from its own input snapshot.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EstimateRequest {
    /// Configured defaults are used when omitted
    #[serde(default)]
    pub usage: Option<UsageInput>,
    /// Merged onto the configured pricing table
    #[serde(default)]
    pub pricing: Option<PricingOverride>,
}

/// Handle /v1/estimate endpoint
pub async fn handle_estimate(
    State(state): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<ContractResult>, AppError> {
    let start = Instant::now();

    let usage = request
        .usage
        .unwrap_or_else(|| state.config.defaults.clone());

    if let Err(e) = validate_usage(&usage) {
        tracing::warn!(field = %e.field(), "Rejected estimate request: {}", e);
        metrics::record_validation_error("api", e.field());
        return Err(e.into());
    }

    let pricing = match &request.pricing {
        Some(overrides) => overrides.apply(&state.config.pricing).inspect_err(|e| {
            if let AppError::InvalidInput { field, .. } = e {
                tracing::warn!(field = %field, "Rejected pricing override: {}", e);
                metrics::record_validation_error("api", field);
            }
        })?,
        None => state.config.pricing.clone(),
    };

    let result = compute(&usage, &pricing);

    tracing::info!(
        contract_years = usage.contract.contract_years,
        reindex_frequency = usage.contract.reindex_frequency_per_year,
        custom_pricing = request.pricing.is_some(),
        total_cost = result.total_cost,
        final_cost = result.final_cost,
        "Computed estimate"
    );

    metrics::record_estimate("api", usage.contract.contract_years, result.final_cost);
    metrics::record_duration("api", start.elapsed());

    Ok(Json(result))
}
