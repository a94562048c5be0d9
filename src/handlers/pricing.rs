use axum::{extract::State, Json};

use crate::handlers::estimate::AppState;
use crate::pricing::PricingTable;
use crate::usage::UsageInput;

/// Handle /v1/pricing endpoint
/// Returns the effective unit prices
pub async fn get_pricing(State(state): State<AppState>) -> Json<PricingTable> {
    Json(state.config.pricing.clone())
}

/// Handle /v1/defaults endpoint
/// Returns the form values for first render
pub async fn get_defaults(State(state): State<AppState>) -> Json<UsageInput> {
    Json(state.config.defaults.clone())
}
