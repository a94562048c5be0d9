use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::handlers::estimate::AppState;
use crate::validation::MAX_CONTRACT_YEARS;

/// Liveness probe
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "service": "video-cost-estimator",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

/// Readiness probe
///
/// Equivalent to liveness: `load_config` rejects invalid pricing and defaults
/// before the listener binds, and the engine holds no other state. Reports
/// the limits the running instance applies.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "ready",
        "service": "video-cost-estimator",
        "metrics_enabled": state.config.metrics.enabled,
        "max_contract_years": MAX_CONTRACT_YEARS,
    })))
}
