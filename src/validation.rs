//! Input validation boundary
//!
//! The cost engine assumes well-formed input. Everything coming from a form,
//! a CLI flag, a configuration file or an HTTP body passes through here first
//! so the user sees the offending field before any calculation runs.

use thiserror::Error;

use crate::pricing::models::PricingTable;
use crate::usage::UsageInput;

/// Longest contract the engine will price, in years
pub const MAX_CONTRACT_YEARS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid value for '{field}': {message}")]
    InvalidInput { field: String, message: String },
}

impl ValidationError {
    fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Dotted path of the rejected field
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidInput { field, .. } => field,
        }
    }
}

/// Validate usage volumes and contract terms
pub fn validate_usage(usage: &UsageInput) -> Result<(), ValidationError> {
    let counts = [
        ("marengo.video_hours", usage.marengo.video_hours),
        ("marengo.search_calls_per_day", usage.marengo.search_calls_per_day),
        ("pegasus.video_hours", usage.pegasus.video_hours),
        ("pegasus.generate_calls_per_day", usage.pegasus.generate_calls_per_day),
        ("pegasus.input_tokens_per_call", usage.pegasus.input_tokens_per_call),
        ("pegasus.output_tokens_per_call", usage.pegasus.output_tokens_per_call),
        ("embeddings.video_count", usage.embeddings.video_count),
        ("embeddings.audio_count_k", usage.embeddings.audio_count_k),
        ("embeddings.image_count_k", usage.embeddings.image_count_k),
        ("embeddings.text_count_k", usage.embeddings.text_count_k),
    ];

    for (field, value) in counts {
        check_non_negative(field, value)?;
    }

    if usage.contract.contract_years < 1 {
        return Err(ValidationError::invalid(
            "contract.contract_years",
            "must be at least 1",
        ));
    }
    if usage.contract.contract_years > MAX_CONTRACT_YEARS {
        return Err(ValidationError::invalid(
            "contract.contract_years",
            format!(
                "must be at most {}, got {}",
                MAX_CONTRACT_YEARS, usage.contract.contract_years
            ),
        ));
    }

    let discount = usage.contract.enterprise_discount;
    if !discount.is_finite() || !(0.0..=1.0).contains(&discount) {
        return Err(ValidationError::invalid(
            "contract.enterprise_discount",
            format!("must be between 0.0 and 1.0, got {}", discount),
        ));
    }

    Ok(())
}

/// Validate that every unit price is a finite, non-negative number
pub fn validate_pricing(pricing: &PricingTable) -> Result<(), ValidationError> {
    let prices = [
        ("index_cost_per_hour", pricing.index_cost_per_hour),
        ("infra_storage_unit_price", pricing.infra_storage_unit_price),
        ("search_cost_per_call", pricing.search_cost_per_call),
        ("reindex_price_marengo", pricing.reindex_price_marengo),
        ("reindex_price_pegasus", pricing.reindex_price_pegasus),
        ("input_token_cost_marengo", pricing.input_token_cost_marengo),
        ("input_token_cost_pegasus", pricing.input_token_cost_pegasus),
        ("output_token_cost_pegasus", pricing.output_token_cost_pegasus),
        ("embedding.video", pricing.embedding.video),
        ("embedding.audio", pricing.embedding.audio),
        ("embedding.image", pricing.embedding.image),
        ("embedding.text", pricing.embedding.text),
    ];

    for (field, value) in prices {
        check_non_negative(field, value)?;
    }

    Ok(())
}

fn check_non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(ValidationError::invalid(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}
