use crate::error::AppError;
use crate::pricing::models::{EmbeddingPricing, PricingTable};
use crate::validation::validate_pricing;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Partial pricing document
///
/// Any subset of [`PricingTable`] fields. Unknown keys make the whole
/// document invalid rather than being silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PricingOverride {
    pub index_cost_per_hour: Option<f64>,
    pub infra_storage_unit_price: Option<f64>,
    pub search_cost_per_call: Option<f64>,
    pub reindex_price_marengo: Option<f64>,
    pub reindex_price_pegasus: Option<f64>,
    pub input_token_cost_marengo: Option<f64>,
    pub input_token_cost_pegasus: Option<f64>,
    pub output_token_cost_pegasus: Option<f64>,
    pub embedding: Option<EmbeddingOverride>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EmbeddingOverride {
    pub video: Option<f64>,
    pub audio: Option<f64>,
    pub image: Option<f64>,
    pub text: Option<f64>,
}

impl PricingOverride {
    /// Merge onto `base`, then validate the merged table
    pub fn apply(&self, base: &PricingTable) -> Result<PricingTable, AppError> {
        let embedding = match &self.embedding {
            Some(overrides) => EmbeddingPricing {
                video: overrides.video.unwrap_or(base.embedding.video),
                audio: overrides.audio.unwrap_or(base.embedding.audio),
                image: overrides.image.unwrap_or(base.embedding.image),
                text: overrides.text.unwrap_or(base.embedding.text),
            },
            None => base.embedding.clone(),
        };

        let merged = PricingTable {
            index_cost_per_hour: self.index_cost_per_hour.unwrap_or(base.index_cost_per_hour),
            infra_storage_unit_price: self
                .infra_storage_unit_price
                .unwrap_or(base.infra_storage_unit_price),
            search_cost_per_call: self.search_cost_per_call.unwrap_or(base.search_cost_per_call),
            reindex_price_marengo: self
                .reindex_price_marengo
                .unwrap_or(base.reindex_price_marengo),
            reindex_price_pegasus: self
                .reindex_price_pegasus
                .unwrap_or(base.reindex_price_pegasus),
            input_token_cost_marengo: self
                .input_token_cost_marengo
                .unwrap_or(base.input_token_cost_marengo),
            input_token_cost_pegasus: self
                .input_token_cost_pegasus
                .unwrap_or(base.input_token_cost_pegasus),
            output_token_cost_pegasus: self
                .output_token_cost_pegasus
                .unwrap_or(base.output_token_cost_pegasus),
            embedding,
        };

        validate_pricing(&merged)?;
        Ok(merged)
    }
}

/// Parse a TOML pricing override document
pub fn parse_pricing_toml(content: &str) -> Result<PricingOverride, AppError> {
    toml::from_str(content)
        .map_err(|e| AppError::ConfigError(format!("Failed to parse pricing TOML: {}", e)))
}

/// Parse a JSON pricing override document
pub fn parse_pricing_json(content: &str) -> Result<PricingOverride, AppError> {
    serde_json::from_str(content)
        .map_err(|e| AppError::ConfigError(format!("Failed to parse pricing JSON: {}", e)))
}

/// Load a pricing override file and merge it onto `base`
///
/// The format is picked from the file extension (`.json`, otherwise TOML).
pub fn load_pricing_file(path: &Path, base: &PricingTable) -> Result<PricingTable, AppError> {
    info!("Loading pricing overrides from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| {
        AppError::ConfigError(format!(
            "Failed to read pricing file {}: {}",
            path.display(),
            e
        ))
    })?;
    debug!("Read {} bytes of pricing data", content.len());

    let overrides = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => parse_pricing_json(&content)?,
        _ => parse_pricing_toml(&content)?,
    };

    overrides.apply(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let overrides = parse_pricing_toml(
            r#"
            index_cost_per_hour = 3.0

            [embedding]
            text = 0.02
            "#,
        )
        .unwrap();

        let pricing = overrides.apply(&PricingTable::default()).unwrap();
        assert_eq!(pricing.index_cost_per_hour, 3.0);
        assert_eq!(pricing.embedding.text, 0.02);
        assert_eq!(pricing.embedding.video, 0.003);
        assert_eq!(pricing.search_cost_per_call, 0.001);
    }

    #[test]
    fn test_empty_override_is_identity() {
        let base = PricingTable::default();
        let pricing = PricingOverride::default().apply(&base).unwrap();
        assert_eq!(pricing, base);
    }

    #[test]
    fn test_unknown_key_rejects_document() {
        let result = parse_pricing_json(r#"{"index_cost_per_hour": 3.0, "storage_fee": 1.0}"#);
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_wrong_type_rejects_document() {
        let result = parse_pricing_toml(r#"search_cost_per_call = "cheap""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_override_rejected_wholesale() {
        let overrides = parse_pricing_json(
            r#"{"index_cost_per_hour": 4.0, "reindex_price_pegasus": -1.0}"#,
        )
        .unwrap();

        match overrides.apply(&PricingTable::default()) {
            Err(AppError::InvalidInput { field, .. }) => {
                assert_eq!(field, "reindex_price_pegasus");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_load_pricing_file_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"output_token_cost_pegasus": 0.004}}"#).unwrap();

        let pricing = load_pricing_file(file.path(), &PricingTable::default()).unwrap();
        assert_eq!(pricing.output_token_cost_pegasus, 0.004);

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "infra_storage_unit_price = 0.1").unwrap();

        let pricing = load_pricing_file(file.path(), &PricingTable::default()).unwrap();
        assert_eq!(pricing.infra_storage_unit_price, 0.1);
    }

    #[test]
    fn test_missing_pricing_file() {
        let result = load_pricing_file(
            Path::new("/nonexistent/pricing.toml"),
            &PricingTable::default(),
        );
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}
