use serde::{Deserialize, Serialize};

/// Usage volumes and contract terms for a single estimate
///
/// Every section falls back to its default when omitted, so a partially
/// filled form (or an empty JSON object) is a valid request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct UsageInput {
    pub marengo: MarengoUsage,
    pub pegasus: PegasusUsage,
    pub embeddings: EmbeddingUsage,
    pub contract: ContractTerms,
}

/// Indexing model usage
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarengoUsage {
    pub video_hours: f64,
    pub search_calls_per_day: f64,
}

/// Generative model usage
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PegasusUsage {
    pub video_hours: f64,
    pub generate_calls_per_day: f64,
    pub input_tokens_per_call: f64,
    pub output_tokens_per_call: f64,
}

/// Embedding volumes, billed to the indexing model
///
/// `*_count_k` fields are already expressed in thousands of units.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmbeddingUsage {
    pub video_count: f64,
    pub audio_count_k: f64,
    pub image_count_k: f64,
    pub text_count_k: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContractTerms {
    pub contract_years: u32,
    pub reindex_frequency_per_year: u32,
    /// Fraction in [0, 1] taken off the contract total
    pub enterprise_discount: f64,
}

impl Default for ContractTerms {
    fn default() -> Self {
        Self {
            contract_years: 1,
            reindex_frequency_per_year: 0,
            enterprise_discount: 0.0,
        }
    }
}
