use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit prices used by the cost engine (USD)
///
/// Token prices are per 1,000 tokens. Audio, image and text embedding prices
/// are per 1,000 units; video embedding is priced per unit.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PricingTable {
    pub index_cost_per_hour: f64,
    /// Monthly fee per video-hour
    pub infra_storage_unit_price: f64,
    pub search_cost_per_call: f64,
    /// Per video-hour, per reindex pass
    pub reindex_price_marengo: f64,
    /// Per video-hour, per reindex pass
    pub reindex_price_pegasus: f64,
    /// Not billed: the indexing model has no generative token usage
    pub input_token_cost_marengo: f64,
    pub input_token_cost_pegasus: f64,
    pub output_token_cost_pegasus: f64,
    pub embedding: EmbeddingPricing,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            index_cost_per_hour: 2.50,
            infra_storage_unit_price: 0.070,
            search_cost_per_call: 0.001,
            reindex_price_marengo: 2.5,
            reindex_price_pegasus: 2.5,
            input_token_cost_marengo: 0.001,
            input_token_cost_pegasus: 0.001,
            output_token_cost_pegasus: 0.002,
            embedding: EmbeddingPricing::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EmbeddingPricing {
    pub video: f64,
    pub audio: f64,
    pub image: f64,
    pub text: f64,
}

impl Default for EmbeddingPricing {
    fn default() -> Self {
        Self {
            video: 0.003,
            audio: 0.010,
            image: 0.050,
            text: 0.010,
        }
    }
}

/// The two billed model families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    /// Indexing/search model; owns embedding and search costs
    Marengo,
    /// Generative model; owns token costs
    Pegasus,
}

impl ModelFamily {
    pub const ALL: [ModelFamily; 2] = [ModelFamily::Marengo, ModelFamily::Pegasus];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Marengo => "Marengo",
            Self::Pegasus => "Pegasus",
        }
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Billed line items, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineItem {
    Indexing,
    Reindexing,
    InputTokens,
    OutputTokens,
    Embedding,
    Search,
    InfraStorage,
}

impl LineItem {
    pub const ALL: [LineItem; 7] = [
        LineItem::Indexing,
        LineItem::Reindexing,
        LineItem::InputTokens,
        LineItem::OutputTokens,
        LineItem::Embedding,
        LineItem::Search,
        LineItem::InfraStorage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Indexing => "Indexing",
            Self::Reindexing => "Reindexing",
            Self::InputTokens => "Input Tokens",
            Self::OutputTokens => "Output Tokens",
            Self::Embedding => "Embedding",
            Self::Search => "Search",
            Self::InfraStorage => "Infra+Storage",
        }
    }
}

/// One family's costs for one contract year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub indexing: f64,
    pub reindexing: f64,
    pub input_tokens: f64,
    pub output_tokens: f64,
    pub embedding: f64,
    pub search: f64,
    pub infra_storage: f64,
    pub total: f64,
}

impl CostBreakdown {
    /// Create a zero-cost breakdown
    pub fn zero() -> Self {
        Self::default()
    }

    /// Calculate total cost from components
    pub fn calculate_total(&mut self) {
        self.total = self.indexing
            + self.reindexing
            + self.input_tokens
            + self.output_tokens
            + self.embedding
            + self.search
            + self.infra_storage;
    }

    pub fn get(&self, item: LineItem) -> f64 {
        match item {
            LineItem::Indexing => self.indexing,
            LineItem::Reindexing => self.reindexing,
            LineItem::InputTokens => self.input_tokens,
            LineItem::OutputTokens => self.output_tokens,
            LineItem::Embedding => self.embedding,
            LineItem::Search => self.search,
            LineItem::InfraStorage => self.infra_storage,
        }
    }
}

/// Costs for a single contract year (1-based)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyBreakdown {
    pub year: u32,
    pub marengo: CostBreakdown,
    pub pegasus: CostBreakdown,
}

impl YearlyBreakdown {
    pub fn family(&self, family: ModelFamily) -> &CostBreakdown {
        match family {
            ModelFamily::Marengo => &self.marengo,
            ModelFamily::Pegasus => &self.pegasus,
        }
    }

    /// Both families' totals for the year
    pub fn total(&self) -> f64 {
        self.marengo.total + self.pegasus.total
    }
}

/// Full contract estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractResult {
    pub years: Vec<YearlyBreakdown>,
    /// Sum of Marengo totals over all years
    pub marengo_total: f64,
    /// Sum of Pegasus totals over all years
    pub pegasus_total: f64,
    pub total_cost: f64,
    pub discount_amount: f64,
    pub final_cost: f64,
}
