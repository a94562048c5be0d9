pub mod calculator;
pub mod loader;
pub mod models;

pub use calculator::compute;
pub use loader::{load_pricing_file, parse_pricing_json, parse_pricing_toml, PricingOverride};
pub use models::{
    ContractResult, CostBreakdown, EmbeddingPricing, LineItem, ModelFamily, PricingTable,
    YearlyBreakdown,
};
