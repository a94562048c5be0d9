use crate::pricing::models::{ContractResult, CostBreakdown, PricingTable, YearlyBreakdown};
use crate::usage::{EmbeddingUsage, UsageInput};

const DAYS_PER_YEAR: f64 = 365.0;
const MONTHS_PER_YEAR: f64 = 12.0;
/// Token prices are quoted per this many tokens
const TOKENS_PER_PRICE_UNIT: f64 = 1000.0;

/// Compute the year-by-year cost breakdown for a contract
///
/// Pure and infallible: inputs are expected to have passed
/// [`crate::validation::validate_usage`] and
/// [`crate::validation::validate_pricing`]. A contract length of zero is
/// treated as one year.
pub fn compute(usage: &UsageInput, pricing: &PricingTable) -> ContractResult {
    let contract_years = usage.contract.contract_years.max(1);
    let frequency = usage.contract.reindex_frequency_per_year;

    let mut years = Vec::with_capacity(contract_years as usize);
    let mut marengo_total = 0.0;
    let mut pegasus_total = 0.0;
    let mut total_cost = 0.0;

    for year in 1..=contract_years {
        let breakdown = compute_year(usage, pricing, year, frequency);

        marengo_total += breakdown.marengo.total;
        pegasus_total += breakdown.pegasus.total;
        total_cost += breakdown.marengo.total + breakdown.pegasus.total;

        years.push(breakdown);
    }

    // Discount applies once to the contract total, never per year
    let discount_amount = total_cost * usage.contract.enterprise_discount;
    let final_cost = total_cost - discount_amount;

    ContractResult {
        years,
        marengo_total,
        pegasus_total,
        total_cost,
        discount_amount,
        final_cost,
    }
}

fn compute_year(
    usage: &UsageInput,
    pricing: &PricingTable,
    year: u32,
    frequency: u32,
) -> YearlyBreakdown {
    let is_first = year == 1;
    let reindex = reindex_times(is_first, frequency);

    // Marengo: no generative token usage
    let marengo_hours = usage.marengo.video_hours;
    let mut marengo = CostBreakdown {
        indexing: indexing_cost(is_first, marengo_hours, pricing.index_cost_per_hour),
        reindexing: marengo_hours * pricing.reindex_price_marengo * reindex as f64,
        embedding: base_embedding_total(&usage.embeddings, pricing)
            * embedding_passes(is_first, reindex) as f64,
        search: usage.marengo.search_calls_per_day * pricing.search_cost_per_call * DAYS_PER_YEAR,
        infra_storage: infra_storage_cost(marengo_hours, pricing.infra_storage_unit_price),
        ..CostBreakdown::zero()
    };
    marengo.calculate_total();

    // Pegasus: no embedding or search
    let pegasus_hours = usage.pegasus.video_hours;
    let calls = usage.pegasus.generate_calls_per_day;
    let mut pegasus = CostBreakdown {
        indexing: indexing_cost(is_first, pegasus_hours, pricing.index_cost_per_hour),
        reindexing: pegasus_hours * pricing.reindex_price_pegasus * reindex as f64,
        input_tokens: token_cost(
            calls,
            usage.pegasus.input_tokens_per_call,
            pricing.input_token_cost_pegasus,
        ),
        output_tokens: token_cost(
            calls,
            usage.pegasus.output_tokens_per_call,
            pricing.output_token_cost_pegasus,
        ),
        infra_storage: infra_storage_cost(pegasus_hours, pricing.infra_storage_unit_price),
        ..CostBreakdown::zero()
    };
    pegasus.calculate_total();

    YearlyBreakdown {
        year,
        marengo,
        pegasus,
    }
}

/// Number of billed reindex passes in a year
///
/// The first scheduled reindex of year one is covered by the initial
/// indexing pass.
pub fn reindex_times(is_first: bool, frequency: u32) -> u32 {
    if is_first {
        frequency.saturating_sub(1)
    } else {
        frequency
    }
}

/// Number of embedding passes in a year: the initial pass in year one,
/// plus one per billed reindex.
pub fn embedding_passes(is_first: bool, reindex_times: u32) -> u32 {
    if is_first {
        1 + reindex_times
    } else {
        reindex_times
    }
}

/// Cost of a single embedding pass over all configured units
pub fn base_embedding_total(embeddings: &EmbeddingUsage, pricing: &PricingTable) -> f64 {
    embeddings.video_count * pricing.embedding.video
        + embeddings.audio_count_k * pricing.embedding.audio
        + embeddings.image_count_k * pricing.embedding.image
        + embeddings.text_count_k * pricing.embedding.text
}

fn indexing_cost(is_first: bool, video_hours: f64, price_per_hour: f64) -> f64 {
    if is_first {
        video_hours * price_per_hour
    } else {
        0.0
    }
}

fn infra_storage_cost(video_hours: f64, monthly_unit_price: f64) -> f64 {
    video_hours * monthly_unit_price * MONTHS_PER_YEAR
}

fn token_cost(calls_per_day: f64, tokens_per_call: f64, price_per_1k: f64) -> f64 {
    calls_per_day * DAYS_PER_YEAR * tokens_per_call / TOKENS_PER_PRICE_UNIT * price_per_1k
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_reindex_times_first_year_covers_one_pass() {
        assert_eq!(reindex_times(true, 0), 0);
        assert_eq!(reindex_times(true, 1), 0);
        assert_eq!(reindex_times(true, 4), 3);
        assert_eq!(reindex_times(false, 0), 0);
        assert_eq!(reindex_times(false, 4), 4);
    }

    #[test]
    fn test_embedding_passes() {
        assert_eq!(embedding_passes(true, 0), 1);
        assert_eq!(embedding_passes(true, 2), 3);
        assert_eq!(embedding_passes(false, 0), 0);
        assert_eq!(embedding_passes(false, 2), 2);
    }

    #[test]
    fn test_base_embedding_total_uses_thousands_directly() {
        let embeddings = EmbeddingUsage {
            video_count: 1000.0,
            audio_count_k: 10.0,
            image_count_k: 2.0,
            text_count_k: 100.0,
        };
        // 1000 * 0.003 + 10 * 0.01 + 2 * 0.05 + 100 * 0.01
        assert_close(
            base_embedding_total(&embeddings, &PricingTable::default()),
            4.2,
        );
    }

    #[test]
    fn test_token_cost() {
        assert_close(token_cost(2000.0, 500.0, 0.001), 365.0);
        assert_close(token_cost(2000.0, 200.0, 0.002), 292.0);
        assert_close(token_cost(0.0, 200.0, 0.002), 0.0);
    }

    #[test]
    fn test_zero_contract_years_is_clamped() {
        let mut usage = UsageInput::default();
        usage.contract.contract_years = 0;
        usage.marengo.video_hours = 1.0;

        let result = compute(&usage, &PricingTable::default());
        assert_eq!(result.years.len(), 1);
        assert_eq!(result.years[0].year, 1);
        assert_close(result.years[0].marengo.indexing, 2.5);
    }

    #[test]
    fn test_marengo_token_price_is_never_billed() {
        let mut usage = UsageInput::default();
        usage.marengo.video_hours = 50.0;
        usage.marengo.search_calls_per_day = 100.0;
        let pricing = PricingTable {
            input_token_cost_marengo: 99.0,
            ..PricingTable::default()
        };

        let result = compute(&usage, &pricing);
        assert_eq!(result.years[0].marengo.input_tokens, 0.0);
        assert_eq!(result.years[0].marengo.output_tokens, 0.0);
    }

    #[test]
    fn test_pegasus_never_carries_embedding_or_search() {
        let mut usage = UsageInput::default();
        usage.pegasus.video_hours = 10.0;
        usage.marengo.search_calls_per_day = 100.0;
        usage.embeddings.video_count = 1000.0;
        usage.contract.contract_years = 3;
        usage.contract.reindex_frequency_per_year = 2;

        let result = compute(&usage, &PricingTable::default());
        for year in &result.years {
            assert_eq!(year.pegasus.embedding, 0.0);
            assert_eq!(year.pegasus.search, 0.0);
        }
    }

    #[test]
    fn test_multi_reindex_contract() {
        let mut usage = UsageInput::default();
        usage.marengo.video_hours = 100.0;
        usage.embeddings.video_count = 1000.0; // $3 per pass
        usage.contract.contract_years = 2;
        usage.contract.reindex_frequency_per_year = 3;

        let result = compute(&usage, &PricingTable::default());
        let first = &result.years[0].marengo;
        let second = &result.years[1].marengo;

        // Year 1: two billed reindexes, three embedding passes
        assert_close(first.indexing, 250.0);
        assert_close(first.reindexing, 500.0);
        assert_close(first.embedding, 9.0);

        // Year 2: three reindexes, three embedding passes, no indexing
        assert_close(second.indexing, 0.0);
        assert_close(second.reindexing, 750.0);
        assert_close(second.embedding, 9.0);
    }

    #[test]
    fn test_discount_applied_once_to_contract_total() {
        let mut usage = UsageInput::default();
        usage.marengo.video_hours = 100.0;
        usage.contract.contract_years = 3;
        usage.contract.enterprise_discount = 0.25;

        let result = compute(&usage, &PricingTable::default());
        let summed: f64 = result.years.iter().map(|y| y.total()).sum();

        assert_close(result.total_cost, summed);
        assert_close(result.discount_amount, summed * 0.25);
        assert_close(result.final_cost, summed * 0.75);
        assert_close(result.marengo_total + result.pegasus_total, result.total_cost);
    }
}
