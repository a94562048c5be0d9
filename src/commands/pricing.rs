use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::path::{Path, PathBuf};
use tracing::info;
use video_cost_estimator::{
    config,
    pricing::{load_pricing_file, PricingTable},
};

/// Execute the pricing show command
///
/// Displays the effective unit prices, with an optional override file merged in
pub fn show(config_path: &Path, overrides: Option<PathBuf>) -> Result<()> {
    let cfg = config::load_config(config_path)?;

    let pricing = match overrides {
        Some(path) => load_pricing_file(&path, &cfg.pricing)?,
        None => cfg.pricing,
    };

    println!("{}", "Effective Pricing (USD):".green().bold());
    println!("{}", pricing_table(&pricing));

    info!("Pricing table displayed");
    Ok(())
}

fn pricing_table(pricing: &PricingTable) -> Table {
    let rows = [
        ("Indexing", "per video-hour", pricing.index_cost_per_hour),
        ("Infra+Storage", "per video-hour per month", pricing.infra_storage_unit_price),
        ("Search", "per call", pricing.search_cost_per_call),
        ("Reindex (Marengo)", "per video-hour", pricing.reindex_price_marengo),
        ("Reindex (Pegasus)", "per video-hour", pricing.reindex_price_pegasus),
        ("Input Tokens (Marengo)", "per 1K tokens", pricing.input_token_cost_marengo),
        ("Input Tokens (Pegasus)", "per 1K tokens", pricing.input_token_cost_pegasus),
        ("Output Tokens (Pegasus)", "per 1K tokens", pricing.output_token_cost_pegasus),
        ("Embedding: Video", "per video", pricing.embedding.video),
        ("Embedding: Audio", "per 1K units", pricing.embedding.audio),
        ("Embedding: Image", "per 1K units", pricing.embedding.image),
        ("Embedding: Text", "per 1K units", pricing.embedding.text),
    ];

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ITEM").fg(Color::Cyan),
        Cell::new("UNIT").fg(Color::Cyan),
        Cell::new("PRICE").fg(Color::Cyan),
    ]);

    for (item, unit, price) in rows {
        table.add_row(vec![
            Cell::new(item),
            Cell::new(unit),
            Cell::new(format!("${:.4}", price)).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_table_lists_every_price() {
        let rendered = pricing_table(&PricingTable::default()).to_string();

        assert!(rendered.contains("$2.5000"));
        assert!(rendered.contains("$0.0700"));
        assert!(rendered.contains("$0.0030"));
        assert!(rendered.contains("Output Tokens (Pegasus)"));
        assert!(rendered.contains("Embedding: Text"));
    }
}
