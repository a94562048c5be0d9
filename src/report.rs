//! Text rendering of contract estimates

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::pricing::{ContractResult, LineItem, ModelFamily, YearlyBreakdown};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoneyPrecision {
    #[default]
    Cents,
    WholeDollars,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub precision: MoneyPrecision,
    /// Skip line items that are zero for both families
    pub hide_zero: bool,
}

/// Format a USD amount with thousands separators, e.g. `$12,345.67`
pub fn format_money(amount: f64, precision: MoneyPrecision) -> String {
    let negative = amount < 0.0;
    let abs = amount.abs();

    let (whole, cents) = match precision {
        MoneyPrecision::Cents => {
            let total_cents = (abs * 100.0).round() as u128;
            (total_cents / 100, Some(total_cents % 100))
        }
        MoneyPrecision::WholeDollars => (abs.round() as u128, None),
    };

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // Rounds to zero: drop the sign
    let sign = if negative && (whole > 0 || cents.unwrap_or(0) > 0) {
        "-"
    } else {
        ""
    };

    match cents {
        Some(c) => format!("{}${}.{:02}", sign, grouped, c),
        None => format!("{}${}", sign, grouped),
    }
}

/// Build the table for one contract year
pub fn year_table(year: &YearlyBreakdown, options: &ReportOptions) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("LINE ITEM").fg(Color::Cyan)];
    for family in ModelFamily::ALL {
        header.push(Cell::new(family.as_str().to_uppercase()).fg(Color::Cyan));
    }
    table.set_header(header);

    for item in LineItem::ALL {
        let amounts: Vec<f64> = ModelFamily::ALL
            .iter()
            .map(|family| year.family(*family).get(item))
            .collect();

        if options.hide_zero && amounts.iter().all(|amount| *amount == 0.0) {
            continue;
        }

        let mut row = vec![Cell::new(item.label())];
        for amount in amounts {
            row.push(
                Cell::new(format_money(amount, options.precision))
                    .set_alignment(CellAlignment::Right),
            );
        }
        table.add_row(row);
    }

    let mut total_row = vec![Cell::new("Total").fg(Color::Green)];
    for family in ModelFamily::ALL {
        total_row.push(
            Cell::new(format_money(year.family(family).total, options.precision))
                .fg(Color::Green)
                .set_alignment(CellAlignment::Right),
        );
    }
    table.add_row(total_row);

    table
}

/// Render every year followed by the contract summary
pub fn render_report(result: &ContractResult, discount: f64, options: &ReportOptions) -> String {
    let mut out = String::new();

    for year in &result.years {
        out.push_str(&format!("Year {}\n", year.year));
        out.push_str(&year_table(year, options).to_string());
        out.push_str("\n\n");
    }

    out.push_str(&render_summary(result, discount, options.precision));
    out
}

/// Contract-level totals and discount
pub fn render_summary(result: &ContractResult, discount: f64, precision: MoneyPrecision) -> String {
    let mut lines = vec![
        "Contract Summary:".to_string(),
        format!(
            "  Contract Years:     {}",
            result.years.len()
        ),
        format!(
            "  Marengo Total:      {}",
            format_money(result.marengo_total, precision)
        ),
        format!(
            "  Pegasus Total:      {}",
            format_money(result.pegasus_total, precision)
        ),
        format!(
            "  Total Cost:         {}",
            format_money(result.total_cost, precision)
        ),
    ];

    if discount > 0.0 {
        lines.push(format!(
            "  Discount ({:.1}%):   -{}",
            discount * 100.0,
            format_money(result.discount_amount, precision)
        ));
    }

    lines.push(format!(
        "  Final Cost:         {}",
        format_money(result.final_cost, precision)
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{compute, PricingTable};
    use crate::usage::UsageInput;

    #[test]
    fn test_format_money_cents() {
        assert_eq!(format_money(0.0, MoneyPrecision::Cents), "$0.00");
        assert_eq!(format_money(5.5, MoneyPrecision::Cents), "$5.50");
        assert_eq!(format_money(999.999, MoneyPrecision::Cents), "$1,000.00");
        assert_eq!(format_money(68187.0, MoneyPrecision::Cents), "$68,187.00");
        assert_eq!(format_money(1234567.891, MoneyPrecision::Cents), "$1,234,567.89");
        assert_eq!(format_money(-12.5, MoneyPrecision::Cents), "-$12.50");
        assert_eq!(format_money(-0.001, MoneyPrecision::Cents), "$0.00");
    }

    #[test]
    fn test_format_money_whole_dollars() {
        assert_eq!(format_money(8400.000000000002, MoneyPrecision::WholeDollars), "$8,400");
        assert_eq!(format_money(999.5, MoneyPrecision::WholeDollars), "$1,000");
        assert_eq!(format_money(100.0, MoneyPrecision::WholeDollars), "$100");
    }

    fn sample_usage() -> UsageInput {
        let mut usage = UsageInput::default();
        usage.marengo.video_hours = 10000.0;
        usage.marengo.search_calls_per_day = 2000.0;
        usage.contract.contract_years = 2;
        usage
    }

    #[test]
    fn test_year_table_lists_all_items() {
        let result = compute(&sample_usage(), &PricingTable::default());
        let rendered = year_table(&result.years[0], &ReportOptions::default()).to_string();

        for item in LineItem::ALL {
            assert!(rendered.contains(item.label()), "missing {}", item.label());
        }
        assert!(rendered.contains("MARENGO"));
        assert!(rendered.contains("$25,000.00"));
    }

    #[test]
    fn test_year_table_hide_zero() {
        let result = compute(&sample_usage(), &PricingTable::default());
        let options = ReportOptions {
            hide_zero: true,
            ..ReportOptions::default()
        };

        let rendered = year_table(&result.years[1], &options).to_string();
        assert!(!rendered.contains("Indexing"));
        assert!(!rendered.contains("Output Tokens"));
        assert!(rendered.contains("Search"));
        assert!(rendered.contains("Infra+Storage"));
        assert!(rendered.contains("Total"));
    }

    #[test]
    fn test_render_report_summary() {
        let mut usage = sample_usage();
        usage.contract.enterprise_discount = 0.1;
        let result = compute(&usage, &PricingTable::default());

        let report = render_report(&result, 0.1, &ReportOptions::default());
        assert!(report.contains("Year 1"));
        assert!(report.contains("Year 2"));
        assert!(!report.contains("Year 3"));
        assert!(report.contains("Discount (10.0%)"));
        assert!(report.contains("Final Cost:"));
    }

    #[test]
    fn test_summary_without_discount_has_no_discount_line() {
        let result = compute(&sample_usage(), &PricingTable::default());
        let summary = render_summary(&result, 0.0, MoneyPrecision::WholeDollars);
        assert!(!summary.contains("Discount"));
        assert!(summary.contains("Contract Years:     2"));
    }
}
