use console::style;
use tabled::{
    settings::{Alignment, Style},
    Table, Tabled,
};

use crate::models::{ItemType, Quote};

#[derive(Tabled)]
struct QuoteTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    item_type: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Surcharge")]
    surcharge: String,
    #[tabled(rename = "Unit Price")]
    unit_price: String,
    #[tabled(rename = "Line Total")]
    line_total: String,
}

#[derive(Tabled)]
struct RuleTableRow {
    #[tabled(rename = "Type")]
    item_type: String,
    #[tabled(rename = "Base Price")]
    base_price: String,
    #[tabled(rename = "Weight Limit")]
    weight_limit: String,
    #[tabled(rename = "Surcharge")]
    surcharge: String,
}

pub fn format_quote_table(quote: &Quote) -> String {
    if quote.lines.is_empty() {
        return String::new();
    }

    let rows: Vec<QuoteTableRow> = quote
        .lines
        .iter()
        .map(|line| QuoteTableRow {
            id: if line.id.is_empty() {
                "-".to_string()
            } else if line.id.len() > 20 {
                format!("{}...", line.id.chars().take(17).collect::<String>())
            } else {
                line.id.clone()
            },
            item_type: line.item_type.to_string(),
            quantity: line.quantity,
            weight: line
                .weight
                .map(|w| format!("{:.1}", w))
                .unwrap_or_else(|| "unknown".to_string()),
            surcharge: if line.surcharged { "yes" } else { "no" }.to_string(),
            unit_price: format_price(line.unit_price),
            line_total: format_price(line.line_total),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    table.to_string()
}

pub fn format_rules_table() -> String {
    let rows: Vec<RuleTableRow> = ItemType::ALL
        .iter()
        .map(|item_type| {
            let rule = item_type.rule();
            RuleTableRow {
                item_type: item_type.to_string(),
                base_price: format_price(rule.base_price),
                weight_limit: format!("> {:.0}", rule.weight_limit),
                surcharge: format_price(rule.surcharge),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    table.to_string()
}

pub fn format_total(total: f64) -> String {
    format!("{}: {}", style("Total").bold(), style(format_price(total)).green())
}

pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}
