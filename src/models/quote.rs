use serde::Serialize;

use crate::models::item::ItemType;

/// How a single item was priced.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct QuoteLine {
    pub id: String,
    pub item_type: ItemType,
    pub quantity: u32,
    pub weight: Option<f64>,
    pub surcharged: bool,
    pub unit_price: f64,
    pub line_total: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct Quote {
    pub lines: Vec<QuoteLine>,
    pub total: f64,
}

impl Quote {
    pub fn from_lines(lines: Vec<QuoteLine>) -> Self {
        let total = lines.iter().map(|line| line.line_total).sum();
        Self { lines, total }
    }

    pub fn surcharged_count(&self) -> usize {
        self.lines.iter().filter(|line| line.surcharged).count()
    }
}
