use std::sync::Arc;
use tracing::{debug, trace};

use crate::{
    models::{Item, ItemType, PricingError, Quote, QuoteLine},
    providers::WeightProvider,
};

pub struct PriceCalculator {
    weight_provider: Option<Arc<dyn WeightProvider>>,
}

impl Default for PriceCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceCalculator {
    /// Calculator that prices items by their inline weight.
    pub fn new() -> Self {
        Self {
            weight_provider: None,
        }
    }

    /// Calculator that looks up every item's weight through `weight_provider`.
    /// Inline item weights are ignored.
    pub fn with_weight_provider(weight_provider: Arc<dyn WeightProvider>) -> Self {
        Self {
            weight_provider: Some(weight_provider),
        }
    }

    pub fn has_weight_provider(&self) -> bool {
        self.weight_provider.is_some()
    }

    /// Total price of `items`, or the first invalid item type in sequence order.
    pub fn calculate_price(&self, items: &[Item]) -> Result<f64, PricingError> {
        self.quote(items).map(|quote| quote.total)
    }

    /// Same as [`PriceCalculator::calculate_price`], keeping the per-item breakdown.
    pub fn quote(&self, items: &[Item]) -> Result<Quote, PricingError> {
        let lines = items
            .iter()
            .map(|item| self.price_item(item))
            .collect::<Result<Vec<_>, _>>()?;

        let quote = Quote::from_lines(lines);
        debug!(
            "Priced {} items, {} surcharged, total {:.2}",
            quote.lines.len(),
            quote.surcharged_count(),
            quote.total
        );
        Ok(quote)
    }

    fn price_item(&self, item: &Item) -> Result<QuoteLine, PricingError> {
        // Type is checked before the weight lookup so an invalid item never reaches the provider.
        let item_type: ItemType = item.item_type.parse()?;
        let rule = item_type.rule();

        let weight = self.resolve_weight(item);
        let quantity = item.effective_quantity();
        let unit_price = rule.unit_price(weight);

        trace!(
            "Item '{}' ({}) x{} weight {:?}: unit price {}",
            item.id,
            item_type,
            quantity,
            weight,
            unit_price
        );

        Ok(QuoteLine {
            id: item.id.clone(),
            item_type,
            quantity,
            weight,
            surcharged: rule.exceeds_limit(weight),
            unit_price,
            line_total: f64::from(quantity) * unit_price,
        })
    }

    fn resolve_weight(&self, item: &Item) -> Option<f64> {
        let raw = match &self.weight_provider {
            Some(provider) => Some(provider.weight(&item.id)),
            None => item.weight,
        };
        raw.and_then(known_weight)
    }
}

/// Zero, negative and non-finite weights carry no information.
fn known_weight(weight: f64) -> Option<f64> {
    (weight.is_finite() && weight > 0.0).then_some(weight)
}
