pub mod cli;
pub mod models;
pub mod providers;
pub mod services;
pub mod utils;

pub use models::{Item, ItemType, PricingError, PricingRule, Quote, QuoteLine};
pub use providers::{InMemoryWeightProvider, WeightProvider};
pub use services::PriceCalculator;
