pub mod price_calculator;

pub use price_calculator::*;
