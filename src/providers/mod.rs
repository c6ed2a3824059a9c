pub mod weight_provider;

pub use weight_provider::*;
