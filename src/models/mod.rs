pub mod item;
pub mod quote;

pub use item::*;
pub use quote::*;
