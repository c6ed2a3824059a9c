pub mod config;
pub mod formatting;
pub mod input;

// Re-exports
pub use config::*;
pub use input::*;
