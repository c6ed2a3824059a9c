use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use console::{style, Emoji};
use tracing::{error, info};

use crate::{
    cli::args::*,
    models::Quote,
    providers::InMemoryWeightProvider,
    services::PriceCalculator,
    utils::{
        formatting::{format_quote_table, format_rules_table, format_total},
        load_items, Config,
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");

pub struct CliApp {
    config: Config,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self, args: Args) -> Result<()> {
        match args.command {
            Commands::Price {
                items,
                weights,
                format,
                detailed,
            } => self.handle_price_command(&items, weights, format, detailed),
            Commands::Rules => self.handle_rules_command(),
        }
    }

    fn handle_price_command(
        &self,
        items_path: &Path,
        weights: Option<PathBuf>,
        format: OutputFormat,
        detailed: bool,
    ) -> Result<()> {
        info!("Pricing items from {}", items_path.display());

        let items = load_items(items_path)
            .with_context(|| format!("Failed to load items from {}", items_path.display()))?;
        let calculator = self.build_calculator(weights)?;

        let quote = calculator.quote(&items).map_err(|e| {
            error!("Pricing failed: {}", e);
            println!("{} {}", CROSS, style(&e).red());
            e
        })?;

        info!(
            "Priced {} items for a total of {:.2}",
            quote.lines.len(),
            quote.total
        );
        self.print_quote(&quote, format, detailed)
    }

    /// The command line flag wins over `PRICING_WEIGHTS_FILE`.
    fn build_calculator(&self, weights: Option<PathBuf>) -> Result<PriceCalculator> {
        let weights_path = weights.or_else(|| self.config.weights_file.clone());

        match weights_path {
            Some(path) => {
                let provider = InMemoryWeightProvider::from_file(&path)
                    .with_context(|| format!("Failed to load weights from {}", path.display()))?;
                Ok(PriceCalculator::with_weight_provider(Arc::new(provider)))
            }
            None => Ok(PriceCalculator::new()),
        }
    }

    fn print_quote(&self, quote: &Quote, format: OutputFormat, detailed: bool) -> Result<()> {
        match format {
            OutputFormat::Json => {
                let output = if detailed {
                    serde_json::to_string_pretty(quote)?
                } else {
                    serde_json::to_string_pretty(&serde_json::json!({ "total": quote.total }))?
                };
                println!("{}", output);
            }
            OutputFormat::Table => {
                if detailed {
                    if quote.lines.is_empty() {
                        println!("{} No items to price", INFO);
                    } else {
                        println!("{}", format_quote_table(quote));
                    }
                }
                println!("{} {}", CHECKMARK, format_total(quote.total));
            }
        }
        Ok(())
    }

    fn handle_rules_command(&self) -> Result<()> {
        println!("{} {}", INFO, style("Pricing rules (per unit)").bold());
        println!("{}", format_rules_table());
        println!(
            "{}",
            style("Items without weight information are charged the surcharge.").dim()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_json(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_build_calculator_without_weights() {
        let app = CliApp::new(Config::default());
        let calculator = app.build_calculator(None).unwrap();
        assert!(!calculator.has_weight_provider());
    }

    #[test]
    fn test_build_calculator_falls_back_to_config_weights() {
        let weights = write_json(r#"{"ART1234": 50}"#);
        let app = CliApp::new(Config {
            weights_file: Some(weights.path().to_path_buf()),
            ..Config::default()
        });

        let calculator = app.build_calculator(None).unwrap();
        assert!(calculator.has_weight_provider());
    }

    #[test]
    fn test_build_calculator_reports_missing_weights_file() {
        let app = CliApp::new(Config::default());
        let result = app.build_calculator(Some(PathBuf::from("/nonexistent/weights.json")));
        assert!(result.is_err());
    }

    #[test]
    fn test_price_command_fails_on_invalid_item_type() {
        let items = write_json(r#"[{"type": "TRUCK"}, {"type": "DUCK"}]"#);
        let app = CliApp::new(Config::default());

        let err = app
            .handle_price_command(items.path(), None, OutputFormat::Json, false)
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid item type: DUCK");
    }

    #[test]
    fn test_price_command_succeeds() {
        let items = write_json(r#"[{"id": "ART1234", "type": "truck", "quantity": 2}]"#);
        let weights = write_json(r#"{"ART1234": 50}"#);
        let app = CliApp::new(Config::default());

        let result = app.handle_price_command(
            items.path(),
            Some(weights.path().to_path_buf()),
            OutputFormat::Table,
            true,
        );
        assert!(result.is_ok());
    }
}
