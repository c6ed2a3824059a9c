use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

use item_price_calculator::{
    providers::WeightTableError, utils::load_items, InMemoryWeightProvider, PriceCalculator,
    WeightProvider,
};

fn write_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_load_weight_table_from_file() {
    let file = write_file(r#"{"ART1234": 105.0, "ART5678": 50, "ART9012": 0}"#);

    let provider = InMemoryWeightProvider::from_file(file.path()).unwrap();

    assert_eq!(provider.len(), 3);
    assert_eq!(provider.weight("ART1234"), 105.0);
    assert_eq!(provider.weight("ART5678"), 50.0);
    assert_eq!(provider.weight("ART9012"), 0.0);
    assert_eq!(provider.weight("missing"), 0.0);
}

#[test]
fn test_weight_table_rejects_negative_entries() {
    let file = write_file(r#"{"ART1234": -1}"#);

    let result = InMemoryWeightProvider::from_file(file.path());

    assert!(matches!(
        result,
        Err(WeightTableError::InvalidWeight { ref id, weight }) if id == "ART1234" && weight == -1.0
    ));
}

#[test]
fn test_weight_table_missing_file() {
    let result = InMemoryWeightProvider::from_file("/nonexistent/weights.json");
    assert!(matches!(result, Err(WeightTableError::Io { .. })));
}

#[test]
fn test_price_items_from_files() {
    let items_file = write_file(
        r#"[
            {"id": "ART1234", "type": "TRUCK", "quantity": 1},
            {"id": "ART5678", "type": "truck", "quantity": 2},
            {"id": "ART9012", "type": "Parcel", "quantity": 4},
            {"id": "ART3456", "type": "PARCEL"}
        ]"#,
    );
    let weights_file = write_file(r#"{"ART1234": 105, "ART5678": 50, "ART9012": 10}"#);

    let items = load_items(items_file.path()).unwrap();
    let provider = InMemoryWeightProvider::from_file(weights_file.path()).unwrap();
    let calculator = PriceCalculator::with_weight_provider(Arc::new(provider));

    let quote = calculator.quote(&items).unwrap();

    // ART9012 sits exactly on the limit, ART3456 has no registered weight
    assert_eq!(quote.total, 150.0 + 200.0 + 100.0 + 50.0);
    assert_eq!(quote.surcharged_count(), 2);
}

#[test]
fn test_shared_provider_across_calculators() {
    let provider: Arc<dyn WeightProvider> =
        Arc::new(InMemoryWeightProvider::from_json_str(r#"{"ART1234": 200}"#).unwrap());
    let first = PriceCalculator::with_weight_provider(provider.clone());
    let second = PriceCalculator::with_weight_provider(provider);

    let items = load_items(write_file(r#"[{"id": "ART1234", "type": "TRUCK"}]"#).path()).unwrap();

    assert_eq!(first.calculate_price(&items), Ok(150.0));
    assert_eq!(second.calculate_price(&items), Ok(150.0));
}
