//! Tests for loading catalogs from disk

use super::super::load_catalog;
use super::{catalog_row, create_temp_csv, expected_header};
use crate::Error;
use crate::app::models::CellValue;
use crate::app::services::normalizer::{NormalizeStats, normalize_record};
use std::path::Path;

#[test]
fn test_load_catalog_missing_file() {
    let result = load_catalog(Path::new("/definitely/not/here/products.xlsx"));
    match result {
        Err(Error::FileNotFound { path }) => assert!(path.ends_with("products.xlsx")),
        other => panic!("Expected file not found, got {:?}", other),
    }
}

#[test]
fn test_load_catalog_csv() {
    let content = format!(
        "{}\n{}\n{}\n",
        expected_header(),
        catalog_row(1, "Remera", "\"1.250,50\"", "Sí"),
        catalog_row(2, "Buzo", "1500", "0"),
    );
    let file = create_temp_csv(&content);

    let records = load_catalog(file.path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].row_number, 2);
    assert_eq!(records[0].item_type, CellValue::Text("Remera".to_string()));
    assert_eq!(records[0].price_50, CellValue::Text("1.250,50".to_string()));
    assert_eq!(records[0].price_100, CellValue::Text("900,00".to_string()));
    assert_eq!(records[0].price_200, CellValue::Text("800".to_string()));
    assert_eq!(records[0].available, CellValue::Text("Sí".to_string()));
    assert_eq!(records[1].price_50, CellValue::Text("1500".to_string()));
    // Non-price columns keep numeric inference
    assert_eq!(records[1].quantity, CellValue::Int(10));
    assert_eq!(records[1].available, CellValue::Int(0));
}

#[test]
fn test_load_catalog_csv_prices_use_thousands_separator() {
    let content = format!(
        "{}\n1,Remera,M,Azul,5,1.250,\"1.250,00\",1250,Sí,Remeras,x\n",
        expected_header()
    );
    let file = create_temp_csv(&content);

    let records = load_catalog(file.path()).unwrap();
    let mut stats = NormalizeStats::default();
    let product = normalize_record(&records[0], &mut stats);

    assert_eq!(records[0].price_50, CellValue::Text("1.250".to_string()));
    assert_eq!(product.price_50_cents, 125000);
    assert_eq!(product.price_100_cents, 125000);
    assert_eq!(product.price_200_cents, 125000);
}

#[test]
fn test_load_catalog_skips_blank_rows() {
    let content = format!(
        "{}\n{}\n,,,,,,,,,,\n{}\n",
        expected_header(),
        catalog_row(1, "Remera", "100", "1"),
        catalog_row(2, "Buzo", "200", "1"),
    );
    let file = create_temp_csv(&content);

    let records = load_catalog(file.path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].row_number, 4);
}

#[test]
fn test_load_catalog_schema_mismatch() {
    let header = expected_header().replace(",COLOR", "");
    let file = create_temp_csv(&format!("{}\n1,Remera,M,10\n", header));

    let err = load_catalog(file.path()).unwrap_err();
    let message = err.to_string();
    assert!(matches!(err, Error::SchemaMismatch { .. }));
    assert!(message.contains("COLOR"));
    assert!(message.contains("TALLA"));
}

#[test]
fn test_load_catalog_unsupported_extension() {
    let file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    let err = load_catalog(file.path()).unwrap_err();
    assert!(matches!(err, Error::Spreadsheet { .. }));
}

#[test]
fn test_load_catalog_header_only() {
    let file = create_temp_csv(&format!("{}\n", expected_header()));
    let records = load_catalog(file.path()).unwrap();
    assert!(records.is_empty());
}
