//! Test utilities for catalog loading
//!
//! Most fixtures are written as CSV on the fly; workbook behavior is covered
//! by the checked-in `fixtures/products.xlsx`.

use crate::constants::EXPECTED_COLUMNS;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

mod loader_tests;

/// Path to a checked-in fixture under `tests/fixtures`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("src/app/services/catalog_loader/tests/fixtures")
        .join(name)
}

/// Header line containing every expected column
pub fn expected_header() -> String {
    EXPECTED_COLUMNS.join(",")
}

/// A catalog row in the expected column order
pub fn catalog_row(id: usize, item_type: &str, price_50: &str, available: &str) -> String {
    format!(
        "{},{},M,Rojo,10,{},\"900,00\",800,{},Remeras,Remera de algodón",
        id, item_type, price_50, available
    )
}

/// Write CSV content to a temp file with a `.csv` extension
pub fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
