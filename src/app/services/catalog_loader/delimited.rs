//! CSV and TSV catalog reading
//!
//! Cell types are inferred from their text: integers and floats become
//! numeric cells, everything else stays text. Price columns are the
//! exception and stay raw text, since `1.250` there means one thousand
//! two hundred fifty, not a decimal.

use super::sheet::Sheet;
use crate::app::models::CellValue;
use crate::constants::PRICE_COLUMNS;
use crate::{Error, Result};
use csv::ReaderBuilder;
use std::path::Path;

/// Read a delimited text file into a [`Sheet`]
pub fn read_delimited(path: &Path, delimiter: u8) -> Result<Sheet> {
    let file = path.display().to_string();

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::csv_parsing(&file, "Failed to open file", Some(e)))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| Error::csv_parsing(&file, "Failed to read header row", Some(e)))?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let raw_text: Vec<bool> = headers
        .iter()
        .map(|h| PRICE_COLUMNS.contains(&h.trim()))
        .collect();

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            Error::csv_parsing(&file, format!("Failed to read row {}", index + 2), Some(e))
        })?;
        let cells = record
            .iter()
            .enumerate()
            .map(|(col, raw)| {
                if raw_text.get(col).copied().unwrap_or(false) {
                    CellValue::raw(raw)
                } else {
                    CellValue::infer(raw)
                }
            })
            .collect::<Vec<_>>();
        rows.push(cells);
    }

    Ok(Sheet::from_rows(headers, rows, 2))
}
