//! In-memory tabular representation of a catalog file

use super::{delimited, workbook};
use crate::app::models::CellValue;
use crate::constants::SPREADSHEET_EXTENSIONS;
use crate::{Error, Result};
use std::path::Path;

/// A data row together with its 1-based position in the source file
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    pub number: usize,
    pub cells: Vec<CellValue>,
}

/// Header names plus ordered data rows, as read from the source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<SheetRow>,
}

impl Sheet {
    /// Build a sheet from a header row and data rows
    ///
    /// Header names are trimmed. Rows whose cells are all blank are dropped.
    /// `first_data_row` is the 1-based row number of the first data row.
    pub fn from_rows(
        headers: Vec<String>,
        rows: impl IntoIterator<Item = Vec<CellValue>>,
        first_data_row: usize,
    ) -> Self {
        let headers = headers.into_iter().map(|h| h.trim().to_string()).collect();
        let rows = rows
            .into_iter()
            .enumerate()
            .filter(|(_, cells)| !cells.iter().all(CellValue::is_blank))
            .map(|(i, cells)| SheetRow {
                number: first_data_row + i,
                cells,
            })
            .collect();

        Self { headers, rows }
    }
}

/// Read a catalog file, choosing the reader from its extension
pub fn read_sheet(path: &Path) -> Result<Sheet> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => delimited::read_delimited(path, b','),
        "tsv" => delimited::read_delimited(path, b'\t'),
        e if SPREADSHEET_EXTENSIONS.contains(&e) => workbook::read_workbook(path),
        _ => Err(Error::spreadsheet(
            path.display().to_string(),
            format!(
                "Unsupported file extension '{}' (expected csv, tsv or {})",
                ext,
                SPREADSHEET_EXTENSIONS.join(", ")
            ),
        )),
    }
}
