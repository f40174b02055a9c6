//! Excel and OpenDocument workbook reading
//!
//! Only the first worksheet is read; its first row is the header.

use super::sheet::Sheet;
use crate::app::models::CellValue;
use crate::{Error, Result};
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;
use tracing::debug;

/// Read the first worksheet of a workbook into a [`Sheet`]
pub fn read_workbook(path: &Path) -> Result<Sheet> {
    let file = path.display().to_string();

    let mut workbook =
        open_workbook_auto(path).map_err(|e| Error::spreadsheet(&file, e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| Error::spreadsheet(&file, "Workbook has no worksheets"))?;
    debug!("Reading worksheet '{}' from {}", sheet_name, file);

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| Error::spreadsheet(&file, e.to_string()))?;

    // Ranges start at the first used cell, not necessarily A1
    let header_row_number = range.start().map_or(1, |(row, _)| row as usize + 1);

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| Error::spreadsheet(&file, "Worksheet has no header row"))?
        .iter()
        .map(|cell| cell.to_string())
        .collect();

    let data_rows = rows.map(|row| row.iter().map(cell_from_data).collect::<Vec<_>>());

    Ok(Sheet::from_rows(headers, data_rows, header_row_number + 1))
}

/// Convert a calamine cell into a [`CellValue`]
pub fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => CellValue::Text(s.clone()),
        other => CellValue::Text(other.to_string()),
    }
}
