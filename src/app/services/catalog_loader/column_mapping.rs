//! Expected-column validation and row extraction
//!
//! The catalog layout is fixed: every column in [`EXPECTED_COLUMNS`] must be
//! present in the header row. Extra columns are ignored.

use crate::app::models::{CellValue, RawRecord};
use crate::constants::{EXPECTED_COLUMNS, columns};
use crate::{Error, Result};
use std::collections::HashMap;

/// Column name to index mapping for a validated header row
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    pub name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    /// Check the header row against the expected columns
    ///
    /// Fails with [`Error::SchemaMismatch`] listing every missing column and
    /// the columns actually found. When a header name repeats, the first
    /// occurrence wins.
    pub fn validate(headers: &[String]) -> Result<Self> {
        let mut name_to_index = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            name_to_index.entry(header.clone()).or_insert(index);
        }

        let missing: Vec<String> = EXPECTED_COLUMNS
            .iter()
            .filter(|column| !name_to_index.contains_key(**column))
            .map(|column| column.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(Error::schema_mismatch(missing, headers.to_vec()));
        }

        Ok(Self { name_to_index })
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Extract a [`RawRecord`] from a row of cells
    ///
    /// Short rows are padded with [`CellValue::Empty`].
    pub fn record_from_row(&self, row_number: usize, cells: &[CellValue]) -> RawRecord {
        let cell = |name: &str| -> CellValue {
            self.get_index(name)
                .and_then(|index| cells.get(index))
                .cloned()
                .unwrap_or_default()
        };

        RawRecord {
            row_number,
            item_type: cell(columns::ITEM_TYPE),
            size: cell(columns::SIZE),
            color: cell(columns::COLOR),
            quantity: cell(columns::QUANTITY),
            price_50: cell(columns::PRICE_50),
            price_100: cell(columns::PRICE_100),
            price_200: cell(columns::PRICE_200),
            available: cell(columns::AVAILABLE),
            category: cell(columns::CATEGORY),
            description: cell(columns::DESCRIPTION),
        }
    }
}
