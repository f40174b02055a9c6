//! Catalog loading and schema validation
//!
//! Reads the whole catalog into memory as an ordered table of loosely typed
//! cells, checks the header row against the expected column set and groups
//! each data row into a [`RawRecord`]. Any schema mismatch aborts the load
//! before a single record is produced.
//!
//! ## Architecture
//!
//! - [`sheet`] - In-memory table and format dispatch by file extension
//! - [`workbook`] - Excel/OpenDocument reading via calamine
//! - [`delimited`] - CSV/TSV reading with dataframe-style type inference, prices kept as text
//! - [`column_mapping`] - Expected-column validation and row extraction
//!
//! ## Usage
//!
//! ```rust,no_run
//! use catalog_importer::app::services::catalog_loader::load_catalog;
//!
//! # fn example() -> catalog_importer::Result<()> {
//! let records = load_catalog(std::path::Path::new("data/products.xlsx"))?;
//! println!("Loaded {} catalog rows", records.len());
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod delimited;
pub mod sheet;
pub mod workbook;

#[cfg(test)]
pub mod tests;

pub use column_mapping::ColumnMapping;
pub use sheet::{Sheet, read_sheet};

use crate::app::models::RawRecord;
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, info};

/// Load and validate a catalog file, returning one record per non-blank row
pub fn load_catalog(path: &Path) -> Result<Vec<RawRecord>> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let sheet = read_sheet(path)?;
    debug!(
        "Read {} rows with columns {:?} from {}",
        sheet.rows.len(),
        sheet.headers,
        path.display()
    );

    let mapping = ColumnMapping::validate(&sheet.headers)?;

    let records: Vec<RawRecord> = sheet
        .rows
        .iter()
        .map(|row| mapping.record_from_row(row.number, &row.cells))
        .collect();

    info!("Loaded {} catalog rows from {}", records.len(), path.display());
    Ok(records)
}
