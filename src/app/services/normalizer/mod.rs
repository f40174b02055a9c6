//! Catalog record normalization
//!
//! Turns loosely typed [`RawRecord`]s into [`Product`]s: text trimmed, blank
//! text as `None`, quantity as a non-negative integer, the three tiered prices
//! as integer cents and availability as 0/1.
//!
//! - [`field_parsers`] - Per-field conversion rules
//! - [`stats`] - Normalization counters

pub mod field_parsers;
pub mod stats;

#[cfg(test)]
mod tests;

pub use field_parsers::{
    clean_text, money_to_cents, normalize_disponible, parse_quantity, try_money_to_cents,
    try_parse_quantity,
};
pub use stats::{NormalizeResult, NormalizeStats};

use crate::app::models::{CellValue, Product, RawRecord};
use indicatif::ProgressBar;
use tracing::{debug, warn};

/// Normalize a single record, updating `stats` with any defaulted fields
pub fn normalize_record(record: &RawRecord, stats: &mut NormalizeStats) -> Product {
    let quantity = match try_parse_quantity(&record.quantity) {
        Some(q) if q < 0 => {
            warn!(
                "Row {}: negative quantity {} clamped to 0",
                record.row_number, q
            );
            stats.clamped_quantities += 1;
            0
        }
        Some(q) => q,
        None => {
            if !record.quantity.is_blank() {
                debug!(
                    "Row {}: unparseable quantity {:?}, using 0",
                    record.row_number, record.quantity
                );
            }
            stats.defaulted_quantities += 1;
            0
        }
    };

    let mut cents = |cell: &CellValue, column: &str| match try_money_to_cents(cell) {
        Some(c) => c,
        None => {
            if !cell.is_blank() {
                debug!(
                    "Row {}: unparseable {} {:?}, using 0",
                    record.row_number, column, cell
                );
            }
            stats.defaulted_prices += 1;
            0
        }
    };

    let price_50_cents = cents(&record.price_50, "price (50 units)");
    let price_100_cents = cents(&record.price_100, "price (100 units)");
    let price_200_cents = cents(&record.price_200, "price (200 units)");

    stats.records += 1;

    Product {
        item_type: clean_text(&record.item_type),
        size: clean_text(&record.size),
        color: clean_text(&record.color),
        quantity,
        price_50_cents,
        price_100_cents,
        price_200_cents,
        available: normalize_disponible(&record.available),
        category: clean_text(&record.category),
        description: clean_text(&record.description),
    }
}

/// Normalize every record in order, ticking `progress` once per record
pub fn normalize_records(records: &[RawRecord], progress: &ProgressBar) -> NormalizeResult {
    let mut stats = NormalizeStats::default();
    let mut products = Vec::with_capacity(records.len());

    for record in records {
        products.push(normalize_record(record, &mut stats));
        progress.inc(1);
    }
    progress.finish_and_clear();

    if stats.defaulted_prices > 0 || stats.defaulted_quantities > 0 {
        warn!(
            "{} price cells and {} quantity cells were blank or unparseable and defaulted to 0",
            stats.defaulted_prices, stats.defaulted_quantities
        );
    }

    NormalizeResult { products, stats }
}
