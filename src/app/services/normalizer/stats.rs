//! Normalization statistics and result structures

use crate::app::models::Product;
use serde::Serialize;

/// Counters collected while normalizing a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeStats {
    /// Records normalized
    pub records: usize,
    /// Price cells that were blank or unparseable and defaulted to 0
    pub defaulted_prices: usize,
    /// Quantity cells that were blank or unparseable and defaulted to 0
    pub defaulted_quantities: usize,
    /// Negative quantities clamped to 0
    pub clamped_quantities: usize,
}

/// Normalized products together with their statistics
#[derive(Debug, Clone, Default)]
pub struct NormalizeResult {
    pub products: Vec<Product>,
    pub stats: NormalizeStats,
}
