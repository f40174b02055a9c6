//! Per-field conversion rules for catalog cells
//!
//! Every function here is pure and total: blank or unparseable input falls
//! back to a default rather than failing the import.

use crate::app::models::CellValue;
use crate::constants::AFFIRMATIVE_VALUES;

/// Trim a text cell, returning `None` when it is blank
///
/// Numeric cells are rendered as text first (`42.0` becomes `"42"`).
pub fn clean_text(cell: &CellValue) -> Option<String> {
    if cell.is_blank() {
        return None;
    }
    let text = cell.to_string();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a quantity cell, truncating toward zero
///
/// Returns `None` for blank or unparseable cells.
pub fn try_parse_quantity(cell: &CellValue) -> Option<i64> {
    match cell {
        CellValue::Empty => None,
        CellValue::Int(i) => Some(*i),
        CellValue::Float(f) => finite(*f).map(|f| f.trunc() as i64),
        CellValue::Bool(b) => Some(i64::from(*b)),
        CellValue::Text(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(finite)
            .map(|f| f.trunc() as i64),
    }
}

/// Parse a quantity cell, defaulting to 0
pub fn parse_quantity(cell: &CellValue) -> i64 {
    try_parse_quantity(cell).unwrap_or(0)
}

/// Convert a price cell to integer cents
///
/// Text prices use `.` as thousands separator and `,` as decimal separator
/// (`"1.250,50"` is 1250.50). Rounds to the nearest cent, ties to even.
/// Returns `None` for blank or unparseable cells.
pub fn try_money_to_cents(cell: &CellValue) -> Option<i64> {
    let value = match cell {
        CellValue::Empty => return None,
        CellValue::Int(i) => return Some(i.saturating_mul(100)),
        CellValue::Bool(b) => return Some(if *b { 100 } else { 0 }),
        CellValue::Float(f) => finite(*f)?,
        CellValue::Text(s) => {
            let normalized = s.trim().replace('.', "").replace(',', ".");
            if normalized.is_empty() {
                return None;
            }
            normalized.parse::<f64>().ok().and_then(finite)?
        }
    };

    Some((value * 100.0).round_ties_even() as i64)
}

/// Convert a price cell to integer cents, defaulting to 0
pub fn money_to_cents(cell: &CellValue) -> i64 {
    try_money_to_cents(cell).unwrap_or(0)
}

/// Coerce an availability cell to 1 (available) or 0
///
/// Numbers are truncated and compared against zero; text is matched
/// case-insensitively against [`AFFIRMATIVE_VALUES`].
pub fn normalize_disponible(cell: &CellValue) -> u8 {
    let available = match cell {
        CellValue::Empty => false,
        CellValue::Int(i) => *i != 0,
        CellValue::Float(f) => finite(*f).is_some_and(|f| f.trunc() != 0.0),
        CellValue::Bool(b) => *b,
        CellValue::Text(s) => AFFIRMATIVE_VALUES.contains(&s.trim().to_lowercase().as_str()),
    };
    u8::from(available)
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
