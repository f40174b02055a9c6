//! SQL literal rendering
//!
//! Only single quotes are escaped (by doubling). The target dialect treats no
//! other character inside a string literal as special.

use crate::app::models::CellValue;

/// The SQL NULL literal
pub const NULL: &str = "NULL";

/// Render a cell as a SQL literal
///
/// Blank cells (empty, NaN, whitespace-only text) become `NULL`, booleans
/// `1`/`0`, numbers truncated integer literals and text a quoted string.
pub fn sql_quote(value: &CellValue) -> String {
    if value.is_blank() {
        return NULL.to_string();
    }
    match value {
        CellValue::Bool(b) => (if *b { "1" } else { "0" }).to_string(),
        CellValue::Int(i) => i.to_string(),
        CellValue::Float(f) => (f.trunc() as i64).to_string(),
        CellValue::Text(s) => quote_str(s),
        CellValue::Empty => NULL.to_string(),
    }
}

/// Render optional text as a SQL literal, `NULL` when absent or blank
pub fn quote_text(value: Option<&str>) -> String {
    match value {
        Some(s) => sql_quote(&CellValue::Text(s.to_string())),
        None => NULL.to_string(),
    }
}

fn quote_str(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
