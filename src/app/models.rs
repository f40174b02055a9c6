//! Core data models for catalog import
//!
//! Cells arrive loosely typed from the spreadsheet, are grouped into
//! [`RawRecord`]s by column name, and leave the normalizer as [`Product`]s
//! ready for SQL emission.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single spreadsheet cell as read from the source file
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Blank cell, missing value or spreadsheet error
    #[default]
    Empty,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl CellValue {
    /// Whether the cell carries no usable value (blank, NaN or whitespace-only text)
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Float(f) => f.is_nan(),
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Int(_) | CellValue::Bool(_) => false,
        }
    }

    /// Infer a typed cell from raw text the way a dataframe reader does
    ///
    /// Integers and floats become numeric cells, blank text becomes
    /// [`CellValue::Empty`], anything else stays text (untrimmed).
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return CellValue::Int(i);
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() => CellValue::Float(f),
            _ => CellValue::Text(raw.to_string()),
        }
    }

    /// Keep raw text as-is, only mapping blank text to [`CellValue::Empty`]
    pub fn raw(raw: &str) -> Self {
        if raw.trim().is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(raw.to_string())
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Int(i) => write!(f, "{}", i),
            // Whole floats print without a fractional part ("42", not "42.0")
            CellValue::Float(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 => {
                write!(f, "{}", *v as i64)
            }
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One catalog row as read from the source, before normalization
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRecord {
    /// 1-based spreadsheet row number (header is row 1)
    pub row_number: usize,
    pub item_type: CellValue,
    pub size: CellValue,
    pub color: CellValue,
    pub quantity: CellValue,
    pub price_50: CellValue,
    pub price_100: CellValue,
    pub price_200: CellValue,
    pub available: CellValue,
    pub category: CellValue,
    pub description: CellValue,
}

/// A normalized catalog row ready for SQL emission
///
/// Text fields are trimmed, `None` when blank. Prices are integer cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub item_type: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity: i64,
    pub price_50_cents: i64,
    pub price_100_cents: i64,
    pub price_200_cents: i64,
    pub available: u8,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl Product {
    /// Field values as cells, in target table column order
    pub fn cells(&self) -> [CellValue; 10] {
        fn text(value: &Option<String>) -> CellValue {
            value.clone().map_or(CellValue::Empty, CellValue::Text)
        }

        [
            text(&self.item_type),
            text(&self.size),
            text(&self.color),
            CellValue::Int(self.quantity),
            CellValue::Int(self.price_50_cents),
            CellValue::Int(self.price_100_cents),
            CellValue::Int(self.price_200_cents),
            CellValue::Int(i64::from(self.available)),
            text(&self.category),
            text(&self.description),
        ]
    }
}

/// Database environment that receives the generated SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Local,
    Remote,
}

impl Target {
    /// Flag passed to the apply command for this target
    pub fn flag(&self) -> &'static str {
        match self {
            Target::Local => "--local",
            Target::Remote => "--remote",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Local => "local",
            Target::Remote => "remote",
        }
    }
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Target::Local),
            "remote" => Ok(Target::Remote),
            _ => Err(Error::invalid_target(s)),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
