//! Tests for per-field conversion rules

use super::super::field_parsers::*;
use crate::app::models::CellValue;

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

#[test]
fn test_money_to_cents_blank_and_unparseable() {
    for cell in [
        CellValue::Empty,
        CellValue::Float(f64::NAN),
        text(""),
        text("   "),
        text("abc"),
        text("$ 12"),
        text("nan"),
        text("inf"),
    ] {
        assert_eq!(money_to_cents(&cell), 0, "cell {:?}", cell);
        assert_eq!(try_money_to_cents(&cell), None, "cell {:?}", cell);
    }
}

#[test]
fn test_money_to_cents_numeric() {
    assert_eq!(money_to_cents(&CellValue::Int(1500)), 150_000);
    assert_eq!(money_to_cents(&CellValue::Float(12.34)), 1234);
    assert_eq!(money_to_cents(&CellValue::Float(0.1)), 10);
    assert_eq!(money_to_cents(&CellValue::Float(19.99)), 1999);
    assert_eq!(money_to_cents(&CellValue::Float(-2.5)), -250);
    assert_eq!(money_to_cents(&CellValue::Bool(true)), 100);

    for v in [0.0, 1.0, 9.99, 123.45, 1250.5, 99999.99] {
        assert_eq!(
            money_to_cents(&CellValue::Float(v)),
            (v * 100.0_f64).round() as i64
        );
    }
}

#[test]
fn test_money_to_cents_locale_strings() {
    assert_eq!(money_to_cents(&text("1.250,50")), 125_050);
    assert_eq!(money_to_cents(&text(" 900,00 ")), 90_000);
    assert_eq!(money_to_cents(&text("12,5")), 1250);
    assert_eq!(money_to_cents(&text("1.000.000")), 100_000_000);
    assert_eq!(money_to_cents(&text("750")), 75_000);
}

#[test]
fn test_money_to_cents_rounds_half_cents_to_even() {
    // 0.125 and 0.375 are exact in binary, so the tie is real
    assert_eq!(money_to_cents(&CellValue::Float(0.125)), 12);
    assert_eq!(money_to_cents(&CellValue::Float(0.375)), 38);
}

#[test]
fn test_normalize_disponible_affirmative() {
    for value in ["1", "true", "TRUE", "t", "Yes", "y", "si", "SI", "sí", "Sí", "s", " yes "] {
        assert_eq!(normalize_disponible(&text(value)), 1, "value {:?}", value);
    }
}

#[test]
fn test_normalize_disponible_negative() {
    for cell in [
        CellValue::Int(0),
        CellValue::Float(0.0),
        CellValue::Float(0.5),
        CellValue::Float(f64::NAN),
        CellValue::Empty,
        CellValue::Bool(false),
        text("no"),
        text("0"),
        text(""),
        text("false"),
        text("maybe"),
    ] {
        assert_eq!(normalize_disponible(&cell), 0, "cell {:?}", cell);
    }
}

#[test]
fn test_normalize_disponible_numeric_non_zero() {
    assert_eq!(normalize_disponible(&CellValue::Int(1)), 1);
    assert_eq!(normalize_disponible(&CellValue::Int(-3)), 1);
    assert_eq!(normalize_disponible(&CellValue::Float(2.0)), 1);
    assert_eq!(normalize_disponible(&CellValue::Bool(true)), 1);
}

#[test]
fn test_parse_quantity() {
    assert_eq!(parse_quantity(&CellValue::Int(25)), 25);
    assert_eq!(parse_quantity(&CellValue::Float(12.9)), 12);
    assert_eq!(parse_quantity(&text(" 40 ")), 40);
    assert_eq!(parse_quantity(&text("7.5")), 7);
    assert_eq!(parse_quantity(&text("many")), 0);
    assert_eq!(parse_quantity(&CellValue::Empty), 0);
    assert_eq!(parse_quantity(&CellValue::Float(f64::NAN)), 0);
    assert_eq!(try_parse_quantity(&text("many")), None);
}

#[test]
fn test_clean_text() {
    assert_eq!(clean_text(&text("  Remera  ")), Some("Remera".to_string()));
    assert_eq!(clean_text(&text("   ")), None);
    assert_eq!(clean_text(&CellValue::Empty), None);
    assert_eq!(clean_text(&CellValue::Float(42.0)), Some("42".to_string()));
    assert_eq!(clean_text(&CellValue::Int(38)), Some("38".to_string()));
}
