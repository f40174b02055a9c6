//! Tests for SQL script generation


use crate::app::models::Product;

/// A product named by index, for bulk fixtures
pub fn product(index: usize) -> Product {
    Product {
        item_type: Some(format!("Remera {}", index)),
        size: Some("M".to_string()),
        color: Some("Negro".to_string()),
        quantity: index as i64,
        price_50_cents: 125_050,
        price_100_cents: 110_000,
        price_200_cents: 99_000,
        available: 1,
        category: Some("Remeras".to_string()),
        description: None,
    }
}

pub fn products(count: usize) -> Vec<Product> {
    (0..count).map(product).collect()
}
