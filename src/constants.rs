//! Application constants for the catalog importer
//!
//! This module contains the catalog column layout, default locations and
//! database settings used throughout the importer.

// =============================================================================
// Catalog Columns
// =============================================================================

/// Source spreadsheet columns, in the order they map onto the target table
pub mod columns {
    pub const ID: &str = "ID";
    pub const ITEM_TYPE: &str = "TIPO_PRENDA";
    pub const SIZE: &str = "TALLA";
    pub const COLOR: &str = "COLOR";
    pub const QUANTITY: &str = "CANTIDAD_DISPONIBLE";
    pub const PRICE_50: &str = "PRECIO_50_U";
    pub const PRICE_100: &str = "PRECIO_100_U";
    pub const PRICE_200: &str = "PRECIO_200_U";
    pub const AVAILABLE: &str = "DISPONIBLE";
    pub const CATEGORY: &str = "CATEGORÍA";
    pub const DESCRIPTION: &str = "DESCRIPCIÓN";
}

/// Columns that must all be present in the catalog header row
///
/// `ID` is required for schema compatibility with exported catalogs but is
/// not imported; the target table assigns its own ids.
pub const EXPECTED_COLUMNS: &[&str] = &[
    columns::ID,
    columns::ITEM_TYPE,
    columns::SIZE,
    columns::COLOR,
    columns::QUANTITY,
    columns::PRICE_50,
    columns::PRICE_100,
    columns::PRICE_200,
    columns::AVAILABLE,
    columns::CATEGORY,
    columns::DESCRIPTION,
];

/// Target table columns, in `INSERT` order
pub const TARGET_COLUMNS: &[&str] = &[
    "tipo_prenda",
    "talla",
    "color",
    "cantidad_disponible",
    "precio_50_u_cents",
    "precio_100_u_cents",
    "precio_200_u_cents",
    "disponible",
    "categoria",
    "descripcion",
];

/// Price columns; delimited sources keep these as raw text so the
/// locale-aware money parser sees `1.250` as a thousands separator
pub const PRICE_COLUMNS: &[&str] = &[columns::PRICE_50, columns::PRICE_100, columns::PRICE_200];

/// Availability values treated as "in stock" (compared lowercase, trimmed)
pub const AFFIRMATIVE_VALUES: &[&str] = &["1", "true", "t", "yes", "y", "si", "sí", "s"];

// =============================================================================
// Defaults
// =============================================================================

/// Default catalog location, relative to the working directory
pub const DEFAULT_INPUT_PATH: &str = "data/products.xlsx";

/// Default generated SQL location, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "sql/import_products.sql";

/// Default D1 database binding name
pub const DEFAULT_DB_NAME: &str = "laburen_db";

/// Default target table
pub const DEFAULT_TABLE: &str = "products";

/// Rows per `INSERT` statement
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Command prefix used to apply the generated SQL file
pub const DEFAULT_APPLY_COMMAND: &[&str] = &["npx", "wrangler", "d1", "execute"];

/// Spreadsheet extensions handled by the workbook reader
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

// =============================================================================
// Environment Variables
// =============================================================================

pub mod env {
    pub const INPUT: &str = "CATALOG_INPUT";
    pub const OUTPUT: &str = "CATALOG_OUTPUT";
    pub const DB_NAME: &str = "CATALOG_DB_NAME";
    pub const TABLE: &str = "CATALOG_TABLE";
    pub const CHUNK_SIZE: &str = "CATALOG_CHUNK_SIZE";
    pub const APPLY_COMMAND: &str = "CATALOG_APPLY_COMMAND";
}
