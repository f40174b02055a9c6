//! Catalog Importer Library
//!
//! Converts a spreadsheet product catalog into SQL `INSERT` statements and
//! applies them to a D1 database through the `wrangler` command-line tool.
//!
//! This library provides tools for:
//! - Loading xlsx/xls/ods/csv catalogs into loosely typed records
//! - Validating that every expected catalog column is present
//! - Normalizing text, quantities, prices (to integer cents) and availability flags
//! - Rendering delete-then-insert SQL scripts in bounded chunks
//! - Applying the generated script against a local or remote database

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog_loader;
        pub mod executor;
        pub mod normalizer;
        pub mod sql_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CellValue, Product, RawRecord, Target};
pub use config::Config;

/// Result type alias for the catalog importer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog import operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input catalog does not exist
    #[error("Catalog file not found: {path}")]
    FileNotFound { path: String },

    /// Spreadsheet could not be opened or read
    #[error("Spreadsheet error in file '{file}': {message}")]
    Spreadsheet { file: String, message: String },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Expected catalog columns are missing
    #[error("Missing columns in catalog: {missing:?}. Columns found: {found:?}")]
    SchemaMismatch {
        missing: Vec<String>,
        found: Vec<String>,
    },

    /// Target selector is not one of the allowed values
    #[error("Invalid target '{value}'. Usage: import-products [local|remote]")]
    InvalidTarget { value: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// External apply command exited unsuccessfully
    #[error("Command `{command}` failed with {}", describe_exit(.code))]
    ExternalCommandFailed { command: String, code: Option<i32> },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a spreadsheet error
    pub fn spreadsheet(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Spreadsheet {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a schema mismatch error
    pub fn schema_mismatch(missing: Vec<String>, found: Vec<String>) -> Self {
        Self::SchemaMismatch { missing, found }
    }

    /// Create an invalid target error
    pub fn invalid_target(value: impl Into<String>) -> Self {
        Self::InvalidTarget {
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an external command failure
    pub fn external_command_failed(command: impl Into<String>, code: Option<i32>) -> Self {
        Self::ExternalCommandFailed {
            command: command.into(),
            code,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
