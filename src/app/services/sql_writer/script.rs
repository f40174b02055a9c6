//! SQL script assembly
//!
//! A script is a header comment, a `DELETE` of the target table, a reset of
//! its autoincrement sequence and then the rows as chunked multi-row
//! `INSERT` statements. Running it twice leaves the same table contents.

use super::quote::{quote_text, sql_quote};
use crate::app::models::Product;
use crate::constants::TARGET_COLUMNS;
use crate::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// An ordered set of SQL statements ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlScript {
    /// Leading comment lines (without the `-- ` prefix)
    pub comments: Vec<String>,
    /// Complete statements, each terminated with `;`
    pub statements: Vec<String>,
    /// Number of `INSERT` statements at the end of `statements`
    pub insert_count: usize,
    /// Number of rows across all `INSERT` statements
    pub row_count: usize,
}

impl SqlScript {
    /// Render the full script text
    pub fn render(&self) -> String {
        let mut out = String::new();
        for comment in &self.comments {
            out.push_str("-- ");
            out.push_str(comment);
            out.push('\n');
        }
        if !self.comments.is_empty() {
            out.push('\n');
        }
        out.push_str(&self.statements.join("\n"));
        out.push('\n');
        out
    }

    /// The chunked `INSERT` statements
    pub fn inserts(&self) -> &[String] {
        &self.statements[self.statements.len() - self.insert_count..]
    }

    /// Write the script to `path`, creating parent directories and
    /// overwriting any existing file
    pub fn write_to(&self, path: &Path) -> Result<u64> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                Error::io(
                    format!("Failed to create output directory '{}'", parent.display()),
                    e,
                )
            })?;
        }

        let text = self.render();
        fs::write(path, &text).map_err(|e| {
            Error::io(format!("Failed to write SQL file '{}'", path.display()), e)
        })?;

        info!(
            "Wrote {} statements ({} bytes) to {}",
            self.statements.len(),
            text.len(),
            path.display()
        );
        Ok(text.len() as u64)
    }
}

/// Builds delete-then-insert scripts for one table
#[derive(Debug, Clone)]
pub struct ScriptBuilder {
    table: String,
    chunk_size: usize,
    comments: Vec<String>,
}

impl ScriptBuilder {
    /// Create a builder for `table` with `chunk_size` rows per `INSERT`
    ///
    /// A chunk size of 0 is treated as 1.
    pub fn new(table: impl Into<String>, chunk_size: usize) -> Self {
        Self {
            table: table.into(),
            chunk_size: chunk_size.max(1),
            comments: Vec::new(),
        }
    }

    /// Add a leading comment line
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }

    /// Statements that clear the table and its autoincrement sequence
    pub fn header_statements(&self) -> Vec<String> {
        vec![
            format!("DELETE FROM {};", self.table),
            format!(
                "DELETE FROM sqlite_sequence WHERE name = {};",
                quote_text(Some(self.table.as_str()))
            ),
        ]
    }

    /// Build the full script for `products`
    pub fn build(&self, products: &[Product]) -> SqlScript {
        let mut statements = self.header_statements();

        let prefix = format!(
            "INSERT INTO {}\n({})\nVALUES\n",
            self.table,
            TARGET_COLUMNS.join(", ")
        );

        let mut insert_count = 0;
        for chunk in products.chunks(self.chunk_size) {
            let values: Vec<String> = chunk.iter().map(values_tuple).collect();
            statements.push(format!("{}{};", prefix, values.join(",\n")));
            insert_count += 1;
        }

        debug!(
            "Built {} INSERT statements for {} rows (chunk size {})",
            insert_count,
            products.len(),
            self.chunk_size
        );

        SqlScript {
            comments: self.comments.clone(),
            statements,
            insert_count,
            row_count: products.len(),
        }
    }
}

/// Render one product as a `VALUES` tuple in target column order
pub fn values_tuple(product: &Product) -> String {
    let fields: Vec<String> = product.cells().iter().map(sql_quote).collect();
    format!("({})", fields.join(", "))
}
