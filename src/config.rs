//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then `CATALOG_*` environment
//! variables, then command-line overrides.

use crate::constants::{
    DEFAULT_APPLY_COMMAND, DEFAULT_CHUNK_SIZE, DEFAULT_DB_NAME, DEFAULT_INPUT_PATH,
    DEFAULT_OUTPUT_PATH, DEFAULT_TABLE, env,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Global configuration for a catalog import run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog spreadsheet to read
    pub input_path: PathBuf,

    /// Where the generated SQL is written
    pub output_path: PathBuf,

    /// Database name passed to the apply command
    pub db_name: String,

    /// Target table
    pub table: String,

    /// Rows per `INSERT` statement
    pub chunk_size: usize,

    /// Program and leading arguments of the apply command
    pub apply_command: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            db_name: DEFAULT_DB_NAME.to_string(),
            table: DEFAULT_TABLE.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            apply_command: DEFAULT_APPLY_COMMAND.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Defaults overlaid with the process environment
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Overlay values from an environment lookup
    ///
    /// Unset and empty variables leave the current value in place.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(env::INPUT) {
            self.input_path = PathBuf::from(v);
        }
        if let Some(v) = get(env::OUTPUT) {
            self.output_path = PathBuf::from(v);
        }
        if let Some(v) = get(env::DB_NAME) {
            self.db_name = v.trim().to_string();
        }
        if let Some(v) = get(env::TABLE) {
            self.table = v.trim().to_string();
        }
        if let Some(v) = get(env::CHUNK_SIZE) {
            self.chunk_size = v.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a positive integer, got '{}'",
                    env::CHUNK_SIZE,
                    v
                ))
            })?;
        }
        if let Some(v) = get(env::APPLY_COMMAND) {
            self.apply_command = v.split_whitespace().map(str::to_string).collect();
        }

        debug!("Configuration after environment overrides: {:?}", self);
        Ok(())
    }

    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_db_name(mut self, db_name: impl Into<String>) -> Self {
        self.db_name = db_name.into();
        self
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_apply_command<I, S>(mut self, command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.apply_command = command.into_iter().map(Into::into).collect();
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::configuration("Chunk size must be greater than 0"));
        }

        if self.db_name.trim().is_empty() {
            return Err(Error::configuration("Database name cannot be empty"));
        }

        if !is_plain_identifier(&self.table) {
            return Err(Error::configuration(format!(
                "Table name '{}' must be a plain SQL identifier (letters, digits, underscore)",
                self.table
            )));
        }

        if self.apply_command.is_empty() {
            return Err(Error::configuration("Apply command cannot be empty"));
        }

        Ok(())
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
