//! Command-line argument definitions for the catalog importer
//!
//! The interface is a single optional positional target plus overrides for
//! the configured paths and database settings.

use crate::Result;
use crate::app::models::Target;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the catalog importer
///
/// Converts the product catalog spreadsheet into SQL and applies it to the
/// selected D1 database.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "import-products",
    version,
    about = "Import a spreadsheet product catalog into a D1 database",
    long_about = "Reads the product catalog spreadsheet, validates its columns, normalizes \
                  quantities, prices and availability flags, writes a delete-then-insert SQL \
                  script and applies it with `wrangler d1 execute` against the local or \
                  remote database."
)]
pub struct Args {
    /// Database target to apply the generated SQL against
    ///
    /// Either `local` or `remote`, case-insensitive. Defaults to `local`.
    #[arg(
        value_name = "TARGET",
        default_value = "local",
        value_parser = parse_target,
        help = "Database target: local or remote (case-insensitive)"
    )]
    pub target: Target,

    /// Catalog spreadsheet to import
    ///
    /// Supports xlsx, xlsm, xlsb, xls, ods, csv and tsv.
    /// If not specified, defaults to ./data/products.xlsx
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Catalog spreadsheet to import"
    )]
    pub input_path: Option<PathBuf>,

    /// Output path for the generated SQL file
    ///
    /// Parent directories are created and any existing file is overwritten.
    /// If not specified, defaults to ./sql/import_products.sql
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output path for the generated SQL file"
    )]
    pub output_path: Option<PathBuf>,

    /// D1 database name passed to wrangler
    #[arg(long = "db-name", value_name = "NAME", help = "D1 database name")]
    pub db_name: Option<String>,

    /// Table that is cleared and refilled
    #[arg(long = "table", value_name = "NAME", help = "Target table name")]
    pub table: Option<String>,

    /// Rows per INSERT statement
    #[arg(
        long = "chunk-size",
        value_name = "ROWS",
        help = "Rows per INSERT statement"
    )]
    pub chunk_size: Option<usize>,

    /// Generate the SQL file without applying it
    #[arg(
        long = "dry-run",
        visible_alias = "no-apply",
        help = "Write the SQL file but do not run the apply command"
    )]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the final summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the import summary"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for the import summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

fn parse_target(value: &str) -> Result<Target> {
    value.parse()
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if status lines may be printed to stdout
    ///
    /// JSON output keeps stdout for the summary document only.
    pub fn show_status(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}
