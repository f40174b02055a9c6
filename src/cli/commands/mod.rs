//! Command implementations for the catalog importer CLI
//!
//! - `import`: The load, normalize, generate and apply pipeline
//! - `shared`: Logging, configuration layering and reporting helpers

pub mod import;
pub mod shared;

pub use import::{ImportOptions, execute};
pub use shared::ImportStats;

use crate::Result;
use crate::cli::args::Args;

/// Main command runner for the catalog importer
pub fn run(args: Args) -> Result<ImportStats> {
    import::run_import(args)
}
