//! Shared components for CLI commands
//!
//! Logging setup, configuration layering, progress bars and the statistics
//! reported at the end of a run.

use crate::app::models::Target;
use crate::app::services::normalizer::NormalizeStats;
use crate::cli::args::Args;
use crate::config::Config;
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Import statistics for reporting
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportStats {
    /// Catalog rows read from the source file
    pub rows_loaded: usize,
    /// Normalization counters
    pub normalize: NormalizeStats,
    /// Number of INSERT statements generated
    pub insert_statements: usize,
    /// Size of the generated SQL file in bytes
    pub sql_bytes: u64,
    /// Where the SQL file was written
    pub output_path: PathBuf,
    /// Database target selected
    pub target: Target,
    /// Whether the apply command ran successfully
    pub applied: bool,
    /// Total wall-clock time
    #[serde(serialize_with = "serialize_seconds")]
    pub processing_time: Duration,
}

impl ImportStats {
    /// Format a byte count in human-readable form
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

fn serialize_seconds<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Set up structured logging
///
/// `RUST_LOG` takes precedence over the verbosity flags. Calling this more
/// than once keeps the first subscriber.
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("catalog_importer={}", log_level)));

    let initialized = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Load configuration using layered approach (defaults -> env -> args)
pub fn load_configuration(args: &Args) -> Result<Config> {
    info!("Loading configuration");

    let mut config = Config::from_env()?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(input_path) = &args.input_path {
        config.input_path = input_path.clone();
    }
    if let Some(output_path) = &args.output_path {
        config.output_path = output_path.clone();
    }
    if let Some(db_name) = &args.db_name {
        config.db_name = db_name.clone();
    }
    if let Some(table) = &args.table {
        config.table = table.clone();
    }
    if let Some(chunk_size) = args.chunk_size {
        config.chunk_size = chunk_size;
    }
}

/// Create a progress bar, hidden when progress display is off
pub fn create_progress_bar(total: u64, message: &str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .map(|style| style.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}
