//! Import command implementation
//!
//! Runs the fixed pipeline in order: load and validate the catalog, normalize
//! rows, write the SQL script, apply it. The first error aborts the run. A
//! schema mismatch stops before any file is written; a failed apply leaves
//! the SQL file on disk for inspection.

use super::shared::{ImportStats, create_progress_bar, load_configuration, setup_logging};
use crate::{Error, Result};
use crate::app::models::Target;
use crate::app::services::catalog_loader::load_catalog;
use crate::app::services::executor::ApplyCommand;
use crate::app::services::normalizer::normalize_records;
use crate::app::services::sql_writer::ScriptBuilder;
use crate::cli::args::{Args, OutputFormat};
use crate::config::Config;
use colored::*;
use indicatif::HumanDuration;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

/// Per-run switches that are not part of the configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Write the SQL file but skip the apply command
    pub dry_run: bool,
    /// Show progress bars (drawn on stderr)
    pub show_progress: bool,
    /// Print status lines to stdout and let the apply command write there
    pub show_status: bool,
}

impl ImportOptions {
    pub fn from_args(args: &Args) -> Self {
        Self {
            dry_run: args.dry_run,
            show_progress: args.show_progress(),
            show_status: args.show_status(),
        }
    }
}

/// Import command runner
///
/// 1. Set up logging and configuration
/// 2. Run the import pipeline
/// 3. Print the summary
pub fn run_import(args: Args) -> Result<ImportStats> {
    setup_logging(&args);

    info!("Starting catalog import");
    debug!("Command line arguments: {:?}", args);

    let config = load_configuration(&args)?;

    let options = ImportOptions::from_args(&args);
    let stats = execute(&config, args.target, options)?;

    generate_final_report(&args, &stats)?;
    Ok(stats)
}

/// Run the import pipeline against an already validated configuration
pub fn execute(config: &Config, target: Target, options: ImportOptions) -> Result<ImportStats> {
    let start_time = Instant::now();

    let records = load_catalog(&config.input_path)?;

    let progress = create_progress_bar(
        records.len() as u64,
        "Normalizing catalog rows",
        options.show_progress,
    );
    let normalized = normalize_records(&records, &progress);

    let source_name = config
        .input_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.input_path.display().to_string());

    let script = ScriptBuilder::new(&config.table, config.chunk_size)
        .with_comment(format!("Auto-generated from {}", source_name))
        .with_comment(format!(
            "Generated at {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ))
        .build(&normalized.products);

    let sql_bytes = script.write_to(&config.output_path)?;
    if options.show_status {
        println!(
            "{} SQL generated: {} (rows={})",
            "✅".green(),
            config.output_path.display().to_string().bright_cyan(),
            script.row_count
        );
    }

    let mut stats = ImportStats {
        rows_loaded: records.len(),
        normalize: normalized.stats,
        insert_statements: script.insert_count,
        sql_bytes,
        output_path: config.output_path.clone(),
        target,
        applied: false,
        processing_time: Default::default(),
    };

    if options.dry_run {
        info!("Dry run - skipping apply against {} database", target);
    } else {
        let command = ApplyCommand::new(
            &config.apply_command,
            &config.db_name,
            target,
            &config.output_path,
        )?
        .with_stdout_to_stderr(!options.show_status);
        if options.show_status {
            println!("\n$ {}", command.command_line().bright_black());
        }
        command.run()?;
        stats.applied = true;

        if options.show_status {
            println!("{} Import OK on {}.", "🎉".green(), target.to_string().bold());
        }
    }

    stats.processing_time = start_time.elapsed();
    info!(
        "Import finished: {} rows, {} INSERT statements in {:.2}s",
        stats.rows_loaded,
        stats.insert_statements,
        stats.processing_time.as_secs_f64()
    );
    Ok(stats)
}

/// Print the final summary in the requested format
fn generate_final_report(args: &Args, stats: &ImportStats) -> Result<()> {
    match args.output_format {
        OutputFormat::Human if args.quiet => Ok(()),
        OutputFormat::Human => generate_human_report(stats),
        OutputFormat::Json => generate_json_report(stats),
    }
}

/// Generate human-readable report
fn generate_human_report(stats: &ImportStats) -> Result<()> {
    let duration = HumanDuration(stats.processing_time);

    println!("\n{}", "Catalog Import Summary".bright_green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   • Rows imported: {}", stats.rows_loaded);
    println!("   • INSERT statements: {}", stats.insert_statements);
    println!(
        "   • SQL file: {} ({})",
        stats.output_path.display(),
        ImportStats::format_size(stats.sql_bytes)
    );
    println!(
        "   • Target: {}{}",
        stats.target,
        if stats.applied { "" } else { " (not applied)" }
    );
    println!("   • Processing time: {}", duration);

    let defaulted = stats.normalize.defaulted_prices + stats.normalize.defaulted_quantities;
    if defaulted > 0 {
        println!(
            "{}",
            format!("⚠️  {} blank or unparseable numeric cells defaulted to 0", defaulted)
                .yellow()
        );
    }
    if stats.normalize.clamped_quantities > 0 {
        println!(
            "{}",
            format!(
                "⚠️  {} negative quantities clamped to 0",
                stats.normalize.clamped_quantities
            )
            .yellow()
        );
    }

    println!();
    Ok(())
}

/// Generate JSON report for machine consumption
fn generate_json_report(stats: &ImportStats) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, stats)
        .map_err(|e| Error::io("Failed to write JSON summary", e.into()))?;
    writeln!(stdout)?;
    Ok(())
}
