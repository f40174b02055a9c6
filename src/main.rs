use catalog_importer::cli::{args::Args, commands};
use clap::Parser;
use colored::*;
use std::process;

fn main() {
    // Usage errors (including an unknown target) exit here, before any file I/O
    let args = Args::parse();

    match commands::run(args) {
        Ok(_stats) => {
            // Summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            let error = anyhow::Error::new(error);
            eprintln!("{} {:#}", "ERROR:".red().bold(), error);
            if let Some(hint) = hint_for(&error) {
                eprintln!("{}", hint);
            }
            process::exit(1);
        }
    }
}

/// Follow-up advice for errors the user can fix directly
fn hint_for(error: &anyhow::Error) -> Option<String> {
    match error.downcast_ref::<catalog_importer::Error>()? {
        catalog_importer::Error::FileNotFound { .. } => Some(
            "Save the catalog spreadsheet at ./data/products.xlsx or pass --input <FILE>."
                .to_string(),
        ),
        catalog_importer::Error::ExternalCommandFailed { .. } => Some(
            "The generated SQL file was kept; fix the problem above and re-run to retry."
                .to_string(),
        ),
        _ => None,
    }
}
