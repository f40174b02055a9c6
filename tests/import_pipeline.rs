//! Integration tests for the full import pipeline
//!
//! Catalogs are written as CSV fixtures and the apply step is pointed at
//! stub programs so no database tooling is needed.

use catalog_importer::cli::commands::{ImportOptions, execute};
use catalog_importer::constants::EXPECTED_COLUMNS;
use catalog_importer::{Config, Error, Target};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn write_catalog(dir: &Path, rows: usize) -> PathBuf {
    let mut content = EXPECTED_COLUMNS.join(",");
    content.push('\n');
    for i in 0..rows {
        content.push_str(&format!(
            "{},Remera {},M,Azul,{},\"1.250,50\",1100,\"990,50\",Sí,Remeras,Cuello 'V'\n",
            i + 1,
            i,
            i % 7
        ));
    }
    let path = dir.join("products.csv");
    std::fs::write(&path, content).unwrap();
    path
}

fn config_for(dir: &Path, input: PathBuf) -> Config {
    Config::default()
        .with_input_path(input)
        .with_output_path(dir.join("sql").join("import_products.sql"))
}

fn dry_run() -> ImportOptions {
    ImportOptions {
        dry_run: true,
        ..ImportOptions::default()
    }
}

#[test]
fn test_pipeline_generates_chunked_sql() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_catalog(temp_dir.path(), 1200);
    let config = config_for(temp_dir.path(), input);

    let stats = execute(&config, Target::Local, dry_run()).unwrap();

    assert_eq!(stats.rows_loaded, 1200);
    assert_eq!(stats.insert_statements, 3);
    assert!(!stats.applied);

    let sql = std::fs::read_to_string(&config.output_path).unwrap();
    assert!(sql.starts_with("-- Auto-generated from products.csv\n"));
    assert_eq!(sql.matches("DELETE FROM products;").count(), 1);
    assert_eq!(
        sql.matches("DELETE FROM sqlite_sequence WHERE name = 'products';")
            .count(),
        1
    );
    assert_eq!(sql.matches("INSERT INTO products").count(), 3);
    assert!(sql.contains("('Remera 0', 'M', 'Azul', 0, 125050, 110000, 99050, 1, 'Remeras', 'Cuello ''V''')"));
    assert_eq!(stats.sql_bytes, sql.len() as u64);
}

#[test]
fn test_pipeline_missing_column_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let header: Vec<&str> = EXPECTED_COLUMNS
        .iter()
        .copied()
        .filter(|c| *c != "COLOR")
        .collect();
    let input = temp_dir.path().join("products.csv");
    std::fs::write(&input, format!("{}\n1,Remera,M,5,100,90,80,1,Remeras,x\n", header.join(","))).unwrap();
    let config = config_for(temp_dir.path(), input);

    let err = execute(&config, Target::Local, dry_run()).unwrap_err();

    match &err {
        Error::SchemaMismatch { missing, found } => {
            assert_eq!(missing, &vec!["COLOR".to_string()]);
            assert_eq!(found.len(), EXPECTED_COLUMNS.len() - 1);
        }
        other => panic!("Expected schema mismatch, got {:?}", other),
    }
    assert!(err.to_string().contains("COLOR"));
    assert!(!config.output_path.exists());
}

#[test]
fn test_pipeline_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path(), temp_dir.path().join("products.xlsx"));

    let err = execute(&config, Target::Local, dry_run()).unwrap_err();

    assert!(matches!(err, Error::FileNotFound { .. }));
    assert!(!config.output_path.exists());
}

#[test]
fn test_pipeline_is_rerunnable() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_catalog(temp_dir.path(), 3);
    let config = config_for(temp_dir.path(), input);

    execute(&config, Target::Local, dry_run()).unwrap();
    let first = std::fs::read_to_string(&config.output_path).unwrap();
    execute(&config, Target::Local, dry_run()).unwrap();
    let second = std::fs::read_to_string(&config.output_path).unwrap();

    // Only the timestamp comment may differ between runs
    let body = |s: &str| s.lines().skip(2).collect::<Vec<_>>().join("\n");
    assert_eq!(body(&first), body(&second));
}

#[cfg(unix)]
#[test]
fn test_pipeline_applies_with_external_command() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_catalog(temp_dir.path(), 2);
    let config = config_for(temp_dir.path(), input).with_apply_command(["true"]);

    let options = ImportOptions::default();
    let stats = execute(&config, Target::Remote, options).unwrap();

    assert!(stats.applied);
    assert_eq!(stats.target, Target::Remote);
}

#[cfg(unix)]
#[test]
fn test_pipeline_apply_failure_keeps_sql_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_catalog(temp_dir.path(), 2);
    let config = config_for(temp_dir.path(), input).with_apply_command(["false"]);

    let options = ImportOptions::default();
    let err = execute(&config, Target::Local, options).unwrap_err();

    assert!(matches!(err, Error::ExternalCommandFailed { code: Some(1), .. }));
    assert!(config.output_path.exists());
}

#[cfg(unix)]
#[test]
fn test_json_output_keeps_stdout_parseable() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_catalog(temp_dir.path(), 3);
    let output = temp_dir.path().join("out.sql");

    // `echo` stands in for wrangler and writes its arguments to stdout
    let result = Command::new(env!("CARGO_BIN_EXE_import-products"))
        .current_dir(temp_dir.path())
        .env("CATALOG_APPLY_COMMAND", "echo")
        .args(["remote", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--output-format", "json"])
        .output()
        .unwrap();

    assert!(result.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(summary["rows_loaded"], 3);
    assert_eq!(summary["target"], "remote");
    assert_eq!(summary["applied"], true);

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("--remote --file"));
}
