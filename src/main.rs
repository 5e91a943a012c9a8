//! CLI binary for the coexistence log aggregator

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use coex_log_aggregator::{
    aggregate_directory, export_reports_csv, AggregateError, ExportOptions,
    DEFAULT_LEGACY_AX_CSV, DEFAULT_LEGACY_BE_CSV, DEFAULT_LOG_EXTENSION,
};
use env_logger::Builder;
use log::{debug, LevelFilter};
use std::path::PathBuf;

fn build_command() -> Command {
    let command = Command::new("Coexistence Log Aggregator")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Aggregate ns-3 simulation log metrics into legacy vs 802.11ax/be CSV files.")
        .arg(
            Arg::new("logs")
                .long("logs")
                .help("Directory containing ns-3 log files")
                .value_name("DIR")
                .default_value("logs"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .help("Path to the legacy-vs-ax CSV file")
                .value_name("PATH")
                .default_value(DEFAULT_LEGACY_AX_CSV),
        )
        .arg(
            Arg::new("out-legacy-ax")
                .long("out-legacy-ax")
                .help("Override path for the legacy-vs-ax CSV file (takes precedence over --out)")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("out-legacy-be")
                .long("out-legacy-be")
                .help("Path to the legacy-vs-be CSV file")
                .value_name("PATH")
                .default_value(DEFAULT_LEGACY_BE_CSV),
        )
        .arg(
            Arg::new("extension")
                .long("extension")
                .help("Log file extension to pick up, case-insensitive (repeatable)")
                .value_name("EXT")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and detailed parsing information")
                .action(ArgAction::SetTrue),
        );

    #[cfg(feature = "json")]
    let command = command.arg(
        Arg::new("json")
            .long("json")
            .help("Also dump every parsed log entry to this JSON file")
            .value_name("PATH"),
    );

    command
}

fn init_logging(debug: bool) {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Warn);
    builder.parse_env("RUST_LOG");
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();

    let debug = matches.get_flag("debug");
    init_logging(debug);
    debug!(
        "{} {} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    );

    // Defaults are always present
    let log_dir = PathBuf::from(matches.get_one::<String>("logs").cloned().unwrap_or_default());
    let legacy_ax_path = matches
        .get_one::<String>("out-legacy-ax")
        .or_else(|| matches.get_one::<String>("out"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LEGACY_AX_CSV));
    let legacy_be_path = matches
        .get_one::<String>("out-legacy-be")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LEGACY_BE_CSV));

    let extensions: Vec<String> = match matches.get_many::<String>("extension") {
        Some(values) => values.cloned().collect(),
        None => vec![DEFAULT_LOG_EXTENSION.to_string()],
    };

    #[cfg(feature = "json")]
    let json_path = matches.get_one::<String>("json").map(PathBuf::from);
    #[cfg(not(feature = "json"))]
    let json_path = None;

    let export_options = ExportOptions {
        legacy_ax_path,
        legacy_be_path,
        json_path,
    };

    if debug {
        println!("Log directory: {}", log_dir.display());
        println!("Extensions: {extensions:?}");
    }

    let batch = match aggregate_directory(&log_dir, &extensions) {
        Ok(batch) => batch,
        Err(AggregateError::MissingDirectory(dir)) => {
            eprintln!("Log directory not found: {}", dir.display());
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("Failed to aggregate logs"),
    };

    if debug {
        println!(
            "Parsed {} of {} log files with metrics",
            batch.entries.len(),
            batch.files.len()
        );
    }

    #[cfg(feature = "json")]
    {
        if let Some(path) = &export_options.json_path {
            coex_log_aggregator::export_entries_json(&batch.entries, path)
                .with_context(|| format!("Failed to write JSON file: {}", path.display()))?;
            println!("Wrote {} entries to {}", batch.entries.len(), path.display());
        }
    }

    let outcomes = export_reports_csv(&batch.reports, &export_options)
        .context("Failed to write CSV reports")?;
    for outcome in &outcomes {
        println!("{}", outcome.summary());
    }

    Ok(())
}
