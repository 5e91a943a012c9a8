//! Export of comparison reports
//!
//! Reports are written as CSV with a fixed header per report kind. An empty
//! report produces no file at all.

use crate::error::{AggregateError, Result};
use crate::report::ReportKind;
use log::debug;
use std::path::{Path, PathBuf};

#[cfg(feature = "csv")]
use crate::report::{ReportRow, Reports};
#[cfg(feature = "json")]
use crate::types::ParsedEntry;

pub const DEFAULT_LEGACY_AX_CSV: &str = "aggregated_legacy_ax.csv";
pub const DEFAULT_LEGACY_BE_CSV: &str = "aggregated_legacy_be.csv";

/// Output locations for one run
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub legacy_ax_path: PathBuf,
    pub legacy_be_path: PathBuf,
    pub json_path: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            legacy_ax_path: PathBuf::from(DEFAULT_LEGACY_AX_CSV),
            legacy_be_path: PathBuf::from(DEFAULT_LEGACY_BE_CSV),
            json_path: None,
        }
    }
}

impl ExportOptions {
    pub fn path_for(&self, kind: ReportKind) -> &Path {
        match kind {
            ReportKind::LegacyVsAx => &self.legacy_ax_path,
            ReportKind::LegacyVsBe => &self.legacy_be_path,
        }
    }
}

/// What happened to one report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportReport {
    Written {
        kind: ReportKind,
        path: PathBuf,
        rows: usize,
    },
    /// No rows; nothing was written
    Skipped { kind: ReportKind },
}

impl ExportReport {
    /// Message shown to the user for this outcome
    pub fn summary(&self) -> String {
        match self {
            ExportReport::Written { path, rows, .. } => {
                format!("Wrote {} rows to {}", rows, path.display())
            }
            ExportReport::Skipped { kind } => format!(
                "No legacy vs {} results found; skipping CSV generation.",
                kind.new_standard()
            ),
        }
    }
}

#[cfg(any(feature = "csv", feature = "json"))]
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| AggregateError::io(parent, e))?;
            debug!("Created output directory: {parent:?}");
        }
    }
    Ok(())
}

/// Write one report to `output_path`. Skips the file when `rows` is empty.
#[cfg(feature = "csv")]
pub fn export_report_csv(
    kind: ReportKind,
    rows: &[ReportRow],
    output_path: &Path,
) -> Result<ExportReport> {
    if rows.is_empty() {
        return Ok(ExportReport::Skipped { kind });
    }

    ensure_parent_dir(output_path)?;
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record(kind.fields())?;
    for row in rows {
        if row.kind != kind {
            return Err(AggregateError::Export(format!(
                "{:?} row in {:?} report",
                row.kind, kind
            )));
        }
        writer.write_record(row.values().iter().map(|value| value.to_cell()))?;
    }
    writer
        .flush()
        .map_err(|e| AggregateError::io(output_path, e))?;

    debug!("Exported {} rows to {}", rows.len(), output_path.display());
    Ok(ExportReport::Written {
        kind,
        path: output_path.to_path_buf(),
        rows: rows.len(),
    })
}

/// Write both reports, each independently skipped when empty
#[cfg(feature = "csv")]
pub fn export_reports_csv(reports: &Reports, options: &ExportOptions) -> Result<Vec<ExportReport>> {
    [ReportKind::LegacyVsAx, ReportKind::LegacyVsBe]
        .into_iter()
        .map(|kind| export_report_csv(kind, reports.rows(kind), options.path_for(kind)))
        .collect()
}

/// Dump parsed entries as pretty JSON
#[cfg(feature = "json")]
pub fn export_entries_json(entries: &[ParsedEntry], output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;
    let file =
        std::fs::File::create(output_path).map_err(|e| AggregateError::io(output_path, e))?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), entries)?;
    debug!("Exported {} entries to {}", entries.len(), output_path.display());
    Ok(())
}


#[cfg(all(test, feature = "json"))]
mod json_tests {
    use super::*;
    use crate::types::{AirtimeSummary, MetricRecord, ParsedEntry};
    use tempfile::TempDir;

    #[test]
    fn test_entries_round_trip_through_json_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("entries.json");
        let entries = vec![ParsedEntry {
            scenario: "scenario_coex_ac_ax_quadsta".to_string(),
            legacy_standard: Some("802.11ac".to_string()),
            legacy_metrics: Some(MetricRecord::new(70.0, 2.5, 0.5)),
            ax_mean: Some(MetricRecord::new(110.0, 3.0, 0.25)),
            ax_max: Some(MetricRecord::new(120.0, 4.0, 0.5)),
            be_mean: None,
            be_max: None,
            airtime: AirtimeSummary::default(),
        }];

        export_entries_json(&entries, &path).unwrap();

        let content = std::fs::read_to_string(&path).expect("Failed to read JSON file");
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value[0]["scenario"], "scenario_coex_ac_ax_quadsta");
        assert_eq!(value[0]["ax_mean"]["throughput_mbps"], 110.0);
        assert_eq!(value[0]["ax_mean"]["jitter_ms"], 0.25);
        assert!(value[0]["be_mean"].is_null());

        let parsed: Vec<ParsedEntry> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, entries);
    }
}
