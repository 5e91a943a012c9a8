//! Integration tests for directory aggregation
//!
//! Covers the scan → parse → report path:
//! - Scenario naming from file stems
//! - Independent legacy-vs-ax / legacy-vs-be rows
//! - Airtime classification with log-level context
//! - Ordering by file name
//! - Fatal errors for malformed numbers and missing directories

use coex_log_aggregator::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const AX_LOG: &str = "\
Running coexistence scenario
802.11ax STA #1 - Throughput: 100 Mbit/s, Average delay: 2 ms, Average jitter: 0.2 ms
802.11ax STA #2 - Throughput: 120 Mbit/s, Average delay: 4 ms, Average jitter: 0.4 ms
802.11a - Throughput: 50 Mbit/s, Average delay: 5 ms, Average jitter: 1 ms
";

const BE_LOG: &str = "\
802.11ac network - Throughput: 70 Mbit/s, Average delay: 2.5 ms, Average jitter: 0.5 ms
802.11be network - Throughput: 400 Mbit/s, Average delay: 0.8 ms, Average jitter: 0.05 ms
Airtime usage (10 s):
  STA Device A: 4.0s (40%)
  STA Device B: 6.0s (60%)
";

fn write_log(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("Failed to write log");
}

fn log_ext() -> Vec<String> {
    vec![DEFAULT_LOG_EXTENSION.to_string()]
}

#[test]
fn test_station_mean_and_max_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_log(temp_dir.path(), "scenario_coex_a_ax_decsta.log", AX_LOG);

    let batch = aggregate_directory(temp_dir.path(), &log_ext()).unwrap();
    assert_eq!(batch.reports.legacy_ax.len(), 1);
    assert!(batch.reports.legacy_be.is_empty());

    let row = &batch.reports.legacy_ax[0];
    assert_eq!(
        row.get("scenario"),
        Some(&ReportValue::Text("scenario_coex_a_ax_decsta".to_string()))
    );
    assert_eq!(
        row.get("legacy_standard"),
        Some(&ReportValue::Text("802.11a".to_string()))
    );
    assert_eq!(row.get("legacy_throughput_mbps").and_then(|v| v.as_number()), Some(50.0));
    assert_eq!(row.get("ax_throughput_mbps").and_then(|v| v.as_number()), Some(110.0));
    assert_eq!(row.get("ax_max_throughput_mbps").and_then(|v| v.as_number()), Some(120.0));
    assert_eq!(row.get("ax_max_delay_ms").and_then(|v| v.as_number()), Some(4.0));
    assert_eq!(row.get("ax_airtime_avg_pct"), Some(&ReportValue::Missing));
}

#[test]
fn test_generic_airtime_label_resolves_to_present_standard() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_log(temp_dir.path(), "scenario_coex_ac_be.log", BE_LOG);

    let batch = aggregate_directory(temp_dir.path(), &log_ext()).unwrap();
    assert!(batch.reports.legacy_ax.is_empty());
    let row = &batch.reports.legacy_be[0];
    assert_eq!(row.get("legacy_airtime_pct").and_then(|v| v.as_number()), Some(40.0));
    assert_eq!(row.get("be_airtime_avg_pct").and_then(|v| v.as_number()), Some(60.0));
    assert_eq!(row.get("be_airtime_max_pct").and_then(|v| v.as_number()), Some(60.0));
    assert_eq!(row.get("be_throughput_mbps").and_then(|v| v.as_number()), Some(400.0));
    assert_eq!(row.get("be_max_throughput_mbps").and_then(|v| v.as_number()), Some(400.0));
}

#[test]
fn test_rows_follow_file_name_order_and_skip_empty_logs() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_log(temp_dir.path(), "b_second.log", AX_LOG);
    write_log(temp_dir.path(), "a_first.log", AX_LOG);
    write_log(temp_dir.path(), "c_empty.log", "nothing to see\n");
    write_log(temp_dir.path(), "notes.txt", AX_LOG);

    let batch = aggregate_directory(temp_dir.path(), &log_ext()).unwrap();
    assert_eq!(batch.files.len(), 3);
    assert_eq!(batch.entries.len(), 2);

    let scenarios: Vec<_> = batch
        .reports
        .legacy_ax
        .iter()
        .map(|row| row.get("scenario").unwrap().to_cell())
        .collect();
    assert_eq!(scenarios, vec!["a_first", "b_second"]);
}

#[test]
fn test_log_feeding_both_reports() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let text = format!(
        "{AX_LOG}802.11be STA #1 - Throughput: 300 Mbit/s, Average delay: 1 ms, Average jitter: 0.1 ms\n"
    );
    write_log(temp_dir.path(), "tri.log", &text);

    let batch = aggregate_directory(temp_dir.path(), &log_ext()).unwrap();
    assert_eq!(batch.reports.legacy_ax.len(), 1);
    assert_eq!(batch.reports.legacy_be.len(), 1);
}

#[test]
fn test_malformed_number_aborts_batch() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_log(temp_dir.path(), "good.log", AX_LOG);
    write_log(
        temp_dir.path(),
        "bad.log",
        "Airtime usage:\n  staDevicesAx: 1.0s (1..0%)\n",
    );

    let err = aggregate_directory(temp_dir.path(), &log_ext()).unwrap_err();
    match err {
        AggregateError::Parse { scenario, line, .. } => {
            assert!(scenario.ends_with("bad.log"), "unexpected scenario {scenario}");
            assert_eq!(line, 2);
        }
        other => panic!("expected parse error, got {other}"),
    }
}

#[test]
fn test_missing_directory_is_fatal() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = aggregate_directory(&temp_dir.path().join("logs"), &log_ext()).unwrap_err();
    assert!(matches!(err, AggregateError::MissingDirectory(_)));
}
