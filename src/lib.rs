//! Coexistence Log Aggregator
//!
//! Extracts throughput, delay, jitter and airtime figures from ns-3 WiFi
//! coexistence simulation logs and folds them into two comparison tables:
//! legacy (802.11a/n/ac) vs 802.11ax, and legacy vs 802.11be.
//!
//! # Features
//!
//! - **`csv`** (default): Enable CSV export of the reports
//! - **`cli`** (default): Build the command-line interface binary
//! - **`json`**: Enable JSON export of parsed entries
//! - **`serde`**: Enable serialization of entry types
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use coex_log_aggregator::{aggregate_directory, DEFAULT_LOG_EXTENSION};
//! use std::path::Path;
//!
//! let batch = aggregate_directory(Path::new("logs"), &[DEFAULT_LOG_EXTENSION.to_string()]).unwrap();
//! println!("{} legacy vs ax rows", batch.reports.legacy_ax.len());
//! ```
//!
//! Parse a single log held in memory:
//! ```rust
//! use coex_log_aggregator::parse_log_str;
//!
//! let text = "802.11ac - Throughput: 42 Mbit/s, Average delay: 3 ms, Average jitter: 0.5 ms\n";
//! let entry = parse_log_str("single_ac", text).unwrap().unwrap();
//! assert_eq!(entry.legacy_standard.as_deref(), Some("802.11ac"));
//! ```
//!
//! # Public API
//!
//! - [`parse_log_str`] / [`parse_log_file`] - One log to a [`ParsedEntry`]
//! - [`classify_airtime_label`] - Airtime label heuristics
//! - [`aggregate_metrics`] / [`summarize_airtime`] - Per-standard reductions
//! - [`build_reports`] - Entries to [`Reports`]
//! - [`aggregate_directory`] - Scan, parse and report in one call
//! - [`export_reports_csv`] - Write both reports (feature `csv`)

pub mod aggregate;
pub mod batch;
pub mod classify;
pub mod error;
pub mod export;
pub mod input;
pub mod parser;
pub mod report;
pub mod types;

pub use aggregate::*;
pub use batch::*;
pub use classify::*;
pub use error::*;
pub use export::*;
pub use input::*;
pub use parser::*;
pub use report::*;
pub use types::*;
