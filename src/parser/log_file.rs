//! Single-pass parser turning one simulation log into a [`ParsedEntry`]

use crate::aggregate::{aggregate_metrics, summarize_airtime};
use crate::error::{AggregateError, Result};
use crate::parser::line::{is_airtime_header, match_airtime, match_throughput, ThroughputLine};
use crate::types::{AirtimeEntry, Context, MetricRecord, ParsedEntry, Standard};
use log::{debug, info};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Normal,
    InAirtimeBlock,
}

/// Network figure plus per-station figures for one new standard
#[derive(Debug, Default)]
struct StandardAccumulator {
    network: Option<MetricRecord>,
    stations: Vec<MetricRecord>,
}

impl StandardAccumulator {
    fn record(&mut self, context: Context, metrics: MetricRecord) {
        match context {
            Context::Network => self.network = Some(metrics),
            Context::Station => self.stations.push(metrics),
        }
    }

    fn is_present(&self) -> bool {
        self.network.is_some() || !self.stations.is_empty()
    }
}

/// Fold state carried across the lines of one log
#[derive(Debug)]
struct LogAccumulator {
    state: ParseState,
    legacy: Option<(String, MetricRecord)>,
    ax: StandardAccumulator,
    be: StandardAccumulator,
    airtime: Vec<AirtimeEntry>,
}

impl LogAccumulator {
    fn new() -> Self {
        Self {
            state: ParseState::Normal,
            legacy: None,
            ax: StandardAccumulator::default(),
            be: StandardAccumulator::default(),
            airtime: Vec::new(),
        }
    }

    fn step(mut self, line: &str) -> std::result::Result<Self, String> {
        if is_airtime_header(line) {
            self.state = ParseState::InAirtimeBlock;
            return Ok(self);
        }

        if self.state == ParseState::InAirtimeBlock {
            if let Some(entry) = match_airtime(line).map_err(|e| e.to_string())? {
                self.airtime.push(entry);
                return Ok(self);
            }
            if line.trim().is_empty() {
                return Ok(self);
            }
            // The line closing the block is still a candidate throughput line
            self.state = ParseState::Normal;
        }

        if let Some(matched) = match_throughput(line).map_err(|e| e.to_string())? {
            self.record(matched);
        }
        Ok(self)
    }

    fn record(&mut self, line: ThroughputLine) {
        match Standard::from_tag(&line.tag) {
            Standard::Legacy(tag) => self.legacy = Some((tag, line.metrics)),
            Standard::Ax => self.ax.record(line.context, line.metrics),
            Standard::Be => self.be.record(line.context, line.metrics),
            Standard::Other(tag) => debug!("Ignoring metrics for 802.11{tag}"),
        }
    }

    fn finish(self, scenario: &str) -> Option<ParsedEntry> {
        let has_ax = self.ax.is_present();
        let has_be = self.be.is_present();

        if self.legacy.is_none() && !has_ax && !has_be {
            return None;
        }

        let (ax_mean, ax_max) = aggregate_metrics(self.ax.network, &self.ax.stations);
        let (be_mean, be_max) = aggregate_metrics(self.be.network, &self.be.stations);
        let airtime = summarize_airtime(&self.airtime, has_ax, has_be);

        let (legacy_standard, legacy_metrics) = match self.legacy {
            Some((tag, metrics)) => (Some(Standard::display_name(&tag)), Some(metrics)),
            None => (None, None),
        };

        Some(ParsedEntry {
            scenario: scenario.to_string(),
            legacy_standard,
            legacy_metrics,
            ax_mean,
            ax_max,
            be_mean,
            be_max,
            airtime,
        })
    }
}

/// Parse log text already in memory.
///
/// Returns `Ok(None)` when the log holds no metrics for any standard.
pub fn parse_log_str(scenario: &str, text: &str) -> Result<Option<ParsedEntry>> {
    let acc = text
        .lines()
        .enumerate()
        .try_fold(LogAccumulator::new(), |acc, (index, line)| {
            acc.step(line).map_err(|message| AggregateError::Parse {
                scenario: scenario.to_string(),
                line: index + 1,
                message,
            })
        })?;

    debug!(
        "{scenario}: legacy={} ax stations={} be stations={} airtime entries={}",
        acc.legacy.is_some(),
        acc.ax.stations.len(),
        acc.be.stations.len(),
        acc.airtime.len()
    );

    let entry = acc.finish(scenario);
    if entry.is_none() {
        info!("{scenario}: no metrics found, skipping");
    }
    Ok(entry)
}

/// Scenario name for a log path: the file name without its extension
pub fn scenario_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Read and parse one log file
pub fn parse_log_file(path: &Path) -> Result<Option<ParsedEntry>> {
    let text = std::fs::read_to_string(path).map_err(|e| AggregateError::io(path, e))?;
    let scenario = scenario_name(path);
    parse_log_str(&scenario, &text).map_err(|err| match err {
        AggregateError::Parse { line, message, .. } => AggregateError::Parse {
            scenario: path.display().to_string(),
            line,
            message,
        },
        other => other,
    })
}
