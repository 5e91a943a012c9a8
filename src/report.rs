//! Comparison reports built from parsed entries

use crate::types::{MetricRecord, ParsedEntry};

pub const LEGACY_AX_FIELDS: [&str; 14] = [
    "scenario",
    "legacy_standard",
    "legacy_throughput_mbps",
    "legacy_delay_ms",
    "legacy_jitter_ms",
    "legacy_airtime_pct",
    "ax_throughput_mbps",
    "ax_delay_ms",
    "ax_jitter_ms",
    "ax_max_throughput_mbps",
    "ax_max_delay_ms",
    "ax_max_jitter_ms",
    "ax_airtime_avg_pct",
    "ax_airtime_max_pct",
];

pub const LEGACY_BE_FIELDS: [&str; 14] = [
    "scenario",
    "legacy_standard",
    "legacy_throughput_mbps",
    "legacy_delay_ms",
    "legacy_jitter_ms",
    "legacy_airtime_pct",
    "be_throughput_mbps",
    "be_delay_ms",
    "be_jitter_ms",
    "be_max_throughput_mbps",
    "be_max_delay_ms",
    "be_max_jitter_ms",
    "be_airtime_avg_pct",
    "be_airtime_max_pct",
];

/// Which comparison a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    LegacyVsAx,
    LegacyVsBe,
}

impl ReportKind {
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            ReportKind::LegacyVsAx => &LEGACY_AX_FIELDS,
            ReportKind::LegacyVsBe => &LEGACY_BE_FIELDS,
        }
    }

    /// Standard name used in user-facing messages
    pub fn new_standard(self) -> &'static str {
        match self {
            ReportKind::LegacyVsAx => "802.11ax",
            ReportKind::LegacyVsBe => "802.11be",
        }
    }
}

/// One cell of a report row
#[derive(Debug, Clone, PartialEq)]
pub enum ReportValue {
    Text(String),
    Number(f64),
    Missing,
}

impl ReportValue {
    fn optional(value: Option<f64>) -> Self {
        value.map_or(ReportValue::Missing, ReportValue::Number)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ReportValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text written to a CSV cell
    pub fn to_cell(&self) -> String {
        match self {
            ReportValue::Text(text) => text.clone(),
            ReportValue::Number(n) => format_float(*n),
            ReportValue::Missing => String::new(),
        }
    }
}

/// Shortest round-trip form, keeping a `.0` on integral values.
///
/// Magnitudes below 1e-4 or from 1e16 up switch to exponent notation with a
/// signed, two-digit exponent (`1e-05`, `1.5e+16`).
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value != 0.0 {
        let sci = format!("{value:e}");
        if let Some((mantissa, exponent)) = sci.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                if !(-4..16).contains(&exponent) {
                    let sign = if exponent < 0 { '-' } else { '+' };
                    return format!("{mantissa}e{sign}{:02}", exponent.abs());
                }
            }
        }
    }

    let text = format!("{value}");
    if value.is_finite() && !text.contains(['.', 'e', 'E']) {
        format!("{text}.0")
    } else {
        text
    }
}

/// Fixed-order field/value pairs for one scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub kind: ReportKind,
    values: Vec<ReportValue>,
}

impl ReportRow {
    fn new(kind: ReportKind, values: Vec<ReportValue>) -> Self {
        debug_assert_eq!(values.len(), kind.fields().len());
        Self { kind, values }
    }

    pub fn get(&self, field: &str) -> Option<&ReportValue> {
        self.kind
            .fields()
            .iter()
            .position(|name| *name == field)
            .map(|index| &self.values[index])
    }

    /// Field names paired with their values, in column order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ReportValue)> + '_ {
        self.kind.fields().iter().copied().zip(self.values.iter())
    }

    pub fn values(&self) -> &[ReportValue] {
        &self.values
    }
}

fn comparison_row(
    kind: ReportKind,
    entry: &ParsedEntry,
    legacy: MetricRecord,
    mean: MetricRecord,
    max: MetricRecord,
    airtime_avg: Option<f64>,
    airtime_max: Option<f64>,
) -> ReportRow {
    use ReportValue::{Number, Text};

    ReportRow::new(
        kind,
        vec![
            Text(entry.scenario.clone()),
            Text(entry.legacy_standard.clone().unwrap_or_default()),
            Number(legacy.throughput_mbps),
            Number(legacy.delay_ms),
            Number(legacy.jitter_ms),
            ReportValue::optional(entry.airtime.legacy_mean),
            Number(mean.throughput_mbps),
            Number(mean.delay_ms),
            Number(mean.jitter_ms),
            Number(max.throughput_mbps),
            Number(max.delay_ms),
            Number(max.jitter_ms),
            ReportValue::optional(airtime_avg),
            ReportValue::optional(airtime_max),
        ],
    )
}

/// Row for the legacy-vs-ax report, when the entry has both sides
pub fn legacy_ax_row(entry: &ParsedEntry) -> Option<ReportRow> {
    let (legacy, mean, max) = (entry.legacy_metrics?, entry.ax_mean?, entry.ax_max?);
    Some(comparison_row(
        ReportKind::LegacyVsAx,
        entry,
        legacy,
        mean,
        max,
        entry.airtime.ax_mean,
        entry.airtime.ax_max,
    ))
}

/// Row for the legacy-vs-be report, when the entry has both sides
pub fn legacy_be_row(entry: &ParsedEntry) -> Option<ReportRow> {
    let (legacy, mean, max) = (entry.legacy_metrics?, entry.be_mean?, entry.be_max?);
    Some(comparison_row(
        ReportKind::LegacyVsBe,
        entry,
        legacy,
        mean,
        max,
        entry.airtime.be_mean,
        entry.airtime.be_max,
    ))
}

/// Both comparison tables for a batch of logs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reports {
    pub legacy_ax: Vec<ReportRow>,
    pub legacy_be: Vec<ReportRow>,
}

impl Reports {
    pub fn rows(&self, kind: ReportKind) -> &[ReportRow] {
        match kind {
            ReportKind::LegacyVsAx => &self.legacy_ax,
            ReportKind::LegacyVsBe => &self.legacy_be,
        }
    }
}

/// Build both reports, keeping the order of `entries`
pub fn build_reports(entries: &[ParsedEntry]) -> Reports {
    Reports {
        legacy_ax: entries.iter().filter_map(legacy_ax_row).collect(),
        legacy_be: entries.iter().filter_map(legacy_be_row).collect(),
    }
}
