use crate::types::MetricRecord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One row of an "Airtime usage" table
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AirtimeEntry {
    pub label: String,
    pub seconds: f64,
    pub percent: f64,
}

/// Airtime percentages reduced per category
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AirtimeSummary {
    pub legacy_mean: Option<f64>,
    pub ax_mean: Option<f64>,
    pub ax_max: Option<f64>,
    pub be_mean: Option<f64>,
    pub be_max: Option<f64>,
}

/// Summary of one simulation log
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedEntry {
    pub scenario: String,
    pub legacy_standard: Option<String>,
    pub legacy_metrics: Option<MetricRecord>,
    pub ax_mean: Option<MetricRecord>,
    pub ax_max: Option<MetricRecord>,
    pub be_mean: Option<MetricRecord>,
    pub be_max: Option<MetricRecord>,
    pub airtime: AirtimeSummary,
}
