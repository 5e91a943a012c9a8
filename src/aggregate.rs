//! Reduction of per-station metrics and airtime tables

use crate::classify::classify_airtime_label;
use crate::types::{AirtimeCategory, AirtimeEntry, AirtimeSummary, MetricRecord};
use log::debug;

/// Reduce one standard's records to `(mean, max)`.
///
/// Station records take precedence over the network record; with neither,
/// both halves are `None`.
pub fn aggregate_metrics(
    network: Option<MetricRecord>,
    stations: &[MetricRecord],
) -> (Option<MetricRecord>, Option<MetricRecord>) {
    if !stations.is_empty() {
        return (
            MetricRecord::mean(stations),
            MetricRecord::max_by_throughput(stations),
        );
    }

    match network {
        Some(record) => (Some(record), Some(record)),
        None => (None, None),
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

#[derive(Debug, Default)]
struct Buckets {
    legacy: Vec<f64>,
    ax: Vec<f64>,
    be: Vec<f64>,
    unknown: Vec<f64>,
}

impl Buckets {
    fn push(&mut self, category: AirtimeCategory, percent: f64) {
        match category {
            AirtimeCategory::Legacy => self.legacy.push(percent),
            AirtimeCategory::Ax => self.ax.push(percent),
            AirtimeCategory::Be => self.be.push(percent),
            AirtimeCategory::Unknown => self.unknown.push(percent),
        }
    }

    /// Hand unknown labels to a standard that reported metrics but got
    /// no airtime entry of its own. Ax is served first.
    fn reassign_unknown(&mut self, has_ax: bool, has_be: bool) {
        if has_ax && self.ax.is_empty() && !self.unknown.is_empty() {
            debug!("Reassigning {} unknown airtime entries to 802.11ax", self.unknown.len());
            self.ax = std::mem::take(&mut self.unknown);
        }
        if has_be && self.be.is_empty() && !self.unknown.is_empty() {
            debug!("Reassigning {} unknown airtime entries to 802.11be", self.unknown.len());
            self.be = std::mem::take(&mut self.unknown);
        }
    }
}

/// Classify airtime entries and reduce each bucket to mean/max.
///
/// Labels that stay unknown after reassignment are dropped.
pub fn summarize_airtime(entries: &[AirtimeEntry], has_ax: bool, has_be: bool) -> AirtimeSummary {
    if entries.is_empty() {
        return AirtimeSummary::default();
    }

    let mut buckets = Buckets::default();
    for entry in entries {
        let category = classify_airtime_label(&entry.label, has_ax, has_be);
        debug!("Airtime label '{}' -> {:?}", entry.label, category);
        buckets.push(category, entry.percent);
    }
    buckets.reassign_unknown(has_ax, has_be);

    if !buckets.unknown.is_empty() {
        debug!("{} airtime entries left unclassified", buckets.unknown.len());
    }

    AirtimeSummary {
        legacy_mean: mean(&buckets.legacy),
        ax_mean: mean(&buckets.ax),
        ax_max: max(&buckets.ax),
        be_mean: mean(&buckets.be),
        be_max: max(&buckets.be),
    }
}
