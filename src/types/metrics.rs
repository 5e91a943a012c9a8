#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Throughput, delay and jitter reported for one network or station
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MetricRecord {
    pub throughput_mbps: f64,
    pub delay_ms: f64,
    pub jitter_ms: f64,
}

impl MetricRecord {
    pub fn new(throughput_mbps: f64, delay_ms: f64, jitter_ms: f64) -> Self {
        Self {
            throughput_mbps,
            delay_ms,
            jitter_ms,
        }
    }

    /// Component-wise arithmetic mean. Returns `None` for an empty slice.
    pub fn mean(records: &[MetricRecord]) -> Option<MetricRecord> {
        if records.is_empty() {
            return None;
        }

        let count = records.len() as f64;
        let (throughput, delay, jitter) =
            records.iter().fold((0.0, 0.0, 0.0), |(t, d, j), record| {
                (
                    t + record.throughput_mbps,
                    d + record.delay_ms,
                    j + record.jitter_ms,
                )
            });

        Some(MetricRecord::new(
            throughput / count,
            delay / count,
            jitter / count,
        ))
    }

    /// Record with the greatest throughput, first one wins on ties
    pub fn max_by_throughput(records: &[MetricRecord]) -> Option<MetricRecord> {
        records.iter().copied().fold(None, |best, record| match best {
            Some(current) if current.throughput_mbps >= record.throughput_mbps => Some(current),
            _ => Some(record),
        })
    }
}
