//! Line patterns for ns-3 coexistence logs
//!
//! Two line shapes are recognised:
//!
//! ```text
//! 802.11ax STA #2 - Throughput: 120.5 Mbit/s, Average delay: 3.1 ms, Average jitter: 0.4 ms
//!   staDeviceLegacy#0: 1.2s (60%)
//! ```
//!
//! The first is matched anywhere in a log, the second only inside an
//! "Airtime usage" block.

use crate::types::{AirtimeEntry, Context, MetricRecord};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Trimmed prefix that opens an airtime table
pub const AIRTIME_HEADER: &str = "Airtime usage";

const THROUGHPUT_PATTERN: &str = concat!(
    r"^802\.11(?P<standard>[a-z]+)",
    r"(?: (?P<context>network|STA #\d+))?",
    r" - Throughput: (?P<throughput>\S+) Mbit/s,",
    r" Average delay: (?P<delay>\S+) ms,",
    r" Average jitter: (?P<jitter>\S+) ms",
);

// Numbers are captured as whole tokens so that malformed values reach
// `parse_number` instead of silently failing the match
const AIRTIME_PATTERN: &str =
    r"^\s*(?P<label>[^:]+):\s+(?P<seconds>[^\s()%]+?)\s*s\s+\((?P<percent>[^\s()%]+)%\)";

fn throughput_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(THROUGHPUT_PATTERN).expect("throughput pattern is valid"))
}

fn airtime_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(AIRTIME_PATTERN).expect("airtime pattern is valid"))
}

/// A matched throughput report line
#[derive(Debug, Clone, PartialEq)]
pub struct ThroughputLine {
    /// Raw tag after `802.11`, e.g. `ax`
    pub tag: String,
    pub context: Context,
    pub metrics: MetricRecord,
}

/// Numeric text inside a matching line that failed to parse
#[derive(Debug, Clone, PartialEq)]
pub struct NumberError {
    pub field: &'static str,
    pub text: String,
}

impl std::fmt::Display for NumberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed {} value '{}'", self.field, self.text)
    }
}

fn parse_number(caps: &Captures<'_>, field: &'static str) -> Result<f64, NumberError> {
    let text = &caps[field];
    text.parse::<f64>().map_err(|_| NumberError {
        field,
        text: text.to_string(),
    })
}

/// Match a throughput line.
///
/// Returns `Ok(None)` when the line has a different shape, and an error when
/// it has the right shape but one of its numbers is malformed.
pub fn match_throughput(line: &str) -> Result<Option<ThroughputLine>, NumberError> {
    let Some(caps) = throughput_regex().captures(line) else {
        return Ok(None);
    };

    let context = match caps.name("context") {
        Some(ctx) if ctx.as_str().to_ascii_lowercase().starts_with("sta") => Context::Station,
        _ => Context::Network,
    };

    let metrics = MetricRecord::new(
        parse_number(&caps, "throughput")?,
        parse_number(&caps, "delay")?,
        parse_number(&caps, "jitter")?,
    );

    Ok(Some(ThroughputLine {
        tag: caps["standard"].to_string(),
        context,
        metrics,
    }))
}

/// Match one row of an airtime table
pub fn match_airtime(line: &str) -> Result<Option<AirtimeEntry>, NumberError> {
    let Some(caps) = airtime_regex().captures(line) else {
        return Ok(None);
    };

    Ok(Some(AirtimeEntry {
        label: caps["label"].trim().to_string(),
        seconds: parse_number(&caps, "seconds")?,
        percent: parse_number(&caps, "percent")?,
    }))
}

/// True for the line that opens an airtime table
pub fn is_airtime_header(line: &str) -> bool {
    line.trim().starts_with(AIRTIME_HEADER)
}
