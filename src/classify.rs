//! Airtime label classification
//!
//! Airtime tables name devices with whatever string the scenario author
//! passed to the logger (`staDeviceLegacy`, `STA Device B`, `staDevicesAx#2`,
//! ...). Labels are mapped to a standard by an ordered rule table; the first
//! rule that fires decides. Generic labels are resolved with the log-level
//! knowledge of which new standards reported metrics.

use crate::types::AirtimeCategory;

/// Suffixes (before any `#n`) naming the legacy device in two-device scenarios
const LEGACY_SUFFIXES: [&str; 3] = ["stadevicea", "stadevicesa", "stadevicelegacy"];
const GENERIC_B_SUFFIX: &str = "stadeviceb";
const GENERIC_B_MARKER: &str = "stacomparisonb";
const GENERIC_B_PREFIXES: [&str; 2] = ["stadeviceb", "stadevicesb"];

/// Label after whitespace removal and lowercasing
struct NormalizedLabel {
    full: String,
    /// Text before the first `#`
    base: String,
}

impl NormalizedLabel {
    fn new(label: &str) -> Self {
        let full: String = label
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        let base = full.split('#').next().unwrap_or_default().to_string();
        Self { full, base }
    }
}

/// Which new standards reported metrics in the log being classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LogContext {
    has_ax: bool,
    has_be: bool,
}

impl LogContext {
    /// The new standard present in this log, if exactly one is
    fn sole_new_standard(self) -> Option<AirtimeCategory> {
        match (self.has_ax, self.has_be) {
            (true, false) => Some(AirtimeCategory::Ax),
            (false, true) => Some(AirtimeCategory::Be),
            _ => None,
        }
    }
}

type Rule = fn(&NormalizedLabel, LogContext) -> Option<AirtimeCategory>;

fn when(hit: bool, category: AirtimeCategory) -> Option<AirtimeCategory> {
    hit.then_some(category)
}

fn contains_legacy(label: &NormalizedLabel, _: LogContext) -> Option<AirtimeCategory> {
    when(label.full.contains("legacy"), AirtimeCategory::Legacy)
}

fn legacy_device_suffix(label: &NormalizedLabel, _: LogContext) -> Option<AirtimeCategory> {
    when(
        LEGACY_SUFFIXES.iter().any(|s| label.base.ends_with(s)),
        AirtimeCategory::Legacy,
    )
}

fn contains_ax(label: &NormalizedLabel, _: LogContext) -> Option<AirtimeCategory> {
    when(label.full.contains("ax"), AirtimeCategory::Ax)
}

fn contains_be(label: &NormalizedLabel, _: LogContext) -> Option<AirtimeCategory> {
    when(label.full.contains("be"), AirtimeCategory::Be)
}

fn generic_b_suffix(label: &NormalizedLabel, ctx: LogContext) -> Option<AirtimeCategory> {
    if label.base.ends_with(GENERIC_B_SUFFIX) || label.full.contains(GENERIC_B_MARKER) {
        ctx.sole_new_standard()
    } else {
        None
    }
}

fn generic_b_prefix(label: &NormalizedLabel, ctx: LogContext) -> Option<AirtimeCategory> {
    if GENERIC_B_PREFIXES.iter().any(|p| label.base.starts_with(p)) {
        ctx.sole_new_standard()
    } else {
        None
    }
}

/// Evaluated top to bottom; several labels match more than one rule
const RULES: [Rule; 6] = [
    contains_legacy,
    legacy_device_suffix,
    contains_ax,
    contains_be,
    generic_b_suffix,
    generic_b_prefix,
];

/// Classify a trimmed airtime label
pub fn classify_airtime_label(label: &str, has_ax: bool, has_be: bool) -> AirtimeCategory {
    let normalized = NormalizedLabel::new(label);
    let ctx = LogContext { has_ax, has_be };

    RULES
        .iter()
        .find_map(|rule| rule(&normalized, ctx))
        .unwrap_or(AirtimeCategory::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use AirtimeCategory::*;

    #[test]
    fn test_legacy_wins_over_other_cues() {
        assert_eq!(classify_airtime_label("staDeviceLegacy", true, true), Legacy);
        assert_eq!(classify_airtime_label("Legacy AX bridge", true, false), Legacy);
        assert_eq!(classify_airtime_label("be-legacy#1", false, true), Legacy);
    }

    #[test]
    fn test_legacy_device_suffix() {
        assert_eq!(classify_airtime_label("STA Device A", true, false), Legacy);
        assert_eq!(classify_airtime_label("staDevicesA#4", false, true), Legacy);
    }

    #[test]
    fn test_explicit_standard_names() {
        assert_eq!(classify_airtime_label("staDevicesAx#0", false, false), Ax);
        assert_eq!(classify_airtime_label("staDevicesBe", false, false), Be);
        // "ax" is checked before "be"
        assert_eq!(classify_airtime_label("ax-be-mld", true, true), Ax);
    }

    #[test]
    fn test_generic_label_resolved_by_log_context() {
        assert_eq!(classify_airtime_label("STA Device B", true, false), Ax);
        assert_eq!(classify_airtime_label("STA Device B", false, true), Be);
        assert_eq!(classify_airtime_label("STA Device B", true, true), Unknown);
        assert_eq!(classify_airtime_label("STA Device B", false, false), Unknown);
    }

    #[test]
    fn test_generic_prefix_and_comparison_marker() {
        assert_eq!(classify_airtime_label("staDevicesB_7", true, false), Ax);
        assert_eq!(classify_airtime_label("staDeviceB2", false, true), Be);
        assert_eq!(classify_airtime_label("sta comparison B#1", true, false), Ax);
    }

    #[test]
    fn test_hash_suffix_is_ignored_for_device_patterns() {
        assert_eq!(classify_airtime_label("staDeviceA#0", true, false), Legacy);
        assert_eq!(classify_airtime_label("staDeviceB#3", false, true), Be);
    }

    #[test]
    fn test_unrelated_label_is_unknown() {
        assert_eq!(classify_airtime_label("apDevice", true, false), Unknown);
    }
}
