#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tags treated as the legacy side of a comparison
pub const LEGACY_TAGS: [&str; 3] = ["a", "n", "ac"];

/// Standard revision a throughput line belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Standard {
    /// 802.11a/n/ac, carrying the raw tag
    Legacy(String),
    /// 802.11ax
    Ax,
    /// 802.11be
    Be,
    /// Any other tag; matched but not aggregated
    Other(String),
}

impl Standard {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ax" => Standard::Ax,
            "be" => Standard::Be,
            t if LEGACY_TAGS.contains(&t) => Standard::Legacy(t.to_string()),
            t => Standard::Other(t.to_string()),
        }
    }

    /// Full name as printed by the simulator, e.g. `802.11ac`
    pub fn display_name(tag: &str) -> String {
        format!("802.11{tag}")
    }
}

/// Whether a throughput line reports the whole network or one station
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Network,
    Station,
}

/// Bucket an airtime label is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AirtimeCategory {
    Legacy,
    Ax,
    Be,
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_from_tag() {
        assert_eq!(Standard::from_tag("ax"), Standard::Ax);
        assert_eq!(Standard::from_tag("be"), Standard::Be);
        assert_eq!(Standard::from_tag("ac"), Standard::Legacy("ac".to_string()));
        assert_eq!(Standard::from_tag("n"), Standard::Legacy("n".to_string()));
        assert_eq!(Standard::from_tag("g"), Standard::Other("g".to_string()));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Standard::display_name("a"), "802.11a");
    }
}
