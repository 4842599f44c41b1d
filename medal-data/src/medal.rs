//! Medal kinds and per-event medal records.

use chrono::NaiveDate;
use serde::Serialize;

/// The three medal kinds.
///
/// The derived ordering (Gold < Silver < Bronze) is the fixed display order
/// used for the medal-kind side of the flow diagram, regardless of counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MedalKind {
    Gold,
    Silver,
    Bronze,
}

impl MedalKind {
    /// All kinds in display order.
    pub const ALL: [MedalKind; 3] = [MedalKind::Gold, MedalKind::Silver, MedalKind::Bronze];

    /// Parse a medal-type cell. Accepts the long form used by the records
    /// table ("Gold Medal") as well as the bare word, case-insensitively.
    pub fn parse(s: &str) -> Option<MedalKind> {
        let lower = s.trim().to_ascii_lowercase();
        if lower.starts_with("gold") {
            Some(MedalKind::Gold)
        } else if lower.starts_with("silver") {
            Some(MedalKind::Silver)
        } else if lower.starts_with("bronze") {
            Some(MedalKind::Bronze)
        } else {
            None
        }
    }

    /// Canonical display label, matching the records table's long form.
    pub fn label(&self) -> &'static str {
        match self {
            MedalKind::Gold => "Gold Medal",
            MedalKind::Silver => "Silver Medal",
            MedalKind::Bronze => "Bronze Medal",
        }
    }
}

/// A single awarded medal from the records table.
///
/// `date` is `None` when the source row had a missing or unparseable date;
/// such records still count for flow aggregation but are excluded from
/// time-series aggregation. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedalRecord {
    /// Canonical country key.
    pub country: String,
    /// Discipline the medal was won in.
    pub discipline: String,
    /// Gold, silver or bronze.
    pub kind: MedalKind,
    /// Award date, if the source row carried a parseable one.
    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::MedalKind;

    #[test]
    fn test_parse_medal_kind() {
        assert_eq!(MedalKind::parse("Gold Medal"), Some(MedalKind::Gold));
        assert_eq!(MedalKind::parse("silver medal"), Some(MedalKind::Silver));
        assert_eq!(MedalKind::parse("Bronze"), Some(MedalKind::Bronze));
        assert_eq!(MedalKind::parse(" GOLD "), Some(MedalKind::Gold));
        assert_eq!(MedalKind::parse("Participation"), None);
        assert_eq!(MedalKind::parse(""), None);
    }

    #[test]
    fn test_display_order() {
        let mut kinds = vec![MedalKind::Bronze, MedalKind::Gold, MedalKind::Silver];
        kinds.sort();
        assert_eq!(
            kinds,
            vec![MedalKind::Gold, MedalKind::Silver, MedalKind::Bronze]
        );
        assert_eq!(MedalKind::Gold.label(), "Gold Medal");
    }
}
