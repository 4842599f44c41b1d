//! Per-country official medal totals.

use serde::Serialize;

/// One row of the totals table: a country key and its official medal count.
///
/// This table is the source of truth for ranking and for rescaling
/// event-derived running counts (the records table can under- or
/// over-count relative to it, e.g. team events).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryTotal {
    /// Canonical country key (NOC code where available).
    pub country: String,
    /// Official total medal count.
    pub total: u32,
}

impl CountryTotal {
    pub fn new(country: impl Into<String>, total: u32) -> Self {
        CountryTotal {
            country: country.into(),
            total,
        }
    }
}
