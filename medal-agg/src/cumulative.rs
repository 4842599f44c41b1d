//! Rescaled running cumulative medal series.
//!
//! The records table under- and over-counts relative to the official totals
//! table (team events award one medal per athlete row, some rows lack
//! dates), so running counts are rescaled by `official_total / raw_count`.
//! The rescale is exact at the endpoint: the final emitted value equals the
//! official total whenever the lookup succeeds.

use chrono::NaiveDate;
use medal_data::{CountryTotal, MedalRecord};
use serde::Serialize;
use std::collections::HashMap;

/// One point of a cumulative series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// A per-country cumulative series, ready for the line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountrySeries {
    pub country: String,
    pub points: Vec<SeriesPoint>,
}

impl CountrySeries {
    /// Final (largest) value of the series. Values are non-decreasing, so
    /// this is the last point's value.
    pub fn final_value(&self) -> f64 {
        self.points.last().map(|p| p.value).unwrap_or(0.0)
    }
}

/// Min and max award date over the dated records, if any.
pub fn date_extent(records: &[MedalRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let mut extent: Option<(NaiveDate, NaiveDate)> = None;
    for date in records.iter().filter_map(|r| r.date) {
        extent = Some(match extent {
            None => (date, date),
            Some((min, max)) => (min.min(date), max.max(date)),
        });
    }
    extent
}

/// Largest value across all series (0 when empty), for the y domain.
pub fn max_value(series: &[CountrySeries]) -> f64 {
    series.iter().map(|s| s.final_value()).fold(0.0, f64::max)
}

/// Build one cumulative series per requested country, in the given order.
///
/// For each country: its dated records are sorted ascending and bucketed by
/// day; a leading anchor at value 0 sits on the first event's date, then one
/// point per distinct date carries `running_count * rescale_factor`. The
/// rescale factor defaults to 1 when the country has no totals entry.
///
/// `extend_to` appends a trailing point holding the final value (used by the
/// unfiltered overview so every series spans the full observed date domain
/// even when a country's last medal predates the global end date).
///
/// Countries with zero dated records yield no series at all.
pub fn build_series(
    records: &[MedalRecord],
    totals: &[CountryTotal],
    countries: &[String],
    extend_to: Option<NaiveDate>,
) -> Vec<CountrySeries> {
    let total_map: HashMap<&str, u32> = totals
        .iter()
        .map(|t| (t.country.as_str(), t.total))
        .collect();

    let mut by_country: HashMap<&str, Vec<NaiveDate>> = HashMap::new();
    for r in records {
        if let Some(date) = r.date {
            if countries.iter().any(|c| c == &r.country) {
                by_country.entry(r.country.as_str()).or_default().push(date);
            }
        }
    }

    countries
        .iter()
        .filter_map(|country| {
            let mut dates = by_country.remove(country.as_str())?;
            dates.sort();

            let raw_count = dates.len();
            let official = total_map
                .get(country.as_str())
                .copied()
                .unwrap_or(raw_count as u32);
            let factor = official as f64 / raw_count as f64;

            let mut points = vec![SeriesPoint {
                date: dates[0],
                value: 0.0,
            }];
            let mut running = 0usize;
            let mut i = 0usize;
            while i < dates.len() {
                let date = dates[i];
                // bucket same-day awards into one emitted point
                while i < dates.len() && dates[i] == date {
                    running += 1;
                    i += 1;
                }
                points.push(SeriesPoint {
                    date,
                    value: running as f64 * factor,
                });
            }

            if let Some(end) = extend_to {
                let final_value = running as f64 * factor;
                if points.last().map(|p| p.date < end).unwrap_or(false) {
                    points.push(SeriesPoint {
                        date: end,
                        value: final_value,
                    });
                }
            }

            Some(CountrySeries {
                country: country.clone(),
                points,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{build_series, date_extent, max_value};
    use chrono::NaiveDate;
    use medal_data::{CountryTotal, MedalKind, MedalRecord};

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, day).unwrap()
    }

    fn record(country: &str, date: Option<NaiveDate>) -> MedalRecord {
        MedalRecord {
            country: country.to_string(),
            discipline: "Swimming".to_string(),
            kind: MedalKind::Gold,
            date,
        }
    }

    #[test]
    fn test_degenerate_single_event() {
        let records = vec![record("USA", Some(d(30)))];
        let totals = vec![CountryTotal::new("USA", 1)];
        let series = build_series(&records, &totals, &["USA".to_string()], None);
        assert_eq!(series.len(), 1);
        let points = &series[0].points;
        assert_eq!(points.len(), 2);
        assert_eq!((points[0].date, points[0].value), (d(30), 0.0));
        assert_eq!((points[1].date, points[1].value), (d(30), 1.0));
    }

    #[test]
    fn test_rescale_exact_at_endpoint() {
        // 3 raw events vs an official total of 6: factor 2.
        let records = vec![
            record("USA", Some(d(27))),
            record("USA", Some(d(28))),
            record("USA", Some(d(30))),
        ];
        let totals = vec![CountryTotal::new("USA", 6)];
        let series = build_series(&records, &totals, &["USA".to_string()], None);
        assert_eq!(series[0].final_value(), 6.0);
        // non-decreasing throughout
        let values: Vec<f64> = series[0].points.iter().map(|p| p.value).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_missing_total_defaults_to_factor_one() {
        let records = vec![record("NZL", Some(d(28))), record("NZL", Some(d(29)))];
        let series = build_series(&records, &[], &["NZL".to_string()], None);
        assert_eq!(series[0].final_value(), 2.0);
    }

    #[test]
    fn test_same_day_awards_bucket_into_one_point() {
        let records = vec![
            record("FRA", Some(d(28))),
            record("FRA", Some(d(28))),
            record("FRA", Some(d(29))),
        ];
        let totals = vec![CountryTotal::new("FRA", 3)];
        let series = build_series(&records, &totals, &["FRA".to_string()], None);
        let points = &series[0].points;
        // anchor + two distinct dates
        assert_eq!(points.len(), 3);
        assert_eq!(points[1].value, 2.0);
        assert_eq!(points[2].value, 3.0);
    }

    #[test]
    fn test_trailing_anchor_extends_to_global_end() {
        let records = vec![record("USA", Some(d(27))), record("FRA", Some(d(31)))];
        let totals = vec![CountryTotal::new("USA", 1), CountryTotal::new("FRA", 1)];
        let countries = vec!["USA".to_string(), "FRA".to_string()];
        let series = build_series(&records, &totals, &countries, Some(d(31)));

        // USA's last medal predates the global end; a flat tail is added.
        let usa = &series[0];
        assert_eq!(usa.points.last().unwrap().date, d(31));
        assert_eq!(usa.points.last().unwrap().value, 1.0);

        // FRA already ends at the global end; no duplicate point.
        let fra = &series[1];
        assert_eq!(fra.points.len(), 2);
    }

    #[test]
    fn test_undated_and_unrequested_records_excluded() {
        let records = vec![
            record("USA", Some(d(30))),
            record("USA", None),
            record("CHN", Some(d(30))),
        ];
        let totals = vec![CountryTotal::new("USA", 1)];
        let series = build_series(&records, &totals, &["USA".to_string()], None);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].final_value(), 1.0);
    }

    #[test]
    fn test_country_without_dated_records_yields_no_series() {
        let records = vec![record("USA", None)];
        let series = build_series(&records, &[], &["USA".to_string()], None);
        assert!(series.is_empty());
    }

    #[test]
    fn test_date_extent_and_max_value() {
        let records = vec![
            record("USA", Some(d(29))),
            record("USA", None),
            record("FRA", Some(d(26))),
        ];
        assert_eq!(date_extent(&records), Some((d(26), d(29))));
        assert_eq!(date_extent(&[record("USA", None)]), None);

        let totals = vec![CountryTotal::new("USA", 4)];
        let countries = vec!["USA".to_string(), "FRA".to_string()];
        let series = build_series(&records, &totals, &countries, None);
        assert_eq!(max_value(&series), 4.0);
        assert_eq!(max_value(&[]), 0.0);
    }
}
