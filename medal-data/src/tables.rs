//! CSV parsing for the two medal tables.
//!
//! Both tables ship with either a `country_code` or a `country` column
//! depending on the export. Header resolution prefers the code-style column
//! and falls back to the full-name column, once, at parse time; every
//! downstream consumer sees one canonical `country` key.
//!
//! # CSV Formats
//!
//! - **Totals** (has headers): `country_code (or country), ..., Total`
//! - **Records** (has headers):
//!   `country_code (or country), discipline, medal_type, medal_date`
//!
//! Per-row policy is lenient: a row with a missing country, discipline or
//! medal type is skipped (and counted); a row with a bad `medal_date` is
//! kept with `date: None`.

use crate::country::CountryTotal;
use crate::dates::parse_iso_date;
use crate::medal::{MedalKind, MedalRecord};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, StringRecord};

/// Preferred country column (NOC code).
const COUNTRY_CODE_COLUMN: &str = "country_code";
/// Fallback country column (full name).
const COUNTRY_COLUMN: &str = "country";
/// Official total column in the totals table.
const TOTAL_COLUMN: &str = "Total";
/// Discipline column in the records table.
const DISCIPLINE_COLUMN: &str = "discipline";
/// Medal kind column in the records table.
const MEDAL_TYPE_COLUMN: &str = "medal_type";
/// Award date column in the records table.
const MEDAL_DATE_COLUMN: &str = "medal_date";

fn header_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

/// Resolve the country column: `country_code` preferred, `country` fallback.
fn country_index(headers: &StringRecord) -> anyhow::Result<usize> {
    if let Some(i) = header_index(headers, COUNTRY_CODE_COLUMN) {
        return Ok(i);
    }
    if let Some(i) = header_index(headers, COUNTRY_COLUMN) {
        return Ok(i);
    }
    bail!("totals/records CSV has neither '{COUNTRY_CODE_COLUMN}' nor '{COUNTRY_COLUMN}' column");
}

/// Parse the totals table.
///
/// Rows with an empty country or a non-numeric `Total` are skipped.
pub fn parse_totals(csv_data: &str) -> anyhow::Result<Vec<CountryTotal>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers = rdr.headers().context("totals CSV has no header row")?.clone();
    let country_idx = country_index(&headers)?;
    let total_idx = header_index(&headers, TOTAL_COLUMN)
        .with_context(|| format!("totals CSV has no '{TOTAL_COLUMN}' column"))?;

    let mut rows = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let r = result?;
        let country = r.get(country_idx).unwrap_or("").trim();
        let total = r.get(total_idx).unwrap_or("").trim().parse::<u32>();
        match (country.is_empty(), total) {
            (false, Ok(total)) => rows.push(CountryTotal::new(country, total)),
            _ => skipped += 1,
        }
    }
    log::info!("parsed {} country totals, skipped {}", rows.len(), skipped);
    Ok(rows)
}

/// Parse the per-event records table.
///
/// Rows missing country, discipline or a recognizable medal kind are
/// skipped. A missing or unparseable `medal_date` keeps the row with
/// `date: None`; the column itself is optional.
pub fn parse_records(csv_data: &str) -> anyhow::Result<Vec<MedalRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers = rdr.headers().context("records CSV has no header row")?.clone();
    let country_idx = country_index(&headers)?;
    let discipline_idx = header_index(&headers, DISCIPLINE_COLUMN)
        .with_context(|| format!("records CSV has no '{DISCIPLINE_COLUMN}' column"))?;
    let medal_idx = header_index(&headers, MEDAL_TYPE_COLUMN)
        .with_context(|| format!("records CSV has no '{MEDAL_TYPE_COLUMN}' column"))?;
    let date_idx = header_index(&headers, MEDAL_DATE_COLUMN);

    let mut rows = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let r = result?;
        let country = r.get(country_idx).unwrap_or("").trim();
        let discipline = r.get(discipline_idx).unwrap_or("").trim();
        let kind = MedalKind::parse(r.get(medal_idx).unwrap_or(""));

        let (kind, date) = match kind {
            Some(kind) if !country.is_empty() && !discipline.is_empty() => {
                let date = date_idx
                    .and_then(|i| r.get(i))
                    .and_then(parse_iso_date);
                (kind, date)
            }
            _ => {
                skipped += 1;
                continue;
            }
        };

        rows.push(MedalRecord {
            country: country.to_string(),
            discipline: discipline.to_string(),
            kind,
            date,
        });
    }
    log::info!("parsed {} medal records, skipped {}", rows.len(), skipped);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::{parse_records, parse_totals};
    use crate::medal::MedalKind;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_totals_with_country_code() {
        let csv = "country_code,country,Total\nUSA,United States,40\nCHN,China,30\n";
        let totals = parse_totals(csv).unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].country, "USA");
        assert_eq!(totals[0].total, 40);
    }

    #[test]
    fn test_parse_totals_country_fallback() {
        // No country_code column: the full-name column becomes the key.
        let csv = "country,Total\nUSA,40\nCHN,30\n";
        let totals = parse_totals(csv).unwrap();
        assert_eq!(totals[0].country, "USA");
        assert_eq!(totals[1].country, "CHN");
    }

    #[test]
    fn test_parse_totals_skips_bad_rows() {
        let csv = "country_code,Total\nUSA,40\n,12\nFRA,not-a-number\nGBR,29\n";
        let totals = parse_totals(csv).unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[1].country, "GBR");
    }

    #[test]
    fn test_parse_totals_missing_required_column() {
        assert!(parse_totals("noc,Total\nUSA,40\n").is_err());
        assert!(parse_totals("country_code,Sum\nUSA,40\n").is_err());
    }

    #[test]
    fn test_parse_records() {
        let csv = "country_code,discipline,medal_type,medal_date\n\
                   USA,Swimming,Gold Medal,2024-07-30\n\
                   FRA,Judo,Bronze Medal,2024-08-01\n";
        let records = parse_records(csv).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].country, "USA");
        assert_eq!(records[0].kind, MedalKind::Gold);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 7, 30));
    }

    #[test]
    fn test_parse_records_bad_date_kept_without_date() {
        let csv = "country,discipline,medal_type,medal_date\n\
                   USA,Swimming,Gold Medal,soon\n\
                   USA,Swimming,Silver Medal,\n";
        let records = parse_records(csv).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.date.is_none()));
    }

    #[test]
    fn test_parse_records_skips_incomplete_rows() {
        let csv = "country_code,discipline,medal_type,medal_date\n\
                   ,Swimming,Gold Medal,2024-07-30\n\
                   USA,,Gold Medal,2024-07-30\n\
                   USA,Swimming,Honorable Mention,2024-07-30\n\
                   USA,Swimming,Gold Medal,2024-07-30\n";
        let records = parse_records(csv).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].discipline, "Swimming");
    }
}
