//! Data model and CSV normalization for the Olympic medal dashboard.
//!
//! Two delimited tables feed the dashboard:
//! - **totals**: one row per country with its official medal total
//!   (`country_code`/`country`, `Total`)
//! - **records**: one row per awarded medal
//!   (`country_code`/`country`, `discipline`, `medal_type`, `medal_date`)
//!
//! Both tables exist in the wild with either a `country_code` or a
//! `country` column. [`tables`] resolves that fallback once at parse time,
//! so everything downstream sees a single canonical `country` key.

pub mod country;
pub mod dates;
pub mod medal;
pub mod tables;

pub use country::CountryTotal;
pub use medal::{MedalKind, MedalRecord};
pub use tables::{parse_records, parse_totals};
