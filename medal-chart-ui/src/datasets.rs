//! Once-initialized async cache over the two medal tables.
//!
//! Each table moves through an explicit state machine so a failed fetch is
//! a representable, renderable state instead of an unhandled rejection.
//! `ensure_loaded` is idempotent: the first call spawns one fetch+parse
//! task per table; every later call (and every redraw) reuses the parsed
//! `Rc` tables without re-fetching or re-parsing.

use crate::js_bridge;
use dioxus::prelude::*;
use medal_data::{CountryTotal, MedalRecord};
use std::rc::Rc;

/// Lifecycle of one fetched table.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    NotRequested,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Shared dataset cache for all three views.
///
/// Cheaply copyable (Dioxus signals) and provided via context by the
/// composition root.
#[derive(Clone, Copy)]
pub struct DatasetCache {
    /// Per-country official totals table.
    pub totals: Signal<LoadState<Rc<Vec<CountryTotal>>>>,
    /// Per-event medal records table.
    pub records: Signal<LoadState<Rc<Vec<MedalRecord>>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        DatasetCache {
            totals: Signal::new(LoadState::NotRequested),
            records: Signal::new(LoadState::NotRequested),
        }
    }

    /// Kick off both fetches exactly once.
    pub fn ensure_loaded(&self, totals_url: &str, records_url: &str) {
        let mut totals = self.totals;
        if matches!(*totals.peek(), LoadState::NotRequested) {
            totals.set(LoadState::Loading);
            let url = totals_url.to_string();
            spawn(async move {
                let state = match fetch_and_parse(&url, medal_data::parse_totals).await {
                    Ok(rows) => LoadState::Ready(Rc::new(rows)),
                    Err(e) => {
                        log::error!("failed to load totals table: {e:#}");
                        LoadState::Failed(e.to_string())
                    }
                };
                totals.set(state);
            });
        }

        let mut records = self.records;
        if matches!(*records.peek(), LoadState::NotRequested) {
            records.set(LoadState::Loading);
            let url = records_url.to_string();
            spawn(async move {
                let state = match fetch_and_parse(&url, medal_data::parse_records).await {
                    Ok(rows) => LoadState::Ready(Rc::new(rows)),
                    Err(e) => {
                        log::error!("failed to load records table: {e:#}");
                        LoadState::Failed(e.to_string())
                    }
                };
                records.set(state);
            });
        }
    }

    /// Whether either table is still on its way in.
    pub fn loading(&self) -> bool {
        matches!(
            *self.totals.read(),
            LoadState::NotRequested | LoadState::Loading
        ) || matches!(
            *self.records.read(),
            LoadState::NotRequested | LoadState::Loading
        )
    }

    /// First fetch/parse failure, if any.
    pub fn failure(&self) -> Option<String> {
        if let Some(e) = self.totals.read().error() {
            return Some(e.to_string());
        }
        if let Some(e) = self.records.read().error() {
            return Some(e.to_string());
        }
        None
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        DatasetCache::new()
    }
}

async fn fetch_and_parse<T>(
    url: &str,
    parse: impl Fn(&str) -> anyhow::Result<Vec<T>>,
) -> anyhow::Result<Vec<T>> {
    let body = js_bridge::fetch_text(url).await?;
    parse(&body)
}

#[cfg(test)]
mod tests {
    use super::LoadState;
    use std::rc::Rc;

    #[test]
    fn test_load_state_accessors() {
        let ready: LoadState<Rc<Vec<u32>>> = LoadState::Ready(Rc::new(vec![1, 2]));
        assert!(ready.is_ready());
        assert_eq!(ready.ready().map(|v| v.len()), Some(2));
        assert_eq!(ready.error(), None);

        let failed: LoadState<Rc<Vec<u32>>> = LoadState::Failed("boom".to_string());
        assert!(!failed.is_ready());
        assert_eq!(failed.error(), Some("boom"));
        assert!(failed.ready().is_none());

        let idle: LoadState<Rc<Vec<u32>>> = LoadState::NotRequested;
        assert!(!idle.is_ready());
        assert!(idle.error().is_none());
    }
}
