//! Paris 2024 Olympics — medal exploration dashboard.
//!
//! Three coordinated views over two medal tables:
//! 1. A paginated ranked bar chart of countries by total medals (context
//!    view). Clicking a bar publishes that country to the selection store.
//! 2. A cumulative-medals-over-time line chart (focus view) that narrows to
//!    the selected country, or shows the top-10 overview when nothing is
//!    selected.
//! 3. A discipline → medal-kind Sankey (focus view), independent of the
//!    selection.
//!
//! Data flow: the dataset cache fetches and parses both CSVs exactly once;
//! every redraw recomputes its aggregates from the shared parsed tables and
//! hands JSON to the D3.js bridge for painting. The selection store and the
//! dataset cache are built here and injected via context, so no view holds
//! ambient global state.

use dioxus::prelude::*;
use medal_chart_ui::components::{ErrorDisplay, LoadingSpinner};
use medal_chart_ui::datasets::DatasetCache;
use medal_chart_ui::js_bridge;
use medal_chart_ui::selection::SelectionStore;

mod views;
use views::{CumulativeLinesView, DisciplineFlowView, MedalsBarView};

/// Per-country official totals table, served alongside the WASM bundle.
const TOTALS_URL: &str = "./data/medals_total.csv";
/// Per-event medal records table.
const RECORDS_URL: &str = "./data/medallists.csv";

const D3_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7";
const D3_SANKEY_URL: &str = "https://cdn.jsdelivr.net/npm/d3-sankey@0.12";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

const CARD_STYLE: &str =
    "background: #fff; border: 1px solid #e0e0e0; border-radius: 8px; padding: 12px;";

#[component]
fn App() -> Element {
    let cache = use_context_provider(DatasetCache::new);
    let _selection = use_context_provider(SelectionStore::new);

    // One-time init: evaluate the chart scripts (they wait for D3 to
    // arrive) and kick off both table fetches.
    use_effect(move || {
        js_bridge::init_charts();
        cache.ensure_loaded(TOTALS_URL, RECORDS_URL);
    });

    rsx! {
        document::Script { src: D3_URL }
        document::Script { src: D3_SANKEY_URL }
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f5f6fa; min-height: 100vh;",

            header {
                style: "margin-bottom: 16px;",
                h1 {
                    style: "margin: 0 0 4px 0; font-size: 22px;",
                    "Paris 2024 Olympics — Medal Exploration Dashboard"
                }
                p {
                    style: "margin: 0; font-size: 13px; color: #666;",
                    "Start from the country overview, then drill into temporal and structural detail through coordinated interactions."
                }
            }

            if let Some(err) = cache.failure() {
                ErrorDisplay { message: err }
            } else if cache.loading() {
                LoadingSpinner {}
            }

            main {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                section {
                    style: "grid-column: span 2; {CARD_STYLE}",
                    MedalsBarView {}
                }
                section {
                    style: "{CARD_STYLE}",
                    CumulativeLinesView {}
                }
                section {
                    style: "{CARD_STYLE}",
                    DisciplineFlowView {}
                }
            }
        }
    }
}
