//! Focus view: cumulative medals over time.
//!
//! Shows the top-10 overview when nothing is selected, or a single
//! country's curve when the bar chart publishes a selection. Series values
//! are rescaled so each curve ends exactly at the country's official
//! total, and end-of-line labels are de-overlapped here so the drawing
//! side can place them verbatim.

use dioxus::prelude::*;
use medal_agg::cumulative;
use medal_agg::labels::{self, EndLabel};
use medal_agg::ranking;
use medal_chart_ui::components::{ChartContainer, ChartHeader};
use medal_chart_ui::datasets::DatasetCache;
use medal_chart_ui::js_bridge;
use medal_chart_ui::selection::SelectionStore;
use medal_chart_ui::size_observer::{self, SurfaceSize, MIN_CHART_SIZE};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

const HOST_ID: &str = "cumulative-lines-chart";
/// How many countries the unfiltered overview draws.
const TOP_COUNTRIES: usize = 10;

// The drawing side applies these same margins; label y positions are
// computed against the resulting inner height, so the two must agree.
const MARGIN_TOP: f64 = 40.0;
const MARGIN_RIGHT: f64 = 120.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_LEFT: f64 = 55.0;

struct LineState {
    last_size: Option<SurfaceSize>,
    selected: Option<String>,
}

#[component]
pub fn CumulativeLinesView() -> Element {
    let cache = use_context::<DatasetCache>();
    let selection = use_context::<SelectionStore>();

    let state = use_hook(|| {
        Rc::new(RefCell::new(LineState {
            last_size: None,
            selected: None,
        }))
    });

    let redraw = use_hook(|| {
        let state = Rc::clone(&state);
        let f: Rc<dyn Fn()> = Rc::new(move || {
            let (totals, records) = {
                let totals_state = cache.totals.peek();
                let records_state = cache.records.peek();
                match (totals_state.ready(), records_state.ready()) {
                    (Some(t), Some(r)) => (Rc::clone(t), Rc::clone(r)),
                    _ => return,
                }
            };
            let (size, selected) = {
                let st = state.borrow();
                let Some(size) = st.last_size else { return };
                (size, st.selected.clone())
            };

            let countries = match &selected {
                Some(key) => vec![key.clone()],
                None => ranking::top_keys(&totals, TOP_COUNTRIES),
            };
            // Only the overview pads every series out to the global end
            // date; a single country's curve keeps its own extent.
            let extend_to = match (&selected, cumulative::date_extent(&records)) {
                (None, Some((_, max))) => Some(max),
                _ => None,
            };
            let series = cumulative::build_series(&records, &totals, &countries, extend_to);
            if series.is_empty() {
                log::warn!("cumulative lines: no dated records for current scope");
                js_bridge::destroy_chart(HOST_ID);
                return;
            }

            let max_value = cumulative::max_value(&series);
            let inner_height = (size.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
            let mut end_labels: Vec<EndLabel> = series
                .iter()
                .map(|s| EndLabel {
                    key: s.country.clone(),
                    y: labels::end_label_y(s.final_value(), max_value, inner_height),
                })
                .collect();
            labels::spread_labels(&mut end_labels, labels::MIN_LABEL_GAP);

            let title = match &selected {
                Some(key) => format!("Cumulative Medals Over Time — {key}"),
                None => format!("Cumulative Medals Over Time (Top {TOP_COUNTRIES} Countries)"),
            };
            let data_json = json!({
                "series": series,
                "labels": end_labels,
            })
            .to_string();
            let config_json = json!({
                "width": size.width,
                "height": size.height,
                "title": title,
                "maxValue": max_value,
                "margin": {
                    "top": MARGIN_TOP,
                    "right": MARGIN_RIGHT,
                    "bottom": MARGIN_BOTTOM,
                    "left": MARGIN_LEFT,
                },
            })
            .to_string();
            js_bridge::render_line_chart(HOST_ID, &data_json, &config_json);
        });
        f
    });

    // One-time wiring: selection subscription and size observer.
    {
        let state = Rc::clone(&state);
        let redraw = Rc::clone(&redraw);
        let selection = selection.clone();
        use_effect(move || {
            let sel_state = Rc::clone(&state);
            let sel_redraw = Rc::clone(&redraw);
            selection.subscribe(move |key| {
                sel_state.borrow_mut().selected = key.map(str::to_string);
                sel_redraw();
            });

            let resize_state = Rc::clone(&state);
            let resize_redraw = Rc::clone(&redraw);
            match size_observer::observe(HOST_ID, move |size| {
                if !size.meets(MIN_CHART_SIZE) {
                    return;
                }
                resize_state.borrow_mut().last_size = Some(size);
                resize_redraw();
            }) {
                Ok(guard) => guard.forget(),
                Err(e) => log::error!("line view: {e:#}"),
            }
        });
    }

    // First draw once both tables land.
    {
        let redraw = Rc::clone(&redraw);
        use_effect(move || {
            if cache.totals.read().is_ready() && cache.records.read().is_ready() {
                redraw();
            }
        });
    }

    rsx! {
        ChartHeader {
            title: "Cumulative Medals Over Time".to_string(),
            hint: "Tracks the running medal count; follows the country selected in the bar chart."
                .to_string(),
        }
        ChartContainer { id: HOST_ID.to_string(), loading: cache.loading(), height: 420 }
    }
}
