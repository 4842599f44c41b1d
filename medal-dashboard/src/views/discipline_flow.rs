//! Focus view: discipline → medal-kind flows as a Sankey.
//!
//! Structural rather than temporal: every medal record contributes one
//! unit of flow from its discipline to its medal kind, with the long tail
//! of disciplines collapsed into "Other". Deliberately independent of the
//! country selection.

use dioxus::prelude::*;
use medal_agg::flow::{self, DEFAULT_TOP_DISCIPLINES};
use medal_chart_ui::components::{ChartContainer, ChartHeader};
use medal_chart_ui::datasets::DatasetCache;
use medal_chart_ui::js_bridge;
use medal_chart_ui::size_observer::{self, SurfaceSize, MIN_FLOW_SIZE};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

const HOST_ID: &str = "discipline-flow-chart";

#[component]
pub fn DisciplineFlowView() -> Element {
    let cache = use_context::<DatasetCache>();

    let last_size: Rc<RefCell<Option<SurfaceSize>>> = use_hook(|| Rc::new(RefCell::new(None)));

    let redraw = use_hook(|| {
        let last_size = Rc::clone(&last_size);
        let f: Rc<dyn Fn()> = Rc::new(move || {
            let records = match cache.records.peek().ready() {
                Some(r) => Rc::clone(r),
                None => return,
            };
            let Some(size) = *last_size.borrow() else { return };

            let Some(graph) = flow::build_flow(&records, DEFAULT_TOP_DISCIPLINES) else {
                log::warn!("discipline flow: no records to draw");
                js_bridge::destroy_chart(HOST_ID);
                return;
            };
            let data_json = serde_json::to_string(&graph).unwrap_or_default();
            let config_json = json!({
                "width": size.width,
                "height": size.height,
            })
            .to_string();
            js_bridge::render_sankey_chart(HOST_ID, &data_json, &config_json);
        });
        f
    });

    {
        let last_size = Rc::clone(&last_size);
        let redraw = Rc::clone(&redraw);
        use_effect(move || {
            let resize_size = Rc::clone(&last_size);
            let resize_redraw = Rc::clone(&redraw);
            match size_observer::observe(HOST_ID, move |size| {
                if !size.meets(MIN_FLOW_SIZE) {
                    return;
                }
                *resize_size.borrow_mut() = Some(size);
                resize_redraw();
            }) {
                Ok(guard) => guard.forget(),
                Err(e) => log::error!("flow view: {e:#}"),
            }
        });
    }

    {
        let redraw = Rc::clone(&redraw);
        use_effect(move || {
            if cache.records.read().is_ready() {
                redraw();
            }
        });
    }

    rsx! {
        ChartHeader {
            title: "Medal Flow by Discipline".to_string(),
            hint: "How each discipline's medals split across gold, silver and bronze.".to_string(),
        }
        ChartContainer { id: HOST_ID.to_string(), loading: cache.loading(), height: 420 }
    }
}
