//! Context view: countries ranked by total medals, ten per page.
//!
//! Clicking a bar toggles the country in the shared selection store and
//! restyles the bars in place; Prev/Next advance the page window with a
//! slide transition. Resizes redraw the current page without animating.

use dioxus::prelude::*;
use medal_agg::paging::{PageWindow, SlideDirection};
use medal_agg::ranking;
use medal_chart_ui::components::{ChartContainer, ChartHeader, PaginationControls};
use medal_chart_ui::datasets::DatasetCache;
use medal_chart_ui::js_bridge;
use medal_chart_ui::pagination::SlideHost;
use medal_chart_ui::selection::SelectionStore;
use medal_chart_ui::size_observer::{self, SurfaceSize, MIN_CHART_SIZE};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

const HOST_ID: &str = "medals-bar-chart";

struct BarState {
    window: PageWindow,
    last_size: Option<SurfaceSize>,
    selected: Option<String>,
}

#[component]
pub fn MedalsBarView() -> Element {
    let cache = use_context::<DatasetCache>();
    let selection = use_context::<SelectionStore>();
    // (page, total_pages), mirrored into a signal for the controls.
    let page_info = use_signal(|| (0usize, 1usize));

    let state = use_hook(|| {
        Rc::new(RefCell::new(BarState {
            window: PageWindow::new(),
            last_size: None,
            selected: None,
        }))
    });
    let slides = use_hook(|| SlideHost::new(HOST_ID));

    // Draw the current page window into a fresh layer. `Some(direction)`
    // animates the page advance; `None` replaces in place (first render
    // and resizes).
    let render_page = use_hook(|| {
        let state = Rc::clone(&state);
        let slides = slides.clone();
        let f: Rc<dyn Fn(Option<SlideDirection>)> = Rc::new(move |direction| {
            let totals = match cache.totals.peek().ready() {
                Some(t) => Rc::clone(t),
                None => return,
            };
            let mut st = state.borrow_mut();
            let Some(size) = st.last_size else { return };

            let ranked = ranking::rank_by_total(&totals);
            let (start, end) = st.window.slice_bounds(ranked.len());
            let mut info = page_info;
            info.set((st.window.page(), st.window.total_pages(ranked.len())));

            let data_json = serde_json::to_string(&ranked[start..end]).unwrap_or_default();
            let config_json = json!({
                "width": size.width,
                "height": size.height,
                "selected": st.selected,
            })
            .to_string();
            drop(st);

            let draw =
                |layer_id: &str| js_bridge::render_bar_chart(layer_id, &data_json, &config_json);
            match direction {
                Some(dir) => slides.slide(dir, draw),
                None => slides.replace(draw),
            }
        });
        f
    });

    // One-time wiring: bar-click callback and the size observer. Reads no
    // signals, so it never re-runs.
    {
        let state = Rc::clone(&state);
        let render_page = Rc::clone(&render_page);
        let selection = selection.clone();
        use_effect(move || {
            let click_state = Rc::clone(&state);
            let click_selection = selection.clone();
            js_bridge::register_bar_click(move |key| {
                click_selection.toggle(&key);
                let selected = click_selection.selected();
                click_state.borrow_mut().selected = selected.clone();
                // Restyle in place; the page window and bar layout are
                // untouched by selection changes.
                js_bridge::highlight_bars(HOST_ID, selected.as_deref());
            });

            let resize_state = Rc::clone(&state);
            let resize_render = Rc::clone(&render_page);
            match size_observer::observe(HOST_ID, move |size| {
                if !size.meets(MIN_CHART_SIZE) {
                    return;
                }
                resize_state.borrow_mut().last_size = Some(size);
                resize_render(None);
            }) {
                Ok(guard) => guard.forget(),
                Err(e) => log::error!("bar view: {e:#}"),
            }
        });
    }

    // First draw once the totals table lands.
    {
        let render_page = Rc::clone(&render_page);
        use_effect(move || {
            if cache.totals.read().is_ready() {
                render_page(None);
            }
        });
    }

    let advance = {
        let state = Rc::clone(&state);
        let render_page = Rc::clone(&render_page);
        let f: Rc<dyn Fn(SlideDirection)> = Rc::new(move |dir| {
            let total_items = match cache.totals.peek().ready() {
                Some(t) => t.len(),
                None => return,
            };
            if state.borrow_mut().window.advance(dir, total_items) {
                render_page(Some(dir));
            }
        });
        f
    };
    let on_prev = {
        let advance = Rc::clone(&advance);
        move |_| advance(SlideDirection::Prev)
    };
    let on_next = {
        let advance = Rc::clone(&advance);
        move |_| advance(SlideDirection::Next)
    };

    let (page, total_pages) = page_info();
    rsx! {
        ChartHeader {
            title: "Medals by Country".to_string(),
            hint: "Click a bar to focus the line chart on that country; click it again to clear."
                .to_string(),
        }
        PaginationControls { page, total_pages, on_prev, on_next }
        ChartContainer { id: HOST_ID.to_string(), loading: cache.loading(), height: 420 }
    }
}
