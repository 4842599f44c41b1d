//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js drawing functions live in `assets/js/*.js`, are embedded at
//! compile time, and are evaluated as globals (no ES modules) once D3 and
//! d3-sankey are present. This module provides safe Rust wrappers that
//! serialize data and call those globals, plus the runtime CSV fetch and
//! the bar-click callback export.

use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

// Embed the D3 chart JS files at compile time
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static SANKEY_CHART_JS: &str = include_str!("../assets/js/sankey-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('medal-dashboard JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files use `function` declarations. To make them globally
/// accessible (not block-scoped inside the setInterval callback) they are
/// evaluated at global scope via indirect eval once both D3 and the
/// d3-sankey plugin are ready, then explicitly promoted to `window.*`.
pub fn init_charts() {
    let all_js = [BAR_CHART_JS, LINE_CHART_JS, SANKEY_CHART_JS].join("\n");

    let store_js = format!(
        "window.__medalChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof d3.sankey !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__medalChartScripts);
                    delete window.__medalChartScripts;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof highlightBars !== 'undefined') window.highlightBars = highlightBars;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderSankeyChart !== 'undefined') window.renderSankeyChart = renderSankeyChart;
                    window.__medalChartsReady = true;
                    console.log('medal dashboard charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

fn escape(json: &str) -> String {
    json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "")
}

/// Render one page of the ranked bar chart into the given layer/container.
///
/// Polls until the chart scripts are initialized and the target element
/// exists, then renders. Prior content of the target is fully cleared.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Render the cumulative multi-line chart.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderLineChart", container_id, data_json, config_json);
}

/// Render the discipline → medal-kind Sankey.
pub fn render_sankey_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderSankeyChart", container_id, data_json, config_json);
}

fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = escape(data_json);
    let escaped_config = escape(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__medalChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[medal-dashboard] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Cheap highlight pass over already-drawn bars: emphasis fill for the
/// selected key, dimmed fill for the rest, neutral fill when nothing is
/// selected. Does not re-run the pagination pipeline.
pub fn highlight_bars(container_id: &str, selected: Option<&str>) {
    let selected_js = match selected {
        Some(key) => format!("'{}'", escape(key)),
        None => "null".to_string(),
    };
    call_js(&format!(
        "if (window.highlightBars) window.highlightBars('{container_id}', {selected_js});"
    ));
}

/// Export a Rust closure as `window.__medalBarClick(key)` for the bar JS
/// to invoke on bar clicks. The closure lives for the page lifetime.
pub fn register_bar_click(on_click: impl Fn(String) + 'static) {
    let closure = Closure::<dyn Fn(String)>::new(on_click);
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(
            &window,
            &JsValue::from_str("__medalBarClick"),
            closure.as_ref(),
        );
    }
    closure.forget();
}

/// Clear a chart container's content.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Fetch a text resource (the medal CSVs) from a relative URL.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window available"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {url} failed: {e:?}"))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| anyhow!("fetch {url}: not a Response"))?;
    if !response.ok() {
        return Err(anyhow!("fetch {url}: HTTP {}", response.status()));
    }
    let text = JsFuture::from(
        response
            .text()
            .map_err(|e| anyhow!("fetch {url}: no body: {e:?}"))?,
    )
    .await
    .map_err(|e| anyhow!("fetch {url}: body read failed: {e:?}"))?;
    text.as_string()
        .ok_or_else(|| anyhow!("fetch {url}: body is not text"))
}
