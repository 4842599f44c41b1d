//! Chart container component with loading state.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart mount point (D3 renders into this)
    pub id: String,
    /// Whether the chart data is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Fixed height in pixels; the width tracks the card
    #[props(default = 420)]
    pub height: u32,
}

/// A sized, observed mount point for one D3 chart, with a loading overlay.
///
/// The inner div carries the stable id the view observes for resizes and
/// renders into; `overflow: hidden` keeps slide transitions clipped.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "position: relative; overflow: hidden; width: 100%; height: {}px;",
        props.height
    );

    rsx! {
        div {
            style: "position: relative; width: 100%;",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Loading chart..."
                }
            }
            div {
                id: "{props.id}",
                style: "{style}",
            }
        }
    }
}
