//! Prev/Next pagination controls for the ranked bar chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PaginationControlsProps {
    /// Zero-based current page
    pub page: usize,
    /// Total page count (at least 1)
    pub total_pages: usize,
    pub on_prev: EventHandler<()>,
    pub on_next: EventHandler<()>,
}

/// Button row with the current page label. Boundary buttons are disabled,
/// so an advance past either end is a no-op by construction.
#[component]
pub fn PaginationControls(props: PaginationControlsProps) -> Element {
    let at_first = props.page == 0;
    let at_last = props.page + 1 >= props.total_pages;

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px; margin-bottom: 6px;",
            button {
                disabled: at_first,
                onclick: move |_| props.on_prev.call(()),
                "◀ Prev"
            }
            span {
                style: "font-size: 12px; color: #444;",
                "Page {props.page + 1} / {props.total_pages}"
            }
            button {
                disabled: at_last,
                onclick: move |_| props.on_next.call(()),
                "Next ▶"
            }
        }
    }
}
