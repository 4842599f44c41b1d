//! Reusable Dioxus RSX components for the medal dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod pagination_controls;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use pagination_controls::PaginationControls;
