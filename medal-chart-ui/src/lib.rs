//! Shared Dioxus components and browser glue for the medal dashboard.
//!
//! This crate provides:
//! - `selection`: the cross-view selection store (observer/subject)
//! - `size_observer`: ResizeObserver wrapper with an immediate first call
//! - `datasets`: once-initialized async cache over the two medal tables
//! - `pagination`: the slide-transition layer state machine
//! - `js_bridge`: Rust wrappers for the D3.js render functions
//! - `components`: reusable RSX components (containers, controls, etc.)

pub mod components;
pub mod datasets;
pub mod js_bridge;
pub mod pagination;
pub mod selection;
pub mod size_observer;
