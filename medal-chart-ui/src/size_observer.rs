//! ResizeObserver wrapper for responsive chart surfaces.
//!
//! `observe` invokes the callback once, synchronously, with the surface's
//! current bounding box, then again on every subsequent layout-driven size
//! change. Views treat sizes below their minimum threshold as "too small to
//! render" and skip the redraw.

use anyhow::{anyhow, bail};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Minimum usable surface for the bar and line views.
pub const MIN_CHART_SIZE: (f64, f64) = (200.0, 200.0);
/// Minimum usable surface for the flow (Sankey) view.
pub const MIN_FLOW_SIZE: (f64, f64) = (300.0, 250.0);

/// A rendering surface's content-box dimensions, clamped to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn clamped(width: f64, height: f64) -> Self {
        SurfaceSize {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Whether the surface meets a `(min_width, min_height)` threshold.
    pub fn meets(&self, (min_w, min_h): (f64, f64)) -> bool {
        self.width >= min_w && self.height >= min_h
    }
}

/// Keeps a ResizeObserver subscription alive; disconnects on drop.
pub struct SizeGuard {
    observer: web_sys::ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl SizeGuard {
    /// Leak the guard for page-lifetime observation (the normal case: views
    /// are never unmounted).
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for SizeGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watch the element with the given id.
///
/// Fails immediately when the element does not exist (a missing mount point
/// is a wiring bug, not a runtime condition to paper over). Otherwise the
/// callback fires once with the current size, then per resize.
pub fn observe(
    element_id: &str,
    on_resize: impl FnMut(SurfaceSize) + 'static,
) -> anyhow::Result<SizeGuard> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow!("no document available"))?;
    let Some(element) = document.get_element_by_id(element_id) else {
        bail!("chart container not found: #{element_id}");
    };

    let callback: Rc<RefCell<dyn FnMut(SurfaceSize)>> = Rc::new(RefCell::new(on_resize));

    // Immediate first call with the current bounding box.
    let rect = element.get_bounding_client_rect();
    (callback.borrow_mut())(SurfaceSize::clamped(rect.width(), rect.height()));

    let cb = Rc::clone(&callback);
    let closure = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        if let Ok(entry) = entries.get(0).dyn_into::<web_sys::ResizeObserverEntry>() {
            let rect = entry.content_rect();
            (cb.borrow_mut())(SurfaceSize::clamped(rect.width(), rect.height()));
        }
    });

    let observer = web_sys::ResizeObserver::new(closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("failed to construct ResizeObserver: {e:?}"))?;
    observer.observe(&element);

    Ok(SizeGuard {
        observer,
        _callback: closure,
    })
}

#[cfg(test)]
mod tests {
    use super::{SurfaceSize, MIN_CHART_SIZE, MIN_FLOW_SIZE};

    #[test]
    fn test_clamped_never_negative() {
        let s = SurfaceSize::clamped(-4.0, -0.1);
        assert_eq!((s.width, s.height), (0.0, 0.0));
    }

    #[test]
    fn test_minimum_thresholds() {
        assert!(SurfaceSize::clamped(200.0, 200.0).meets(MIN_CHART_SIZE));
        assert!(!SurfaceSize::clamped(199.0, 500.0).meets(MIN_CHART_SIZE));
        assert!(!SurfaceSize::clamped(100.0, 100.0).meets(MIN_FLOW_SIZE));
        assert!(SurfaceSize::clamped(300.0, 250.0).meets(MIN_FLOW_SIZE));
        assert!(!SurfaceSize::clamped(320.0, 249.0).meets(MIN_FLOW_SIZE));
    }
}
