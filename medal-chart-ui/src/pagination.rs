//! Slide-transition layer machinery for the paginated bar chart.
//!
//! Page content is drawn into absolutely-positioned layer divs inside an
//! `overflow: hidden` host. A page advance draws the new page into an
//! off-screen layer, then animates both layers across; a resize redraw
//! replaces the layer in place with no animation.
//!
//! The controller is a two-state machine {Idle, Sliding}. The cleanup that
//! discards the outgoing layer runs on a cancelable timeout, and starting a
//! new transition while one is in flight finalizes the previous one first,
//! so slides never overlap.

use gloo_timers::callback::Timeout;
use medal_agg::paging::SlideDirection;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;

/// CSS transition duration for a page slide.
pub const SLIDE_MS: u32 = 400;
/// Cleanup delay; slightly past the transition so removal never clips it.
pub const CLEANUP_MS: u32 = 420;

const LAYER_BASE_STYLE: &str =
    "position:absolute;inset:0;width:100%;height:100%;will-change:transform;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePhase {
    Idle,
    Sliding,
}

struct Inner {
    host_id: String,
    layer_seq: u32,
    phase: SlidePhase,
    current: Option<web_sys::Element>,
    outgoing: Option<web_sys::Element>,
    cleanup: Option<Timeout>,
}

/// Manages the page layers inside one chart host element.
///
/// Cheaply cloneable; every DOM operation is defensive and becomes a no-op
/// if the host element has been removed from the document.
#[derive(Clone)]
pub struct SlideHost {
    inner: Rc<RefCell<Inner>>,
}

impl SlideHost {
    pub fn new(host_id: impl Into<String>) -> Self {
        SlideHost {
            inner: Rc::new(RefCell::new(Inner {
                host_id: host_id.into(),
                layer_seq: 0,
                phase: SlidePhase::Idle,
                current: None,
                outgoing: None,
                cleanup: None,
            })),
        }
    }

    pub fn phase(&self) -> SlidePhase {
        self.inner.borrow().phase
    }

    /// Redraw in place without a transition (first render and resizes).
    /// `draw` receives the id of a fresh, already-attached layer element.
    pub fn replace(&self, draw: impl FnOnce(&str)) {
        self.finalize();
        let Some(host) = self.host() else { return };
        let Some(layer) = self.attach_layer(&host, LAYER_BASE_STYLE) else {
            return;
        };
        draw(&layer.id());

        let mut inner = self.inner.borrow_mut();
        if let Some(old) = inner.current.take() {
            old.remove();
        }
        inner.current = Some(layer);
    }

    /// Animated page advance. The new layer starts fully off-screen (right
    /// for Next, left for Prev), then both layers slide over `SLIDE_MS`;
    /// the outgoing layer is discarded after `CLEANUP_MS`.
    pub fn slide(&self, direction: SlideDirection, draw: impl FnOnce(&str)) {
        self.finalize();
        let Some(host) = self.host() else { return };

        let (enter_from, exit_to) = match direction {
            SlideDirection::Next => ("100%", "-100%"),
            SlideDirection::Prev => ("-100%", "100%"),
        };

        let start_style = format!("{LAYER_BASE_STYLE}transform:translateX({enter_from});");
        let Some(layer) = self.attach_layer(&host, &start_style) else {
            return;
        };
        draw(&layer.id());

        // Force a reflow so the start transform is committed before the
        // transition kicks in.
        if let Some(el) = layer.dyn_ref::<web_sys::HtmlElement>() {
            let _ = el.offset_height();
        }

        let slide_style = format!(
            "{LAYER_BASE_STYLE}transition:transform {SLIDE_MS}ms ease;transform:translateX(0);"
        );
        let _ = layer.set_attribute("style", &slide_style);

        let mut inner = self.inner.borrow_mut();
        if let Some(old) = inner.current.take() {
            let out_style = format!(
                "{LAYER_BASE_STYLE}transition:transform {SLIDE_MS}ms ease;\
                 transform:translateX({exit_to});"
            );
            let _ = old.set_attribute("style", &out_style);
            inner.outgoing = Some(old);
        }
        inner.current = Some(layer);
        inner.phase = SlidePhase::Sliding;

        let this = self.clone();
        inner.cleanup = Some(Timeout::new(CLEANUP_MS, move || this.finalize()));
    }

    /// Cancel any pending cleanup and discard the outgoing layer now.
    fn finalize(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(timeout) = inner.cleanup.take() {
            timeout.cancel();
        }
        if let Some(outgoing) = inner.outgoing.take() {
            outgoing.remove();
        }
        inner.phase = SlidePhase::Idle;
    }

    fn host(&self) -> Option<web_sys::Element> {
        let inner = self.inner.borrow();
        web_sys::window()?
            .document()?
            .get_element_by_id(&inner.host_id)
    }

    /// Create, style and attach a fresh layer div; returns `None` if DOM
    /// construction fails.
    fn attach_layer(&self, host: &web_sys::Element, style: &str) -> Option<web_sys::Element> {
        let document = web_sys::window()?.document()?;
        let layer = document.create_element("div").ok()?;

        let mut inner = self.inner.borrow_mut();
        inner.layer_seq += 1;
        layer.set_id(&format!("{}-layer-{}", inner.host_id, inner.layer_seq));
        drop(inner);

        let _ = layer.set_attribute("class", "page-layer");
        let _ = layer.set_attribute("style", style);
        host.append_child(&layer).ok()?;
        Some(layer)
    }
}
