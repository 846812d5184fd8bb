//! Browser collaborators
//!
//! Element lookup with the required/optional split, plus the cancellable
//! animation-frame loop. Required collaborators missing at startup are a
//! fatal configuration error reported once; optional ones silently disable
//! their effect.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, Window};

/// Fatal startup configuration problems.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no window object")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing required element `{0}`")]
    MissingElement(&'static str),
    #[error("element `{0}` is not the expected kind")]
    WrongElementKind(&'static str),
}

pub fn window() -> Result<Window, SetupError> {
    web_sys::window().ok_or(SetupError::NoWindow)
}

pub fn document() -> Result<Document, SetupError> {
    window()?.document().ok_or(SetupError::NoDocument)
}

/// A collaborator the page must provide.
pub fn require(document: &Document, selector: &'static str) -> Result<Element, SetupError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or(SetupError::MissingElement(selector))
}

pub fn require_html(
    document: &Document,
    selector: &'static str,
) -> Result<HtmlElement, SetupError> {
    require(document, selector)?
        .dyn_into()
        .map_err(|_| SetupError::WrongElementKind(selector))
}

pub fn require_canvas(
    document: &Document,
    selector: &'static str,
) -> Result<HtmlCanvasElement, SetupError> {
    require(document, selector)?
        .dyn_into()
        .map_err(|_| SetupError::WrongElementKind(selector))
}

/// A collaborator whose absence just disables its effect.
pub fn optional(document: &Document, selector: &str) -> Option<Element> {
    let found = document.query_selector(selector).ok().flatten();
    if found.is_none() {
        log::debug!("optional element `{selector}` not present");
    }
    found
}

/// Every match for a selector, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

/// Monotonic page time in milliseconds, matching animation-frame timestamps.
pub fn now_ms(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}

/// Cancellable `requestAnimationFrame` loop.
///
/// The callback re-arms itself every frame until `stop` is called; dropping
/// the handle without `stop` leaves the loop running for the page lifetime,
/// which is the usual mode for a background effect. Call `stop` from outside
/// the tick callback.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoop {
    pub fn start<F: FnMut(f64) + 'static>(mut tick: F) -> Self {
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let raf_id_inner = raf_id.clone();
        let closure_inner = closure.clone();
        *closure.borrow_mut() = Some(Closure::new(move |time: f64| {
            tick(time);
            // Re-arm unless stop() cleared the id
            if raf_id_inner.get().is_some() {
                if let Some(id) = request_frame(&closure_inner) {
                    raf_id_inner.set(Some(id));
                }
            }
        }));

        if let Some(id) = request_frame(&closure) {
            raf_id.set(Some(id));
        }
        Self { raf_id, closure }
    }

    /// Cancel the pending frame and stop re-arming.
    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(win) = web_sys::window() {
                let _ = win.cancel_animation_frame(id);
            }
        }
        self.closure.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.raf_id.get().is_some()
    }
}

fn request_frame(closure: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) -> Option<i32> {
    let win = web_sys::window()?;
    let borrowed = closure.borrow();
    let cb = borrowed.as_ref()?;
    win.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
