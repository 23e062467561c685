//! Thin `web-sys` glue shared by the behaviors.
//!
//! Lookups return [`EnhanceError`] so installers can use `?`. Listener
//! closures are leaked on purpose: every behavior stays attached for the
//! lifetime of the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::EnhanceError;

/// Something that can display a line of text.
///
/// Implemented for DOM elements here and for in-memory fakes in tests.
pub trait TextTarget {
    fn write_text(&self, text: &str);
}

impl TextTarget for Element {
    fn write_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

pub fn window() -> Result<Window, EnhanceError> {
    web_sys::window().ok_or(EnhanceError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, EnhanceError> {
    window.document().ok_or(EnhanceError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement, EnhanceError> {
    document.body().ok_or(EnhanceError::NoBody)
}

/// All elements in `document` matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, EnhanceError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// All descendants of `root` matching `selector`.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, EnhanceError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

fn elements(list: &NodeList) -> Vec<Element> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.get(i)
            && let Ok(el) = node.dyn_into::<Element>()
        {
            out.push(el);
        }
    }
    out
}

/// Attach `handler` to `target` for the rest of the page's life.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), EnhanceError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Set an inline style property, logging (not failing) on rejection.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::debug!("style {property}={value} rejected: {err:?}");
    }
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(err) = result {
        log::debug!("class {class} update rejected: {err:?}");
    }
}

/// A piece of work that advances once per animation frame.
pub trait FrameDriver {
    /// Advance to frame time `now_ms`. Return `false` once no more frames are needed.
    fn frame(&mut self, now_ms: f64) -> bool;

    /// Jump straight to the end state. Called when frames cannot be scheduled.
    fn finish(&mut self);
}

/// Run `driver` on `requestAnimationFrame` until it reports completion.
///
/// The frame closure keeps itself alive through `slot` while frames are
/// pending and drops itself after the last one.
pub fn animation_loop<D>(window: &Window, driver: D) -> Result<(), EnhanceError>
where
    D: FrameDriver + 'static,
{
    let driver = Rc::new(RefCell::new(driver));
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

    let driver_for_cb = Rc::clone(&driver);
    let slot_for_cb = Rc::clone(&slot);
    let window_for_cb = window.clone();
    let cb = Closure::wrap(Box::new(move |now_ms: f64| {
        if !driver_for_cb.borrow_mut().frame(now_ms) {
            slot_for_cb.borrow_mut().take();
            return;
        }
        let scheduled = slot_for_cb.borrow().as_ref().is_some_and(|next| {
            window_for_cb
                .request_animation_frame(next.as_ref().unchecked_ref())
                .is_ok()
        });
        if !scheduled {
            driver_for_cb.borrow_mut().finish();
            slot_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    if let Err(err) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        driver.borrow_mut().finish();
        return Err(err.into());
    }
    *slot.borrow_mut() = Some(cb);
    Ok(())
}
