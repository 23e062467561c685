//! Floating tooltip bubble for `[data-tooltip]` elements.
//!
//! One bubble is shared by every trigger on the page. It is owned by a
//! single [`Tooltip`]; triggers reach it only through the event handlers
//! below, which end in [`Tooltip::show`] or [`Tooltip::hide`].
//!
//! Pointer-triggered bubbles follow the cursor while visible. Focus-triggered
//! bubbles stay where they opened, since keyboard focus has no movement to
//! track.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent};

use crate::config::EnhanceConfig;
use crate::consts::TOOLTIP_ATTR;
use crate::dom;
use crate::error::EnhanceError;

/// A viewport position in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Text for one trigger element, read once at install.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TooltipConfig {
    pub text: String,
}

impl TooltipConfig {
    #[must_use]
    pub fn parse(attr: Option<&str>) -> Self {
        Self { text: attr.unwrap_or_default().to_owned() }
    }

    /// Empty text never shows a bubble.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.text.is_empty()
    }
}

/// The rendered bubble.
pub trait BubbleSink {
    fn set_text(&mut self, text: &str);
    fn set_position(&mut self, left_px: f64, top_px: f64);
    fn set_visibility(&mut self, opacity: f64, translate_y_px: f64);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipState {
    pub visible: bool,
    pub text: String,
    pub position: Point,
}

pub struct Tooltip<B> {
    bubble: B,
    state: TooltipState,
    offset_px: f64,
    hide_shift_px: f64,
}

impl<B: BubbleSink> Tooltip<B> {
    /// Take ownership of `bubble` and render it hidden.
    pub fn new(mut bubble: B, offset_px: f64, hide_shift_px: f64) -> Self {
        bubble.set_visibility(0.0, hide_shift_px);
        Self { bubble, state: TooltipState::default(), offset_px, hide_shift_px }
    }

    #[must_use]
    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    /// Show `text` with the bubble's corner offset from `anchor`.
    pub fn show(&mut self, text: &str, anchor: Point) {
        let position = Point::new(anchor.x + self.offset_px, anchor.y + self.offset_px);
        self.bubble.set_text(text);
        self.bubble.set_position(position.x, position.y);
        self.bubble.set_visibility(1.0, 0.0);
        self.state = TooltipState { visible: true, text: text.to_owned(), position };
    }

    /// Fade the bubble out with a small downward slide.
    pub fn hide(&mut self) {
        self.bubble.set_visibility(0.0, self.hide_shift_px);
        self.state.visible = false;
    }

    /// Pointer entered a trigger whose box starts at `corner`.
    pub fn on_pointer_enter(&mut self, trigger: &TooltipConfig, corner: Point) {
        if trigger.is_enabled() {
            self.show(&trigger.text, corner);
        }
    }

    /// Pointer moved over a trigger. Ignored unless a bubble is showing.
    pub fn on_pointer_move(&mut self, trigger: &TooltipConfig, pointer: Point) {
        if self.state.visible && trigger.is_enabled() {
            self.show(&trigger.text, pointer);
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.hide();
    }

    /// Keyboard focus reached a trigger whose box starts at `corner`.
    pub fn on_focus(&mut self, trigger: &TooltipConfig, corner: Point) {
        if trigger.is_enabled() {
            self.show(&trigger.text, corner);
        }
    }

    pub fn on_blur(&mut self) {
        self.hide();
    }
}

struct HtmlBubble {
    el: HtmlElement,
}

impl BubbleSink for HtmlBubble {
    fn set_text(&mut self, text: &str) {
        self.el.set_text_content(Some(text));
    }

    fn set_position(&mut self, left_px: f64, top_px: f64) {
        dom::set_style(&self.el, "left", &format!("{left_px}px"));
        dom::set_style(&self.el, "top", &format!("{top_px}px"));
    }

    fn set_visibility(&mut self, opacity: f64, translate_y_px: f64) {
        dom::set_style(&self.el, "opacity", &opacity.to_string());
        dom::set_style(&self.el, "transform", &format!("translateY({translate_y_px}px)"));
    }
}

type SharedTooltip = Rc<RefCell<Tooltip<HtmlBubble>>>;

fn corner_of(el: &Element) -> Point {
    let rect = el.get_bounding_client_rect();
    Point::new(rect.left(), rect.top())
}

fn pointer_of(event: &Event) -> Option<Point> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

fn wire_trigger(trigger: &Element, tooltip: &SharedTooltip) -> Result<(), EnhanceError> {
    let config = Rc::new(TooltipConfig::parse(trigger.get_attribute(TOOLTIP_ATTR).as_deref()));

    {
        let (tooltip, config, el) = (Rc::clone(tooltip), Rc::clone(&config), trigger.clone());
        dom::listen(trigger, "mouseenter", move |_| {
            tooltip.borrow_mut().on_pointer_enter(&config, corner_of(&el));
        })?;
    }
    {
        let (tooltip, config) = (Rc::clone(tooltip), Rc::clone(&config));
        dom::listen(trigger, "mousemove", move |event| {
            if let Some(pointer) = pointer_of(&event) {
                tooltip.borrow_mut().on_pointer_move(&config, pointer);
            }
        })?;
    }
    {
        let tooltip = Rc::clone(tooltip);
        dom::listen(trigger, "mouseleave", move |_| tooltip.borrow_mut().on_pointer_leave())?;
    }
    {
        let (tooltip, config, el) = (Rc::clone(tooltip), Rc::clone(&config), trigger.clone());
        dom::listen(trigger, "focus", move |_| {
            tooltip.borrow_mut().on_focus(&config, corner_of(&el));
        })?;
    }
    let tooltip = Rc::clone(tooltip);
    dom::listen(trigger, "blur", move |_| tooltip.borrow_mut().on_blur())
}

pub fn install(document: &Document, config: &EnhanceConfig) -> Result<usize, EnhanceError> {
    let triggers = dom::query_all(document, &config.tooltip_selector)?;

    let el = document.create_element("div")?.dyn_into::<HtmlElement>().map_err(|el| {
        EnhanceError::Js(format!("created element is not an HtmlElement: {el:?}"))
    })?;
    el.set_class_name(&config.tooltip_class);
    dom::body(document)?.append_child(&el)?;

    let tooltip = Rc::new(RefCell::new(Tooltip::new(
        HtmlBubble { el },
        config.tooltip_offset_px,
        config.tooltip_hide_shift_px,
    )));
    for trigger in &triggers {
        wire_trigger(trigger, &tooltip)?;
    }
    Ok(triggers.len())
}
