//! Smooth scrolling for in-page anchor links.
//!
//! Links to `#` or `#top` scroll to the top of the page. Links to a fragment
//! that names an element scroll so the element sits just below the fixed
//! header. Anything else is left to the browser.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use crate::config::EnhanceConfig;
use crate::dom;
use crate::error::EnhanceError;

/// What a link's `href` points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorTarget {
    Top,
    Fragment(String),
    External,
}

impl AnchorTarget {
    #[must_use]
    pub fn parse(href: &str) -> Self {
        match href {
            "#" | "#top" => Self::Top,
            _ => match href.strip_prefix('#') {
                Some(id) => Self::Fragment(id.to_owned()),
                None => Self::External,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollDecision {
    /// Cancel navigation and smooth-scroll to this document offset.
    ScrollTo(f64),
    /// Let the browser navigate natively.
    PassThrough,
}

/// Document offset that puts an element `rect_top` pixels below the viewport
/// top just under a header of height `clearance`.
#[must_use]
pub fn scroll_offset(rect_top: f64, scroll_y: f64, clearance: f64) -> f64 {
    rect_top + scroll_y - clearance
}

/// Decide how to handle a click on a link to `target`.
///
/// `lookup` maps a fragment id to the element's viewport-relative top edge,
/// or `None` when no such element exists.
pub fn resolve<F>(target: &AnchorTarget, lookup: F, scroll_y: f64, clearance: f64) -> ScrollDecision
where
    F: FnOnce(&str) -> Option<f64>,
{
    match target {
        AnchorTarget::Top => ScrollDecision::ScrollTo(0.0),
        AnchorTarget::Fragment(id) => match lookup(id) {
            Some(rect_top) => ScrollDecision::ScrollTo(scroll_offset(rect_top, scroll_y, clearance)),
            None => ScrollDecision::PassThrough,
        },
        AnchorTarget::External => ScrollDecision::PassThrough,
    }
}

fn smooth_scroll(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn install(window: &Window, document: &Document, config: &EnhanceConfig) -> Result<usize, EnhanceError> {
    let links = dom::query_all(document, &config.anchor_selector)?;
    for link in &links {
        let window = window.clone();
        let document = document.clone();
        let href_source = link.clone();
        let clearance = config.header_clearance_px;
        dom::listen(link, "click", move |event| {
            let Some(href) = href_source.get_attribute("href") else {
                return;
            };
            let target = AnchorTarget::parse(&href);
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let lookup = |id: &str| {
                document
                    .get_element_by_id(id)
                    .map(|el| el.get_bounding_client_rect().top())
            };
            if let ScrollDecision::ScrollTo(top) = resolve(&target, lookup, scroll_y, clearance) {
                event.prevent_default();
                smooth_scroll(&window, top);
            }
        })?;
    }
    Ok(links.len())
}
