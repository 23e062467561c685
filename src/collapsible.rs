//! Accordion-style collapsible sections.
//!
//! Each toggle names its panel with `data-target`. Toggles inside a group
//! container close every other panel in that group before flipping their own,
//! so a group never has more than one panel open.

#[cfg(test)]
#[path = "collapsible_test.rs"]
mod collapsible_test;

use web_sys::{Document, Element};

use crate::config::EnhanceConfig;
use crate::consts::TARGET_ATTR;
use crate::dom;
use crate::error::EnhanceError;

/// Per-toggle settings, read once when the toggle is wired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollapsibleConfig<G> {
    pub target_id: String,
    /// The group container, when the toggle sits inside one.
    pub group: Option<G>,
}

impl<G> CollapsibleConfig<G> {
    /// `None` when the toggle does not name a panel. The id is used verbatim.
    #[must_use]
    pub fn parse(target_attr: Option<&str>, group: Option<G>) -> Option<Self> {
        let target_id = target_attr.filter(|id| !id.is_empty())?;
        Some(Self { target_id: target_id.to_owned(), group })
    }
}

/// Open/closed state storage for panels.
pub trait PanelSet {
    type Panel: PartialEq;

    fn is_open(&self, panel: &Self::Panel) -> bool;
    fn set_open(&mut self, panel: &Self::Panel, open: bool);
}

/// Handle a toggle activation for `target`.
///
/// Every entry in `siblings` other than `target` is closed, then `target`
/// takes the opposite of the state it had before the click. Returns whether
/// `target` is now open.
pub fn activate<S: PanelSet>(panels: &mut S, target: &S::Panel, siblings: &[S::Panel]) -> bool {
    let was_open = panels.is_open(target);
    for sibling in siblings.iter().filter(|s| *s != target) {
        panels.set_open(sibling, false);
    }
    panels.set_open(target, !was_open);
    !was_open
}

struct ClassPanels {
    open_class: String,
}

impl PanelSet for ClassPanels {
    type Panel = Element;

    fn is_open(&self, panel: &Element) -> bool {
        panel.class_list().contains(&self.open_class)
    }

    fn set_open(&mut self, panel: &Element, open: bool) {
        dom::set_class(panel, &self.open_class, open);
    }
}

pub fn install(document: &Document, config: &EnhanceConfig) -> Result<usize, EnhanceError> {
    let mut wired = 0;
    for toggle in dom::query_all(document, &config.collapsible_toggle_selector)? {
        let group = match toggle.closest(&config.collapsible_group_selector) {
            Ok(group) => group,
            Err(err) => {
                log::debug!("group lookup failed: {err:?}");
                None
            }
        };
        let Some(settings) = CollapsibleConfig::parse(toggle.get_attribute(TARGET_ATTR).as_deref(), group) else {
            continue;
        };

        let document = document.clone();
        let content_selector = config.collapsible_content_selector.clone();
        let mut panels = ClassPanels { open_class: config.open_class.clone() };
        dom::listen(&toggle, "click", move |_| {
            let Some(target) = document.get_element_by_id(&settings.target_id) else {
                return;
            };
            let siblings = match &settings.group {
                Some(group) => dom::query_all_in(group, &content_selector).unwrap_or_default(),
                None => Vec::new(),
            };
            activate(&mut panels, &target, &siblings);
        })?;
        wired += 1;
    }
    Ok(wired)
}
