use super::*;
use std::collections::HashMap;

#[derive(Default)]
struct FakePanels {
    open: HashMap<&'static str, bool>,
}

impl FakePanels {
    fn with(states: &[(&'static str, bool)]) -> Self {
        Self { open: states.iter().copied().collect() }
    }

    fn open_panels(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.open.iter().filter(|(_, open)| **open).map(|(id, _)| *id).collect();
        ids.sort_unstable();
        ids
    }
}

impl PanelSet for FakePanels {
    type Panel = &'static str;

    fn is_open(&self, panel: &&'static str) -> bool {
        self.open.get(panel).copied().unwrap_or(false)
    }

    fn set_open(&mut self, panel: &&'static str, open: bool) {
        self.open.insert(*panel, open);
    }
}

// =============================================================
// CollapsibleConfig
// =============================================================

#[test]
fn parse_requires_target() {
    assert!(CollapsibleConfig::<()>::parse(None, None).is_none());
    assert!(CollapsibleConfig::<()>::parse(Some(""), None).is_none());
}

#[test]
fn parse_keeps_whitespace_in_target() {
    let config = CollapsibleConfig::<()>::parse(Some(" panel "), None).expect("should parse");
    assert_eq!(config.target_id, " panel ");
}

#[test]
fn parse_keeps_target_and_group() {
    let config = CollapsibleConfig::parse(Some("panel-a"), Some("group-1")).expect("should parse");
    assert_eq!(config.target_id, "panel-a");
    assert_eq!(config.group, Some("group-1"));
}

// =============================================================
// activate
// =============================================================

#[test]
fn opening_b_closes_a() {
    let mut panels = FakePanels::with(&[("a", true), ("b", false)]);
    let group = ["a", "b"];
    assert!(activate(&mut panels, &"b", &group));
    assert_eq!(panels.open_panels(), vec!["b"]);
}

#[test]
fn clicking_open_panel_collapses_group() {
    let mut panels = FakePanels::with(&[("a", true), ("b", false)]);
    let group = ["a", "b"];
    activate(&mut panels, &"b", &group);
    assert!(!activate(&mut panels, &"b", &group));
    assert!(panels.open_panels().is_empty());
}

#[test]
fn at_most_one_open_per_group() {
    let mut panels = FakePanels::with(&[("a", false), ("b", false), ("c", false)]);
    let group = ["a", "b", "c"];
    for target in ["a", "c", "b", "b", "a", "c", "c"] {
        activate(&mut panels, &target, &group);
        assert!(panels.open_panels().len() <= 1);
    }
}

#[test]
fn siblings_closed_even_if_several_were_open() {
    let mut panels = FakePanels::with(&[("a", true), ("b", true), ("c", false)]);
    activate(&mut panels, &"c", &["a", "b", "c"]);
    assert_eq!(panels.open_panels(), vec!["c"]);
}

#[test]
fn ungrouped_panel_leaves_others_alone() {
    let mut panels = FakePanels::with(&[("a", true), ("solo", false)]);
    assert!(activate(&mut panels, &"solo", &[]));
    assert_eq!(panels.open_panels(), vec!["a", "solo"]);
    assert!(!activate(&mut panels, &"solo", &[]));
    assert_eq!(panels.open_panels(), vec!["a"]);
}
