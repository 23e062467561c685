use super::*;
use std::cell::RefCell;

#[derive(Default)]
struct Slot(RefCell<String>);

impl TextTarget for Slot {
    fn write_text(&self, text: &str) {
        *self.0.borrow_mut() = text.to_owned();
    }
}

#[test]
fn no_placeholders_is_fine() {
    let slots: Vec<Slot> = Vec::new();
    assert_eq!(stamp(&slots, 2026), 0);
}

#[test]
fn single_placeholder_gets_year() {
    let slots = vec![Slot::default()];
    assert_eq!(stamp(&slots, 2026), 1);
    assert_eq!(*slots[0].0.borrow(), "2026");
}

#[test]
fn every_placeholder_gets_same_four_digits() {
    let slots: Vec<Slot> = (0..7).map(|_| Slot::default()).collect();
    assert_eq!(stamp(&slots, 2026), 7);
    for slot in &slots {
        let text = slot.0.borrow();
        assert_eq!(*text, "2026");
        assert_eq!(text.len(), 4);
        assert!(text.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn stamping_twice_is_idempotent() {
    let slots = vec![Slot::default(), Slot::default()];
    stamp(&slots, 2026);
    stamp(&slots, 2026);
    assert!(slots.iter().all(|s| *s.0.borrow() == "2026"));
}
