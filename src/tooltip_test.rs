#![allow(clippy::float_cmp)]

use super::*;

/// Records what the bubble would look like on the page.
#[derive(Clone, Debug, Default)]
struct Rendered {
    text: String,
    left: f64,
    top: f64,
    opacity: f64,
    translate_y: f64,
    position_writes: usize,
}

#[derive(Default)]
struct FakeBubble(Rc<RefCell<Rendered>>);

impl BubbleSink for FakeBubble {
    fn set_text(&mut self, text: &str) {
        self.0.borrow_mut().text = text.to_owned();
    }

    fn set_position(&mut self, left_px: f64, top_px: f64) {
        let mut r = self.0.borrow_mut();
        r.left = left_px;
        r.top = top_px;
        r.position_writes += 1;
    }

    fn set_visibility(&mut self, opacity: f64, translate_y_px: f64) {
        let mut r = self.0.borrow_mut();
        r.opacity = opacity;
        r.translate_y = translate_y_px;
    }
}

fn tooltip() -> (Tooltip<FakeBubble>, Rc<RefCell<Rendered>>) {
    let bubble = FakeBubble::default();
    let rendered = Rc::clone(&bubble.0);
    (Tooltip::new(bubble, 12.0, 4.0), rendered)
}

fn trigger(text: &str) -> TooltipConfig {
    TooltipConfig::parse(Some(text))
}

// --- construction ---

#[test]
fn starts_hidden() {
    let (tip, rendered) = tooltip();
    assert!(!tip.state().visible);
    assert_eq!(rendered.borrow().opacity, 0.0);
}

#[test]
fn missing_attribute_parses_as_disabled() {
    assert!(!TooltipConfig::parse(None).is_enabled());
    assert!(!TooltipConfig::parse(Some("")).is_enabled());
    assert!(TooltipConfig::parse(Some("Median age")).is_enabled());
}

// --- show / hide ---

#[test]
fn show_offsets_by_twelve_and_rests() {
    let (mut tip, rendered) = tooltip();
    tip.show("hello", Point::new(100.0, 40.0));
    let r = rendered.borrow();
    assert_eq!(r.text, "hello");
    assert_eq!((r.left, r.top), (112.0, 52.0));
    assert_eq!(r.opacity, 1.0);
    assert_eq!(r.translate_y, 0.0);
    assert!(tip.state().visible);
    assert_eq!(tip.state().position, Point::new(112.0, 52.0));
}

#[test]
fn hide_fades_and_slides_down() {
    let (mut tip, rendered) = tooltip();
    tip.show("hello", Point::new(0.0, 0.0));
    tip.hide();
    let r = rendered.borrow();
    assert_eq!(r.opacity, 0.0);
    assert_eq!(r.translate_y, 4.0);
    assert!(!tip.state().visible);
}

// --- pointer ---

#[test]
fn enter_shows_at_box_corner() {
    let (mut tip, rendered) = tooltip();
    tip.on_pointer_enter(&trigger("Definition"), Point::new(30.0, 70.0));
    assert_eq!((rendered.borrow().left, rendered.borrow().top), (42.0, 82.0));
    assert_eq!(tip.state().text, "Definition");
}

#[test]
fn move_follows_cursor_while_visible() {
    let (mut tip, rendered) = tooltip();
    let t = trigger("Definition");
    tip.on_pointer_enter(&t, Point::new(30.0, 70.0));
    tip.on_pointer_move(&t, Point::new(55.0, 90.0));
    assert_eq!((rendered.borrow().left, rendered.borrow().top), (67.0, 102.0));
}

#[test]
fn leave_then_move_does_not_reposition() {
    let (mut tip, rendered) = tooltip();
    let t = trigger("Definition");
    tip.on_pointer_enter(&t, Point::new(30.0, 70.0));
    tip.on_pointer_leave();
    let writes = rendered.borrow().position_writes;

    tip.on_pointer_move(&t, Point::new(500.0, 500.0));
    tip.on_pointer_move(&t, Point::new(501.0, 501.0));

    let r = rendered.borrow();
    assert_eq!(r.opacity, 0.0);
    assert_eq!(r.position_writes, writes);
    assert!(!tip.state().visible);
}

#[test]
fn empty_text_never_shows() {
    let (mut tip, rendered) = tooltip();
    let t = trigger("");
    tip.on_pointer_enter(&t, Point::new(1.0, 1.0));
    tip.on_focus(&t, Point::new(1.0, 1.0));
    assert!(!tip.state().visible);
    assert_eq!(rendered.borrow().opacity, 0.0);
    assert_eq!(rendered.borrow().position_writes, 0);
}

#[test]
fn move_with_empty_text_is_ignored_even_if_visible() {
    let (mut tip, rendered) = tooltip();
    tip.on_pointer_enter(&trigger("A"), Point::new(0.0, 0.0));
    tip.on_pointer_move(&trigger(""), Point::new(300.0, 300.0));
    assert_eq!(rendered.borrow().left, 12.0);
}

// --- focus ---

#[test]
fn focus_shows_and_blur_hides() {
    let (mut tip, rendered) = tooltip();
    tip.on_focus(&trigger("Keyboard"), Point::new(10.0, 20.0));
    assert!(tip.state().visible);
    assert_eq!((rendered.borrow().left, rendered.borrow().top), (22.0, 32.0));
    tip.on_blur();
    assert!(!tip.state().visible);
    assert_eq!(rendered.borrow().translate_y, 4.0);
}

#[test]
fn shared_bubble_switches_text_between_triggers() {
    let (mut tip, rendered) = tooltip();
    tip.on_pointer_enter(&trigger("first"), Point::new(0.0, 0.0));
    tip.on_pointer_leave();
    tip.on_pointer_enter(&trigger("second"), Point::new(0.0, 0.0));
    assert_eq!(rendered.borrow().text, "second");
}
