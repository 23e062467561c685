//! Animated stat counters.
//!
//! Each `.stat-number` counts from 0 to its `data-target` over a fixed
//! duration once it scrolls into view. Browsers without
//! `IntersectionObserver` start every counter right away.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::config::EnhanceConfig;
use crate::consts::TARGET_ATTR;
use crate::dom::{self, FrameDriver, TextTarget};
use crate::error::{CounterError, EnhanceError};

/// Per-counter settings, read once when the counter is found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterConfig {
    pub target: i64,
}

impl CounterConfig {
    /// Parse the target attribute.
    ///
    /// Accepts the leading integer of the value, so `"250"`, `" 250"` and
    /// `"250+"` all give 250.
    ///
    /// # Errors
    ///
    /// [`CounterError::InvalidTarget`] when the value does not start with an integer.
    pub fn parse(attr: Option<&str>) -> Result<Self, CounterError> {
        let raw = attr.unwrap_or_default();
        parse_leading_int(raw)
            .map(|target| Self { target })
            .ok_or_else(|| CounterError::InvalidTarget(raw.to_owned()))
    }
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Digit runs past i64 saturate rather than reject.
    let magnitude = digits[..end]
        .bytes()
        .fold(0_i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
    Some(if negative { -magnitude } else { magnitude })
}

/// Where a counter is in its single run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CounterPhase {
    NotStarted,
    Running { start_ms: f64 },
    Completed,
}

/// Text to display after a frame, and whether it was the last one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: i64,
    duration_ms: f64,
    phase: CounterPhase,
    current: i64,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(config: CounterConfig, duration_ms: f64) -> Self {
        Self { target: config.target, duration_ms, phase: CounterPhase::NotStarted, current: 0 }
    }

    #[must_use]
    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    #[must_use]
    pub fn current(&self) -> i64 {
        self.current
    }

    /// Advance to frame time `now_ms`.
    ///
    /// The first tick starts the clock. Returns `None` once completed.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn tick(&mut self, now_ms: f64) -> Option<CounterFrame> {
        let start_ms = match self.phase {
            CounterPhase::Completed => return None,
            CounterPhase::NotStarted => {
                self.phase = CounterPhase::Running { start_ms: now_ms };
                now_ms
            }
            CounterPhase::Running { start_ms } => start_ms,
        };

        let fraction = ((now_ms - start_ms).max(0.0) / self.duration_ms).min(1.0);
        if fraction >= 1.0 {
            return self.finish().map(|text| CounterFrame { text, done: true });
        }
        self.current = (fraction * self.target as f64).floor() as i64;
        Some(CounterFrame { text: self.current.to_string(), done: false })
    }

    /// Jump to the exact target. Returns `None` if already completed.
    pub fn finish(&mut self) -> Option<String> {
        if self.phase == CounterPhase::Completed {
            return None;
        }
        self.phase = CounterPhase::Completed;
        self.current = self.target;
        Some(self.target.to_string())
    }
}

/// How a page starts its counters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger {
    OnVisible { threshold: f64 },
    Immediate,
}

impl Trigger {
    #[must_use]
    pub fn detect(observer_supported: bool, threshold: f64) -> Self {
        if observer_supported { Self::OnVisible { threshold } } else { Self::Immediate }
    }
}

/// Drives one counter element through its animation.
pub struct CounterRun<T> {
    pub target: T,
    pub animation: CounterAnimation,
}

impl<T: TextTarget> FrameDriver for CounterRun<T> {
    fn frame(&mut self, now_ms: f64) -> bool {
        match self.animation.tick(now_ms) {
            Some(frame) => {
                self.target.write_text(&frame.text);
                !frame.done
            }
            None => false,
        }
    }

    fn finish(&mut self) {
        if let Some(text) = self.animation.finish() {
            self.target.write_text(&text);
        }
    }
}

fn start(window: &Window, run: CounterRun<Element>) {
    if let Err(err) = dom::animation_loop(window, run) {
        log::debug!("counter jumped to target: {err}");
    }
}

fn observer_supported(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

type Pending = Rc<RefCell<Vec<CounterRun<Element>>>>;

fn observe(window: &Window, runs: Vec<CounterRun<Element>>, threshold: f64) -> Result<(), EnhanceError> {
    let pending: Pending = Rc::new(RefCell::new(runs));

    let pending_for_cb = Rc::clone(&pending);
    let window_for_cb = window.clone();
    let cb = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let el = entry.target();
            observer.unobserve(&el);
            let run = {
                let mut pending = pending_for_cb.borrow_mut();
                let Some(idx) = pending.iter().position(|run| run.target == el) else {
                    continue;
                };
                pending.swap_remove(idx)
            };
            start(&window_for_cb, run);
        }
        if pending_for_cb.borrow().is_empty() {
            observer.disconnect();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)?;
    for run in pending.borrow().iter() {
        observer.observe(&run.target);
    }
    cb.forget();
    Ok(())
}

/// Pair each counter with its animation, dropping those whose target does not parse.
pub fn collect_runs<T, I>(items: I, duration_ms: f64) -> Vec<CounterRun<T>>
where
    T: TextTarget,
    I: IntoIterator<Item = (T, Option<String>)>,
{
    let mut runs = Vec::new();
    for (target, attr) in items {
        match CounterConfig::parse(attr.as_deref()) {
            Ok(settings) => runs.push(CounterRun { target, animation: CounterAnimation::new(settings, duration_ms) }),
            Err(err) => log::debug!("skipping counter: {err}"),
        }
    }
    runs
}

pub fn install(window: &Window, document: &Document, config: &EnhanceConfig) -> Result<usize, EnhanceError> {
    let elements = dom::query_all(document, &config.counter_selector)?;
    let runs = collect_runs(
        elements.into_iter().map(|el| {
            let attr = el.get_attribute(TARGET_ATTR);
            (el, attr)
        }),
        config.counter_duration_ms,
    );
    let count = runs.len();
    if count == 0 {
        return Ok(0);
    }

    match Trigger::detect(observer_supported(window), config.counter_threshold) {
        Trigger::OnVisible { threshold } => observe(window, runs, threshold)?,
        Trigger::Immediate => {
            for run in runs {
                start(window, run);
            }
        }
    }
    Ok(count)
}
