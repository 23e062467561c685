//! Shared constants for the page behaviors.
//!
//! These are the defaults behind [`crate::config::EnhanceConfig`]; markup
//! contracts (ids, classes, attributes) live here too so tests and the
//! browser glue agree on them.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class on `<body>` that switches the page to light styling.
pub const LIGHT_CLASS: &str = "light-mode";

/// Id of the theme toggle button.
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

/// Glyph shown while the light theme is active (U+263E, crescent moon).
pub const GLYPH_LIGHT: &str = "\u{263E}";

/// Glyph shown while the dark theme is active (U+263C, sun).
pub const GLYPH_DARK: &str = "\u{263C}";

// ── Year ────────────────────────────────────────────────────────

/// Footer year placeholders. The markup repeats the id, so this is a selector.
pub const YEAR_SELECTOR: &str = "#year";

// ── Anchors ─────────────────────────────────────────────────────

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Height of the fixed header, in CSS pixels, kept clear above a scrolled-to anchor.
pub const HEADER_CLEARANCE_PX: f64 = 80.0;

// ── Collapsibles ────────────────────────────────────────────────

pub const COLLAPSIBLE_TOGGLE_SELECTOR: &str = ".collapsible-toggle";
pub const COLLAPSIBLE_GROUP_SELECTOR: &str = ".collapsible-group";
pub const COLLAPSIBLE_CONTENT_SELECTOR: &str = ".collapsible-content";
pub const OPEN_CLASS: &str = "open";

/// Attribute on a toggle naming the id of the panel it controls.
pub const TARGET_ATTR: &str = "data-target";

// ── Tooltip ─────────────────────────────────────────────────────

pub const TOOLTIP_ATTR: &str = "data-tooltip";
pub const TOOLTIP_SELECTOR: &str = "[data-tooltip]";
pub const TOOLTIP_CLASS: &str = "tooltip-bubble";

/// Distance from the anchor point to the bubble's top-left corner, on both axes.
pub const TOOLTIP_OFFSET_PX: f64 = 12.0;

/// Downward slide applied while the bubble fades out.
pub const TOOLTIP_HIDE_SHIFT_PX: f64 = 4.0;

// ── Counters ────────────────────────────────────────────────────

pub const COUNTER_SELECTOR: &str = ".stat-number";
pub const COUNTER_DURATION_MS: f64 = 1200.0;

/// Fraction of the counter that must be visible before it starts.
pub const COUNTER_THRESHOLD: f64 = 0.4;

// ── Boot ────────────────────────────────────────────────────────

/// Id of an optional `<script type="application/json">` block with config overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-enhance-config";
