//! Light/dark theme toggle.
//!
//! Reads the visitor's preference from `localStorage` and applies the light
//! class to `<body>`. Dark is the page's default styling, so nothing is
//! applied for it. The toggle button flips the class and writes back the
//! state the class actually ended up in.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use web_sys::{Document, Element, HtmlElement, Storage, Window};

use crate::config::EnhanceConfig;
use crate::consts::{GLYPH_DARK, GLYPH_LIGHT};
use crate::dom;
use crate::error::EnhanceError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored value. Only `"light"` selects the light theme.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn from_class_present(light_class_present: bool) -> Self {
        if light_class_present { Self::Light } else { Self::Dark }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Toggle button glyph for this theme.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Light => GLYPH_LIGHT,
            Self::Dark => GLYPH_DARK,
        }
    }
}

/// Durable key-value storage for the preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// The page surface the theme acts on: the body class and the toggle glyph.
pub trait ThemeHost {
    fn has_light_class(&self) -> bool;
    fn set_light_class(&mut self, on: bool);
    fn toggle_light_class(&mut self);
    fn set_glyph(&mut self, glyph: &str);
}

#[derive(Clone, Debug)]
pub struct ThemeController {
    storage_key: String,
}

impl ThemeController {
    #[must_use]
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self { storage_key: storage_key.into() }
    }

    /// Apply the stored preference. Returns the theme now in effect.
    pub fn init(&self, host: &mut impl ThemeHost, store: &impl PreferenceStore) -> Theme {
        let theme = Theme::from_stored(store.load(&self.storage_key).as_deref());
        if theme == Theme::Light {
            host.set_light_class(true);
            host.set_glyph(theme.glyph());
        }
        theme
    }

    /// Flip the theme and persist what the page now shows.
    pub fn toggle(&self, host: &mut impl ThemeHost, store: &mut impl PreferenceStore) -> Theme {
        host.toggle_light_class();
        let theme = Theme::from_class_present(host.has_light_class());
        store.save(&self.storage_key, theme.as_str());
        host.set_glyph(theme.glyph());
        theme
    }
}

/// `localStorage`, or nothing when the browser refuses access.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(_) => None,
        }
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage
            && let Err(err) = storage.set_item(key, value)
        {
            log::debug!("could not persist {key}: {err:?}");
        }
    }
}

struct BodyTheme {
    body: HtmlElement,
    toggle: Option<Element>,
    light_class: String,
}

impl ThemeHost for BodyTheme {
    fn has_light_class(&self) -> bool {
        self.body.class_list().contains(&self.light_class)
    }

    fn set_light_class(&mut self, on: bool) {
        dom::set_class(&self.body, &self.light_class, on);
    }

    fn toggle_light_class(&mut self) {
        if let Err(err) = self.body.class_list().toggle(&self.light_class) {
            log::debug!("class toggle rejected: {err:?}");
        }
    }

    fn set_glyph(&mut self, glyph: &str) {
        if let Some(toggle) = &self.toggle {
            toggle.set_inner_html(glyph);
        }
    }
}

/// Apply the stored theme and wire the toggle button, if the page has one.
pub fn install(window: &Window, document: &Document, config: &EnhanceConfig) -> Result<usize, EnhanceError> {
    let controller = ThemeController::new(config.storage_key.clone());
    let mut store = LocalStorage::open(window);
    let toggle = document.get_element_by_id(&config.theme_toggle_id);
    let mut host = BodyTheme {
        body: dom::body(document)?,
        toggle: toggle.clone(),
        light_class: config.light_class.clone(),
    };
    controller.init(&mut host, &store);

    let Some(toggle) = toggle else {
        return Ok(0);
    };
    dom::listen(&toggle, "click", move |_| {
        controller.toggle(&mut host, &mut store);
    })?;
    Ok(1)
}
