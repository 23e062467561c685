//! Footer year stamp.

#[cfg(test)]
#[path = "year_test.rs"]
mod year_test;

use web_sys::Document;

use crate::config::EnhanceConfig;
use crate::dom::{self, TextTarget};
use crate::error::EnhanceError;

/// Write `year` into every placeholder. Returns how many were stamped.
pub fn stamp<T: TextTarget>(placeholders: &[T], year: u32) -> usize {
    let text = year.to_string();
    for placeholder in placeholders {
        placeholder.write_text(&text);
    }
    placeholders.len()
}

pub fn install(document: &Document, config: &EnhanceConfig) -> Result<usize, EnhanceError> {
    let placeholders = dom::query_all(document, &config.year_selector)?;
    if placeholders.is_empty() {
        return Ok(0);
    }
    let year = js_sys::Date::new_0().get_full_year();
    Ok(stamp(&placeholders, year))
}
