//! Error types for behavior installation.
//!
//! Nothing here is ever shown to the visitor. Installation returns these
//! errors with `?`, and the boot sequence in `lib.rs` logs them and moves on
//! to the next behavior.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("dom call failed: {0}")]
    Js(String),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl From<JsValue> for EnhanceError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CounterError {
    #[error("counter target is not an integer: {0:?}")]
    InvalidTarget(String),
}
