//! Errors raised while wiring behaviours to the page.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// An element the behaviour depends on is absent from the markup.
    #[error("element not found: {0}")]
    MissingElement(String),

    /// A browser API call threw.
    #[error("browser API error: {0}")]
    Js(String),

    /// The embedded page configuration could not be read.
    #[error("invalid site configuration: {0}")]
    Config(String),
}

impl SiteError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement(selector.into())
    }

    pub fn js(msg: impl Into<String>) -> Self {
        Self::Js(msg.into())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}
