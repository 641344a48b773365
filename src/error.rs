//! Browser host errors
//!
//! The simulation itself cannot fail; these cover wiring it to the page.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingCanvas(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("2d canvas context unavailable")]
    NoContext2d,
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for HostError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        HostError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            HostError::MissingCanvas("life-canvas".into()).to_string(),
            "no element with id `life-canvas`"
        );
        assert_eq!(HostError::NoContext2d.to_string(), "2d canvas context unavailable");
    }
}
