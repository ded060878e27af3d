use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("No browser window available")]
    NoWindow,
    #[error("sessionStorage is unavailable")]
    Unavailable,
    #[error("Browser call failed: {0}")]
    Js(String),
    #[error("Snapshot could not be (de)serialized: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        BrowserError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
