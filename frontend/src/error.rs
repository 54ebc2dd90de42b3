use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Element not found: {0}")]
    MissingElement(String),
    #[error("Chart.js not loaded")]
    ChartUnavailable,
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
