use crate::error::{PageError, Result};
use crate::models::chart::ChartConfig;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::HtmlCanvasElement;

/// The global Chart.js constructor, if the script loaded.
pub fn chart_constructor() -> Option<js_sys::Function> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("Chart"))
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
}

/// Builds a chart on the canvas. A missing canvas is not an error; a missing
/// Chart.js is reported before the canvas is looked at.
pub fn render_chart(canvas: Option<HtmlCanvasElement>, config: &ChartConfig) -> Result<bool> {
    let constructor = chart_constructor().ok_or(PageError::ChartUnavailable)?;
    let Some(canvas) = canvas else {
        return Ok(false);
    };
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| PageError::MissingElement("2d canvas context".to_string()))?;

    let config = js_sys::JSON::parse(&serde_json::to_string(config)?)?;
    js_sys::Reflect::construct(&constructor, &js_sys::Array::of2(&context, &config))?;
    Ok(true)
}
