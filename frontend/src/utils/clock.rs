use crate::error::{PageError, Result};
use wasm_bindgen::JsValue;
use web_sys::js_sys;

/// Current local time as two-digit hour, minute and second in the user's locale.
pub fn local_time_string() -> Result<String> {
    let options = js_sys::Object::new();
    for field in ["hour", "minute", "second"] {
        js_sys::Reflect::set(&options, &JsValue::from_str(field), &JsValue::from_str("2-digit"))?;
    }
    let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &options).format();
    let now = js_sys::Date::new_0();
    format
        .call1(&JsValue::UNDEFINED, &now)?
        .as_string()
        .ok_or_else(|| PageError::Js("time format returned a non-string".to_string()))
}
