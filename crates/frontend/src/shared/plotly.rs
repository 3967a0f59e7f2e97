//! Отрисовка графиков через Plotly, подключённый в index.html
use contracts::shared::charts::Figure;
use js_sys::{Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};

/// Draws (or redraws in place) `figure` into the element with `element_id`
pub fn render_figure(element_id: &str, figure: &Figure) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))?;

    let plotly = Reflect::get(&window, &JsValue::from_str("Plotly"))?;
    if plotly.is_undefined() {
        return Err(JsValue::from_str("Plotly is not loaded"));
    }

    let react_value = Reflect::get(&plotly, &JsValue::from_str("react"))?;
    if !react_value.is_function() {
        return Err(JsValue::from_str("Plotly.react is not a function"));
    }
    let react_fn: Function = react_value.dyn_into()?;

    let serializer = Serializer::json_compatible();
    let data = figure
        .data
        .serialize(&serializer)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    let layout = figure
        .layout
        .serialize(&serializer)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    react_fn.call3(&plotly, &JsValue::from_str(element_id), &data, &layout)?;
    Ok(())
}

/// Same as [`render_figure`], errors go to the browser console
pub fn render_or_log(element_id: &str, figure: &Figure) {
    if let Err(err) = render_figure(element_id, figure) {
        log::error!("Failed to render chart {}: {:?}", element_id, err);
    }
}
