use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, PointerEvent, Window};

use crate::session::Position;

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

/// Resets the canvas bitmap to the full viewport. Resizing discards prior
/// pixel content; no stroke history is kept, so nothing is redrawn.
pub fn resize_canvas(window: &Window, canvas: &HtmlCanvasElement) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

pub fn event_to_position(canvas: &HtmlCanvasElement, event: &PointerEvent) -> Position {
    let rect = canvas.get_bounding_client_rect();
    Position {
        x: event.client_x() as f64 - rect.left(),
        y: event.client_y() as f64 - rect.top(),
    }
}
