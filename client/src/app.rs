use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, HtmlInputElement, PointerEvent};

use inklink_shared::WireMessage;

use crate::dom::{event_to_position, get_element, resize_canvas};
use crate::geometry::{denormalize, normalize};
use crate::render::draw_segment;
use crate::session::{PixelSegment, Session};
use crate::ws::{connect_ws, WsEvent, WsSender};

fn is_touch_event(event: &PointerEvent) -> bool {
    event.pointer_type() == "touch"
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Draws the segment locally, then transmits its normalized form. Every
/// locally produced segment passes through here, so the set of segments
/// drawn equals the set transmitted.
fn emit_segment(
    ctx: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    sender: &WsSender,
    segment: PixelSegment,
) {
    draw_segment(ctx, &segment);
    let wire = normalize(&segment, canvas.width() as f64, canvas.height() as f64);
    sender.send(&WireMessage::Drawing(wire));
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let canvas: HtmlCanvasElement = get_element(&document, "whiteboard")?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("No 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    let color_input: HtmlInputElement = get_element(&document, "colorPicker")?;
    let size_input: HtmlInputElement = get_element(&document, "lineWidth")?;

    resize_canvas(&window, &canvas);

    let initial_width = size_input.value().parse().unwrap_or(5.0);
    let session = Rc::new(RefCell::new(Session::new(
        color_input.value(),
        initial_width,
    )));

    let socket = {
        let ctx = ctx.clone();
        let canvas = canvas.clone();
        connect_ws(&window, move |event| match event {
            WsEvent::Open => {
                web_sys::console::log_1(&"WS connected".into());
            }
            WsEvent::Close => {
                web_sys::console::log_1(&"WS closed".into());
            }
            WsEvent::Error => {
                web_sys::console::error_1(&"WS error".into());
            }
            WsEvent::Message(WireMessage::Drawing(segment)) => {
                // Denormalize with this client's own dimensions; render only,
                // never re-transmit, or every segment would echo forever.
                let px = denormalize(&segment, canvas.width() as f64, canvas.height() as f64);
                draw_segment(&ctx, &px);
            }
        })?
    };

    {
        // Resizing resets the bitmap to the viewport and discards prior
        // pixels; with no stroke history kept there is nothing to redraw.
        let resize_window = window.clone();
        let resize_target = canvas.clone();
        let onresize = Closure::<dyn FnMut()>::new(move || {
            resize_canvas(&resize_window, &resize_target);
        });
        window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
        onresize.forget();
    }

    {
        let change_input = color_input.clone();
        let change_session = session.clone();
        let onchange = Closure::<dyn FnMut(Event)>::new(move |_| {
            change_session.borrow_mut().color = change_input.value();
        });
        color_input.add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
        onchange.forget();
    }

    {
        let input_element = size_input.clone();
        let input_session = session.clone();
        let oninput = Closure::<dyn FnMut(Event)>::new(move |_| {
            if let Ok(width) = input_element.value().parse() {
                input_session.borrow_mut().width = width;
            }
        });
        size_input.add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref())?;
        oninput.forget();
    }

    {
        let down_session = session.clone();
        let down_canvas = canvas.clone();
        let ondown = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            if event.button() != 0 {
                return;
            }
            if is_touch_event(&event) {
                event.prevent_default();
            }
            let pos = event_to_position(&down_canvas, &event);
            down_session.borrow_mut().pointer_down(pos);
        });
        canvas.add_event_listener_with_callback("pointerdown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let move_session = session.clone();
        let move_canvas = canvas.clone();
        let move_ctx = ctx.clone();
        let move_socket = socket.clone();
        let onmove = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            if is_touch_event(&event) {
                event.prevent_default();
            }
            let pos = event_to_position(&move_canvas, &event);
            let segment = move_session.borrow_mut().pointer_move(pos, now_ms());
            if let Some(segment) = segment {
                emit_segment(&move_ctx, &move_canvas, &move_socket, segment);
            }
        });
        canvas.add_event_listener_with_callback("pointermove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    {
        let up_session = session.clone();
        let up_canvas = canvas.clone();
        let up_ctx = ctx.clone();
        let up_socket = socket.clone();
        let onup = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            if is_touch_event(&event) {
                event.prevent_default();
            }
            let pos = event_to_position(&up_canvas, &event);
            let segment = up_session.borrow_mut().pointer_up(pos);
            if let Some(segment) = segment {
                emit_segment(&up_ctx, &up_canvas, &up_socket, segment);
            }
        });
        canvas.add_event_listener_with_callback("pointerup", onup.as_ref().unchecked_ref())?;
        canvas.add_event_listener_with_callback("pointercancel", onup.as_ref().unchecked_ref())?;
        onup.forget();
    }

    {
        let leave_session = session.clone();
        let leave_canvas = canvas.clone();
        let leave_ctx = ctx.clone();
        let leave_socket = socket.clone();
        let onleave = Closure::<dyn FnMut(PointerEvent)>::new(move |_| {
            // Leaving the canvas ends the stroke at the last known position.
            let segment = leave_session.borrow_mut().pointer_leave();
            if let Some(segment) = segment {
                emit_segment(&leave_ctx, &leave_canvas, &leave_socket, segment);
            }
        });
        canvas.add_event_listener_with_callback("pointerleave", onleave.as_ref().unchecked_ref())?;
        onleave.forget();
    }

    Ok(())
}
