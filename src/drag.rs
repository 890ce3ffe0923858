//! Drag-to-move behavior for an absolutely positioned element, with the last
//! position persisted to localStorage.
//!
//! The clamp and step math is kept free of DOM types so it can run under
//! `cargo test` on the host; `make_element_draggable` wires it to mouse
//! events.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

const DRAGGING_CLASS: &str = "mh-is-dragging";

/// Offset position of the dragged element, as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelPosition {
    pub x: i32,
    pub y: i32,
}

/// Top may only poke 20px above the viewport.
pub fn clamp_top(value: i32) -> i32 {
    value.max(-20)
}

/// Left keeps at least 20px of the handle on-screen on either side.
pub fn clamp_left(value: i32, handle_width: i32, body_width: i32) -> i32 {
    let min = 20 - handle_width;
    if value < min {
        return min;
    }
    let max = body_width - 20;
    if value > max {
        return max;
    }
    value
}

pub fn clamp_position(pos: PanelPosition, handle_width: i32, body_width: i32) -> PanelPosition {
    PanelPosition {
        x: clamp_left(pos.x, handle_width, body_width),
        y: clamp_top(pos.y),
    }
}

/// One mousemove step: apply the pointer delta since `last` to `pos`, then
/// clamp to the viewport.
pub fn drag_step(
    pos: PanelPosition,
    last: (i32, i32),
    pointer: (i32, i32),
    handle_width: i32,
    body_width: i32,
) -> PanelPosition {
    let dx = last.0 - pointer.0;
    let dy = last.1 - pointer.1;
    clamp_position(
        PanelPosition {
            x: pos.x - dx,
            y: pos.y - dy,
        },
        handle_width,
        body_width,
    )
}

pub fn encode_position(pos: PanelPosition) -> String {
    serde_json::to_string(&pos).unwrap_or_default()
}

/// Corrupt stored JSON yields `None`; callers fall back to defaults.
pub fn decode_position(raw: &str) -> Option<PanelPosition> {
    serde_json::from_str(raw).ok()
}

/// Make the element at `target_sel` draggable by its `handle_sel` child.
/// The final position is saved under `storage_key` on release and restored
/// (clamped) on the next call. Missing target or handle is a no-op.
pub fn make_element_draggable(
    target_sel: &str,
    handle_sel: &str,
    default_x: i32,
    default_y: i32,
    storage_key: Option<&str>,
) -> Result<(), JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let Some(document) = window.document() else {
        return Ok(());
    };
    let Some(target) = query_html(&document, target_sel) else {
        return Ok(());
    };
    let Some(handle) = query_html(&document, handle_sel) else {
        return Ok(());
    };

    let key = storage_key.map(str::to_owned);

    let mut start = PanelPosition {
        x: default_x,
        y: default_y,
    };
    if let Some(k) = key.as_deref() {
        if let Some(stored) = read_stored_position(&window, k) {
            let body_width = document.body().map(|b| b.client_width()).unwrap_or(0);
            start = clamp_position(stored, handle.offset_width(), body_width);
        }
    }
    set_position(&target, start);

    // Last seen pointer position, shared between the down and move handlers.
    let last = Rc::new(Cell::new((0i32, 0i32)));

    // The move and up listeners attach to the whole document while a drag is
    // active so the drag survives the pointer leaving the handle, and detach
    // again on release. Both closures live for the page's lifetime.
    let move_closure: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
        Rc::new(RefCell::new(None));
    let up_closure: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
        Rc::new(RefCell::new(None));

    {
        let target = target.clone();
        let handle = handle.clone();
        let document = document.clone();
        let last = last.clone();
        *move_closure.borrow_mut() = Some(Closure::wrap(Box::new(move |e: MouseEvent| {
            e.prevent_default();
            let pos = PanelPosition {
                x: target.offset_left(),
                y: target.offset_top(),
            };
            let pointer = (e.client_x(), e.client_y());
            let body_width = document.body().map(|b| b.client_width()).unwrap_or(0);
            let next = drag_step(pos, last.get(), pointer, handle.offset_width(), body_width);
            last.set(pointer);
            set_position(&target, next);
        }) as Box<dyn FnMut(MouseEvent)>));
    }

    {
        let target = target.clone();
        let document = document.clone();
        let key = key.clone();
        let move_c = move_closure.clone();
        let up_c = up_closure.clone();
        *up_closure.borrow_mut() = Some(Closure::wrap(Box::new(move |_e: MouseEvent| {
            if let Some(c) = move_c.borrow().as_ref() {
                let _ = document
                    .remove_event_listener_with_callback("mousemove", c.as_ref().unchecked_ref());
            }
            if let Some(c) = up_c.borrow().as_ref() {
                let _ = document
                    .remove_event_listener_with_callback("mouseup", c.as_ref().unchecked_ref());
            }
            let _ = target.class_list().remove_1(DRAGGING_CLASS);
            if let Some(k) = key.as_deref() {
                write_stored_position(
                    k,
                    PanelPosition {
                        x: target.offset_left(),
                        y: target.offset_top(),
                    },
                );
            }
        }) as Box<dyn FnMut(MouseEvent)>));
    }

    {
        let target = target.clone();
        let document = document.clone();
        let last = last.clone();
        let move_c = move_closure.clone();
        let up_c = up_closure.clone();
        let down = Closure::wrap(Box::new(move |e: MouseEvent| {
            e.prevent_default();
            last.set((e.client_x(), e.client_y()));
            let _ = target.class_list().add_1(DRAGGING_CLASS);
            if let Some(c) = move_c.borrow().as_ref() {
                let _ = document
                    .add_event_listener_with_callback("mousemove", c.as_ref().unchecked_ref());
            }
            if let Some(c) = up_c.borrow().as_ref() {
                let _ = document
                    .add_event_listener_with_callback("mouseup", c.as_ref().unchecked_ref());
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        handle.add_event_listener_with_callback("mousedown", down.as_ref().unchecked_ref())?;
        down.forget();
    }

    Ok(())
}

fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn set_position(el: &HtmlElement, pos: PanelPosition) {
    let style = el.style();
    let _ = style.set_property("left", &format!("{}px", pos.x));
    let _ = style.set_property("top", &format!("{}px", pos.y));
}

fn read_stored_position(window: &Window, key: &str) -> Option<PanelPosition> {
    let storage = window.local_storage().ok().flatten()?;
    let raw = storage.get_item(key).ok().flatten()?;
    decode_position(&raw)
}

fn write_stored_position(key: &str, pos: PanelPosition) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(key, &encode_position(pos));
    }
}
