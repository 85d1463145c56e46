//! Column resizing for tables, with widths persisted in localStorage.
//!
//! Every `th.resizable` of the table gets a drag handle. Widths are saved on
//! mouseup and restored the next time the table is mounted.
//!
//! ```ignore
//! Effect::new(move |_| init_column_resize("org-units-table", "org-units-table_column_widths"));
//! ```

use leptos::task::spawn_local;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent as WebMouseEvent};

const MIN_COLUMN_WIDTH: i32 = 40;
const RESIZING_BODY_CLASS: &str = "resizing-column";
const WAS_RESIZING_ATTR: &str = "data-was-resizing";

fn body() -> Option<HtmlElement> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
}

/// True right after a drag ended; header clicks use it to skip sorting.
pub fn was_just_resizing() -> bool {
    body()
        .map(|b| b.get_attribute(WAS_RESIZING_ATTR).as_deref() == Some("true"))
        .unwrap_or(false)
}

pub fn clear_resize_flag() {
    if let Some(body) = body() {
        let _ = body.remove_attribute(WAS_RESIZING_ATTR);
    }
}

fn resizable_headers(table_id: &str) -> Vec<HtmlElement> {
    let Some(table) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(table_id))
    else {
        return Vec::new();
    };
    let Ok(headers) = table.query_selector_all("th.resizable") else {
        return Vec::new();
    };
    (0..headers.length())
        .filter_map(|i| headers.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn set_width(th: &HtmlElement, width: i32) {
    let value = format!("{}px", width);
    let _ = th.style().set_property("width", &value);
    let _ = th.style().set_property("min-width", &value);
}

pub fn save_column_widths(table_id: &str, storage_key: &str) {
    let Some(storage) = local_storage() else {
        return;
    };
    let widths: Vec<i32> = resizable_headers(table_id)
        .iter()
        .map(|th| th.offset_width())
        .collect();
    if let Ok(json) = serde_json::to_string(&widths) {
        let _ = storage.set_item(storage_key, &json);
    }
}

pub fn restore_column_widths(table_id: &str, storage_key: &str) {
    let Some(json) = local_storage().and_then(|s| s.get_item(storage_key).ok().flatten()) else {
        return;
    };
    let Ok(widths) = serde_json::from_str::<Vec<i32>>(&json) else {
        log::warn!("Ignoring malformed column widths under {}", storage_key);
        return;
    };
    for (th, width) in resizable_headers(table_id).iter().zip(widths) {
        set_width(th, width);
    }
}

#[derive(Default)]
struct DragState {
    active: bool,
    moved: bool,
    start_x: i32,
    start_width: i32,
}

/// Adds drag handles to the table's resizable headers. Safe to call again:
/// headers that already have a handle are skipped.
pub fn init_column_resize(table_id: &str, storage_key: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    restore_column_widths(table_id, storage_key);

    for th in resizable_headers(table_id) {
        if th.query_selector(".resize-handle").ok().flatten().is_some() {
            continue;
        }
        let Ok(handle) = document.create_element("div") else {
            continue;
        };
        handle.set_class_name("resize-handle");

        let drag = Rc::new(RefCell::new(DragState::default()));

        let mousedown = {
            let drag = drag.clone();
            let th = th.clone();
            Closure::wrap(Box::new(move |e: WebMouseEvent| {
                e.prevent_default();
                e.stop_propagation();
                *drag.borrow_mut() = DragState {
                    active: true,
                    moved: false,
                    start_x: e.client_x(),
                    start_width: th.offset_width(),
                };
                if let Some(body) = body() {
                    let _ = body.class_list().add_1(RESIZING_BODY_CLASS);
                }
            }) as Box<dyn FnMut(WebMouseEvent)>)
        };
        let _ = handle
            .add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref());
        mousedown.forget();

        let mousemove = {
            let drag = drag.clone();
            let th = th.clone();
            Closure::wrap(Box::new(move |e: WebMouseEvent| {
                let mut state = drag.borrow_mut();
                if !state.active {
                    return;
                }
                state.moved = true;
                let width = (state.start_width + e.client_x() - state.start_x).max(MIN_COLUMN_WIDTH);
                set_width(&th, width);
            }) as Box<dyn FnMut(WebMouseEvent)>)
        };
        let _ = document
            .add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref());
        mousemove.forget();

        let mouseup = {
            let table_id = table_id.to_string();
            let storage_key = storage_key.to_string();
            Closure::wrap(Box::new(move |_: WebMouseEvent| {
                let moved = {
                    let mut state = drag.borrow_mut();
                    if !state.active {
                        return;
                    }
                    let moved = state.moved;
                    *state = DragState::default();
                    moved
                };

                let Some(body) = body() else {
                    return;
                };
                let _ = body.class_list().remove_1(RESIZING_BODY_CLASS);
                if moved {
                    save_column_widths(&table_id, &storage_key);
                    let _ = body.set_attribute(WAS_RESIZING_ATTR, "true");
                    spawn_local(async {
                        gloo_timers::future::TimeoutFuture::new(50).await;
                        clear_resize_flag();
                    });
                }
            }) as Box<dyn FnMut(WebMouseEvent)>)
        };
        let _ =
            document.add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref());
        mouseup.forget();

        let _ = th.append_child(&handle);
    }
}
