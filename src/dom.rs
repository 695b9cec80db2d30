use crate::constants::MAX_PIXEL_RATIO;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[ui] missing #{}", element_id);
    }
}

/// Listen for `event` ("input" or "change") on an `<input>` and hand the
/// handler its current string value.
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    event: &str,
    mut handler: impl FnMut(String) + 'static,
) {
    let Some(input) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        log::warn!("[ui] missing input #{}", element_id);
        return;
    };
    let input_for_value = input.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        handler(input_for_value.value());
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_class(document: &web::Document, element_id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let list = el.class_list();
        _ = if on { list.add_1(class) } else { list.remove_1(class) };
    }
}

/// Remove `class` from every element matching `selector`.
pub fn clear_class(document: &web::Document, selector: &str, class: &str) {
    if let Ok(nodes) = document.query_selector_all(selector) {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                _ = el.class_list().remove_1(class);
            }
        }
    }
}

/// Run `f` once after `delay_ms`.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::once(f);
    let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(callback, delay_ms);
    closure.forget();
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
