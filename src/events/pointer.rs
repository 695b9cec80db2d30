use crate::core::OrbitCamera;
use crate::input::{self, DragState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct OrbitWiring {
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub drag_state: Rc<RefCell<DragState>>,
}

/// Pointer drag orbits the camera, the wheel zooms it. Panning is never wired.
pub fn wire_orbit_input(canvas: &web::HtmlCanvasElement, camera: Rc<RefCell<OrbitCamera>>) {
    let w = OrbitWiring {
        canvas: canvas.clone(),
        camera,
        drag_state: Rc::new(RefCell::new(DragState::default())),
    };
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn wire_pointerdown(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.drag_state
            .borrow_mut()
            .begin(ev.pointer_id(), input::pointer_client_px(&ev));
        w.camera.borrow_mut().begin_drag();
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &OrbitWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let moved = w
            .drag_state
            .borrow_mut()
            .drag_to(ev.pointer_id(), input::pointer_client_px(&ev));
        if let Some(delta) = moved {
            let height = input::canvas_client_height(&w.canvas);
            w.camera
                .borrow_mut()
                .rotate_by_pixels(delta.x, delta.y, height);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &OrbitWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.drag_state.borrow_mut().end(ev.pointer_id()) {
            w.camera.borrow_mut().end_drag();
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        for event in ["pointerup", "pointercancel"] {
            _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}

fn wire_wheel(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        w.camera
            .borrow_mut()
            .zoom(input::wheel_notch(ev.delta_y()));
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
