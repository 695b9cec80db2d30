use crate::constants::*;
use crate::core::{Session, ShapeId};
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Reflect the active shape and auto-cycle mode on the control buttons.
pub fn sync_button_states(document: &web::Document, shape: ShapeId, auto_cycle: bool) {
    dom::clear_class(document, CONTROL_BTN_SELECTOR, ACTIVE_CLASS);
    let shape_btn = match shape {
        ShapeId::Tree => BTN_TREE_ID,
        ShapeId::Heart => BTN_HEART_ID,
    };
    dom::set_class(document, shape_btn, ACTIVE_CLASS, true);
    dom::set_class(document, BTN_AUTO_ID, ACTIVE_CLASS, auto_cycle);
}

fn refresh_buttons(document: &web::Document, session: &Rc<RefCell<Session>>) {
    let (shape, auto) = {
        let s = session.borrow();
        (s.active_shape(), s.auto_cycle_enabled())
    };
    sync_button_states(document, shape, auto);
}

/// Wire shape buttons, the auto-cycle toggle and both sliders to the session.
pub fn wire_controls(document: &web::Document, session: Rc<RefCell<Session>>) {
    for (id, shape) in [(BTN_TREE_ID, ShapeId::Tree), (BTN_HEART_ID, ShapeId::Heart)] {
        let session_btn = session.clone();
        let doc = document.clone();
        dom::add_click_listener(document, id, move || {
            session_btn.borrow_mut().show_shape(shape);
            refresh_buttons(&doc, &session_btn);
        });
    }

    let session_auto = session.clone();
    let doc_auto = document.clone();
    dom::add_click_listener(document, BTN_AUTO_ID, move || {
        session_auto.borrow_mut().toggle_auto_cycle();
        refresh_buttons(&doc_auto, &session_auto);
    });

    // Live label while dragging the slider; regenerate only on release.
    let doc_label = document.clone();
    dom::add_input_listener(document, PARTICLE_COUNT_INPUT_ID, "input", move |value| {
        if let Some(v) = input::parse_slider(&value) {
            dom::set_text(&doc_label, PARTICLE_COUNT_LABEL_ID, &format!("{}", v as usize));
        }
    });

    let session_count = session.clone();
    let doc_count = document.clone();
    dom::add_input_listener(document, PARTICLE_COUNT_INPUT_ID, "change", move |value| {
        let Some(v) = input::parse_slider(&value) else {
            log::warn!("[ui] ignoring particle count {:?}", value);
            return;
        };
        let result = session_count.borrow_mut().set_particle_count(v as usize);
        if let Err(e) = result {
            log::error!("[ui] regeneration failed: {}", e);
        }
        refresh_buttons(&doc_count, &session_count);
    });

    let session_twinkle = session.clone();
    dom::add_input_listener(document, TWINKLE_SPEED_INPUT_ID, "input", move |value| {
        if let Some(v) = input::parse_twinkle_speed(&value) {
            session_twinkle.borrow_mut().set_twinkle_speed(v);
        }
    });

    refresh_buttons(document, &session);
}
