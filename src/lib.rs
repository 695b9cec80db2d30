#![cfg(target_arch = "wasm32")]
use crate::constants::CANVAS_ID;
use crate::core::{OrbitCamera, SceneParams, Session};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("xmas-particles starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let session = Rc::new(RefCell::new(Session::new(SceneParams::default())?));
    let camera = Rc::new(RefCell::new(OrbitCamera::default()));
    {
        let s = session.borrow();
        log::info!(
            "[scene] {} particles, {} stars",
            s.particle_count(),
            s.starfield().len()
        );
    }

    events::wire_controls(&document, session.clone());
    events::wire_orbit_input(&canvas, camera.clone());

    let (starfield, particle_count) = {
        let s = session.borrow();
        (s.starfield().clone(), s.particle_count())
    };
    let gpu = frame::init_gpu(&canvas, &starfield, particle_count).await;
    if gpu.is_none() {
        log::warn!("[gpu] unavailable; simulation runs without drawing");
    }

    overlay::hide_after_delay(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        session, camera, canvas, document, gpu,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
