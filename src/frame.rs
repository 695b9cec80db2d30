use crate::core::{
    FrameClock, FramePresenter, FrameScheduler, FrameTime, OrbitCamera, Session, ShapeId,
    Starfield,
};
use crate::events;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub session: Rc<RefCell<Session>>,
    pub camera: Rc<RefCell<OrbitCamera>>,

    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,

    pub gpu: Option<render::GpuState<'a>>,
    pub presenter: FramePresenter,
    pub last_ui: Option<(ShapeId, bool)>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        session: Rc<RefCell<Session>>,
        camera: Rc<RefCell<OrbitCamera>>,
        canvas: web::HtmlCanvasElement,
        document: web::Document,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        Self {
            session,
            camera,
            canvas,
            document,
            gpu,
            presenter: FramePresenter::new(),
            last_ui: None,
        }
    }

    pub fn frame(&mut self, time: FrameTime) {
        self.session
            .borrow_mut()
            .advance(time.delta, time.elapsed);
        self.camera.borrow_mut().update(time.delta);

        // Auto-cycle flips shapes without a click, so buttons follow the session.
        let ui = {
            let s = self.session.borrow();
            (s.active_shape(), s.auto_cycle_enabled())
        };
        if self.last_ui != Some(ui) {
            events::sync_button_states(&self.document, ui.0, ui.1);
            self.last_ui = Some(ui);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let aspect = g.aspect();
            let session = self.session.borrow();
            let camera = self.camera.borrow();
            if let Err(e) = self.presenter.present(&session, &camera, aspect, g) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    starfield: &Starfield,
    particle_capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, starfield, particle_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// `requestAnimationFrame` driven scheduler; runs until the page goes away.
pub struct AnimationFrameLoop {
    origin: Instant,
}

impl AnimationFrameLoop {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for AnimationFrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for AnimationFrameLoop {
    fn on_frame(self, mut callback: Box<dyn FnMut(FrameTime)>) {
        let origin = self.origin;
        let now_sec = move || origin.elapsed().as_secs_f64();
        let mut clock = FrameClock::new(now_sec());

        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            callback(clock.tick(now_sec()));
            request_frame(&tick_clone);
        }) as Box<dyn FnMut()>));
        request_frame(&tick);
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(closure) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    AnimationFrameLoop::new().on_frame(Box::new(move |time| {
        frame_ctx.borrow_mut().frame(time);
    }));
}
