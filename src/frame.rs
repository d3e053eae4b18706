use crate::constants::AUTO_ROTATE_BUTTON_ID;
use crate::dom;
use crate::panels::Ui;
use crate::render;
use globe_core::{Command, SceneSnapshot, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub ui: Ui,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub snapshot: SceneSnapshot,
    pub started: Instant,
    pub viewport: Option<Viewport>,
    pub auto_rotate_shown: Option<bool>,
}

impl<'a> FrameContext<'a> {
    pub fn new(ui: Ui, canvas: web::HtmlCanvasElement, gpu: Option<render::GpuState<'a>>) -> Self {
        Self {
            ui,
            canvas,
            gpu,
            snapshot: SceneSnapshot::new(),
            started: Instant::now(),
            viewport: None,
            auto_rotate_shown: None,
        }
    }

    pub fn frame(&mut self) {
        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        self.sync_viewport();

        let (events, auto_rotate) = {
            let mut engine = self.ui.engine.borrow_mut();
            engine.tick(now_ms);
            self.snapshot.fill(&engine);
            (engine.drain_events(), engine.auto_rotate())
        };
        for event in &events {
            self.ui.on_event(event);
        }

        if self.auto_rotate_shown != Some(auto_rotate) {
            self.auto_rotate_shown = Some(auto_rotate);
            dom::set_style(
                &self.ui.document,
                AUTO_ROTATE_BUTTON_ID,
                "opacity",
                if auto_rotate { "1" } else { "0.5" },
            );
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&self.snapshot) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    /// The engine works in CSS pixels; the GPU surface follows the backing store.
    fn sync_viewport(&mut self) {
        let rect = self.canvas.get_bounding_client_rect();
        let viewport = Viewport::new(rect.width() as f32, rect.height() as f32);
        if viewport.width <= 0.0 || viewport.height <= 0.0 || self.viewport == Some(viewport) {
            return;
        }
        self.viewport = Some(viewport);
        self.ui
            .engine
            .borrow_mut()
            .submit(Command::Resize(viewport));
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    stars: &[glam::Vec3],
    earth_radius: f32,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, stars, earth_radius).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
