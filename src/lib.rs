#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use globe_core::{GlobeConfig, GlobeEngine, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod directory;
mod dom;
mod events;
mod frame;
mod input;
mod labels;
mod panels;
mod render;
mod shortcuts;
mod storage;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn build_engine(window: &web::Window, canvas: &web::HtmlCanvasElement) -> GlobeEngine {
    let css_width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(1280.0) as f32;
    let config = GlobeConfig::for_viewport_width(css_width);
    let rect = canvas.get_bounding_client_rect();
    let viewport = Viewport::new(rect.width().max(1.0) as f32, rect.height().max(1.0) as f32);
    let seed = DEFAULT_SEED ^ (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    log::info!(
        "[init] {} layout, viewport {}x{}",
        if config.is_mobile() { "mobile" } else { "desktop" },
        viewport.width,
        viewport.height
    );
    let mut engine = GlobeEngine::new(config, viewport, seed);
    engine.set_history(storage::load_history());
    engine
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fractal-radio starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let engine = Rc::new(RefCell::new(build_engine(&window, &canvas)));
    let player = audio::StationPlayer::attach(&document, AUDIO_ID)?;
    let ui = panels::Ui {
        document: document.clone(),
        engine: engine.clone(),
        favorites: Rc::new(RefCell::new(storage::load_favorites())),
        player,
        station_query: Rc::new(RefCell::new(String::new())),
    };

    events::wire_controls(&ui);
    events::wire_global_keydown(ui.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        engine: engine.clone(),
        gestures: Rc::new(RefCell::new(input::GestureTracker::new(DRAG_THRESHOLD_PX))),
    });
    ui.refresh_favorite_button();
    dom::set_text(
        &document,
        VOLUME_VALUE_ID,
        &labels::volume_label(DEFAULT_VOLUME_PERCENT),
    );

    // Catalog arrives in the background; the globe spins empty until then.
    let ui_catalog = ui.clone();
    spawn_local(async move {
        let stations = directory::load_stations().await;
        ui_catalog.engine.borrow_mut().load_catalog(stations);
        ui_catalog.refresh_catalog();
        panels::hide_loading_screen_later(&ui_catalog.document);
    });

    let (stars, earth_radius) = {
        let e = engine.borrow();
        (e.stars().to_vec(), e.config().earth_radius)
    };
    let gpu = frame::init_gpu(&canvas, &stars, earth_radius).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(ui, canvas, gpu)));
    frame::start_loop(frame_ctx);
    Ok(())
}
