use super::controls;
use crate::panels::Ui;
use crate::shortcuts::{is_text_entry_tag, shortcut_for_key, Shortcut};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, ui: &Ui) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let typing = ev
        .target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .is_some_and(|el| is_text_entry_tag(&el.tag_name()));
    if typing {
        return;
    }
    let Some(shortcut) = shortcut_for_key(&ev.key()) else {
        return;
    };
    log::debug!("[keys] {:?}", shortcut);
    match shortcut {
        Shortcut::TogglePlayback => controls::toggle_playback(ui),
        Shortcut::Roulette => controls::spin_roulette(ui),
        Shortcut::ToggleAutoRotate => controls::toggle_auto_rotate(ui),
        Shortcut::BackToRegions => controls::back_to_regions(ui),
        Shortcut::ResetView => controls::reset_view(ui),
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(ui: Ui) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &ui);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
