use crate::constants::{DEFAULT_VOLUME_PERCENT, STATUS_TEXT_ID};
use crate::dom;
use globe_core::Station;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// The page's `<audio>` element, playing at most one station stream.
#[derive(Clone)]
pub struct StationPlayer {
    element: web::HtmlAudioElement,
}

impl StationPlayer {
    pub fn attach(document: &web::Document, element_id: &str) -> anyhow::Result<Self> {
        let element = document
            .get_element_by_id(element_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?
            .dyn_into::<web::HtmlAudioElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        element.set_volume(f64::from(DEFAULT_VOLUME_PERCENT) / 100.0);
        let player = Self { element };
        player.wire_status(document);
        Ok(player)
    }

    /// Start `station`'s stream. A failed start is reported once; there is no retry.
    pub fn play(&self, station: &Station) {
        log::info!("[audio] {} -> {}", station.name, station.url);
        self.element.set_src(&station.url);
        self.element.load();
        self.start();
    }

    fn start(&self) {
        let promise = match self.element.play() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[audio] play rejected: {:?}", e);
                return;
            }
        };
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] playback error: {:?}", e);
                if let Some(doc) = web::window().and_then(|w| w.document()) {
                    dom::set_text(&doc, STATUS_TEXT_ID, "Stream unavailable");
                }
            }
        });
    }

    pub fn has_source(&self) -> bool {
        !self.element.src().is_empty()
    }

    /// Returns whether audio is now playing.
    pub fn toggle(&self) -> bool {
        if !self.has_source() {
            return false;
        }
        if self.element.paused() {
            self.start();
            true
        } else {
            _ = self.element.pause();
            false
        }
    }

    pub fn set_volume_percent(&self, percent: u32) {
        self.element.set_volume(f64::from(percent.min(100)) / 100.0);
    }

    /// Returns the new muted state.
    pub fn toggle_mute(&self) -> bool {
        let muted = !self.element.muted();
        self.element.set_muted(muted);
        muted
    }

    pub fn is_playing(&self) -> bool {
        !self.element.paused()
    }

    fn wire_status(&self, document: &web::Document) {
        let states: [(&str, &'static str); 5] = [
            ("loadstart", "Connecting..."),
            ("playing", "Playing"),
            ("pause", "Paused"),
            ("waiting", "Buffering..."),
            ("error", "Stream unavailable"),
        ];
        for (event, text) in states {
            let doc = document.clone();
            let closure = Closure::wrap(Box::new(move || {
                dom::set_text(&doc, STATUS_TEXT_ID, text);
            }) as Box<dyn FnMut()>);
            _ = self
                .element
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}
