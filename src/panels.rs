use crate::audio::StationPlayer;
use crate::constants::*;
use crate::{dom, labels, storage};
use globe_core::{Favorites, GlobeEngine, GlobeEvent, Station, StationId};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the DOM handlers share.
#[derive(Clone)]
pub struct Ui {
    pub document: web::Document,
    pub engine: Rc<RefCell<GlobeEngine>>,
    pub favorites: Rc<RefCell<Favorites>>,
    pub player: StationPlayer,
    pub station_query: Rc<RefCell<String>>,
}

impl Ui {
    /// React to one engine event after a tick. The engine must not be
    /// mutably borrowed by the caller.
    pub fn on_event(&self, event: &GlobeEvent) {
        match event {
            GlobeEvent::StationPicked(id) => log::debug!("[ui] picked {}", id),
            GlobeEvent::StationSelected(id) => {
                let station = self.engine.borrow().station(id).cloned();
                if let Some(station) = station {
                    self.show_now_playing(&station);
                    self.player.play(&station);
                    dom::set_text(&self.document, PLAY_BUTTON_ID, labels::play_icon(true));
                }
            }
            GlobeEvent::SelectionCleared => {}
            GlobeEvent::RegionFocused(Some(name)) => self.show_region(name),
            GlobeEvent::RegionFocused(None) => {}
            GlobeEvent::RegionCleared => self.show_region_list(),
            GlobeEvent::RouletteStarted(_) => {
                dom::set_text(
                    &self.document,
                    ROULETTE_COUNTDOWN_ID,
                    &labels::countdown_label(Some(globe_core::constants::ROULETTE_COUNTDOWN_FROM)),
                );
                dom::set_displayed(&self.document, ROULETTE_OVERLAY_ID, Some("flex"));
            }
            GlobeEvent::RouletteCountdown(step) => {
                dom::set_text(
                    &self.document,
                    ROULETTE_COUNTDOWN_ID,
                    &labels::countdown_label(*step),
                );
            }
            GlobeEvent::RouletteLanded(id) => {
                dom::set_displayed(&self.document, ROULETTE_OVERLAY_ID, None);
                storage::save_history(self.engine.borrow().history());
                log::info!("[roulette] landed on {}", id);
            }
        }
    }

    /// Catalog-dependent panels: region list and global stats.
    pub fn refresh_catalog(&self) {
        let engine = self.engine.borrow();
        let html: String = engine
            .regions()
            .non_empty()
            .map(labels::region_item_html)
            .collect();
        dom::set_html(&self.document, REGION_LIST_ID, &html);
        dom::set_text(
            &self.document,
            TOTAL_STATIONS_ID,
            &labels::thousands(engine.stations().len()),
        );
        dom::set_text(
            &self.document,
            REGIONS_COVERED_ID,
            &engine.regions().non_empty().count().to_string(),
        );
    }

    pub fn show_region(&self, name: &str) {
        dom::set_displayed(&self.document, REGION_LIST_ID, None);
        dom::set_displayed(&self.document, STATION_LIST_ID, Some("block"));
        dom::set_text(&self.document, CURRENT_REGION_NAME_ID, name);
        self.station_query.borrow_mut().clear();
        if let Some(input) = self
            .document
            .get_element_by_id(STATION_SEARCH_ID)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        {
            input.set_value("");
        }
        self.render_station_list();
    }

    pub fn show_region_list(&self) {
        dom::set_displayed(&self.document, STATION_LIST_ID, None);
        dom::set_displayed(&self.document, REGION_LIST_ID, Some("block"));
    }

    /// Stations of the focused region that match the station search box.
    pub fn render_station_list(&self) {
        let engine = self.engine.borrow();
        let Some(region) = engine.focused_region().and_then(|n| engine.regions().get(n)) else {
            dom::set_html(&self.document, STATIONS_CONTAINER_ID, "");
            return;
        };
        let query = self.station_query.borrow();
        let html = labels::station_list_html(
            region
                .station_ids
                .iter()
                .filter_map(|id| engine.station(id))
                .filter(|s| query.is_empty() || s.matches_extended(&query)),
        );
        dom::set_html(&self.document, STATIONS_CONTAINER_ID, &html);
    }

    pub fn show_now_playing(&self, station: &Station) {
        let doc = &self.document;
        dom::set_text(doc, CURRENT_STATION_ID, &station.name);
        dom::set_text(doc, CURRENT_LOCATION_ID, &station.country);
        dom::set_text(doc, CURRENT_GENRE_ID, &station.genre.label().to_uppercase());
        dom::set_style(doc, CURRENT_GENRE_ID, "background", station.genre.css_color());
        dom::set_text(doc, STREAM_QUALITY_ID, &station.quality_label());
        self.refresh_favorite_button();
    }

    pub fn toggle_favorite(&self) {
        let Some(station) = self.engine.borrow().selected_station().cloned() else {
            return;
        };
        let added = self.favorites.borrow_mut().toggle(&station);
        log::info!(
            "[favorites] {} {}",
            if added { "added" } else { "removed" },
            station.name
        );
        storage::save_favorites(&self.favorites.borrow());
        self.refresh_favorite_button();
        self.render_favorites();
    }

    pub fn refresh_favorite_button(&self) {
        let favorites = self.favorites.borrow();
        dom::set_text(&self.document, FAV_COUNT_ID, &favorites.len().to_string());
        let selected: Option<StationId> = self
            .engine
            .borrow()
            .selection()
            .current()
            .cloned();
        let is_favorite = selected.is_some_and(|id| favorites.contains(&id));
        dom::set_style(
            &self.document,
            FAVORITE_BUTTON_ID,
            "background",
            if is_favorite {
                "rgba(236, 64, 122, 0.2)"
            } else {
                ""
            },
        );
    }

    pub fn render_favorites(&self) {
        let favorites = self.favorites.borrow();
        dom::set_displayed(
            &self.document,
            NO_FAVORITES_ID,
            favorites.is_empty().then_some("block"),
        );
        dom::set_html(
            &self.document,
            FAVORITES_CONTAINER_ID,
            &labels::station_list_html(favorites.iter()),
        );
    }

    /// A favorite may come from an older catalog; only stations with a
    /// marker can be selected, the rest just play.
    pub fn play_favorite(&self, id: &str) {
        let id = StationId::new(id);
        let has_marker = self.engine.borrow().markers().find(&id).is_some();
        if has_marker {
            self.engine
                .borrow_mut()
                .submit(globe_core::Command::SelectStation(id));
            return;
        }
        let station = self.favorites.borrow().iter().find(|s| s.id == id).cloned();
        if let Some(station) = station {
            self.show_now_playing(&station);
            self.player.play(&station);
        }
    }
}

/// Fade the loading screen out a moment after the catalog is on the globe.
pub fn hide_loading_screen_later(document: &web::Document) {
    let doc = document.clone();
    let closure = Closure::once_into_js(move || {
        dom::set_style(&doc, LOADING_SCREEN_ID, "opacity", "0");
        dom::set_displayed(&doc, LOADING_SCREEN_ID, None);
    });
    if let Some(window) = web::window() {
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref(),
            LOADING_HIDE_DELAY_MS,
        );
    }
}
