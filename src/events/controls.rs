use crate::constants::*;
use crate::panels::Ui;
use crate::{dom, labels};
use globe_core::{Command, StationId};

/// Actions shared by panel buttons and keyboard shortcuts.
pub fn back_to_regions(ui: &Ui) {
    let mut engine = ui.engine.borrow_mut();
    engine.submit(Command::ClearRegionFocus);
    engine.submit(Command::ClearSelection);
    drop(engine);
    ui.show_region_list();
}

pub fn spin_roulette(ui: &Ui) {
    if ui.engine.borrow().stations().is_empty() {
        return;
    }
    ui.engine.borrow_mut().submit(Command::SpinToRandom);
}

pub fn toggle_playback(ui: &Ui) {
    let playing = ui.player.toggle();
    dom::set_text(&ui.document, PLAY_BUTTON_ID, labels::play_icon(playing));
}

pub fn toggle_auto_rotate(ui: &Ui) {
    ui.engine.borrow_mut().submit(Command::ToggleAutoRotate);
}

pub fn reset_view(ui: &Ui) {
    ui.engine.borrow_mut().submit(Command::ResetView);
}

fn toggle_favorites_panel(ui: &Ui) {
    if dom::toggle_class(&ui.document, FAVORITES_PANEL_ID, "open") {
        ui.render_favorites();
    }
}

pub fn wire_controls(ui: &Ui) {
    let doc = &ui.document;

    let u = ui.clone();
    dom::add_click_listener(doc, PLAY_BUTTON_ID, move || toggle_playback(&u));

    let u = ui.clone();
    dom::add_input_listener(doc, VOLUME_ID, move |value| {
        let percent = value.trim().parse::<u32>().unwrap_or(DEFAULT_VOLUME_PERCENT);
        u.player.set_volume_percent(percent);
        dom::set_text(&u.document, VOLUME_VALUE_ID, &labels::volume_label(percent));
    });

    let u = ui.clone();
    dom::add_click_listener(doc, MUTE_BUTTON_ID, move || {
        let muted = u.player.toggle_mute();
        dom::set_text(&u.document, MUTE_BUTTON_ID, labels::mute_icon(muted));
    });

    let u = ui.clone();
    dom::add_click_listener(doc, BACK_TO_REGIONS_ID, move || back_to_regions(&u));

    let u = ui.clone();
    dom::add_click_listener(doc, FAVORITE_BUTTON_ID, move || u.toggle_favorite());

    for id in [FAVORITES_BUTTON_ID, CLOSE_FAVORITES_ID] {
        let u = ui.clone();
        dom::add_click_listener(doc, id, move || toggle_favorites_panel(&u));
    }

    let u = ui.clone();
    dom::add_click_listener(doc, ROULETTE_BUTTON_ID, move || spin_roulette(&u));

    let u = ui.clone();
    dom::add_click_listener(doc, AUTO_ROTATE_BUTTON_ID, move || toggle_auto_rotate(&u));

    let u = ui.clone();
    dom::add_click_listener(doc, RESET_VIEW_BUTTON_ID, move || reset_view(&u));

    let u = ui.clone();
    dom::add_input_listener(doc, GLOBAL_SEARCH_ID, move |query| {
        u.engine.borrow_mut().submit(Command::FilterMarkers(query));
    });

    let u = ui.clone();
    dom::add_input_listener(doc, STATION_SEARCH_ID, move |query| {
        *u.station_query.borrow_mut() = query.trim().to_lowercase();
        u.render_station_list();
    });

    let u = ui.clone();
    dom::add_delegated_click(doc, REGION_LIST_ID, REGION_ATTR, move |name| {
        u.engine.borrow_mut().submit(Command::FocusRegion(name));
    });

    let u = ui.clone();
    dom::add_delegated_click(doc, STATIONS_CONTAINER_ID, STATION_ATTR, move |id| {
        u.engine
            .borrow_mut()
            .submit(Command::SelectStation(StationId::new(id)));
    });

    let u = ui.clone();
    dom::add_delegated_click(doc, FAVORITES_CONTAINER_ID, STATION_ATTR, move |id| {
        u.play_favorite(&id);
        toggle_favorites_panel(&u);
    });
}
