// Host-side tests for front-end constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn input_constants_are_within_reasonable_bounds() {
    assert!(DRAG_THRESHOLD_PX > 0.0);
    assert!(WHEEL_ZOOM_PER_PX > 0.0);

    // Wheel factors must bracket "no zoom"
    assert!(WHEEL_ZOOM_MIN_FACTOR < 1.0);
    assert!(WHEEL_ZOOM_MAX_FACTOR > 1.0);
    assert!(WHEEL_ZOOM_MIN_FACTOR > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn render_constants_fit_index_and_line_budgets() {
    // u16 index buffer
    assert!((SPHERE_SEGMENTS + 1) * (SPHERE_RINGS + 1) <= u16::MAX as u32);
    assert!(SPHERE_SEGMENTS >= 3);
    assert!(SPHERE_RINGS >= 2);

    assert!(GRATICULE_STEP_DEGREES > 0 && GRATICULE_STEP_DEGREES < 90);
    assert_eq!(180 % GRATICULE_STEP_DEGREES, 0);
    assert!(GRATICULE_SAMPLES >= 4);

    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
    assert!(STAR_POINT_BRIGHTNESS > 0.0 && STAR_POINT_BRIGHTNESS <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ui_constants_are_sane() {
    assert!(DEFAULT_VOLUME_PERCENT <= 100);
    assert!(LOADING_HIDE_DELAY_MS > 0);
    assert!(REGION_ATTR.starts_with("data-"));
    assert!(STATION_ATTR.starts_with("data-"));
}

#[test]
fn directory_url_asks_for_geolocated_stations() {
    assert!(DIRECTORY_URL.starts_with("https://"));
    assert!(DIRECTORY_URL.contains("has_geo_info=true"));
    assert!(CORS_PROXY.ends_with('?'));
}

#[test]
fn element_ids_are_unique() {
    let ids = [
        CANVAS_ID,
        AUDIO_ID,
        LOADING_SCREEN_ID,
        REGION_LIST_ID,
        STATION_LIST_ID,
        STATIONS_CONTAINER_ID,
        CURRENT_REGION_NAME_ID,
        BACK_TO_REGIONS_ID,
        STATION_SEARCH_ID,
        GLOBAL_SEARCH_ID,
        CURRENT_STATION_ID,
        CURRENT_LOCATION_ID,
        CURRENT_GENRE_ID,
        STREAM_QUALITY_ID,
        PLAY_BUTTON_ID,
        VOLUME_ID,
        VOLUME_VALUE_ID,
        MUTE_BUTTON_ID,
        STATUS_TEXT_ID,
        FAVORITE_BUTTON_ID,
        FAVORITES_BUTTON_ID,
        FAVORITES_PANEL_ID,
        FAVORITES_CONTAINER_ID,
        CLOSE_FAVORITES_ID,
        NO_FAVORITES_ID,
        FAV_COUNT_ID,
        ROULETTE_BUTTON_ID,
        ROULETTE_OVERLAY_ID,
        ROULETTE_COUNTDOWN_ID,
        AUTO_ROTATE_BUTTON_ID,
        RESET_VIEW_BUTTON_ID,
        TOTAL_STATIONS_ID,
        REGIONS_COVERED_ID,
    ];
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
}
