/// Front-end wiring and interaction tuning constants.
///
/// Engine tuning lives in `globe_core::constants`; these cover the page:
/// element ids, storage keys, the directory endpoint and input feel.
// Page elements
pub const CANVAS_ID: &str = "app-canvas";
pub const AUDIO_ID: &str = "audio-element";
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const REGION_LIST_ID: &str = "region-list";
pub const STATION_LIST_ID: &str = "station-list";
pub const STATIONS_CONTAINER_ID: &str = "stations-container";
pub const CURRENT_REGION_NAME_ID: &str = "current-region-name";
pub const BACK_TO_REGIONS_ID: &str = "back-to-regions";
pub const STATION_SEARCH_ID: &str = "station-search";
pub const GLOBAL_SEARCH_ID: &str = "global-search";
pub const CURRENT_STATION_ID: &str = "current-station";
pub const CURRENT_LOCATION_ID: &str = "current-location";
pub const CURRENT_GENRE_ID: &str = "current-genre";
pub const STREAM_QUALITY_ID: &str = "stream-quality";
pub const PLAY_BUTTON_ID: &str = "play-btn";
pub const VOLUME_ID: &str = "volume";
pub const VOLUME_VALUE_ID: &str = "volume-value";
pub const MUTE_BUTTON_ID: &str = "mute-btn";
pub const STATUS_TEXT_ID: &str = "status-text";
pub const FAVORITE_BUTTON_ID: &str = "add-favorite-btn";
pub const FAVORITES_BUTTON_ID: &str = "favorites-btn";
pub const FAVORITES_PANEL_ID: &str = "favorites-panel";
pub const FAVORITES_CONTAINER_ID: &str = "favorites-container";
pub const CLOSE_FAVORITES_ID: &str = "close-favorites-btn";
pub const NO_FAVORITES_ID: &str = "no-favorites-message";
pub const FAV_COUNT_ID: &str = "fav-count";
pub const ROULETTE_BUTTON_ID: &str = "roulette-btn";
pub const ROULETTE_OVERLAY_ID: &str = "roulette-overlay";
pub const ROULETTE_COUNTDOWN_ID: &str = "roulette-countdown";
pub const AUTO_ROTATE_BUTTON_ID: &str = "auto-rotate-btn";
pub const RESET_VIEW_BUTTON_ID: &str = "reset-view-btn";
pub const TOTAL_STATIONS_ID: &str = "total-stations";
pub const REGIONS_COVERED_ID: &str = "regions-covered";

// Data attributes used for delegated list clicks
pub const REGION_ATTR: &str = "data-region";
pub const STATION_ATTR: &str = "data-station";

// Station directory
pub const CORS_PROXY: &str = "https://corsproxy.io/?";
pub const DIRECTORY_URL: &str = "https://de1.api.radio-browser.info/json/stations/search?limit=1000&has_geo_info=true&order=votes&reverse=true";

// Loading screen stays up this long after the catalog lands
pub const LOADING_HIDE_DELAY_MS: i32 = 1500;

// Seed for the engine RNG when the page does not supply one
pub const DEFAULT_SEED: u64 = 0x5EED_F00D;

// Pointer travel (CSS px) below which a press counts as a click, not a drag
pub const DRAG_THRESHOLD_PX: f32 = 5.0;

// Wheel zoom: dolly factor per wheel pixel, clamped per event
pub const WHEEL_ZOOM_PER_PX: f32 = 0.001;
pub const WHEEL_ZOOM_MIN_FACTOR: f32 = 0.8;
pub const WHEEL_ZOOM_MAX_FACTOR: f32 = 1.25;

// Audio
pub const DEFAULT_VOLUME_PERCENT: u32 = 70;

// Render
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.02];
pub const SPHERE_SEGMENTS: u32 = 32;
pub const SPHERE_RINGS: u32 = 24;
pub const GRATICULE_STEP_DEGREES: u32 = 15;
pub const GRATICULE_SAMPLES: u32 = 96;
pub const STAR_POINT_BRIGHTNESS: f32 = 0.8;
