#![allow(dead_code)]

use globe_core::{GeoCoord, Genre, GlobeConfig, GlobeEngine, Station, StationId, Viewport};

pub const VIEW_W: f32 = 1280.0;
pub const VIEW_H: f32 = 720.0;

pub fn station(id: &str, name: &str, country: &str, lat: f32, lon: f32, genre: Genre) -> Station {
    Station {
        id: StationId::new(id),
        name: name.to_string(),
        country: country.to_string(),
        language: "English".to_string(),
        tags: vec![genre.label().to_string()],
        genre,
        coord: GeoCoord::new(lat, lon),
        bitrate: 128,
        codec: "MP3".to_string(),
        url: format!("https://streams.example/{id}"),
        favicon: None,
        votes: 0,
    }
}

/// Station "front" faces a camera on +Z when the globe has not rotated.
pub fn sample_stations() -> Vec<Station> {
    vec![
        station("front", "Front FM", "Ecuador", 0.0, -90.0, Genre::Pop),
        station("back", "Back Radio", "Indonesia", 0.0, 90.0, Genre::News),
        station("north", "Polar Jazz", "Norway", 70.0, 20.0, Genre::Classical),
        station("west", "Pacific Waves", "United States", 37.0, -122.0, Genre::Alternative),
        station("south", "Southern Cross", "Australia", -33.0, 151.0, Genre::World),
    ]
}

pub fn engine() -> GlobeEngine {
    GlobeEngine::new(GlobeConfig::desktop(), Viewport::new(VIEW_W, VIEW_H), 7)
}

pub fn loaded_engine() -> GlobeEngine {
    let mut engine = engine();
    engine.load_catalog(sample_stations());
    engine.drain_events();
    engine
}

pub fn id(s: &str) -> StationId {
    StationId::new(s)
}

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

pub fn highlighted_ids(engine: &GlobeEngine) -> Vec<StationId> {
    engine
        .markers()
        .iter()
        .filter(|m| m.is_highlighted())
        .map(|m| m.station_id().clone())
        .collect()
}

/// Tick at 60 fps from `from_ms` (exclusive) through `to_ms`.
pub fn run_frames(engine: &mut GlobeEngine, from_ms: f64, to_ms: f64) {
    let mut now = from_ms;
    while now < to_ms {
        now += 16.0;
        engine.tick(now);
    }
}
