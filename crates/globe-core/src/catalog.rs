//! Station records and the genre palette.
//!
//! Stations are immutable once loaded; the engine only reads them. The
//! directory decoder turns a radio-browser search response into stations and
//! drops entries the globe cannot place or play.

use crate::constants::hex_rgb;
use crate::error::{GlobeError, Result};
use crate::geo::GeoCoord;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub String);

impl StationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    News,
    Pop,
    Classical,
    Electronic,
    Alternative,
    World,
    #[default]
    #[serde(alias = "default")]
    Other,
}

impl Genre {
    pub const ALL: [Genre; 7] = [
        Genre::News,
        Genre::Pop,
        Genre::Classical,
        Genre::Electronic,
        Genre::Alternative,
        Genre::World,
        Genre::Other,
    ];

    /// Classify a comma-separated tag string. Keyword families are checked in
    /// a fixed order, so "pop,rock" is Pop.
    pub fn detect(tags: &str) -> Self {
        let tags = tags.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| tags.contains(w));
        if has(&["news", "talk"]) {
            Genre::News
        } else if has(&["pop", "top"]) {
            Genre::Pop
        } else if has(&["classical", "jazz"]) {
            Genre::Classical
        } else if has(&["electronic", "dance"]) {
            Genre::Electronic
        } else if has(&["alternative", "rock"]) {
            Genre::Alternative
        } else if has(&["world", "folk"]) {
            Genre::World
        } else {
            Genre::Other
        }
    }

    pub fn hex(self) -> u32 {
        match self {
            Genre::News => 0x3498db,
            Genre::Pop => 0x2ecc71,
            Genre::Classical => 0x9b59b6,
            Genre::Electronic => 0xe74c3c,
            Genre::Alternative => 0xf39c12,
            Genre::World => 0x1abc9c,
            Genre::Other => 0x4fc3f7,
        }
    }

    /// Linear RGB marker color.
    pub fn color(self) -> Vec3 {
        hex_rgb(self.hex())
    }

    pub fn css_color(self) -> &'static str {
        match self {
            Genre::News => "#3498db",
            Genre::Pop => "#2ecc71",
            Genre::Classical => "#9b59b6",
            Genre::Electronic => "#e74c3c",
            Genre::Alternative => "#f39c12",
            Genre::World => "#1abc9c",
            Genre::Other => "#4fc3f7",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Genre::News => "news",
            Genre::Pop => "pop",
            Genre::Classical => "classical",
            Genre::Electronic => "electronic",
            Genre::Alternative => "alternative",
            Genre::World => "world",
            Genre::Other => "default",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub country: String,
    pub language: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub genre: Genre,
    pub coord: GeoCoord,
    pub bitrate: u32,
    pub codec: String,
    pub url: String,
    #[serde(default)]
    pub favicon: Option<String>,
    #[serde(default)]
    pub votes: u32,
}

impl Station {
    /// Name or country contains `query` (already lower-cased).
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query) || self.country.to_lowercase().contains(query)
    }

    /// Like [`Station::matches`], also searching language and tags.
    pub fn matches_extended(&self, query: &str) -> bool {
        self.matches(query)
            || self.language.to_lowercase().contains(query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(query))
    }

    pub fn quality_label(&self) -> String {
        format!("{}kbps {}", self.bitrate, self.codec)
    }
}

// radio-browser `json/stations/search` record; only the fields we place or play.
#[derive(Deserialize)]
struct DirectoryRecord {
    stationuuid: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    url_resolved: Option<String>,
    #[serde(default)]
    favicon: Option<String>,
    #[serde(default)]
    tags: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    geo_lat: Option<f64>,
    #[serde(default)]
    geo_long: Option<f64>,
    #[serde(default)]
    votes: Option<u32>,
    #[serde(default)]
    bitrate: Option<u32>,
    #[serde(default)]
    codec: Option<String>,
}

impl DirectoryRecord {
    fn into_station(self) -> Option<Station> {
        let lat = self.geo_lat.filter(|v| v.is_finite())?;
        let lon = self.geo_long.filter(|v| v.is_finite())?;
        let resolved = self.url_resolved.filter(|u| !u.is_empty())?;
        let raw_tags = self.tags.unwrap_or_default();
        let tags = if raw_tags.is_empty() {
            Vec::new()
        } else {
            raw_tags.split(',').map(str::to_string).collect()
        };
        Some(Station {
            id: StationId(self.stationuuid),
            genre: Genre::detect(&raw_tags),
            name: self.name.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
            language: self
                .language
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            tags,
            coord: GeoCoord::new(lat as f32, lon as f32),
            bitrate: self.bitrate.filter(|b| *b > 0).unwrap_or(128),
            codec: self
                .codec
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| "MP3".to_string()),
            url: resolved,
            favicon: self.favicon.filter(|f| !f.is_empty()),
            votes: self.votes.unwrap_or(0),
        })
    }
}

/// Decode a radio-browser station search response.
///
/// Entries without coordinates or without a resolved stream URL are skipped,
/// as are entries that do not decode; only a malformed array is an error.
pub fn parse_directory(json: &str) -> Result<Vec<Station>> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(GlobeError::Directory)?;
    let total = records.len();
    let stations: Vec<Station> = records
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<DirectoryRecord>(value) {
            Ok(record) => record.into_station(),
            Err(e) => {
                log::debug!("[catalog] skipping directory record: {}", e);
                None
            }
        })
        .collect();
    log::debug!(
        "[catalog] decoded {} of {} directory records",
        stations.len(),
        total
    );
    Ok(stations)
}

fn demo(
    id: &str,
    name: &str,
    country: &str,
    (lat, lon): (f32, f32),
    genre: Genre,
    url: &str,
    language: &str,
    bitrate: u32,
    codec: &str,
) -> Station {
    Station {
        id: StationId::new(id),
        name: name.to_string(),
        country: country.to_string(),
        language: language.to_string(),
        tags: Vec::new(),
        genre,
        coord: GeoCoord::new(lat, lon),
        bitrate,
        codec: codec.to_string(),
        url: url.to_string(),
        favicon: None,
        votes: 0,
    }
}

/// Small built-in catalog used when the directory cannot be reached.
pub fn demo_stations() -> Vec<Station> {
    vec![
        demo(
            "1",
            "BBC World Service",
            "United Kingdom",
            (51.5074, -0.1278),
            Genre::News,
            "http://stream.live.vc.bbcmedia.co.uk/bbc_world_service",
            "English",
            128,
            "MP3",
        ),
        demo(
            "2",
            "Radio Paradise",
            "United States",
            (37.7749, -122.4194),
            Genre::Alternative,
            "https://stream.radioparadise.com/aac-320",
            "English",
            320,
            "AAC",
        ),
        demo(
            "3",
            "FIP Radio",
            "France",
            (48.8566, 2.3522),
            Genre::World,
            "https://icecast.radiofrance.fr/fip-hifi.aac",
            "French",
            128,
            "AAC",
        ),
        demo(
            "4",
            "NRK P1",
            "Norway",
            (59.9139, 10.7522),
            Genre::News,
            "https://lyd.nrk.no/nrk_radio_p1_ostlandssendingen_mp3_h",
            "Norwegian",
            192,
            "MP3",
        ),
        demo(
            "5",
            "Triple J",
            "Australia",
            (-33.8688, 151.2093),
            Genre::Alternative,
            "https://live-radio01.mediahubaustralia.com/2TJW/mp3/",
            "English",
            128,
            "MP3",
        ),
    ]
}
