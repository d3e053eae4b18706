//! Favorites and roulette history, persisted by the front-end as JSON.

use crate::catalog::{Station, StationId};
use crate::constants::ROULETTE_HISTORY_LEN;
use crate::error::{GlobeError, Result};
use std::collections::VecDeque;

pub const FAVORITES_KEY: &str = "fractalradio_favorites";
pub const ROULETTE_HISTORY_KEY: &str = "fractalradio_roulette_history";

#[derive(Clone, Debug, Default)]
pub struct Favorites {
    stations: Vec<Station>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove the station; returns whether it is a favorite afterwards.
    pub fn toggle(&mut self, station: &Station) -> bool {
        if let Some(i) = self.position(&station.id) {
            self.stations.remove(i);
            false
        } else {
            self.stations.push(station.clone());
            true
        }
    }

    pub fn contains(&self, id: &StationId) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: &StationId) -> Option<usize> {
        self.stations.iter().position(|s| &s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.stations).unwrap_or_else(|_| "[]".to_owned())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let stations = serde_json::from_str(json).map_err(GlobeError::Library)?;
        Ok(Self { stations })
    }
}

/// Most recent roulette landings, newest first.
#[derive(Clone, Debug, Default)]
pub struct RouletteHistory {
    entries: VecDeque<Station>,
}

impl RouletteHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, station: Station) {
        self.entries.push_front(station);
        self.entries.truncate(ROULETTE_HISTORY_LEN);
    }

    pub fn latest(&self) -> Option<&Station> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "[]".to_owned())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let mut entries: VecDeque<Station> =
            serde_json::from_str(json).map_err(GlobeError::Library)?;
        entries.truncate(ROULETTE_HISTORY_LEN);
        Ok(Self { entries })
    }
}
