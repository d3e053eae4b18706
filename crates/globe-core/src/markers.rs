//! One visual marker per station, positioned on the globe surface.

use crate::catalog::{Genre, Station, StationId};
use crate::constants::*;
use crate::geo::project_coord;
use crate::resources::{DrawHandle, ResourceKind, ResourceLedger};
use fnv::FnvHashMap;
use glam::Vec3;

/// Mutable look of a marker. Everything else about a marker is fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerVisual {
    pub emissive: Vec3,
    pub emissive_intensity: f32,
    pub opacity: f32,
    pub scale: f32,
}

#[derive(Debug)]
pub struct Marker {
    station_id: StationId,
    position: Vec3,
    genre: Genre,
    handle: DrawHandle,
    pub visual: MarkerVisual,
    pub visible: bool,
}

impl Marker {
    fn new(station: &Station, radius: f32, handle: DrawHandle) -> Self {
        let mut marker = Self {
            station_id: station.id.clone(),
            position: project_coord(station.coord, radius),
            genre: station.genre,
            handle,
            visual: MarkerVisual {
                emissive: Vec3::ZERO,
                emissive_intensity: 0.0,
                opacity: 0.0,
                scale: 0.0,
            },
            visible: true,
        };
        marker.restore_base();
        marker
    }

    pub fn station_id(&self) -> &StationId {
        &self.station_id
    }

    /// Globe-local position; never changes after creation.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn base_color(&self) -> Vec3 {
        self.genre.color()
    }

    pub fn handle(&self) -> DrawHandle {
        self.handle
    }

    pub fn base_visual(&self) -> MarkerVisual {
        MarkerVisual {
            emissive: self.base_color(),
            emissive_intensity: MARKER_BASE_EMISSIVE_INTENSITY,
            opacity: MARKER_BASE_OPACITY,
            scale: 1.0,
        }
    }

    pub fn restore_base(&mut self) {
        self.visual = self.base_visual();
    }

    pub fn apply_highlight(&mut self) {
        self.visual = MarkerVisual {
            emissive: hex_rgb(HIGHLIGHT_EMISSIVE),
            emissive_intensity: HIGHLIGHT_EMISSIVE_INTENSITY,
            opacity: HIGHLIGHT_OPACITY,
            scale: self.visual.scale * HIGHLIGHT_SCALE,
        };
    }

    pub fn is_highlighted(&self) -> bool {
        self.visual.emissive_intensity >= HIGHLIGHT_EMISSIVE_INTENSITY
            && self.visual.emissive == hex_rgb(HIGHLIGHT_EMISSIVE)
    }
}

/// Owns every marker, in catalog order, with an id index for lookups.
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    markers: Vec<Marker>,
    index: FnvHashMap<StationId, usize>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every marker with one per station, releasing the old ones first.
    ///
    /// Later duplicates of an id already seen are skipped.
    pub fn rebuild(&mut self, stations: &[Station], radius: f32, ledger: &mut ResourceLedger) {
        self.clear(ledger);
        self.markers.reserve(stations.len());
        for station in stations {
            if self.index.contains_key(&station.id) {
                log::warn!("[markers] duplicate station id {} skipped", station.id);
                continue;
            }
            let handle = ledger.acquire(ResourceKind::Marker);
            self.index.insert(station.id.clone(), self.markers.len());
            self.markers.push(Marker::new(station, radius, handle));
        }
        log::debug!("[markers] rebuilt {} markers", self.markers.len());
    }

    pub fn clear(&mut self, ledger: &mut ResourceLedger) {
        for marker in self.markers.drain(..) {
            ledger.release(marker.handle);
        }
        self.index.clear();
    }

    pub fn find(&self, id: &StationId) -> Option<&Marker> {
        self.index.get(id).map(|&i| &self.markers[i])
    }

    pub fn find_mut(&mut self, id: &StationId) -> Option<&mut Marker> {
        match self.index.get(id) {
            Some(&i) => self.markers.get_mut(i),
            None => None,
        }
    }

    pub fn index_of(&self, id: &StationId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn for_each(&self, mut visitor: impl FnMut(usize, &Marker)) {
        for (i, marker) in self.markers.iter().enumerate() {
            visitor(i, marker);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Marker> {
        self.markers.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Marker> {
        self.markers.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
