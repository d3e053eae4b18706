//! Region focus: marker dimming and the pulsing region marker.

use crate::catalog::StationId;
use crate::constants::*;
use crate::geo::{project_coord, GeoCoord};
use crate::markers::MarkerRegistry;
use crate::resources::{DrawHandle, ResourceKind, ResourceLedger};
use fnv::FnvHashSet;
use glam::Vec3;

pub fn highlight_region(markers: &mut MarkerRegistry, members: &FnvHashSet<StationId>) {
    for marker in markers.iter_mut() {
        marker.visual.opacity = if members.contains(marker.station_id()) {
            REGION_MEMBER_OPACITY
        } else {
            REGION_OUTSIDER_OPACITY
        };
    }
}

pub fn clear_region_highlight(markers: &mut MarkerRegistry) {
    for marker in markers.iter_mut() {
        marker.visual.opacity = MARKER_BASE_OPACITY;
    }
}

#[derive(Debug)]
pub struct RegionMarker {
    handle: DrawHandle,
    position: Vec3,
    color: Vec3,
    pub scale: f32,
    pub opacity: f32,
}

impl RegionMarker {
    pub fn new(center: GeoCoord, earth_radius: f32, color: Vec3, ledger: &mut ResourceLedger) -> Self {
        Self {
            handle: ledger.acquire(ResourceKind::RegionMarker),
            position: project_coord(center, earth_radius * REGION_MARKER_ALTITUDE),
            color,
            scale: 1.0,
            opacity: REGION_MARKER_BASE_OPACITY,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn radius(&self) -> f32 {
        REGION_MARKER_RADIUS * self.scale
    }

    pub fn pulse(&mut self, anim_time: f64) {
        let wave = (anim_time as f32 * REGION_MARKER_PULSE_FREQUENCY).sin();
        self.scale = 1.0 + REGION_MARKER_SCALE_AMPLITUDE * wave;
        self.opacity = REGION_MARKER_BASE_OPACITY + REGION_MARKER_OPACITY_AMPLITUDE * wave;
    }

    pub fn dispose(self, ledger: &mut ResourceLedger) {
        ledger.release(self.handle);
    }
}
