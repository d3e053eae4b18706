use crate::constants::*;
use crate::easing::ease_out_cubic;
use crate::resources::{DrawHandle, ResourceKind, ResourceLedger};
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Debug)]
pub struct Ring {
    handle: DrawHandle,
    born_at: f64,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub opacity: f32,
    expired: bool,
}

impl Ring {
    pub fn born_at(&self) -> f64 {
        self.born_at
    }

    pub fn handle(&self) -> DrawHandle {
        self.handle
    }
}

/// Expanding, fading rings anchored at the selected marker.
///
/// A ring is born every [`HALO_SPAWN_INTERVAL_FRAMES`] ticks and lives for
/// [`HALO_RING_DURATION`] animation-time units; several overlap at any time.
#[derive(Debug)]
pub struct HaloEmitter {
    anchor: Vec3,
    color: Vec3,
    marker_size: f32,
    spawn_counter: u32,
    rings: SmallVec<[Ring; 8]>,
    disposed: bool,
}

impl HaloEmitter {
    pub fn new(anchor: Vec3, color: Vec3, marker_size: f32) -> Self {
        Self {
            anchor,
            color,
            marker_size,
            spawn_counter: 0,
            rings: SmallVec::new(),
            disposed: false,
        }
    }

    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    /// Rings lie flat on the globe: their plane is perpendicular to this.
    pub fn normal(&self) -> Vec3 {
        self.anchor.normalize_or_zero()
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Age existing rings, drop the expired ones, then maybe spawn a new ring.
    /// A ring spawned here is not aged until the next tick.
    pub fn tick(&mut self, now: f64, ledger: &mut ResourceLedger) {
        if self.disposed {
            return;
        }
        let size = self.marker_size;
        for ring in self.rings.iter_mut() {
            let age = now - ring.born_at;
            if age > HALO_RING_DURATION {
                ring.expired = true;
                continue;
            }
            let progress = (age / HALO_RING_DURATION).clamp(0.0, 1.0) as f32;
            let eased = ease_out_cubic(progress);
            ring.inner_radius = size * HALO_INNER_START + size * HALO_INNER_GROWTH * eased;
            ring.outer_radius = size * HALO_OUTER_START + size * HALO_OUTER_GROWTH * eased;
            ring.opacity = 1.0 - eased;
        }
        self.rings.retain(|ring| {
            if ring.expired {
                ledger.release(ring.handle);
            }
            !ring.expired
        });

        self.spawn_counter += 1;
        if self.spawn_counter >= HALO_SPAWN_INTERVAL_FRAMES {
            self.rings.push(Ring {
                handle: ledger.acquire(ResourceKind::Ring),
                born_at: now,
                inner_radius: size * HALO_INNER_START,
                outer_radius: size * HALO_OUTER_START,
                opacity: 1.0,
                expired: false,
            });
            self.spawn_counter = 0;
        }
    }

    /// Release every ring. Safe to call more than once.
    pub fn dispose(&mut self, ledger: &mut ResourceLedger) {
        for ring in self.rings.drain(..) {
            ledger.release(ring.handle);
        }
        self.disposed = true;
    }
}
