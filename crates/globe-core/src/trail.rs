use crate::constants::*;
use crate::resources::{DrawHandle, ResourceKind, ResourceLedger};
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct Particle {
    handle: DrawHandle,
    pub position: Vec3,
    pub traveled: f32,
    pub opacity: f32,
    pub scale: f32,
    expired: bool,
}

impl Particle {
    pub fn handle(&self) -> DrawHandle {
        self.handle
    }
}

/// Particles streaming from the selected marker toward a focal point.
///
/// The direction is fixed when the trail is created. Particles fade and
/// shrink linearly with distance traveled and die at [`TRAIL_MAX_LENGTH`].
#[derive(Debug)]
pub struct TrailEmitter {
    origin: Vec3,
    direction: Vec3,
    color: Vec3,
    spawn_point: Vec3,
    frame_counter: u32,
    particles: Vec<Particle>,
    disposed: bool,
}

impl TrailEmitter {
    pub fn new(origin: Vec3, focal_point: Vec3, color: Vec3, marker_size: f32) -> Self {
        let direction = (focal_point - origin).normalize_or_zero();
        Self {
            origin,
            direction,
            color,
            spawn_point: origin - direction * (marker_size * TRAIL_SPAWN_OFFSET),
            frame_counter: 0,
            particles: Vec::new(),
            disposed: false,
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Advance live particles, drop spent ones, then maybe spawn at the origin.
    pub fn tick(&mut self, ledger: &mut ResourceLedger) {
        if self.disposed {
            return;
        }
        let step = self.direction * TRAIL_PARTICLE_SPEED;
        for p in self.particles.iter_mut() {
            p.position += step;
            p.traveled += TRAIL_PARTICLE_SPEED;
            let remaining = (1.0 - p.traveled / TRAIL_MAX_LENGTH).max(0.0);
            p.opacity = remaining;
            p.scale = remaining;
            p.expired = p.opacity <= 0.0 || p.traveled >= TRAIL_MAX_LENGTH;
        }
        self.particles.retain(|p| {
            if p.expired {
                ledger.release(p.handle);
            }
            !p.expired
        });

        self.frame_counter += 1;
        if self.frame_counter >= TRAIL_SPAWN_INTERVAL_FRAMES {
            self.frame_counter = 0;
            if self.particles.len() < TRAIL_MAX_PARTICLES {
                self.particles.push(Particle {
                    handle: ledger.acquire(ResourceKind::Particle),
                    position: self.spawn_point,
                    traveled: 0.0,
                    opacity: 1.0,
                    scale: 1.0,
                    expired: false,
                });
            }
        }
    }

    /// Release every particle. Safe to call more than once.
    pub fn dispose(&mut self, ledger: &mut ResourceLedger) {
        for p in self.particles.drain(..) {
            ledger.release(p.handle);
        }
        self.disposed = true;
    }
}
