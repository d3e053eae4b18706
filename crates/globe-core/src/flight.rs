//! Time-bounded eased interpolation used for camera framing and globe spins.

use crate::easing::Easing;
use glam::Vec3;

pub trait Lerp: Copy {
    fn lerp_to(self, to: Self, t: f32) -> Self;
}

impl Lerp for Vec3 {
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

impl Lerp for f32 {
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flight<T: Lerp> {
    pub from: T,
    pub to: T,
    pub started_at_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl<T: Lerp> Flight<T> {
    pub fn new(from: T, to: T, started_at_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            started_at_ms,
            duration_ms,
            easing,
        }
    }

    /// Linear progress in [0, 1]. A zero-length flight is already done.
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    pub fn sample(&self, now_ms: f64) -> T {
        let eased = self.easing.apply(self.progress(now_ms));
        self.from.lerp_to(self.to, eased)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

/// At most one flight of each kind; starting one replaces its predecessor.
#[derive(Clone, Debug, Default)]
pub struct FlightController {
    region: Option<Flight<Vec3>>,
    spin: Option<Flight<f32>>,
}

impl FlightController {
    pub fn start_region(&mut self, flight: Flight<Vec3>) {
        if self.region.is_some() {
            log::debug!("[flight] region flight superseded");
        }
        self.region = Some(flight);
    }

    pub fn start_spin(&mut self, flight: Flight<f32>) {
        if self.spin.is_some() {
            log::debug!("[flight] spin superseded");
        }
        self.spin = Some(flight);
    }

    pub fn region_active(&self) -> bool {
        self.region.is_some()
    }

    pub fn spin_active(&self) -> bool {
        self.spin.is_some()
    }

    /// Camera eye for this tick, if a region flight is running. The flight
    /// is dropped once it has delivered its final position.
    pub fn step_region(&mut self, now_ms: f64) -> Option<Vec3> {
        let flight = self.region?;
        if flight.is_finished(now_ms) {
            self.region = None;
        }
        Some(flight.sample(now_ms))
    }

    /// Globe yaw for this tick, if a spin is running.
    pub fn step_spin(&mut self, now_ms: f64) -> Option<f32> {
        let flight = self.spin?;
        if flight.is_finished(now_ms) {
            self.spin = None;
        }
        Some(flight.sample(now_ms))
    }

    pub fn cancel_region(&mut self) {
        self.region = None;
    }

    pub fn cancel_all(&mut self) {
        self.region = None;
        self.spin = None;
    }
}
