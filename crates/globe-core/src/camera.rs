//! Perspective camera and the orbit controls that steer it around the globe.

use crate::config::GlobeConfig;
use crate::constants::{ORBIT_DAMPING, ORBIT_POLAR_EPSILON};
use glam::{Mat4, Vec2, Vec3, Vec4};
use std::f32::consts::{PI, TAU};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn from_config(config: &GlobeConfig, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, config.camera_distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: config.fov_degrees.to_radians(),
            znear: config.znear,
            zfar: config.zfar,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn distance_to_target(&self) -> f32 {
        self.eye.distance(self.target)
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// World-space ray through a point in normalized device coordinates
    /// (x right, y up, both in [-1, 1]).
    pub fn ray_through(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (p1 - self.eye).normalize_or_zero(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Damped orbit around a fixed target, driven by pointer drags and zoom.
///
/// Rotation input accumulates into a pending delta that bleeds into the
/// camera over several frames; zoom applies on the next update.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub min_distance: f32,
    pub max_distance: f32,
    pub damping: f32,
    pending_theta: f32,
    pending_phi: f32,
    pending_scale: f32,
    home_eye: Vec3,
}

impl OrbitControls {
    pub fn new(config: &GlobeConfig, camera: &Camera) -> Self {
        Self {
            target: Vec3::ZERO,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            damping: ORBIT_DAMPING,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_scale: 1.0,
            home_eye: camera.eye,
        }
    }

    /// Queue a rotation from a pointer drag of `delta` pixels on a viewport
    /// `viewport_height` pixels tall; a full-height drag is one turn.
    pub fn rotate(&mut self, delta: Vec2, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.pending_theta -= TAU * delta.x / h;
        self.pending_phi -= TAU * delta.y / h;
    }

    /// Queue a dolly; factors below 1 move closer.
    pub fn dolly(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.pending_scale *= factor;
        }
    }

    pub fn reset(&mut self, camera: &mut Camera) {
        self.pending_theta = 0.0;
        self.pending_phi = 0.0;
        self.pending_scale = 1.0;
        camera.eye = self.home_eye;
        camera.look_at(self.target);
    }

    pub fn update(&mut self, camera: &mut Camera) {
        let offset = camera.eye - self.target;
        let mut radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        theta += self.pending_theta * self.damping;
        phi += self.pending_phi * self.damping;
        phi = phi.clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        radius = (radius * self.pending_scale).clamp(self.min_distance, self.max_distance);

        let sin_phi = phi.sin();
        camera.eye = self.target
            + Vec3::new(
                radius * sin_phi * theta.sin(),
                radius * phi.cos(),
                radius * sin_phi * theta.cos(),
            );
        camera.look_at(self.target);

        self.pending_theta *= 1.0 - self.damping;
        self.pending_phi *= 1.0 - self.damping;
        self.pending_scale = 1.0;
    }
}
