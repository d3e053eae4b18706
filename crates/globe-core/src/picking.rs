//! Pointer/touch picking of station markers.

use crate::camera::{Camera, Ray};
use crate::catalog::StationId;
use crate::markers::{Marker, MarkerRegistry};
use glam::{Mat4, Vec2, Vec3};
use smallvec::SmallVec;

pub type TouchPoints = SmallVec<[Vec2; 2]>;

/// Raw input as delivered by the page, in client (CSS pixel) coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerEvent {
    Click {
        client: Vec2,
    },
    TouchEnd {
        /// Touches still on the surface.
        touches: TouchPoints,
        /// Touches that just lifted.
        changed: TouchPoints,
    },
}

impl PointerEvent {
    /// The coordinate to pick at; for touch input the first point wins.
    pub fn client_position(&self) -> Option<Vec2> {
        match self {
            PointerEvent::Click { client } => Some(*client),
            PointerEvent::TouchEnd { touches, changed } => {
                touches.first().or_else(|| changed.first()).copied()
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Map a client coordinate onto [-1, 1] x [-1, 1] with +y up.
    pub fn normalize(&self, client: Vec2) -> Option<Vec2> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(Vec2::new(
            (client.x / self.width) * 2.0 - 1.0,
            -(client.y / self.height) * 2.0 + 1.0,
        ))
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    // origin inside the sphere: the near root is behind, take the far one
    let near = -b - root;
    let t = if near >= 0.0 { near } else { -b + root };
    (t >= 0.0).then_some(t)
}

/// Resolve the station under the pointer, if any.
///
/// `globe_model` places the globe-local marker positions in the world and
/// `marker_size` is the unscaled marker radius. Hidden markers are skipped.
/// The nearest hit along the ray wins; exact ties go to the earlier marker.
pub fn pick(
    event: &PointerEvent,
    camera: &Camera,
    viewport: Viewport,
    globe_model: Mat4,
    markers: &MarkerRegistry,
    marker_size: f32,
) -> Option<StationId> {
    if markers.is_empty() {
        return None;
    }
    let ndc = viewport.normalize(event.client_position()?)?;
    let world = camera.ray_through(ndc);
    let to_local = globe_model.inverse();
    let local = Ray {
        origin: to_local.transform_point3(world.origin),
        dir: to_local.transform_vector3(world.dir).normalize_or_zero(),
    };
    if local.dir == Vec3::ZERO {
        return None;
    }

    let mut best: Option<(&Marker, f32)> = None;
    for marker in markers.iter() {
        if !marker.visible {
            continue;
        }
        let radius = marker_size * marker.visual.scale.max(f32::EPSILON);
        if let Some(t) = ray_sphere(local.origin, local.dir, marker.position(), radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((marker, t)),
            }
        }
    }
    best.map(|(marker, _)| marker.station_id().clone())
}
