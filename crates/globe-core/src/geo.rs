use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoCoord {
    pub lat: f32,
    pub lon: f32,
}

impl GeoCoord {
    pub const fn new(lat: f32, lon: f32) -> Self {
        Self { lat, lon }
    }
}

/// Project a latitude/longitude pair onto a sphere of `radius` centered at the origin.
///
/// Polar angle is measured from +Y (north pole); the prime meridian lands on +X
/// and the antimeridian on -X. Out-of-range inputs are not rejected, they
/// still land on the sphere.
#[inline]
pub fn project(lat: f32, lon: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (lon + 180.0).to_radians();
    Vec3::new(
        -(radius * phi.sin() * theta.cos()),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

#[inline]
pub fn project_coord(coord: GeoCoord, radius: f32) -> Vec3 {
    project(coord.lat, coord.lon, radius)
}
