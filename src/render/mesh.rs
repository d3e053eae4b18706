use globe_core::project;
use std::f32::consts::{PI, TAU};

/// Unit UV sphere; positions double as normals.
pub struct SphereMesh {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u16>,
}

pub fn uv_sphere(segments: u32, rings: u32) -> SphereMesh {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let mut positions = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
    for r in 0..=rings {
        let phi = PI * r as f32 / rings as f32;
        for s in 0..=segments {
            let theta = TAU * s as f32 / segments as f32;
            positions.push([phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin()]);
        }
    }

    let stride = segments + 1;
    let mut indices = Vec::with_capacity((segments * rings * 6) as usize);
    for r in 0..rings {
        for s in 0..segments {
            let a = (r * stride + s) as u16;
            let b = a + stride as u16;
            // counter-clockwise seen from outside
            if r != 0 {
                indices.extend_from_slice(&[a, a + 1, b]);
            }
            if r != rings - 1 {
                indices.extend_from_slice(&[a + 1, b + 1, b]);
            }
        }
    }
    SphereMesh { positions, indices }
}

/// Latitude and longitude lines as a line list on a sphere of `radius`,
/// projected the same way station markers are.
pub fn graticule(radius: f32, step_degrees: u32, samples: u32) -> Vec<[f32; 3]> {
    let step = step_degrees.clamp(1, 90) as i32;
    let samples = samples.max(4);
    let mut lines = Vec::new();
    let mut push_polyline = |points: &mut dyn Iterator<Item = [f32; 3]>| {
        let mut prev: Option<[f32; 3]> = None;
        for p in points {
            if let Some(q) = prev {
                lines.push(q);
                lines.push(p);
            }
            prev = Some(p);
        }
    };

    let mut lat = -90 + step;
    while lat < 90 {
        let l = lat as f32;
        push_polyline(&mut (0..=samples).map(|i| {
            let lon = -180.0 + 360.0 * i as f32 / samples as f32;
            project(l, lon, radius).to_array()
        }));
        lat += step;
    }

    let mut lon = -180;
    while lon < 180 {
        let m = lon as f32;
        push_polyline(&mut (0..=samples / 2).map(|i| {
            let lat = -90.0 + 180.0 * i as f32 / (samples / 2) as f32;
            project(lat, m, radius).to_array()
        }));
        lon += step;
    }
    lines
}
