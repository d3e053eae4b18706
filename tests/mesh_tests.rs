// Host-side tests for the static globe geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod mesh {
    include!("../src/render/mesh.rs");
}

use glam::Vec3;
use mesh::*;

#[test]
fn sphere_vertices_lie_on_unit_sphere() {
    let m = uv_sphere(16, 8);
    assert_eq!(m.positions.len(), 17 * 9);
    for p in &m.positions {
        assert!((Vec3::from_array(*p).length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn sphere_triangles_face_outward() {
    let m = uv_sphere(16, 8);
    assert_eq!(m.indices.len() % 3, 0);
    // pole rows contribute one triangle per segment, the rest two
    assert_eq!(m.indices.len(), (16 * 8 * 2 - 2 * 16) * 3);
    for tri in m.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from_array(m.positions[i as usize]));
        let normal = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(normal.dot(centroid) > 0.0);
    }
}

#[test]
fn sphere_indices_are_in_range() {
    let m = uv_sphere(32, 24);
    let n = m.positions.len() as u16;
    assert!(m.indices.iter().all(|&i| i < n));
}

#[test]
fn degenerate_sphere_requests_are_clamped() {
    let m = uv_sphere(0, 0);
    assert_eq!(m.positions.len(), 4 * 3);
    assert!(!m.indices.is_empty());
}

#[test]
fn graticule_is_a_line_list_on_the_requested_radius() {
    let radius = 1.02;
    let lines = graticule(radius, 30, 24);
    assert!(!lines.is_empty());
    assert_eq!(lines.len() % 2, 0);
    for p in &lines {
        assert!((Vec3::from_array(*p).length() - radius).abs() < 1e-4);
    }
}

#[test]
fn graticule_line_count_follows_step() {
    let samples = 24;
    let lines = graticule(1.0, 30, samples);
    // 5 parallels (-60..=60) and 12 meridians
    let parallels = 5 * samples as usize;
    let meridians = 12 * (samples / 2) as usize;
    assert_eq!(lines.len(), (parallels + meridians) * 2);
}
