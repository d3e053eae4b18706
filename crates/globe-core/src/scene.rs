//! GPU-ready snapshot of one frame.
//!
//! The renderer uploads these records as-is and never reads engine internals.
//! Sphere and ring positions are globe-local; `FrameUniforms::globe_model`
//! places them in the world.

use crate::constants::*;
use crate::globe::GlobeEngine;
use glam::Vec3;
use rand::Rng;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereInstance {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    pub opacity: f32,
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
}

/// A flat annulus lying in the plane perpendicular to `normal`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RingInstance {
    pub center: [f32; 3],
    pub inner_radius: f32,
    pub normal: [f32; 3],
    pub outer_radius: f32,
    pub color: [f32; 3],
    pub opacity: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub globe_model: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    /// xyz direction toward the sun, w intensity.
    pub sun: [f32; 4],
    /// x ambient, y animation time, z atmosphere opacity.
    pub params: [f32; 4],
}

/// Reused between frames so steady-state ticks do not allocate.
#[derive(Clone, Debug, Default)]
pub struct SceneSnapshot {
    pub uniforms: FrameUniforms,
    /// Globe body first, then markers, region marker and trail particles.
    pub spheres: Vec<SphereInstance>,
    pub atmosphere: SphereInstance,
    pub rings: Vec<RingInstance>,
}

impl SceneSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(&mut self, engine: &GlobeEngine) {
        let camera = engine.camera();
        let config = engine.config();
        let radius = config.earth_radius;
        let anim_time = engine.anim_time();

        self.uniforms = FrameUniforms {
            view_proj: camera.view_projection().to_cols_array_2d(),
            globe_model: engine.globe_model().to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            sun: Vec3::from(SUN_DIRECTION)
                .normalize()
                .extend(SUN_INTENSITY)
                .to_array(),
            params: [
                AMBIENT_LIGHT,
                anim_time as f32,
                engine.atmosphere_opacity(),
                0.0,
            ],
        };

        self.spheres.clear();
        self.spheres.push(SphereInstance {
            center: [0.0; 3],
            radius,
            color: hex_rgb(EARTH_COLOR).to_array(),
            opacity: EARTH_OPACITY,
            emissive: hex_rgb(EARTH_EMISSIVE).to_array(),
            emissive_intensity: 1.0,
        });

        for marker in engine.markers().iter().filter(|m| m.visible) {
            self.spheres.push(SphereInstance {
                center: marker.position().to_array(),
                radius: config.marker_size * marker.visual.scale,
                color: marker.base_color().to_array(),
                opacity: marker.visual.opacity,
                emissive: marker.visual.emissive.to_array(),
                emissive_intensity: marker.visual.emissive_intensity,
            });
        }

        if let Some(region) = engine.region_marker() {
            let color = region.color().to_array();
            self.spheres.push(SphereInstance {
                center: region.position().to_array(),
                radius: region.radius(),
                color,
                opacity: region.opacity,
                emissive: color,
                emissive_intensity: 1.0,
            });
        }

        self.rings.clear();
        if let Some(effects) = engine.selection().effects() {
            let trail = &effects.trail;
            let color = trail.color().to_array();
            for p in trail.particles() {
                self.spheres.push(SphereInstance {
                    center: p.position.to_array(),
                    radius: TRAIL_PARTICLE_SIZE * p.scale,
                    color,
                    opacity: p.opacity,
                    emissive: color,
                    emissive_intensity: TRAIL_EMISSIVE_INTENSITY,
                });
            }

            let halo = &effects.halo;
            let (center, normal) = (halo.anchor().to_array(), halo.normal().to_array());
            let color = halo.color().to_array();
            for ring in halo.rings() {
                self.rings.push(RingInstance {
                    center,
                    inner_radius: ring.inner_radius,
                    normal,
                    outer_radius: ring.outer_radius,
                    color,
                    opacity: ring.opacity,
                });
            }
        }

        let glow = hex_rgb(ATMOSPHERE_COLOR).to_array();
        self.atmosphere = SphereInstance {
            center: [0.0; 3],
            radius: radius * ATMOSPHERE_RADIUS_FACTOR,
            color: glow,
            opacity: engine.atmosphere_opacity(),
            emissive: glow,
            emissive_intensity: 1.0,
        };
    }
}

/// `count` points scattered uniformly through a cube centered on the origin.
pub fn starfield(count: usize, rng: &mut impl Rng) -> Vec<Vec3> {
    let half = STARFIELD_EXTENT / 2.0;
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            )
        })
        .collect()
}
