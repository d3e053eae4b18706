use glam::Vec3;

// Visual/animation tuning constants shared by the engine and the web renderer.

// Globe
pub const EARTH_RADIUS: f32 = 5.0;
pub const EARTH_COLOR: u32 = 0x1a4a6a; // oceans
pub const EARTH_EMISSIVE: u32 = 0x05101a;
pub const EARTH_OPACITY: f32 = 0.95;
pub const GRATICULE_COLOR: u32 = 0x4fc3f7;
pub const GRATICULE_OPACITY: f32 = 0.15;
pub const GRATICULE_RADIUS_FACTOR: f32 = 1.001; // lifts the grid off the surface

// Atmosphere shell
pub const ATMOSPHERE_COLOR: u32 = 0x4fc3f7;
pub const ATMOSPHERE_RADIUS_FACTOR: f32 = 1.08;
pub const ATMOSPHERE_BASE_OPACITY: f32 = 0.1;
pub const ATMOSPHERE_PULSE_AMPLITUDE: f32 = 0.05;
pub const ATMOSPHERE_PULSE_FREQUENCY: f32 = 2.0;

// Logical clock
pub const ANIMATION_TIME_STEP: f64 = 0.016; // animation-time units per rendered frame
pub const AUTO_ROTATE_STEP: f32 = 0.001; // radians of yaw per frame

// Markers
pub const MARKER_BASE_OPACITY: f32 = 0.85;
pub const MARKER_BASE_EMISSIVE_INTENSITY: f32 = 0.5;
pub const HIGHLIGHT_EMISSIVE: u32 = 0xffffff;
pub const HIGHLIGHT_EMISSIVE_INTENSITY: f32 = 2.0;
pub const HIGHLIGHT_SCALE: f32 = 1.5;
pub const HIGHLIGHT_OPACITY: f32 = 1.0;

// Region highlighting
pub const REGION_MEMBER_OPACITY: f32 = 1.0;
pub const REGION_OUTSIDER_OPACITY: f32 = 0.2;

// Halo rings (radii are multiples of the marker size)
pub const HALO_SPAWN_INTERVAL_FRAMES: u32 = 15;
pub const HALO_RING_DURATION: f64 = 1.5; // animation-time units
pub const HALO_INNER_START: f32 = 1.5;
pub const HALO_OUTER_START: f32 = 1.6;
pub const HALO_INNER_GROWTH: f32 = 2.0;
pub const HALO_OUTER_GROWTH: f32 = 2.5;

// Connection trail
pub const TRAIL_SPAWN_INTERVAL_FRAMES: u32 = 3;
pub const TRAIL_PARTICLE_SPEED: f32 = 0.08;
pub const TRAIL_MAX_LENGTH: f32 = 5.0;
pub const TRAIL_PARTICLE_SIZE: f32 = 0.1;
pub const TRAIL_MAX_PARTICLES: usize = 100;
pub const TRAIL_SPAWN_OFFSET: f32 = 1.2; // multiples of the marker size, away from the focal point
pub const TRAIL_EMISSIVE_INTENSITY: f32 = 5.0;

// Dynamic scale
pub const MIN_MARKER_SCALE: f32 = 0.3;
pub const MAX_MARKER_SCALE: f32 = 1.0;
pub const SCALE_NEAR_DISTANCE: f32 = 8.0;
pub const SCALE_FAR_DISTANCE: f32 = 20.0;
pub const PULSE_AMPLITUDE: f32 = 0.15;
pub const PULSE_BASE_FREQUENCY: f32 = 1.5;
pub const PULSE_FREQUENCY_STEP: f32 = 0.1;
pub const PULSE_PHASE_BUCKETS: usize = 10;

// Region marker
pub const REGION_MARKER_ALTITUDE: f32 = 1.1; // times the globe radius
pub const REGION_MARKER_RADIUS: f32 = 0.2;
pub const REGION_MARKER_PULSE_FREQUENCY: f32 = 3.0;
pub const REGION_MARKER_SCALE_AMPLITUDE: f32 = 0.2;
pub const REGION_MARKER_BASE_OPACITY: f32 = 0.6;
pub const REGION_MARKER_OPACITY_AMPLITUDE: f32 = 0.2;

// Camera flights
pub const REGION_FOCUS_ALTITUDE: f32 = 2.5; // times the globe radius
pub const REGION_FLIGHT_MS: f64 = 1000.0;

// Roulette
pub const ROULETTE_SPIN_MS: f64 = 3000.0;
pub const ROULETTE_SPIN_ANGLE: f32 = std::f32::consts::PI * 4.0;
pub const ROULETTE_COUNTDOWN_FROM: u8 = 3;
pub const ROULETTE_COUNTDOWN_STEP_MS: f64 = 1000.0;
pub const ROULETTE_REVEAL_DELAY_MS: f64 = 500.0;
pub const ROULETTE_HISTORY_LEN: usize = 10;

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6;

// Starfield
pub const STARFIELD_EXTENT: f32 = 100.0;

// Lighting
pub const AMBIENT_LIGHT: f32 = 0.47;
pub const SUN_DIRECTION: [f32; 3] = [5.0, 3.0, 5.0];
pub const SUN_INTENSITY: f32 = 0.6;

#[inline]
pub fn hex_rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}
