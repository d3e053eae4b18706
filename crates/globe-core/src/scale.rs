use crate::constants::*;
use crate::markers::MarkerRegistry;

/// Map camera distance onto the marker scale range, pinned at both ends.
pub fn distance_factor(distance: f32) -> f32 {
    let t = ((distance - SCALE_NEAR_DISTANCE) / (SCALE_FAR_DISTANCE - SCALE_NEAR_DISTANCE))
        .clamp(0.0, 1.0);
    MIN_MARKER_SCALE + (MAX_MARKER_SCALE - MIN_MARKER_SCALE) * t
}

/// Per-marker breathing term; markers fall into ten phase buckets by index.
pub fn pulse(anim_time: f64, index: usize) -> f32 {
    let frequency =
        PULSE_BASE_FREQUENCY + PULSE_FREQUENCY_STEP * (index % PULSE_PHASE_BUCKETS) as f32;
    1.0 + PULSE_AMPLITUDE * (anim_time as f32 * frequency).sin()
}

/// Rescale every marker for the current camera distance. Highlighted markers
/// hold a steady enlarged size instead of pulsing.
pub fn apply(markers: &mut MarkerRegistry, camera_distance: f32, anim_time: f64) -> f32 {
    let factor = distance_factor(camera_distance);
    for (i, marker) in markers.iter_mut().enumerate() {
        marker.visual.scale = if marker.is_highlighted() {
            factor * HIGHLIGHT_SCALE
        } else {
            factor * pulse(anim_time, i)
        };
    }
    factor
}
