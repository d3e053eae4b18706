//! Viewport-dependent engine settings.
//!
//! Everything that differs between a phone and a desktop browser lives here;
//! fixed tuning values stay in [`crate::constants`].

use crate::constants::EARTH_RADIUS;

/// Widest viewport (CSS pixels) still treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

#[derive(Clone, Debug, PartialEq)]
pub struct GlobeConfig {
    pub earth_radius: f32,
    /// Radius of one station marker before any scale factor is applied.
    pub marker_size: f32,
    pub fov_degrees: f32,
    /// Initial camera distance from the globe center along +Z.
    pub camera_distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub znear: f32,
    pub zfar: f32,
    pub star_count: usize,
}

impl GlobeConfig {
    pub fn desktop() -> Self {
        Self {
            earth_radius: EARTH_RADIUS,
            marker_size: 0.06,
            fov_degrees: 60.0,
            camera_distance: 15.0,
            min_distance: 8.0,
            max_distance: 30.0,
            znear: 0.1,
            zfar: 1000.0,
            star_count: 800,
        }
    }

    pub fn mobile() -> Self {
        Self {
            marker_size: 0.08,
            fov_degrees: 70.0,
            camera_distance: 12.0,
            min_distance: 6.0,
            star_count: 400,
            ..Self::desktop()
        }
    }

    pub fn for_viewport_width(css_width: f32) -> Self {
        if css_width <= MOBILE_BREAKPOINT_PX {
            Self::mobile()
        } else {
            Self::desktop()
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.marker_size > Self::desktop().marker_size
    }
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self::desktop()
    }
}
