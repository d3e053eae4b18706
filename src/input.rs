use glam::Vec2;

/// One pointer press, from down to up.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub start: Vec2,
    pub last: Vec2,
    /// Travel exceeded the drag threshold at some point during the press.
    pub moved: bool,
}

/// Tells drags from taps and turns pointer motion into orbit and zoom input.
///
/// The tracker keeps the outcome of the last press until the next one starts,
/// so `click`/`touchend` handlers that fire after `pointerup` can still ask
/// whether the press was a tap.
#[derive(Clone, Debug)]
pub struct GestureTracker {
    drag: DragState,
    pinch_distance: Option<f32>,
    pinched: bool,
    threshold: f32,
}

impl GestureTracker {
    pub fn new(drag_threshold_px: f32) -> Self {
        Self {
            drag: DragState::default(),
            pinch_distance: None,
            pinched: false,
            threshold: drag_threshold_px.max(0.0),
        }
    }

    pub fn press(&mut self, at: Vec2) {
        self.drag = DragState {
            active: true,
            start: at,
            last: at,
            moved: false,
        };
        if self.pinch_distance.is_none() {
            self.pinched = false;
        }
    }

    /// Returns the pixel delta to orbit by, once the press counts as a drag.
    pub fn drag_to(&mut self, at: Vec2) -> Option<Vec2> {
        if !self.drag.active || self.pinch_distance.is_some() {
            return None;
        }
        if !self.drag.moved && at.distance(self.drag.start) > self.threshold {
            self.drag.moved = true;
        }
        let delta = at - self.drag.last;
        self.drag.last = at;
        (self.drag.moved && delta != Vec2::ZERO).then_some(delta)
    }

    pub fn release(&mut self) {
        self.drag.active = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.active && self.drag.moved
    }

    /// Whether the last completed press should pick.
    pub fn was_tap(&self) -> bool {
        !self.drag.active && !self.drag.moved && !self.pinched
    }

    pub fn pinch_start(&mut self, a: Vec2, b: Vec2) {
        self.pinch_distance = Some(a.distance(b));
        self.pinched = true;
    }

    /// Dolly factor for the new finger spread; spreading zooms in (factor < 1).
    pub fn pinch_to(&mut self, a: Vec2, b: Vec2) -> Option<f32> {
        let previous = self.pinch_distance?;
        let current = a.distance(b);
        if current <= f32::EPSILON || previous <= f32::EPSILON {
            return None;
        }
        self.pinch_distance = Some(current);
        Some(previous / current)
    }

    pub fn pinch_end(&mut self) {
        self.pinch_distance = None;
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch_distance.is_some()
    }
}

/// Dolly factor for one wheel event; scrolling down (positive delta) backs away.
#[inline]
pub fn wheel_zoom_factor(delta_y: f32, per_px: f32, min_factor: f32, max_factor: f32) -> f32 {
    if !delta_y.is_finite() {
        return 1.0;
    }
    (1.0 + delta_y * per_px).clamp(min_factor, max_factor)
}

/// Client coordinates relative to the canvas' top-left corner.
#[inline]
pub fn client_to_canvas(client: Vec2, rect_left: f32, rect_top: f32) -> Vec2 {
    client - Vec2::new(rect_left, rect_top)
}
