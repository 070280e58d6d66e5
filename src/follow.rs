use crate::core::{Point, Rect, Vec2};

/// Exponential pursuit of a moving target, one step per animation frame.
///
/// Each step closes a fixed fraction of the remaining distance, so the
/// trail length depends only on `smoothing`: 1.0 snaps, small values
/// drift behind. State is explicit; callers own the frame loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Follower {
    pub position: Point,
    pub smoothing: f64,
}

impl Follower {
    pub fn new(position: Point, smoothing: f64) -> Self {
        Self {
            position,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    /// Moves toward `target` and returns the new position.
    pub fn step(&mut self, target: Point) -> Point {
        self.position += (target - self.position) * self.smoothing;
        self.position
    }

    /// Jumps straight to `target` without easing. For teleports, e.g.
    /// when the pointer re-enters after leaving the window.
    pub fn snap_to(&mut self, target: Point) {
        self.position = target;
    }
}

/// Pull of a magnetic element on the pointer's behalf: the offset the
/// element should translate by when the pointer is at `pointer`.
///
/// Zero at or beyond `max_distance` from `center`, growing linearly as
/// the pointer closes in, scaled by `strength`. Non-positive
/// `max_distance` disables the pull.
pub fn magnetic_offset(pointer: Point, center: Point, max_distance: f64, strength: f64) -> Vec2 {
    if !(max_distance > 0.0) {
        return Vec2::ZERO;
    }
    let delta = pointer - center;
    let distance = delta.hypot();
    if distance >= max_distance {
        return Vec2::ZERO;
    }
    delta * strength * (1.0 - distance / max_distance)
}

/// Card-tilt mapping: `(rotate_x_deg, rotate_y_deg)` for a pointer over
/// `rect`. Vertical distance from the center tips the card away from the
/// pointer, horizontal distance turns it toward the pointer; `divisor`
/// sets the sensitivity (larger is flatter). A non-positive divisor
/// yields no tilt.
pub fn tilt_deg(pointer: Point, rect: Rect, divisor: f64) -> (f64, f64) {
    if !(divisor > 0.0) {
        return (0.0, 0.0);
    }
    let center = rect.center();
    let rotate_x = -(pointer.y - center.y) / divisor;
    let rotate_y = (pointer.x - center.x) / divisor;
    (rotate_x, rotate_y)
}
