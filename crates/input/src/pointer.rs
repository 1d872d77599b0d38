use orrery_math::Vec2;

/// Bound on the accumulated vertical pointer axis. Pitch is derived linearly
/// from it, so staying inside `(-1, 1)` keeps the view direction away from
/// straight up/down where the camera basis degenerates.
pub const POINTER_Y_LIMIT: f32 = 0.99;

/// Accumulates relative pointer motion into a normalized position.
///
/// Each movement is divided by the viewport size, so sweeping the pointer
/// across the whole window changes an axis by `1.0`. The horizontal axis is
/// unbounded (yaw wraps); the vertical axis is clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerAccumulator {
    position: Vec2,
}

impl PointerAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Set the position directly; the vertical axis is still clamped.
    pub fn set(&mut self, position: Vec2) {
        self.position = Vec2::new(
            position.x,
            position.y.clamp(-POINTER_Y_LIMIT, POINTER_Y_LIMIT),
        );
    }

    /// Add raw movement (in pixels) for a viewport of the given size. A
    /// degenerate viewport leaves the position unchanged.
    pub fn accumulate(&mut self, movement: Vec2, viewport: Vec2) {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return;
        }
        self.set(Vec2::new(
            self.position.x + movement.x / viewport.x,
            self.position.y + movement.y / viewport.y,
        ));
    }

    pub fn reset(&mut self) {
        self.position = Vec2::ZERO;
    }
}
