//! Per-frame cursor snapshot consumed by the force model

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseState {
    /// Last known cursor position in window pixels
    pub position: Vec2,
    /// Cursor velocity for the current frame, already speed-capped
    pub velocity: Vec2,
    /// Left button held
    pub pressed: bool,
}

impl MouseState {
    /// Scale `velocity` down so its length is at most `max_speed`.
    /// Direction is preserved.
    pub fn cap_speed(velocity: Vec2, max_speed: f32) -> Vec2 {
        let speed = velocity.length();
        if speed > max_speed {
            velocity / speed * max_speed
        } else {
            velocity
        }
    }
}
