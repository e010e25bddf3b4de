//! Input adapter: folds one frame of raw platform events into [`MouseState`]

use glam::Vec2;
use particle_physics::{MouseState, SimulationConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Platform event, already stripped of backend specifics
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawEvent {
    /// Window close / process quit request
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    MouseDown(MouseButton),
    MouseUp(MouseButton),
    /// Absolute cursor position plus the relative movement since the last motion event
    MouseMotion { x: f32, y: f32, dx: f32, dy: f32 },
}

/// Result of draining one frame of events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputOutcome {
    pub stop_requested: bool,
}

#[derive(Debug, Clone)]
pub struct InputAdapter {
    mouse: MouseState,
    max_speed: f32,
    motion_epsilon: f32,
}

impl InputAdapter {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            mouse: MouseState::default(),
            max_speed: config.mouse_max_speed,
            motion_epsilon: config.motion_epsilon,
        }
    }

    pub fn mouse(&self) -> &MouseState {
        &self.mouse
    }

    /// Drain this frame's events. `dt` is the frame's clamped timestep and is
    /// used to turn relative motion into a velocity.
    ///
    /// Mouse velocity is zeroed first, so a frame without motion events
    /// reports a still cursor. Position and button state carry over.
    pub fn apply<I>(&mut self, events: I, dt: f32) -> InputOutcome
    where
        I: IntoIterator<Item = RawEvent>,
    {
        let mut outcome = InputOutcome::default();
        self.mouse.velocity = Vec2::ZERO;

        for event in events {
            match event {
                RawEvent::Quit | RawEvent::KeyUp(Key::Escape) => outcome.stop_requested = true,
                RawEvent::KeyDown(_) | RawEvent::KeyUp(_) => {}
                RawEvent::MouseDown(MouseButton::Left) => self.mouse.pressed = true,
                RawEvent::MouseUp(MouseButton::Left) => self.mouse.pressed = false,
                RawEvent::MouseDown(_) | RawEvent::MouseUp(_) => {}
                RawEvent::MouseMotion { x, y, dx, dy } => {
                    self.mouse.position = Vec2::new(x, y);
                    let velocity = if dt > self.motion_epsilon {
                        Vec2::new(dx, dy) / dt
                    } else {
                        Vec2::ZERO
                    };
                    self.mouse.velocity = MouseState::cap_speed(velocity, self.max_speed);
                }
            }
        }

        outcome
    }
}
