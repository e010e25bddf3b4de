//! winit -> [`RawEvent`] translation

use particle_simulation::{Key, MouseButton, RawEvent};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Tracks the last cursor position so motion events carry a relative delta
#[derive(Debug, Default)]
pub struct EventTranslator {
    last_cursor: Option<(f32, f32)>,
}

impl EventTranslator {
    pub fn translate(&mut self, event: &WindowEvent, scale_factor: f64) -> Option<RawEvent> {
        match event {
            WindowEvent::CloseRequested => Some(RawEvent::Quit),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state,
                        ..
                    },
                ..
            } => {
                let key = key(*physical_key);
                Some(match state {
                    ElementState::Pressed => RawEvent::KeyDown(key),
                    ElementState::Released => RawEvent::KeyUp(key),
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = mouse_button(*button);
                Some(match state {
                    ElementState::Pressed => RawEvent::MouseDown(button),
                    ElementState::Released => RawEvent::MouseUp(button),
                })
            }
            WindowEvent::CursorMoved { position, .. } => Some(self.motion(*position, scale_factor)),
            WindowEvent::CursorLeft { .. } => {
                self.cursor_left();
                None
            }
            _ => None,
        }
    }

    /// Cursor positions arrive in physical pixels; the simulation works in
    /// logical window pixels.
    fn motion(&mut self, position: PhysicalPosition<f64>, scale_factor: f64) -> RawEvent {
        let logical = position.to_logical::<f32>(scale_factor);
        let (x, y) = (logical.x, logical.y);
        let (dx, dy) = match self.last_cursor {
            Some((last_x, last_y)) => (x - last_x, y - last_y),
            None => (0.0, 0.0),
        };
        self.last_cursor = Some((x, y));

        RawEvent::MouseMotion { x, y, dx, dy }
    }

    /// The next motion after re-entry starts a fresh delta
    fn cursor_left(&mut self) {
        self.last_cursor = None;
    }
}

fn key(physical_key: PhysicalKey) -> Key {
    match physical_key {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        _ => Key::Other,
    }
}

fn mouse_button(button: winit::event::MouseButton) -> MouseButton {
    use winit::event::MouseButton as Winit;

    match button {
        Winit::Left => MouseButton::Left,
        Winit::Right => MouseButton::Right,
        Winit::Middle => MouseButton::Middle,
        Winit::Back => MouseButton::Other(3),
        Winit::Forward => MouseButton::Other(4),
        Winit::Other(id) => MouseButton::Other(id),
    }
}
