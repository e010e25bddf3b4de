//! Collaborator interface to the windowing / rendering backend
//!
//! The simulation core only talks to the outside world through these traits.

use particle_physics::Rgb;

use crate::input::RawEvent;

/// Point-drawing surface
pub trait Canvas {
    fn clear(&mut self, color: Rgb);
    fn draw_point(&mut self, x: f32, y: f32, color: Rgb);
    fn present(&mut self);
}

/// Millisecond wall clock
pub trait Clock {
    fn now_ms(&self) -> u64;
    fn sleep_ms(&self, ms: u64);
}

pub trait EventSource {
    /// Every event received since the previous call
    fn poll_events(&mut self) -> Vec<RawEvent>;
}

/// Everything [`crate::FrameDriver::run`] needs from a backend
pub trait Platform: Canvas + Clock + EventSource {}

impl<T: Canvas + Clock + EventSource> Platform for T {}

/// [`Clock`] backed by [`std::time::Instant`], counting from creation
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn sleep_ms(&self, ms: u64) {
        std::thread::sleep(std::time::Duration::from_millis(ms));
    }
}
