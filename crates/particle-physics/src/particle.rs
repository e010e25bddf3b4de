//! Particle state

use glam::Vec2;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const SPRING_GREEN: Rgb = Rgb::new(0, 255, 100);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized `[r, g, b, 1.0]` for GPU upload
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// A single simulated point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in window pixels, origin top-left
    pub position: Vec2,
    /// Velocity in pixels per second
    pub velocity: Vec2,
    pub color: Rgb,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, color: Rgb) -> Self {
        Self {
            position,
            velocity,
            color,
        }
    }

    /// Particle at rest with the default color
    pub fn at_rest(position: Vec2) -> Self {
        Self::new(position, Vec2::ZERO, Rgb::SPRING_GREEN)
    }
}
