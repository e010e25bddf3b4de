//! Immutable simulation configuration
//!
//! Built once at startup and passed by reference to every component.

use crate::constants::*;
use crate::particle::Rgb;

/// How particle colors are assigned when the store is seeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Every particle gets the same color
    Solid(Rgb),
    /// Each channel drawn uniformly per particle
    Random,
    /// Each particle picks one of the Catppuccin Mocha accent colors
    Palette,
}

impl Default for ColorMode {
    fn default() -> Self {
        ColorMode::Solid(Rgb::SPRING_GREEN)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub particle_count: usize,

    // Force model
    pub repulsion_strength: f32,
    pub min_distance: f32,
    pub mouse_radius: f32,
    pub mouse_drag_strength: f32,
    pub mouse_max_speed: f32,
    pub motion_epsilon: f32,

    // Integration
    pub damping: f32,
    pub max_dt: f32,

    // Seeding
    pub initial_velocity: (f32, f32),
    pub color_mode: ColorMode,

    // Presentation and pacing
    pub background: Rgb,
    pub target_fps: u32,
    pub limit_fps: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            title: "SDL Particle Simulation".to_owned(),
            width: WIDTH,
            height: HEIGHT,
            particle_count: PARTICLE_COUNT,
            repulsion_strength: REPULSION_STRENGTH,
            min_distance: MIN_DISTANCE,
            mouse_radius: MOUSE_IMPACT_RADIUS,
            mouse_drag_strength: MOUSE_DRAG_STRENGTH,
            mouse_max_speed: MOUSE_MAX_SPEED,
            motion_epsilon: MOTION_EPSILON,
            damping: DAMPING,
            max_dt: MAX_DT,
            initial_velocity: (MIN_INITIAL_VELOCITY, MAX_INITIAL_VELOCITY),
            color_mode: ColorMode::default(),
            background: Rgb::BLACK,
            target_fps: TARGET_FPS,
            limit_fps: true,
        }
    }
}

impl SimulationConfig {
    /// Largest valid x coordinate
    pub fn max_x(&self) -> f32 {
        self.width.saturating_sub(1) as f32
    }

    /// Largest valid y coordinate
    pub fn max_y(&self) -> f32 {
        self.height.saturating_sub(1) as f32
    }

    /// Target frame interval in whole milliseconds (240 Hz -> 4 ms)
    pub fn frame_interval_ms(&self) -> u64 {
        1000 / u64::from(self.target_fps.max(1))
    }
}

/// Catppuccin Mocha accent colors used by [`ColorMode::Palette`]
pub fn palette_colors() -> [Rgb; 14] {
    let c = &catppuccin::PALETTE.mocha.colors;
    [
        &c.rosewater,
        &c.flamingo,
        &c.pink,
        &c.mauve,
        &c.red,
        &c.maroon,
        &c.peach,
        &c.yellow,
        &c.green,
        &c.teal,
        &c.sky,
        &c.sapphire,
        &c.blue,
        &c.lavender,
    ]
    .map(|color| Rgb::new(color.rgb.r, color.rgb.g, color.rgb.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_interval_uses_integer_division() {
        assert_eq!(SimulationConfig::default().frame_interval_ms(), 4);
    }

    #[test]
    fn bounds_are_inclusive_of_last_pixel() {
        let config = SimulationConfig::default();
        assert_eq!(config.max_x(), 899.0);
        assert_eq!(config.max_y(), 599.0);
    }

    #[test]
    fn palette_has_distinct_colors() {
        let colors = palette_colors();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
