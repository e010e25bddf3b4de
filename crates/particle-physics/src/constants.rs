//! Default constants for the particle simulation
//!
//! Units are pixels and seconds. These values seed [`crate::SimulationConfig::default`].

/// Window width in pixels
pub const WIDTH: u32 = 900;

/// Window height in pixels
pub const HEIGHT: u32 = 600;

/// Number of particles in the pool
pub const PARTICLE_COUNT: usize = 5000;

/// Exponential velocity decay per second
pub const DAMPING: f32 = 0.5;

/// Repulsion strength K in F = -K / r²
pub const REPULSION_STRENGTH: f32 = 1000.0;

/// Distance floor for the repulsion term.
/// Closer pairs divide by this instead of their real distance, so the
/// repulsion peaks at `REPULSION_STRENGTH` at this distance and falls off
/// linearly below it.
pub const MIN_DISTANCE: f32 = 1.0;

/// Mouse speed cap in pixels per second
pub const MOUSE_MAX_SPEED: f32 = 1000.0;

/// Radius around the cursor inside which dragging affects particles
pub const MOUSE_IMPACT_RADIUS: f32 = 50.0;

/// How quickly particles near the cursor match the cursor velocity
pub const MOUSE_DRAG_STRENGTH: f32 = 10.0;

/// Below this frame time (seconds) mouse velocity is not derived from motion
pub const MOTION_EPSILON: f32 = 1.0e-4;

/// Frame rate the driver paces to
pub const TARGET_FPS: u32 = 240;

/// Largest timestep the integrator is ever given (seconds)
pub const MAX_DT: f32 = 0.1;

/// Initial velocity range for each axis (pixels per second)
pub const MIN_INITIAL_VELOCITY: f32 = -50.0;
pub const MAX_INITIAL_VELOCITY: f32 = 50.0;
