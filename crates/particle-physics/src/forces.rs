//! Force model: pairwise repulsion and mouse drag
//!
//! Every function here is a pure read of particle and mouse state. The
//! integrator scales the returned accelerations by `dt`.

use glam::Vec2;

use crate::config::SimulationConfig;
use crate::mouse::MouseState;
use crate::particle::Particle;

/// Acceleration on a particle at `from` caused by a particle at `to`.
/// Points away from `to`. Coincident particles contribute nothing.
///
/// Below the distance floor the magnitude is computed at the floor but the
/// direction is not normalized, so it scales down linearly with `|to - from|`.
pub fn repulsion(from: Vec2, to: Vec2, config: &SimulationConfig) -> Vec2 {
    let delta = to - from;
    let distance = delta.length().max(config.min_distance);
    let force = -config.repulsion_strength / (distance * distance);
    delta / distance * force
}

/// Linear falloff of the mouse drag: 1 at the cursor, shrinking towards the
/// radius edge. `None` at or beyond the radius.
pub fn mouse_influence(distance: f32, radius: f32) -> Option<f32> {
    if distance < radius {
        Some(1.0 - distance / radius)
    } else {
        None
    }
}

/// Velocity-matching drag towards the cursor velocity.
/// Only active while the button is held.
pub fn mouse_drag(particle: &Particle, mouse: &MouseState, config: &SimulationConfig) -> Vec2 {
    if !mouse.pressed {
        return Vec2::ZERO;
    }

    let distance = (mouse.position - particle.position).length();
    match mouse_influence(distance, config.mouse_radius) {
        Some(influence) => {
            (mouse.velocity - particle.velocity) * influence * config.mouse_drag_strength
        }
        None => Vec2::ZERO,
    }
}

/// Total acceleration on particle `i`: repulsion from every other particle
/// plus the mouse drag. O(n) per call.
pub fn compute_acceleration(
    i: usize,
    particles: &[Particle],
    mouse: &MouseState,
    config: &SimulationConfig,
) -> Vec2 {
    let particle = &particles[i];

    let mut acceleration = Vec2::ZERO;
    for (j, other) in particles.iter().enumerate() {
        if i == j {
            continue;
        }
        acceleration += repulsion(particle.position, other.position, config);
    }

    acceleration + mouse_drag(particle, mouse, config)
}
