//! Explicit Euler integrator with wall bounces and exponential damping
//!
//! Order per particle: force -> velocity -> position -> boundary -> damping.
//! Changing the order changes how much energy a bounce keeps.

use particle_physics::{compute_acceleration, MouseState, Particle, SimulationConfig};

use crate::store::ParticleStore;

/// Advance every particle by `dt` seconds.
///
/// Accelerations are computed for the whole store before any particle moves,
/// so every force sees the same snapshot of the previous step.
pub fn step(store: &mut ParticleStore, mouse: &MouseState, config: &SimulationConfig, dt: f32) {
    let (particles, accelerations) = store.split_mut();

    for (i, acceleration) in accelerations.iter_mut().enumerate() {
        *acceleration = compute_acceleration(i, particles, mouse, config);
    }

    for (particle, acceleration) in particles.iter_mut().zip(accelerations.iter()) {
        particle.velocity += *acceleration * dt;
        particle.position += particle.velocity * dt;
        resolve_boundary(particle, config);
        apply_damping(particle, config.damping, dt);
    }
}

/// Clamp to `[0, width - 1] x [0, height - 1]` and flip the velocity of every
/// axis that left the window. Axes are handled independently.
pub fn resolve_boundary(particle: &mut Particle, config: &SimulationConfig) {
    let max_x = config.max_x();
    let max_y = config.max_y();

    if particle.position.x < 0.0 {
        particle.position.x = 0.0;
        particle.velocity.x = -particle.velocity.x;
    }
    if particle.position.x > max_x {
        particle.position.x = max_x;
        particle.velocity.x = -particle.velocity.x;
    }
    if particle.position.y < 0.0 {
        particle.position.y = 0.0;
        particle.velocity.y = -particle.velocity.y;
    }
    if particle.position.y > max_y {
        particle.position.y = max_y;
        particle.velocity.y = -particle.velocity.y;
    }
}

/// v *= 1 - damping * dt
pub fn apply_damping(particle: &mut Particle, damping: f32, dt: f32) {
    particle.velocity *= 1.0 - damping * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn store_of(particles: Vec<Particle>) -> ParticleStore {
        ParticleStore::from_particles(particles).unwrap()
    }

    #[test]
    fn pair_pushes_apart_and_bounces_off_left_wall() {
        let config = SimulationConfig::default();
        let mut store = store_of(vec![
            Particle::at_rest(Vec2::new(0.0, 0.0)),
            Particle::at_rest(Vec2::new(2.0, 0.0)),
        ]);

        step(&mut store, &MouseState::default(), &config, 0.01);

        let left = store.particles()[0];
        let right = store.particles()[1];

        // 250 px/s² for 0.01 s -> 2.5 px/s, then damped by (1 - 0.5 * 0.01)
        let expected_speed = 2.5 * (1.0 - 0.5 * 0.01);

        // Pushed below zero, clamped, velocity flipped to point back inside
        assert_eq!(left.position, Vec2::ZERO);
        assert!((left.velocity.x - expected_speed).abs() < 1e-5);
        assert_eq!(left.velocity.y, 0.0);

        assert!((right.position.x - 2.025).abs() < 1e-5);
        assert!((right.velocity.x - expected_speed).abs() < 1e-5);
        assert_eq!(right.position.y, 0.0);
        assert_eq!(right.velocity.y, 0.0);
    }

    #[test]
    fn forces_use_start_of_step_snapshot() {
        let config = SimulationConfig::default();
        let mut store = store_of(vec![
            Particle::at_rest(Vec2::new(100.0, 100.0)),
            Particle::at_rest(Vec2::new(104.0, 100.0)),
        ]);

        step(&mut store, &MouseState::default(), &config, 0.05);

        let left = store.particles()[0];
        let right = store.particles()[1];
        assert!((left.velocity.x + right.velocity.x).abs() < 1e-5);
        assert!((left.position.x - 100.0 + right.position.x - 104.0).abs() < 1e-4);
    }

    #[test]
    fn corner_hit_flips_both_axes() {
        let config = SimulationConfig::default();
        let mut particle = Particle::at_rest(Vec2::new(950.0, -3.0));
        particle.velocity = Vec2::new(20.0, -40.0);

        resolve_boundary(&mut particle, &config);

        assert_eq!(particle.position, Vec2::new(config.max_x(), 0.0));
        assert_eq!(particle.velocity, Vec2::new(-20.0, 40.0));
    }

    #[test]
    fn inside_particle_is_untouched_by_boundary() {
        let config = SimulationConfig::default();
        let mut particle = Particle::at_rest(Vec2::new(0.0, 599.0));
        particle.velocity = Vec2::new(-5.0, 5.0);
        let before = particle;

        resolve_boundary(&mut particle, &config);

        assert_eq!(particle, before);
    }

    #[test]
    fn damping_shrinks_speed_without_flipping() {
        let config = SimulationConfig::default();
        let mut start = Particle::at_rest(Vec2::new(450.0, 300.0));
        start.velocity = Vec2::new(100.0, -50.0);
        let mut store = store_of(vec![start]);

        let mut previous = start.velocity;
        for _ in 0..100 {
            step(&mut store, &MouseState::default(), &config, 0.01);
            let v = store.particles()[0].velocity;
            assert!(v.length() < previous.length());
            assert!(v.x > 0.0 && v.y < 0.0);
            previous = v;
        }
    }

    #[test]
    fn mouse_drag_approaches_mouse_velocity() {
        let config = SimulationConfig::default();
        let mut store = store_of(vec![Particle::at_rest(Vec2::new(100.0, 100.0))]);
        let mouse = MouseState {
            position: Vec2::new(100.0, 100.0),
            velocity: Vec2::new(100.0, 0.0),
            pressed: true,
        };
        let dt = 0.01;

        step(&mut store, &mouse, &config, dt);

        // One step closes drag_strength * dt of the gap, then damping applies
        let v = store.particles()[0].velocity;
        let expected = 100.0 * config.mouse_drag_strength * dt * (1.0 - config.damping * dt);
        assert!((v.x - expected).abs() < 1e-4, "vx = {}", v.x);
        assert_eq!(v.y, 0.0);

        let mut previous = v.x;
        for _ in 0..20 {
            step(&mut store, &mouse, &config, dt);
            let vx = store.particles()[0].velocity.x;
            assert!(vx > previous && vx < 100.0);
            previous = vx;
        }
    }

    #[test]
    fn released_mouse_has_no_effect() {
        let config = SimulationConfig::default();
        let mut store = store_of(vec![Particle::at_rest(Vec2::new(100.0, 100.0))]);
        let mouse = MouseState {
            position: Vec2::new(100.0, 100.0),
            velocity: Vec2::new(100.0, 0.0),
            pressed: false,
        };

        step(&mut store, &mouse, &config, 0.01);

        assert_eq!(store.particles()[0].velocity, Vec2::ZERO);
    }

    #[test]
    fn positions_stay_in_bounds() {
        let config = SimulationConfig {
            particle_count: 200,
            initial_velocity: (-5000.0, 5000.0),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        let mut store = ParticleStore::initialize(&config, &mut rng).unwrap();

        for _ in 0..20 {
            step(&mut store, &MouseState::default(), &config, 0.1);
            for p in &store {
                assert!((0.0..=config.max_x()).contains(&p.position.x));
                assert!((0.0..=config.max_y()).contains(&p.position.y));
            }
        }
    }
}
