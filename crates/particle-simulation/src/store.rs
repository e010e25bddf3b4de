//! Fixed-size particle store
//!
//! Allocated once at startup and never resized. The store also owns the
//! per-particle acceleration scratch buffer so a frame never allocates.

use glam::Vec2;
use particle_physics::{palette_colors, ColorMode, Particle, Rgb, SimulationConfig};
use rand::Rng;

use crate::error::SimulationError;

#[derive(Debug, Clone)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    accelerations: Vec<Vec2>,
}

impl ParticleStore {
    /// Seed `config.particle_count` particles with random positions inside the
    /// window and random velocities in `config.initial_velocity`.
    pub fn initialize<R: Rng>(
        config: &SimulationConfig,
        rng: &mut R,
    ) -> Result<Self, SimulationError> {
        let count = config.particle_count;
        let mut store = Self::with_capacity(count)?;

        let palette = palette_colors();
        let (min_v, max_v) = config.initial_velocity;

        for _ in 0..count {
            // Integer pixel in [1, bound - 1], never on the 0 edge
            let position = Vec2::new(
                rng.random_range(1..config.width.max(2)) as f32,
                rng.random_range(1..config.height.max(2)) as f32,
            );
            let velocity = Vec2::new(
                uniform(rng, min_v, max_v),
                uniform(rng, min_v, max_v),
            );
            let color = match config.color_mode {
                ColorMode::Solid(color) => color,
                ColorMode::Random => Rgb::new(rng.random(), rng.random(), rng.random()),
                ColorMode::Palette => palette[rng.random_range(0..palette.len())],
            };

            store.particles.push(Particle::new(position, velocity, color));
            store.accelerations.push(Vec2::ZERO);
        }

        log::info!("✓ Initialized {} particles", count);
        Ok(store)
    }

    /// Build a store from explicit particle state
    pub fn from_particles(particles: Vec<Particle>) -> Result<Self, SimulationError> {
        let count = particles.len();
        let mut accelerations = Vec::new();
        accelerations
            .try_reserve_exact(count)
            .map_err(|_| SimulationError::Allocation { count })?;
        accelerations.resize(count, Vec2::ZERO);

        Ok(Self {
            particles,
            accelerations,
        })
    }

    fn with_capacity(count: usize) -> Result<Self, SimulationError> {
        let mut particles = Vec::new();
        let mut accelerations = Vec::new();
        particles
            .try_reserve_exact(count)
            .and_then(|()| accelerations.try_reserve_exact(count))
            .map_err(|_| SimulationError::Allocation { count })?;

        Ok(Self {
            particles,
            accelerations,
        })
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Read-only view for rendering
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Particles plus the matching acceleration scratch buffer
    pub(crate) fn split_mut(&mut self) -> (&mut [Particle], &mut [Vec2]) {
        (&mut self.particles, &mut self.accelerations)
    }
}

impl<'a> IntoIterator for &'a ParticleStore {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn uniform<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min < max {
        rng.random_range(min..max)
    } else {
        min
    }
}
