//! # Particle Renderer
//!
//! wgpu point renderer and the surface-backed [`particle_simulation::Canvas`].

pub mod canvas;
pub mod renderer;

pub use canvas::*;
pub use renderer::*;
