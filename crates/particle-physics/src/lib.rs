//! # Particle Physics
//!
//! Force model for the 2D repulsion simulation: particle state, mouse state,
//! tuning constants and the per-particle acceleration calculation.

pub mod config;
pub mod constants;
pub mod forces;
pub mod mouse;
pub mod particle;

pub use config::*;
pub use constants::*;
pub use forces::*;
pub use mouse::*;
pub use particle::*;
