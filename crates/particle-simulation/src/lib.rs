//! # Particle Simulation Engine
//!
//! CPU N-body repulsion simulation: particle store, integrator, input
//! normalization and the paced frame loop.

pub mod driver;
pub mod error;
pub mod input;
pub mod integrator;
pub mod platform;
pub mod store;

pub use driver::*;
pub use error::*;
pub use input::*;
pub use integrator::*;
pub use platform::*;
pub use store::*;
