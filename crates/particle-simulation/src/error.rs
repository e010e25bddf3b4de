//! Error types for the simulation core.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// The particle pool could not be reserved at startup
    #[error("Failed to allocate particles with size {count}")]
    Allocation { count: usize },
}
