//! Error types for sim-core operations.

use thiserror::Error;

/// Result type for sim-core operations.
pub type Result<T> = std::result::Result<T, SimCoreError>;

/// Errors that can occur when running a simulation.
///
/// Configuration errors fail fast: no partial result is ever produced.
/// Non-finite generated prices are not errors; they are recovered locally
/// by the price validator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimCoreError {
    /// The simulation config requested zero steps per path.
    #[error("simulation steps must be positive")]
    ZeroSteps,

    /// The simulation config requested zero paths.
    #[error("simulation path count must be positive")]
    ZeroPaths,

    /// The start price must be positive and finite.
    #[error("invalid start price: {0}")]
    InvalidStartPrice(f64),
}
