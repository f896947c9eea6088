//! Validation errors for annealing parameters.

use thiserror::Error;

/// Why an [`SaConfig`](super::SaConfig) was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial_temperature must be positive and finite, got {0}")]
    Temperature(f64),

    #[error("cooling_rate must be in (0, 1), got {0}")]
    CoolingRate(f64),

    #[error("initial_x must be finite, got {0}")]
    InitialX(f64),

    #[error("bounds must be finite with lower < upper, got [{lower}, {upper}]")]
    Bounds { lower: f64, upper: f64 },
}
