//! Single-variable Simulated Annealing (SA).
//!
//! Searches an interval `[lower, upper]` for an input that the objective
//! prefers. Candidates are drawn uniformly from the whole interval; worse
//! candidates are accepted with a probability that shrinks as the
//! temperature cools geometrically.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;
mod error;
mod runner;
mod types;

pub use config::SaConfig;
pub use error::ConfigError;
pub use runner::{temperature_at, Annealer, SaResult};
pub use types::{FnObjective, Objective};
