//! Single-variable simulated annealing.
//!
//! Given a scalar objective and a search interval, the [`sa::Annealer`]
//! samples candidate inputs, accepts improvements outright and worse
//! candidates with a temperature-dependent probability, and cools the
//! temperature geometrically. Every accepted score is recorded in a history
//! owned by the annealer.
//!
//! The objective decides what "better" means through
//! [`sa::Objective::is_better`], so the same loop minimizes, maximizes or
//! follows any other ordering.
//!
//! ```
//! use u_anneal::sa::{Annealer, FnObjective, SaConfig};
//!
//! let cubic = FnObjective::maximize(|x: f64| -2.0 * x * x * x + 8.0 * x + 3.0);
//! let config = SaConfig::default()
//!     .with_initial_temperature(100.0)
//!     .with_cooling_rate(0.99)
//!     .with_bounds(-2.0, 2.0)
//!     .with_seed(42);
//!
//! let result = Annealer::new(1000).run(&cubic, &config).unwrap();
//! assert!((-2.0..=2.0).contains(&result.x));
//! ```

pub mod sa;
