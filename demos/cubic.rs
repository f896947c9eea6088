//! Maximizes `f(x) = -2x^3 + 8x + 3` on `[-2, 2]` and prints the result.
//!
//! Run with `RUST_LOG=u_anneal=debug cargo run --example cubic` to see the
//! run summary.

use tracing_subscriber::EnvFilter;
use u_anneal::sa::{Annealer, Objective};

struct Cubic;

impl Objective for Cubic {
    fn evaluate(&self, x: f64) -> f64 {
        -2.0 * x * x * x + 8.0 * x + 3.0
    }

    fn is_better(&self, current: f64, candidate: f64) -> bool {
        current < candidate
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let problem = Cubic;
    let mut annealer = Annealer::new(1000);

    let x = annealer.solve(&problem, 100.0, 0.99, 0.0, -2.0, 2.0);

    println!("{x}");
    println!("{}", problem.evaluate(x));
}
