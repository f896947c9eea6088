//! Annealing loop.
//!
//! # Algorithm
//!
//! 1. Score the initial input and record it in the history
//! 2. For each of `niter` outer iterations:
//!    a. Run `floor(T)` trials, each sampling a candidate uniformly from
//!       `[lower, upper]`
//!    b. Accept improvements outright; accept worse candidates with
//!       probability `exp(-sqrt(|delta|) / T)`
//!    c. Cool: `T = alpha * T`
//! 3. Return the current input

use super::config::SaConfig;
use super::error::ConfigError;
use super::types::Objective;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// Report of a single [`Annealer::run`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// The input value the run ended on.
    pub x: f64,

    /// Score of `x`.
    pub score: f64,

    /// Temperature after the last cooling step.
    pub final_temperature: f64,

    /// Total number of candidate evaluations.
    pub trials: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of moves accepted because the objective judged them better.
    pub improving_moves: usize,

    /// Scores accepted during this run, starting with the initial score.
    pub history: Vec<f64>,
}

/// Single-variable simulated annealer.
///
/// Holds the outer iteration budget and a history of every accepted score.
/// The history is shared by all runs on the same instance: each run appends
/// to it and nothing clears it.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::{Annealer, FnObjective};
/// use rand::SeedableRng;
///
/// let cubic = FnObjective::minimize(|x: f64| -2.0 * x * x * x + 8.0 * x + 3.0);
/// let mut annealer = Annealer::new(100);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
///
/// let x = annealer.solve_with_rng(&cubic, 20.0, 0.95, 0.0, -2.0, 2.0, &mut rng);
/// assert!((-2.0..=2.0).contains(&x));
/// assert!(!annealer.history().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Annealer {
    niter: usize,
    history: Vec<f64>,
}

/// Final state of one pass through the loop.
struct Outcome {
    x: f64,
    score: f64,
    temperature: f64,
    trials: usize,
    accepted: usize,
    improving: usize,
}

impl Annealer {
    /// Creates an annealer that runs `niter` outer (cooling) iterations.
    pub fn new(niter: usize) -> Self {
        Self {
            niter,
            history: Vec::new(),
        }
    }

    /// Number of outer iterations per run.
    pub fn niter(&self) -> usize {
        self.niter
    }

    /// Every score accepted so far, across all runs, in order.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Consumes the annealer and returns its history.
    pub fn into_history(self) -> Vec<f64> {
        self.history
    }

    /// Anneals `objective` from `x0` over `[lower, upper]` using a freshly
    /// seeded generator.
    ///
    /// `t` is the initial temperature and `a` the cooling multiplier. The
    /// number of trials per outer iteration is the integer part of the
    /// current temperature, so a run started with `t < 1` never samples and
    /// returns `x0`.
    ///
    /// Parameters are not checked: the caller must supply `t > 0`,
    /// `0 < a < 1` and `lower < upper`. Use [`Annealer::run`] for validated
    /// input.
    pub fn solve<O: Objective + ?Sized>(
        &mut self,
        objective: &O,
        t: f64,
        a: f64,
        x0: f64,
        lower: f64,
        upper: f64,
    ) -> f64 {
        let mut rng = create_rng(rand::random());
        self.solve_with_rng(objective, t, a, x0, lower, upper, &mut rng)
    }

    /// Same as [`Annealer::solve`] but draws from `rng`.
    ///
    /// Each trial takes one draw for the candidate and, when the candidate
    /// is not better, one more for the acceptance test.
    #[allow(clippy::too_many_arguments)]
    pub fn solve_with_rng<O: Objective + ?Sized, R: Rng>(
        &mut self,
        objective: &O,
        t: f64,
        a: f64,
        x0: f64,
        lower: f64,
        upper: f64,
        rng: &mut R,
    ) -> f64 {
        let params = SaConfig {
            initial_temperature: t,
            cooling_rate: a,
            initial_x: x0,
            lower,
            upper,
            seed: None,
        };
        self.anneal(objective, &params, rng).x
    }

    /// Validates `config` and anneals `objective` with it.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`SaConfig::validate`]; nothing is
    /// appended to the history in that case.
    pub fn run<O: Objective + ?Sized>(
        &mut self,
        objective: &O,
        config: &SaConfig,
    ) -> Result<SaResult, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let start = self.history.len();
        let outcome = self.anneal(objective, config, &mut rng);

        Ok(SaResult {
            x: outcome.x,
            score: outcome.score,
            final_temperature: outcome.temperature,
            trials: outcome.trials,
            accepted_moves: outcome.accepted,
            improving_moves: outcome.improving,
            history: self.history[start..].to_vec(),
        })
    }

    fn anneal<O: Objective + ?Sized, R: Rng>(
        &mut self,
        objective: &O,
        params: &SaConfig,
        rng: &mut R,
    ) -> Outcome {
        let lower = params.lower;
        let width = params.upper - params.lower;

        let mut x = params.initial_x;
        let mut score = objective.evaluate(x);
        self.history.push(score);

        let mut temperature = params.initial_temperature;
        let mut trials = 0usize;
        let mut accepted = 0usize;
        let mut improving = 0usize;

        debug!(
            niter = self.niter,
            temperature,
            cooling_rate = params.cooling_rate,
            x,
            score,
            "annealing started"
        );

        for step in 0..self.niter {
            // Saturates to 0 for t < 1 (and for NaN).
            let inner = temperature as usize;

            for _ in 0..inner {
                let candidate = lower + rng.random::<f64>() * width;
                let candidate_score = objective.evaluate(candidate);
                trials += 1;

                let accept = if objective.is_better(score, candidate_score) {
                    improving += 1;
                    true
                } else {
                    let d = (candidate_score - score).abs().sqrt();
                    let probability = (-d / temperature).exp();
                    rng.random::<f64>() < probability
                };

                if accept {
                    x = candidate;
                    score = candidate_score;
                    accepted += 1;
                    self.history.push(score);
                }
            }

            trace!(step, temperature, inner, x, score, "cooling step");
            temperature *= params.cooling_rate;
        }

        debug!(trials, accepted, improving, x, score, "annealing finished");

        Outcome {
            x,
            score,
            temperature,
            trials,
            accepted,
            improving,
        }
    }
}

/// Temperature after outer iteration `i` (0-indexed) of a geometric schedule
/// starting at `t0` with multiplier `a`: `t0 * a^(i + 1)`.
pub fn temperature_at(t0: f64, a: f64, i: usize) -> f64 {
    t0 * a.powf(i as f64 + 1.0)
}

fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
