//! Core trait for single-variable annealing.

/// Defines a scalar objective for the [`Annealer`](super::Annealer).
///
/// The user implements scoring and the comparison that decides whether a
/// candidate score improves on the current one. The annealer never compares
/// scores on its own, so the same loop serves minimization, maximization or
/// any other ordering the objective chooses.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::Objective;
///
/// struct Cubic;
///
/// impl Objective for Cubic {
///     fn evaluate(&self, x: f64) -> f64 {
///         -2.0 * x * x * x + 8.0 * x + 3.0
///     }
///
///     fn is_better(&self, current: f64, candidate: f64) -> bool {
///         candidate < current
///     }
/// }
///
/// assert!((Cubic.evaluate(0.0) - 3.0).abs() < 1e-12);
/// assert!(Cubic.is_better(3.0, 1.0));
/// ```
pub trait Objective {
    /// Scores an input value.
    fn evaluate(&self, x: f64) -> f64;

    /// Returns `true` if `candidate` is an improvement over `current`.
    ///
    /// Must be total and free of side effects.
    fn is_better(&self, current: f64, candidate: f64) -> bool;
}

impl<T: Objective + ?Sized> Objective for &T {
    fn evaluate(&self, x: f64) -> f64 {
        (**self).evaluate(x)
    }

    fn is_better(&self, current: f64, candidate: f64) -> bool {
        (**self).is_better(current, candidate)
    }
}

impl<T: Objective + ?Sized> Objective for Box<T> {
    fn evaluate(&self, x: f64) -> f64 {
        (**self).evaluate(x)
    }

    fn is_better(&self, current: f64, candidate: f64) -> bool {
        (**self).is_better(current, candidate)
    }
}

/// An [`Objective`] built from a scoring closure and an ordering closure.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::{FnObjective, Objective};
///
/// let square = FnObjective::minimize(|x: f64| x * x);
/// assert!(square.is_better(4.0, 1.0));
///
/// let custom = FnObjective::new(|x: f64| x.sin(), |cur: f64, cand: f64| cand.abs() < cur.abs());
/// assert!(custom.is_better(-0.5, 0.1));
/// ```
#[derive(Clone, Copy)]
pub struct FnObjective<F, B> {
    evaluate: F,
    is_better: B,
}

impl<F, B> FnObjective<F, B>
where
    F: Fn(f64) -> f64,
    B: Fn(f64, f64) -> bool,
{
    /// Pairs a scoring function with an arbitrary ordering predicate.
    ///
    /// The predicate receives `(current, candidate)`.
    pub fn new(evaluate: F, is_better: B) -> Self {
        Self {
            evaluate,
            is_better,
        }
    }
}

impl<F> FnObjective<F, fn(f64, f64) -> bool>
where
    F: Fn(f64) -> f64,
{
    /// Smaller scores are better.
    pub fn minimize(evaluate: F) -> Self {
        Self::new(evaluate, |current, candidate| candidate < current)
    }

    /// Larger scores are better.
    pub fn maximize(evaluate: F) -> Self {
        Self::new(evaluate, |current, candidate| candidate > current)
    }
}

impl<F, B> Objective for FnObjective<F, B>
where
    F: Fn(f64) -> f64,
    B: Fn(f64, f64) -> bool,
{
    fn evaluate(&self, x: f64) -> f64 {
        (self.evaluate)(x)
    }

    fn is_better(&self, current: f64, candidate: f64) -> bool {
        (self.is_better)(current, candidate)
    }
}

impl<F, B> std::fmt::Debug for FnObjective<F, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnObjective").finish_non_exhaustive()
    }
}
