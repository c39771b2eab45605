use newrap_core::Vector2;

use crate::equation::Evaluation;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The residual dropped to the tolerance before the iteration cap.
    Converged,

    /// Reached the iteration cap. `x` is the last iterate and may be
    /// inaccurate.
    NotConverged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Final iterate.
    pub x: Vector2,

    /// Equation values at `x`.
    pub values: Vector2,

    /// Residual at `x`.
    pub residual: f64,

    /// Number of iterations performed.
    pub iters: usize,
}

impl Solution {
    pub(super) fn from_eval(eval: Evaluation, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: eval.x,
            values: eval.values,
            residual: eval.residual,
            iters,
        }
    }

    /// Returns true if the solver converged.
    ///
    /// Callers must check this before trusting `x`.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
