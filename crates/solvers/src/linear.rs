//! Linear solves for the inner step of Newton iteration.
//!
//! Every solver here answers the same question: given a 2x2 matrix `A` and a
//! vector `B`, find `X` such that `A·X + B = 0`. The Newton driver only sees
//! the [`LinearSolver`] trait, so a different direct method can replace
//! [`Cramer`] without touching the driver.
//!
//! A singular matrix is never worked around. Solvers reject it with
//! [`SingularMatrixError`] before dividing by a near-zero determinant.

mod cramer;
mod error;

pub use cramer::Cramer;
pub use error::{SingularMatrixError, ToleranceError};

use newrap_core::{Matrix2, Vector2};

/// A direct solver for `A·X + B = 0`.
pub trait LinearSolver {
    /// Solves `A·X + B = 0` for `X`.
    ///
    /// # Errors
    ///
    /// Returns [`SingularMatrixError`] if `a` is singular within the solver's
    /// tolerance.
    fn solve(&self, a: &Matrix2, b: &Vector2) -> Result<Vector2, SingularMatrixError>;
}

impl<L: LinearSolver + ?Sized> LinearSolver for &L {
    fn solve(&self, a: &Matrix2, b: &Vector2) -> Result<Vector2, SingularMatrixError> {
        (**self).solve(a, b)
    }
}

/// Solves `A·X + B = 0` with Cramer's rule and the default singularity
/// tolerance [`EPS`](newrap_core::EPS).
///
/// # Errors
///
/// Returns [`SingularMatrixError`] if `|det(a)| <= EPS`.
pub fn solve_2x2(a: &Matrix2, b: &Vector2) -> Result<Vector2, SingularMatrixError> {
    Cramer::default().solve(a, b)
}
