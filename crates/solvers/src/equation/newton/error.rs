use newrap_core::Vector2;
use thiserror::Error;

use crate::linear::SingularMatrixError;

/// Errors that abort a Newton solve.
///
/// Running out of iterations is not an error; it is reported through
/// [`Status::NotConverged`](super::Status::NotConverged).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The Jacobian could not be solved against at the current iterate.
    #[error("singular Jacobian at x = {x:?} (iteration {iter})")]
    SingularJacobian {
        /// Iterate at which the Jacobian was evaluated.
        x: Vector2,
        /// Iteration that failed (1-based).
        iter: usize,
        #[source]
        source: SingularMatrixError,
    },
}
