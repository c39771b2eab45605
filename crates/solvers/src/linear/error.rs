use thiserror::Error;

/// The matrix determinant is too small to solve against.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("singular matrix: determinant {determinant} is within {tolerance} of zero")]
pub struct SingularMatrixError {
    /// Determinant of the rejected matrix.
    pub determinant: f64,
    /// Tolerance the determinant magnitude had to exceed.
    pub tolerance: f64,
}

/// A singularity tolerance was negative or non-finite.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("singularity tolerance must be finite and non-negative, got {value}")]
pub struct ToleranceError {
    pub value: f64,
}
