use newrap_core::{Matrix2, Vector2};

/// Event emitted by the Newton solver after each iteration.
///
/// The solver evaluates the Jacobian and the equations at `x_prev`, solves
/// for `step`, and moves to `x = x_prev + step`. `residual` is measured at
/// the new `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Iterate the step was taken from.
    pub x_prev: Vector2,

    /// Jacobian at `x_prev`.
    pub jacobian: Matrix2,

    /// Equation values at `x_prev`.
    pub f_prev: Vector2,

    /// Newton update, solving `jacobian · step + f_prev = 0`.
    pub step: Vector2,

    /// Updated iterate.
    pub x: Vector2,

    /// Residual at `x`.
    pub residual: f64,
}
