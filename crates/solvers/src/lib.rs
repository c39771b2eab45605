//! Solvers for two-equation nonlinear systems.
//!
//! - [`linear`] — closed-form solve of `A·X + B = 0` for a 2x2 matrix
//! - [`equation`] — residual evaluation and the Newton-Raphson driver

pub mod equation;
pub mod linear;
