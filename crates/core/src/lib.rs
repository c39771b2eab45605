//! Core traits and types for solving two-equation nonlinear systems.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Vector2`], [`Matrix2`] — points, function values, steps, and Jacobians
//! - [`EquationSystem`] — the function and Jacobian evaluators of a problem
//! - [`FnSystem`] — an [`EquationSystem`] built from a pair of closures
//! - [`Observer`] — receives solver events and optionally returns control actions
//!
//! The named constants ([`NUM_DIM`], [`EPS`], [`TOL`], [`MAX_IT`]) are the
//! defaults used by the solvers.

mod observer;
mod system;
mod vector;

pub use observer::Observer;
pub use system::{EquationSystem, FnSystem};
pub use vector::{Matrix2, Vector2, add, determinant, l1_norm, mat_vec};

/// Number of equations and unknowns. Fixed; not generalized.
pub const NUM_DIM: usize = 2;

/// Determinant magnitude at or below which a matrix is treated as singular.
pub const EPS: f64 = 1e-12;

/// Convergence tolerance on the summed absolute residual.
pub const TOL: f64 = 1e-12;

/// Maximum number of Newton iterations.
pub const MAX_IT: usize = 100;
