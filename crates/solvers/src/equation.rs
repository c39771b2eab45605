//! Solvers for equation systems — finding roots of two equations in two
//! unknowns.
//!
//! An [`EquationSystem`] maps a point `x` to the values of its equations.
//! Solvers in this module drive those values toward zero, measuring progress
//! with the [`residual`]: the sum of absolute equation values.
//!
//! # Solvers
//!
//! - [`newton`] — Newton-Raphson iteration with an analytic Jacobian
//!
//! [`EquationSystem`]: newrap_core::EquationSystem

mod evaluate;

pub use evaluate::{Evaluation, evaluate, residual};

pub mod newton;
