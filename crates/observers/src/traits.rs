//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and used with any solver whose types
//! implement them.
//!
//! # Event traits
//!
//! - [`HasIterate`] — events that carry an iteration number and iterate
//! - [`HasResidual`] — events that carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use newrap_core::Observer;
//! use newrap_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use newrap_core::Vector2;
use newrap_solvers::equation::newton;

/// An event that carries the iteration number and the current iterate.
pub trait HasIterate {
    /// Returns the 1-based iteration number.
    fn iter(&self) -> usize;

    /// Returns the iterate reached by this iteration.
    fn x(&self) -> Vector2;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasIterate for newton::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> Vector2 {
        self.x
    }
}

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
