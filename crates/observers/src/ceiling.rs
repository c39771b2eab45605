use newrap_core::Observer;

use crate::traits::{CanStopEarly, HasResidual};

/// An observer that stops a solve once its residual exceeds a ceiling.
///
/// Newton iteration started far from a root can run off to very large
/// residuals long before the iteration cap. This observer ends such a run
/// early; a non-finite residual also stops it. The solver reports the stop
/// and nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualCeiling {
    limit: f64,
}

impl ResidualCeiling {
    /// Creates an observer that stops when the residual exceeds `limit`.
    #[must_use]
    pub fn new(limit: f64) -> Self {
        Self { limit }
    }

    /// Returns the residual limit.
    #[must_use]
    pub fn limit(&self) -> f64 {
        self.limit
    }
}

impl<E, A> Observer<E, A> for ResidualCeiling
where
    E: HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let residual = event.residual();
        if residual.is_finite() && residual <= self.limit {
            return None;
        }

        log::debug!(
            "residual {residual:.8e} exceeds ceiling {:.8e}, stopping",
            self.limit
        );
        Some(A::stop_early())
    }
}
