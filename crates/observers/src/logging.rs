use log::Level;
use newrap_core::Observer;

use crate::traits::{HasIterate, HasResidual};

/// An observer that logs every iteration through the [`log`] facade.
///
/// Each event produces two records at the configured level:
///
/// ```text
/// Iteration 3, Residual 1.08567552e-2
/// X0 1.451704867059614 X1 0.182765044313462
/// ```
///
/// Nothing is formatted unless the level is enabled for the target. The
/// observer never requests an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
    target: &'static str,
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl LogObserver {
    /// Creates an observer that logs at `level` under the `newrap` target.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            target: "newrap",
        }
    }

    /// Returns the observer with a different log target.
    #[must_use]
    pub fn with_target(self, target: &'static str) -> Self {
        Self { target, ..self }
    }

    /// Returns the level records are emitted at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the log target.
    #[must_use]
    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if !log::log_enabled!(target: self.target, self.level) {
            return None;
        }

        let [x0, x1] = event.x();
        log::log!(
            target: self.target,
            self.level,
            "Iteration {}, Residual {:.8e}",
            event.iter(),
            event.residual()
        );
        log::log!(target: self.target, self.level, "X0 {x0:.16} X1 {x1:.16}");
        None
    }
}
