use newrap_core::{Observer, Vector2};

use crate::traits::{HasIterate, HasResidual};

/// One recorded iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub iter: usize,
    pub x: Vector2,
    pub residual: f64,
}

/// An observer that records the iterate and residual of every iteration.
///
/// Pass `&mut History` to a solver to keep the records after the solve:
///
/// ```
/// use newrap_core::FnSystem;
/// use newrap_observers::History;
/// use newrap_solvers::{equation::newton, linear::Cramer};
///
/// let system = FnSystem::new(
///     |x: &[f64; 2]| [x[0] * x[0] - 2.0, x[1] - 1.0],
///     |x: &[f64; 2]| [[2.0 * x[0], 0.0], [0.0, 1.0]],
/// );
///
/// let mut history = History::new();
/// let solution = newton::solve(
///     &system,
///     &Cramer::default(),
///     [1.0, 0.0],
///     &newton::Config::default(),
///     &mut history,
/// )?;
///
/// assert_eq!(history.len(), solution.iters);
/// # Ok::<(), newton::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded iterations in order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the residual of each recorded iteration in order.
    pub fn residuals(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|record| record.residual)
    }

    /// Returns the most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.records.push(Record {
            iter: event.iter(),
            x: event.x(),
            residual: event.residual(),
        });
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the records can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut History
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        Observer::<E, A>::observe(&mut **self, event)
    }
}
