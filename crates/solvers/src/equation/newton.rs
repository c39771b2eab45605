//! Newton-Raphson iteration for two equations in two unknowns.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration evaluates the Jacobian `J` and the
//! equations `F` at the current `x`, solves `J·Δx + F = 0` with a
//! [`LinearSolver`], and moves to `x + Δx`. The residual `|F0| + |F1|` is then
//! measured at the new point.
//!
//! The loop body always runs at least once, even when `x0` is already a root,
//! and keeps going while the residual is above the tolerance and the
//! iteration cap has not been reached. A non-finite residual counts as not
//! converged.
//!
//! # Outcomes
//!
//! - [`Status::Converged`] — the residual reached the tolerance before the cap
//! - [`Status::NotConverged`] — the cap was reached; this includes a residual
//!   that only reaches the tolerance on the final allowed iteration
//! - [`Status::StoppedByObserver`] — an observer returned [`Action::StopEarly`]
//! - [`Error::SingularJacobian`] — the Jacobian was singular at some iterate;
//!   the solve stops there and nothing is retried
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the step is applied
//! and the new residual is known.

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use newrap_core::{EquationSystem, Observer, Vector2, add};

use crate::{
    equation::evaluate,
    linear::{Cramer, LinearSolver},
};

/// Finds a root of the system with Newton-Raphson iteration.
///
/// The observer receives an [`Event`] after every iteration.
/// See the [module docs](self) for the loop structure and outcomes.
///
/// # Errors
///
/// Returns [`Error::SingularJacobian`] if the linear solver rejects the
/// Jacobian at any iterate.
pub fn solve<S, L, Obs>(
    system: &S,
    linear: &L,
    x0: Vector2,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    S: EquationSystem + ?Sized,
    L: LinearSolver + ?Sized,
    Obs: Observer<Event, Action>,
{
    let mut x = x0;
    let mut iter = 0;

    loop {
        let jacobian = system.jacobian(&x);
        let f_prev = system.evaluate(&x);
        let step = linear
            .solve(&jacobian, &f_prev)
            .map_err(|source| Error::SingularJacobian {
                x,
                iter: iter + 1,
                source,
            })?;

        let x_prev = x;
        x = add(&x, &step);
        let eval = evaluate(system, x);
        iter += 1;

        log::trace!(
            "newton iteration {iter}: residual = {:.8e}, x = [{:.16e}, {:.16e}]",
            eval.residual,
            x[0],
            x[1],
        );

        let event = Event {
            iter,
            x_prev,
            jacobian,
            f_prev,
            step,
            x,
            residual: eval.residual,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    log::debug!("newton stopped by observer after {iter} iterations");
                    return Ok(Solution::from_eval(eval, Status::StoppedByObserver, iter));
                }
            }
        }

        let within_tol = eval.residual <= config.residual_tol();
        if within_tol || iter >= config.max_iters() {
            let status = if iter < config.max_iters() {
                Status::Converged
            } else {
                Status::NotConverged
            };
            log::debug!(
                "newton finished with {status:?} after {iter} iterations, residual = {:.8e}",
                eval.residual,
            );
            return Ok(Solution::from_eval(eval, status, iter));
        }
    }
}

/// Runs Newton-Raphson with Cramer's rule and no observation.
///
/// # Errors
///
/// Returns [`Error::SingularJacobian`] if the Jacobian is singular at any
/// iterate.
pub fn solve_unobserved<S>(system: &S, x0: Vector2, config: &Config) -> Result<Solution, Error>
where
    S: EquationSystem + ?Sized,
{
    solve(system, &Cramer::default(), x0, config, ())
}
