//! Newton-Raphson on small two-equation systems, with iteration logging.
//!
//! # Usage
//!
//! ```text
//! cargo run --example newton
//! cargo run --example newton -- cycle
//! NEWRAP_LOG=trace cargo run --example newton -- quadratic
//! ```
//!
//! # Modes
//!
//! - **quadratic** — Solve `2x² + 3xy = 5`, `x + 3y = 2` from `(0.5, 0.2)`.
//!   Converges to `(√6 − 1, 1 − √6/3)` in a handful of iterations.
//!
//! - **cycle** — Solve `x³ − 2x + 2 = 0`, `y = 0` from the origin. Newton
//!   bounces between `x = 0` and `x = 1` until the iteration cap is reached.
//!
//! - **singular** — Solve `x² = 4`, `y = 1` from `x = 0`, where the Jacobian is
//!   singular. The solve aborts with an error.

use std::error::Error;

use log::{Level, LevelFilter};

use newrap_core::{EquationSystem, FnSystem, Matrix2, Vector2};
use newrap_observers::LogObserver;
use newrap_solvers::{
    equation::newton::{self, Config},
    linear::Cramer,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("NEWRAP_LOG", "info"))
        .init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "quadratic".into());
    match mode.as_str() {
        "quadratic" => run(&Quadratic, [0.5, 0.2]),
        "cycle" => run(&cycle(), [0.0, 0.0]),
        "singular" => run(&singular(), [0.0, 3.0]),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: newton [quadratic|cycle|singular]");
            std::process::exit(1);
        }
    }
}

/// Solves from `x0` and logs every iteration at info level.
fn run(system: &impl EquationSystem, x0: Vector2) -> Result<(), Box<dyn Error>> {
    let solution = newton::solve(
        system,
        &Cramer::default(),
        x0,
        &Config::default(),
        LogObserver::new(Level::Info),
    )?;

    log::info!(
        "{:?} after {} iterations: x = [{:.16}, {:.16}], residual = {:.3e}",
        solution.status,
        solution.iters,
        solution.x[0],
        solution.x[1],
        solution.residual,
    );

    Ok(())
}

// --- Quadratic ---------------------------------------------------------------

/// f(x, y) = (2x² + 3xy − 5, x + 3y − 2).
struct Quadratic;

impl EquationSystem for Quadratic {
    fn evaluate(&self, x: &Vector2) -> Vector2 {
        let [x, y] = *x;
        [2.0 * x * x + 3.0 * x * y - 5.0, x + 3.0 * y - 2.0]
    }

    fn jacobian(&self, x: &Vector2) -> Matrix2 {
        let [x, y] = *x;
        [[4.0 * x + 3.0 * y, 3.0 * x], [1.0, 3.0]]
    }
}

// --- Cycle -------------------------------------------------------------------

fn cycle() -> impl EquationSystem {
    FnSystem::new(
        |x: &Vector2| [x[0].powi(3) - 2.0 * x[0] + 2.0, x[1]],
        |x: &Vector2| [[3.0 * x[0] * x[0] - 2.0, 0.0], [0.0, 1.0]],
    )
}

// --- Singular ----------------------------------------------------------------

fn singular() -> impl EquationSystem {
    FnSystem::new(
        |x: &Vector2| [x[0] * x[0] - 4.0, x[1] - 1.0],
        |x: &Vector2| [[2.0 * x[0], 0.0], [0.0, 1.0]],
    )
}
