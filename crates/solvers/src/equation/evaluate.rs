use newrap_core::{EquationSystem, Vector2, l1_norm};

/// The result of evaluating an equation system at a given `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub x: Vector2,
    pub values: Vector2,
    pub residual: f64,
}

/// Evaluates the system at `x` and computes its residual.
pub fn evaluate<S>(system: &S, x: Vector2) -> Evaluation
where
    S: EquationSystem + ?Sized,
{
    let values = system.evaluate(&x);
    Evaluation {
        x,
        values,
        residual: l1_norm(&values),
    }
}

/// Returns the residual of the system at `x`: `|f0(x)| + |f1(x)|`.
pub fn residual<S>(system: &S, x: &Vector2) -> f64
where
    S: EquationSystem + ?Sized,
{
    l1_norm(&system.evaluate(x))
}
