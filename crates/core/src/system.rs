use crate::{Matrix2, Vector2};

/// A system of two nonlinear equations in two unknowns.
///
/// Solvers drive [`EquationSystem::evaluate`] toward zero. The Jacobian must
/// be supplied analytically: row `i` of [`EquationSystem::jacobian`] holds the
/// partial derivatives of output component `i` with respect to `x[0]` and
/// `x[1]`.
///
/// Both methods are expected to be pure functions of `x`. Solvers may call
/// them any number of times at the same point.
pub trait EquationSystem {
    /// Evaluates the equations at `x`.
    fn evaluate(&self, x: &Vector2) -> Vector2;

    /// Evaluates the Jacobian of [`EquationSystem::evaluate`] at `x`.
    fn jacobian(&self, x: &Vector2) -> Matrix2;
}

impl<S: EquationSystem + ?Sized> EquationSystem for &S {
    fn evaluate(&self, x: &Vector2) -> Vector2 {
        (**self).evaluate(x)
    }

    fn jacobian(&self, x: &Vector2) -> Matrix2 {
        (**self).jacobian(x)
    }
}

/// An [`EquationSystem`] built from a function closure and a Jacobian closure.
///
/// ```
/// use newrap_core::{EquationSystem, FnSystem};
///
/// let system = FnSystem::new(
///     |x: &[f64; 2]| [x[0] + x[1] - 3.0, x[0] - x[1] - 1.0],
///     |_: &[f64; 2]| [[1.0, 1.0], [1.0, -1.0]],
/// );
///
/// assert_eq!(system.evaluate(&[2.0, 1.0]), [0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnSystem<F, J> {
    function: F,
    jacobian: J,
}

impl<F, J> FnSystem<F, J>
where
    F: Fn(&Vector2) -> Vector2,
    J: Fn(&Vector2) -> Matrix2,
{
    /// Creates a system from its function and Jacobian evaluators.
    pub const fn new(function: F, jacobian: J) -> Self {
        Self { function, jacobian }
    }
}

impl<F, J> EquationSystem for FnSystem<F, J>
where
    F: Fn(&Vector2) -> Vector2,
    J: Fn(&Vector2) -> Matrix2,
{
    fn evaluate(&self, x: &Vector2) -> Vector2 {
        (self.function)(x)
    }

    fn jacobian(&self, x: &Vector2) -> Matrix2 {
        (self.jacobian)(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// f(x, y) = (2x² + 3xy - 5, x + 3y - 2).
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

    fn evaluate_through<S: EquationSystem>(system: S, x: &Vector2) -> Vector2 {
        system.evaluate(x)
    }

    #[test]
    fn struct_system_evaluates() {
        assert_eq!(Quadratic.evaluate(&[3.0, 2.0]), [31.0, 7.0]);
        assert_eq!(Quadratic.jacobian(&[3.0, 2.0]), [[18.0, 9.0], [1.0, 3.0]]);
    }

    #[test]
    fn closure_system_matches_struct_system() {
        let system = FnSystem::new(
            |x: &Vector2| Quadratic.evaluate(x),
            |x: &Vector2| Quadratic.jacobian(x),
        );

        let x = [0.5, 0.2];
        assert_eq!(system.evaluate(&x), Quadratic.evaluate(&x));
        assert_eq!(system.jacobian(&x), Quadratic.jacobian(&x));
    }

    #[test]
    fn references_are_systems() {
        let system = Quadratic;
        assert_eq!(evaluate_through(&system, &[3.0, 2.0]), [31.0, 7.0]);
    }
}
