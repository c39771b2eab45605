use newrap_core::{EPS, Matrix2, Vector2, determinant};

use super::{LinearSolver, SingularMatrixError, ToleranceError};

/// Closed-form 2x2 solve using Cramer's rule.
///
/// For the system
///
/// ```text
/// a x + b y + e = 0
/// c x + d y + f = 0
/// ```
///
/// the solution is `x = -(e d - b f) / det` and `y = -(a f - c e) / det`,
/// with `det = a d - b c`. Matrices with `|det| <= eps` are rejected, and so
/// is a NaN determinant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cramer {
    eps: f64,
}

impl Default for Cramer {
    fn default() -> Self {
        Self { eps: EPS }
    }
}

impl Cramer {
    /// Creates a solver with a custom singularity tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is negative or non-finite.
    pub fn new(eps: f64) -> Result<Self, ToleranceError> {
        if !eps.is_finite() || eps < 0.0 {
            return Err(ToleranceError { value: eps });
        }
        Ok(Self { eps })
    }

    /// Returns the singularity tolerance.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }
}

impl LinearSolver for Cramer {
    fn solve(&self, a: &Matrix2, b: &Vector2) -> Result<Vector2, SingularMatrixError> {
        let [[a00, a01], [a10, a11]] = *a;
        let [b0, b1] = *b;

        let det = determinant(a);

        if det.is_nan() || det.abs() <= self.eps {
            return Err(SingularMatrixError {
                determinant: det,
                tolerance: self.eps,
            });
        }

        Ok([
            -(b0 * a11 - a01 * b1) / det,
            -(a00 * b1 - a10 * b0) / det,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use newrap_core::mat_vec;

    use crate::linear::solve_2x2;

    fn assert_solves(a: &Matrix2, b: &Vector2) {
        let x = solve_2x2(a, b).expect("matrix is well conditioned");
        let ax = mat_vec(a, &x);
        assert_relative_eq!(ax[0] + b[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(ax[1] + b[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn solves_well_conditioned_systems() {
        assert_solves(&[[2.0, 1.0], [1.0, 3.0]], &[-3.0, -5.0]);
        assert_solves(&[[0.0, 1.0], [1.0, 0.0]], &[4.0, -2.0]);
        assert_solves(&[[-7.5, 0.25], [3.0, 9.0]], &[0.125, 11.0]);
        assert_solves(&[[1.0, 0.0], [0.0, 1.0]], &[0.0, 0.0]);
    }

    #[test]
    fn solves_known_system() {
        // 2x + y - 3 = 0, x + 3y - 5 = 0  =>  x = 0.8, y = 1.4
        let x = solve_2x2(&[[2.0, 1.0], [1.0, 3.0]], &[-3.0, -5.0]).expect("solvable");
        assert_relative_eq!(x[0], 0.8, epsilon = 1e-15);
        assert_relative_eq!(x[1], 1.4, epsilon = 1e-15);
    }

    #[test]
    fn rejects_singular_matrix() {
        let err = solve_2x2(&[[1.0, 2.0], [2.0, 4.0]], &[1.0, 1.0]).unwrap_err();
        assert_relative_eq!(err.determinant, 0.0);
        assert_relative_eq!(err.tolerance, EPS);
    }

    #[test]
    fn rejects_determinant_at_tolerance() {
        let a = [[EPS, 0.0], [0.0, 1.0]];
        assert!(solve_2x2(&a, &[1.0, 1.0]).is_err());

        let a = [[2.0 * EPS, 0.0], [0.0, 1.0]];
        assert!(solve_2x2(&a, &[1.0, 1.0]).is_ok());
    }

    #[test]
    fn rejects_nan_determinant() {
        let a = [[f64::NAN, 0.0], [0.0, 1.0]];
        let err = solve_2x2(&a, &[1.0, 1.0]).unwrap_err();
        assert!(err.determinant.is_nan());
    }

    #[test]
    fn custom_tolerance_is_honored() {
        let a = [[1e-3, 0.0], [0.0, 1.0]];
        let b = [1.0, 1.0];

        assert!(Cramer::default().solve(&a, &b).is_ok());

        let loose = Cramer::new(1e-2).expect("valid tolerance");
        assert!(matches!(
            loose.solve(&a, &b),
            Err(SingularMatrixError { tolerance, .. }) if tolerance == 1e-2
        ));
    }

    #[test]
    fn new_rejects_invalid_tolerance() {
        assert!(Cramer::new(-1.0).is_err());
        assert!(Cramer::new(f64::NAN).is_err());
        assert!(Cramer::new(f64::INFINITY).is_err());
        assert_eq!(Cramer::new(0.0).map(|c| c.eps()), Ok(0.0));
    }
}
