use crate::NUM_DIM;

/// A point, function value, or update step in the two-dimensional space.
pub type Vector2 = [f64; NUM_DIM];

/// A 2x2 matrix stored row-major, so `m[i][j]` is row `i`, column `j`.
///
/// Jacobians use this layout: row `i` holds the partial derivatives of output
/// component `i` with respect to both inputs.
pub type Matrix2 = [[f64; NUM_DIM]; NUM_DIM];

/// Returns the componentwise sum `a + b`.
#[must_use]
pub fn add(a: &Vector2, b: &Vector2) -> Vector2 {
    [a[0] + b[0], a[1] + b[1]]
}

/// Returns the sum of absolute component values.
#[must_use]
pub fn l1_norm(v: &Vector2) -> f64 {
    v.iter().map(|c| c.abs()).sum()
}

/// Returns the determinant of a 2x2 matrix.
#[must_use]
pub fn determinant(m: &Matrix2) -> f64 {
    m[0][0] * m[1][1] - m[0][1] * m[1][0]
}

/// Returns the matrix-vector product `m · v`.
#[must_use]
pub fn mat_vec(m: &Matrix2, v: &Vector2) -> Vector2 {
    [
        m[0][0] * v[0] + m[0][1] * v[1],
        m[1][0] * v[0] + m[1][1] * v[1],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn l1_norm_ignores_signs() {
        assert_relative_eq!(l1_norm(&[31.0, -7.0]), 38.0);
        assert_relative_eq!(l1_norm(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn determinant_of_singular_matrix_is_zero() {
        assert_relative_eq!(determinant(&[[1.0, 2.0], [2.0, 4.0]]), 0.0);
        assert_relative_eq!(determinant(&[[2.0, 1.0], [1.0, 3.0]]), 5.0);
    }

    #[test]
    fn mat_vec_is_row_major() {
        let m = [[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(mat_vec(&m, &[1.0, 0.0]), [1.0, 3.0]);
        assert_eq!(mat_vec(&m, &[0.0, 1.0]), [2.0, 4.0]);
    }

    #[test]
    fn add_is_componentwise() {
        assert_eq!(add(&[1.0, -2.0], &[0.5, 0.25]), [1.5, -1.75]);
    }
}
