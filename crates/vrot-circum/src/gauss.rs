//! Gaussian elimination on a 3x4 augmented matrix.

use tracing::trace;
use vrot_math::{Tolerance, Vec3};

use crate::error::{CircumError, Result};

/// Three equations `a·x + b·y + c·z = d`, one row `[a, b, c, d]` each.
pub type Augmented3 = [[f64; 4]; 3];

/// Solve a 3x3 linear system with the default pivot tolerance.
pub fn solve_linear3(m: Augmented3) -> Result<Vec3> {
    solve_linear3_with(m, &Tolerance::DEFAULT)
}

/// Solve a 3x3 linear system by Gaussian elimination with partial pivoting.
///
/// For each column the remaining row with the largest-magnitude entry is
/// swapped into pivot position before eliminating below it. Fails with
/// [`CircumError::SingularSystem`] as soon as the best pivot is below
/// `tol.pivot`.
pub fn solve_linear3_with(mut m: Augmented3, tol: &Tolerance) -> Result<Vec3> {
    for col in 0..3 {
        let pivot_row = (col + 1..3).fold(col, |best, r| {
            if m[r][col].abs() > m[best][col].abs() {
                r
            } else {
                best
            }
        });
        m.swap(col, pivot_row);

        let p = m[col][col];
        if !p.is_finite() || tol.is_singular_pivot(p) {
            return Err(CircumError::SingularSystem {
                column: col,
                pivot: p.abs(),
            });
        }
        trace!(column = col, row = pivot_row, pivot = p, "selected pivot");

        m[col][col] = 1.0;
        for j in col + 1..4 {
            m[col][j] /= p;
        }
        for r in col + 1..3 {
            let q = m[r][col];
            m[r][col] = 0.0;
            for j in col + 1..4 {
                m[r][j] -= q * m[col][j];
            }
        }
    }

    let mut x = [0.0; 3];
    for i in (0..3).rev() {
        let mut v = m[i][3];
        for j in i + 1..3 {
            v -= m[i][j] * x[j];
        }
        x[i] = v;
    }
    Ok(Vec3::new(x[0], x[1], x[2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_simple_system() {
        // x + y + z = 6, 2y + 5z = -4, 2x + 5y - z = 27
        let m = [
            [1.0, 1.0, 1.0, 6.0],
            [0.0, 2.0, 5.0, -4.0],
            [2.0, 5.0, -1.0, 27.0],
        ];
        let x = solve_linear3(m).unwrap();
        assert_abs_diff_eq!(x, Vec3::new(5.0, 3.0, -2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_leading_coefficient_needs_pivoting() {
        let m = [
            [0.0, 1.0, 0.0, 2.0],
            [0.0, 0.0, 1.0, 3.0],
            [1.0, 0.0, 0.0, 1.0],
        ];
        let x = solve_linear3(m).unwrap();
        assert_abs_diff_eq!(x, Vec3::new(1.0, 2.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_tiny_pivot_stays_accurate() {
        // Without pivoting the 1e-8 leading entry wrecks precision.
        let m = [
            [1e-8, 1.0, 0.0, 1.0],
            [1.0, 1.0, 0.0, 2.0],
            [0.0, 0.0, 1.0, 1.0],
        ];
        let x = solve_linear3(m).unwrap();
        assert_abs_diff_eq!(x.x, 1.0, epsilon = 1e-7);
        assert_abs_diff_eq!(x.y, 1.0, epsilon = 1e-7);
        assert_abs_diff_eq!(x.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_singular_system_fails() {
        let m = [
            [1.0, 2.0, 3.0, 1.0],
            [2.0, 4.0, 6.0, 2.0],
            [0.0, 1.0, 1.0, 0.0],
        ];
        let err = solve_linear3(m).unwrap_err();
        assert!(matches!(err, CircumError::SingularSystem { column: 2, .. }));
    }

    #[test]
    fn test_zero_matrix_fails_on_first_column() {
        let err = solve_linear3([[0.0; 4]; 3]).unwrap_err();
        assert_eq!(
            err,
            CircumError::SingularSystem {
                column: 0,
                pivot: 0.0
            }
        );
    }

    #[test]
    fn test_custom_tolerance() {
        let m = [
            [1e-6, 0.0, 0.0, 1e-6],
            [0.0, 1.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 1.0],
        ];
        assert!(solve_linear3(m).is_ok());
        let strict = Tolerance {
            pivot: 1e-3,
            ..Tolerance::DEFAULT
        };
        assert!(solve_linear3_with(m, &strict).is_err());
    }
}
