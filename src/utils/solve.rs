use crate::math::{Matrix, Real, Vector};

/// Solves the square system `m * x = rhs`, or returns `None` if `m` is numerically singular.
///
/// The system is factorized with a fully pivoted LU decomposition. The matrix is considered
/// singular when its smallest pivot is not larger than `rank_tol` times its largest pivot,
/// i.e., `rank_tol` is a bound on the inverse of the condition number the caller accepts.
///
/// # Panics
///
/// Panics if `m` is not square or if `rhs` does not have as many rows as `m`.
pub fn try_solve(m: Matrix, rhs: &Vector, rank_tol: Real) -> Option<Vector> {
    assert!(m.is_square(), "The system matrix must be square.");
    assert_eq!(m.nrows(), rhs.len(), "Right-hand side dimension mismatch.");

    if m.nrows() == 0 {
        return Some(Vector::zeros(0));
    }

    let lu = m.full_piv_lu();
    let pivots = lu.u().diagonal();
    let max_pivot = pivots.amax();
    let min_pivot = pivots.amin();

    // Also rejects NaN pivots.
    if !(max_pivot > 0.0) || min_pivot <= max_pivot * rank_tol {
        return None;
    }

    lu.solve(rhs)
}
