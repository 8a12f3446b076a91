//! Structural tests used to choose a factorization.
use nalgebra::{allocator::Allocator, DefaultAllocator, Dim, Matrix, RealField, Storage};

use crate::{Cholesky, Error, Factorization};

/// Returns `true` iff `m[(i, j)] == m[(j, i)]` for every `i, j`.
///
/// The comparison is exact, with no tolerance. A non-square matrix is never symmetric.
pub fn is_symmetric<T, R, C, S>(m: &Matrix<T, R, C, S>) -> bool
where
    T: RealField + Copy,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
{
    let (rows, cols) = m.shape();
    if rows != cols {
        return false;
    }

    // includes the diagonal, so a NaN anywhere makes the matrix asymmetric
    (0..rows).all(|i| (0..=i).all(|j| m[(i, j)] == m[(j, i)]))
}

/// Returns `true` iff a trial Cholesky factorization of `m` runs to completion and leaves a
/// strictly positive diagonal in `L`.
///
/// A negative radicand or a zero divisor during the trial makes the answer `false`; neither is
/// reported as an error. Only the lower triangle of `m` is read, so callers that need a genuine
/// SPD test should check [`is_symmetric`] as well.
pub fn is_positive_definite<T, D, S>(m: &Matrix<T, D, D, S>) -> bool
where
    T: RealField + Copy,
    D: Dim,
    S: Storage<T, D, D>,
    DefaultAllocator: Allocator<T, D, D> + Allocator<T, D>,
{
    match Cholesky::factor(m) {
        Ok(chol) => chol.l().diagonal().iter().all(|&l_ii| l_ii > T::zero()),
        Err(Error::NumericDomain { col }) => {
            log::trace!("not positive definite: Cholesky breaks down at col {col}");
            false
        }
        Err(Error::DimensionMismatch { .. } | Error::SingularMatrix { .. }) => false,
    }
}
