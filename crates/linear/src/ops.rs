//! Plain dense matrix helpers, and the shape checks shared by the solvers.
use nalgebra::{allocator::Allocator, DefaultAllocator, Dim, Matrix, OMatrix, RealField, Storage};

use crate::Error;

/// Returns the `c x r` transpose of an `r x c` matrix.
pub fn transpose<T, R, C, S>(m: &Matrix<T, R, C, S>) -> OMatrix<T, C, R>
where
    T: RealField + Copy,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
    DefaultAllocator: Allocator<T, C, R>,
{
    let (rows, cols) = m.shape_generic();
    OMatrix::from_fn_generic(cols, rows, |i, j| m[(j, i)])
}

/// Dense product `a * b` using the textbook triple loop.
///
/// Fails with [`Error::DimensionMismatch`] unless `a.ncols() == b.nrows()`.
pub fn multiply<T, R1, C1, R2, C2, SA, SB>(
    a: &Matrix<T, R1, C1, SA>,
    b: &Matrix<T, R2, C2, SB>,
) -> Result<OMatrix<T, R1, C2>, Error>
where
    T: RealField + Copy,
    R1: Dim,
    C1: Dim,
    R2: Dim,
    C2: Dim,
    SA: Storage<T, R1, C1>,
    SB: Storage<T, R2, C2>,
    DefaultAllocator: Allocator<T, R1, C2>,
{
    if a.ncols() != b.nrows() {
        return Err(Error::DimensionMismatch {
            expected: (a.ncols(), b.ncols()),
            found: b.shape(),
        });
    }

    let (rows, _) = a.shape_generic();
    let (_, cols) = b.shape_generic();
    let mut c = OMatrix::zeros_generic(rows, cols);

    for i in 0..a.nrows() {
        for j in 0..b.ncols() {
            let mut sum = T::zero();
            for k in 0..a.ncols() {
                sum += a[(i, k)] * b[(k, j)];
            }
            c[(i, j)] = sum;
        }
    }

    Ok(c)
}

/// Returns `n` for an `n x n` matrix.
pub(crate) fn check_square<T, R, C, S>(m: &Matrix<T, R, C, S>) -> Result<usize, Error>
where
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
{
    let (rows, cols) = m.shape();
    if rows != cols {
        return Err(Error::DimensionMismatch {
            expected: (rows, rows),
            found: (rows, cols),
        });
    }
    Ok(rows)
}

/// Checks that a right-hand side has exactly `n` entries.
pub(crate) fn check_rhs<T, R, C, S>(n: usize, b: &Matrix<T, R, C, S>) -> Result<(), Error>
where
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
{
    if b.shape() != (n, 1) {
        return Err(Error::DimensionMismatch {
            expected: (n, 1),
            found: b.shape(),
        });
    }
    Ok(())
}
