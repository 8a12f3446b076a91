//! Forward and backward substitution on triangular systems.
//!
//! Only the relevant triangle of the matrix is read; entries on the other side of the diagonal
//! are ignored rather than checked.
use nalgebra::{
    allocator::Allocator, DefaultAllocator, Dim, Matrix, OVector, RealField, Storage, U1,
};

use crate::{
    ops::{check_rhs, check_square},
    Error,
};

/// Solves `L y = b` for lower triangular `L`.
///
/// Fails with [`Error::SingularMatrix`] at the first zero on the diagonal of `L`.
pub fn forward_substitution<T, D, SA, SB>(
    mat_l: &Matrix<T, D, D, SA>,
    b: &Matrix<T, D, U1, SB>,
) -> Result<OVector<T, D>, Error>
where
    T: RealField + Copy,
    D: Dim,
    SA: Storage<T, D, D>,
    SB: Storage<T, D>,
    DefaultAllocator: Allocator<T, D>,
{
    let n = check_square(mat_l)?;
    check_rhs(n, b)?;

    let mut y = b.clone_owned();
    for i in 0..n {
        let l_ii = mat_l[(i, i)];
        if l_ii == T::zero() {
            return Err(Error::SingularMatrix { col: i });
        }
        for j in 0..i {
            let y_j = y[j];
            y[i] -= mat_l[(i, j)] * y_j;
        }
        y[i] /= l_ii;
    }

    Ok(y)
}

/// Solves `L y = b` where `L` has an implicit unit diagonal, as produced by a Doolittle
/// factorization. The stored diagonal is never read, so this cannot fail on singularity.
pub fn unit_forward_substitution<T, D, SA, SB>(
    mat_l: &Matrix<T, D, D, SA>,
    b: &Matrix<T, D, U1, SB>,
) -> Result<OVector<T, D>, Error>
where
    T: RealField + Copy,
    D: Dim,
    SA: Storage<T, D, D>,
    SB: Storage<T, D>,
    DefaultAllocator: Allocator<T, D>,
{
    let n = check_square(mat_l)?;
    check_rhs(n, b)?;

    let mut y = b.clone_owned();
    for i in 0..n {
        for j in 0..i {
            let y_j = y[j];
            y[i] -= mat_l[(i, j)] * y_j;
        }
    }

    Ok(y)
}

/// Solves `U x = y` for upper triangular `U`, from the last row up.
///
/// Fails with [`Error::SingularMatrix`] at the first zero on the diagonal of `U` (counting from
/// the bottom).
pub fn backward_substitution<T, D, SA, SB>(
    mat_u: &Matrix<T, D, D, SA>,
    y: &Matrix<T, D, U1, SB>,
) -> Result<OVector<T, D>, Error>
where
    T: RealField + Copy,
    D: Dim,
    SA: Storage<T, D, D>,
    SB: Storage<T, D>,
    DefaultAllocator: Allocator<T, D>,
{
    let n = check_square(mat_u)?;
    check_rhs(n, y)?;

    let mut x = y.clone_owned();
    for i in (0..n).rev() {
        let u_ii = mat_u[(i, i)];
        if u_ii == T::zero() {
            return Err(Error::SingularMatrix { col: i });
        }
        for j in (i + 1)..n {
            let x_j = x[j];
            x[i] -= mat_u[(i, j)] * x_j;
        }
        x[i] /= u_ii;
    }

    Ok(x)
}
