//! Cholesky factorization `A = L Lᵀ` of a symmetric positive definite matrix.
use nalgebra::{
    allocator::Allocator, DefaultAllocator, Dim, Matrix, OMatrix, OVector, RealField, Storage, U1,
};
#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{
    ops::{check_rhs, check_square, transpose},
    triangular::{backward_substitution, forward_substitution},
    Error, Factorization, Method,
};

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(bound(serialize = "OMatrix<T, D, D>: Serialize"))
)]
#[cfg_attr(
    feature = "serde-serialize",
    serde(bound(deserialize = "OMatrix<T, D, D>: Deserialize<'de>"))
)]
#[derive(Clone, Debug)]
pub struct Cholesky<T, D>
where
    D: Dim,
    DefaultAllocator: Allocator<T, D, D>,
{
    /// lower triangular factor
    l: OMatrix<T, D, D>,
}

impl<T, D> Cholesky<T, D>
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<T, D, D>,
{
    /// The lower triangular factor `L`. Entries above the diagonal are zero.
    pub fn l(&self) -> &OMatrix<T, D, D> {
        &self.l
    }

    /// Consumes the factorization, returning `L`.
    pub fn unpack(self) -> OMatrix<T, D, D> {
        self.l
    }
}

impl<T, D> Factorization<T, D> for Cholesky<T, D>
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<T, D, D> + Allocator<T, D>,
{
    /// Runs the Cholesky recurrence over the lower triangle of `mat_a`, one row at a time:
    ///
    /// ```text
    /// L[i][j] = (A[i][j] - Σ_{k<j} L[i][k] L[j][k]) / L[j][j]   for j < i
    /// L[i][i] = sqrt(A[i][i] - Σ_{k<i} L[i][k]²)
    /// ```
    ///
    /// The upper triangle of `mat_a` is never read, so symmetry is the caller's concern. Fails
    /// with [`Error::NumericDomain`] if a radicand is negative (or NaN) or a divisor `L[j][j]` is
    /// zero.
    fn factor<S>(mat_a: &Matrix<T, D, D, S>) -> Result<Self, Error>
    where
        S: Storage<T, D, D>,
    {
        let n = check_square(mat_a)?;
        let (rows, cols) = mat_a.shape_generic();
        let mut l = OMatrix::<T, D, D>::zeros_generic(rows, cols);

        for i in 0..n {
            for j in 0..=i {
                let mut sum = T::zero();
                for k in 0..j {
                    sum += l[(i, k)] * l[(j, k)];
                }

                if i == j {
                    let radicand = mat_a[(i, i)] - sum;
                    // also rejects NaN
                    if !(radicand >= T::zero()) {
                        log::trace!("Cholesky: negative radicand {:?} at col {}", radicand, i);
                        return Err(Error::NumericDomain { col: i });
                    }
                    l[(i, i)] = radicand.sqrt();
                } else {
                    let l_jj = l[(j, j)];
                    if l_jj == T::zero() {
                        log::trace!("Cholesky: zero divisor L[{j}][{j}]");
                        return Err(Error::NumericDomain { col: j });
                    }
                    l[(i, j)] = (mat_a[(i, j)] - sum) / l_jj;
                }
            }
        }

        Ok(Cholesky { l })
    }

    /// Solves `L y = b`, then `Lᵀ x = y`.
    fn solve<S>(&self, b: &Matrix<T, D, U1, S>) -> Result<OVector<T, D>, Error>
    where
        S: Storage<T, D>,
    {
        let y = forward_substitution(&self.l, b)?;
        let lt = transpose(&self.l);
        backward_substitution(&lt, &y)
    }

    fn method(&self) -> Method {
        Method::Cholesky
    }
}

/// Solves `A x = b` by Cholesky factorization.
///
/// `mat_a` is expected to be symmetric positive definite; this is not checked beyond what the
/// factorization itself trips over (see [`is_positive_definite`](crate::is_positive_definite)).
pub fn cholesky_solve<T, D, SA, SB>(
    mat_a: &Matrix<T, D, D, SA>,
    b: &Matrix<T, D, U1, SB>,
) -> Result<OVector<T, D>, Error>
where
    T: RealField + Copy,
    D: Dim,
    SA: Storage<T, D, D>,
    SB: Storage<T, D>,
    DefaultAllocator: Allocator<T, D, D> + Allocator<T, D>,
{
    check_rhs(check_square(mat_a)?, b)?;
    Cholesky::factor(mat_a)?.solve(b)
}
