//! Chooses between Cholesky and Doolittle for a given matrix.
use nalgebra::{
    allocator::Allocator, DefaultAllocator, Dim, Matrix, OVector, RealField, Storage, U1,
};
#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{
    ops::{check_rhs, check_square},
    properties::{is_positive_definite, is_symmetric},
    Cholesky, Doolittle, Error, Factorization,
};

/// The direct method used to solve a system.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// `A = L Lᵀ`, for symmetric positive definite `A`.
    Cholesky,
    /// `A = L U` with unit lower triangular `L`, no pivoting.
    Doolittle,
}

impl Method {
    /// Picks [`Method::Cholesky`] if `mat_a` is symmetric and positive definite, and
    /// [`Method::Doolittle`] otherwise.
    pub fn select<T, D, S>(mat_a: &Matrix<T, D, D, S>) -> Self
    where
        T: RealField + Copy,
        D: Dim,
        S: Storage<T, D, D>,
        DefaultAllocator: Allocator<T, D, D> + Allocator<T, D>,
    {
        if is_symmetric(mat_a) && is_positive_definite(mat_a) {
            Method::Cholesky
        } else {
            Method::Doolittle
        }
    }

    /// Solves `A x = b` with this method, regardless of the structure of `mat_a`.
    pub fn solve<T, D, SA, SB>(
        self,
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
        match self {
            Method::Cholesky => Cholesky::factor(mat_a)?.solve(b),
            Method::Doolittle => Doolittle::factor(mat_a)?.solve(b),
        }
    }
}

/// Solves the dense square system `A x = b`.
///
/// Symmetric positive definite matrices go through Cholesky, everything else through Doolittle
/// LU. The chosen method is logged at `debug` level.
///
/// ## Errors
/// * [`Error::DimensionMismatch`] if `mat_a` is not square or `b` does not have one entry per row.
/// * [`Error::SingularMatrix`] if a pivot vanishes. Since no rows are exchanged this can happen
///   for non-singular matrices too.
pub fn solve<T, D, SA, SB>(
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
    let method = Method::select(mat_a);
    log::debug!(
        "solving {}x{} system with {:?}",
        mat_a.nrows(),
        mat_a.ncols(),
        method
    );
    method.solve(mat_a, b)
}
