use nalgebra::{
    allocator::Allocator, DefaultAllocator, Dim, Matrix, OVector, RealField, Storage, U1,
};

use crate::{Error, Method};

/// A factored square matrix that can solve `A x = b` for any number of right-hand sides.
pub trait Factorization<T, D>
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<T, D, D> + Allocator<T, D>,
{
    /// Factors the matrix `mat_a`. The input is borrowed and left untouched; the factors are
    /// freshly allocated.
    ///
    /// No pivoting is performed by any implementation, so the outcome depends only on the
    /// leading principal minors of `mat_a`.
    fn factor<S>(mat_a: &Matrix<T, D, D, S>) -> Result<Self, Error>
    where
        Self: Sized,
        S: Storage<T, D, D>;

    /// solves a linear system Ax = b using the stored factors.
    ///
    /// ## Arguments
    /// * `b` the linear system right-hand side, of length `n`.
    fn solve<S>(&self, b: &Matrix<T, D, U1, S>) -> Result<OVector<T, D>, Error>
    where
        S: Storage<T, D>;

    /// The method this factorization implements.
    fn method(&self) -> Method;
}
