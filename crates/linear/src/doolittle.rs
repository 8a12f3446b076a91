//! Doolittle LU factorization `A = L U` with unit lower triangular `L`.
use nalgebra::{
    allocator::Allocator, DefaultAllocator, Dim, Matrix, OMatrix, OVector, RealField, Storage, U1,
};
#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{
    ops::{check_rhs, check_square},
    triangular::{backward_substitution, unit_forward_substitution},
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
pub struct Doolittle<T, D>
where
    D: Dim,
    DefaultAllocator: Allocator<T, D, D>,
{
    /// unit lower triangular factor, with the ones stored on the diagonal
    l: OMatrix<T, D, D>,
    /// upper triangular factor
    u: OMatrix<T, D, D>,
}

impl<T, D> Doolittle<T, D>
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<T, D, D>,
{
    /// The unit lower triangular factor `L`, ones stored on the diagonal.
    pub fn l(&self) -> &OMatrix<T, D, D> {
        &self.l
    }

    /// The upper triangular factor `U`. A zero on its diagonal makes [`Factorization::solve`]
    /// fail.
    pub fn u(&self) -> &OMatrix<T, D, D> {
        &self.u
    }

    /// Consumes the factorization, returning `(L, U)`.
    pub fn unpack(self) -> (OMatrix<T, D, D>, OMatrix<T, D, D>) {
        (self.l, self.u)
    }
}

impl<T, D> Factorization<T, D> for Doolittle<T, D>
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<T, D, D> + Allocator<T, D>,
{
    /// Performs the LU factorization of the N by N dense matrix A without pivoting.
    ///
    /// Row `i` of U and then column `i` of L are computed in turn:
    ///
    /// ```text
    /// U[i][j] = A[i][j] - Σ_{k<i} L[i][k] U[k][j]              for j >= i
    /// L[j][i] = (A[j][i] - Σ_{k<i} L[j][k] U[k][i]) / U[i][i]   for j > i
    /// ```
    ///
    /// Rows are never exchanged, so a zero pivot `U[i][i]` with rows left below it fails with
    /// [`Error::SingularMatrix`] even if `A` itself is non-singular. A zero in the last pivot is
    /// left in `U` and only reported by [`Factorization::solve`].
    fn factor<S>(mat_a: &Matrix<T, D, D, S>) -> Result<Self, Error>
    where
        S: Storage<T, D, D>,
    {
        let n = check_square(mat_a)?;
        let (rows, cols) = mat_a.shape_generic();
        let mut l = OMatrix::<T, D, D>::identity_generic(rows, cols);
        let mut u = OMatrix::<T, D, D>::zeros_generic(rows, cols);

        for i in 0..n {
            // row i of U
            for j in i..n {
                let mut sum = T::zero();
                for k in 0..i {
                    sum += l[(i, k)] * u[(k, j)];
                }
                u[(i, j)] = mat_a[(i, j)] - sum;
            }

            if i + 1 == n {
                break;
            }

            // column i of L
            let u_ii = u[(i, i)];
            if u_ii == T::zero() {
                log::trace!("Doolittle: zero pivot at col {i}");
                return Err(Error::SingularMatrix { col: i });
            }
            for j in (i + 1)..n {
                let mut sum = T::zero();
                for k in 0..i {
                    sum += l[(j, k)] * u[(k, i)];
                }
                l[(j, i)] = (mat_a[(j, i)] - sum) / u_ii;
            }
        }

        Ok(Doolittle { l, u })
    }

    /// Solves `L y = b` (unit diagonal, no division), then `U x = y`.
    fn solve<S>(&self, b: &Matrix<T, D, U1, S>) -> Result<OVector<T, D>, Error>
    where
        S: Storage<T, D>,
    {
        let y = unit_forward_substitution(&self.l, b)?;
        backward_substitution(&self.u, &y)
    }

    fn method(&self) -> Method {
        Method::Doolittle
    }
}

/// Solves `A x = b` by Doolittle LU factorization, without pivoting.
pub fn doolittle_solve<T, D, SA, SB>(
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
    Doolittle::factor(mat_a)?.solve(b)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{matrix, vector, DMatrix, DVector};

    use super::*;
    use crate::multiply;

    #[test]
    fn test_factor() {
        let mat_a = matrix![
            1.0, -1.0, 3.0, 2.0;
            -1.0, 5.0, -5.0, -2.0;
            3.0, -5.0, 19.0, 3.0;
            2.0, -2.0, 3.0, 21.0;
        ];
        let lu = Doolittle::factor(&mat_a).unwrap();
        assert_eq!(lu.method(), Method::Doolittle);

        let expect_l = matrix![
            1.0, 0.0, 0.0, 0.0;
            -1.0, 1.0, 0.0, 0.0;
            3.0, -0.5, 1.0, 0.0;
            2.0, 0.0, -1.0 / 3.0, 1.0;
        ];
        let expect_u = matrix![
            1.0, -1.0, 3.0, 2.0;
            0.0, 4.0, -2.0, 0.0;
            0.0, 0.0, 9.0, -3.0;
            0.0, 0.0, 0.0, 16.0;
        ];
        assert_relative_eq!(*lu.l(), expect_l, max_relative = 1e-12);
        assert_relative_eq!(*lu.u(), expect_u, max_relative = 1e-12);

        let (l, u) = lu.unpack();
        assert_relative_eq!(multiply(&l, &u).unwrap(), mat_a, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_symmetric() {
        let mat_a = matrix![
            1.0, -1.0, 3.0, 2.0;
            -1.0, 5.0, -5.0, -2.0;
            3.0, -5.0, 19.0, 3.0;
            2.0, -2.0, 3.0, 21.0;
        ];
        let b = vector![15.0, -35.0, 94.0, 1.0];
        let x = doolittle_solve(&mat_a, &b).unwrap();
        assert_relative_eq!(x, vector![2.0, -3.0, 4.0, -1.0], epsilon = 1e-12);
    }

    #[test]
    fn test_solve_nonsymmetric() {
        let mat_a = matrix![
            4.0, 3.0;
            6.0, 3.0;
        ];
        let x = doolittle_solve(&mat_a, &vector![10.0, 12.0]).unwrap();
        assert_relative_eq!(x, vector![1.0, 2.0], epsilon = 1e-12);

        let mat_a =
            DMatrix::from_row_slice(3, 3, &[2.0, -1.0, 0.0, 4.0, 1.0, 3.0, -2.0, 5.0, 1.0]);
        let expected = DVector::from_vec(vec![0.5, -1.0, 2.0]);
        let b = multiply(&mat_a, &expected).unwrap();
        let x = doolittle_solve(&mat_a, &b).unwrap();
        assert_relative_eq!(x, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_indefinite() {
        let mat_a = matrix![
            1.0, 2.0;
            2.0, 1.0;
        ];
        let x = doolittle_solve(&mat_a, &vector![3.0, 3.0]).unwrap();
        assert_relative_eq!(x, vector![1.0, 1.0], epsilon = 1e-12);
    }

    /// This system is well posed, but the third pivot vanishes without row exchanges.
    #[test]
    fn test_no_pivoting() {
        let mat_a = matrix![
            5.0, 0.0, 0.0, 1.0;
            2.0, 2.0, 2.0, 1.0;
            4.0, 5.0, 5.0, 5.0;
            1.0, 6.0, 4.0, 5.0;
        ];
        let b = vector![9.0, 16.0, 49.0, 45.0];
        assert_eq!(
            doolittle_solve(&mat_a, &b),
            Err(Error::SingularMatrix { col: 2 })
        );
    }

    #[test]
    fn test_zero_last_pivot() {
        let mat_a = matrix![
            1.0, 2.0;
            2.0, 4.0;
        ];
        let lu = Doolittle::factor(&mat_a).unwrap();
        assert_eq!(lu.u()[(1, 1)], 0.0);
        assert_eq!(
            lu.solve(&vector![1.0, 2.0]),
            Err(Error::SingularMatrix { col: 1 })
        );

        assert_eq!(
            doolittle_solve(&matrix![0.0], &vector![1.0]),
            Err(Error::SingularMatrix { col: 0 })
        );
    }

    #[cfg(feature = "serde-serialize")]
    #[test]
    fn test_serde() {
        let mat_a = matrix![
            4.0, 3.0;
            6.0, 3.0;
        ];
        let lu = Doolittle::factor(&mat_a).unwrap();
        let json = serde_json::to_string(&lu).unwrap();
        let restored: Doolittle<f64, nalgebra::U2> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.l(), lu.l());
        assert_eq!(restored.u(), lu.u());
        assert_eq!(
            restored.solve(&vector![10.0, 12.0]).unwrap(),
            lu.solve(&vector![10.0, 12.0]).unwrap()
        );
    }

    #[test]
    fn test_dimension_mismatch() {
        let mat_a = DMatrix::<f64>::identity(3, 3);
        let b = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            doolittle_solve(&mat_a, &b),
            Err(Error::DimensionMismatch {
                expected: (3, 1),
                found: (4, 1)
            })
        );
    }
}
