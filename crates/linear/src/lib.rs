//! Direct solvers for dense square systems `A x = b`.
//!
//! [`solve`] inspects `A`: a symmetric positive definite matrix is factored with Cholesky
//! (`A = L Lᵀ`), anything else with Doolittle LU (`A = L U`, `L` unit lower triangular). Neither
//! factorization pivots, so a general matrix whose leading minors vanish fails with
//! [`Error::SingularMatrix`] even when it is non-singular.
mod cholesky;
mod dispatch;
mod doolittle;
mod ops;
mod properties;
mod traits;
mod triangular;

pub use cholesky::{cholesky_solve, Cholesky};
pub use dispatch::{solve, Method};
pub use doolittle::{doolittle_solve, Doolittle};
pub use ops::{multiply, transpose};
pub use properties::{is_positive_definite, is_symmetric};
pub use traits::Factorization;
pub use triangular::{backward_substitution, forward_substitution, unit_forward_substitution};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Dimension mismatch: expected shape {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("A singular matrix was encountered (zero pivot in col {col})")]
    SingularMatrix { col: usize },

    /// The Cholesky recurrence needed the square root of a negative (or NaN) radicand, or a
    /// division by a zero diagonal entry. The matrix is not positive definite.
    #[error("Cholesky factorization undefined at col {col}; matrix is not positive definite")]
    NumericDomain { col: usize },
}
