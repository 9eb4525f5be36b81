//! Embedding of singular values into a rectangular diagonal matrix.
//!
//! For a vector $s$ of length $\ell$ and a target shape $(m, n)$ with $\ell\leq\min(m, n)$
//! the embedding is the $m\times n$ matrix $\Sigma$ with $\Sigma_{ii} = s_i$ for $i < \ell$
//! and zeros everywhere else.

use crate::types::{Result, Scalar, SvdCompressionError};
use ndarray::{s, Array2, ArrayView1};

/// Embed `singular_values` on the diagonal of a zero matrix of shape `shape`.
///
/// # Arguments
///
/// * `singular_values`: The values to place on the diagonal, starting at `(0, 0)`.
/// * `shape`: Tuple (rows, cols) of the resulting matrix.
///
/// Returns an `InvalidDimension` error if there are more singular values
/// than diagonal positions.
pub fn embed_diagonal<A: Scalar>(
    singular_values: ArrayView1<A::Real>,
    shape: (usize, usize),
) -> Result<Array2<A>> {
    let nvalues = singular_values.len();
    let diag_len = std::cmp::min(shape.0, shape.1);

    if nvalues > diag_len {
        return Err(SvdCompressionError::InvalidDimension(format!(
            "{} singular values do not fit on the diagonal of a {}x{} matrix",
            nvalues, shape.0, shape.1
        )));
    }

    let mut sigma = Array2::<A>::zeros(shape);
    sigma
        .slice_mut(s![0..nvalues, 0..nvalues])
        .diag_mut()
        .assign(&singular_values.mapv(A::from_real));

    Ok(sigma)
}
