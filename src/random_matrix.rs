//! Generation of random test matrices with controlled spectra.

use crate::diagonal::embed_diagonal;
use crate::types::{Lapack, Result, Scalar, SvdCompressionError};
use ndarray::{Array, Array1, Array2};
use ndarray_linalg::QRInto;
use rand::Rng;
use rand_distr::StandardNormal;

pub trait RandomMatrix
where
    Self: Scalar + Lapack,
{
    /// Generate a random Gaussian matrix.
    ///
    /// # Arguments
    ///
    /// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
    /// * `rng`: The random number generator to use.
    fn random_gaussian<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<Self> {
        Array2::from_shape_simple_fn(dimension, || {
            Self::from_real(Self::real(rng.sample::<f64, _>(StandardNormal)))
        })
    }

    /// Generate a random matrix with orthonormal rows or columns.
    ///
    /// A Gaussian matrix is orthogonalized with a QR decomposition. If m >= n the
    /// returned matrix has orthonormal columns, otherwise it has orthonormal rows.
    fn random_orthogonal_matrix<R: Rng>(
        dimension: (usize, usize),
        rng: &mut R,
    ) -> Result<Array2<Self>> {
        let (m, n) = dimension;
        let tall = m >= n;
        let shape = if tall { (m, n) } else { (n, m) };

        let (q, _) = Self::random_gaussian(shape, rng)
            .qr_into()
            .map_err(|err| SvdCompressionError::NumericalError(format!("QR failed: {}", err)))?;

        if tall {
            Ok(q)
        } else {
            Ok(q.reversed_axes())
        }
    }

    /// Generate a random matrix with prescribed singular values.
    ///
    /// # Arguments
    ///
    /// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
    /// * `singular_values`: At most `min(rows, cols)` non-negative values.
    /// * `rng`: The random number generator to use.
    fn random_matrix_with_singular_values<R: Rng>(
        dimension: (usize, usize),
        singular_values: &[f64],
        rng: &mut R,
    ) -> Result<Array2<Self>> {
        let rank = singular_values.len();

        if rank > std::cmp::min(dimension.0, dimension.1) {
            return Err(SvdCompressionError::InvalidDimension(format!(
                "{} singular values requested for a {}x{} matrix",
                rank, dimension.0, dimension.1
            )));
        }

        let sigma_values: Array1<Self::Real> =
            singular_values.iter().map(|&item| Self::real(item)).collect();
        let sigma = embed_diagonal::<Self>(sigma_values.view(), (rank, rank))?;

        let u = Self::random_orthogonal_matrix((dimension.0, rank), rng)?;
        let vt = Self::random_orthogonal_matrix((rank, dimension.1), rng)?;

        Ok(u.dot(&sigma.dot(&vt)))
    }

    /// Generate a random approximate low-rank matrix.
    ///
    /// The singular values are logarithmically distributed between
    /// `sigma_max` and `sigma_min`.
    fn random_approximate_low_rank_matrix<R: Rng>(
        dimension: (usize, usize),
        sigma_max: f64,
        sigma_min: f64,
        rng: &mut R,
    ) -> Result<Array2<Self>> {
        assert!(
            sigma_min < sigma_max,
            "`sigma_min` must be smaller than `sigma_max`"
        );
        assert!(sigma_min > 0.0, "`sigma_min` must be positive.");

        let min_dim = std::cmp::min(dimension.0, dimension.1);
        let singvals = Array::geomspace(sigma_max, sigma_min, min_dim).ok_or_else(|| {
            SvdCompressionError::InvalidDimension("could not build singular value range".to_string())
        })?;

        Self::random_matrix_with_singular_values(dimension, &singvals.to_vec(), rng)
    }
}

impl RandomMatrix for f32 {}
impl RandomMatrix for f64 {}

/// Generate a random 8-bit single-channel image.
pub fn random_pixels<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<u8> {
    Array2::from_shape_simple_fn(dimension, || rng.gen::<u8>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svd::{SVDTraits, SVD};

    #[test]
    fn test_random_orthogonal_matrix_columns() {
        let mut rng = rand::thread_rng();
        let q = f64::random_orthogonal_matrix((30, 10), &mut rng).unwrap();

        assert_eq!(q.dim(), (30, 10));
        let gram = q.t().dot(&q) - Array2::<f64>::eye(10);
        assert!(gram.iter().all(|item| item.abs() < 1E-12));
    }

    #[test]
    fn test_random_orthogonal_matrix_rows() {
        let mut rng = rand::thread_rng();
        let q = f32::random_orthogonal_matrix((10, 30), &mut rng).unwrap();

        assert_eq!(q.dim(), (10, 30));
        let gram = q.dot(&q.t()) - Array2::<f32>::eye(10);
        assert!(gram.iter().all(|item| item.abs() < 1E-5));
    }

    #[test]
    fn test_prescribed_singular_values() {
        let mut rng = rand::thread_rng();
        let mat = f64::random_matrix_with_singular_values((8, 5), &[9.0, 4.0, 1.0], &mut rng).unwrap();

        let svd = SVD::<f64>::compute_from(mat.view()).unwrap();
        let expected = [9.0, 4.0, 1.0, 0.0, 0.0];

        for (&actual, &expected) in svd.s.iter().zip(expected.iter()) {
            assert!((actual - expected).abs() < 1E-10);
        }
    }

    #[test]
    fn test_too_many_singular_values() {
        let mut rng = rand::thread_rng();
        let result = f64::random_matrix_with_singular_values((2, 5), &[3.0, 2.0, 1.0], &mut rng);

        assert!(matches!(
            result,
            Err(SvdCompressionError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_random_pixels_shape() {
        let mut rng = rand::thread_rng();
        assert_eq!(random_pixels((7, 3), &mut rng).dim(), (7, 3));
    }
}
