//! Data structures and traits for the singular value decomposition.
//!
//! The full SVD of a real matrix $A\in\mathbb{R}^{m\times n}$ is $A = U\Sigma V^T$ with
//! orthogonal $U\in\mathbb{R}^{m\times m}$, $V\in\mathbb{R}^{n\times n}$ and a rectangular
//! diagonal $\Sigma$ whose diagonal holds the $\min(m, n)$ singular values
//! $\sigma_1\geq\sigma_2\geq\dots\geq 0$. We store $V^T$ in the field `vt`.
//!
//! Keeping only the first $k$ columns of $U$, the first $k$ singular values and the first
//! $k$ rows of $V^T$ gives the rank $k$ approximation $A_k$. By the Eckart-Young theorem it is
//! the best rank $k$ approximation in the Frobenius norm and the error is
//! $\|A - A_k\|_F = \sqrt{\sum_{i>k}\sigma_i^2}$.
//!
//! The rank can either be given directly or determined by a relative tolerance, in which case
//! all singular values with $\sigma_i / \sigma_1 \geq tol$ are kept.

use crate::diagonal::embed_diagonal;
use crate::storage;
use crate::types::{Lapack, Result, Scalar, SvdCompressionError};
use crate::CompressionType;
use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2, Axis, Zip};
use ndarray_linalg::{JobSvd, SVDDCInto};
use num::{ToPrimitive, Zero};

#[derive(Clone, Debug)]
pub struct SVD<A: Scalar> {
    /// The U matrix
    pub u: Array2<A>,
    /// The array of singular values in descending order
    pub s: Array1<A::Real>,
    /// The transpose of the V matrix
    pub vt: Array2<A>,
}

/// Traits for the SVD
pub trait SVDTraits {
    type A: Scalar + Lapack;

    /// Number of rows of the decomposed matrix
    fn nrows(&self) -> usize {
        self.get_u().nrows()
    }

    /// Number of columns of the decomposed matrix
    fn ncols(&self) -> usize {
        self.get_vt().ncols()
    }

    /// Number of singular values kept
    fn rank(&self) -> usize {
        self.get_s().len()
    }

    /// Check that `k` is a valid truncation rank, i.e. `1 <= k <= self.rank()`.
    fn check_rank(&self, k: usize) -> Result<()> {
        if k == 0 || k > self.rank() {
            Err(SvdCompressionError::InvalidDimension(format!(
                "rank {} requested for a {}x{} matrix with {} singular values",
                k,
                self.nrows(),
                self.ncols(),
                self.rank()
            )))
        } else {
            Ok(())
        }
    }

    /// Convert the SVD to a matrix
    fn to_mat(&self) -> Array2<Self::A> {
        let rank = self.rank();
        let mut scaled_vt = self.get_vt().slice(s![0..rank, ..]).to_owned();

        Zip::from(scaled_vt.axis_iter_mut(Axis(0)))
            .and(self.get_s())
            .for_each(|mut row, &s_elem| row.map_inplace(|item| *item *= Self::A::from_real(s_elem)));

        self.get_u().slice(s![.., 0..rank]).dot(&scaled_vt)
    }

    /// Keep the leading `k` singular triplets.
    fn truncate(&self, k: usize) -> Result<SVD<Self::A>> {
        self.check_rank(k)?;

        Ok(SVD {
            u: self.get_u().slice(s![.., 0..k]).to_owned(),
            s: self.get_s().slice(s![0..k]).to_owned(),
            vt: self.get_vt().slice(s![0..k, ..]).to_owned(),
        })
    }

    /// Reconstruct the rank `k` approximation $U_k\Sigma_k V_k^T$.
    ///
    /// The result has the shape of the decomposed matrix. A rank of zero or a rank
    /// larger than the number of singular values is an `InvalidDimension` error.
    fn truncated_reconstruct(&self, k: usize) -> Result<Array2<Self::A>> {
        self.check_rank(k)?;

        let uk = self.get_u().slice_move(s![.., 0..k]);
        let sk = embed_diagonal::<Self::A>(self.get_s().slice_move(s![0..k]), (k, k))?;
        let vk = self.get_vt().slice_move(s![0..k, ..]);

        Ok(uk.dot(&sk).dot(&vk))
    }

    /// Frobenius norm error of the rank `k` approximation.
    fn truncation_error(&self, k: usize) -> Result<<Self::A as Scalar>::Real> {
        self.check_rank(k)?;

        let tail = self.get_s().slice_move(s![k..]);
        let squared_sum = tail
            .iter()
            .fold(<<Self::A as Scalar>::Real as Zero>::zero(), |acc, &item| {
                acc + item * item
            });

        Ok(squared_sum.sqrt())
    }

    /// Storage ratio of the decomposition at its current rank.
    fn compression_ratio(&self) -> f64 {
        storage::compression_ratio(self.nrows(), self.ncols(), self.rank())
    }

    /// Compress by giving a target rank
    fn compress_svd_rank(&self, max_rank: usize) -> Result<SVD<Self::A>> {
        self.truncate(max_rank)
    }

    /// Compress by specifying a relative tolerance
    ///
    /// A tolerance outside of `[0, 1)`, NaN included, is an `InvalidTolerance` error.
    fn compress_svd_tolerance(&self, tol: f64) -> Result<SVD<Self::A>> {
        if !(0.0..1.0).contains(&tol) {
            return Err(SvdCompressionError::InvalidTolerance(tol));
        }

        let s = self.get_s();
        if s.is_empty() {
            return Err(SvdCompressionError::CompressionError);
        }

        let s_max = s[0];
        if s_max.is_zero() {
            // A zero matrix is represented exactly by any single triplet.
            return self.truncate(1);
        }

        let pos = s
            .iter()
            .position(|&item| (item / s_max).to_f64().map_or(false, |ratio| ratio < tol));

        match pos {
            Some(index) => self.truncate(index),
            None => Err(SvdCompressionError::CompressionError),
        }
    }

    /// Compress the SVD by rank or tolerance
    fn compress(&self, compression_type: CompressionType) -> Result<SVD<Self::A>> {
        match compression_type {
            CompressionType::ADAPTIVE(tol) => self.compress_svd_tolerance(tol),
            CompressionType::RANK(rank) => self.compress_svd_rank(rank),
        }
    }

    /// Compute the full SVD of a given array
    ///
    /// Non-finite entries and LAPACK failures are reported as `NumericalError`.
    fn compute_from(arr: ArrayView2<Self::A>) -> Result<SVD<Self::A>>;

    /// Return the U matrix
    fn get_u(&self) -> ArrayView2<Self::A>;

    /// Return the singular values
    fn get_s(&self) -> ArrayView1<<Self::A as Scalar>::Real>;

    /// Return the Vt matrix
    fn get_vt(&self) -> ArrayView2<Self::A>;
}

macro_rules! svd_impl {
    ($scalar:ty) => {
        impl SVDTraits for SVD<$scalar> {
            type A = $scalar;

            fn get_u(&self) -> ArrayView2<Self::A> {
                self.u.view()
            }

            fn get_s(&self) -> ArrayView1<<Self::A as Scalar>::Real> {
                self.s.view()
            }

            fn get_vt(&self) -> ArrayView2<Self::A> {
                self.vt.view()
            }

            fn compute_from(arr: ArrayView2<Self::A>) -> Result<SVD<Self::A>> {
                if arr.is_empty() {
                    return Err(SvdCompressionError::InvalidDimension(format!(
                        "cannot decompose an empty {}x{} matrix",
                        arr.nrows(),
                        arr.ncols()
                    )));
                }

                if let Some(((row, col), value)) =
                    arr.indexed_iter().find(|(_, item)| !item.is_finite())
                {
                    return Err(SvdCompressionError::NumericalError(format!(
                        "non-finite entry {} at ({}, {})",
                        value, row, col
                    )));
                }

                tracing::debug!(
                    nrows = arr.nrows(),
                    ncols = arr.ncols(),
                    "computing full SVD"
                );

                let (u, s, vt) = arr
                    .to_owned()
                    .svddc_into(JobSvd::All)
                    .map_err(|err| {
                        SvdCompressionError::NumericalError(format!("SVD computation failed: {}", err))
                    })?;

                match (u, vt) {
                    (Some(u), Some(vt)) => Ok(SVD { u, s, vt }),
                    _ => Err(SvdCompressionError::NumericalError(
                        "SVD computation returned no singular vectors".to_string(),
                    )),
                }
            }
        }
    };
}

svd_impl!(f32);
svd_impl!(f64);
