//! Error taxonomy and shared numeric helpers.

use ndarray::ArrayView2;
use ndarray_linalg::Norm;
use num::Zero;
use thiserror::Error;

pub use ndarray_linalg::{Lapack, Scalar};

#[derive(Error, Debug)]
pub enum SvdCompressionError {
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),
    #[error("Numerical error: {0}")]
    NumericalError(String),
    #[error("{count} reconstructed values outside of the pixel range [0, 255] (min {min}, max {max})")]
    RangeOverflow { count: usize, min: f64, max: f64 },
    #[error("Invalid tolerance {0}, require 0 <= tol < 1")]
    InvalidTolerance(f64),
    #[error("Could not compress to desired tolerance")]
    CompressionError,
    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, SvdCompressionError>;

pub trait RelDiff {
    type A: Scalar;

    /// Return the relative Frobenius norm difference of `first` and `second`.
    ///
    /// If `second` has zero norm the absolute difference is returned.
    fn rel_diff_fro(
        first: ArrayView2<Self::A>,
        second: ArrayView2<Self::A>,
    ) -> <<Self as RelDiff>::A as Scalar>::Real;
}

macro_rules! rel_diff_impl {
    ($scalar:ty) => {
        impl RelDiff for $scalar {
            type A = $scalar;
            fn rel_diff_fro(
                first: ArrayView2<Self::A>,
                second: ArrayView2<Self::A>,
            ) -> <<Self as RelDiff>::A as Scalar>::Real {
                // The l2 norm of a 2d array is taken over all entries.
                let diff = (&first - &second).norm_l2();
                let reference = second.norm_l2();
                if reference.is_zero() {
                    diff
                } else {
                    diff / reference
                }
            }
        }
    };
}

rel_diff_impl!(f32);
rel_diff_impl!(f64);

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_rel_diff_fro_against_zero_reference_is_absolute() {
        let first = arr2(&[[3.0_f64, 0.0], [0.0, 4.0]]);
        let second = arr2(&[[0.0_f64, 0.0], [0.0, 0.0]]);

        assert!((f64::rel_diff_fro(first.view(), second.view()) - 5.0).abs() < 1E-12);
    }

    #[test]
    fn test_error_messages() {
        let err = SvdCompressionError::RangeOverflow {
            count: 3,
            min: -2.0,
            max: 260.5,
        };
        assert_eq!(
            err.to_string(),
            "3 reconstructed values outside of the pixel range [0, 255] (min -2, max 260.5)"
        );
    }
}
