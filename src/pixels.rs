//! Conversion between 8-bit pixel matrices and floating point matrices.
//!
//! A rank k reconstruction of a channel is real valued and can leave the pixel
//! range `[0, 255]`. How such values are mapped back to bytes is an explicit choice
//! given by [`PixelConversion`].

use crate::types::{Result, Scalar, SvdCompressionError};
use ndarray::{Array2, ArrayView2};
use num::ToPrimitive;

const PIXEL_MIN: f64 = 0.0;
const PIXEL_MAX: f64 = 255.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelConversion {
    /// Truncate toward zero and wrap modulo 256, as an unchecked cast to `u8` does.
    /// `-1.2` becomes `255` and `256.7` becomes `0`. NaN becomes `0`.
    Truncate,
    /// Round to the nearest integer and clamp to `[0, 255]`.
    Saturate,
    /// Round to the nearest integer and fail with `RangeOverflow` if any value
    /// lies outside of `[0, 255]`.
    Strict,
}

impl Default for PixelConversion {
    fn default() -> Self {
        PixelConversion::Saturate
    }
}

/// Summary of the values of a matrix that fall outside of the pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
}

/// Count the entries that do not round into `[0, 255]`.
pub fn count_out_of_range<A: Scalar>(mat: ArrayView2<A>) -> RangeSummary {
    let mut summary = RangeSummary {
        count: 0,
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    for value in mat.iter().map(|item| real_to_f64(*item)) {
        summary.min = summary.min.min(value);
        summary.max = summary.max.max(value);
        let rounded = value.round();
        if !(PIXEL_MIN..=PIXEL_MAX).contains(&rounded) {
            summary.count += 1;
        }
    }

    summary
}

/// Lift an 8-bit channel to a floating point matrix.
pub fn from_pixels<A: Scalar>(pixels: ArrayView2<u8>) -> Array2<A> {
    pixels.mapv(|item| A::from_real(A::real(item)))
}

/// Convert a reconstructed channel back to 8-bit pixels.
pub fn to_pixels<A: Scalar>(mat: ArrayView2<A>, conversion: PixelConversion) -> Result<Array2<u8>> {
    let summary = count_out_of_range(mat);

    if summary.count > 0 {
        if conversion == PixelConversion::Strict {
            return Err(SvdCompressionError::RangeOverflow {
                count: summary.count,
                min: summary.min,
                max: summary.max,
            });
        }
        tracing::warn!(
            count = summary.count,
            min = summary.min,
            max = summary.max,
            ?conversion,
            "reconstructed values outside of the pixel range"
        );
    }

    let convert: fn(f64) -> u8 = match conversion {
        PixelConversion::Truncate => truncate_pixel,
        PixelConversion::Saturate | PixelConversion::Strict => saturate_pixel,
    };

    Ok(mat.mapv(|item| convert(real_to_f64(item))))
}

fn real_to_f64<A: Scalar>(value: A) -> f64 {
    value.re().to_f64().unwrap_or(f64::NAN)
}

fn truncate_pixel(value: f64) -> u8 {
    if value.is_finite() {
        (value.trunc() as i64).rem_euclid(256) as u8
    } else {
        0
    }
}

fn saturate_pixel(value: f64) -> u8 {
    // NaN survives the clamp and `as` maps it to zero.
    value.round().clamp(PIXEL_MIN, PIXEL_MAX) as u8
}
