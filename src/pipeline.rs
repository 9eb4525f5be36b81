//! Compression of single image channels by truncated SVD.

use crate::image_io::{load_channel, save_channel, Channel};
use crate::pixels::{count_out_of_range, from_pixels, to_pixels, PixelConversion};
use crate::storage::compression_ratio;
use crate::svd::{SVDTraits, SVD};
use crate::types::{Lapack, RelDiff, Result, Scalar};
use crate::CompressionType;
use ndarray::{Array2, ArrayView2};
use num::ToPrimitive;
use std::fmt;
use std::path::Path;

/// Rank used when no other compression is configured.
pub const DEFAULT_RANK: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompressionConfig {
    pub compression: CompressionType,
    pub conversion: PixelConversion,
    pub channel: Channel,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            compression: CompressionType::RANK(DEFAULT_RANK),
            conversion: PixelConversion::default(),
            channel: Channel::default(),
        }
    }
}

impl CompressionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep exactly `k` singular triplets.
    pub fn rank(mut self, k: usize) -> Self {
        self.compression = CompressionType::RANK(k);
        self
    }

    /// Keep the singular values with $\sigma_i / \sigma_1 \geq tol$.
    pub fn tolerance(mut self, tol: f64) -> Self {
        self.compression = CompressionType::ADAPTIVE(tol);
        self
    }

    pub fn conversion(mut self, conversion: PixelConversion) -> Self {
        self.conversion = conversion;
        self
    }

    pub fn channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompressionReport {
    pub nrows: usize,
    pub ncols: usize,
    /// Number of singular triplets kept.
    pub rank: usize,
    pub compression_ratio: f64,
    /// Relative Frobenius error of the real valued reconstruction.
    pub relative_error: f64,
    /// Number of reconstructed values that did not round into `[0, 255]`.
    pub out_of_range: usize,
}

impl fmt::Display for CompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rank {} of a {}x{} channel, compression ratio {:.4}, relative error {:1.2E}, {} values out of range",
            self.rank,
            self.nrows,
            self.ncols,
            self.compression_ratio,
            self.relative_error,
            self.out_of_range
        )
    }
}

/// Compress an 8-bit channel in memory.
///
/// The channel is decomposed in precision `A`, reconstructed at the configured rank and
/// converted back to pixels with the configured [`PixelConversion`].
#[tracing::instrument(
    level = "info",
    skip(pixels, config),
    fields(nrows = pixels.nrows(), ncols = pixels.ncols())
)]
pub fn compress_channel<A>(
    pixels: ArrayView2<u8>,
    config: &CompressionConfig,
) -> Result<(Array2<u8>, CompressionReport)>
where
    A: Scalar + Lapack + RelDiff<A = A>,
    SVD<A>: SVDTraits<A = A>,
{
    let mat = from_pixels::<A>(pixels);
    let svd = SVD::<A>::compute_from(mat.view())?;
    let rank = svd.compress(config.compression)?.rank();

    let approx = svd.truncated_reconstruct(rank)?;
    let relative_error = A::rel_diff_fro(approx.view(), mat.view())
        .to_f64()
        .unwrap_or(f64::NAN);
    let out_of_range = count_out_of_range(approx.view()).count;
    let compressed = to_pixels(approx.view(), config.conversion)?;

    let report = CompressionReport {
        nrows: mat.nrows(),
        ncols: mat.ncols(),
        rank,
        compression_ratio: compression_ratio(mat.nrows(), mat.ncols(), rank),
        relative_error,
        out_of_range,
    };

    tracing::info!(
        rank,
        ratio = report.compression_ratio,
        relative_error,
        "compressed channel"
    );

    Ok((compressed, report))
}

/// Load one channel of `input`, compress it and write the result to `output`.
pub fn compress_image_file<A, P, Q>(
    input: P,
    output: Q,
    config: &CompressionConfig,
) -> Result<CompressionReport>
where
    A: Scalar + Lapack + RelDiff<A = A>,
    SVD<A>: SVDTraits<A = A>,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let pixels = load_channel(input, config.channel)?;
    let (compressed, report) = compress_channel::<A>(pixels.view(), config)?;
    save_channel(output, compressed.view())?;

    Ok(report)
}

/// Save one channel of `input` uncompressed as a grayscale image.
pub fn extract_channel_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    channel: Channel,
) -> Result<()> {
    let pixels = load_channel(input, channel)?;
    save_channel(output, pixels.view())
}
