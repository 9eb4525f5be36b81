//! Storage accounting for rank-k representations.

/// Number of scalars stored by a rank `k` SVD of a `rows x cols` matrix.
///
/// This counts the `k` columns of U, the `k` singular values and the `k` rows of V.
pub fn stored_entries(rows: usize, cols: usize, k: usize) -> usize {
    rows * k + k + k * cols
}

/// Ratio of the storage of a rank `k` SVD to the storage of the dense `rows x cols` matrix.
///
/// Values below one mean the truncated representation is smaller than the original.
/// The caller must ensure that `rows`, `cols` and `k` are positive.
pub fn compression_ratio(rows: usize, cols: usize, k: usize) -> f64 {
    stored_entries(rows, cols, k) as f64 / (rows * cols) as f64
}
