//! # Library examples
//!
//! We provide some examples in the `demos` subdirectory. To run them
//! use `cargo run --example <example_name>`.
//!
//! ### Compressing one channel of an image.
//!
//! `compress_image <input> <output> [rank] [channel-output]` extracts the red channel of
//! `input`, keeps the `rank` largest singular triplets (50 by default) and saves the
//! reconstruction as a grayscale image. If `channel-output` is given the uncompressed
//! channel is saved there as well. The compression ratio and the relative error are logged.
//!
//! ### PCA and SVD of a small data set.
//!
//! `pca_understanding` computes the principal components of the three samples
//! $(1, 1)$, $(1.5, 1.1)$, $(2, 1)$ with and without removing the mean, and the
//! corresponding SVDs. Set `RUST_LOG=debug` to see the intermediate matrices.
//!
//! ### Error against rank.
//!
//! `rank_error_curve` plots the relative error of the rank $k$ approximation of a random
//! matrix with logarithmically decaying singular values together with the Eckart-Young
//! prediction $\sqrt{\sum_{i>k}\sigma_i^2}/\|A\|_F$. The plot is saved in `rank_error.png`.
//!
//! ### Truncating a decomposition.
//!
//! `svd_compression` decomposes a random matrix, truncates it and prints the shapes of
//! the factors and the storage ratio.
