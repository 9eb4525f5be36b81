pub mod diagonal;
pub mod examples;
pub mod image_io;
pub mod pca;
pub mod pipeline;
pub mod pixels;
pub mod random_matrix;
pub mod storage;
pub mod svd;
pub mod types;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CompressionType {
    /// Adaptive compression with a specified tolerance
    ADAPTIVE(f64),
    /// Rank based compression with specified rank
    RANK(usize),
}

pub use diagonal::embed_diagonal;
pub use image_io::{load_channel, save_channel, Channel};
pub use pca::{centered_svd, pca, PCA};
pub use pipeline::{
    compress_channel, compress_image_file, extract_channel_file, CompressionConfig,
    CompressionReport,
};
pub use pixels::{count_out_of_range, from_pixels, to_pixels, PixelConversion, RangeSummary};
pub use random_matrix::{random_pixels, RandomMatrix};
pub use storage::{compression_ratio, stored_entries};
pub use svd::{SVDTraits, SVD};
pub use types::{RelDiff, Result, SvdCompressionError};
