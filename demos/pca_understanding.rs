//! PCA and SVD of a three sample data set, with and without mean removal.
//!
//! Run with `RUST_LOG=debug` to see every intermediate matrix.

use ndarray::arr2;
use svd_image_compression::*;
use tracing_subscriber::EnvFilter;

pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Three samples with two features each.
    let data = arr2(&[[1.0, 1.0], [1.5, 1.1], [2.0, 1.0]]);

    for &center in &[true, false] {
        let result = pca(data.view(), center, 1)?;
        println!("PCA (center = {})", center);
        println!("eigenvalues:\n{}", result.eigenvalues);
        println!("components:\n{}", result.components);
        println!("projected:\n{}", result.projected);
        println!("--------------------------------------");
    }

    for &center in &[true, false] {
        let svd = centered_svd(data.view(), center)?;
        println!("SVD (center = {})", center);
        println!("u:\n{}", svd.u);
        println!("s:\n{}", svd.s);
        println!("vt:\n{}", svd.vt);
        println!("--------------------------------------");
    }

    Ok(())
}
