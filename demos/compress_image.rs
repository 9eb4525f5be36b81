//! Compressing the red channel of an image.
//!
//! Usage: `cargo run --example compress_image -- <input> <output> [rank] [channel-output]`

use std::process;

use svd_image_compression::pipeline::DEFAULT_RANK;
use svd_image_compression::*;
use tracing_subscriber::EnvFilter;

fn run(args: &[String]) -> Result<()> {
    let input = &args[1];
    let output = &args[2];

    // The compression rank.
    let rank = match args.get(3) {
        Some(value) => value.parse::<usize>().map_err(|_| {
            SvdCompressionError::InvalidDimension(format!("`{}` is not a valid rank", value))
        })?,
        None => DEFAULT_RANK,
    };

    let config = CompressionConfig::new().rank(rank).channel(Channel::Red);

    // Optionally keep the uncompressed channel for comparison.
    if let Some(channel_output) = args.get(4) {
        extract_channel_file(input, channel_output, config.channel)?;
    }

    let report = compress_image_file::<f64, _, _>(input, output, &config)?;

    println!("{}", report);
    println!("ratio: {}", report.compression_ratio);

    Ok(())
}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        let program = args.first().map(String::as_str).unwrap_or("compress_image");
        eprintln!("Usage: {} <input> <output> [rank] [channel-output]", program);
        process::exit(2);
    }

    if let Err(err) = run(&args) {
        tracing::error!(%err, "compression failed");
        process::exit(1);
    }
}
