use image::{Rgb, RgbImage};
use svd_image_compression::*;

fn write_gradient(path: &std::path::Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([((x + 1) * (y + 1)) as u8, (x * 3) as u8, 7])
    });
    img.save(path).unwrap();
}

#[test]
fn test_compress_image_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("gradient.png");
    let output = dir.path().join("gradient_compressed.bmp");
    write_gradient(&input, 15, 10);

    let config = CompressionConfig::new().rank(1).conversion(PixelConversion::Strict);
    let report = compress_image_file::<f64, _, _>(&input, &output, &config).unwrap();

    assert_eq!((report.nrows, report.ncols, report.rank), (10, 15, 1));
    assert!((report.compression_ratio - 26.0 / 150.0).abs() < 1E-15);

    // The red channel is an outer product and survives rank one compression.
    let original = load_channel(&input, Channel::Red).unwrap();
    let compressed = load_channel(&output, Channel::Red).unwrap();
    assert_eq!(compressed, original);
}

#[test]
fn test_extract_channel_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("gradient.png");
    let output = dir.path().join("green.bmp");
    write_gradient(&input, 6, 4);

    extract_channel_file(&input, &output, Channel::Green).unwrap();

    let green = load_channel(&output, Channel::Red).unwrap();
    assert_eq!(green.dim(), (4, 6));
    for ((_, col), &value) in green.indexed_iter() {
        assert_eq!(value as usize, col * 3);
    }
}

#[test]
fn test_f32_and_f64_pipelines_agree() {
    let mut rng = rand::thread_rng();
    let pixels = random_pixels((40, 30), &mut rng);
    let config = CompressionConfig::new().rank(30);

    let (single, _) = compress_channel::<f32>(pixels.view(), &config).unwrap();
    let (double, _) = compress_channel::<f64>(pixels.view(), &config).unwrap();

    assert_eq!(double, pixels);
    assert!(single
        .iter()
        .zip(pixels.iter())
        .all(|(&first, &second)| (first as i32 - second as i32).abs() <= 1));
}
