//! Loading and saving single image channels.
//!
//! Row indices of the returned matrices correspond to the image y coordinate and
//! column indices to the x coordinate.

use crate::types::{Result, SvdCompressionError};
use image::{GrayImage, Luma};
use ndarray::{Array2, ArrayView2};
use std::convert::TryFrom;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    /// Grayscale conversion of the whole image.
    Luma,
}

impl Default for Channel {
    fn default() -> Self {
        Channel::Red
    }
}

/// Decode the image at `path` and extract one channel as a `height x width` matrix.
pub fn load_channel<P: AsRef<Path>>(path: P, channel: Channel) -> Result<Array2<u8>> {
    let img = image::open(path.as_ref())?;

    let pixels = match channel {
        Channel::Luma => {
            let gray = img.to_luma8();
            let (width, height) = gray.dimensions();
            Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
                gray.get_pixel(col as u32, row as u32)[0]
            })
        }
        _ => {
            let index = match channel {
                Channel::Red => 0,
                Channel::Green => 1,
                _ => 2,
            };
            let rgb = img.to_rgb8();
            let (width, height) = rgb.dimensions();
            Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
                rgb.get_pixel(col as u32, row as u32)[index]
            })
        }
    };

    tracing::debug!(
        path = %path.as_ref().display(),
        ?channel,
        nrows = pixels.nrows(),
        ncols = pixels.ncols(),
        "loaded image channel"
    );

    Ok(pixels)
}

/// Encode `pixels` as a grayscale image. The format is taken from the file extension.
pub fn save_channel<P: AsRef<Path>>(path: P, pixels: ArrayView2<u8>) -> Result<()> {
    let (width, height) = match (u32::try_from(pixels.ncols()), u32::try_from(pixels.nrows())) {
        (Ok(width), Ok(height)) => (width, height),
        _ => {
            return Err(SvdCompressionError::InvalidDimension(format!(
                "a {}x{} channel is too large to encode",
                pixels.nrows(),
                pixels.ncols()
            )))
        }
    };

    let gray = GrayImage::from_fn(width, height, |x, y| Luma([pixels[[y as usize, x as usize]]]));
    gray.save(path.as_ref())?;

    tracing::debug!(path = %path.as_ref().display(), width, height, "saved image channel");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn write_test_image(path: &Path) {
        let img = RgbImage::from_fn(4, 3, |x, y| Rgb([(10 * x + y) as u8, 100, (200 + x) as u8]));
        img.save(path).unwrap();
    }

    #[test]
    fn test_load_channels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.png");
        write_test_image(&path);

        let red = load_channel(&path, Channel::Red).unwrap();
        let green = load_channel(&path, Channel::Green).unwrap();
        let blue = load_channel(&path, Channel::Blue).unwrap();

        assert_eq!(red.dim(), (3, 4));
        assert_eq!(red[[2, 3]], 32);
        assert!(green.iter().all(|&item| item == 100));
        assert_eq!(blue[[0, 1]], 201);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let pixels = Array2::from_shape_fn((5, 7), |(row, col)| (row * 7 + col) as u8);

        let png = dir.path().join("channel.png");
        save_channel(&png, pixels.view()).unwrap();
        assert_eq!(load_channel(&png, Channel::Luma).unwrap(), pixels);

        let bmp = dir.path().join("channel.bmp");
        save_channel(&bmp, pixels.view()).unwrap();
        assert_eq!(load_channel(&bmp, Channel::Red).unwrap(), pixels);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            load_channel(dir.path().join("missing.png"), Channel::Red),
            Err(SvdCompressionError::ImageError(_))
        ));
    }
}
