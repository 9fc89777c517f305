//! Line image decoding.
//!
//! Line images are PNG files. Decoding is delegated to the `image`
//! crate and its errors are passed through unchanged.

use crate::utils::error::ImageError;
use image::{DynamicImage, ImageFormat};
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Open and decode a PNG line image
///
/// # Errors
/// * `ImageError::Open` - The file cannot be opened
/// * `ImageError::Read` - I/O error while reading
/// * `ImageError::Decode` - The bytes are not a valid PNG image
pub fn open_img_file(path: impl AsRef<Path>) -> Result<DynamicImage, ImageError> {
    let path = path.as_ref();
    debug!("Decoding line image: {}", path.display());

    let file = File::open(path).map_err(|source| ImageError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_img(BufReader::new(file))
}

/// Decode a PNG line image from a byte stream
pub fn read_img<R: Read>(mut reader: R) -> Result<DynamicImage, ImageError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(image::load_from_memory_with_format(&bytes, ImageFormat::Png)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use tempfile::tempdir;

    #[test]
    fn test_decode_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("00001.bin.png");
        GrayImage::from_pixel(12, 3, Luma([255u8])).save(&path).unwrap();

        let img = open_img_file(&path).unwrap();
        assert_eq!((img.width(), img.height()), (12, 3));
    }

    #[test]
    fn test_decode_garbage() {
        let err = read_img("not a png".as_bytes()).unwrap_err();
        assert!(matches!(err, ImageError::Decode(_)));
    }

    #[test]
    fn test_open_missing_file() {
        let err = open_img_file("does/not/exist.png").unwrap_err();
        assert!(matches!(err, ImageError::Open { .. }));
    }
}
