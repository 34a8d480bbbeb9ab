//! Image and tensor loading utilities.

use std::fs;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageReader};
use ndarray::Array3;

use crate::error::{Error, Result};

use super::{tensor_shape, ImageTensor, RasterImage, RGB_CHANNELS, TENSOR_BYTES};

/// Load an image from disk as an RGB raster.
///
/// The format is sniffed from the file contents, so the extension does not
/// need to match. Grayscale and alpha images are converted to RGB.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RasterImage> {
    let path = path.as_ref();
    let load_err = |source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|err| load_err(image::ImageError::IoError(err)))?
        .decode()
        .map_err(load_err)?;

    let (width, height) = img.dimensions();
    tracing::debug!(
        "Decoded {} ({width}x{height}, {:?})",
        path.display(),
        img.color()
    );

    image_to_raster(&img)
}

/// Convert a `DynamicImage` to an HWC raster.
fn image_to_raster(img: &DynamicImage) -> Result<RasterImage> {
    let rgb = img.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    Array3::from_shape_vec((height, width, RGB_CHANNELS), rgb.into_raw()).map_err(|err| {
        Error::ShapeMismatch {
            expected: format!("({height}, {width}, {RGB_CHANNELS})"),
            actual: err.to_string(),
        }
    })
}

/// Read a tensor file written by [`save_tensor`](super::save_tensor).
///
/// The file must hold exactly 3x224x224 little-endian `f32` values.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its size differs from
/// expected.
pub fn read_tensor<P: AsRef<Path>>(path: P) -> Result<ImageTensor> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| Error::TensorRead {
        path: path.to_path_buf(),
        source,
    })?;

    if bytes.len() != TENSOR_BYTES {
        return Err(Error::ShapeMismatch {
            expected: format!("{TENSOR_BYTES} bytes"),
            actual: format!("{} bytes", bytes.len()),
        });
    }

    let values = bytes
        .chunks_exact(std::mem::size_of::<f32>())
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();

    Array3::from_shape_vec(tensor_shape(), values).map_err(|err| Error::ShapeMismatch {
        expected: format!("{:?}", tensor_shape()),
        actual: err.to_string(),
    })
}
