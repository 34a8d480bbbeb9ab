//! The munge transform: square crop, resize, mean subtraction, transpose.

use image::imageops::{self, FilterType};
use image::RgbImage;
use ndarray::{s, Array3, ArrayView1, ArrayView3};

use crate::error::{Error, Result};

use super::{ImageTensor, RasterImage, CHANNEL_MEANS, RGB_CHANNELS, TARGET_SIZE};

/// Largest axis-aligned square inside an image, centered along the longer axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    /// First row of the window.
    pub row: usize,
    /// First column of the window.
    pub col: usize,
    /// Side length of the window.
    pub side: usize,
}

impl CropWindow {
    /// Compute the centered square window for a `height` x `width` image.
    ///
    /// When the difference between the axes is odd the extra pixel is dropped
    /// from the high-index side.
    #[must_use]
    pub const fn centered(height: usize, width: usize) -> Self {
        let side = if height < width { height } else { width };
        Self {
            row: (height - side) / 2,
            col: (width - side) / 2,
            side,
        }
    }
}

/// Convert a decoded RGB raster into a VGG-19 input tensor.
///
/// The raster is:
/// 1. Cropped to its centered square
/// 2. Resized to 224x224 with a bilinear (triangle) kernel
/// 3. Converted to f32
/// 4. Shifted by the per-channel VGG mean
/// 5. Returned in CHW order (3, 224, 224)
///
/// # Errors
///
/// Returns an error if the raster has an empty axis, an axis too large to
/// resample, or a channel count other than 3.
pub fn munge(image: &RasterImage) -> Result<ImageTensor> {
    validate(image)?;

    let resized = resize_to_target(center_crop(image))?;
    let interleaved = subtract_mean(&resized);

    Ok(to_planar(interleaved))
}

fn validate(image: &RasterImage) -> Result<()> {
    let (height, width, channels) = image.dim();

    if height == 0 || width == 0 {
        return Err(Error::UnsupportedDimensions {
            width,
            height,
            reason: "both axes must be at least 1 pixel".to_string(),
        });
    }

    if channels != RGB_CHANNELS {
        return Err(Error::UnsupportedChannels { channels });
    }

    Ok(())
}

/// View the centered square of a raster. No pixels are copied.
#[must_use]
pub fn center_crop(image: &RasterImage) -> ArrayView3<'_, u8> {
    let (height, width, _) = image.dim();
    let CropWindow { row, col, side } = CropWindow::centered(height, width);
    tracing::debug!("Cropping {width}x{height} to {side}x{side} at row {row}, col {col}");

    image.slice(s![row..row + side, col..col + side, ..])
}

/// Resample an RGB raster to 224x224.
///
/// # Errors
///
/// Returns an error if the raster is not 3-channel or an axis does not fit in
/// a `u32`.
pub fn resize_to_target(raster: ArrayView3<'_, u8>) -> Result<RasterImage> {
    let (height, width, channels) = raster.dim();
    if channels != RGB_CHANNELS {
        return Err(Error::UnsupportedChannels { channels });
    }

    let too_large = || Error::UnsupportedDimensions {
        width,
        height,
        reason: "axis exceeds u32::MAX".to_string(),
    };
    let buf_width = u32::try_from(width).map_err(|_| too_large())?;
    let buf_height = u32::try_from(height).map_err(|_| too_large())?;

    // Logical iteration order is HWC regardless of the view's strides.
    let buffer = RgbImage::from_raw(buf_width, buf_height, raster.iter().copied().collect())
        .ok_or_else(|| Error::ShapeMismatch {
            expected: format!("{width}x{height} RGB buffer"),
            actual: format!("{} samples", raster.len()),
        })?;

    let resized = imageops::resize(&buffer, TARGET_SIZE, TARGET_SIZE, FilterType::Triangle);

    let size = TARGET_SIZE as usize;
    Array3::from_shape_vec((size, size, RGB_CHANNELS), resized.into_raw()).map_err(|err| {
        Error::ShapeMismatch {
            expected: format!("({size}, {size}, {RGB_CHANNELS})"),
            actual: err.to_string(),
        }
    })
}

/// Convert samples to f32 and subtract [`CHANNEL_MEANS`] from every pixel.
///
/// The result keeps the HWC layout of the input.
#[must_use]
pub fn subtract_mean(raster: &RasterImage) -> Array3<f32> {
    let mut centered = raster.mapv(f32::from);
    // Broadcasts along the trailing channel axis.
    centered -= &ArrayView1::from(&CHANNEL_MEANS);
    centered
}

/// Reorder an HWC array into a standard-layout CHW tensor.
#[must_use]
pub fn to_planar(interleaved: Array3<f32>) -> ImageTensor {
    interleaved
        .permuted_axes([2, 0, 1])
        .as_standard_layout()
        .into_owned()
}
