//! Load, munge, and save a single image.

use std::path::Path;

use crate::error::Result;
use crate::image::{self, TENSOR_BYTES};

/// Convert the image at `input` into a raw tensor file at `output`.
///
/// Nothing is written to `output` unless every step succeeds.
///
/// # Errors
///
/// Returns an error if the image cannot be decoded, is not a usable RGB
/// raster, or the tensor cannot be written.
pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let raster = image::load_image(input)?;
    let (height, width, _) = raster.dim();

    let tensor = image::munge(&raster)?;
    image::save_tensor(&tensor, output)?;

    tracing::info!(
        "Converted {} ({width}x{height}) -> {} ({TENSOR_BYTES} bytes)",
        input.display(),
        output.display()
    );

    Ok(())
}
