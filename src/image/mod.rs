//! Image loading, munging, and tensor file utilities.

mod load;
mod munge;
mod save;

pub use load::{load_image, read_tensor};
pub use munge::{center_crop, munge, resize_to_target, subtract_mean, to_planar, CropWindow};
pub use save::save_tensor;

use ndarray::Array3;

/// Decoded raster in HWC order (row, column, channel), 8 bits per sample.
pub type RasterImage = Array3<u8>;

/// Network input tensor in CHW order (channel, row, column).
/// Values are raw 0-255 intensities with the per-channel mean removed.
pub type ImageTensor = Array3<f32>;

/// Side length of the square network input (VGG-19).
pub const TARGET_SIZE: u32 = 224;

/// Number of channels in RGB images.
pub const RGB_CHANNELS: usize = 3;

/// VGG training set mean, in the channel order of the decoded raster.
pub const CHANNEL_MEANS: [f32; RGB_CHANNELS] = [103.939, 116.779, 123.68];

/// Number of `f32` values in an [`ImageTensor`].
pub const TENSOR_LEN: usize = RGB_CHANNELS * TARGET_SIZE as usize * TARGET_SIZE as usize;

/// Size in bytes of a serialized [`ImageTensor`].
pub const TENSOR_BYTES: usize = TENSOR_LEN * std::mem::size_of::<f32>();

/// Shape of every [`ImageTensor`] produced by [`munge`].
#[must_use]
pub const fn tensor_shape() -> [usize; 3] {
    [RGB_CHANNELS, TARGET_SIZE as usize, TARGET_SIZE as usize]
}
