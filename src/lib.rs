//! # imgconv
//!
//! Turn an arbitrary image into the 3x224x224 input tensor expected by
//! VGG-style classifiers.
//!
//! The image is cropped to its centered square, resized to 224x224, shifted by
//! the VGG training set mean, and stored channel-major as raw little-endian
//! `f32` values (602,112 bytes, no header).
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> imgconv::Result<()> {
//! imgconv::process("cat.jpg", "cat.bin")?;
//!
//! let tensor = imgconv::image::read_tensor("cat.bin")?;
//! assert_eq!(tensor.shape(), &[3, 224, 224]);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod pipeline;

pub use error::{Error, Result};
pub use crate::image::{munge, ImageTensor, RasterImage};
pub use pipeline::process;
