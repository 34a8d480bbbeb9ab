//! Tensor saving utilities.

use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

use super::{tensor_shape, ImageTensor, TENSOR_BYTES};

/// Save a tensor as raw little-endian `f32` values in CHW order.
///
/// The file has no header: 3 * 224 * 224 * 4 = 602,112 bytes. It is written
/// to a uniquely named temporary file in the destination directory and
/// renamed into place, so a failed write never leaves a truncated tensor at
/// `path` and never touches any other file.
///
/// # Errors
///
/// Returns an error if the tensor has the wrong shape or the file cannot be
/// written.
pub fn save_tensor<P: AsRef<Path>>(tensor: &ImageTensor, path: P) -> Result<()> {
    let path = path.as_ref();

    if tensor.shape() != tensor_shape().as_slice() {
        return Err(Error::ShapeMismatch {
            expected: format!("{:?}", tensor_shape()),
            actual: format!("{:?}", tensor.shape()),
        });
    }

    write_atomic(tensor, path).map_err(|source| Error::TensorWrite {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Wrote {TENSOR_BYTES} bytes to {}", path.display());

    Ok(())
}

/// Stream the tensor's values in logical (standard) order.
///
/// The temporary file is removed on drop unless it was persisted.
fn write_atomic(tensor: &ImageTensor, path: &Path) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        for value in tensor {
            writer.write_all(&value.to_le_bytes())?;
        }
        writer.flush()?;
    }
    temp.as_file().sync_all()?;

    temp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
