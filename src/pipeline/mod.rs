//! File-to-file conversion pipeline.

mod convert;

pub use convert::process;
