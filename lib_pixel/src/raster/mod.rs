pub mod decoder;
pub mod format;
pub mod source;

pub use decoder::{decode, load, validate, DecodeError};
pub use format::{PixelGrid, ScanOrder};
pub use source::RasterSource;
