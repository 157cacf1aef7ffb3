pub mod constants;
pub mod convert;
pub mod raster;
pub mod render;

use log::*;
use std::io::Write;

pub use crate::convert::{convert, Conversion, ConvertError, ConvertOptions};
pub use crate::raster::format::{PixelGrid, ScanOrder};
pub use crate::raster::{decode, DecodeError, RasterSource};
pub use crate::render::{Document, Entry, OutputStyle, Radix};

/// Routes `log` records from the workspace crates to stderr.
///
/// Stdout is reserved for the generated array, so nothing here may write to it.
/// `RUST_LOG` still overrides the level picked on the command line.
pub fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter(Some("lib_pixel"), level)
        .filter(Some("pixelizer"), level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
