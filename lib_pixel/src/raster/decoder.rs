use std::io;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageError, ImageReader};
use log::{debug, info};
use thiserror::Error;

use super::format::{PixelGrid, ScanOrder};
use super::source::RasterSource;
use crate::constants::GRID_SIZE;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to resolve the absolute path of {}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read in {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to decode {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error(
        "Input image {} must be exactly {}x{} pixels (actual: {width}x{height})",
        .path.display(),
        GRID_SIZE,
        GRID_SIZE
    )]
    Dimensions {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

impl DecodeError {
    /// The input file the error is about.
    pub fn path(&self) -> &Path {
        match self {
            DecodeError::Resolve { path, .. }
            | DecodeError::Read { path, .. }
            | DecodeError::Decode { path, .. }
            | DecodeError::Dimensions { path, .. } => path,
        }
    }
}

/// Opens and decodes `path` with whatever format the `image` crate detects.
///
/// The format is sniffed from the file contents first, the extension is only a
/// fallback. The file is closed before this returns.
pub fn load(path: &Path) -> Result<DynamicImage, DecodeError> {
    let read_error = |source| {
        debug!("Failed to open {}: {}", path.display(), source);
        DecodeError::Read {
            path: path.to_path_buf(),
            source,
        }
    };

    let reader = ImageReader::open(path)
        .map_err(read_error)?
        .with_guessed_format()
        .map_err(read_error)?;
    debug!("Detected format {:?} for {}", reader.format(), path.display());

    reader.decode().map_err(|source| {
        debug!("Failed to decode {}: {}", path.display(), source);
        DecodeError::Decode {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Checks that `raster` is exactly `GRID_SIZE` pixels on both sides.
pub fn validate<S: RasterSource + ?Sized>(path: &Path, raster: &S) -> Result<(), DecodeError> {
    let (width, height) = raster.dimensions();
    if width as usize != GRID_SIZE || height as usize != GRID_SIZE {
        debug!(
            "{} is {}x{}, expected {}x{}",
            path.display(),
            width,
            height,
            GRID_SIZE,
            GRID_SIZE
        );
        return Err(DecodeError::Dimensions {
            path: path.to_path_buf(),
            width,
            height,
        });
    }
    Ok(())
}

/// Decodes `path`, validates its size and samples it into a grid.
pub fn decode(path: &Path, order: ScanOrder) -> Result<PixelGrid, DecodeError> {
    let image = load(path)?;
    debug!(
        "Decoded {}: {:?}, {}x{}",
        path.display(),
        image.color(),
        image.width(),
        image.height()
    );

    validate(path, &image)?;

    let grid = PixelGrid::from_source(&image, order);
    info!("Sampled {} pixels from {}", PixelGrid::PIXEL_COUNT, path.display());
    Ok(grid)
}
