use std::path::Path;

use log::{debug, info, warn};
use thiserror::Error;

use crate::raster::{decode, DecodeError, ScanOrder};
use crate::render::{Document, Entry, OutputStyle};

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("No input files given")]
    NoInput,
    #[error("None of the {0} input files could be converted")]
    NothingConverted(usize),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    pub style: OutputStyle,
    pub order: ScanOrder,
    /// Skip inputs that fail to decode or validate instead of aborting.
    pub keep_going: bool,
}

/// Outcome of a run: the document plus any inputs left out of it.
#[derive(Debug)]
pub struct Conversion {
    pub document: Document,
    pub skipped: Vec<DecodeError>,
}

/// Converts `paths` in order into a single document.
///
/// Without `keep_going` the first bad input aborts the run. With it, bad inputs
/// are collected in `skipped` and the remaining images are numbered
/// consecutively.
pub fn convert<P: AsRef<Path>>(
    paths: &[P],
    options: &ConvertOptions,
) -> Result<Conversion, ConvertError> {
    if paths.is_empty() {
        return Err(ConvertError::NoInput);
    }
    info!("Converting {} files", paths.len());

    let mut entries = Vec::with_capacity(paths.len());
    let mut skipped = Vec::new();

    for path in paths {
        match convert_one(path.as_ref(), options.order) {
            Ok(entry) => entries.push(entry),
            Err(e) if options.keep_going => {
                warn!("Skipping {}: {}", e.path().display(), e);
                skipped.push(e);
            }
            Err(e) => return Err(e.into()),
        }
    }

    if entries.is_empty() {
        debug!("All {} input files were skipped", paths.len());
        return Err(ConvertError::NothingConverted(paths.len()));
    }

    info!(
        "Converted {} files, skipped {}",
        entries.len(),
        skipped.len()
    );
    Ok(Conversion {
        document: Document::new(entries, options.style),
        skipped,
    })
}

fn convert_one(path: &Path, order: ScanOrder) -> Result<Entry, DecodeError> {
    let path = std::path::absolute(path).map_err(|source| {
        debug!("Failed to resolve {}: {}", path.display(), source);
        DecodeError::Resolve {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!("Processing {}", path.display());

    let grid = decode(&path, order)?;
    Ok(Entry { path, grid })
}
