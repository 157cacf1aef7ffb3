use crate::constants::GRID_SIZE;

use super::source::RasterSource;

/// One pixel as `[red, green, blue]`.
pub type Rgb = [u8; 3];

/// The order pixels are read out of the source raster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanOrder {
    /// Grid row `r` is image row `y = r`.
    #[default]
    RowMajor,
    /// Grid row `r` is image column `x = r`.
    ColumnMajor,
}

/// A validated 8x8 image, stored in the order it is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    rows: [[Rgb; GRID_SIZE]; GRID_SIZE],
}

impl PixelGrid {
    pub const PIXEL_COUNT: usize = GRID_SIZE * GRID_SIZE;

    pub fn new(rows: [[Rgb; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { rows }
    }

    /// A grid with every pixel set to `color`.
    pub fn filled(color: Rgb) -> Self {
        Self::new([[color; GRID_SIZE]; GRID_SIZE])
    }

    pub fn rows(&self) -> &[[Rgb; GRID_SIZE]; GRID_SIZE] {
        &self.rows
    }

    /// Samples every pixel of `source`. The source must already be known to be
    /// exactly `GRID_SIZE` square.
    pub(crate) fn from_source<S: RasterSource + ?Sized>(source: &S, order: ScanOrder) -> Self {
        let mut rows = [[[0u8; 3]; GRID_SIZE]; GRID_SIZE];
        for (row, cells) in rows.iter_mut().enumerate() {
            for (column, cell) in cells.iter_mut().enumerate() {
                let (x, y) = match order {
                    ScanOrder::RowMajor => (column, row),
                    ScanOrder::ColumnMajor => (row, column),
                };
                *cell = source.sample(x as u32, y as u32);
            }
        }
        Self { rows }
    }
}
