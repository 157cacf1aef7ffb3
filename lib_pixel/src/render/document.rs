use std::path::PathBuf;

use log::debug;

use crate::constants::{ARRAY_NAME, CHANNELS, ELEMENT_TYPE, GRID_SIZE, STORAGE_QUALIFIER};
use crate::raster::format::PixelGrid;

use super::{render_grid, OutputStyle};

/// A converted image and the path it is labelled with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub grid: PixelGrid,
}

/// The whole generated array, one entry per image in input order.
#[derive(Debug, Clone)]
pub struct Document {
    pub entries: Vec<Entry>,
    pub style: OutputStyle,
}

impl Document {
    pub fn new(entries: Vec<Entry>, style: OutputStyle) -> Self {
        Self { entries, style }
    }

    /// The declaration line, sized by the number of entries.
    pub fn declaration(&self) -> String {
        format!(
            "{} {}[{}][{}][{}][{}] {} = {{",
            ELEMENT_TYPE,
            ARRAY_NAME,
            self.entries.len(),
            GRID_SIZE,
            GRID_SIZE,
            CHANNELS,
            STORAGE_QUALIFIER
        )
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for (index, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!(
                "// {}[{}] = \"{}\"\n",
                ARRAY_NAME,
                index,
                entry.path.display()
            ));
        }

        if self.style.blank_after_header {
            out.push('\n');
        }

        out.push_str(&self.declaration());
        out.push('\n');

        for (index, entry) in self.entries.iter().enumerate() {
            out.push_str(&render_grid(&entry.path, &entry.grid, &self.style));

            if index < self.entries.len() - 1 {
                out.push(',');
            }

            out.push_str("\n\n");
        }

        out.push_str("};\n");
        debug!(
            "Rendered {} images into {} bytes",
            self.entries.len(),
            out.len()
        );
        out
    }
}
