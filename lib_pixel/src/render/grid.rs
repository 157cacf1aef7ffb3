use std::path::Path;

use crate::constants::INDENT;
use crate::raster::format::{PixelGrid, Rgb};

use super::OutputStyle;

/// Renders one image as a brace-delimited 8x8 block, preceded by a comment
/// naming its source file.
///
/// Every triplet is written blue, green, red. The first row opens the block
/// with `{{`, later rows are indented by one space in its place, and the last
/// row closes the block with `}}`.
pub fn render_grid(path: &Path, grid: &PixelGrid, style: &OutputStyle) -> String {
    let mut block = format!("\n{}// {}\n", INDENT, path.display());

    let rows = grid.rows();
    for (index, row) in rows.iter().enumerate() {
        block.push_str(INDENT);
        block.push(if index == 0 { '{' } else { ' ' });

        block.push('{');
        let triplets: Vec<String> = row.iter().map(|pixel| triplet(pixel, style)).collect();
        block.push_str(&triplets.join(", "));
        block.push('}');

        if index < rows.len() - 1 {
            block.push_str(",\n");
        } else {
            block.push('}');
        }
    }

    block
}

fn triplet(&[red, green, blue]: &Rgb, style: &OutputStyle) -> String {
    format!(
        "{{{},{},{}}}",
        style.radix.format(blue),
        style.radix.format(green),
        style.radix.format(red)
    )
}
