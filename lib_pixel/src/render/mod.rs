pub mod document;
pub mod grid;

pub use document::{Document, Entry};
pub use grid::render_grid;

/// How channel values are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Radix {
    /// `0x` followed by two lowercase hex digits.
    #[default]
    Hex,
    /// Three characters wide, padded with spaces. Zero padding would turn the
    /// value into an octal literal in C.
    Decimal,
}

impl Radix {
    pub fn format(self, value: u8) -> String {
        match self {
            Radix::Hex => format!("{:#04x}", value),
            Radix::Decimal => format!("{:>3}", value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStyle {
    pub radix: Radix,
    /// Emit an empty line between the file comments and the declaration.
    pub blank_after_header: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            radix: Radix::Hex,
            blank_after_header: true,
        }
    }
}
