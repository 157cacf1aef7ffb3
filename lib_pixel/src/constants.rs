/// Width and height every input image must have.
pub const GRID_SIZE: usize = 8;
/// Channels emitted per pixel (blue, green, red).
pub const CHANNELS: usize = 3;

pub const ELEMENT_TYPE: &str = "const unsigned char";
pub const ARRAY_NAME: &str = "pic";
pub const STORAGE_QUALIFIER: &str = "PROGMEM";

pub const INDENT: &str = "    ";
