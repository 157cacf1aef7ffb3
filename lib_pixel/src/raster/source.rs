use image::{DynamicImage, GenericImageView};

/// Read access to decoded pixel data.
pub trait RasterSource {
    /// Get the dimensions of the raster (width, height)
    fn dimensions(&self) -> (u32, u32);

    /// Get the red, green and blue samples at the specified coordinates
    fn sample(&self, x: u32, y: u32) -> [u8; 3];
}

// Any colour type the decoder produces is read through its RGBA view.
// Alpha is dropped.
impl RasterSource for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn sample(&self, x: u32, y: u32) -> [u8; 3] {
        let pixel = GenericImageView::get_pixel(self, x, y);
        [pixel[0], pixel[1], pixel[2]]
    }
}
