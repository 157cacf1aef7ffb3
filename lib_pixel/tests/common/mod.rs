#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use image::{ImageBuffer, Rgb, RgbImage};

pub const SIZE: u32 = 8;

pub const RED: [u8; 3] = [255, 0, 0];
pub const GREEN: [u8; 3] = [0, 255, 0];

/// A scratch directory for one test's fixture files, removed on drop.
pub struct Fixtures {
    dir: PathBuf,
}

impl Fixtures {
    pub fn new(test: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("lib-pixel-{}-{}", std::process::id(), test));
        fs::create_dir_all(&dir).unwrap();
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Saves `image` under `name`; the extension picks the format.
    pub fn write_image(&self, name: &str, image: &RgbImage) -> PathBuf {
        let path = self.path(name);
        image.save(&path).unwrap();
        path
    }

    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, bytes).unwrap();
        path
    }
}

impl Drop for Fixtures {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

pub fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    ImageBuffer::from_pixel(width, height, Rgb(color))
}

/// Every pixel is distinct: `[x * 32, y * 32, y * 8 + x]`.
pub fn gradient() -> RgbImage {
    ImageBuffer::from_fn(SIZE, SIZE, |x, y| {
        Rgb([(x * 32) as u8, (y * 32) as u8, (y * SIZE + x) as u8])
    })
}

/// Number of `{B,G,R}` triplets in rendered hex output.
pub fn count_hex_triplets(text: &str) -> usize {
    text.matches("{0x").count()
}
