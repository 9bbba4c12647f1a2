// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! PNG maze decoding into a wall bitmap plus the minimap image.

use std::path::Path;

use anyhow::{Context, Result};
use image::{DynamicImage, ImageFormat};
use maze_core::{Bitmap, WallMap};

/// Luma below this is a wall.
pub const WALL_LUMA: u8 = 128;

pub struct MazeImage {
    pub bitmap: Bitmap,
    pub minimap: egui::ColorImage,
}

impl MazeImage {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        Self::decode(&bytes)
    }

    pub fn decode(png: &[u8]) -> Result<Self> {
        let img = image::load_from_memory_with_format(png, ImageFormat::Png)
            .context("decoding maze png")?;
        Self::from_image(&img)
    }

    pub fn from_image(img: &DynamicImage) -> Result<Self> {
        let luma = img.to_luma8();
        let (w, h) = luma.dimensions();
        let bitmap = Bitmap::from_fn(w, h, |x, y| luma.get_pixel(x, y).0[0] < WALL_LUMA)?;
        let rgba = img.to_rgba8();
        let minimap = egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &rgba);
        Ok(Self { bitmap, minimap })
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use std::io::Cursor;

    fn png_of(img: &GrayImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn dark_pixels_become_walls() {
        let img = GrayImage::from_fn(4, 3, |x, y| {
            if y == 1 && x > 0 {
                Luma([10])
            } else if x == 0 {
                Luma([127])
            } else {
                Luma([255])
            }
        });
        let maze = MazeImage::decode(&png_of(&img)).unwrap();
        assert_eq!(maze.bitmap.to_rows(), ["#...", "####", "#..."]);
        assert_eq!(maze.minimap.size, [4, 3]);
    }

    #[test]
    fn garbage_bytes_fail_with_context() {
        let err = MazeImage::decode(b"not a png").err().unwrap();
        assert!(format!("{err:#}").contains("decoding maze png"));
    }
}
