// src/terrain/png.rs
//! Превью карты в PNG
//!
//! Отладочный экспорт для инструментов и CLI, не рендеринг игры:
//! - стены — основной цвет жанра, пол — вторичный;
//! - коридоры — смесь основного и вторичного, двери — акцентный цвет;
//! - каждая клетка рисуется квадратом `scale × scale` пикселей.

use image::{ImageBuffer, Rgba};

use super::{Terrain, Tile};
use crate::genre::GenrePalette;

impl Tile {
    #[must_use]
    pub fn to_rgb(self, palette: &GenrePalette) -> [u8; 3] {
        match self {
            Tile::Wall => palette.primary,
            Tile::Floor => palette.secondary,
            Tile::Corridor => blend(palette.primary, palette.secondary),
            Tile::Door => palette.accent,
        }
    }
}

fn blend(a: [u8; 3], b: [u8; 3]) -> [u8; 3] {
    [
        ((u16::from(a[0]) + u16::from(b[0])) / 2) as u8,
        ((u16::from(a[1]) + u16::from(b[1])) / 2) as u8,
        ((u16::from(a[2]) + u16::from(b[2])) / 2) as u8,
    ]
}

impl Terrain {
    /// RGBA-буфер размером `(width * scale) × (height * scale)`
    #[must_use]
    pub fn to_rgba_image(&self, palette: &GenrePalette, scale: u32) -> Vec<u8> {
        let scale = scale.max(1);
        let img_width = self.width * scale;
        let img_height = self.height * scale;
        let mut data = Vec::with_capacity((img_width * img_height * 4) as usize);

        for py in 0..img_height {
            for px in 0..img_width {
                let tile = self.tiles[((py / scale) * self.width + px / scale) as usize];
                let rgb = tile.to_rgb(palette);
                data.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
            }
        }
        data
    }

    pub fn save_as_png(
        &self,
        path: &str,
        palette: &GenrePalette,
        scale: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let scale = scale.max(1);
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(
            self.width * scale,
            self.height * scale,
            self.to_rgba_image(palette, scale),
        )
        .ok_or("Failed to create image buffer")?;
        img.save(path)?;
        Ok(())
    }
}
