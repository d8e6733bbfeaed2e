//! Row-major RGBA8 pixel buffers and parallel per-pixel rendering.

use rayon::prelude::*;
use terrainpaint_core::{check_raster_size, Result, TerrainPaintError};

/// Rendered image, row-major: pixel (x, y) lives at `y * width + x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 4]>,
}

impl RasterBuffer {
    /// Buffer filled with a single color.
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Result<Self> {
        check_raster_size(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        })
    }

    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    /// Overwrite pixel (x, y). Coordinates outside the buffer are ignored.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let index = self.index(x as u32, y as u32);
        self.pixels[index] = color;
    }

    /// Flat RGBA bytes, ready for a texture upload or image encoder.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_flattened()
    }

    /// Alpha-blend `overlay` on top of this buffer. Sizes must match.
    pub fn composite_over(&mut self, overlay: &RasterBuffer) -> Result<()> {
        if overlay.width != self.width || overlay.height != self.height {
            return Err(TerrainPaintError::InvalidDimensions {
                width: overlay.width,
                height: overlay.height,
            });
        }
        for (dst, src) in self.pixels.iter_mut().zip(&overlay.pixels) {
            *dst = blend_over(*src, *dst);
        }
        Ok(())
    }
}

/// Source-over blend of two straight-alpha RGBA8 pixels.
fn blend_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    let sa = src[3] as u32;
    let inv = 255 - sa;
    let mix = |s: u8, d: u8| ((s as u32 * sa + d as u32 * inv + 127) / 255) as u8;
    [
        mix(src[0], dst[0]),
        mix(src[1], dst[1]),
        mix(src[2], dst[2]),
        (sa + (dst[3] as u32 * inv + 127) / 255).min(255) as u8,
    ]
}

/// Evaluate `shade(x, y)` for every pixel. Rows are rendered in parallel;
/// each pixel is written exactly once.
pub fn rasterize_with<F>(width: u32, height: u32, shade: F) -> Result<RasterBuffer>
where
    F: Fn(u32, u32) -> [u8; 4] + Sync,
{
    check_raster_size(width, height)?;

    let mut pixels = vec![[0u8; 4]; width as usize * height as usize];
    pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = shade(x as u32, y as u32);
            }
        });

    Ok(RasterBuffer {
        width,
        height,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rasterize_is_row_major() {
        let raster = rasterize_with(3, 2, |x, y| [x as u8, y as u8, 0, 255]).unwrap();
        assert_eq!(raster.pixels.len(), 6);
        assert_eq!(raster.pixels[raster.index(2, 1)], [2, 1, 0, 255]);
        assert_eq!(raster.pixels[4], [1, 1, 0, 255]);
    }

    #[test]
    fn rasterize_rejects_empty_rasters() {
        assert!(rasterize_with(0, 5, |_, _| [0; 4]).is_err());
    }

    #[test]
    fn pixel_outside_buffer_is_none() {
        let raster = RasterBuffer::filled(2, 2, [9, 9, 9, 255]).unwrap();
        assert_eq!(raster.pixel(1, 1), Some([9, 9, 9, 255]));
        assert_eq!(raster.pixel(2, 0), None);
    }

    #[test]
    fn set_pixel_ignores_out_of_bounds() {
        let mut raster = RasterBuffer::filled(2, 2, [0; 4]).unwrap();
        raster.set_pixel(-1, 0, [1; 4]);
        raster.set_pixel(0, 2, [1; 4]);
        raster.set_pixel(1, 0, [7; 4]);
        assert_eq!(raster.pixels, vec![[0; 4], [7; 4], [0; 4], [0; 4]]);
    }

    #[test]
    fn as_bytes_flattens_pixels() {
        let raster = RasterBuffer::filled(2, 1, [1, 2, 3, 4]).unwrap();
        assert_eq!(raster.as_bytes(), &[1, 2, 3, 4, 1, 2, 3, 4]);
    }

    #[test]
    fn composite_keeps_base_under_transparent_overlay() {
        let mut base = RasterBuffer::filled(2, 2, [10, 20, 30, 255]).unwrap();
        let mut overlay = RasterBuffer::filled(2, 2, [0, 0, 0, 0]).unwrap();
        overlay.set_pixel(0, 0, [200, 100, 50, 255]);
        base.composite_over(&overlay).unwrap();
        assert_eq!(base.pixel(0, 0), Some([200, 100, 50, 255]));
        assert_eq!(base.pixel(1, 1), Some([10, 20, 30, 255]));
    }

    #[test]
    fn composite_rejects_size_mismatch() {
        let mut base = RasterBuffer::filled(2, 2, [0; 4]).unwrap();
        let overlay = RasterBuffer::filled(3, 2, [0; 4]).unwrap();
        assert!(base.composite_over(&overlay).is_err());
    }
}
