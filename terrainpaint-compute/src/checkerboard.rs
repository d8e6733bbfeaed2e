//! "No data" pattern drawn when a field has no influence nodes.

use terrainpaint_core::{CheckerboardConfig, CHECKERBOARD};

/// Checkerboard color for pixel (x, y) of a `width` x `height` raster.
///
/// Cells are square: both axes are scaled by the shorter side.
pub fn checkerboard_pixel(x: u32, y: u32, width: u32, height: u32) -> [u8; 4] {
    checkerboard_pixel_with(&CHECKERBOARD, x, y, width, height)
}

pub fn checkerboard_pixel_with(
    config: &CheckerboardConfig,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> [u8; 4] {
    let shorter = width.min(height).max(1) as f32;
    let cell_x = ((x as f32 / shorter) * config.cells).floor() as i64;
    let cell_y = ((y as f32 / shorter) * config.cells).floor() as i64;

    if cell_x % 2 == 0 || cell_y % 2 == 0 {
        config.color_a
    } else {
        config.color_b
    }
}
