//! Raster configuration and texture size helpers.
//!
//! Static tables used by both the editor-facing layer and the compute crate.

use crate::{Result, TerrainPaintError};

/// Exclusive upper bound for either texture dimension.
pub const MAX_TEXTURE_DIMENSION: u32 = 8192;

/// Fallback pattern drawn when there are no influence nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckerboardConfig {
    /// Cells along the shorter raster side.
    pub cells: f32,
    /// Drawn when either cell coordinate is even.
    pub color_a: [u8; 4],
    /// Drawn when both cell coordinates are odd.
    pub color_b: [u8; 4],
}

pub static CHECKERBOARD: CheckerboardConfig = CheckerboardConfig {
    cells: 25.0,
    color_a: [255, 0, 255, 255],
    color_b: [0, 0, 0, 255],
};

/// Output target for a rasterization pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterConfig {
    /// Unique identifier
    pub id: &'static str,
    /// Human-readable name for UI display
    pub display_name: &'static str,
    /// Default (width, height) in pixels
    pub default_size: (u32, u32),
    /// Whether the graph overlay is drawn on top of the field
    pub draw_graph_overlay: bool,
}

/// Interactive preview shown next to the graph editor.
pub static PREVIEW_CONFIG: RasterConfig = RasterConfig {
    id: "preview",
    display_name: "Preview",
    default_size: (512, 512),
    draw_graph_overlay: true,
};

/// Final texture written out by the bake step.
pub static BAKE_CONFIG: RasterConfig = RasterConfig {
    id: "bake",
    display_name: "Bake",
    default_size: (512, 512),
    draw_graph_overlay: false,
};

/// Look up a raster configuration by ID.
pub fn get_raster_config(id: &str) -> Option<&'static RasterConfig> {
    match id {
        "preview" => Some(&PREVIEW_CONFIG),
        "bake" => Some(&BAKE_CONFIG),
        _ => None,
    }
}

/// Reject sizes the rasterizer cannot work with (zero on either side).
pub fn check_raster_size(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(TerrainPaintError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Texture size accepted for baking: `1 <= side < MAX_TEXTURE_DIMENSION`.
pub fn validate_texture_size(width: u32, height: u32) -> Result<()> {
    check_raster_size(width, height)?;
    if width >= MAX_TEXTURE_DIMENSION || height >= MAX_TEXTURE_DIMENSION {
        return Err(TerrainPaintError::InvalidDimensions { width, height });
    }
    Ok(())
}
