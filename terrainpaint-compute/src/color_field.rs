//! Distance-weighted blending of influence nodes into a color field.

use crate::checkerboard::checkerboard_pixel;
use crate::rasterize::{rasterize_with, RasterBuffer};
use std::f32::consts::SQRT_2;
use terrainpaint_core::{
    check_raster_size, validate_nodes, InfluenceNode, LinearColor, Result, TerrainPaintError,
};

/// Largest possible distance inside the unit square.
pub const D_MAX: f32 = SQRT_2;

/// Linear falloff weight of `node` at `uv`: 1 on the node, 0 at `D_MAX`.
pub fn influence_weight(node: &InfluenceNode, uv: [f32; 2]) -> f32 {
    let d = (node.distance_to(uv) / node.distance_modifier).clamp(0.0, D_MAX);
    1.0 - d / D_MAX
}

/// Read-only view over a validated node set.
///
/// Construction checks every node, so sampling never divides by zero or
/// produces non-finite colors.
#[derive(Clone, Copy, Debug)]
pub struct ColorField<'a> {
    nodes: &'a [InfluenceNode],
}

impl<'a> ColorField<'a> {
    pub fn new(nodes: &'a [InfluenceNode]) -> Result<Self> {
        validate_nodes(nodes)?;
        Ok(Self { nodes })
    }

    pub fn nodes(&self) -> &'a [InfluenceNode] {
        self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Weighted sum of all node colors at `uv`, before normalization.
    pub fn accumulate(&self, uv: [f32; 2]) -> LinearColor {
        self.nodes
            .iter()
            .fold(LinearColor::TRANSPARENT, |sum, node| {
                sum + node.color * (influence_weight(node, uv) * node.intensity)
            })
    }

    /// Normalized linear color at `uv`, alpha forced to 1.
    pub fn color_at_uv(&self, uv: [f32; 2]) -> LinearColor {
        self.accumulate(uv).normalize_to_max()
    }

    /// Display color of pixel (x, y) in a `width` x `height` raster.
    /// The caller keeps (x, y) inside the raster. Falls back to the checkerboard when there are no nodes.
    pub fn color_at_pixel(&self, x: u32, y: u32, width: u32, height: u32) -> [u8; 4] {
        if self.nodes.is_empty() {
            return checkerboard_pixel(x, y, width, height);
        }
        let uv = [x as f32 / width as f32, y as f32 / height as f32];
        self.color_at_uv(uv).to_srgb8()
    }

    pub fn rasterize(&self, width: u32, height: u32) -> Result<RasterBuffer> {
        rasterize_with(width, height, |x, y| self.color_at_pixel(x, y, width, height))
    }
}

/// Display color of a single pixel for `nodes`.
pub fn compute_color_for_pixel(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    nodes: &[InfluenceNode],
) -> Result<[u8; 4]> {
    check_raster_size(width, height)?;
    if x >= width || y >= height {
        return Err(TerrainPaintError::PixelOutOfRange {
            x,
            y,
            width,
            height,
        });
    }
    Ok(ColorField::new(nodes)?.color_at_pixel(x, y, width, height))
}

/// Rasterize the color field of `nodes` into a row-major RGBA8 buffer.
pub fn rasterize_color_field(
    width: u32,
    height: u32,
    nodes: &[InfluenceNode],
) -> Result<RasterBuffer> {
    let field = ColorField::new(nodes)?;
    let raster = field.rasterize(width, height)?;
    log::debug!(
        "Rasterized {}x{} color field from {} nodes",
        width,
        height,
        nodes.len()
    );
    Ok(raster)
}
