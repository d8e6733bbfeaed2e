//! Preview drawing of the node graph: edges as lines, nodes as discs.

use crate::rasterize::RasterBuffer;
use terrainpaint_core::{validate_nodes, Edge, InfluenceNode, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    /// Node disc radius in pixels
    pub node_radius: f32,
    pub edge_color: [u8; 4],
    pub background: [u8; 4],
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            node_radius: 6.0,
            edge_color: [255, 255, 255, 255],
            background: [0, 0, 0, 0],
        }
    }
}

/// Pixel-space center of a node.
fn node_center(node: &InfluenceNode, width: u32, height: u32) -> (f32, f32) {
    (
        node.uv[0] * (width - 1) as f32,
        node.uv[1] * (height - 1) as f32,
    )
}

fn draw_line(raster: &mut RasterBuffer, from: (f32, f32), to: (f32, f32), color: [u8; 4]) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = (from.0 + dx * t).round() as i64;
        let y = (from.1 + dy * t).round() as i64;
        raster.set_pixel(x, y, color);
    }
}

fn draw_disc(raster: &mut RasterBuffer, center: (f32, f32), radius: f32, color: [u8; 4]) {
    let r_sq = radius * radius;
    let min_x = (center.0 - radius).floor() as i64;
    let max_x = (center.0 + radius).ceil() as i64;
    let min_y = (center.1 - radius).floor() as i64;
    let max_y = (center.1 + radius).ceil() as i64;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let (fx, fy) = (x as f32 - center.0, y as f32 - center.1);
            if fx * fx + fy * fy <= r_sq {
                raster.set_pixel(x, y, color);
            }
        }
    }
}

/// Draw the graph on a `background`-filled buffer.
///
/// Nodes use their own color (normalized, opaque) and must pass
/// [`validate_nodes`]. Edges that reference missing nodes are skipped.
pub fn draw_graph_overlay(
    width: u32,
    height: u32,
    nodes: &[InfluenceNode],
    edges: &[Edge],
    style: &OverlayStyle,
) -> Result<RasterBuffer> {
    validate_nodes(nodes)?;
    let mut raster = RasterBuffer::filled(width, height, style.background)?;

    let centers: Vec<(f32, f32)> = nodes
        .iter()
        .map(|node| node_center(node, width, height))
        .collect();

    let mut skipped = 0;
    for edge in edges.iter().filter(|e| !e.is_self_loop()) {
        match (centers.get(edge.a), centers.get(edge.b)) {
            (Some(from), Some(to)) => draw_line(&mut raster, *from, *to, style.edge_color),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        log::debug!("Graph overlay skipped {skipped} edges with missing endpoints");
    }

    for (node, center) in nodes.iter().zip(&centers) {
        let color = node.color.normalize_to_max().to_srgb8();
        draw_disc(&mut raster, *center, style.node_radius, color);
    }

    Ok(raster)
}
