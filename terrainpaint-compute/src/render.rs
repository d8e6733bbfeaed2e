//! Rendering for a raster target: color field, plus the graph overlay when
//! the target asks for it.

use crate::color_field::rasterize_color_field;
use crate::coloring::color_model;
use crate::graph_overlay::{draw_graph_overlay, OverlayStyle};
use crate::rasterize::RasterBuffer;
use terrainpaint_core::{GraphModel, RasterConfig, Result, TerrainPaintDocument};

/// Rasterize the color field of `graph` and, if `config.draw_graph_overlay`
/// is set, composite the graph on top.
pub fn render_graph(
    graph: &GraphModel,
    width: u32,
    height: u32,
    config: &RasterConfig,
    style: &OverlayStyle,
) -> Result<RasterBuffer> {
    let mut raster = rasterize_color_field(width, height, &graph.nodes)?;
    if config.draw_graph_overlay {
        let overlay = draw_graph_overlay(width, height, &graph.nodes, &graph.edges, style)?;
        raster.composite_over(&overlay)?;
    }
    log::debug!(
        "Rendered {} target at {}x{} (overlay: {})",
        config.id,
        width,
        height,
        config.draw_graph_overlay
    );
    Ok(raster)
}

/// Clean up and color the document's graph, then render it at the
/// document's texture size.
pub fn render_document(
    document: &TerrainPaintDocument,
    config: &RasterConfig,
) -> Result<RasterBuffer> {
    let mut graph = document.graph();
    color_model(&mut graph, &document.effective_palette(), document.algorithm)?;
    let (width, height) = document.texture_size;
    render_graph(&graph, width, height, config, &OverlayStyle::default())
}
