pub mod checkerboard;
pub mod color_field;
pub mod coloring;
pub mod graph_overlay;
pub mod rasterize;
pub mod render;

pub use checkerboard::{checkerboard_pixel, checkerboard_pixel_with};
pub use color_field::{
    compute_color_for_pixel, influence_weight, rasterize_color_field, ColorField, D_MAX,
};
pub use coloring::{assign_classes, color_graph, color_model, first_fit, ColoringOutcome};
pub use graph_overlay::{draw_graph_overlay, OverlayStyle};
pub use rasterize::{rasterize_with, RasterBuffer};
pub use render::{render_document, render_graph};

// Re-export core types for convenience
pub use terrainpaint_core::*;
