pub mod algorithm;
pub mod color;
pub mod config;
pub mod document;
pub mod edge;
pub mod error;
pub mod graph;
pub mod node;
pub mod palette;

pub use algorithm::ColoringAlgorithm;
pub use color::{linear_to_srgb, srgb_to_linear, LinearColor};
pub use config::{
    check_raster_size, get_raster_config, validate_texture_size, CheckerboardConfig, RasterConfig,
    BAKE_CONFIG, CHECKERBOARD, MAX_TEXTURE_DIMENSION, PREVIEW_CONFIG,
};
pub use document::TerrainPaintDocument;
pub use edge::Edge;
pub use error::{Result, TerrainPaintError};
pub use graph::{adjacency, check_edge_indices, cleanup_edges, degree, neighbors, GraphModel};
pub use node::{validate_nodes, InfluenceNode};
pub use palette::{Palette, PalettePreset};
