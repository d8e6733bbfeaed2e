//! Error types shared by the core and compute crates.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerrainPaintError {
    #[error("node {index} has distance modifier {value}, expected a finite value > 0")]
    InvalidDistanceModifier { index: usize, value: f32 },

    #[error("node {index} has intensity {value}, expected a finite value >= 0")]
    InvalidIntensity { index: usize, value: f32 },

    #[error("node {index} has a non-finite position or color")]
    NonFiniteNode { index: usize },

    #[error("node {index} is placed at {uv:?}, outside the unit square")]
    UvOutOfRange { index: usize, uv: [f32; 2] },

    #[error("invalid raster dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("pixel ({x}, {y}) is outside the {width}x{height} raster")]
    PixelOutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("edge references node {index}, but the graph has {node_count} nodes")]
    EdgeOutOfRange { index: usize, node_count: usize },

    #[error("failed to parse document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("unsupported document version {0}")]
    UnsupportedVersion(u32),
}

pub type Result<T> = std::result::Result<T, TerrainPaintError>;
