//! JSON description of a complete painting job.

use crate::config::{validate_texture_size, BAKE_CONFIG};
use crate::{
    ColoringAlgorithm, Edge, GraphModel, InfluenceNode, Palette, PalettePreset, Result,
    TerrainPaintError,
};
use serde::{Deserialize, Serialize};

/// Everything needed to color a graph and bake its color field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainPaintDocument {
    /// Schema version for future migrations
    pub version: u32,
    pub texture_size: (u32, u32),
    #[serde(default)]
    pub nodes: Vec<InfluenceNode>,
    #[serde(default)]
    pub connections: Vec<Edge>,
    /// When not `None`, overrides `palette`
    #[serde(default)]
    pub palette_preset: PalettePreset,
    #[serde(default)]
    pub palette: Palette,
    #[serde(default)]
    pub algorithm: ColoringAlgorithm,
}

impl Default for TerrainPaintDocument {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            texture_size: BAKE_CONFIG.default_size,
            nodes: Vec::new(),
            connections: Vec::new(),
            palette_preset: PalettePreset::None,
            palette: Palette::default(),
            algorithm: ColoringAlgorithm::Greedy,
        }
    }
}

impl TerrainPaintDocument {
    pub const CURRENT_VERSION: u32 = 1;

    /// Parse a document, rejecting unknown versions and unusable texture sizes.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: Self = serde_json::from_str(json)?;
        if document.version != Self::CURRENT_VERSION {
            log::warn!(
                "Rejecting document with version {} (current: {})",
                document.version,
                Self::CURRENT_VERSION
            );
            return Err(TerrainPaintError::UnsupportedVersion(document.version));
        }
        let (width, height) = document.texture_size;
        validate_texture_size(width, height)?;
        log::debug!(
            "Loaded document: {} nodes, {} connections, {}x{}",
            document.nodes.len(),
            document.connections.len(),
            width,
            height
        );
        Ok(document)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The palette selected by the preset, or the document's own palette.
    pub fn effective_palette(&self) -> Palette {
        self.palette_preset
            .palette()
            .unwrap_or_else(|| self.palette.clone())
    }

    /// Graph built from the document's nodes and connections, cleaned up.
    pub fn graph(&self) -> GraphModel {
        let mut graph = GraphModel::new(self.nodes.clone(), self.connections.clone());
        graph.cleanup();
        graph
    }
}
