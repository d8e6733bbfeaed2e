use crate::{LinearColor, Result, TerrainPaintError};
use serde::{Deserialize, Serialize};

/// A point of color influence placed in normalized field space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfluenceNode {
    /// Position in [0,1]², (0,0) is the top-left corner of the raster.
    pub uv: [f32; 2],
    pub color: LinearColor,
    /// Scalar multiplier on the node's contribution.
    pub intensity: f32,
    /// Inverse falloff scale. Larger values let the influence reach farther.
    pub distance_modifier: f32,
}

impl Default for InfluenceNode {
    fn default() -> Self {
        Self {
            uv: [0.5, 0.5],
            color: LinearColor::WHITE,
            intensity: 1.0,
            distance_modifier: 1.0,
        }
    }
}

impl InfluenceNode {
    pub fn new(uv: [f32; 2], color: LinearColor) -> Self {
        Self {
            uv,
            color,
            ..Self::default()
        }
    }

    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_distance_modifier(mut self, distance_modifier: f32) -> Self {
        self.distance_modifier = distance_modifier;
        self
    }

    /// Check the preconditions of the color field for this node.
    /// `index` is only used to label the error.
    pub fn validate(&self, index: usize) -> Result<()> {
        if !(self.uv[0].is_finite() && self.uv[1].is_finite() && self.color.is_finite()) {
            return Err(TerrainPaintError::NonFiniteNode { index });
        }
        if !self.uv.iter().all(|c| (0.0..=1.0).contains(c)) {
            return Err(TerrainPaintError::UvOutOfRange { index, uv: self.uv });
        }
        if !self.intensity.is_finite() || self.intensity < 0.0 {
            return Err(TerrainPaintError::InvalidIntensity {
                index,
                value: self.intensity,
            });
        }
        if !self.distance_modifier.is_finite() || self.distance_modifier <= 0.0 {
            return Err(TerrainPaintError::InvalidDistanceModifier {
                index,
                value: self.distance_modifier,
            });
        }
        Ok(())
    }

    /// Euclidean distance from this node to `uv`.
    pub fn distance_to(&self, uv: [f32; 2]) -> f32 {
        let dx = uv[0] - self.uv[0];
        let dy = uv[1] - self.uv[1];
        (dx * dx + dy * dy).sqrt()
    }
}

/// Validate every node, reporting the first offender.
pub fn validate_nodes(nodes: &[InfluenceNode]) -> Result<()> {
    nodes
        .iter()
        .enumerate()
        .try_for_each(|(index, node)| node.validate(index))
}
