//! Ordered color lists used as color classes by the graph coloring engine.

use crate::LinearColor;
use serde::{Deserialize, Serialize};

/// Built-in palettes selectable by the editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PalettePreset {
    /// Use the caller supplied palette as is.
    #[default]
    None,
    Grassy,
    Magma,
    Alien,
}

impl PalettePreset {
    pub const ALL: [PalettePreset; 4] = [Self::None, Self::Grassy, Self::Magma, Self::Alien];

    pub fn id(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Grassy => "grassy",
            Self::Magma => "magma",
            Self::Alien => "alien",
        }
    }

    /// The preset palette, or None for [`PalettePreset::None`].
    pub fn palette(&self) -> Option<Palette> {
        match self {
            Self::None => None,
            Self::Grassy => Some(Palette::grassy()),
            Self::Magma => Some(Palette::magma()),
            Self::Alien => Some(Palette::alien()),
        }
    }
}

/// Named, ordered list of colors. Index `i` is color class `i`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub id: String,
    pub name: String,
    pub colors: Vec<LinearColor>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            name: "Default".to_string(),
            colors: vec![
                LinearColor::rgb(1.0, 0.0, 0.0),
                LinearColor::rgb(0.0, 1.0, 0.0),
                LinearColor::rgb(0.0, 0.0, 1.0),
                LinearColor::rgb(1.0, 1.0, 0.0),
                LinearColor::rgb(0.0, 1.0, 1.0),
                LinearColor::rgb(1.0, 0.0, 1.0),
            ],
        }
    }
}

impl Palette {
    /// Assigned to nodes whose color class has no palette entry.
    pub const OVERFLOW_COLOR: LinearColor = LinearColor::BLACK;

    pub fn new(id: impl Into<String>, name: impl Into<String>, colors: Vec<LinearColor>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            colors,
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for `class`, if the palette has one.
    pub fn get(&self, class: usize) -> Option<LinearColor> {
        self.colors.get(class).copied()
    }

    /// Color for `class`, falling back to [`Palette::OVERFLOW_COLOR`].
    pub fn color_for_class(&self, class: usize) -> LinearColor {
        self.get(class).unwrap_or(Self::OVERFLOW_COLOR)
    }

    /// Factory palettes built into the binary.
    pub fn factory_defaults() -> Vec<Palette> {
        vec![Self::default(), Self::grassy(), Self::magma(), Self::alien()]
    }

    /// Look up a factory palette by id.
    pub fn find_factory(id: &str) -> Option<Palette> {
        Self::factory_defaults().into_iter().find(|p| p.id == id)
    }

    fn from_srgb(id: &str, name: &str, colors: &[[u8; 3]]) -> Self {
        Self::new(
            id,
            name,
            colors.iter().copied().map(LinearColor::from_srgb8).collect(),
        )
    }

    fn grassy() -> Self {
        Self::from_srgb(
            "grassy",
            "Grassy",
            &[
                [86, 125, 70],
                [139, 170, 80],
                [60, 90, 45],
                [181, 163, 110],
                [112, 84, 62],
                [200, 210, 140],
            ],
        )
    }

    fn magma() -> Self {
        Self::from_srgb(
            "magma",
            "Magma",
            &[
                [40, 11, 84],
                [140, 41, 129],
                [222, 73, 104],
                [254, 159, 109],
                [252, 253, 191],
                [20, 14, 54],
            ],
        )
    }

    fn alien() -> Self {
        Self::from_srgb(
            "alien",
            "Alien",
            &[
                [57, 255, 20],
                [176, 38, 255],
                [0, 229, 255],
                [255, 0, 153],
                [204, 255, 0],
                [25, 0, 80],
            ],
        )
    }
}
