use serde::{Deserialize, Serialize};

/// Node ordering strategy used by the graph coloring engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColoringAlgorithm {
    /// Nodes in array order.
    #[default]
    Greedy,
    /// Nodes by descending degree.
    WelshPowell,
    /// Most saturated uncolored node first.
    DSatur,
}

impl ColoringAlgorithm {
    pub const ALL: [ColoringAlgorithm; 3] = [Self::Greedy, Self::WelshPowell, Self::DSatur];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Greedy => "Greedy",
            Self::WelshPowell => "Welsh-Powell",
            Self::DSatur => "DSatur",
        }
    }
}
