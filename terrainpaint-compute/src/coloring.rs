//! Graph coloring over a palette.
//!
//! All three strategies share the same per-node rule ([`first_fit`]) and only
//! differ in the order nodes are visited.

use std::cmp::Reverse;
use std::collections::BTreeSet;
use terrainpaint_core::{
    adjacency, check_edge_indices, ColoringAlgorithm, Edge, GraphModel, InfluenceNode, Palette,
    Result,
};

/// Result of a coloring pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColoringOutcome {
    /// Color class assigned to each node, by node index.
    pub classes: Vec<usize>,
    /// Number of distinct classes in use.
    pub class_count: usize,
    /// Nodes whose class had no palette entry.
    pub overflowed: usize,
}

impl ColoringOutcome {
    /// True if no edge connects two nodes of the same class.
    pub fn is_proper(&self, edges: &[Edge]) -> bool {
        edges.iter().filter(|e| !e.is_self_loop()).all(|e| {
            match (self.classes.get(e.a), self.classes.get(e.b)) {
                (Some(a), Some(b)) => a != b,
                _ => false,
            }
        })
    }
}

/// Smallest non-negative class not present in `used`.
pub fn first_fit(used: &BTreeSet<usize>) -> usize {
    let mut class = 0;
    while used.contains(&class) {
        class += 1;
    }
    class
}

/// Working state shared by the strategies.
struct Coloring {
    adjacency: Vec<BTreeSet<usize>>,
    classes: Vec<Option<usize>>,
}

impl Coloring {
    fn new(node_count: usize, edges: &[Edge]) -> Self {
        Self {
            adjacency: adjacency(node_count, edges),
            classes: vec![None; node_count],
        }
    }

    fn degree(&self, node: usize) -> usize {
        self.adjacency[node].len()
    }

    /// Classes of the already-colored neighbors of `node`.
    fn neighbor_classes(&self, node: usize) -> BTreeSet<usize> {
        self.adjacency[node]
            .iter()
            .filter_map(|&n| self.classes[n])
            .collect()
    }

    fn color_node(&mut self, node: usize) {
        let class = first_fit(&self.neighbor_classes(node));
        self.classes[node] = Some(class);
    }

    fn color_in_order(&mut self, order: impl IntoIterator<Item = usize>) {
        for node in order {
            self.color_node(node);
        }
    }

    fn greedy(&mut self) {
        self.color_in_order(0..self.classes.len());
    }

    fn welsh_powell(&mut self) {
        let mut order: Vec<usize> = (0..self.classes.len()).collect();
        // Stable: equal degrees keep their original relative order
        order.sort_by_key(|&node| Reverse(self.degree(node)));
        self.color_in_order(order);
    }

    fn dsatur(&mut self) {
        while let Some(node) = self.most_saturated() {
            self.color_node(node);
        }
    }

    /// Uncolored node with the highest saturation degree. Ties go to the
    /// higher degree, then to the lower index.
    fn most_saturated(&self) -> Option<usize> {
        (0..self.classes.len())
            .filter(|&node| self.classes[node].is_none())
            .max_by_key(|&node| {
                (
                    self.neighbor_classes(node).len(),
                    self.degree(node),
                    Reverse(node),
                )
            })
    }

    fn into_classes(self) -> Vec<usize> {
        self.classes
            .into_iter()
            .map(|class| class.unwrap_or(0))
            .collect()
    }
}

/// Assign color classes to every node, without touching the nodes.
///
/// Edges referencing missing nodes are rejected.
pub fn assign_classes(
    node_count: usize,
    edges: &[Edge],
    algorithm: ColoringAlgorithm,
) -> Result<Vec<usize>> {
    check_edge_indices(edges, node_count)?;

    let mut coloring = Coloring::new(node_count, edges);
    match algorithm {
        ColoringAlgorithm::Greedy => coloring.greedy(),
        ColoringAlgorithm::WelshPowell => coloring.welsh_powell(),
        ColoringAlgorithm::DSatur => coloring.dsatur(),
    }
    Ok(coloring.into_classes())
}

/// Overwrite every node's color with the palette entry of its color class.
///
/// Adjacent nodes always receive different classes. Classes past the end of
/// the palette get [`Palette::OVERFLOW_COLOR`]. Nodes are never reordered and
/// are left untouched if the edge list is invalid.
pub fn color_graph(
    nodes: &mut [InfluenceNode],
    edges: &[Edge],
    palette: &Palette,
    algorithm: ColoringAlgorithm,
) -> Result<ColoringOutcome> {
    if nodes.is_empty() {
        check_edge_indices(edges, 0)?;
        return Ok(ColoringOutcome::default());
    }

    let classes = assign_classes(nodes.len(), edges, algorithm)?;

    let mut overflowed = 0;
    for (node, &class) in nodes.iter_mut().zip(&classes) {
        if class >= palette.len() {
            overflowed += 1;
        }
        node.color = palette.color_for_class(class);
    }

    let class_count = classes.iter().collect::<BTreeSet<_>>().len();
    log::debug!(
        "{} colored {} nodes with {} classes",
        algorithm.display_name(),
        nodes.len(),
        class_count
    );
    if overflowed > 0 {
        log::warn!(
            "Palette '{}' has {} colors but {} classes were needed; {} nodes use the overflow color",
            palette.id,
            palette.len(),
            class_count,
            overflowed
        );
    }

    Ok(ColoringOutcome {
        classes,
        class_count,
        overflowed,
    })
}

/// [`color_graph`] over a [`GraphModel`]'s own nodes and edges.
pub fn color_model(
    graph: &mut GraphModel,
    palette: &Palette,
    algorithm: ColoringAlgorithm,
) -> Result<ColoringOutcome> {
    color_graph(&mut graph.nodes, &graph.edges, palette, algorithm)
}
