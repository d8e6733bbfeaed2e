use terrainpaint_core::{cleanup_edges, degree, neighbors, Edge, GraphModel, InfluenceNode};

/// Deterministic pseudo-random edge lists, including loops and duplicates.
fn scrambled_edges(seed: u64, count: usize, node_count: usize) -> Vec<Edge> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };
    (0..count)
        .map(|_| Edge::new(next() % (node_count + 2), next() % (node_count + 2)))
        .collect()
}

#[test]
fn symmetric_duplicates_collapse_to_one_canonical_edge() {
    assert_eq!(Edge::new(2, 5), Edge::new(5, 2));

    let cleaned = cleanup_edges(&[Edge::new(5, 2), Edge::new(2, 5), Edge::new(2, 2)], 6);

    assert_eq!(cleaned.len(), 1);
    assert_eq!((cleaned[0].a, cleaned[0].b), (2, 5));
}

#[test]
fn cleanup_is_idempotent() {
    for seed in 0..50 {
        let raw = scrambled_edges(seed, 40, 8);
        let once = cleanup_edges(&raw, 8);
        let twice = cleanup_edges(&once, 8);
        let pairs = |edges: &[Edge]| edges.iter().map(|e| (e.a, e.b)).collect::<Vec<_>>();
        assert_eq!(pairs(&once), pairs(&twice), "seed {seed}");
    }
}

#[test]
fn cleanup_output_satisfies_invariants() {
    for seed in 0..50 {
        let cleaned = cleanup_edges(&scrambled_edges(seed, 40, 8), 8);
        for (i, edge) in cleaned.iter().enumerate() {
            assert!(edge.a < edge.b, "seed {seed}: {edge:?} not canonical");
            assert!(edge.b < 8, "seed {seed}: {edge:?} out of range");
            assert!(
                !cleaned[i + 1..].contains(edge),
                "seed {seed}: {edge:?} duplicated"
            );
        }
        assert!(cleaned.windows(2).all(|w| w[0].a <= w[1].a), "seed {seed}");
    }
}

#[test]
fn cleanup_keeps_first_occurrence_order_within_equal_first_index() {
    let cleaned = cleanup_edges(
        &[Edge::new(4, 1), Edge::new(1, 2), Edge::new(2, 1), Edge::new(0, 3)],
        5,
    );
    let pairs: Vec<_> = cleaned.iter().map(|e| (e.a, e.b)).collect();
    assert_eq!(pairs, vec![(0, 3), (1, 4), (1, 2)]);
}

#[test]
fn neighbor_queries_match_after_cleanup() {
    let raw = scrambled_edges(7, 30, 6);
    let cleaned = cleanup_edges(&raw, 6);
    for node in 0..6 {
        let from_cleaned = neighbors(node, &cleaned);
        assert_eq!(degree(node, &cleaned), from_cleaned.len());
        assert!(!from_cleaned.contains(&node));
    }
}

#[test]
fn model_cleanup_never_touches_nodes() {
    let nodes: Vec<InfluenceNode> = (0..4)
        .map(|i| InfluenceNode::default().with_intensity(i as f32))
        .collect();
    let mut graph = GraphModel::new(nodes.clone(), scrambled_edges(3, 20, 4));
    graph.cleanup();
    assert_eq!(graph.nodes, nodes);
    assert!(graph.validate().is_ok());
}
