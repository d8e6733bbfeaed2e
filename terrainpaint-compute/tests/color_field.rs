use terrainpaint_compute::{
    checkerboard_pixel, color_model, compute_color_for_pixel, draw_graph_overlay,
    rasterize_color_field, ColorField, InfluenceNode, LinearColor, OverlayStyle,
    TerrainPaintDocument, TerrainPaintError, CHECKERBOARD,
};

fn sample_nodes() -> Vec<InfluenceNode> {
    vec![
        InfluenceNode::new([0.2, 0.3], LinearColor::rgb(1.0, 0.2, 0.0)),
        InfluenceNode::new([0.8, 0.4], LinearColor::rgb(0.0, 0.4, 1.0)).with_intensity(1.5),
        InfluenceNode::new([0.5, 0.9], LinearColor::rgb(0.1, 1.0, 0.1))
            .with_distance_modifier(0.5),
    ]
}

#[test]
fn checkerboard_is_deterministic() {
    let first = rasterize_color_field(100, 100, &[]).unwrap();
    let second = rasterize_color_field(100, 100, &[]).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.pixel(0, 0), first.pixel(25, 25));
    assert_eq!(first.pixel(0, 0), Some(CHECKERBOARD.color_a));
}

#[test]
fn empty_field_raster_matches_checkerboard_everywhere() {
    let raster = rasterize_color_field(64, 40, &[]).unwrap();
    for y in 0..40 {
        for x in 0..64 {
            assert_eq!(raster.pixel(x, y), Some(checkerboard_pixel(x, y, 64, 40)));
        }
    }
}

#[test]
fn parallel_raster_matches_per_pixel_evaluation() {
    let nodes = sample_nodes();
    let (width, height) = (37, 23);
    let raster = rasterize_color_field(width, height, &nodes).unwrap();

    assert_eq!(raster.pixels.len(), (width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let expected = compute_color_for_pixel(x, y, width, height, &nodes).unwrap();
            assert_eq!(raster.pixels[(y * width + x) as usize], expected, "({x}, {y})");
        }
    }
}

#[test]
fn raster_output_is_always_opaque() {
    let raster = rasterize_color_field(16, 16, &sample_nodes()).unwrap();
    assert!(raster.pixels.iter().all(|p| p[3] == 255));
}

#[test]
fn single_node_field_fades_toward_corners() {
    let nodes = [InfluenceNode::new([0.5, 0.5], LinearColor::rgb(1.0, 0.0, 0.0))];
    let field = ColorField::new(&nodes).unwrap();

    let center = field.color_at_uv([0.5, 0.5]);
    let corner = field.color_at_uv([0.0, 0.0]);

    assert!((center.r - 1.0).abs() < 1e-5);
    assert!((corner.r - 0.5).abs() < 1e-5);
    assert_eq!(center.a, 1.0);
    assert_eq!(corner.a, 1.0);
    assert_eq!(corner.g, 0.0);
    assert_eq!(corner.b, 0.0);
}

#[test]
fn overlapping_red_nodes_normalize_to_pure_red() {
    let nodes = [
        InfluenceNode::new([0.5, 0.5], LinearColor::rgb(1.0, 0.0, 0.0)),
        InfluenceNode::new([0.5, 0.5], LinearColor::rgb(1.0, 0.0, 0.0)),
    ];
    let field = ColorField::new(&nodes).unwrap();
    assert_eq!(field.color_at_uv([0.5, 0.5]), LinearColor::rgb(1.0, 0.0, 0.0));
}

#[test]
fn field_does_not_mutate_nodes() {
    let nodes = sample_nodes();
    let before = nodes.clone();
    rasterize_color_field(8, 8, &nodes).unwrap();
    assert_eq!(nodes, before);
}

#[test]
fn invalid_nodes_fail_fast() {
    let mut nodes = sample_nodes();
    nodes[2].distance_modifier = -1.0;
    assert!(matches!(
        rasterize_color_field(8, 8, &nodes),
        Err(TerrainPaintError::InvalidDistanceModifier { index: 2, .. })
    ));
}

#[test]
fn document_to_preview_pipeline() {
    let json = r#"{
        "version": 1,
        "texture_size": [32, 32],
        "nodes": [
            { "uv": [0.25, 0.25] },
            { "uv": [0.75, 0.25] },
            { "uv": [0.5, 0.75], "distance_modifier": 0.75 }
        ],
        "connections": [ { "a": 1, "b": 0 }, { "a": 0, "b": 1 }, { "a": 2, "b": 0 }, { "a": 2, "b": 1 } ],
        "palette_preset": "Grassy",
        "algorithm": "DSatur"
    }"#;

    let document = TerrainPaintDocument::from_json(json).unwrap();
    let mut graph = document.graph();
    assert_eq!(graph.edges.len(), 3);

    let palette = document.effective_palette();
    let outcome = color_model(&mut graph, &palette, document.algorithm).unwrap();
    assert_eq!(outcome.class_count, 3);
    assert_eq!(outcome.overflowed, 0);

    let (width, height) = document.texture_size;
    let mut preview = rasterize_color_field(width, height, &graph.nodes).unwrap();
    let overlay = draw_graph_overlay(
        width,
        height,
        &graph.nodes,
        &graph.edges,
        &OverlayStyle::default(),
    )
    .unwrap();
    preview.composite_over(&overlay).unwrap();

    assert_eq!(preview.as_bytes().len(), (width * height * 4) as usize);
    // Node 0 sits at (0.25 * 31, 0.25 * 31) and is drawn in its palette color
    let node_color = graph.nodes[0].color.normalize_to_max().to_srgb8();
    assert_eq!(preview.pixel(8, 8), Some(node_color));
}
