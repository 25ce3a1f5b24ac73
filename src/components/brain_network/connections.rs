//! Fully connected edges between adjacent layers, and drawing the diagram.

use std::ops::Range;

use super::layout::layer_range;
use super::random::RandomSource;
use super::scene::{Scene, SceneLayer};
use super::theme::NetworkPalette;
use super::types::{Edge, HighlightCategory, Node, NodeRole};

/// Circle radius for ordinary nodes.
pub const NODE_RADIUS: f64 = 6.0;
/// Circle radius for the latent bottleneck.
pub const LATENT_NODE_RADIUS: f64 = 8.0;

/// Connect every node in layer `i` to every node in layer `i + 1`.
///
/// Edges come out grouped by source layer, source-major within a group.
/// `layers` must be the node counts `nodes` was laid out from.
pub fn build_edges(nodes: &[Node], layers: &[usize], rng: &mut impl RandomSource) -> Vec<Edge> {
	let num_layers = layers.len();
	let capacity = layers.windows(2).map(|w| w[0] * w[1]).sum();
	let mut edges = Vec::with_capacity(capacity);

	for layer in 0..num_layers.saturating_sub(1) {
		let category = HighlightCategory::for_source_layer(layer, num_layers);
		for source in layer_range(layers, layer) {
			for target in layer_range(layers, layer + 1) {
				let (from, to) = (&nodes[source], &nodes[target]);
				edges.push(Edge {
					layer,
					source,
					target,
					x1: from.x,
					y1: from.y,
					x2: to.x,
					y2: to.y,
					mid_x: (from.x + to.x) / 2.0,
					mid_y: (from.y + to.y) / 2.0,
					weight: rng.range(-1.0, 1.0),
					category,
				});
			}
		}
	}
	edges
}

/// Edge index range for each source layer (the last layer has none).
pub fn edge_ranges(layers: &[usize]) -> Vec<Range<usize>> {
	let mut start = 0;
	(0..layers.len())
		.map(|layer| {
			let count = layers.get(layer + 1).map_or(0, |next| layers[layer] * next);
			let range = start..start + count;
			start += count;
			range
		})
		.collect()
}

/// The fixed diagram plus the scene primitives drawn for it.
pub struct DrawnNetwork<H> {
	/// Node count per layer.
	pub layers: Vec<usize>,
	/// Laid-out nodes, layer-major.
	pub nodes: Vec<Node>,
	/// Edges, grouped by source layer.
	pub edges: Vec<Edge>,
	/// Outgoing edge range per layer.
	pub edge_ranges: Vec<Range<usize>>,
	/// Drawn line per edge.
	pub line_handles: Vec<Option<H>>,
	/// Drawn weight label per edge.
	pub label_handles: Vec<Option<H>>,
}

impl<H> DrawnNetwork<H> {
	/// Edges leaving `layer`; empty for the last or an unknown layer.
	pub fn outgoing(&self, layer: usize) -> Range<usize> {
		self.edge_ranges.get(layer).cloned().unwrap_or(0..0)
	}
}

/// Draw lines, hidden weight labels and node circles for a built diagram.
pub fn draw_network<S: Scene>(
	scene: &mut S,
	layers: Vec<usize>,
	nodes: Vec<Node>,
	edges: Vec<Edge>,
	palette: &NetworkPalette,
) -> DrawnNetwork<S::Handle> {
	let edge_stroke = palette.edge.to_css();
	let label_fill = palette.label.to_css();

	let mut line_handles = Vec::with_capacity(edges.len());
	let mut label_handles = Vec::with_capacity(edges.len());
	for edge in &edges {
		let line = scene.line(
			SceneLayer::Edges,
			(edge.x1, edge.y1),
			(edge.x2, edge.y2),
			"connection",
		);
		if let Some(ref line) = line {
			scene.set_attr(line, "stroke", &edge_stroke);
			scene.set_attr(line, "data-layer", &edge.layer.to_string());
		}
		line_handles.push(line);

		let label = scene.text(
			SceneLayer::Labels,
			edge.mid_x,
			edge.mid_y,
			&edge.weight_text(),
			"weight-label",
		);
		if let Some(ref label) = label {
			scene.set_attr(label, "fill", &label_fill);
			scene.set_attr(label, "opacity", "0");
		}
		label_handles.push(label);
	}

	// Node circles are static after drawing.
	for node in &nodes {
		let radius = if node.role == NodeRole::Latent {
			LATENT_NODE_RADIUS
		} else {
			NODE_RADIUS
		};
		let circle = scene.circle(SceneLayer::Nodes, node.x, node.y, radius, node.role.class());
		if let Some(ref circle) = circle {
			scene.set_attr(circle, "fill", &palette.node(node.role).to_css());
		}
	}

	DrawnNetwork {
		edge_ranges: edge_ranges(&layers),
		layers,
		nodes,
		edges,
		line_handles,
		label_handles,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::brain_network::config::LayoutConfig;
	use crate::components::brain_network::layout::compute_layout;
	use crate::components::brain_network::testing::{RecordingScene, SeededRandom};

	fn build(layers: Vec<usize>) -> (Vec<Node>, Vec<Edge>) {
		let config = LayoutConfig {
			layers: layers.clone(),
			..LayoutConfig::default()
		};
		let nodes = compute_layout(&config);
		let edges = build_edges(&nodes, &layers, &mut SeededRandom::new(1));
		(nodes, edges)
	}

	#[test]
	fn default_diagram_has_64_edges() {
		let (nodes, edges) = build(vec![6, 4, 2, 4, 6]);
		assert_eq!(nodes.len(), 22);
		assert_eq!(edges.len(), 64);
		let per_layer: Vec<usize> = (0..4)
			.map(|l| edges.iter().filter(|e| e.layer == l).count())
			.collect();
		assert_eq!(per_layer, vec![24, 8, 8, 24]);
	}

	#[test]
	fn edges_only_join_adjacent_layers() {
		let (nodes, edges) = build(vec![3, 5, 2, 4]);
		for edge in &edges {
			assert_eq!(nodes[edge.source].layer, edge.layer);
			assert_eq!(nodes[edge.target].layer, edge.layer + 1);
		}
		let mut pairs: Vec<(usize, usize)> = edges.iter().map(|e| (e.source, e.target)).collect();
		pairs.sort_unstable();
		pairs.dedup();
		assert_eq!(pairs.len(), 3 * 5 + 5 * 2 + 2 * 4);
	}

	#[test]
	fn weights_are_in_range_with_four_decimals() {
		let (_, edges) = build(vec![6, 4, 2, 4, 6]);
		for edge in &edges {
			assert!((-1.0..=1.0).contains(&edge.weight));
			let text = edge.weight_text();
			let decimals = text.split('.').nth(1).unwrap();
			assert_eq!(decimals.len(), 4, "{}", text);
		}
	}

	#[test]
	fn midpoints_average_the_endpoints() {
		let (nodes, edges) = build(vec![2, 2]);
		let edge = &edges[1];
		assert_eq!(edge.mid_x, (nodes[0].x + nodes[3].x) / 2.0);
		assert_eq!(edge.mid_y, (nodes[0].y + nodes[3].y) / 2.0);
	}

	#[test]
	fn single_layer_or_empty_has_no_edges() {
		assert!(build(vec![5]).1.is_empty());
		assert!(build(Vec::new()).1.is_empty());
	}

	#[test]
	fn edge_ranges_follow_source_layers() {
		let ranges = edge_ranges(&[6, 4, 2, 4, 6]);
		assert_eq!(ranges, vec![0..24, 24..32, 32..40, 40..64, 64..64]);
		let (_, edges) = build(vec![6, 4, 2, 4, 6]);
		for (layer, range) in ranges.iter().enumerate() {
			assert!(edges[range.clone()].iter().all(|e| e.layer == layer));
		}
	}

	#[test]
	fn drawing_creates_one_primitive_per_element() {
		let layers = vec![6, 4, 2, 4, 6];
		let (nodes, edges) = build(layers.clone());
		let mut scene = RecordingScene::default();
		let drawn = draw_network(&mut scene, layers, nodes, edges, &NetworkPalette::default());

		assert_eq!(scene.live_in(SceneLayer::Edges), 64);
		assert_eq!(scene.live_in(SceneLayer::Labels), 64);
		assert_eq!(scene.live_in(SceneLayer::Nodes), 22);
		assert_eq!(scene.live_in(SceneLayer::Overlay), 0);

		let label = drawn.label_handles[0].unwrap();
		assert_eq!(scene.primitives[label].attrs["opacity"], "0");
		assert_eq!(
			scene.primitives[label].text.as_deref(),
			Some(drawn.edges[0].weight_text().as_str())
		);
		assert_eq!(drawn.outgoing(1), 24..32);
		assert_eq!(drawn.outgoing(7), 0..0);
	}

	#[test]
	fn node_circles_carry_role_radius_and_fill() {
		let layers = vec![6, 4, 2, 4, 6];
		let (nodes, edges) = build(layers.clone());
		let mut scene = RecordingScene::default();
		let palette = NetworkPalette::default();
		draw_network(&mut scene, layers, nodes, edges, &palette);

		let latent: Vec<_> = scene
			.live("circle")
			.into_iter()
			.filter(|p| p.classes.contains("node-latent"))
			.collect();
		assert_eq!(latent.len(), 2);
		for circle in latent {
			assert_eq!(circle.attrs["r"].parse::<f64>().unwrap(), LATENT_NODE_RADIUS);
			assert_eq!(circle.attrs["fill"], palette.latent.to_css());
		}
	}
}
