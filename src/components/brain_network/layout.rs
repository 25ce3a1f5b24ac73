//! Deterministic node placement for layered diagrams.
//!
//! Layers are spread evenly across the usable width. Within a layer, nodes are
//! spread evenly across a vertical band centered on the canvas midline; a
//! layer's band can be compressed to draw a narrow bottleneck.

use std::ops::Range;

use super::config::LayoutConfig;
use super::types::{Node, NodeRole};

/// Compute every node position, layer-major then index-minor.
pub fn compute_layout(config: &LayoutConfig) -> Vec<Node> {
	let num_layers = config.layers.len();
	if num_layers == 0 {
		return Vec::new();
	}

	let usable_width = config.width - 2.0 * config.padding_x;
	let band = config.height - 2.0 * config.padding_y;
	let mid_y = config.height / 2.0;

	let mut nodes = Vec::with_capacity(config.layers.iter().sum());
	for (layer, &count) in config.layers.iter().enumerate() {
		let x = if num_layers == 1 {
			config.width / 2.0
		} else {
			config.padding_x + layer as f64 * (usable_width / (num_layers - 1) as f64)
		};
		let spread = band * config.compression_for(layer);
		let role = NodeRole::for_layer(layer, num_layers);

		for index in 0..count {
			let y = if count == 1 {
				mid_y
			} else {
				mid_y - spread / 2.0 + index as f64 * (spread / (count - 1) as f64)
			};
			nodes.push(Node {
				layer,
				index,
				x,
				y,
				role,
			});
		}
	}
	nodes
}

/// Start offset of each layer in the flat node list.
pub fn layer_offsets(layers: &[usize]) -> Vec<usize> {
	layers
		.iter()
		.scan(0, |acc, &count| {
			let start = *acc;
			*acc += count;
			Some(start)
		})
		.collect()
}

/// Flat-list index range covering `layer`.
pub fn layer_range(layers: &[usize], layer: usize) -> Range<usize> {
	let start: usize = layers.iter().take(layer).sum();
	start..start + layers.get(layer).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::brain_network::config::LayerCompression;

	fn layout(layers: Vec<usize>) -> LayoutConfig {
		LayoutConfig {
			layers,
			compression: Vec::new(),
			..LayoutConfig::default()
		}
	}

	#[test]
	fn default_diagram_has_22_nodes() {
		let nodes = compute_layout(&LayoutConfig::default());
		assert_eq!(nodes.len(), 22);
	}

	#[test]
	fn x_is_shared_within_layer_and_increases_across_layers() {
		let config = layout(vec![6, 4, 2, 4, 6]);
		let nodes = compute_layout(&config);
		let mut layer_x = Vec::new();
		for layer in 0..5 {
			let xs: Vec<f64> = nodes
				.iter()
				.filter(|n| n.layer == layer)
				.map(|n| n.x)
				.collect();
			assert!(xs.windows(2).all(|w| w[0] == w[1]));
			layer_x.push(xs[0]);
		}
		assert!(layer_x.windows(2).all(|w| w[0] < w[1]));
		assert_eq!(layer_x[0], 60.0);
		assert_eq!(layer_x[4], 740.0);
	}

	#[test]
	fn single_node_layer_sits_on_the_midline() {
		let nodes = compute_layout(&layout(vec![3, 1]));
		assert_eq!(nodes.len(), 4);
		assert_eq!(nodes[3].layer, 1);
		assert_eq!(nodes[3].y, 200.0);
	}

	#[test]
	fn compressed_layer_spread_scales_and_stays_centered() {
		let plain = compute_layout(&layout(vec![4, 4]));
		let squeezed = compute_layout(&LayoutConfig {
			compression: vec![LayerCompression {
				layer: 1,
				factor: 0.35,
			}],
			..layout(vec![4, 4])
		});

		let spread = |nodes: &[Node], layer| {
			let ys: Vec<f64> = nodes
				.iter()
				.filter(|n| n.layer == layer)
				.map(|n| n.y)
				.collect();
			let (min, max) = (ys[0], ys[ys.len() - 1]);
			(max - min, (max + min) / 2.0)
		};

		let (full, full_center) = spread(&plain, 1);
		let (narrow, narrow_center) = spread(&squeezed, 1);
		assert!((narrow - 0.35 * full).abs() < 1e-9);
		assert!((full_center - 200.0).abs() < 1e-9);
		assert!((narrow_center - 200.0).abs() < 1e-9);
		assert_eq!(spread(&squeezed, 0).0, full);
	}

	#[test]
	fn uncompressed_layer_fills_the_padded_band() {
		let nodes = compute_layout(&layout(vec![6]));
		assert_eq!(nodes[0].y, 40.0);
		assert_eq!(nodes[5].y, 360.0);
		assert_eq!(nodes[0].x, 400.0);
	}

	#[test]
	fn empty_inputs_produce_empty_layout() {
		assert!(compute_layout(&layout(Vec::new())).is_empty());
		let nodes = compute_layout(&layout(vec![2, 0, 2]));
		assert_eq!(nodes.len(), 4);
		assert!(nodes.iter().all(|n| n.layer != 1));
	}

	#[test]
	fn layout_is_deterministic() {
		let config = LayoutConfig::default();
		assert_eq!(compute_layout(&config), compute_layout(&config));
	}

	#[test]
	fn offsets_and_ranges_index_the_flat_list() {
		let layers = [6, 4, 2, 4, 6];
		assert_eq!(layer_offsets(&layers), vec![0, 6, 10, 12, 16]);
		assert_eq!(layer_range(&layers, 2), 10..12);
		assert_eq!(layer_range(&layers, 9), 22..22);
	}
}
