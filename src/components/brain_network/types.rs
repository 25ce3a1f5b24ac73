//! Diagram data structures shared by layout, connections and effects.

/// Cosmetic role of a node, derived from where its layer sits in the diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeRole {
	/// First layer.
	Input,
	/// Layers between the input and the middle.
	Encoder,
	/// The middle layer of a diagram with an odd layer count.
	Latent,
	/// Layers between the middle and the output.
	Decoder,
	/// Last layer.
	Output,
}

impl NodeRole {
	/// Role for `layer` in a diagram of `num_layers` layers.
	pub fn for_layer(layer: usize, num_layers: usize) -> Self {
		if layer == 0 {
			return NodeRole::Input;
		}
		if layer + 1 == num_layers {
			return NodeRole::Output;
		}
		let middle = (num_layers - 1) as f64 / 2.0;
		let layer = layer as f64;
		if layer < middle {
			NodeRole::Encoder
		} else if layer > middle {
			NodeRole::Decoder
		} else {
			NodeRole::Latent
		}
	}

	/// CSS class attached to the node circle.
	pub fn class(self) -> &'static str {
		match self {
			NodeRole::Input => "node node-input",
			NodeRole::Encoder => "node node-encoder",
			NodeRole::Latent => "node node-latent",
			NodeRole::Decoder => "node node-decoder",
			NodeRole::Output => "node node-output",
		}
	}
}

/// Which of the two highlight colors an edge (and its particles) prefers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HighlightCategory {
	/// Early layers.
	Cyan,
	/// Late layers.
	Green,
}

impl HighlightCategory {
	/// Category for edges leaving `layer`: the first half of the diagram is cyan.
	pub fn for_source_layer(layer: usize, num_layers: usize) -> Self {
		let middle = num_layers.saturating_sub(1) as f64 / 2.0;
		if (layer as f64) < middle {
			HighlightCategory::Cyan
		} else {
			HighlightCategory::Green
		}
	}

	/// The opposite category.
	pub fn other(self) -> Self {
		match self {
			HighlightCategory::Cyan => HighlightCategory::Green,
			HighlightCategory::Green => HighlightCategory::Cyan,
		}
	}

	/// Class applied to an edge by a wave passing over it.
	pub fn wave_class(self) -> &'static str {
		match self {
			HighlightCategory::Cyan => "wave-cyan",
			HighlightCategory::Green => "wave-green",
		}
	}

	/// Class applied to a travelling particle.
	pub fn particle_class(self) -> &'static str {
		match self {
			HighlightCategory::Cyan => "particle particle-cyan",
			HighlightCategory::Green => "particle particle-green",
		}
	}
}

/// A diagram node. Position is fixed once the layout is computed.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Layer index, left to right.
	pub layer: usize,
	/// Position within the layer, top to bottom.
	pub index: usize,
	/// Horizontal center.
	pub x: f64,
	/// Vertical center.
	pub y: f64,
	/// Role derived from the layer.
	pub role: NodeRole,
}

/// A connection from a node in `layer` to a node in `layer + 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	/// Layer of the source node.
	pub layer: usize,
	/// Index of the source node in the flat node list.
	pub source: usize,
	/// Index of the target node in the flat node list.
	pub target: usize,
	/// Source x.
	pub x1: f64,
	/// Source y.
	pub y1: f64,
	/// Target x.
	pub x2: f64,
	/// Target y.
	pub y2: f64,
	/// Label anchor, halfway along the edge.
	pub mid_x: f64,
	/// Label anchor y.
	pub mid_y: f64,
	/// Decorative weight in `[-1, 1]`.
	pub weight: f64,
	/// Highlight color family.
	pub category: HighlightCategory,
}

impl Edge {
	/// Weight as shown on the label.
	pub fn weight_text(&self) -> String {
		format_weight(self.weight)
	}
}

/// Format a display weight with exactly four decimals.
pub fn format_weight(weight: f64) -> String {
	format!("{:.4}", weight)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn roles_for_five_layers() {
		let roles: Vec<_> = (0..5).map(|l| NodeRole::for_layer(l, 5)).collect();
		assert_eq!(
			roles,
			vec![
				NodeRole::Input,
				NodeRole::Encoder,
				NodeRole::Latent,
				NodeRole::Decoder,
				NodeRole::Output
			]
		);
	}

	#[test]
	fn even_layer_count_has_no_latent_layer() {
		let roles: Vec<_> = (0..4).map(|l| NodeRole::for_layer(l, 4)).collect();
		assert!(!roles.contains(&NodeRole::Latent));
		assert_eq!(roles[1], NodeRole::Encoder);
		assert_eq!(roles[2], NodeRole::Decoder);
	}

	#[test]
	fn single_layer_is_input() {
		assert_eq!(NodeRole::for_layer(0, 1), NodeRole::Input);
	}

	#[test]
	fn categories_split_at_the_middle() {
		assert_eq!(HighlightCategory::for_source_layer(0, 5), HighlightCategory::Cyan);
		assert_eq!(HighlightCategory::for_source_layer(1, 5), HighlightCategory::Cyan);
		assert_eq!(HighlightCategory::for_source_layer(2, 5), HighlightCategory::Green);
		assert_eq!(HighlightCategory::for_source_layer(3, 5), HighlightCategory::Green);
	}

	#[test]
	fn weights_have_four_decimals() {
		assert_eq!(format_weight(0.5), "0.5000");
		assert_eq!(format_weight(-1.0), "-1.0000");
		assert_eq!(format_weight(0.123456), "0.1235");
	}
}
