//! Static configuration for the diagram and its effects.
//!
//! Everything has a default, so a page can override only the fields it cares
//! about in the inline `network-config` JSON block.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "network-config";

/// Narrows one layer's vertical band to a fraction of the normal height.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LayerCompression {
	/// Layer index, left to right.
	pub layer: usize,
	/// Fraction of the usable band, clamped to `[0, 1]`.
	pub factor: f64,
}

/// Inputs to the layout engine.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
	/// Node count per layer, left to right.
	pub layers: Vec<usize>,
	/// ViewBox width.
	pub width: f64,
	/// ViewBox height.
	pub height: f64,
	/// Horizontal margin before the first and after the last layer.
	pub padding_x: f64,
	/// Vertical margin above and below the tallest layer.
	pub padding_y: f64,
	/// Per-layer band narrowing; later entries win.
	pub compression: Vec<LayerCompression>,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			layers: vec![6, 4, 2, 4, 6],
			width: 800.0,
			height: 400.0,
			padding_x: 60.0,
			padding_y: 40.0,
			compression: vec![LayerCompression {
				layer: 2,
				factor: 0.35,
			}],
		}
	}
}

impl LayoutConfig {
	/// Vertical compression for `layer` (1.0 when not overridden).
	pub fn compression_for(&self, layer: usize) -> f64 {
		self.compression
			.iter()
			.rev()
			.find(|c| c.layer == layer)
			.map(|c| c.factor.clamp(0.0, 1.0))
			.unwrap_or(1.0)
	}
}

/// Cadence and durations of the animated effects, in milliseconds.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct EffectConfig {
	/// Particle travel ships disabled; pages opt in explicitly.
	pub particles_enabled: bool,
	/// Time between particle spawns.
	pub particle_interval_ms: f64,
	/// Shortest particle trip.
	pub particle_min_ms: f64,
	/// Longest particle trip.
	pub particle_max_ms: f64,
	/// Resting particle radius.
	pub particle_radius: f64,
	/// Probability that a particle uses its edge's own color.
	pub particle_category_bias: f64,

	/// Time between wave bursts.
	pub wave_interval_ms: f64,
	/// Waves per burst.
	pub wave_count: usize,
	/// Delay between the waves of one burst.
	pub wave_stagger_ms: f64,
	/// Fewest edges one wave lights.
	pub wave_min_edges: usize,
	/// Most edges one wave lights.
	pub wave_max_edges: usize,
	/// Shortest wave highlight.
	pub wave_min_ms: f64,
	/// Longest wave highlight.
	pub wave_max_ms: f64,

	/// Time between label flashes.
	pub label_interval_ms: f64,
	/// Fewest labels shown per flash.
	pub label_min_count: usize,
	/// Most labels shown per flash.
	pub label_max_count: usize,
	/// How long a flashed label stays visible.
	pub label_duration_ms: f64,

	/// Time between ripple sweeps.
	pub ripple_interval_ms: f64,
	/// Delay between consecutive layers of one sweep.
	pub ripple_stagger_ms: f64,
	/// Lifetime of one ring.
	pub ripple_duration_ms: f64,
	/// Ring radius when spawned.
	pub ripple_start_radius: f64,
	/// Ring radius when faded out.
	pub ripple_end_radius: f64,
}

impl Default for EffectConfig {
	fn default() -> Self {
		Self {
			particles_enabled: false,
			particle_interval_ms: 400.0,
			particle_min_ms: 600.0,
			particle_max_ms: 1000.0,
			particle_radius: 3.0,
			particle_category_bias: 0.8,

			wave_interval_ms: 1500.0,
			wave_count: 2,
			wave_stagger_ms: 300.0,
			wave_min_edges: 3,
			wave_max_edges: 6,
			wave_min_ms: 400.0,
			wave_max_ms: 600.0,

			label_interval_ms: 2500.0,
			label_min_count: 5,
			label_max_count: 14,
			label_duration_ms: 800.0,

			ripple_interval_ms: 3000.0,
			ripple_stagger_ms: 100.0,
			ripple_duration_ms: 1000.0,
			ripple_start_radius: 12.0,
			ripple_end_radius: 30.0,
		}
	}
}

/// Complete diagram configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
	/// Node placement.
	pub layout: LayoutConfig,
	/// Animation cadence.
	pub effects: EffectConfig,
}

impl NetworkConfig {
	/// Parse overrides from JSON; missing fields keep their defaults.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}

/// Load configuration from the `network-config` script element, if present.
pub fn load_network_config() -> Option<NetworkConfig> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match NetworkConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"portfolio: loaded network config with {} layers",
				config.layout.layers.len()
			);
			Some(config)
		}
		Err(e) => {
			warn!("portfolio: failed to parse network config: {}", e);
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_describe_the_bottleneck_diagram() {
		let config = NetworkConfig::default();
		assert_eq!(config.layout.layers, vec![6, 4, 2, 4, 6]);
		assert_eq!(config.layout.compression_for(2), 0.35);
		assert_eq!(config.layout.compression_for(1), 1.0);
		assert!(!config.effects.particles_enabled);
	}

	#[test]
	fn partial_json_keeps_defaults() {
		let config = NetworkConfig::from_json(
			r#"{ "layout": { "layers": [3, 1] }, "effects": { "particles_enabled": true } }"#,
		)
		.unwrap();
		assert_eq!(config.layout.layers, vec![3, 1]);
		assert_eq!(config.layout.width, 800.0);
		assert!(config.effects.particles_enabled);
		assert_eq!(config.effects.wave_interval_ms, 1500.0);
	}

	#[test]
	fn compression_factor_is_clamped() {
		let layout = LayoutConfig {
			compression: vec![LayerCompression {
				layer: 0,
				factor: 3.0,
			}],
			..LayoutConfig::default()
		};
		assert_eq!(layout.compression_for(0), 1.0);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(NetworkConfig::from_json("{ layers: ").is_err());
	}
}
