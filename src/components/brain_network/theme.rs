//! Colors for the diagram.
//!
//! The stylesheet can restyle everything through the role and effect classes;
//! these fills are what the diagram looks like without it.

use super::types::{HighlightCategory, NodeRole};

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same color at opacity `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Linear interpolation between two colors
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * (1.0 - t) + other.r as f64 * t) as u8,
			g: (self.g as f64 * (1.0 - t) + other.g as f64 * t) as u8,
			b: (self.b as f64 * (1.0 - t) + other.b as f64 * t) as u8,
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	/// Hex when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Fill and stroke colors used when drawing the diagram.
#[derive(Clone, Debug)]
pub struct NetworkPalette {
	/// Early-layer highlight accent.
	pub cyan: Color,
	/// Late-layer highlight accent.
	pub green: Color,
	/// Resting edge stroke.
	pub edge: Color,
	/// Weight label fill.
	pub label: Color,
	/// Input node fill.
	pub input: Color,
	/// Encoder node fill.
	pub encoder: Color,
	/// Latent node fill.
	pub latent: Color,
	/// Decoder node fill.
	pub decoder: Color,
	/// Output node fill.
	pub output: Color,
}

impl NetworkPalette {
	/// Accent colors for the dark page theme (default).
	pub fn dark() -> Self {
		let cyan = Color::rgb(0, 212, 255);
		let green = Color::rgb(0, 255, 136);
		Self {
			cyan,
			green,
			edge: cyan.with_alpha(0.15),
			label: Color::rgb(200, 220, 235).with_alpha(0.9),
			input: cyan,
			encoder: cyan.lerp(green, 0.25),
			latent: Color::rgb(168, 85, 247),
			decoder: cyan.lerp(green, 0.75),
			output: green,
		}
	}

	/// Fill for a node of `role`.
	pub fn node(&self, role: NodeRole) -> Color {
		match role {
			NodeRole::Input => self.input,
			NodeRole::Encoder => self.encoder,
			NodeRole::Latent => self.latent,
			NodeRole::Decoder => self.decoder,
			NodeRole::Output => self.output,
		}
	}

	/// Accent for a highlight category.
	pub fn highlight(&self, category: HighlightCategory) -> Color {
		match category {
			HighlightCategory::Cyan => self.cyan,
			HighlightCategory::Green => self.green,
		}
	}
}

impl Default for NetworkPalette {
	fn default() -> Self {
		Self::dark()
	}
}
