//! Test doubles for the scene and the random source.

use std::collections::{BTreeMap, BTreeSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::random::RandomSource;
use super::scene::{Scene, SceneLayer};

/// A primitive recorded by [`RecordingScene`].
#[derive(Clone, Debug, Default)]
pub struct Primitive {
	pub kind: &'static str,
	pub layer: Option<SceneLayer>,
	pub attrs: BTreeMap<String, String>,
	pub classes: BTreeSet<String>,
	pub text: Option<String>,
	pub removed: bool,
}

/// In-memory scene that remembers everything drawn into it.
#[derive(Debug, Default)]
pub struct RecordingScene {
	pub primitives: Vec<Primitive>,
	pub removals: usize,
	pub cleared: bool,
}

impl RecordingScene {
	fn push(&mut self, kind: &'static str, layer: SceneLayer, attrs: &[(&str, f64)], class: &str) -> usize {
		self.primitives.push(Primitive {
			kind,
			layer: Some(layer),
			attrs: attrs
				.iter()
				.map(|(k, v)| (k.to_string(), v.to_string()))
				.collect(),
			classes: class.split_whitespace().map(str::to_string).collect(),
			..Primitive::default()
		});
		self.primitives.len() - 1
	}

	/// Primitives still present, optionally filtered by kind.
	pub fn live(&self, kind: &str) -> Vec<&Primitive> {
		self.primitives
			.iter()
			.filter(|p| !p.removed && p.kind == kind)
			.collect()
	}

	pub fn live_in(&self, layer: SceneLayer) -> usize {
		self.primitives
			.iter()
			.filter(|p| !p.removed && p.layer == Some(layer))
			.count()
	}

	pub fn has_class(&self, handle: usize, class: &str) -> bool {
		self.primitives[handle].classes.contains(class)
	}

	pub fn num_attr(&self, handle: usize, name: &str) -> f64 {
		self.primitives[handle].attrs[name].parse().unwrap()
	}
}

impl Scene for RecordingScene {
	type Handle = usize;

	fn circle(&mut self, layer: SceneLayer, cx: f64, cy: f64, r: f64, class: &str) -> Option<usize> {
		Some(self.push("circle", layer, &[("cx", cx), ("cy", cy), ("r", r)], class))
	}

	fn line(&mut self, layer: SceneLayer, from: (f64, f64), to: (f64, f64), class: &str) -> Option<usize> {
		Some(self.push(
			"line",
			layer,
			&[("x1", from.0), ("y1", from.1), ("x2", to.0), ("y2", to.1)],
			class,
		))
	}

	fn text(&mut self, layer: SceneLayer, x: f64, y: f64, content: &str, class: &str) -> Option<usize> {
		let handle = self.push("text", layer, &[("x", x), ("y", y)], class);
		self.primitives[handle].text = Some(content.to_string());
		Some(handle)
	}

	fn set_attr(&mut self, handle: &usize, name: &str, value: &str) {
		self.primitives[*handle]
			.attrs
			.insert(name.to_string(), value.to_string());
	}

	fn attr(&self, handle: &usize, name: &str) -> Option<String> {
		self.primitives[*handle].attrs.get(name).cloned()
	}

	fn add_class(&mut self, handle: &usize, class: &str) {
		self.primitives[*handle].classes.insert(class.to_string());
	}

	fn remove_class(&mut self, handle: &usize, class: &str) {
		self.primitives[*handle].classes.remove(class);
	}

	fn remove(&mut self, handle: &usize) {
		let primitive = &mut self.primitives[*handle];
		if !primitive.removed {
			primitive.removed = true;
			self.removals += 1;
		}
	}

	fn clear(&mut self) {
		for p in &mut self.primitives {
			p.removed = true;
		}
		self.cleared = true;
	}
}

/// Seeded [`RandomSource`] for reproducible property-style tests.
pub struct SeededRandom(StdRng);

impl SeededRandom {
	pub fn new(seed: u64) -> Self {
		Self(StdRng::seed_from_u64(seed))
	}
}

impl RandomSource for SeededRandom {
	fn next_f64(&mut self) -> f64 {
		self.0.r#gen::<f64>()
	}
}
