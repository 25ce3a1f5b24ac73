//! Short-lived visual entities spawned by the scheduler.
//!
//! Each entity owns its scene primitive until it finishes. `finish` may be
//! called any number of times; only the first call touches the scene.

use std::collections::HashMap;

use super::easing::{ease_in_out_cubic, ease_out_cubic, lerp, progress, pulse_radius};
use super::scene::Scene;

/// Class a travelling particle holds on its edge.
pub const ACTIVE_CLASS: &str = "active";
/// Class marking a revealed weight label.
pub const VISIBLE_CLASS: &str = "visible";

/// Highlight classes on edge lines, counted per `(edge, class)`.
///
/// A class is added on the first hold and removed on the last release, so
/// overlapping effects never strip each other's highlight.
#[derive(Debug, Default)]
pub struct EdgeHighlights {
	held: HashMap<(usize, &'static str), u32>,
}

impl EdgeHighlights {
	/// Take one hold, adding `class` to the edge on the first.
	pub fn hold<S: Scene>(
		&mut self,
		scene: &mut S,
		lines: &[Option<S::Handle>],
		edge: usize,
		class: &'static str,
	) {
		let count = self.held.entry((edge, class)).or_insert(0);
		*count += 1;
		if *count == 1 {
			if let Some(Some(line)) = lines.get(edge) {
				scene.add_class(line, class);
			}
		}
	}

	/// Drop one hold. Releasing a class that is not held does nothing.
	pub fn release<S: Scene>(
		&mut self,
		scene: &mut S,
		lines: &[Option<S::Handle>],
		edge: usize,
		class: &'static str,
	) {
		let Some(count) = self.held.get_mut(&(edge, class)) else {
			return;
		};
		*count -= 1;
		if *count == 0 {
			self.held.remove(&(edge, class));
			if let Some(Some(line)) = lines.get(edge) {
				scene.remove_class(line, class);
			}
		}
	}

	/// Drop every hold and strip all highlight classes.
	pub fn release_all<S: Scene>(&mut self, scene: &mut S, lines: &[Option<S::Handle>]) {
		for ((edge, class), _) in self.held.drain() {
			if let Some(Some(line)) = lines.get(edge) {
				scene.remove_class(line, class);
			}
		}
	}

	/// Whether `class` is currently applied to `edge`.
	pub fn is_held(&self, edge: usize, class: &str) -> bool {
		self.held.keys().any(|&(e, c)| e == edge && c == class)
	}

	/// Number of distinct `(edge, class)` highlights currently applied.
	pub fn len(&self) -> usize {
		self.held.len()
	}

	/// Whether no highlight is applied.
	pub fn is_empty(&self) -> bool {
		self.held.is_empty()
	}
}

/// A dot travelling along one edge.
#[derive(Clone, Debug)]
pub struct Particle<H> {
	/// Edge being travelled.
	pub edge: usize,
	handle: Option<H>,
	from: (f64, f64),
	to: (f64, f64),
	start: f64,
	duration: f64,
	base_radius: f64,
	finished: bool,
}

impl<H: Clone> Particle<H> {
	/// Particle leaving `from` at `start` and arriving at `to` after `duration`.
	pub fn new(
		edge: usize,
		handle: Option<H>,
		from: (f64, f64),
		to: (f64, f64),
		start: f64,
		duration: f64,
		base_radius: f64,
	) -> Self {
		Self {
			edge,
			handle,
			from,
			to,
			start,
			duration,
			base_radius,
			finished: false,
		}
	}

	/// Position at linear `progress` in `[0, 1]`, eased in and out.
	pub fn position(&self, progress: f64) -> (f64, f64) {
		let t = ease_in_out_cubic(progress);
		(lerp(self.from.0, self.to.0, t), lerp(self.from.1, self.to.1, t))
	}

	/// Radius at linear `progress`.
	pub fn radius(&self, progress: f64) -> f64 {
		pulse_radius(self.base_radius, progress)
	}

	/// Move the particle to where it is at `now`. Returns `false` once it has
	/// arrived.
	pub fn step<S: Scene<Handle = H>>(&mut self, scene: &mut S, now: f64) -> bool {
		if self.finished {
			return false;
		}
		let p = progress(self.start, self.duration, now);
		if let Some(ref handle) = self.handle {
			let (x, y) = self.position(p);
			scene.set_num(handle, "cx", x);
			scene.set_num(handle, "cy", y);
			scene.set_num(handle, "r", self.radius(p));
		}
		p < 1.0
	}

	/// Remove the particle and the highlight it holds on its edge.
	pub fn finish<S: Scene<Handle = H>>(
		&mut self,
		scene: &mut S,
		highlights: &mut EdgeHighlights,
		lines: &[Option<H>],
	) {
		if self.finished {
			return;
		}
		self.finished = true;
		if let Some(handle) = self.handle.take() {
			scene.remove(&handle);
		}
		highlights.release(scene, lines, self.edge, ACTIVE_CLASS);
	}

	/// Whether the particle has been removed.
	pub fn is_finished(&self) -> bool {
		self.finished
	}
}

/// An expanding, fading ring around a node.
#[derive(Clone, Debug)]
pub struct Ripple<H> {
	/// Node the ring surrounds.
	pub node: usize,
	handle: Option<H>,
	start: f64,
	duration: f64,
	start_radius: f64,
	end_radius: f64,
	finished: bool,
}

impl<H: Clone> Ripple<H> {
	const START_STROKE: f64 = 2.0;
	const END_STROKE: f64 = 0.5;

	/// Ring growing from `start_radius` to `end_radius` over `duration`.
	pub fn new(
		node: usize,
		handle: Option<H>,
		start: f64,
		duration: f64,
		start_radius: f64,
		end_radius: f64,
	) -> Self {
		Self {
			node,
			handle,
			start,
			duration,
			start_radius,
			end_radius,
			finished: false,
		}
	}

	/// `(radius, opacity, stroke width)` at linear `progress`.
	pub fn frame(&self, progress: f64) -> (f64, f64, f64) {
		let t = ease_out_cubic(progress);
		(
			lerp(self.start_radius, self.end_radius, t),
			1.0 - t,
			lerp(Self::START_STROKE, Self::END_STROKE, t),
		)
	}

	/// Returns `false` once the ring has fully faded.
	pub fn step<S: Scene<Handle = H>>(&mut self, scene: &mut S, now: f64) -> bool {
		if self.finished {
			return false;
		}
		let p = progress(self.start, self.duration, now);
		if let Some(ref handle) = self.handle {
			let (r, opacity, stroke) = self.frame(p);
			scene.set_num(handle, "r", r);
			scene.set_num(handle, "opacity", opacity);
			scene.set_num(handle, "stroke-width", stroke);
		}
		p < 1.0
	}

	/// Remove the ring. Safe to call repeatedly.
	pub fn finish<S: Scene<Handle = H>>(&mut self, scene: &mut S) {
		if self.finished {
			return;
		}
		self.finished = true;
		if let Some(handle) = self.handle.take() {
			scene.remove(&handle);
		}
	}
}

/// A wave highlight waiting to be released.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimedHighlight {
	/// Highlighted edge.
	pub edge: usize,
	/// Wave class applied.
	pub class: &'static str,
	/// Release time.
	pub until: f64,
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::brain_network::scene::SceneLayer;
	use crate::components::brain_network::testing::RecordingScene;

	fn particle_on_line(scene: &mut RecordingScene) -> (Vec<Option<usize>>, Particle<usize>) {
		let line = scene.line(SceneLayer::Edges, (60.0, 40.0), (230.0, 360.0), "connection");
		let dot = scene.circle(SceneLayer::Overlay, 60.0, 40.0, 3.0, "particle");
		let particle = Particle::new(0, dot, (60.0, 40.0), (230.0, 360.0), 1000.0, 800.0, 3.0);
		(vec![line], particle)
	}

	#[test]
	fn particle_travels_from_source_to_target() {
		let mut scene = RecordingScene::default();
		let (_, particle) = particle_on_line(&mut scene);
		assert_eq!(particle.position(0.0), (60.0, 40.0));
		let (x, y) = particle.position(1.0);
		assert!((x - 230.0).abs() < 1e-9 && (y - 360.0).abs() < 1e-9);
		let (mx, my) = particle.position(0.5);
		assert!((mx - 145.0).abs() < 1e-9 && (my - 200.0).abs() < 1e-9);
	}

	#[test]
	fn particle_step_writes_position_and_reports_arrival() {
		let mut scene = RecordingScene::default();
		let (_, mut particle) = particle_on_line(&mut scene);
		assert!(particle.step(&mut scene, 1000.0));
		assert_eq!(scene.num_attr(1, "cx"), 60.0);
		assert_eq!(scene.num_attr(1, "r"), 3.0);

		assert!(particle.step(&mut scene, 1400.0));
		assert!((scene.num_attr(1, "r") - 4.5).abs() < 1e-9);

		assert!(!particle.step(&mut scene, 1800.0));
		assert!((scene.num_attr(1, "cx") - 230.0).abs() < 1e-9);
		assert!((scene.num_attr(1, "cy") - 360.0).abs() < 1e-9);
	}

	#[test]
	fn particle_cleanup_is_idempotent() {
		let mut scene = RecordingScene::default();
		let (lines, mut particle) = particle_on_line(&mut scene);
		let mut highlights = EdgeHighlights::default();
		highlights.hold(&mut scene, &lines, 0, ACTIVE_CLASS);
		assert!(scene.has_class(0, ACTIVE_CLASS));

		particle.finish(&mut scene, &mut highlights, &lines);
		particle.finish(&mut scene, &mut highlights, &lines);

		assert!(particle.is_finished());
		assert_eq!(scene.removals, 1);
		assert!(scene.primitives[1].removed);
		assert!(!scene.has_class(0, ACTIVE_CLASS));
		assert!(highlights.is_empty());
		assert!(!particle.step(&mut scene, 1200.0));
	}

	#[test]
	fn overlapping_holds_keep_the_class_until_the_last_release() {
		let mut scene = RecordingScene::default();
		let line = scene.line(SceneLayer::Edges, (0.0, 0.0), (1.0, 1.0), "connection");
		let lines = vec![line];
		let mut highlights = EdgeHighlights::default();

		highlights.hold(&mut scene, &lines, 0, "wave-cyan");
		highlights.hold(&mut scene, &lines, 0, "wave-cyan");
		highlights.release(&mut scene, &lines, 0, "wave-cyan");
		assert!(scene.has_class(0, "wave-cyan"));
		assert!(highlights.is_held(0, "wave-cyan"));

		highlights.release(&mut scene, &lines, 0, "wave-cyan");
		assert!(!scene.has_class(0, "wave-cyan"));
		highlights.release(&mut scene, &lines, 0, "wave-cyan");
		assert!(highlights.is_empty());
	}

	#[test]
	fn ripple_expands_and_fades() {
		let mut scene = RecordingScene::default();
		let ring = scene.circle(SceneLayer::Overlay, 10.0, 10.0, 12.0, "data-pulse");
		let mut ripple = Ripple::new(3, ring, 0.0, 1000.0, 12.0, 30.0);

		assert_eq!(ripple.frame(0.0), (12.0, 1.0, 2.0));
		let (r, opacity, stroke) = ripple.frame(1.0);
		assert_eq!((r, opacity, stroke), (30.0, 0.0, 0.5));

		assert!(ripple.step(&mut scene, 500.0));
		let mid_r = scene.num_attr(0, "r");
		assert!(mid_r > 21.0 && mid_r < 30.0);
		assert!(!ripple.step(&mut scene, 1000.0));

		ripple.finish(&mut scene);
		ripple.finish(&mut scene);
		assert_eq!(scene.removals, 1);
	}
}
