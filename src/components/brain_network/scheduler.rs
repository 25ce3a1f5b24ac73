//! Cooperative scheduler for the four decorative effects.
//!
//! The scheduler owns the drawn diagram, the scene and the random source.
//! The host calls [`EffectScheduler::advance`] with the current time (once per
//! animation frame in the browser); each call fires the intervals that came
//! due, runs staggered sub-steps whose time has come, moves in-flight
//! particles and ripples, and expires highlights and labels. Nothing here
//! blocks and nothing touches node or edge geometry.

use std::collections::BTreeMap;

use log::debug;

use super::config::EffectConfig;
use super::connections::DrawnNetwork;
use super::effects::{ACTIVE_CLASS, EdgeHighlights, Particle, Ripple, TimedHighlight, VISIBLE_CLASS};
use super::layout::layer_range;
use super::random::RandomSource;
use super::scene::{Scene, SceneLayer};
use super::theme::NetworkPalette;

/// A repeating timer. A non-positive period never fires.
#[derive(Clone, Copy, Debug)]
struct Interval {
	period: f64,
	next_due: f64,
}

impl Interval {
	fn new(start: f64, period: f64) -> Self {
		Self {
			period,
			next_due: start + period,
		}
	}

	/// Fire at most once per call. A host that fell far behind (a backgrounded
	/// tab) skips the missed firings instead of replaying them.
	fn poll(&mut self, now: f64) -> bool {
		if self.period <= 0.0 || now < self.next_due {
			return false;
		}
		self.next_due += self.period;
		if self.next_due <= now {
			self.next_due = now + self.period;
		}
		true
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Deferred {
	Wave,
	Ripple { layer: usize },
}

/// Owns and drives particle travel, wave highlights, label flashes and node
/// ripples over a drawn diagram.
pub struct EffectScheduler<S: Scene, R: RandomSource> {
	network: DrawnNetwork<S::Handle>,
	config: EffectConfig,
	palette: NetworkPalette,
	scene: S,
	rng: R,
	particle_timer: Interval,
	wave_timer: Interval,
	label_timer: Interval,
	ripple_timer: Interval,
	deferred: Vec<(f64, Deferred)>,
	particles: Vec<Particle<S::Handle>>,
	ripples: Vec<Ripple<S::Handle>>,
	waves: Vec<TimedHighlight>,
	/// Visible label per edge, with the time it hides again.
	labels: BTreeMap<usize, f64>,
	highlights: EdgeHighlights,
	stopped: bool,
}

impl<S: Scene, R: RandomSource> EffectScheduler<S, R> {
	/// Scheduler whose intervals start counting at `start`.
	pub fn new(
		network: DrawnNetwork<S::Handle>,
		config: EffectConfig,
		palette: NetworkPalette,
		scene: S,
		rng: R,
		start: f64,
	) -> Self {
		Self {
			particle_timer: Interval::new(start, config.particle_interval_ms),
			wave_timer: Interval::new(start, config.wave_interval_ms),
			label_timer: Interval::new(start, config.label_interval_ms),
			ripple_timer: Interval::new(start, config.ripple_interval_ms),
			network,
			config,
			palette,
			scene,
			rng,
			deferred: Vec::new(),
			particles: Vec::new(),
			ripples: Vec::new(),
			waves: Vec::new(),
			labels: BTreeMap::new(),
			highlights: EdgeHighlights::default(),
			stopped: false,
		}
	}

	/// Run everything that is due at `now` (milliseconds).
	pub fn advance(&mut self, now: f64) {
		if self.stopped {
			return;
		}

		if self.config.particles_enabled && self.particle_timer.poll(now) {
			self.spawn_particle(now);
		}
		if self.wave_timer.poll(now) {
			for wave in 0..self.config.wave_count {
				let at = now + wave as f64 * self.config.wave_stagger_ms;
				self.deferred.push((at, Deferred::Wave));
			}
		}
		if self.label_timer.poll(now) {
			self.flash_labels(now);
		}
		if self.ripple_timer.poll(now) {
			for layer in 0..self.network.layers.len() {
				let at = now + layer as f64 * self.config.ripple_stagger_ms;
				self.deferred.push((at, Deferred::Ripple { layer }));
			}
		}

		self.run_deferred(now);
		self.step_animations(now);
		self.expire(now);
	}

	fn run_deferred(&mut self, now: f64) {
		let mut due = Vec::new();
		self.deferred.retain(|&(at, action)| {
			if at <= now {
				due.push(action);
				false
			} else {
				true
			}
		});
		for action in due {
			match action {
				Deferred::Wave => self.run_wave(now),
				Deferred::Ripple { layer } => self.spawn_ripple(layer, now),
			}
		}
	}

	fn step_animations(&mut self, now: f64) {
		let Self {
			scene,
			particles,
			ripples,
			highlights,
			network,
			..
		} = self;

		particles.retain_mut(|particle| {
			if particle.step(scene, now) {
				return true;
			}
			particle.finish(scene, highlights, &network.line_handles);
			false
		});
		ripples.retain_mut(|ripple| {
			if ripple.step(scene, now) {
				return true;
			}
			ripple.finish(scene);
			false
		});
	}

	fn expire(&mut self, now: f64) {
		let Self {
			scene,
			waves,
			labels,
			highlights,
			network,
			..
		} = self;

		waves.retain(|wave| {
			if wave.until > now {
				return true;
			}
			highlights.release(scene, &network.line_handles, wave.edge, wave.class);
			false
		});
		labels.retain(|&edge, &mut until| {
			if until > now {
				return true;
			}
			if let Some(Some(label)) = network.label_handles.get(edge) {
				scene.set_attr(label, "opacity", "0");
				scene.remove_class(label, VISIBLE_CLASS);
			}
			false
		});
	}

	fn spawn_particle(&mut self, now: f64) {
		let count = self.network.edges.len();
		if count == 0 {
			return;
		}
		let edge_idx = self.rng.index(count);
		let edge = &self.network.edges[edge_idx];

		// Endpoints come from the drawn line, so the particle follows it even
		// if the stylesheet or a script moved it.
		let (mut from, mut to) = ((edge.x1, edge.y1), (edge.x2, edge.y2));
		if let Some(Some(line)) = self.network.line_handles.get(edge_idx) {
			if let (Some(x1), Some(y1), Some(x2), Some(y2)) = (
				self.scene.num(line, "x1"),
				self.scene.num(line, "y1"),
				self.scene.num(line, "x2"),
				self.scene.num(line, "y2"),
			) {
				(from, to) = ((x1, y1), (x2, y2));
			}
		}

		let duration = self
			.rng
			.range(self.config.particle_min_ms, self.config.particle_max_ms);
		let category = if self.rng.chance(self.config.particle_category_bias) {
			edge.category
		} else {
			edge.category.other()
		};

		let dot = self.scene.circle(
			SceneLayer::Overlay,
			from.0,
			from.1,
			self.config.particle_radius,
			category.particle_class(),
		);
		if let Some(ref dot) = dot {
			let fill = self.palette.highlight(category).to_css();
			self.scene.set_attr(dot, "fill", &fill);
		}
		self.highlights
			.hold(&mut self.scene, &self.network.line_handles, edge_idx, ACTIVE_CLASS);
		self.particles.push(Particle::new(
			edge_idx,
			dot,
			from,
			to,
			now,
			duration,
			self.config.particle_radius,
		));
	}

	fn run_wave(&mut self, now: f64) {
		let layers: Vec<usize> = (0..self.network.layers.len())
			.filter(|&layer| !self.network.outgoing(layer).is_empty())
			.collect();
		if layers.is_empty() {
			return;
		}
		let layer = layers[self.rng.index(layers.len())];
		let outgoing = self.network.outgoing(layer);

		let count = self
			.rng
			.between(self.config.wave_min_edges, self.config.wave_max_edges);
		let picks = self.rng.pick_distinct(outgoing.len(), count);
		let duration = self
			.rng
			.range(self.config.wave_min_ms, self.config.wave_max_ms);

		let lit = picks.len();
		for pick in picks {
			let edge = outgoing.start + pick;
			let class = self.network.edges[edge].category.wave_class();
			self.highlights
				.hold(&mut self.scene, &self.network.line_handles, edge, class);
			self.waves.push(TimedHighlight {
				edge,
				class,
				until: now + duration,
			});
		}
		debug!("portfolio: wave over layer {} ({} edges)", layer, lit);
	}

	fn flash_labels(&mut self, now: f64) {
		let total = self.network.edges.len();
		if total == 0 {
			return;
		}
		let count = self
			.rng
			.between(self.config.label_min_count, self.config.label_max_count);
		let until = now + self.config.label_duration_ms;
		for edge in self.rng.pick_distinct(total, count) {
			if let Some(Some(label)) = self.network.label_handles.get(edge) {
				self.scene.set_attr(label, "opacity", "1");
				self.scene.add_class(label, VISIBLE_CLASS);
			}
			self.labels.insert(edge, until);
		}
	}

	fn spawn_ripple(&mut self, layer: usize, now: f64) {
		let nodes = layer_range(&self.network.layers, layer);
		if nodes.is_empty() {
			return;
		}
		let node_idx = nodes.start + self.rng.index(nodes.len());
		let node = &self.network.nodes[node_idx];

		let ring = self.scene.circle(
			SceneLayer::Overlay,
			node.x,
			node.y,
			self.config.ripple_start_radius,
			"data-pulse",
		);
		if let Some(ref ring) = ring {
			let stroke = self.palette.node(node.role).to_css();
			self.scene.set_attr(ring, "fill", "none");
			self.scene.set_attr(ring, "stroke", &stroke);
		}
		self.ripples.push(Ripple::new(
			node_idx,
			ring,
			now,
			self.config.ripple_duration_ms,
			self.config.ripple_start_radius,
			self.config.ripple_end_radius,
		));
	}

	/// Remove every transient entity and stop firing. Safe to call repeatedly.
	pub fn shutdown(&mut self) {
		let Self {
			scene,
			particles,
			ripples,
			waves,
			labels,
			highlights,
			network,
			deferred,
			..
		} = self;

		for particle in particles.iter_mut() {
			particle.finish(scene, highlights, &network.line_handles);
		}
		particles.clear();
		for ripple in ripples.iter_mut() {
			ripple.finish(scene);
		}
		ripples.clear();
		waves.clear();
		highlights.release_all(scene, &network.line_handles);
		for (edge, _) in std::mem::take(labels) {
			if let Some(Some(label)) = network.label_handles.get(edge) {
				scene.set_attr(label, "opacity", "0");
				scene.remove_class(label, VISIBLE_CLASS);
			}
		}
		deferred.clear();
		self.stopped = true;
	}

	/// Shut down and remove the whole diagram from the scene.
	pub fn teardown(mut self) {
		self.shutdown();
		self.scene.clear();
	}

	/// Whether `shutdown` has run.
	pub fn is_stopped(&self) -> bool {
		self.stopped
	}

	/// The scene being animated.
	pub fn scene(&self) -> &S {
		&self.scene
	}

	/// The drawn diagram.
	pub fn network(&self) -> &DrawnNetwork<S::Handle> {
		&self.network
	}

	/// Particles in flight.
	pub fn active_particles(&self) -> usize {
		self.particles.len()
	}

	/// Rings still fading.
	pub fn active_ripples(&self) -> usize {
		self.ripples.len()
	}

	/// Weight labels currently shown.
	pub fn visible_labels(&self) -> usize {
		self.labels.len()
	}

	/// Number of distinct edge highlights currently applied.
	pub fn highlighted_edges(&self) -> usize {
		self.highlights.len()
	}
}
