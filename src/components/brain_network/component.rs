//! Leptos component hosting the animated brain-network diagram.
//!
//! The component renders an empty container. Once mounted it lays out and
//! draws the diagram into an `<svg>` inside the container, then drives the
//! effect scheduler from a `requestAnimationFrame` loop. Unmounting raises a
//! stop flag; the next frame tears the diagram down and stops rescheduling.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Window};

use crate::components::site::after;

use super::config::{NetworkConfig, load_network_config};
use super::connections::{build_edges, draw_network};
use super::layout::compute_layout;
use super::random::JsRandom;
use super::scene::SvgScene;
use super::scheduler::EffectScheduler;
use super::theme::NetworkPalette;

type Scheduler = EffectScheduler<SvgScene, JsRandom>;

/// Renders the decorative layered network with its animated effects.
///
/// Configuration comes from the `config` prop, else from the page's
/// `network-config` JSON block, else from defaults. If the container or the
/// browser APIs are unavailable the diagram silently stays empty.
#[component]
pub fn BrainNetwork(
	/// Overrides the page config block.
	#[prop(optional)]
	config: Option<NetworkConfig>,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let stop = Arc::new(AtomicBool::new(false));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (stop_init, animate_init) = (stop.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		let container: Element = container.into();
		let Some(window) = web_sys::window() else {
			debug!("portfolio: no window, brain network disabled");
			return;
		};
		let Some(scheduler) = start_network(&window, &container, config.clone()) else {
			return;
		};
		let Some(performance) = window.performance() else {
			return;
		};
		let scheduler: Rc<RefCell<Option<Scheduler>>> = Rc::new(RefCell::new(Some(scheduler)));

		let (animate_inner, stop_anim) = (animate_init.clone(), stop_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let stopped = stop_anim.load(Ordering::Relaxed);
			let running = scheduler.borrow().is_some();
			match next_frame(stopped, running) {
				Frame::Advance => {
					if let Some(ref mut s) = *scheduler.borrow_mut() {
						s.advance(performance.now());
					}
					if let Some(ref cb) = *animate_inner.borrow() {
						if let Some(win) = web_sys::window() {
							let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
						}
					}
				}
				Frame::TearDown => {
					if let Some(s) = scheduler.borrow_mut().take() {
						s.teardown();
						debug!("portfolio: brain network torn down");
					}
					// The running closure cannot free itself; drop it on the next tick.
					if let Some(cb) = animate_inner.borrow_mut().take() {
						after(0, move || drop(cb));
					}
				}
				Frame::Idle => {}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	on_cleanup(move || stop.store(true, Ordering::Relaxed));

	view! { <div node_ref=container_ref class="network-container" aria-hidden="true"></div> }
}

/// What the animation loop does on its next frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Frame {
	/// Step the effects and request another frame.
	Advance,
	/// Remove the diagram and release the loop.
	TearDown,
	/// Nothing left to drive.
	Idle,
}

fn next_frame(stopped: bool, running: bool) -> Frame {
	match (stopped, running) {
		(_, false) => Frame::Idle,
		(true, true) => Frame::TearDown,
		(false, true) => Frame::Advance,
	}
}

/// Build, draw and schedule the diagram inside `container`.
fn start_network(
	window: &Window,
	container: &Element,
	config: Option<NetworkConfig>,
) -> Option<Scheduler> {
	let config = config.or_else(load_network_config).unwrap_or_default();
	let start = window.performance()?.now();

	let mut rng = JsRandom;
	let nodes = compute_layout(&config.layout);
	let edges = build_edges(&nodes, &config.layout.layers, &mut rng);

	let mut scene = match SvgScene::new(container, config.layout.width, config.layout.height) {
		Ok(scene) => scene,
		Err(e) => {
			warn!("portfolio: could not create network svg: {:?}", e);
			return None;
		}
	};
	let palette = NetworkPalette::default();
	let network = draw_network(
		&mut scene,
		config.layout.layers.clone(),
		nodes,
		edges,
		&palette,
	);
	info!(
		"portfolio: brain network drawn ({} nodes, {} edges, particles {})",
		network.nodes.len(),
		network.edges.len(),
		if config.effects.particles_enabled { "on" } else { "off" }
	);

	Some(EffectScheduler::new(
		network,
		config.effects,
		palette,
		scene,
		rng,
		start,
	))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn loop_tears_down_once_then_goes_idle() {
		assert_eq!(next_frame(false, true), Frame::Advance);
		assert_eq!(next_frame(true, true), Frame::TearDown);
		// The scheduler is gone after teardown, so the loop never reschedules.
		assert_eq!(next_frame(true, false), Frame::Idle);
		assert_eq!(next_frame(false, false), Frame::Idle);
	}
}
