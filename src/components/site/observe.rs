use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Call `on_enter` whenever an element matching `selector` scrolls into view.
///
/// The observer lives for the rest of the page.
pub fn observe_entering(
	selector: &str,
	root_margin: &str,
	threshold: f64,
	mut on_enter: impl FnMut(Element) + 'static,
) -> Option<IntersectionObserver> {
	let document = web_sys::window()?.document()?;

	let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, _observer: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if entry.is_intersecting() {
					on_enter(entry.target());
				}
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_root_margin(root_margin);
	options.set_threshold(&JsValue::from_f64(threshold));

	let observer =
		match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
			Ok(observer) => observer,
			Err(e) => {
				warn!("portfolio: IntersectionObserver unavailable: {:?}", e);
				return None;
			}
		};
	callback.forget();

	let targets = document.query_selector_all(selector).ok()?;
	for i in 0..targets.length() {
		if let Some(element) = targets.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
			observer.observe(&element);
		}
	}
	Some(observer)
}
