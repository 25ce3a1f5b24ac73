//! Section navigation: smooth scrolling, scroll spy and the mobile menu.

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use super::after;
use super::observe::observe_entering;

/// `(section id, label, icon class)` in page order.
pub const SECTIONS: &[(&str, &str, &str)] = &[
	("home", "Home", "fas fa-home"),
	("about", "About", "fas fa-user"),
	("experience", "Experience", "fas fa-briefcase"),
	("projects", "Projects", "fas fa-code"),
	("courses", "Courses", "fas fa-graduation-cap"),
	("contact", "Contact", "fas fa-envelope"),
];

/// Shared navigation state, provided as context by the page.
#[derive(Clone, Copy, Debug)]
pub struct NavState {
	/// Id of the section whose link is highlighted.
	pub active: RwSignal<String>,
	/// Whether the mobile menu is open.
	pub menu_open: RwSignal<bool>,
}

impl NavState {
	/// State with the first section active and the menu closed.
	pub fn new() -> Self {
		Self {
			active: RwSignal::new(SECTIONS[0].0.to_string()),
			menu_open: RwSignal::new(false),
		}
	}

	/// Scroll to a section, mark it active, close the menu and record the hash.
	pub fn go_to(&self, id: &str) {
		if !scroll_to_section(id) {
			debug!("portfolio: no section #{}", id);
			return;
		}
		self.active.set(id.to_string());
		self.close_menu();
		push_hash(id);
	}

	/// Open or close the mobile menu.
	pub fn toggle_menu(&self) {
		self.menu_open.update(|open| *open = !*open);
	}

	/// Close the mobile menu.
	pub fn close_menu(&self) {
		self.menu_open.set(false);
	}
}

impl Default for NavState {
	fn default() -> Self {
		Self::new()
	}
}

fn scroll_to_section(id: &str) -> bool {
	let Some(target) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(id))
	else {
		return false;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	target.scroll_into_view_with_scroll_into_view_options(&options);
	true
}

fn push_hash(id: &str) {
	if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
		let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", id)));
	}
}

fn start_scroll_spy(nav: NavState) {
	let _ = observe_entering(".section", "-20% 0px -70% 0px", 0.0, move |section| {
		let id = section.id();
		if SECTIONS.iter().any(|&(s, _, _)| s == id) {
			nav.active.set(id);
		}
	});
}

/// Scroll to the section named in the URL hash once the page has settled.
fn restore_hash() {
	let Some(hash) = web_sys::window().and_then(|w| w.location().hash().ok()) else {
		return;
	};
	let id = hash.trim_start_matches('#').to_string();
	if id.is_empty() {
		return;
	}
	after(100, move || {
		scroll_to_section(&id);
	});
}

/// Sidebar navigation with the mobile menu toggle and overlay.
#[component]
pub fn Navigation(
	/// Extra controls shown under the links.
	children: Children,
) -> impl IntoView {
	let nav = use_context::<NavState>().unwrap_or_default();

	Effect::new(move |_| {
		start_scroll_spy(nav);
		restore_hash();
	});

	let links = SECTIONS
		.iter()
		.map(|&(id, label, icon)| {
			view! {
				<li>
					<a
						href=format!("#{}", id)
						class="nav-link"
						class:active=move || nav.active.get() == id
						on:click=move |ev| {
							ev.prevent_default();
							nav.go_to(id);
						}
					>
						<i class=icon></i>
						<span>{label}</span>
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<button class="menu-toggle" aria-label="Toggle navigation" on:click=move |_| nav.toggle_menu()>
			<i class=move || if nav.menu_open.get() { "fas fa-times" } else { "fas fa-bars" }></i>
		</button>
		<aside class="nav" class:active=move || nav.menu_open.get()>
			<ul class="nav-links">{links}</ul>
			{children()}
		</aside>
		<div class="overlay" class:active=move || nav.menu_open.get() on:click=move |_| nav.close_menu()></div>
	}
}
