//! neural-portfolio: a personal portfolio page rendered client-side.
//!
//! The page is a Leptos CSR app with scroll-spy navigation, a typing hero
//! subtitle, scroll-reveal cards, a persisted light/dark theme, a work-history
//! accordion, and an animated "brain network" SVG illustration.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
mod pages;

pub use components::brain_network::{BrainNetwork, NetworkConfig};

use crate::pages::home::Home;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Portfolio | Machine Learning Engineer" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Home />
	}
}
