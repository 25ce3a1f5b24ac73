//! Light/dark theme switch persisted in `localStorage`.
//!
//! Dark is the default and is stored as the absence of the flag.

use leptos::prelude::*;
use log::debug;
use web_sys::Storage;

const STORAGE_KEY: &str = "theme";
const THEME_ATTR: &str = "data-theme";

/// Page color scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
	/// Stylesheet default.
	Dark,
	/// Opt-in light scheme.
	Light,
}

impl ThemeMode {
	/// Interpret the stored flag; anything but `"light"` means dark.
	pub fn from_stored(value: Option<&str>) -> Self {
		match value {
			Some("light") => ThemeMode::Light,
			_ => ThemeMode::Dark,
		}
	}

	/// The other mode.
	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Dark => ThemeMode::Light,
			ThemeMode::Light => ThemeMode::Dark,
		}
	}

	/// Value to store, `None` meaning remove the flag.
	pub fn stored_value(self) -> Option<&'static str> {
		match self {
			ThemeMode::Dark => None,
			ThemeMode::Light => Some("light"),
		}
	}

	/// Value of `data-theme` on the root element, `None` meaning no attribute.
	pub fn theme_attr(self) -> Option<&'static str> {
		match self {
			ThemeMode::Dark => None,
			ThemeMode::Light => Some("light"),
		}
	}

	/// Font Awesome icon for the toggle button.
	pub fn icon_class(self) -> &'static str {
		match self {
			ThemeMode::Dark => "fas fa-moon",
			ThemeMode::Light => "fas fa-sun",
		}
	}

	/// Button caption.
	pub fn label(self) -> &'static str {
		match self {
			ThemeMode::Dark => "Dark Mode",
			ThemeMode::Light => "Light Mode",
		}
	}
}

fn storage() -> Option<Storage> {
	web_sys::window()?.local_storage().ok()?
}

fn load_theme() -> ThemeMode {
	let stored = storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
	ThemeMode::from_stored(stored.as_deref())
}

fn persist_theme(mode: ThemeMode) {
	let Some(storage) = storage() else {
		debug!("portfolio: no localStorage, theme not persisted");
		return;
	};
	let _ = match mode.stored_value() {
		Some(value) => storage.set_item(STORAGE_KEY, value),
		None => storage.remove_item(STORAGE_KEY),
	};
}

fn apply_theme(mode: ThemeMode) {
	let Some(root) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
	else {
		return;
	};
	let _ = match mode.theme_attr() {
		Some(value) => root.set_attribute(THEME_ATTR, value),
		None => root.remove_attribute(THEME_ATTR),
	};
}

/// Load the stored theme and apply it to the document right away.
fn restore_theme() -> ThemeMode {
	let mode = load_theme();
	apply_theme(mode);
	mode
}

/// Button switching between the dark and light page themes.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	// Applied before the first render so a light page never paints dark.
	let (mode, set_mode) = signal(restore_theme());

	let on_click = move |_| {
		let next = mode.get_untracked().toggled();
		persist_theme(next);
		apply_theme(next);
		set_mode.set(next);
	};

	view! {
		<button id="themeToggle" class="theme-toggle" on:click=on_click>
			<i class=move || mode.get().icon_class()></i>
			<span class="theme-text">{move || mode.get().label()}</span>
		</button>
	}
}
