//! Page chrome around the portfolio sections.

mod accordion;
mod contact;
mod nav;
mod observe;
mod reveal;
mod theme_toggle;
mod typing;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

pub use accordion::{Accordion, AccordionEntry};
pub use contact::ContactForm;
pub use nav::{NavState, Navigation, SECTIONS};
pub use reveal::init_scroll_reveal;
pub use theme_toggle::{ThemeMode, ThemeToggle};
pub use typing::TypingText;

/// Run `f` once after `ms` milliseconds.
pub(crate) fn after(ms: i32, f: impl FnOnce() + 'static) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let callback = Closure::once_into_js(f);
	let _ = window
		.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms);
}
