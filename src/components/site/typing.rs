use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use super::after;

/// Reveals a string one character at a time.
#[derive(Clone, Debug)]
pub struct Typewriter {
	text: String,
	/// Byte offset of the end of the typed prefix.
	end: usize,
}

impl Typewriter {
	/// A typewriter with nothing typed yet.
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			end: 0,
		}
	}

	/// Type the next character. Returns `false` once everything is typed.
	pub fn step(&mut self) -> bool {
		match self.text[self.end..].chars().next() {
			Some(c) => {
				self.end += c.len_utf8();
				true
			}
			None => false,
		}
	}

	/// The prefix typed so far.
	pub fn typed(&self) -> &str {
		&self.text[..self.end]
	}

	/// Whether the whole text has been typed.
	pub fn is_done(&self) -> bool {
		self.end == self.text.len()
	}
}

fn type_next(
	writer: Rc<RefCell<Typewriter>>,
	set_typed: WriteSignal<String>,
	set_done: WriteSignal<bool>,
	delay_ms: i32,
) {
	let done = {
		let mut writer = writer.borrow_mut();
		writer.step();
		set_typed.set(writer.typed().to_string());
		writer.is_done()
	};
	if done {
		set_done.set(true);
		return;
	}
	after(delay_ms, move || type_next(writer, set_typed, set_done, delay_ms));
}

/// Hero subtitle that types itself out after a short pause.
///
/// Adds `typing-done` once the last character is in, which retires the
/// blinking cursor in the stylesheet.
#[component]
pub fn TypingText(
	/// Full subtitle text.
	text: &'static str,
	/// Pause before the first character.
	#[prop(default = 800)]
	start_delay_ms: i32,
	/// Pause between characters.
	#[prop(default = 50)]
	char_delay_ms: i32,
) -> impl IntoView {
	let (typed, set_typed) = signal(String::new());
	let (done, set_done) = signal(false);
	let writer = Rc::new(RefCell::new(Typewriter::new(text)));

	after(start_delay_ms, move || {
		type_next(writer, set_typed, set_done, char_delay_ms)
	});

	view! {
		<p class="hero-subtitle" class:typing-done=move || done.get() aria-label=text>
			{move || typed.get()}
		</p>
	}
}
