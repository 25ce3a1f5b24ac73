//! Contact form. Submissions are only logged; there is no backend.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::{info, warn};
use serde::Serialize;
use web_sys::{FormData, HtmlFormElement};

const THANK_YOU: &str = "Thank you for your message! I will get back to you soon.";

/// Fields of a submitted contact form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactMessage {
	/// Sender name.
	pub name: String,
	/// Reply address.
	pub email: String,
	/// Optional subject line.
	pub subject: String,
	/// Message body.
	pub message: String,
}

impl ContactMessage {
	fn from_form(form: &HtmlFormElement) -> Self {
		let Ok(data) = FormData::new_with_form(form) else {
			return Self::default();
		};
		let field = |name: &str| data.get(name).as_string().unwrap_or_default().trim().to_string();
		Self {
			name: field("name"),
			email: field("email"),
			subject: field("subject"),
			message: field("message"),
		}
	}

	/// JSON line written to the console log.
	pub fn to_log_line(&self) -> String {
		serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
	}
}

/// Contact form that logs submissions.
#[component]
pub fn ContactForm() -> impl IntoView {
	let form_ref = NodeRef::<leptos::html::Form>::new();

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let Some(form) = form_ref.get() else {
			warn!("portfolio: contact form missing on submit");
			return;
		};
		let message = ContactMessage::from_form(&form);
		info!("portfolio: form submitted: {}", message.to_log_line());

		if let Some(window) = web_sys::window() {
			let _ = window.alert_with_message(THANK_YOU);
		}
		form.reset();
	};

	view! {
		<form class="contact-form" node_ref=form_ref on:submit=on_submit>
			<div class="form-row">
				<input type="text" name="name" placeholder="Your name" required />
				<input type="email" name="email" placeholder="Your email" required />
			</div>
			<input type="text" name="subject" placeholder="Subject" />
			<textarea name="message" rows="5" placeholder="Your message" required></textarea>
			<button type="submit" class="btn btn-primary">
				<i class="fas fa-paper-plane"></i>
				" Send Message"
			</button>
		</form>
	}
}
