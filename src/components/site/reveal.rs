use super::observe::observe_entering;

/// Cards that fade in the first time they scroll into view.
pub const REVEAL_SELECTOR: &str = ".skill-card, .project-card, .course-card, .contact-item";

/// Add `animate-in` to each card as it enters the viewport.
pub fn init_scroll_reveal() {
	let _ = observe_entering(REVEAL_SELECTOR, "0px 0px -50px 0px", 0.1, |card| {
		let _ = card.class_list().add_1("animate-in");
	});
}
