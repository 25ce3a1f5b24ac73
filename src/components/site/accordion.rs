use leptos::prelude::*;

/// One role in the work history.
#[derive(Clone, Debug)]
pub struct AccordionEntry {
	/// Role title.
	pub title: &'static str,
	/// Employer.
	pub company: &'static str,
	/// Date range as displayed.
	pub period: &'static str,
	/// Bullet points shown when expanded.
	pub points: Vec<&'static str>,
}

/// Open item after clicking `clicked`: the clicked item toggles and every
/// other item closes.
pub fn next_open(current: Option<usize>, clicked: usize) -> Option<usize> {
	if current == Some(clicked) {
		None
	} else {
		Some(clicked)
	}
}

/// Work-history accordion with at most one item open, the first by default.
#[component]
pub fn Accordion(
	/// Entries, most recent first.
	items: Vec<AccordionEntry>,
) -> impl IntoView {
	let (open, set_open) = signal(if items.is_empty() { None } else { Some(0) });

	let rows = items
		.into_iter()
		.enumerate()
		.map(|(i, item)| {
			view! {
				<div class="accordion-item" class:active=move || open.get() == Some(i)>
					<button
						class="accordion-header"
						on:click=move |_| set_open.update(|o| *o = next_open(*o, i))
					>
						<div class="accordion-title">
							<h3>{item.title}</h3>
							<span class="accordion-company">{item.company}</span>
						</div>
						<span class="accordion-period">{item.period}</span>
						<i class="fas fa-chevron-down accordion-icon"></i>
					</button>
					<div class="accordion-content">
						<ul>
							{item.points.into_iter().map(|p| view! { <li>{p}</li> }).collect_view()}
						</ul>
					</div>
				</div>
			}
		})
		.collect_view();

	view! { <div class="accordion">{rows}</div> }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clicking_a_closed_item_opens_only_it() {
		assert_eq!(next_open(Some(0), 2), Some(2));
		assert_eq!(next_open(None, 1), Some(1));
	}

	#[test]
	fn clicking_the_open_item_closes_it() {
		assert_eq!(next_open(Some(1), 1), None);
	}
}
