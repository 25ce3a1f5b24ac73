use leptos::prelude::*;

use crate::components::brain_network::BrainNetwork;
use crate::components::site::{
	Accordion, AccordionEntry, ContactForm, NavState, Navigation, ThemeToggle, TypingText,
	init_scroll_reveal,
};

const TAGLINE: &str = "Machine Learning engineer building practical models for fraud, churn, pricing, NLP, and computer vision problems.";

const SKILLS: &[(&str, &str, &str)] = &[
	("fas fa-brain", "Machine Learning", "Gradient boosting, linear models, model calibration"),
	("fas fa-network-wired", "Deep Learning", "PyTorch, CNNs, transformers, transfer learning"),
	("fas fa-comments", "NLP", "Text classification, embeddings, entity extraction"),
	("fas fa-eye", "Computer Vision", "Detection, segmentation, image classification"),
	("fas fa-database", "Data Engineering", "SQL, Spark, feature pipelines"),
	("fas fa-cloud", "MLOps", "Docker, CI/CD, model monitoring"),
];

const PROJECTS: &[(&str, &str, &str)] = &[
	(
		"Fraud Detection",
		"Real-time transaction scoring with gradient-boosted trees and graph features.",
		"XGBoost · Feature store · Streaming",
	),
	(
		"Churn Prediction",
		"Survival-style churn model driving retention campaigns.",
		"LightGBM · SHAP · Airflow",
	),
	(
		"Dynamic Pricing",
		"Demand elasticity estimation and price recommendation.",
		"Bayesian regression · A/B testing",
	),
];

const COURSES: &[(&str, &str)] = &[
	("Deep Learning Specialization", "DeepLearning.AI"),
	("Machine Learning Engineering for Production", "DeepLearning.AI"),
	("Natural Language Processing", "Hugging Face"),
];

const CONTACTS: &[(&str, &str, &str)] = &[
	("fas fa-envelope", "Email", "mailto:hello@example.com"),
	("fab fa-linkedin", "LinkedIn", "https://www.linkedin.com/"),
	("fab fa-github", "GitHub", "https://github.com/"),
];

fn experience() -> Vec<AccordionEntry> {
	vec![
		AccordionEntry {
			title: "Machine Learning Engineer",
			company: "Fintech company",
			period: "2022 - Present",
			points: vec![
				"Built and deployed fraud scoring models serving live traffic",
				"Owned feature pipelines and model monitoring",
			],
		},
		AccordionEntry {
			title: "Data Scientist",
			company: "Telecom operator",
			period: "2020 - 2022",
			points: vec![
				"Churn and customer lifetime value models",
				"NLP classification of support tickets",
			],
		},
		AccordionEntry {
			title: "Junior Data Analyst",
			company: "Retail group",
			period: "2018 - 2020",
			points: vec!["Pricing analytics and demand forecasting"],
		},
	]
}

/// The single portfolio page.
#[component]
pub fn Home() -> impl IntoView {
	let nav = NavState::new();
	provide_context(nav);

	Effect::new(move |_| init_scroll_reveal());

	view! {
		<Navigation>
			<ThemeToggle />
		</Navigation>

		<main class="main-content">
			<section id="home" class="section hero">
				<div class="hero-text">
					<h1 class="hero-title">"Hi, I'm an ML Engineer"</h1>
					<TypingText text=TAGLINE />
					<div class="hero-actions">
						<button class="btn btn-primary" on:click=move |_| nav.go_to("projects")>
							"View Projects"
						</button>
						<button class="btn btn-secondary" on:click=move |_| nav.go_to("contact")>
							"Get in Touch"
						</button>
					</div>
				</div>
				<div class="hero-visual">
					<BrainNetwork />
				</div>
			</section>

			<section id="about" class="section">
				<h2 class="section-title">"About"</h2>
				<div class="skills-grid">
					{SKILLS
						.iter()
						.map(|&(icon, name, detail)| {
							view! {
								<div class="skill-card">
									<i class=icon></i>
									<h3>{name}</h3>
									<p>{detail}</p>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section id="experience" class="section">
				<h2 class="section-title">"Experience"</h2>
				<Accordion items=experience() />
			</section>

			<section id="projects" class="section">
				<h2 class="section-title">"Projects"</h2>
				<div class="projects-grid">
					{PROJECTS
						.iter()
						.map(|&(name, summary, stack)| {
							view! {
								<div class="project-card">
									<h3>{name}</h3>
									<p>{summary}</p>
									<span class="project-stack">{stack}</span>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section id="courses" class="section">
				<h2 class="section-title">"Courses"</h2>
				<div class="courses-grid">
					{COURSES
						.iter()
						.map(|&(name, provider)| {
							view! {
								<div class="course-card">
									<h3>{name}</h3>
									<p>{provider}</p>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section id="contact" class="section">
				<h2 class="section-title">"Contact"</h2>
				<div class="contact-list">
					{CONTACTS
						.iter()
						.map(|&(icon, label, href)| {
							view! {
								<a class="contact-item" href=href target="_blank" rel="noopener">
									<i class=icon></i>
									<span>{label}</span>
								</a>
							}
						})
						.collect_view()}
				</div>
				<ContactForm />
			</section>
		</main>
	}
}
