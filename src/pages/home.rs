use leptos::prelude::*;

use crate::components::nav::Nav;
use crate::components::section::Section;
use crate::components::skill_network::SkillNetworkCanvas;
use crate::content::{
	CONTACT_ENDPOINT, PROFILE, PROJECTS, SKILL_CATEGORIES, SKILLS, SOCIAL_LINKS, skills_in_category,
	skills_of,
};

#[component]
fn Hero() -> impl IntoView {
	view! {
		<section class="hero">
			<div class="hero__title">
				<h1>
					{PROFILE
						.hero_lines
						.iter()
						.map(|line| view! { <span class="hero__line">{*line}</span> })
						.collect_view()}
				</h1>
				<p class="hero__tagline">{PROFILE.tagline}</p>
			</div>
			<div class="hero__hint">
				<p>"Scroll to Explore"</p>
				<div class="hero__rule"></div>
			</div>
		</section>
	}
}

#[component]
fn About() -> impl IntoView {
	view! {
		<Section id="about" title="About Me" class="section--blur">
			<div class="glass-panel about">
				<p>
					"I'm " <strong>{PROFILE.name}</strong>
					", a Civil Computer Engineering student passionate about creating impactful web solutions."
				</p>
				<p>
					"I dedicate myself to building "
					<span class="accent-cyan">"web applications and projects"</span>
					" that solve real problems. I love "
					<span class="accent-purple">"collaborating"</span>
					" with others, sharing knowledge, and constantly learning new technologies to push the boundaries of what's possible on the web."
				</p>
			</div>
		</Section>
	}
}

#[component]
fn Skills() -> impl IntoView {
	view! {
		<Section id="skills" title="Technologies & Skills">
			<div class="skill-grid">
				{SKILL_CATEGORIES
					.iter()
					.map(|category| {
						view! {
							<div class="glass-panel skill-card">
								<span class="skill-card__name">{*category}</span>
								<div class="skill-card__count">
									{format!("{} skills", skills_in_category(category))}
								</div>
								<div class="skill-card__chips">
									{skills_of(category)
										.map(|skill| {
											view! {
												<span
													class="skill-chip"
													style=format!("border-color: {}", skill.color)
												>
													{skill.name}
												</span>
											}
										})
										.collect_view()}
								</div>
							</div>
						}
					})
					.collect_view()}
			</div>
			<div class="glass-panel skill-hint">
				<p>
					<span class="accent-cyan">"Scroll down"</span>
					" to explore the interactive 3D neural network visualization"
				</p>
				<p class="skill-hint__sub">"Hover over nodes to see skill details and proficiency levels"</p>
			</div>
		</Section>
	}
}

#[component]
fn Projects() -> impl IntoView {
	view! {
		<Section id="projects" title="Selected Projects">
			<div class="project-grid">
				{PROJECTS
					.iter()
					.map(|project| {
						view! {
							<a class="project-card" href=project.link target="_blank" rel="noopener noreferrer">
								<div class="project-card__cover">
									<span class="project-card__monogram">{project.monogram()}</span>
									<div
										class="project-card__accent"
										style=format!("background-color: {}", project.color)
									></div>
								</div>
								<div class="project-card__body">
									<h3>{project.title}</h3>
									<p>{project.description}</p>
									<div class="project-card__tags">
										{project
											.tech
											.iter()
											.map(|t| view! { <span class="tag">{*t}</span> })
											.collect_view()}
									</div>
								</div>
							</a>
						}
					})
					.collect_view()}
			</div>
		</Section>
	}
}

#[component]
fn Contact() -> impl IntoView {
	view! {
		<Section id="contact" title="Get in Touch">
			<div class="contact-grid">
				<div class="glass-panel contact-pitch">
					<h3>"Let's Collaborate"</h3>
					<p>
						"I'm always open to discussing new projects, creative ideas, or opportunities to be part of your visions."
					</p>
					<a class="button" href=format!("mailto:{}", PROFILE.email)>
						"Send Email"
					</a>
				</div>

				<form class="glass-panel contact-form" action=CONTACT_ENDPOINT method="POST">
					<label>
						"Email" <input type="email" name="email" required=true />
					</label>
					<label>
						"Message" <textarea name="message" rows="4" required=true></textarea>
					</label>
					<button type="submit" class="button">
						"Send"
					</button>
				</form>

				<div class="social-list">
					{SOCIAL_LINKS
						.iter()
						.map(|social| {
							view! {
								<a class="glass-panel social-link" href=social.link>
									<span>{social.name}</span>
									<span class="social-link__cta">"CONNECT"</span>
								</a>
							}
						})
						.collect_view()}
				</div>
			</div>
		</Section>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<div class="page">
			<Nav />
			<ErrorBoundary fallback=|errors| {
				view! {
					<div class="scene-error">
						<p>"The skill network could not be drawn: "</p>
						<ul>
							{move || {
								errors
									.get()
									.into_iter()
									.map(|(_, e)| view! { <li>{e.to_string()}</li> })
									.collect_view()
							}}
						</ul>
					</div>
				}
			}>
				<SkillNetworkCanvas skills=SKILLS />
			</ErrorBoundary>

			<main class="content">
				<Hero />
				<About />
				<Skills />
				<Projects />
				<Contact />
				<footer class="footer">
					{format!("© {} {}", PROFILE.copyright_year, PROFILE.name)}
				</footer>
			</main>
		</div>
	}
}
