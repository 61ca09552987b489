//! Static page content.

use crate::components::skill_network::SkillRecord;

pub struct Profile {
	pub name: &'static str,
	pub hero_lines: &'static [&'static str],
	pub tagline: &'static str,
	pub email: &'static str,
	pub copyright_year: u16,
}

pub struct Project {
	pub title: &'static str,
	pub description: &'static str,
	pub tech: &'static [&'static str],
	pub link: &'static str,
	pub color: &'static str,
}

impl Project {
	/// Two-letter upper-case monogram shown on the project card.
	pub fn monogram(&self) -> String {
		self.title.chars().take(2).collect::<String>().to_uppercase()
	}
}

pub struct SocialLink {
	pub name: &'static str,
	pub link: &'static str,
}

/// Fixed external endpoint receiving the contact form `POST`.
pub const CONTACT_ENDPOINT: &str = "https://formspree.io/f/portfolio-contact";

pub const PROFILE: Profile = Profile {
	name: "Flavio C. Figueroa",
	hero_lines: &["FLAVIO", "FIGUEROA"],
	tagline: "CIVIL ENGINEERING STUDENT",
	email: "contact@example.com",
	copyright_year: 2025,
};

pub const NAV_LINKS: &[(&str, &str)] = &[
	("About", "#about"),
	("Skills", "#skills"),
	("Projects", "#projects"),
	("Contact", "#contact"),
];

/// Category cards in display order.
pub const SKILL_CATEGORIES: &[&str] = &[
	"Frontend", "Backend", "Database", "DevOps", "Cloud", "Tools", "Graphics", "Core",
];

pub static SKILLS: &[SkillRecord] = &[
	skill("React", "Frontend", 90, "#61dafb"),
	skill("Node.js", "Backend", 85, "#68a063"),
	skill("Three.js", "Graphics", 80, "#ffffff"),
	skill("Python", "Backend", 85, "#ffd343"),
	skill("SQL", "Database", 75, "#00758f"),
	skill("TypeScript", "Frontend", 88, "#3178c6"),
	skill("Docker", "DevOps", 70, "#2496ed"),
	skill("AWS", "Cloud", 65, "#ff9900"),
	skill("GraphQL", "API", 75, "#e10098"),
	skill("Next.js", "Frontend", 85, "#000000"),
	skill("Tailwind", "Styling", 92, "#38bdf8"),
	skill("Git", "Tools", 88, "#f05032"),
	skill("JavaScript", "Core", 95, "#f7df1e"),
	skill("HTML/CSS", "Core", 95, "#e34c26"),
	skill("MongoDB", "Database", 78, "#47a248"),
	skill("Vite", "Tools", 85, "#646cff"),
];

const fn skill(name: &'static str, category: &'static str, level: u8, color: &'static str) -> SkillRecord {
	SkillRecord {
		name,
		category,
		level,
		color,
	}
}

pub fn skills_of(category: &str) -> impl Iterator<Item = &'static SkillRecord> + '_ {
	SKILLS.iter().filter(move |s| s.category == category)
}

pub fn skills_in_category(category: &str) -> usize {
	skills_of(category).count()
}

pub static PROJECTS: &[Project] = &[
	Project {
		title: "Benassi Arquitectos",
		description: "Estudio de arquitectura líder en Temuco. Diseño residencial, comercial y regularización de propiedades.",
		tech: &["Web Design", "Frontend", "UX/UI"],
		link: "https://benassiarquitectos.cl/",
		color: "#d4af37",
	},
	Project {
		title: "KASAKIT SPA",
		description: "Plataforma para empresa de casas prefabricadas. Diseño, fabricación y construcción.",
		tech: &["Web Development", "Business", "Catalog"],
		link: "https://kasakittemuco.com/",
		color: "#4CAF50",
	},
	Project {
		title: "Cerkon",
		description: "Aplicación React desplegada en Vercel. Desarrollo moderno con Vite.",
		tech: &["React", "Vite", "Vercel"],
		link: "https://cerkon-gamma.vercel.app",
		color: "#61dafb",
	},
	Project {
		title: "Jotadrehhh",
		description: "Proyecto personal desarrollado con React y Vite.",
		tech: &["React", "Vite", "JavaScript"],
		link: "https://github.com/Flan123321/jotadrehhh",
		color: "#ff4757",
	},
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
	SocialLink {
		name: "GitHub",
		link: "#",
	},
	SocialLink {
		name: "LinkedIn",
		link: "#",
	},
	SocialLink {
		name: "Instagram",
		link: "#",
	},
];
