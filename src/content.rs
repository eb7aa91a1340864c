// Static page content. Read-only, never mutated at runtime.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { id: "hero", label: "HOME" },
    NavLink { id: "about", label: "ABOUT" },
    NavLink { id: "services", label: "SERVICES" },
    NavLink { id: "projects", label: "PROJECTS" },
    NavLink { id: "contact", label: "CONTACT" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
    pub tech_stack: &'static [&'static str],
    pub live_link: Option<&'static str>,
    pub github_link: Option<&'static str>,
}

impl Project {
    /// Placeholder glyph shown when the project has no image.
    pub fn initial(&self) -> String {
        self.title.chars().next().map(|c| c.to_string()).unwrap_or_default()
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution with real-time inventory management, secure payment processing, and an intuitive admin dashboard. Built with modern technologies for scalability and performance.",
        image: None,
        tech_stack: &["React", "Node.js", "MongoDB", "Express", "Stripe"],
        live_link: Some("https://example.com"),
        github_link: Some("https://github.com/example/ecommerce"),
    },
    Project {
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates, drag-and-drop functionality, and team collaboration features. Designed for productivity and seamless user experience.",
        image: None,
        tech_stack: &["React", "TypeScript", "Firebase", "Tailwind CSS"],
        live_link: Some("https://example.com"),
        github_link: Some("https://github.com/example/taskmanager"),
    },
    Project {
        title: "Social Media Dashboard",
        description: "An analytics dashboard for social media management with data visualization, scheduling capabilities, and comprehensive reporting tools. Helps businesses track and optimize their social presence.",
        image: None,
        tech_stack: &["Next.js", "PostgreSQL", "Chart.js", "Prisma"],
        live_link: Some("https://example.com"),
        github_link: Some("https://github.com/example/social-dashboard"),
    },
    Project {
        title: "Weather Forecast App",
        description: "A beautiful weather application with location-based forecasts, interactive maps, and detailed meteorological data. Features smooth animations and an elegant user interface.",
        image: None,
        tech_stack: &["React", "OpenWeather API", "GSAP", "CSS3"],
        live_link: Some("https://example.com"),
        github_link: Some("https://github.com/example/weather-app"),
    },
    Project {
        title: "Fitness Tracker",
        description: "A comprehensive fitness tracking application with workout planning, progress monitoring, and nutrition tracking. Includes charts and statistics to help users achieve their fitness goals.",
        image: None,
        tech_stack: &["React Native", "Firebase", "Redux", "Chart.js"],
        live_link: Some("https://example.com"),
        github_link: Some("https://github.com/example/fitness-tracker"),
    },
    Project {
        title: "Music Streaming Platform",
        description: "A modern music streaming platform with playlist management, audio visualization, and social sharing features. Built with focus on audio quality and user experience.",
        image: None,
        tech_stack: &["Vue.js", "Node.js", "AWS S3", "Web Audio API"],
        live_link: Some("https://example.com"),
        github_link: Some("https://github.com/example/music-stream"),
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub glyph: &'static str,
    pub color: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "React", glyph: "⚛", color: "#61DAFB" },
    Skill { name: "Node.js", glyph: "⬢", color: "#339933" },
    Skill { name: "MongoDB", glyph: "🍃", color: "#47A248" },
    Skill { name: "Express", glyph: "ex", color: "#000000" },
    Skill { name: "JavaScript", glyph: "JS", color: "#F7DF1E" },
    Skill { name: "TypeScript", glyph: "TS", color: "#3178C6" },
    Skill { name: "Tailwind CSS", glyph: "≋", color: "#06B6D4" },
    Skill { name: "Git", glyph: "⎇", color: "#F05032" },
    Skill { name: "Firebase", glyph: "🔥", color: "#FFCA28" },
    Skill { name: "PostgreSQL", glyph: "🐘", color: "#4169E1" },
    Skill { name: "Next.js", glyph: "N", color: "#000000" },
    Skill { name: "Vue.js", glyph: "V", color: "#4FC08D" },
];

pub struct AboutItem {
    pub key: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub bullets: &'static [&'static str],
}

pub const ABOUT_ITEMS: &[AboutItem] = &[
    AboutItem {
        key: "who",
        title: "Who I Am",
        body: "I'm Garv Yadav, a developer who enjoys building products that feel natural to use. I specialize in web development using the MERN stack and I love turning creative concepts into production-ready solutions. My approach blends modern aesthetics with performance, creating experiences that are intuitive and visually engaging.",
        bullets: &[],
    },
    AboutItem {
        key: "what",
        title: "What I Do",
        body: "I craft responsive front-ends, scalable back-ends, and interactive user interfaces. From concept to deployment, I focus on:",
        bullets: &[
            "building smooth user interfaces",
            "clean & maintainable code architecture",
            "seamless database & API communication",
            "micro-animations & fluid interactions",
        ],
    },
    AboutItem {
        key: "philosophy",
        title: "My Philosophy",
        body: "\"Code should be clean. UI should be intuitive. Performance should be seamless. Experience should feel effortless.\"",
        bullets: &[],
    },
    AboutItem {
        key: "open-to",
        title: "Open To",
        body: "I'm open to freelance projects, collaborations, internships, and jobs, especially those that challenge problem-solving and forward-thinking engineering.",
        bullets: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_initial_falls_back_to_first_letter() {
        assert_eq!(PROJECTS[0].initial(), "E");
        let untitled = Project { title: "", ..PROJECTS[0] };
        assert_eq!(untitled.initial(), "");
    }

    #[test]
    fn nav_links_target_unique_sections() {
        let mut ids: Vec<_> = NAV_LINKS.iter().map(|l| l.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), NAV_LINKS.len());
    }
}
