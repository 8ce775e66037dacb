//! Static portfolio content.
//!
//! Each section is a list of bordered panels; each panel holds a sequence of
//! styled items. Rendering maps item kinds to theme roles.

use super::Section;

pub const OWNER: &str = "MOHIL GARG";
pub const ROLE: &str = "FULL-STACK ENGINEER";
pub const TAGLINE: &str = "Portfolio • mohil.dev • GitHub: mohilcode";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    /// Emphasised line, usually a bullet heading.
    Label(&'static str),
    Text(&'static str),
    /// Secondary detail under a label.
    Muted(&'static str),
    /// `label` on the left, `value` right-aligned.
    Field {
        label: &'static str,
        value: &'static str,
    },
    /// Blank line.
    Gap,
}

impl Item {
    /// Every piece of visible text in this item.
    pub fn texts(&self) -> impl Iterator<Item = &'static str> {
        let (a, b) = match *self {
            Item::Label(s) | Item::Text(s) | Item::Muted(s) => (Some(s), None),
            Item::Field { label, value } => (Some(label), Some(value)),
            Item::Gap => (None, None),
        };
        a.into_iter().chain(b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    pub title: &'static str,
    pub items: &'static [Item],
}

impl Panel {
    fn contains(&self, needle: &str) -> bool {
        std::iter::once(self.title)
            .chain(self.items.iter().flat_map(Item::texts))
            .any(|text| text.to_lowercase().contains(needle))
    }
}

use Item::*;

const HOME: &[Panel] = &[
    Panel {
        title: "Welcome to My Digital Portfolio",
        items: &[
            Text("Full-Stack & DevOps Engineer specializing in modern web technologies."),
            Gap,
            Muted("Currently working at MONOLISIX and SIND, building scalable solutions."),
        ],
    },
    Panel {
        title: "Quick Links",
        items: &[
            Field { label: "• Email:", value: "mohilg@outlook.com" },
            Field { label: "• Portfolio:", value: "who.mohil.dev" },
            Field { label: "• GitHub:", value: "m0hill" },
        ],
    },
];

const ABOUT: &[Panel] = &[
    Panel {
        title: "Education",
        items: &[
            Label("• Kumamoto University, Japan (2020-2024)"),
            Muted("  Bachelor of Engineering - Electrical & Information Engineering"),
            Gap,
            Label("• Tokyo University of Foreign Studies (2019-2020)"),
            Muted("  Japanese Language Studies"),
        ],
    },
    Panel {
        title: "Achievements",
        items: &[Text("• MEXT Scholarship recipient (2019)")],
    },
];

const EXPERIENCE: &[Panel] = &[
    Panel {
        title: "MONOLISIX株式会社 - Full-Stack & DevOps Engineer",
        items: &[
            Muted("Oct 2023 - Present | Remote"),
            Gap,
            Label("• Monorepo Architecture:"),
            Text("  Created unified monorepo with Turborepo, improved CI/CD."),
            Label("• Performance Optimization:"),
            Text("  75% faster startup, 5x faster builds with Vite."),
            Label("• Vue.js Modernization:"),
            Text("  Upgraded to Vue 2.7, implemented Composition API."),
        ],
    },
    Panel {
        title: "株式会社SIND - Tech Lead & Full-Stack Engineer",
        items: &[
            Muted("Present | Remote"),
            Gap,
            Label("• AI-Powered Audio Systems:"),
            Text("  Built SageMaker endpoints, real-time transcription."),
            Label("• Team Leadership:"),
            Text("  Code reviews, ECS deployments, CI/CD automation."),
        ],
    },
];

const PROJECTS: &[Panel] = &[
    Panel {
        title: "Featured Projects",
        items: &[
            Label("• Entropy - Multi-Agent Coding System"),
            Muted("  AI SDK, SQLite, Drizzle ORM | Automated development"),
            Gap,
            Label("• Starter-Flare - Full-Stack SaaS Boilerplate"),
            Muted("  Cloudflare Workers, React Router, Hono"),
            Gap,
            Label("• GetMD - Website to Markdown Converter"),
            Muted("  High-performance Rust server"),
        ],
    },
    Panel {
        title: "Personal TUI Website (This!)",
        items: &[
            Text("Interactive terminal portfolio"),
            Muted("Accessible via who.mohil.dev and SSH at why.mohil.dev"),
        ],
    },
];

const SKILLS: &[Panel] = &[
    Panel {
        title: "Technical Skills",
        items: &[
            Label("Programming:"),
            Text("  TypeScript, Python, Kotlin, Rust, C++, SQL"),
            Gap,
            Label("Frameworks:"),
            Text("  Next.js, FastAPI, Django, Vue.js, Express.js, tRPC"),
            Gap,
            Label("ML/AI:"),
            Text("  AWS SageMaker, TensorFlow"),
        ],
    },
    Panel {
        title: "DevOps & Cloud",
        items: &[Text("AWS, Docker, CI/CD, Turborepo")],
    },
    Panel {
        title: "Databases",
        items: &[Text("PostgreSQL, MongoDB")],
    },
];

const CONTACT: &[Panel] = &[
    Panel {
        title: "Get In Touch",
        items: &[
            Field { label: "Email:", value: "mohilg@outlook.com" },
            Field { label: "Portfolio:", value: "who.mohil.dev" },
            Field { label: "GitHub:", value: "github.com/m0hill" },
        ],
    },
    Panel {
        title: "Available For",
        items: &[
            Text("• Full-stack development projects"),
            Text("• DevOps and cloud architecture consulting"),
            Text("• Open source collaboration"),
        ],
    },
];

pub fn panels(section: Section) -> &'static [Panel] {
    match section {
        Section::Home => HOME,
        Section::About => ABOUT,
        Section::Experience => EXPERIENCE,
        Section::Projects => PROJECTS,
        Section::Skills => SKILLS,
        Section::Contact => CONTACT,
    }
}

/// Find the first section matching `query`, case-insensitively.
///
/// Titles are tried across all sections before content, so typing a section
/// name always lands on that section even if an earlier one mentions it.
pub fn search(query: &str) -> Option<Section> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    Section::ALL
        .into_iter()
        .find(|s| s.title().to_lowercase().contains(&needle))
        .or_else(|| {
            Section::ALL
                .into_iter()
                .find(|s| panels(*s).iter().any(|p| p.contains(&needle)))
        })
}
