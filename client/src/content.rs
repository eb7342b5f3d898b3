//! Static copy rendered by the page sections.
//!
//! Sections read these tables directly; nothing here changes at runtime.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const FIRST_NAME: &str = "Khalid";
pub const LAST_NAME: &str = "Ftaita";
pub const ROLE: &str = "Computer Science Student";
pub const TAGLINE: &str = "Building the future, one line of code at a time. Passionate about \
    algorithms, web development, and creating impactful digital experiences.";
pub const EMAIL: &str = "khalid.ftaita@email.com";
pub const LOCATION: &str = "Morocco";

/// Labelled hyperlink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

/// In-page anchors, in page order.
pub const SECTION_LINKS: &[Link] = &[
    Link { label: "About", href: "#about" },
    Link { label: "Education", href: "#education" },
    Link { label: "Skills", href: "#skills" },
    Link { label: "Projects", href: "#projects" },
    Link { label: "Contact", href: "#contact" },
];

pub const SOCIAL_LINKS: &[Link] = &[
    Link { label: "GitHub", href: "https://github.com" },
    Link { label: "LinkedIn", href: "https://linkedin.com" },
];

// =============================================================================
// ABOUT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fact {
    pub label: &'static str,
    pub value: &'static str,
}

pub const ABOUT_FACTS: &[Fact] = &[
    Fact { label: "Age", value: "19" },
    Fact { label: "Location", value: LOCATION },
    Fact { label: "Languages", value: "AR, FR, EN" },
    Fact { label: "Focus", value: "AI & Web Dev" },
];

pub const ABOUT_STATS: &[Fact] = &[
    Fact { label: "Year Learning", value: "1+" },
    Fact { label: "Projects", value: "10+" },
    Fact { label: "Technologies", value: "5+" },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a first-year Computer Science student at Université de Technologie, passionate about \
     exploring the endless possibilities of technology and software development.",
    "My journey in tech started with a curiosity about how things work, which quickly evolved into \
     a deep passion for coding. I enjoy solving complex problems, learning new technologies, and \
     building projects that make a difference.",
    "Currently, I'm focusing on strengthening my foundation in algorithms, data structures, and web \
     development. I'm excited about the future of AI and its potential to transform how we interact \
     with technology.",
];

pub const MOTTO: &str = "The only way to do great work is to love what you do. Every line of code \
    is a step toward mastering the craft.";

// =============================================================================
// EDUCATION
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub courses: &'static [&'static str],
    pub achievements: &'static [&'static str],
}

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        degree: "Bachelor's in Computer Science",
        institution: "Université de Technologie",
        period: "2023 - 2026",
        description: "Currently pursuing a degree in Computer Science with a focus on software \
            engineering, algorithms, and data structures.",
        courses: &[
            "Data Structures",
            "Algorithms",
            "Object-Oriented Programming",
            "Database Systems",
            "Web Development",
        ],
        achievements: &["Dean's List - First Semester", "Top 10% of Class"],
    },
    EducationEntry {
        degree: "High School Diploma",
        institution: "Lycée Scientifique",
        period: "2020 - 2023",
        description: "Completed high school with a focus on mathematics and sciences, laying the \
            foundation for my technical journey.",
        courses: &["Mathematics", "Physics", "Computer Science"],
        achievements: &["Honor Roll", "Science Fair Winner"],
    },
];

/// Transition stagger between consecutive timeline entries.
pub const EDUCATION_STAGGER_MS: u32 = 200;

// =============================================================================
// SKILLS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, percent.
    pub level: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        skills: &[
            Skill { name: "C", level: 75 },
            Skill { name: "Python", level: 80 },
            Skill { name: "JavaScript", level: 70 },
            Skill { name: "Java", level: 60 },
        ],
    },
    SkillGroup {
        title: "Web",
        skills: &[
            Skill { name: "HTML & CSS", level: 85 },
            Skill { name: "React", level: 65 },
            Skill { name: "Tailwind CSS", level: 70 },
        ],
    },
    SkillGroup {
        title: "Tools",
        skills: &[
            Skill { name: "Git", level: 75 },
            Skill { name: "Linux", level: 65 },
            Skill { name: "SQL", level: 60 },
        ],
    },
];

/// Stagger between skill groups.
pub const SKILL_STAGGER_MS: u32 = 150;

// =============================================================================
// PROJECTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub source_url: &'static str,
    pub demo_url: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Algorithm Visualizer",
        description: "Interactive visualizations of sorting and path-finding algorithms, built to \
            make data structure coursework easier to reason about.",
        tags: &["JavaScript", "Canvas", "Algorithms"],
        source_url: "https://github.com",
        demo_url: Some("https://github.com"),
    },
    Project {
        title: "Student Task Manager",
        description: "A small web app for tracking assignments and deadlines with filtering and \
            priority views.",
        tags: &["React", "Tailwind CSS"],
        source_url: "https://github.com",
        demo_url: None,
    },
    Project {
        title: "Library Database",
        description: "Relational schema and query layer for a campus library, written for the \
            database systems course.",
        tags: &["SQL", "Python"],
        source_url: "https://github.com",
        demo_url: None,
    },
];

/// Stagger between project cards.
pub const PROJECT_STAGGER_MS: u32 = 150;

// =============================================================================
// CONTACT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel { label: "Email", value: EMAIL, href: "mailto:khalid.ftaita@email.com" },
    ContactChannel { label: "Phone", value: "+212 6XX XXX XXX", href: "tel:+212600000000" },
    ContactChannel { label: "Location", value: LOCATION, href: "#" },
];

/// Delay for the `index`-th item of a staggered list.
#[must_use]
pub fn stagger_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(step_ms))
}
