#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub struct HeroCopy {
    pub greeting: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
}

pub const HERO: HeroCopy = HeroCopy {
    greeting: "👋 Welcome to my portfolio",
    name: "Your Name",
    title: "Full Stack Developer & Designer",
    tagline: "I craft beautiful, functional, and user-centric digital experiences with modern technologies",
};

pub static HERO_SOCIALS: [SocialLink; 4] = [
    SocialLink { name: "GitHub", icon: "🔗", href: "#" },
    SocialLink { name: "LinkedIn", icon: "💼", href: "#" },
    SocialLink { name: "Twitter", icon: "🐦", href: "#" },
    SocialLink { name: "Email", icon: "✉️", href: "#" },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const ABOUT_HEADLINE: &str = "Building Digital Dreams into Reality";

pub static ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm a passionate full-stack developer with expertise in creating elegant solutions to complex problems. With a strong foundation in both frontend and backend technologies, I specialize in building scalable, performant, and user-friendly applications.",
    "My journey in tech has been driven by curiosity and a love for learning. I thrive on challenges and am constantly exploring new technologies to stay at the forefront of web development.",
];

pub static ABOUT_TECH: [&str; 6] = ["React", "TypeScript", "Node.js", "MongoDB", "TailwindCSS", "AWS"];

pub static ABOUT_STATS: [Stat; 4] = [
    Stat { value: "3+", label: "Years Experience" },
    Stat { value: "50+", label: "Projects Completed" },
    Stat { value: "30+", label: "Happy Clients" },
    Stat { value: "100%", label: "Success Rate" },
];

pub struct Skill {
    pub name: &'static str,
    // 0..=100
    pub level: u8,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Frontend",
        icon: "🎨",
        skills: &[
            Skill { name: "React / Next.js", level: 90 },
            Skill { name: "TypeScript", level: 85 },
            Skill { name: "HTML / CSS", level: 95 },
            Skill { name: "TailwindCSS", level: 90 },
            Skill { name: "Framer Motion", level: 80 },
        ],
    },
    SkillCategory {
        title: "Backend",
        icon: "⚙️",
        skills: &[
            Skill { name: "Node.js / Express", level: 85 },
            Skill { name: "Python / Django", level: 75 },
            Skill { name: "RESTful APIs", level: 90 },
            Skill { name: "GraphQL", level: 70 },
            Skill { name: "Socket.io", level: 80 },
        ],
    },
    SkillCategory {
        title: "Database",
        icon: "💾",
        skills: &[
            Skill { name: "MongoDB", level: 85 },
            Skill { name: "PostgreSQL", level: 80 },
            Skill { name: "Redis", level: 75 },
            Skill { name: "Firebase", level: 80 },
            Skill { name: "MySQL", level: 75 },
        ],
    },
    SkillCategory {
        title: "DevOps & Tools",
        icon: "🛠️",
        skills: &[
            Skill { name: "Git / GitHub", level: 90 },
            Skill { name: "Docker", level: 75 },
            Skill { name: "AWS / Vercel", level: 80 },
            Skill { name: "CI/CD", level: 70 },
            Skill { name: "Linux", level: 75 },
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectCategory {
    Fullstack,
    Frontend,
    Backend,
}

pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub tags: &'static [&'static str],
    pub category: ProjectCategory,
    pub demo: &'static str,
    pub github: &'static str,
}

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "E-Commerce Platform",
        description: "Full-featured online shopping platform with payment integration, admin dashboard, and real-time inventory management.",
        icon: "🛒",
        tags: &["React", "Node.js", "MongoDB", "Stripe"],
        category: ProjectCategory::Fullstack,
        demo: "#",
        github: "#",
    },
    Project {
        id: 2,
        title: "Social Media Dashboard",
        description: "Analytics dashboard for managing multiple social media accounts with real-time metrics and scheduling features.",
        icon: "📊",
        tags: &["Next.js", "TypeScript", "PostgreSQL", "TailwindCSS"],
        category: ProjectCategory::Fullstack,
        demo: "#",
        github: "#",
    },
    Project {
        id: 3,
        title: "Task Management App",
        description: "Collaborative project management tool with drag-and-drop functionality, team chat, and file sharing.",
        icon: "✅",
        tags: &["React", "Firebase", "Material-UI"],
        category: ProjectCategory::Frontend,
        demo: "#",
        github: "#",
    },
    Project {
        id: 4,
        title: "Weather Forecast App",
        description: "Beautiful weather application with location-based forecasts, interactive maps, and weather alerts.",
        icon: "🌤️",
        tags: &["React", "OpenWeather API", "CSS"],
        category: ProjectCategory::Frontend,
        demo: "#",
        github: "#",
    },
    Project {
        id: 5,
        title: "REST API Backend",
        description: "Scalable RESTful API with authentication, rate limiting, caching, and comprehensive documentation.",
        icon: "🔌",
        tags: &["Node.js", "Express", "MongoDB", "Redis"],
        category: ProjectCategory::Backend,
        demo: "#",
        github: "#",
    },
    Project {
        id: 6,
        title: "Portfolio Website Builder",
        description: "SaaS platform for creating beautiful portfolio websites with drag-and-drop editor and hosting.",
        icon: "🎨",
        tags: &["Next.js", "Prisma", "AWS", "Stripe"],
        category: ProjectCategory::Fullstack,
        demo: "#",
        github: "#",
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 4] = [
        Self::All,
        Self::Only(ProjectCategory::Fullstack),
        Self::Only(ProjectCategory::Frontend),
        Self::Only(ProjectCategory::Backend),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(ProjectCategory::Fullstack) => "Full Stack",
            Self::Only(ProjectCategory::Frontend) => "Frontend",
            Self::Only(ProjectCategory::Backend) => "Backend",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }

    pub fn apply(self, projects: &[Project]) -> Vec<&Project> {
        projects.iter().filter(|project| self.matches(project)).collect()
    }
}

pub struct Position {
    pub company: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub highlights: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub icon: &'static str,
}

pub static EXPERIENCE: [Position; 3] = [
    Position {
        company: "Tech Innovators Inc.",
        role: "Senior Full Stack Developer",
        duration: "2022 - Present",
        location: "Remote",
        highlights: &[
            "Led development of microservices architecture serving 1M+ users",
            "Mentored junior developers and conducted code reviews",
            "Implemented CI/CD pipelines reducing deployment time by 60%",
            "Built real-time features using WebSockets and Redis",
        ],
        technologies: &["React", "Node.js", "AWS", "Docker", "PostgreSQL"],
        icon: "🚀",
    },
    Position {
        company: "Creative Solutions Ltd.",
        role: "Full Stack Developer",
        duration: "2020 - 2022",
        location: "Hybrid",
        highlights: &[
            "Developed and maintained e-commerce platforms with Stripe integration",
            "Optimized application performance resulting in 40% faster load times",
            "Collaborated with UX team to implement responsive designs",
            "Created RESTful APIs consumed by web and mobile applications",
        ],
        technologies: &["Next.js", "Express", "MongoDB", "TailwindCSS"],
        icon: "💼",
    },
    Position {
        company: "Digital Startup Co.",
        role: "Junior Web Developer",
        duration: "2019 - 2020",
        location: "On-site",
        highlights: &[
            "Built responsive web applications using React and Vue.js",
            "Integrated third-party APIs and payment gateways",
            "Participated in agile development process and daily standups",
            "Contributed to open-source projects and internal tooling",
        ],
        technologies: &["Vue.js", "Firebase", "JavaScript", "CSS"],
        icon: "⚡",
    },
];

pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub static CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        icon: "📧",
        label: "Email",
        value: "your.email@example.com",
        href: "mailto:your.email@example.com",
    },
    ContactChannel {
        icon: "📱",
        label: "Phone",
        value: "+1 (555) 123-4567",
        href: "tel:+15551234567",
    },
    ContactChannel {
        icon: "📍",
        label: "Location",
        value: "Your City, Country",
        href: "#",
    },
    ContactChannel {
        icon: "💼",
        label: "LinkedIn",
        value: "linkedin.com/in/yourprofile",
        href: "https://linkedin.com",
    },
];

pub static CONTACT_SOCIALS: [SocialLink; 4] = [
    SocialLink { name: "GitHub", icon: "💻", href: "#" },
    SocialLink { name: "LinkedIn", icon: "💼", href: "#" },
    SocialLink { name: "Twitter", icon: "🐦", href: "#" },
    SocialLink { name: "Instagram", icon: "📷", href: "#" },
];

pub const FOOTER: &str = "© 2024 Your Name. Built with ❤️ using Rust, Yew & WebAssembly";
