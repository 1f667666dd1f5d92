//! Authored page content. Static, never mutated.

/// Colour token shared by skill groups, timeline bullets and project cards.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Accent {
    Cyan,
    Emerald,
    Purple,
    Blue,
    Pink,
    Amber,
}

impl Accent {
    /// CSS modifier class, e.g. `accent-cyan`.
    pub fn class(&self) -> &'static str {
        match self {
            Accent::Cyan => "accent-cyan",
            Accent::Emerald => "accent-emerald",
            Accent::Purple => "accent-purple",
            Accent::Blue => "accent-blue",
            Accent::Pink => "accent-pink",
            Accent::Amber => "accent-amber",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Profile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub headline: &'static str,
    pub bio: &'static str,
    pub resume_path: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Maaz Ali Rao",
    short_name: "Maaz",
    headline: "Full Stack Web & Mobile App Developer",
    bio: "Passionate developer crafting exceptional digital experiences through modern web and \
          mobile technologies. Specialized in building scalable applications with React, \
          Node.js, and React Native.",
    resume_path: "/resume.pdf",
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: Accent,
}

pub const STATS: &[Stat] = &[
    Stat { value: "3+", label: "Years Experience", accent: Accent::Cyan },
    Stat { value: "50+", label: "Projects", accent: Accent::Emerald },
    Stat { value: "20+", label: "APIs Built", accent: Accent::Purple },
    Stat { value: "99%", label: "Client Satisfaction", accent: Accent::Blue },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, `0..=100`.
    pub level: u8,
}

impl Skill {
    /// Bar width once revealed.
    pub fn width(&self) -> String {
        format!("{}%", self.level.min(100))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SkillGroup {
    pub title: &'static str,
    pub accent: Accent,
    pub skills: &'static [Skill],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend Development",
        accent: Accent::Cyan,
        skills: &[
            Skill { name: "React.js / Next.js", level: 95 },
            Skill { name: "TypeScript", level: 90 },
            Skill { name: "React Native", level: 85 },
        ],
    },
    SkillGroup {
        title: "Backend Development",
        accent: Accent::Emerald,
        skills: &[
            Skill { name: "Node.js / Express", level: 90 },
            Skill { name: "MongoDB", level: 85 },
            Skill { name: "GraphQL", level: 80 },
        ],
    },
];

/// One entry of the experience/education timeline.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub period: &'static str,
    pub place: &'static str,
    pub bullets: &'static [&'static str],
}

pub const EXPERIENCE: &[TimelineEntry] = &[TimelineEntry {
    title: "Full Stack Developer",
    period: "2021 - Present",
    place: "Freelance",
    bullets: &[
        "Built scalable web applications with React.js and Node.js",
        "Developed cross-platform mobile apps using React Native",
        "Implemented real-time features using WebSocket",
    ],
}];

pub const EDUCATION: &[TimelineEntry] = &[
    TimelineEntry {
        title: "BS Computer Science",
        period: "2021 - 2025",
        place: "COMSATS University Islamabad",
        bullets: &[],
    },
    TimelineEntry {
        title: "Pre-Engineering",
        period: "2021",
        place: "KIPS College Multan",
        bullets: &[],
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContactKind {
    Email,
    Phone,
    SourceControl,
    ProfessionalNetwork,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub accent: Accent,
}

impl ContactLink {
    /// Web links open outside the app; mail/phone use their URL handlers.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub const CONTACTS: &[ContactLink] = &[
    ContactLink {
        kind: ContactKind::Email,
        label: "Email",
        value: "maazaltaf1027@gmail.com",
        href: "mailto:maazaltaf1027@gmail.com",
        accent: Accent::Cyan,
    },
    ContactLink {
        kind: ContactKind::Phone,
        label: "Phone",
        value: "+92 322 3374424",
        href: "tel:+923223374424",
        accent: Accent::Emerald,
    },
    ContactLink {
        kind: ContactKind::SourceControl,
        label: "GitHub",
        value: "View Projects",
        href: "https://github.com/maazalirao",
        accent: Accent::Purple,
    },
    ContactLink {
        kind: ContactKind::ProfessionalNetwork,
        label: "LinkedIn",
        value: "Connect with me",
        href: "https://linkedin.com",
        accent: Accent::Blue,
    },
];
