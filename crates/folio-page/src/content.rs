//! Element ids and list sizes of the static page content.

/// Element ids the orchestration refers to.
pub mod ids {
    pub const HERO: &str = "hero";

    pub const ABOUT: &str = "about";
    pub const ABOUT_HEADING: &str = "about-heading";
    pub const ABOUT_TEXT: &str = "about-text";
    pub const ABOUT_STATS: &str = "about-stats";

    pub const PROJECTS: &str = "projects";
    pub const PROJECTS_HEADING: &str = "projects-heading";
    pub const PROJECT_CARDS: &str = "project-cards";

    pub const SKILLS: &str = "skills";
    pub const SKILLS_HEADING: &str = "skills-heading";
    pub const SKILL_CATEGORIES: &str = "skill-categories";

    pub const CONTACT: &str = "contact";
    pub const CONTACT_HEADING: &str = "contact-heading";
    pub const CONTACT_CONTENT: &str = "contact-content";
    pub const CONTACT_LINKS: &str = "contact-links";

    pub const NAV_MENU: &str = "nav-menu";
}

/// How many items each list on the page has.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContent {
    pub stats: usize,
    pub projects: usize,
    /// Pill count per skill category.
    pub skill_pills: Vec<usize>,
    pub social_links: usize,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            stats: 3,
            projects: 2,
            skill_pills: vec![11, 6, 5],
            social_links: 3,
        }
    }
}

impl PageContent {
    pub fn skill_categories(&self) -> usize {
        self.skill_pills.len()
    }
}
