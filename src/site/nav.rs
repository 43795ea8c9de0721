//! Page sections and the nav indicator.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Hero,
    About,
    Portfolio,
    CaseStudies,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Portfolio,
        Section::CaseStudies,
        Section::Contact,
    ];

    /// Anchor id in the exported page.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Portfolio => "portfolio",
            Section::CaseStudies => "case-studies",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Portfolio => "Portfolio",
            Section::CaseStudies => "Case Studies",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id.trim())
    }

    pub fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Wrapping step, used by Tab / Shift-Tab.
    pub fn cycle(self, delta: i32) -> Self {
        let len = Self::ALL.len() as i32;
        Self::ALL[(self.position() as i32 + delta).rem_euclid(len) as usize]
    }
}

/// Nav indicator. Only explicit clicks move it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    active: Section,
}

impl NavState {
    pub fn active(&self) -> Section {
        self.active
    }

    /// Returns the section to scroll to.
    pub fn click(&mut self, section: Section) -> Section {
        self.active = section;
        section
    }

    /// "Hire Me".
    pub fn hire_me(&mut self) -> Section {
        self.click(Section::Contact)
    }

    /// "View My Work".
    pub fn view_work(&mut self) -> Section {
        self.click(Section::Portfolio)
    }
}
