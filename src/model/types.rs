//! Normalized content structs.

use serde::{Deserialize, Serialize};

/// Gallery filter value.
///
/// `All` is the filter-only wildcard; catalog items always carry one of the
/// concrete categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Logo,
    Video,
    Image,
    Digital,
}

impl Category {
    /// Filter order as shown in the gallery pill bar.
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Logo,
        Category::Video,
        Category::Image,
        Category::Digital,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Logo => "logo",
            Category::Video => "video",
            Category::Image => "image",
            Category::Digital => "digital",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All Projects",
            Category::Logo => "Logo Design",
            Category::Video => "Video Editing",
            Category::Image => "Image Editing",
            Category::Digital => "Digital Design",
        }
    }

    /// Parse a filter id (`all`, `logo`, ...). Case-insensitive.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(id.trim()))
    }

    /// Whether an item of category `item` is displayed under this filter.
    pub fn admits(self, item: Category) -> bool {
        self == Category::All || self == item
    }

    /// Step through the filter list, clamped at both ends.
    pub fn step(self, delta: i32) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0) as i32;
        let next = (idx + delta).clamp(0, Self::ALL.len() as i32 - 1);
        Self::ALL[next as usize]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CaseStudyImages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(default)]
    pub showcase: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseStudy {
    /// Tab key (`redkoar`, `be-masculine`, ...).
    pub key: String,
    pub title: String,
    pub client: String,
    pub description: String,
    pub challenge: String,
    pub solution: String,
    pub results: String,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub images: CaseStudyImages,
}

/// A single before/after comparison pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BeforeAfter {
    pub before: String,
    pub after: String,
}

/// Everything the detail overlay shows for one project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectDetail {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    pub tools: Vec<String>,
    /// Never empty.
    pub images: Vec<String>,
    #[serde(default)]
    pub before_after: Vec<BeforeAfter>,
}

impl From<&PortfolioItem> for ProjectDetail {
    fn from(item: &PortfolioItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            category: item.category.label().to_string(),
            description: item.description.clone(),
            client: item.client.clone(),
            year: None,
            tools: item.tools.clone(),
            images: vec![item.image.clone()],
            before_after: Vec::new(),
        }
    }
}

impl From<&CaseStudy> for ProjectDetail {
    fn from(study: &CaseStudy) -> Self {
        let mut images = study.images.showcase.clone();
        if images.is_empty() {
            images.extend(study.images.after.iter().cloned());
            images.extend(study.images.before.iter().cloned());
        }
        let before_after = match (&study.images.before, &study.images.after) {
            (Some(before), Some(after)) => vec![BeforeAfter {
                before: before.clone(),
                after: after.clone(),
            }],
            _ => Vec::new(),
        };
        Self {
            id: study.key.clone(),
            title: study.title.clone(),
            category: "Case Study".to_string(),
            description: study.description.clone(),
            client: Some(study.client.clone()),
            year: None,
            tools: study.tools.clone(),
            images,
            before_after,
        }
    }
}

/// Owner copy for the hero and about sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub portrait: String,
    pub about_image: String,
    pub quote: String,
}

/// Contact defaults shown beside the form and in the footer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactProfile {
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Host/path without scheme, e.g. `linkedin.com/in/someone`.
    pub linkedin: String,
    pub instagram: String,
}

impl ContactProfile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link with whitespace stripped.
    pub fn tel(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }

    pub fn linkedin_url(&self) -> String {
        format!("https://{}", self.linkedin)
    }

    pub fn instagram_url(&self) -> String {
        format!("https://{}", self.instagram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item(category: Category) -> PortfolioItem {
        PortfolioItem {
            id: "1".into(),
            title: "Sample".into(),
            category,
            image: "https://example.com/a.png".into(),
            description: "desc".into(),
            tools: vec!["Photoshop".into()],
            client: None,
        }
    }

    #[test]
    fn category_ids_round_trip_through_from_id() {
        for category in Category::ALL {
            assert_eq!(Category::from_id(category.id()), Some(category));
        }
        assert_eq!(Category::from_id(" LOGO "), Some(Category::Logo));
        assert_eq!(Category::from_id("print"), None);
    }

    #[test]
    fn all_admits_every_category() {
        for category in Category::ALL {
            assert!(Category::All.admits(category));
        }
        assert!(Category::Logo.admits(Category::Logo));
        assert!(!Category::Logo.admits(Category::Video));
    }

    #[test]
    fn step_clamps_at_both_ends() {
        assert_eq!(Category::All.step(-1), Category::All);
        assert_eq!(Category::All.step(1), Category::Logo);
        assert_eq!(Category::Digital.step(1), Category::Digital);
        assert_eq!(Category::Image.step(-2), Category::Logo);
    }

    #[test]
    fn category_deserializes_lowercase() {
        let c: Category = serde_json::from_str("\"video\"").unwrap();
        assert_eq!(c, Category::Video);
    }

    #[test]
    fn detail_from_item_has_single_image_and_label() {
        let detail = ProjectDetail::from(&sample_item(Category::Digital));
        assert_eq!(detail.images, vec!["https://example.com/a.png".to_string()]);
        assert_eq!(detail.category, "Digital Design");
        assert!(detail.before_after.is_empty());
    }

    #[test]
    fn detail_from_case_study_pairs_before_and_after() {
        let study = CaseStudy {
            key: "k".into(),
            title: "T".into(),
            client: "C".into(),
            description: "D".into(),
            challenge: String::new(),
            solution: String::new(),
            results: String::new(),
            tools: vec![],
            images: CaseStudyImages {
                before: Some("https://example.com/b.png".into()),
                after: Some("https://example.com/a.png".into()),
                showcase: vec![],
            },
        };
        let detail = ProjectDetail::from(&study);
        assert_eq!(detail.before_after.len(), 1);
        assert_eq!(detail.before_after[0].before, "https://example.com/b.png");
        // Empty showcase falls back to the after/before images.
        assert_eq!(detail.images.len(), 2);
        assert_eq!(detail.images[0], "https://example.com/a.png");
    }

    #[test]
    fn tel_link_strips_whitespace() {
        let contact = ContactProfile {
            email: "a@b.c".into(),
            phone: "+92 328 2360529".into(),
            location: "x".into(),
            linkedin: "linkedin.com/in/x".into(),
            instagram: "instagram.com/x".into(),
        };
        assert_eq!(contact.tel(), "tel:+923282360529");
        assert_eq!(contact.mailto(), "mailto:a@b.c");
        assert_eq!(contact.linkedin_url(), "https://linkedin.com/in/x");
    }
}
