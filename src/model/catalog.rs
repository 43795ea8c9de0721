//! The portfolio catalog.
//!
//! A [`Catalog`] is built once at startup (either the built-in content or a
//! TOML/JSON file) and then shared read-only as `Arc<Catalog>`. Nothing in
//! the crate mutates it after [`Catalog::validate`] has passed.
//!
//! # Example catalog file
//!
//! ```toml
//! [[items]]
//! id = "1"
//! title = "Redkoar Brand Identity"
//! category = "logo"
//! image = "https://example.com/redkoar.png"
//! description = "Complete brand identity."
//! tools = ["Illustrator", "Photoshop"]
//! client = "Redkoar"
//!
//! [[case_studies]]
//! key = "redkoar"
//! title = "Redkoar"
//! client = "E-commerce Platform"
//! description = "..."
//! challenge = "..."
//! solution = "..."
//! results = "..."
//! tools = ["Photoshop"]
//! images = { showcase = ["https://example.com/1.png"] }
//! ```
//!
//! `profile` and `contact` tables are optional and fall back to the built-in
//! owner copy.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::types::{CaseStudy, CaseStudyImages, Category, ContactProfile, PortfolioItem, Profile};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse catalog TOML: {0}")]
    ParseToml(#[from] toml::de::Error),

    #[error("Failed to parse catalog JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Portfolio item #{index} has an empty id")]
    EmptyId { index: usize },

    #[error("Duplicate portfolio item id '{0}'")]
    DuplicateId(String),

    #[error("Portfolio item '{0}' uses the filter-only category 'all'")]
    WildcardCategory(String),

    #[error("Catalog defines no case studies")]
    NoCaseStudies,

    #[error("Case study #{index} has an empty key")]
    EmptyCaseStudyKey { index: usize },

    #[error("Duplicate case study key '{0}'")]
    DuplicateCaseStudy(String),

    #[error("Invalid image URL for {owner}: '{value}' ({reason})")]
    InvalidUrl {
        owner: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    #[serde(default = "builtin_profile")]
    pub profile: Profile,
    #[serde(default = "builtin_contact")]
    pub contact: ContactProfile,
    #[serde(default)]
    pub items: Vec<PortfolioItem>,
    #[serde(default)]
    pub case_studies: Vec<CaseStudy>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The content shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            profile: builtin_profile(),
            contact: builtin_contact(),
            items: builtin_items(),
            case_studies: builtin_case_studies(),
        }
    }

    /// Load and validate a catalog file. `.json` files are parsed as JSON,
    /// everything else as TOML.
    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let catalog: Self = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        catalog.validate()?;
        debug!(
            component = "catalog",
            operation = "load",
            path = %path.display(),
            items = catalog.items.len(),
            case_studies = catalog.case_studies.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for (index, item) in self.items.iter().enumerate() {
            if item.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
            if item.category == Category::All {
                return Err(CatalogError::WildcardCategory(item.id.clone()));
            }
            check_url(&format!("item '{}'", item.id), &item.image)?;
        }

        if self.case_studies.is_empty() {
            return Err(CatalogError::NoCaseStudies);
        }
        let mut keys = HashSet::new();
        for (index, study) in self.case_studies.iter().enumerate() {
            if study.key.trim().is_empty() {
                return Err(CatalogError::EmptyCaseStudyKey { index });
            }
            if !keys.insert(study.key.as_str()) {
                return Err(CatalogError::DuplicateCaseStudy(study.key.clone()));
            }
            let owner = format!("case study '{}'", study.key);
            let CaseStudyImages {
                before,
                after,
                showcase,
            } = &study.images;
            for url in before.iter().chain(after.iter()).chain(showcase.iter()) {
                check_url(&owner, url)?;
            }
        }

        check_url("profile portrait", &self.profile.portrait)?;
        check_url("profile about image", &self.profile.about_image)?;
        Ok(())
    }

    pub fn item(&self, id: &str) -> Option<&PortfolioItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Stable projection of the catalog under a filter value.
    pub fn filter(&self, category: Category) -> Vec<&PortfolioItem> {
        self.items
            .iter()
            .filter(|item| category.admits(item.category))
            .collect()
    }

    pub fn case_study(&self, key: &str) -> Option<&CaseStudy> {
        self.case_studies.iter().find(|study| study.key == key)
    }

    pub fn case_study_keys(&self) -> impl Iterator<Item = &str> {
        self.case_studies.iter().map(|study| study.key.as_str())
    }

    /// First tab key; validation guarantees one exists.
    pub fn default_case_study_key(&self) -> &str {
        self.case_studies
            .first()
            .map(|study| study.key.as_str())
            .unwrap_or_default()
    }
}

fn check_url(owner: &str, value: &str) -> Result<(), CatalogError> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|e| CatalogError::InvalidUrl {
            owner: owner.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Built-in content
// ---------------------------------------------------------------------------

const CDN: &str = "https://res.cloudinary.com/dv5kwhrj9/image/upload";

fn cdn(path: &str) -> String {
    format!("{CDN}/{path}")
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?w=800&q=80")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn builtin_profile() -> Profile {
    Profile {
        name: "Shahab Uddin".to_string(),
        headline: "Graphic Designer | Creative Visual Storyteller | Branding & Digital Design | Final-Year IT Student".to_string(),
        tagline: "I specialize in Graphic Design, Logo Design, Branding & Identity, Video Editing, Image Editing, Thumbnails, and Digital Design.".to_string(),
        about: strings(&[
            "I'm Shahab Uddin, a passionate graphic designer with 3 years of experience in creating impactful visuals. My journey began at a local design company, Design Dreamscape, where I worked for 2 years, building a strong foundation in branding, logo design, and digital visuals.",
            "Over time, I have expanded into video editing, thumbnails, and creative storytelling through design. I love bringing ideas to life, whether it's a brand identity, a digital campaign, or a visual story that connects with people.",
        ]),
        skills: strings(&[
            "Canva",
            "Photoshop",
            "Illustrator",
            "CapCut",
            "After Effects",
            "Premiere Pro",
        ]),
        portrait: cdn("v1756359843/Image_1_xgpnth.png"),
        about_image: cdn("v1756359835/Graphic_Designer_eyy6n4.png"),
        quote: "Design that speaks, visuals that connect.".to_string(),
    }
}

fn builtin_contact() -> ContactProfile {
    ContactProfile {
        email: "shahabshah697@gmail.com".to_string(),
        phone: "+92 328 2360529".to_string(),
        location: "Karachi, Pakistan (Remote Available)".to_string(),
        linkedin: "linkedin.com/in/shahab-uddin-4967b5380".to_string(),
        instagram: "instagram.com/shahab_baloch97".to_string(),
    }
}

fn item(
    id: &str,
    title: &str,
    category: Category,
    image: String,
    description: &str,
    tools: &[&str],
    client: Option<&str>,
) -> PortfolioItem {
    PortfolioItem {
        id: id.to_string(),
        title: title.to_string(),
        category,
        image,
        description: description.to_string(),
        tools: strings(tools),
        client: client.map(str::to_string),
    }
}

fn builtin_items() -> Vec<PortfolioItem> {
    use Category::{Digital, Image, Logo, Video};

    const RETOUCH: &[&str] = &["Photoshop", "Lightroom"];
    const BRAND: &[&str] = &["Illustrator", "Photoshop"];
    const CUTS: &[&str] = &["CapCut", "Premiere Pro"];

    vec![
        item(
            "14",
            "Black White Yellow Simple Initial Name Logo",
            Logo,
            cdn("v1756359810/Black_White_Yellow_Simple_Initial_Name_Logo_wk8ek6.png"),
            "Bold monogram logo design with yellow accent.",
            BRAND,
            Some("Shay Haq"),
        ),
        item(
            "15",
            "Image Editing - Primary (img 3)",
            Image,
            cdn("v1756359850/img_3_fg425s.png"),
            "Image editing showcase.",
            RETOUCH,
            None,
        ),
        item(
            "1",
            "Redkoar Brand Identity",
            Logo,
            cdn("v1756360122/Redkoar_logo_u3w0fi.png"),
            "Complete brand identity design for Redkoar, an e-commerce platform operating in Pakistan, UAE, and Europe.",
            &["Illustrator", "Photoshop", "Canva"],
            Some("Redkoar"),
        ),
        item(
            "2",
            "Be Masculine Channel Branding",
            Video,
            cdn("v1756359854/Untitled_design_5_aekv1g.png"),
            "YouTube channel branding including logo, thumbnails, and video editing for a motivation and discipline focused channel.",
            &["Canva", "CapCut", "Illustrator"],
            Some("Be Masculine"),
        ),
        item(
            "3",
            "Product Photography Retouching",
            Image,
            unsplash("photo-1563986768609-322da13575f3"),
            "Professional product photo retouching for e-commerce listings with color correction and background removal.",
            RETOUCH,
            None,
        ),
        item(
            "4",
            "Corporate Event Poster",
            Digital,
            cdn("v1756360064/Illustration_cvizrl.webp"),
            "Digital poster design for corporate tech conference with modern aesthetic and information hierarchy.",
            BRAND,
            Some("TechSummit 2023"),
        ),
        item(
            "5",
            "Fashion Brand Logo",
            Logo,
            cdn("v1756360064/Logo_y6qvhr.jpg"),
            "Minimalist logo design for an upcoming fashion brand focusing on sustainable clothing.",
            BRAND,
            Some("EcoThreads"),
        ),
        item(
            "6",
            "Promotional Video Editing",
            Video,
            unsplash("photo-1574717024653-61fd2cf4d44d"),
            "Short promotional video editing for social media campaign with dynamic transitions and effects.",
            &["CapCut", "After Effects", "Premiere Pro"],
            None,
        ),
        item(
            "7",
            "Portrait Retouching",
            Image,
            unsplash("photo-1554151228-14d9def656e4"),
            "Professional portrait retouching with natural skin texture preservation and color enhancement.",
            RETOUCH,
            None,
        ),
        item(
            "8",
            "Social Media Campaign",
            Digital,
            cdn("v1756360064/Social_media_aybmqt.webp"),
            "Cohesive social media campaign design with multiple formats for Instagram, Facebook, and Twitter.",
            &["Photoshop", "Illustrator", "Canva"],
            Some("Wellness Collective"),
        ),
        item(
            "9",
            "Restaurant Menu Design",
            Digital,
            unsplash("photo-1590341328520-63256eb32bc3"),
            "Modern restaurant menu design with custom food photography and elegant typography.",
            &["InDesign", "Photoshop"],
            Some("Fusion Kitchen"),
        ),
        item(
            "10",
            "Spotbook Logo Design",
            Logo,
            cdn("v1756360789/spotbook_1_oip5et.webp"),
            "Modern logo design for Spotbook, a celebration and event booking platform with elegant branding.",
            BRAND,
            Some("Spotbook"),
        ),
        item(
            "11",
            "Spotbook Brand Variations",
            Logo,
            cdn("v1756360789/spotbook_2_blzfqc.jpg"),
            "Alternative logo variations and brand elements for Spotbook's comprehensive brand identity system.",
            BRAND,
            Some("Spotbook"),
        ),
        item(
            "12",
            "Spotbook Premium Logo",
            Logo,
            cdn("v1756360789/spotbook_3_psj0gm.jpg"),
            "Premium metallic logo design for Spotbook's luxury event services and high-end branding materials.",
            BRAND,
            Some("Spotbook"),
        ),
        item(
            "13",
            "Spotbook Corporate Identity",
            Logo,
            cdn("v1756360790/spotbook4_fswojl.jpg"),
            "Corporate identity design for Spotbook featuring modern gradient aesthetics and professional branding.",
            BRAND,
            Some("Spotbook"),
        ),
        item(
            "16",
            "Image 1",
            Image,
            cdn("v1756359843/Image_1_xgpnth.png"),
            "Image editing sample.",
            RETOUCH,
            None,
        ),
        item(
            "17",
            "Image 2",
            Image,
            cdn("v1756359843/Image_1_xgpnth.png"),
            "Image editing sample.",
            RETOUCH,
            None,
        ),
        item(
            "18",
            "Image 4",
            Image,
            cdn("v1756359857/img_4_bwwojj.png"),
            "Image editing sample.",
            RETOUCH,
            None,
        ),
        item(
            "19",
            "Image 5",
            Image,
            cdn("v1756359851/img_5_b20n3g.png"),
            "Image editing sample.",
            RETOUCH,
            None,
        ),
        item(
            "20",
            "Image 6",
            Image,
            cdn("v1756359853/img_6_bnrntq.png"),
            "Image editing sample.",
            RETOUCH,
            None,
        ),
        item(
            "21",
            "Image 7",
            Image,
            cdn("v1756359853/img_7_uykgow.png"),
            "Image editing sample.",
            RETOUCH,
            None,
        ),
        item(
            "22",
            "Image 8",
            Image,
            cdn("v1756359853/img_8_u3cgop.png"),
            "Image editing sample.",
            RETOUCH,
            None,
        ),
        item(
            "23",
            "Image 9",
            Image,
            cdn("v1756359856/img_9_bqkyks.png"),
            "Image editing sample.",
            RETOUCH,
            None,
        ),
        item(
            "24",
            "Creative Color Brushstroke Lettering Logo",
            Logo,
            cdn("v1756359820/Creative_Color_Brushstroke_Lettering_Logo_ieg1wm.png"),
            "Colorful brushstroke lettering logo.",
            BRAND,
            None,
        ),
        item(
            "25",
            "Video Editing Project 1",
            Video,
            cdn("v1756360122/video_1_ge3dqt.png"),
            "Video editing showcase.",
            CUTS,
            None,
        ),
        item(
            "26",
            "Video Editing Project 2",
            Video,
            cdn("v1756360123/video_2_gsdltn.png"),
            "Video editing showcase.",
            CUTS,
            None,
        ),
        item(
            "27",
            "Video Editing Project 3",
            Video,
            cdn("v1756360123/video_3_tlj4vu.png"),
            "Video editing showcase.",
            CUTS,
            None,
        ),
    ]
}

fn builtin_case_studies() -> Vec<CaseStudy> {
    vec![
        CaseStudy {
            key: "redkoar".to_string(),
            title: "Redkoar".to_string(),
            client: "E-commerce Platform".to_string(),
            description: "Developed full branding and identity for Redkoar, an online e-commerce platform operating in Pakistan, UAE, and Europe. Created brand name, logo, product pictures, and more.".to_string(),
            challenge: "Redkoar needed a complete brand identity that would work across multiple markets while maintaining a consistent and recognizable presence. The challenge was to create a versatile brand system that could adapt to different cultural contexts while remaining cohesive.".to_string(),
            solution: "I developed a comprehensive branding package including logo design, color palette, typography system, and product photography guidelines. The brand identity was designed to be flexible across digital and physical touchpoints.".to_string(),
            results: "The new branding helped Redkoar establish a strong market presence across three regions, with a 40% increase in brand recognition metrics and improved customer engagement across digital platforms.".to_string(),
            tools: strings(&["Photoshop", "Illustrator", "Canva"]),
            images: CaseStudyImages {
                before: Some(unsplash("photo-1472851294608-062f824d29cc")),
                after: Some(cdn("v1756360120/Redkoar_1_usa6lw.png")),
                showcase: vec![
                    cdn("v1756360121/Redkoar_2_w99rq0.png"),
                    unsplash("photo-1516876437184-593fda40c7ce"),
                    unsplash("photo-1523275335684-37898b6baf30"),
                ],
            },
        },
        CaseStudy {
            key: "be-masculine".to_string(),
            title: "Be Masculine".to_string(),
            client: "YouTube Channel".to_string(),
            description: "Built the full brand for Be Masculine, a YouTube channel focused on motivation and discipline. Designed channel name, logo, edited videos, created thumbnails, and branding visuals.".to_string(),
            challenge: "The channel needed a strong visual identity to stand out in the crowded motivation content space. The visuals needed to convey strength and discipline while remaining approachable and inspiring.".to_string(),
            solution: "I created a bold brand identity with a distinctive color palette, custom thumbnail templates, and video editing style guide. The visual system was designed to be easily recognizable and consistent across all content.".to_string(),
            results: "The channel saw a 65% increase in click-through rate on thumbnails and a 30% improvement in viewer retention. The consistent branding helped establish a loyal audience base.".to_string(),
            tools: strings(&["Canva", "CapCut", "Illustrator"]),
            images: CaseStudyImages {
                before: Some(unsplash("photo-1611162616475-46b635cb6868")),
                after: Some(cdn("v1756360087/masculine_2_u3eaof.png")),
                showcase: vec![
                    cdn("v1756359854/Untitled_design_5_aekv1g.png"),
                    cdn("v1756360086/masculine_1_seawrk.png"),
                    cdn("v1756360087/masculine_2_u3eaof.png"),
                ],
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_catalog_validates() {
        let catalog = Catalog::builtin();
        catalog.validate().expect("built-in catalog must be valid");
        assert_eq!(catalog.items.len(), 27);
        assert_eq!(catalog.case_studies.len(), 2);
        assert_eq!(catalog.default_case_study_key(), "redkoar");
    }

    #[test]
    fn filter_all_returns_catalog_unchanged() {
        let catalog = Catalog::builtin();
        let all = catalog.filter(Category::All);
        assert_eq!(all.len(), catalog.items.len());
        for (shown, original) in all.iter().zip(catalog.items.iter()) {
            assert_eq!(*shown, original);
        }
    }

    #[test]
    fn filter_preserves_catalog_order() {
        let catalog = Catalog::builtin();
        let logos: Vec<&str> = catalog
            .filter(Category::Logo)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(logos, vec!["14", "1", "5", "10", "11", "12", "13", "24"]);
    }

    #[test]
    fn duplicate_item_ids_are_rejected() {
        let mut catalog = Catalog::builtin();
        let dup = catalog.items[0].clone();
        catalog.items.push(dup);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateId(id)) if id == "14"
        ));
    }

    #[test]
    fn wildcard_category_on_item_is_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.items[3].category = Category::All;
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::WildcardCategory(_))
        ));
    }

    #[test]
    fn relative_image_reference_is_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.items[0].image = "images/logo.png".to_string();
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("item '14'"));
    }

    #[test]
    fn blank_case_study_key_is_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.case_studies[1].key = "  ".to_string();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::EmptyCaseStudyKey { index: 1 })
        ));
    }

    #[test]
    fn empty_case_study_set_is_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.case_studies.clear();
        assert!(matches!(catalog.validate(), Err(CatalogError::NoCaseStudies)));
    }

    #[test]
    fn load_from_toml_fills_profile_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[[items]]
id = "a"
title = "Alpha"
category = "video"
image = "https://example.com/a.png"
description = "first"
tools = ["CapCut"]

[[case_studies]]
key = "only"
title = "Only"
client = "Client"
description = "d"
challenge = "c"
solution = "s"
results = "r"
images = {{ showcase = [] }}
"#
        )
        .unwrap();

        let catalog = Catalog::load_from(file.path()).unwrap();
        assert_eq!(catalog.items.len(), 1);
        assert_eq!(catalog.items[0].category, Category::Video);
        assert_eq!(catalog.profile.name, "Shahab Uddin");
        assert_eq!(catalog.default_case_study_key(), "only");
    }

    #[test]
    fn load_from_json_round_trips_builtin() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let json = serde_json::to_string(&Catalog::builtin()).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        let catalog = Catalog::load_from(file.path()).unwrap();
        assert_eq!(catalog, Catalog::builtin());
    }

    #[test]
    fn load_from_missing_file_is_read_error() {
        let err = Catalog::load_from(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Read(_)));
    }
}
