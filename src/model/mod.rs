//! Content model: entity types and the immutable catalog.
pub mod catalog;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use types::{
    BeforeAfter, CaseStudy, CaseStudyImages, Category, ContactProfile, PortfolioItem,
    ProjectDetail, Profile,
};
