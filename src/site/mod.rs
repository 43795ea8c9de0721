//! Surface-independent page state.
//!
//! Everything here is plain data plus transitions; the terminal page in
//! [`crate::ui`] and the HTML export in [`crate::html_export`] both drive it.

pub mod boundary;
pub mod case_studies;
pub mod contact;
pub mod gallery;
pub mod nav;
pub mod routes;
pub mod viewer;

pub use boundary::{ErrorBoundary, FALLBACK_BODY, FALLBACK_TITLE, Fallback, RenderFault};
pub use case_studies::{CaseStudyTabs, UnknownTab};
pub use contact::{
    ContactForm, ContactMessage, FormError, FormField, SUBMIT_DELAY, SUCCESS_MESSAGE,
    SimulatedSubmitter, SubmitStatus, SubmitTicket, Submitter,
};
pub use gallery::{GalleryState, Selection, filter_items};
pub use nav::{NavState, Section};
pub use routes::{EmptyOverlay, ExtraRoute, FileOverlay, Route, RouteOverlay, Router, load_overlay};
pub use viewer::{ImageViewer, ProjectStep};
