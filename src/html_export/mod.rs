//! Static HTML export of the portfolio page.
//!
//! [`HtmlExporter`] renders the same page model the terminal surface uses
//! into a single self-contained document per route.

pub mod renderer;
pub mod scripts;
pub mod styles;
pub mod template;

pub use renderer::{RenderContext, render_body, render_fallback};
pub use template::{ExportError, ExportOptions, ExportSummary, HtmlExporter, HtmlTemplate, html_escape};
