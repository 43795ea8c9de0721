//! Core HTML template generation.
//!
//! This module provides the `HtmlTemplate` struct and `HtmlExporter` for
//! generating the self-contained portfolio page. The template follows these
//! principles:
//!
//! - **No external template engine**: Uses Rust `format!` macros for simplicity
//! - **All CSS inlined**: The page works offline, images aside
//! - **Progressive enhancement**: Filter, tabs and modal are scripts over
//!   markup that is already correct for the initial state
//! - **Semantic HTML**: nav, header, section, footer landmarks

use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use chrono::Datelike;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, trace};

use super::{renderer, scripts, styles};
use crate::model::{Catalog, Category};
use crate::site::{Route, Router, Section};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unknown case study '{0}'")]
    UnknownTab(String),

    #[error("Extra route '{0}' cannot be written inside the output directory")]
    InvalidRoutePath(String),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Options for HTML export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Document title (defaults to "<name> | Portfolio")
    pub title: Option<String>,

    /// Emit inline scripts (filter, tabs, modal, form)
    pub include_scripts: bool,

    /// Include print-optimized styles
    pub print_styles: bool,

    /// Initially selected gallery filter
    pub category: Category,

    /// Initially selected case-study tab (first tab when unset)
    pub tab: Option<String>,

    /// Force a render fault in one section
    pub inject_fault: Option<Section>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: None,
            include_scripts: true,
            print_styles: true,
            category: Category::All,
            tab: None,
            inject_fault: None,
        }
    }
}

/// The HTML template structure.
///
/// Contains all the parts needed to generate a complete HTML document.
pub struct HtmlTemplate {
    /// Document title
    pub title: String,

    /// Meta description
    pub description: String,

    /// Inline screen CSS
    pub critical_css: String,

    /// Print-specific CSS
    pub print_css: String,

    /// Inline JavaScript
    pub inline_js: String,

    /// Body HTML
    pub content: String,
}

impl HtmlTemplate {
    /// Generate the complete HTML document.
    pub fn render(&self, options: &ExportOptions) -> String {
        let print_styles = if options.print_styles {
            format!(
                r#"
    <style media="print">
{}
    </style>"#,
                self.print_css
            )
        } else {
            String::new()
        };

        let scripts = if self.inline_js.is_empty() {
            String::new()
        } else {
            format!(
                r#"
    <script>
{}
    </script>"#,
                self.inline_js
            )
        };

        trace!(
            component = "template",
            operation = "render_inputs",
            include_scripts = options.include_scripts,
            print_styles = options.print_styles,
            content_bytes = self.content.len(),
            "Preparing HTML render"
        );

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="{description}">
    <meta name="generator" content="folio">
    <title>{title}</title>
    <style>
{critical_css}
    </style>{print_styles}
</head>
<body>
{content}{scripts}
</body>
</html>"#,
            description = html_escape(&self.description),
            title = html_escape(&self.title),
            critical_css = self.critical_css,
            print_styles = print_styles,
            content = self.content,
            scripts = scripts,
        )
    }
}

/// Files written by [`HtmlExporter::export_site`].
#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub out_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub bytes: usize,
    pub duration_ms: u128,
}

/// Main exporter for generating the portfolio page.
pub struct HtmlExporter {
    options: ExportOptions,
}

impl HtmlExporter {
    /// Create a new exporter with default options.
    pub fn new() -> Self {
        Self {
            options: ExportOptions::default(),
        }
    }

    /// Create a new exporter with custom options.
    pub fn with_options(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Get the current options.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Resolve `path` through the route table and render it.
    pub fn render_path(
        &self,
        catalog: &Catalog,
        router: &Router,
        path: &str,
    ) -> Result<String, ExportError> {
        let route = router.resolve(path);
        debug!(
            component = "template",
            operation = "resolve_route",
            path,
            extra = matches!(route, Route::Extra(_)),
            "Route resolved"
        );
        self.render_page(catalog, &route)
    }

    /// Render one complete document.
    pub fn render_page(&self, catalog: &Catalog, route: &Route) -> Result<String, ExportError> {
        let started = Instant::now();
        let tab = match &self.options.tab {
            Some(key) if catalog.case_study(key).is_none() => {
                return Err(ExportError::UnknownTab(key.clone()));
            }
            Some(key) => key.as_str(),
            None => catalog.default_case_study_key(),
        };

        let ctx = renderer::RenderContext {
            catalog,
            category: self.options.category,
            tab,
            year: chrono::Local::now().year(),
            interactive: self.options.include_scripts,
            inject_fault: self.options.inject_fault,
        };
        let content = renderer::render_body(&ctx, route);

        let styles_started = Instant::now();
        let styles = styles::generate_styles(&self.options);
        debug!(
            component = "styles",
            operation = "generate",
            critical_bytes = styles.critical_css.len(),
            print_bytes = styles.print_css.len(),
            duration_ms = styles_started.elapsed().as_millis(),
            "Generated styles"
        );

        let scripts_started = Instant::now();
        let scripts = scripts::generate_scripts(&self.options);
        debug!(
            component = "scripts",
            operation = "generate",
            inline_bytes = scripts.inline_js.len(),
            duration_ms = scripts_started.elapsed().as_millis(),
            "Generated scripts"
        );

        let title = match route {
            Route::Extra(extra) => format!("{} | {}", extra.title, catalog.profile.name),
            Route::Home => self
                .options
                .title
                .clone()
                .unwrap_or_else(|| format!("{} | Portfolio", catalog.profile.name)),
        };

        let template = HtmlTemplate {
            title,
            description: catalog.profile.tagline.clone(),
            critical_css: styles.critical_css,
            print_css: styles.print_css,
            inline_js: scripts.inline_js,
            content,
        };

        let html = template.render(&self.options);
        debug!(
            component = "template",
            operation = "render_page_complete",
            duration_ms = started.elapsed().as_millis(),
            bytes = html.len(),
            "Page rendered"
        );
        Ok(html)
    }

    /// Write `index.html`, an identical `404.html`, and one
    /// `<path>/index.html` per extra route.
    pub fn export_site(
        &self,
        catalog: &Catalog,
        router: &Router,
        out_dir: &Path,
    ) -> Result<ExportSummary, ExportError> {
        let started = Instant::now();
        info!(
            component = "template",
            operation = "export_site",
            out_dir = %out_dir.display(),
            items = catalog.items.len(),
            extra_routes = router.extra_routes().len(),
            include_scripts = self.options.include_scripts,
            "Starting HTML export"
        );

        let home = self.render_page(catalog, &Route::Home)?;
        let mut pages = vec![
            (out_dir.join("index.html"), home.clone()),
            // Static hosts serve 404.html for unknown paths: the catch-all.
            (out_dir.join("404.html"), home),
        ];
        for extra in router.extra_routes() {
            let dir = route_dir(out_dir, &extra.path)?;
            let html = self.render_page(catalog, &Route::Extra(extra.clone()))?;
            pages.push((dir.join("index.html"), html));
        }

        let mut files = Vec::with_capacity(pages.len());
        let mut bytes = 0usize;
        for (path, html) in pages {
            write_file(&path, &html)?;
            bytes += html.len();
            files.push(path);
        }

        let summary = ExportSummary {
            out_dir: out_dir.to_path_buf(),
            files,
            bytes,
            duration_ms: started.elapsed().as_millis(),
        };
        info!(
            component = "template",
            operation = "export_site_complete",
            duration_ms = summary.duration_ms,
            files = summary.files.len(),
            bytes = summary.bytes,
            "HTML export complete"
        );
        Ok(summary)
    }
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Map an extra-route path onto a directory under `out_dir`.
fn route_dir(out_dir: &Path, route_path: &str) -> Result<PathBuf, ExportError> {
    let relative = Path::new(route_path.trim_start_matches('/'));
    let safe = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if !safe || relative.as_os_str().is_empty() {
        return Err(ExportError::InvalidRoutePath(route_path.to_string()));
    }
    Ok(out_dir.join(relative))
}

fn write_file(path: &Path, content: &str) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, content).map_err(io_err)
}

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
