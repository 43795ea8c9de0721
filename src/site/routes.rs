//! Route table: `/`, a catch-all, and optional extra routes.
//!
//! Extra routes come from a [`RouteOverlay`] resolved once at startup. When
//! the overlay switch is off, or the routes file cannot be loaded, the
//! [`EmptyOverlay`] is used and every path renders the home page.
//!
//! ```toml
//! [[routes]]
//! path = "/storyboard"
//! title = "Storyboard"
//! body = "Component previews."
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtraRoute {
    pub path: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Extra(ExtraRoute),
}

pub trait RouteOverlay: Send + Sync {
    fn routes(&self) -> &[ExtraRoute];
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyOverlay;

impl RouteOverlay for EmptyOverlay {
    fn routes(&self) -> &[ExtraRoute] {
        &[]
    }
}

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("Route overlay enabled but no routes file configured")]
    NotConfigured,

    #[error("Failed to read routes file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse routes file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid route path '{0}': expected an absolute path other than '/' without query or fragment")]
    InvalidPath(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileOverlay {
    #[serde(default)]
    routes: Vec<ExtraRoute>,
}

impl FileOverlay {
    pub fn load(path: &Path) -> Result<Self, OverlayError> {
        let content = std::fs::read_to_string(path).map_err(|source| OverlayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut overlay: Self = toml::from_str(&content)?;
        // Stored in the same form `Router::resolve` compares against.
        for route in &mut overlay.routes {
            if !route.path.starts_with('/') || route.path.contains(['?', '#']) {
                return Err(OverlayError::InvalidPath(route.path.clone()));
            }
            let canonical = normalize(&route.path);
            if canonical == "/" {
                return Err(OverlayError::InvalidPath(route.path.clone()));
            }
            route.path = canonical.to_string();
        }
        Ok(overlay)
    }
}

impl RouteOverlay for FileOverlay {
    fn routes(&self) -> &[ExtraRoute] {
        &self.routes
    }
}

/// Resolve the overlay once. Any failure degrades to [`EmptyOverlay`].
pub fn load_overlay(enabled: bool, path: Option<&Path>) -> Arc<dyn RouteOverlay> {
    if !enabled {
        return Arc::new(EmptyOverlay);
    }
    let loaded = match path {
        Some(path) => FileOverlay::load(path),
        None => Err(OverlayError::NotConfigured),
    };
    match loaded {
        Ok(overlay) => {
            debug!(
                component = "routes",
                operation = "load_overlay",
                routes = overlay.routes.len(),
                "Route overlay loaded"
            );
            Arc::new(overlay)
        }
        Err(e) => {
            warn!(
                component = "routes",
                operation = "load_overlay",
                error = %e,
                "Route overlay unavailable; using empty overlay"
            );
            Arc::new(EmptyOverlay)
        }
    }
}

pub struct Router {
    overlay: Arc<dyn RouteOverlay>,
}

impl Router {
    pub fn new(overlay: Arc<dyn RouteOverlay>) -> Self {
        Self { overlay }
    }

    pub fn extra_routes(&self) -> &[ExtraRoute] {
        self.overlay.routes()
    }

    /// Exact extra-route matches win; every other path is the home page.
    /// Percent-encoded paths are decoded first.
    pub fn resolve(&self, path: &str) -> Route {
        let decoded = urlencoding::decode(path)
            .map(|p| p.into_owned())
            .unwrap_or_else(|_| path.to_string());
        let path = normalize(&decoded);
        self.overlay
            .routes()
            .iter()
            .find(|route| route.path == path)
            .map(|route| Route::Extra(route.clone()))
            .unwrap_or(Route::Home)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Arc::new(EmptyOverlay))
    }
}

/// Drop query/fragment and any trailing slash (except for `/`).
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
