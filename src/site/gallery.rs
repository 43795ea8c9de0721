//! Filterable gallery state.

use crate::model::{Catalog, Category, PortfolioItem, ProjectDetail};

/// Stable projection of `items` under `category`.
pub fn filter_items(items: &[PortfolioItem], category: Category) -> Vec<&PortfolioItem> {
    items
        .iter()
        .filter(|item| category.admits(item.category))
        .collect()
}

/// Result of a filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Changed,
    Unchanged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    active: Category,
    /// Index into the filtered list.
    cursor: usize,
}

impl GalleryState {
    pub fn new(active: Category) -> Self {
        Self { active, cursor: 0 }
    }

    pub fn active(&self) -> Category {
        self.active
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the active filter. Re-selecting the current value is a no-op.
    pub fn select(&mut self, category: Category) -> Selection {
        if self.active == category {
            return Selection::Unchanged;
        }
        self.active = category;
        self.cursor = 0;
        Selection::Changed
    }

    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a PortfolioItem> {
        filter_items(&catalog.items, self.active)
    }

    /// Move the cursor by `delta` within the filtered list (clamped).
    pub fn move_cursor(&mut self, catalog: &Catalog, delta: i32) {
        let len = self.visible(catalog).len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let next = (self.cursor as i64 + delta as i64).clamp(0, len as i64 - 1);
        self.cursor = next as usize;
    }

    pub fn selected<'a>(&self, catalog: &'a Catalog) -> Option<&'a PortfolioItem> {
        self.visible(catalog).get(self.cursor).copied()
    }

    pub fn open(&self, catalog: &Catalog) -> Option<ProjectDetail> {
        self.selected(catalog).map(ProjectDetail::from)
    }

    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    pub fn has_next(&self, catalog: &Catalog) -> bool {
        self.cursor + 1 < self.visible(catalog).len()
    }

    /// Advance the cursor to the neighbouring project and return its detail.
    /// `None` (and no movement) at either end of the filtered list.
    pub fn step_project(&mut self, catalog: &Catalog, forward: bool) -> Option<ProjectDetail> {
        let allowed = if forward {
            self.has_next(catalog)
        } else {
            self.has_previous()
        };
        if !allowed {
            return None;
        }
        self.move_cursor(catalog, if forward { 1 } else { -1 });
        self.open(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reselecting_same_filter_is_unchanged() {
        let mut gallery = GalleryState::default();
        assert_eq!(gallery.select(Category::All), Selection::Unchanged);
        assert_eq!(gallery.select(Category::Video), Selection::Changed);
        assert_eq!(gallery.select(Category::Video), Selection::Unchanged);
        assert_eq!(gallery.active(), Category::Video);
    }

    #[test]
    fn changing_filter_resets_cursor() {
        let catalog = Catalog::builtin();
        let mut gallery = GalleryState::default();
        gallery.move_cursor(&catalog, 5);
        assert_eq!(gallery.cursor(), 5);
        gallery.select(Category::Logo);
        assert_eq!(gallery.cursor(), 0);
    }

    #[test]
    fn cursor_clamps_to_filtered_len() {
        let catalog = Catalog::builtin();
        let mut gallery = GalleryState::new(Category::Video);
        gallery.move_cursor(&catalog, 100);
        assert_eq!(gallery.cursor(), gallery.visible(&catalog).len() - 1);
        gallery.move_cursor(&catalog, -100);
        assert_eq!(gallery.cursor(), 0);
    }

    #[test]
    fn empty_filter_result_has_no_selection() {
        let mut catalog = Catalog::builtin();
        catalog.items.retain(|i| i.category != Category::Digital);
        let mut gallery = GalleryState::new(Category::Digital);
        assert!(gallery.visible(&catalog).is_empty());
        gallery.move_cursor(&catalog, 1);
        assert_eq!(gallery.cursor(), 0);
        assert!(gallery.open(&catalog).is_none());
        assert!(!gallery.has_next(&catalog));
    }

    #[test]
    fn step_project_respects_bounds() {
        let catalog = Catalog::builtin();
        let mut gallery = GalleryState::new(Category::Logo);
        assert!(gallery.step_project(&catalog, false).is_none());
        let next = gallery.step_project(&catalog, true).unwrap();
        assert_eq!(next.id, "1");
        assert!(gallery.has_previous());
        gallery.move_cursor(&catalog, 100);
        assert!(gallery.step_project(&catalog, true).is_none());
    }

    #[test]
    fn filter_items_keeps_order() {
        let catalog = Catalog::builtin();
        let videos: Vec<&str> = filter_items(&catalog.items, Category::Video)
            .into_iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(videos, vec!["2", "6", "25", "26", "27"]);
    }
}
