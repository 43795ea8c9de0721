//! Paged image viewer for the detail overlay.
//!
//! The viewer only knows its own image list. Moving to a different project
//! is reported back to the owner as a [`ProjectStep`], and only when the
//! owner said a neighbour exists.

use crate::model::{BeforeAfter, ProjectDetail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStep {
    Previous,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageViewer {
    detail: ProjectDetail,
    index: usize,
    show_before_after: bool,
    has_previous: bool,
    has_next: bool,
}

impl ImageViewer {
    pub fn new(detail: ProjectDetail, has_previous: bool, has_next: bool) -> Self {
        let mut detail = detail;
        // An item with no images still gets one (empty) slot.
        if detail.images.is_empty() {
            detail.images.push(String::new());
        }
        Self {
            detail,
            index: 0,
            show_before_after: false,
            has_previous,
            has_next,
        }
    }

    pub fn detail(&self) -> &ProjectDetail {
        &self.detail
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.detail.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detail.images.is_empty()
    }

    pub fn current_image(&self) -> &str {
        self.detail
            .images
            .get(self.index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn next(&mut self) {
        if self.index + 1 < self.len() {
            self.index += 1;
        }
    }

    pub fn can_toggle(&self) -> bool {
        !self.detail.before_after.is_empty()
    }

    /// Flip between the current image and the comparison view.
    /// No-op without a pair; the index is never touched.
    pub fn toggle_before_after(&mut self) {
        if self.can_toggle() {
            self.show_before_after = !self.show_before_after;
        }
    }

    pub fn showing_before_after(&self) -> bool {
        self.show_before_after
    }

    /// Only the first pair is ever compared.
    pub fn comparison(&self) -> Option<&BeforeAfter> {
        if self.show_before_after {
            self.detail.before_after.first()
        } else {
            None
        }
    }

    pub fn has_previous_project(&self) -> bool {
        self.has_previous
    }

    pub fn has_next_project(&self) -> bool {
        self.has_next
    }

    pub fn request_project(&self, step: ProjectStep) -> Option<ProjectStep> {
        let allowed = match step {
            ProjectStep::Previous => self.has_previous,
            ProjectStep::Next => self.has_next,
        };
        allowed.then_some(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(images: usize, pair: bool) -> ProjectDetail {
        ProjectDetail {
            id: "x".into(),
            title: "X".into(),
            category: "Logo Design".into(),
            description: String::new(),
            client: None,
            year: None,
            tools: vec![],
            images: (0..images)
                .map(|i| format!("https://example.com/{i}.png"))
                .collect(),
            before_after: if pair {
                vec![BeforeAfter {
                    before: "https://example.com/b.png".into(),
                    after: "https://example.com/a.png".into(),
                }]
            } else {
                vec![]
            },
        }
    }

    #[test]
    fn paging_never_wraps() {
        let mut viewer = ImageViewer::new(detail(3, false), false, false);
        viewer.previous();
        assert_eq!(viewer.index(), 0);
        viewer.next();
        viewer.next();
        assert_eq!(viewer.index(), 2);
        viewer.next();
        assert_eq!(viewer.index(), 2);
        viewer.previous();
        assert_eq!(viewer.index(), 1);
    }

    #[test]
    fn toggle_requires_a_pair() {
        let mut viewer = ImageViewer::new(detail(2, false), false, false);
        assert!(!viewer.can_toggle());
        viewer.toggle_before_after();
        assert!(!viewer.showing_before_after());
    }

    #[test]
    fn toggle_keeps_index() {
        let mut viewer = ImageViewer::new(detail(3, true), false, false);
        viewer.next();
        viewer.toggle_before_after();
        assert!(viewer.showing_before_after());
        assert_eq!(viewer.index(), 1);
        assert_eq!(viewer.comparison().unwrap().after, "https://example.com/a.png");
        viewer.toggle_before_after();
        assert!(viewer.comparison().is_none());
        assert_eq!(viewer.index(), 1);
    }

    #[test]
    fn project_steps_gated_by_flags() {
        let viewer = ImageViewer::new(detail(1, false), false, true);
        assert_eq!(viewer.request_project(ProjectStep::Previous), None);
        assert_eq!(
            viewer.request_project(ProjectStep::Next),
            Some(ProjectStep::Next)
        );
    }

    #[test]
    fn empty_image_list_gets_one_slot() {
        let viewer = ImageViewer::new(detail(0, false), false, false);
        assert_eq!(viewer.len(), 1);
        assert_eq!(viewer.current_image(), "");
    }
}
