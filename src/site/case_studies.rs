//! Tabbed case-study selection.

use thiserror::Error;

use crate::model::{CaseStudy, Catalog};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown case study '{0}'")]
pub struct UnknownTab(pub String);

/// Exactly one tab is active at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseStudyTabs {
    keys: Vec<String>,
    active: usize,
}

impl CaseStudyTabs {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            keys: catalog.case_study_keys().map(str::to_string).collect(),
            active: 0,
        }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn active_key(&self) -> &str {
        self.keys.get(self.active).map(String::as_str).unwrap_or_default()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active<'a>(&self, catalog: &'a Catalog) -> Option<&'a CaseStudy> {
        catalog.case_study(self.active_key())
    }

    /// Select a tab by key. Idempotent; unknown keys leave state untouched.
    pub fn select(&mut self, key: &str) -> Result<(), UnknownTab> {
        let idx = self
            .keys
            .iter()
            .position(|k| k == key)
            .ok_or_else(|| UnknownTab(key.to_string()))?;
        self.active = idx;
        Ok(())
    }

    /// Move to the neighbouring tab, clamped at both ends.
    pub fn cycle(&mut self, delta: i32) {
        if self.keys.is_empty() {
            return;
        }
        let next = (self.active as i64 + delta as i64).clamp(0, self.keys.len() as i64 - 1);
        self.active = next as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tab_is_active_by_default() {
        let catalog = Catalog::builtin();
        let tabs = CaseStudyTabs::new(&catalog);
        assert_eq!(tabs.active_key(), "redkoar");
        assert_eq!(tabs.active(&catalog).unwrap().title, "Redkoar");
    }

    #[test]
    fn selecting_twice_equals_selecting_once() {
        let catalog = Catalog::builtin();
        let mut once = CaseStudyTabs::new(&catalog);
        once.select("be-masculine").unwrap();
        let mut twice = once.clone();
        twice.select("be-masculine").unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.active_key(), "be-masculine");
    }

    #[test]
    fn unknown_key_is_rejected_without_change() {
        let catalog = Catalog::builtin();
        let mut tabs = CaseStudyTabs::new(&catalog);
        tabs.select("be-masculine").unwrap();
        let err = tabs.select("nike").unwrap_err();
        assert_eq!(err, UnknownTab("nike".into()));
        assert_eq!(tabs.active_key(), "be-masculine");
    }

    #[test]
    fn cycle_clamps() {
        let catalog = Catalog::builtin();
        let mut tabs = CaseStudyTabs::new(&catalog);
        tabs.cycle(-1);
        assert_eq!(tabs.active_index(), 0);
        tabs.cycle(5);
        assert_eq!(tabs.active_index(), 1);
    }
}
