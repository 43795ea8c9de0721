//! Property tests for the page state: filter projection, tab selection and
//! the bounded image index.

use folio::model::{Catalog, Category, PortfolioItem, ProjectDetail};
use folio::site::{CaseStudyTabs, GalleryState, ImageViewer, Selection, filter_items};
use proptest::prelude::*;

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn item_category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(vec![
        Category::Logo,
        Category::Video,
        Category::Image,
        Category::Digital,
    ])
}

fn items_strategy() -> impl Strategy<Value = Vec<PortfolioItem>> {
    prop::collection::vec(item_category_strategy(), 0..40).prop_map(|categories| {
        categories
            .into_iter()
            .enumerate()
            .map(|(idx, category)| PortfolioItem {
                id: idx.to_string(),
                title: format!("Item {idx}"),
                category,
                image: format!("https://example.com/{idx}.png"),
                description: String::new(),
                tools: Vec::new(),
                client: None,
            })
            .collect()
    })
}

fn detail_with_images(count: usize) -> ProjectDetail {
    ProjectDetail {
        id: "p".to_string(),
        title: "P".to_string(),
        category: "Logo Design".to_string(),
        description: String::new(),
        client: None,
        year: None,
        tools: Vec::new(),
        images: (0..count)
            .map(|i| format!("https://example.com/{i}.png"))
            .collect(),
        before_after: Vec::new(),
    }
}

proptest! {
    #[test]
    fn filter_is_an_order_preserving_projection(
        items in items_strategy(),
        category in category_strategy(),
    ) {
        let filtered = filter_items(&items, category);
        let expected: Vec<&PortfolioItem> = items
            .iter()
            .filter(|item| category == Category::All || item.category == category)
            .collect();
        prop_assert_eq!(&filtered, &expected);
        if category == Category::All {
            prop_assert_eq!(filtered.len(), items.len());
        }
    }

    #[test]
    fn reselecting_a_filter_is_a_noop(category in category_strategy(), delta in -3i32..3) {
        let catalog = Catalog::builtin();
        let mut gallery = GalleryState::new(Category::All);
        gallery.select(category);
        gallery.move_cursor(&catalog, delta);
        let before = gallery.clone();
        prop_assert_eq!(gallery.select(category), Selection::Unchanged);
        prop_assert_eq!(gallery, before);
    }

    #[test]
    fn selecting_a_tab_twice_equals_once(idx in 0usize..2) {
        let catalog = Catalog::builtin();
        let key = catalog.case_studies[idx].key.clone();

        let mut once = CaseStudyTabs::new(&catalog);
        once.select(&key).unwrap();
        let mut twice = CaseStudyTabs::new(&catalog);
        twice.select(&key).unwrap();
        twice.select(&key).unwrap();

        prop_assert_eq!(once.active_key(), twice.active_key());
        prop_assert_eq!(once.active_key(), key.as_str());
    }

    #[test]
    fn image_index_stays_in_bounds(
        count in 1usize..12,
        moves in prop::collection::vec(any::<bool>(), 0..40),
    ) {
        let mut viewer = ImageViewer::new(detail_with_images(count), false, false);
        for forward in moves {
            let before = viewer.index();
            if forward {
                viewer.next();
                let expected = if before == count - 1 { before } else { before + 1 };
                prop_assert_eq!(viewer.index(), expected);
            } else {
                viewer.previous();
                let expected = before.saturating_sub(1);
                prop_assert_eq!(viewer.index(), expected);
            }
            prop_assert!(viewer.index() < viewer.len());
        }
    }
}

#[test]
fn unknown_tab_leaves_state_unchanged() {
    let catalog = Catalog::builtin();
    let mut tabs = CaseStudyTabs::new(&catalog);
    let before = tabs.active_key().to_string();
    assert!(tabs.select("does-not-exist").is_err());
    assert_eq!(tabs.active_key(), before);
}
