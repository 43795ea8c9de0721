//! Headless renders of the interactive page through the public API.

use std::sync::Arc;

use folio::ftui_harness::{MatchMode, buffer_to_text, compare_screens, render_model};
use folio::model::{Catalog, Category};
use folio::site::contact::ERROR_MESSAGE;
use folio::site::{FALLBACK_BODY, FALLBACK_TITLE, FormError, FormField, Section, SubmitStatus};
use folio::ui::ftui_adapter::Model;
use folio::ui::{FolioApp, FolioMsg};

fn app() -> FolioApp {
    FolioApp::new(Arc::new(Catalog::builtin())).with_year(2025)
}

fn screen(app: &FolioApp) -> String {
    buffer_to_text(&render_model(app, 100, 40))
}

fn type_text(app: &mut FolioApp, text: &str) {
    for c in text.chars() {
        let _ = app.update(FolioMsg::TextInput(c));
    }
}

#[test]
fn first_frame_shows_hero_and_nav() {
    let app = app();
    let text = screen(&app);
    assert!(text.contains("Hi, I'm Shahab Uddin"));
    assert!(text.contains("F3 Portfolio"));
    assert_eq!(app.nav().active(), Section::Hero);
}

#[test]
fn rendering_is_deterministic() {
    let app = app();
    let first = screen(&app);
    let second = screen(&app);
    assert!(compare_screens(&first, &second, MatchMode::Exact).is_ok());
}

#[test]
fn closing_the_overlay_restores_the_page() {
    let mut app = app();
    let _ = app.update(FolioMsg::NavClicked(Section::Portfolio));
    let before = screen(&app);

    let _ = app.update(FolioMsg::Activate);
    let open = screen(&app);
    assert!(compare_screens(&before, &open, MatchMode::TrimTrailing).is_err());

    let _ = app.update(FolioMsg::Dismiss);
    let after = screen(&app);
    if let Err(diff) = compare_screens(&before, &after, MatchMode::TrimTrailing) {
        panic!("page changed after closing the overlay:\n{diff}");
    }
}

#[test]
fn gallery_filter_shows_only_matching_projects() {
    let mut app = app();
    let _ = app.update(FolioMsg::NavClicked(Section::Portfolio));
    let _ = app.update(FolioMsg::Horizontal { delta: 2 });
    assert_eq!(app.gallery().active(), Category::Video);

    let text = screen(&app);
    assert!(text.contains("My Portfolio"));
    assert!(!text.contains("Black White Yellow Simple Initial Name Logo"));
}

#[test]
fn opening_a_project_renders_the_detail_overlay() {
    let mut app = app();
    let _ = app.update(FolioMsg::NavClicked(Section::Portfolio));
    let _ = app.update(FolioMsg::Activate);
    let viewer = app.viewer().expect("detail open");
    assert_eq!(viewer.detail().id, "14");
    assert_eq!(viewer.index(), 0);

    let text = screen(&app);
    assert!(text.contains("Image 1/1"));

    let _ = app.update(FolioMsg::Dismiss);
    assert!(app.viewer().is_none());
}

#[test]
fn failed_delivery_keeps_fields_and_shows_error() {
    let mut app = app();
    let _ = app.update(FolioMsg::NavClicked(Section::Contact));
    type_text(&mut app, "Jane");
    let _ = app.update(FolioMsg::Vertical { delta: 1 });
    type_text(&mut app, "jane@x.com");
    let _ = app.update(FolioMsg::Vertical { delta: 1 });
    type_text(&mut app, "Hello");

    let _ = app.update(FolioMsg::SubmitRequested);
    let ticket = app.form().in_flight().expect("submission in flight");
    assert!(screen(&app).contains("Sending..."));

    let _ = app.update(FolioMsg::SubmissionCompleted {
        ticket,
        outcome: Err("Mail server unreachable".to_string()),
    });
    assert_eq!(
        *app.form().status(),
        SubmitStatus::Error(ERROR_MESSAGE.to_string())
    );
    assert_eq!(app.form().value(FormField::Name), "Jane");
    assert!(screen(&app).contains("Please try again later."));
}

#[test]
fn invalid_email_is_reported_inline() {
    let mut app = app();
    let _ = app.update(FolioMsg::NavClicked(Section::Contact));
    type_text(&mut app, "Jane");
    let _ = app.update(FolioMsg::Vertical { delta: 1 });
    type_text(&mut app, "not-an-email");
    let _ = app.update(FolioMsg::Vertical { delta: 1 });
    type_text(&mut app, "Hi");
    let _ = app.update(FolioMsg::SubmitRequested);

    assert_eq!(app.form_error(), Some(&FormError::InvalidEmail));
    assert!(app.form().in_flight().is_none());
}

#[test]
fn injected_fault_replaces_whole_page() {
    let app = app().with_fault(Some(Section::Portfolio));
    let text = screen(&app);
    assert!(text.contains(FALLBACK_TITLE));
    assert!(text.contains(FALLBACK_BODY));
    assert!(!text.contains("Hi, I'm"));
}
