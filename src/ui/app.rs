//! FrankenTUI portfolio page.
//!
//! Elm-style: [`FolioApp`] is the model, [`FolioMsg`] the message set, and
//! every side effect goes through `ftui::Cmd`:
//!
//! ```text
//!   Event ──From──▶ FolioMsg ──update──▶ state + Cmd
//!                                         └── Cmd::task(Submitter::submit)
//!                                               └──▶ SubmissionCompleted
//! ```
//!
//! The whole page is one scrollable document. Nav clicks jump to a section
//! anchor; PageUp/PageDown and the mouse wheel scroll without touching the nav
//! indicator. Every part of the page renders through the app's
//! [`ErrorBoundary`]; once it trips, only the fallback panel is drawn.

use std::cell::Cell;
use std::sync::Arc;

use chrono::Datelike;
use ftui::text::{Line, Span, WrapMode, wrap_text};
use ftui::widgets::Widget;
use ftui::widgets::block::{Alignment, Block};
use ftui::widgets::borders::{BorderType, Borders};
use ftui::widgets::paragraph::Paragraph;
use tracing::{debug, info};

use super::components::help_strip::draw_help_strip;
use super::components::pills::{Pill, pill_spans};
use super::components::theme::SitePalette;
use super::ftui_adapter::{Constraint, Flex, Rect};
use crate::model::{Catalog, Category, ProjectDetail};
use crate::site::{
    CaseStudyTabs, ContactForm, ErrorBoundary, FALLBACK_BODY, FALLBACK_TITLE, Fallback, FormError,
    FormField, GalleryState, ImageViewer, NavState, ProjectStep, RenderFault, Section,
    SimulatedSubmitter, SubmitStatus, SubmitTicket, Submitter,
};

/// Rows moved per mouse-wheel notch.
const WHEEL_STEP: i32 = 3;

/// Horizontal padding inside the document pane.
const PAGE_PADDING: u16 = 2;

// =========================================================================
// Messages
// =========================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolioMsg {
    /// Nav entry (or "Hire Me" / "View My Work") chosen.
    NavClicked(Section),
    /// Move keyboard focus to the neighbouring section.
    SectionCycled { delta: i32 },
    /// Scroll the document by rows.
    Scrolled { delta: i32 },
    /// Scroll by one viewport height.
    Paged { forward: bool },
    Horizontal { delta: i32 },
    Vertical { delta: i32 },
    Activate,
    Dismiss,
    TextInput(char),
    Backspace,
    SubmitRequested,
    SubmissionCompleted {
        ticket: SubmitTicket,
        outcome: Result<(), String>,
    },
    Resized { width: u16, height: u16 },
    Tick,
    QuitRequested,
    ForceQuit,
}

impl From<super::ftui_adapter::Event> for FolioMsg {
    fn from(event: super::ftui_adapter::Event) -> Self {
        use super::ftui_adapter::{Event, KeyCode, Modifiers};

        match event {
            Event::Key(key) => {
                let ctrl = key.modifiers.contains(Modifiers::CTRL);
                let shift = key.modifiers.contains(Modifiers::SHIFT);

                match key.code {
                    KeyCode::Char('c') if ctrl => FolioMsg::ForceQuit,
                    KeyCode::Char('s') if ctrl => FolioMsg::SubmitRequested,
                    KeyCode::F(10) => FolioMsg::QuitRequested,

                    // -- Nav ------------------------------------------------------
                    KeyCode::F(n @ 1..=5) => FolioMsg::NavClicked(Section::ALL[n as usize - 1]),
                    KeyCode::Tab if shift => FolioMsg::SectionCycled { delta: -1 },
                    KeyCode::Tab => FolioMsg::SectionCycled { delta: 1 },

                    // -- Scrolling ------------------------------------------------
                    KeyCode::PageUp => FolioMsg::Paged { forward: false },
                    KeyCode::PageDown => FolioMsg::Paged { forward: true },

                    // -- Section-local --------------------------------------------
                    KeyCode::Left => FolioMsg::Horizontal { delta: -1 },
                    KeyCode::Right => FolioMsg::Horizontal { delta: 1 },
                    KeyCode::Up => FolioMsg::Vertical { delta: -1 },
                    KeyCode::Down => FolioMsg::Vertical { delta: 1 },
                    KeyCode::Enter => FolioMsg::Activate,
                    KeyCode::Escape => FolioMsg::Dismiss,
                    KeyCode::Backspace => FolioMsg::Backspace,
                    KeyCode::Char(c) => FolioMsg::TextInput(c),

                    _ => FolioMsg::Tick,
                }
            }

            Event::Mouse(mouse) => {
                use ftui::core::event::MouseEventKind as Mek;
                match mouse.kind {
                    Mek::ScrollUp => FolioMsg::Scrolled {
                        delta: -WHEEL_STEP,
                    },
                    Mek::ScrollDown => FolioMsg::Scrolled { delta: WHEEL_STEP },
                    _ => FolioMsg::Tick,
                }
            }

            Event::Resize { width, height } => FolioMsg::Resized { width, height },
            _ => FolioMsg::Tick,
        }
    }
}

// =========================================================================
// Model
// =========================================================================

/// Where an open detail overlay came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailSource {
    Gallery,
    CaseStudy,
}

#[derive(Debug, Clone)]
struct OpenDetail {
    viewer: ImageViewer,
    source: DetailSource,
}

/// Geometry of the last drawn document, cached by `view` for `update`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Viewport {
    anchor_line: usize,
    max_top: usize,
    height: usize,
}

pub struct FolioApp {
    catalog: Arc<Catalog>,
    palette: SitePalette,
    nav: NavState,
    /// Section receiving section-local keys; the document is anchored here.
    focus: Section,
    /// Rows scrolled away from the focus anchor.
    scroll: i32,
    /// Hero call-to-action under the cursor: "Hire Me" when set.
    hero_hire: bool,
    gallery: GalleryState,
    tabs: CaseStudyTabs,
    detail: Option<OpenDetail>,
    form: ContactForm,
    form_error: Option<FormError>,
    submitter: Arc<dyn Submitter>,
    boundary: ErrorBoundary,
    inject_fault: Option<Section>,
    year: i32,
    viewport: Cell<Viewport>,
}

impl FolioApp {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let tabs = CaseStudyTabs::new(&catalog);
        Self {
            catalog,
            palette: SitePalette::default(),
            nav: NavState::default(),
            focus: Section::Hero,
            scroll: 0,
            hero_hire: false,
            gallery: GalleryState::new(Category::All),
            tabs,
            detail: None,
            form: ContactForm::new(1),
            form_error: None,
            submitter: Arc::new(SimulatedSubmitter::default()),
            boundary: ErrorBoundary::new(),
            inject_fault: None,
            year: chrono::Local::now().year(),
            viewport: Cell::new(Viewport::default()),
        }
    }

    pub fn with_submitter(mut self, submitter: Arc<dyn Submitter>) -> Self {
        self.submitter = submitter;
        self
    }

    /// Make `section` fail to render.
    pub fn with_fault(mut self, section: Option<Section>) -> Self {
        self.inject_fault = section;
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn focus(&self) -> Section {
        self.focus
    }

    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    pub fn tabs(&self) -> &CaseStudyTabs {
        &self.tabs
    }

    pub fn viewer(&self) -> Option<&ImageViewer> {
        self.detail.as_ref().map(|open| &open.viewer)
    }

    pub fn detail_source(&self) -> Option<DetailSource> {
        self.detail.as_ref().map(|open| open.source)
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_error(&self) -> Option<&FormError> {
        self.form_error.as_ref()
    }

    pub fn fault(&self) -> Option<RenderFault> {
        self.boundary.fault()
    }

    // -- Transitions ------------------------------------------------------

    fn jump_to(&mut self, section: Section) {
        self.focus = section;
        self.scroll = 0;
    }

    fn scroll_by(&mut self, delta: i32) {
        let vp = self.viewport.get();
        let anchor = vp.anchor_line as i32;
        let top = (anchor + self.scroll + delta).clamp(0, vp.max_top as i32);
        self.scroll = top - anchor;
    }

    fn open_detail(&mut self) {
        let opened = match self.focus {
            Section::Portfolio => self.gallery.open(&self.catalog).map(|detail| OpenDetail {
                viewer: ImageViewer::new(
                    detail,
                    self.gallery.has_previous(),
                    self.gallery.has_next(&self.catalog),
                ),
                source: DetailSource::Gallery,
            }),
            Section::CaseStudies => self.tabs.active(&self.catalog).map(|study| OpenDetail {
                viewer: ImageViewer::new(ProjectDetail::from(study), false, false),
                source: DetailSource::CaseStudy,
            }),
            _ => None,
        };
        if let Some(open) = &opened {
            debug!(
                component = "tui",
                operation = "open_detail",
                id = %open.viewer.detail().id,
                images = open.viewer.len(),
                "Detail overlay opened"
            );
        }
        self.detail = opened;
    }

    fn step_project(&mut self, step: ProjectStep) {
        let Some(open) = &self.detail else {
            return;
        };
        if open.source != DetailSource::Gallery || open.viewer.request_project(step).is_none() {
            return;
        }
        let forward = step == ProjectStep::Next;
        if let Some(detail) = self.gallery.step_project(&self.catalog, forward) {
            self.detail = Some(OpenDetail {
                viewer: ImageViewer::new(
                    detail,
                    self.gallery.has_previous(),
                    self.gallery.has_next(&self.catalog),
                ),
                source: DetailSource::Gallery,
            });
        }
    }

    fn submit(&mut self) -> ftui::Cmd<FolioMsg> {
        match self.form.begin_submit() {
            Ok((ticket, message)) => {
                self.form_error = None;
                info!(
                    component = "tui",
                    operation = "submit",
                    "Contact form submitted"
                );
                let submitter = Arc::clone(&self.submitter);
                ftui::Cmd::task(move || FolioMsg::SubmissionCompleted {
                    ticket,
                    outcome: submitter.submit(&message),
                })
            }
            Err(FormError::Busy) => ftui::Cmd::none(),
            Err(err) => {
                debug!(component = "tui", error = %err, "Contact form rejected");
                self.form_error = Some(err);
                ftui::Cmd::none()
            }
        }
    }

    fn update_detail(&mut self, msg: FolioMsg) -> ftui::Cmd<FolioMsg> {
        let Some(open) = self.detail.as_mut() else {
            return ftui::Cmd::none();
        };
        match msg {
            FolioMsg::Horizontal { delta } if delta < 0 => open.viewer.previous(),
            FolioMsg::Horizontal { .. } => open.viewer.next(),
            FolioMsg::TextInput('b') if open.viewer.can_toggle() => {
                open.viewer.toggle_before_after()
            }
            FolioMsg::TextInput('[') => self.step_project(ProjectStep::Previous),
            FolioMsg::TextInput(']') => self.step_project(ProjectStep::Next),
            FolioMsg::Dismiss | FolioMsg::TextInput('q') => self.detail = None,
            _ => {}
        }
        ftui::Cmd::none()
    }

    fn update_section(&mut self, msg: FolioMsg) -> ftui::Cmd<FolioMsg> {
        match (self.focus, msg) {
            (Section::Portfolio, FolioMsg::Horizontal { delta }) => {
                let next = self.gallery.active().step(delta);
                self.gallery.select(next);
            }
            (Section::Portfolio, FolioMsg::Vertical { delta }) => {
                self.gallery.move_cursor(&self.catalog, delta);
            }
            (Section::Portfolio | Section::CaseStudies, FolioMsg::Activate) => self.open_detail(),
            (Section::CaseStudies, FolioMsg::Horizontal { delta }) => self.tabs.cycle(delta),
            (Section::Contact, FolioMsg::Vertical { delta }) => {
                self.form.set_focus(self.form.focus().step(delta));
            }
            (Section::Contact, FolioMsg::Activate) => return self.submit(),
            (Section::Contact, FolioMsg::TextInput(c)) => {
                self.form.push_char(c);
                self.form_error = None;
            }
            (Section::Contact, FolioMsg::Backspace) => self.form.pop_char(),
            (Section::Contact, FolioMsg::Dismiss)
                if self.form_error.is_some() || *self.form.status() != SubmitStatus::None =>
            {
                self.form.dismiss();
                self.form_error = None;
            }
            (Section::Hero, FolioMsg::Horizontal { .. }) => self.hero_hire = !self.hero_hire,
            (Section::Hero, FolioMsg::Activate) => {
                let target = if self.hero_hire {
                    self.nav.hire_me()
                } else {
                    self.nav.view_work()
                };
                self.jump_to(target);
            }
            (_, FolioMsg::Vertical { delta }) => self.scroll_by(delta),
            (_, FolioMsg::TextInput('q')) | (_, FolioMsg::Dismiss) => {
                return ftui::Cmd::quit();
            }
            _ => {}
        }
        ftui::Cmd::none()
    }

    // -- Document ---------------------------------------------------------

    fn heading(&self, lead: &str, accent: &str) -> Line {
        Line::from_spans(vec![
            Span::styled(format!("{lead} "), self.palette.text().bold()),
            Span::styled(accent.to_string(), self.palette.heading()),
        ])
    }

    fn wrapped(&self, text: &str, width: usize, style: ftui::Style, out: &mut Vec<Line>) {
        for row in wrap_text(text, width.max(1), WrapMode::Word) {
            out.push(Line::from_spans(vec![Span::styled(row, style)]));
        }
    }

    fn section_lines(&self, section: Section, width: usize) -> Result<Vec<Line>, RenderFault> {
        RenderFault::check_injected(self.inject_fault, section)?;
        let mut lines = Vec::new();
        let p = self.palette;
        match section {
            Section::Hero => {
                let profile = &self.catalog.profile;
                lines.push(Line::from_spans(vec![
                    Span::styled("Hi, I'm ".to_string(), p.text().bold()),
                    Span::styled(profile.name.clone(), p.heading()),
                ]));
                self.wrapped(&profile.headline, width, p.text(), &mut lines);
                self.wrapped(&profile.tagline, width, p.muted(), &mut lines);
                lines.push(Line::from(""));
                let (work, hire) = if self.hero_hire {
                    (p.chip(), p.selected())
                } else {
                    (p.selected(), p.chip())
                };
                lines.push(Line::from_spans(vec![
                    Span::styled(" View My Work ".to_string(), work),
                    Span::raw("  "),
                    Span::styled(" Hire Me ".to_string(), hire),
                ]));
            }
            Section::About => {
                let profile = &self.catalog.profile;
                lines.push(self.heading("About", "Me"));
                for paragraph in &profile.about {
                    self.wrapped(paragraph, width, p.text(), &mut lines);
                    lines.push(Line::from(""));
                }
                let skills: Vec<Pill> = profile
                    .skills
                    .iter()
                    .map(|skill| Pill::new(skill.clone(), false))
                    .collect();
                lines.push(Line::from_spans(pill_spans(&skills, p)));
                lines.push(Line::from(""));
                self.wrapped(&format!("\"{}\"", profile.quote), width, p.muted(), &mut lines);
            }
            Section::Portfolio => {
                lines.push(self.heading("My", "Portfolio"));
                let filters: Vec<Pill> = Category::ALL
                    .iter()
                    .map(|category| Pill::new(category.label(), *category == self.gallery.active()))
                    .collect();
                lines.push(Line::from_spans(pill_spans(&filters, p)));
                lines.push(Line::from(""));
                let visible = self.gallery.visible(&self.catalog);
                if visible.is_empty() {
                    lines.push(Line::from_spans(vec![Span::styled(
                        "No projects in this category".to_string(),
                        p.muted(),
                    )]));
                }
                for (idx, item) in visible.iter().enumerate() {
                    let selected = idx == self.gallery.cursor();
                    let marker = if selected { "> " } else { "  " };
                    let title_style = if selected && self.focus == Section::Portfolio {
                        p.selected()
                    } else {
                        p.text()
                    };
                    lines.push(Line::from_spans(vec![
                        Span::styled(marker.to_string(), p.heading()),
                        Span::styled(item.title.clone(), title_style),
                        Span::styled(format!("  {}", item.category.label()), p.muted()),
                    ]));
                }
            }
            Section::CaseStudies => {
                let study = self.tabs.active(&self.catalog).ok_or_else(|| RenderFault::Missing {
                    part: section.id().to_string(),
                    what: format!("case study '{}'", self.tabs.active_key()),
                })?;
                lines.push(self.heading("Case", "Studies"));
                let tabs: Vec<Pill> = self
                    .catalog
                    .case_studies
                    .iter()
                    .map(|s| Pill::new(s.title.clone(), s.key == study.key))
                    .collect();
                lines.push(Line::from_spans(pill_spans(&tabs, p)));
                lines.push(Line::from(""));
                lines.push(Line::from_spans(vec![Span::styled(study.title.clone(), p.heading())]));
                lines.push(Line::from_spans(vec![Span::styled(study.client.clone(), p.muted())]));
                for (label, body) in [
                    ("Overview", &study.description),
                    ("Challenge", &study.challenge),
                    ("Solution", &study.solution),
                    ("Results", &study.results),
                ] {
                    lines.push(Line::from(""));
                    lines.push(Line::from_spans(vec![Span::styled(
                        label.to_string(),
                        p.text().bold(),
                    )]));
                    self.wrapped(body, width, p.text(), &mut lines);
                }
                lines.push(Line::from(""));
                let tools: Vec<Pill> = study.tools.iter().map(|t| Pill::new(t.clone(), false)).collect();
                lines.push(Line::from_spans(pill_spans(&tools, p)));
                if study.images.before.is_some() || study.images.after.is_some() {
                    lines.push(Line::from(""));
                    lines.push(Line::from_spans(vec![Span::styled(
                        "Before & After".to_string(),
                        p.text().bold(),
                    )]));
                }
                if let Some(before) = &study.images.before {
                    lines.push(Line::from_spans(vec![
                        Span::styled("Before  ".to_string(), p.muted()),
                        Span::styled(before.clone(), p.text()),
                    ]));
                }
                if let Some(after) = &study.images.after {
                    lines.push(Line::from_spans(vec![
                        Span::styled("After   ".to_string(), p.muted()),
                        Span::styled(after.clone(), p.text()),
                    ]));
                }
                if !study.images.showcase.is_empty() {
                    lines.push(Line::from_spans(vec![Span::styled(
                        format!("Project Showcase ({} images)", study.images.showcase.len()),
                        p.muted(),
                    )]));
                }
                lines.push(Line::from(""));
                lines.push(Line::from_spans(vec![
                    Span::styled(" View Project Details ".to_string(), p.selected()),
                    Span::styled("  Enter".to_string(), p.muted()),
                ]));
            }
            Section::Contact => {
                let contact = &self.catalog.contact;
                lines.push(self.heading("Get In", "Touch"));
                self.wrapped(
                    "Have a project in mind? Let's create something amazing together.",
                    width,
                    p.text(),
                    &mut lines,
                );
                lines.push(Line::from(""));
                for (label, value) in [
                    ("Email", &contact.email),
                    ("Phone", &contact.phone),
                    ("Location", &contact.location),
                    ("LinkedIn", &contact.linkedin),
                    ("Instagram", &contact.instagram),
                ] {
                    lines.push(Line::from_spans(vec![
                        Span::styled(format!("{label:<10}"), p.muted()),
                        Span::styled(value.clone(), p.text()),
                    ]));
                }
                lines.push(Line::from(""));
                match self.form.status() {
                    SubmitStatus::Success(message) => lines.push(Line::from_spans(vec![
                        Span::styled(message.clone(), p.success()),
                        Span::styled("  Esc to dismiss".to_string(), p.muted()),
                    ])),
                    SubmitStatus::Error(message) => lines.push(Line::from_spans(vec![
                        Span::styled(message.clone(), p.error()),
                        Span::styled("  Esc to dismiss".to_string(), p.muted()),
                    ])),
                    SubmitStatus::None => {}
                }
                let editing = self.focus == Section::Contact;
                for field in FormField::ALL {
                    let focused = editing && self.form.focus() == field;
                    let cursor = if focused { "_" } else { "" };
                    lines.push(Line::from_spans(vec![
                        Span::styled(
                            format!("{:<10}", field.label()),
                            if focused { p.heading() } else { p.muted() },
                        ),
                        Span::styled(format!("{}{cursor}", self.form.value(field)), p.chip()),
                    ]));
                }
                if let Some(err) = &self.form_error {
                    lines.push(Line::from_spans(vec![Span::styled(err.to_string(), p.error())]));
                }
                lines.push(Line::from(""));
                lines.push(Line::from_spans(vec![Span::styled(
                    format!(" {} ", self.form.button_label()),
                    if self.form.is_submitting() {
                        p.chip()
                    } else {
                        p.selected()
                    },
                )]));
            }
        }
        lines.push(Line::from(""));
        Ok(lines)
    }

    fn footer_lines(&self) -> Vec<Line> {
        vec![Line::from_spans(vec![Span::styled(
            format!(
                "\u{a9} {} {}. All rights reserved.",
                self.year, self.catalog.profile.name
            ),
            self.palette.muted(),
        )])]
    }

    /// The full page document and the first line of each section.
    fn document(&self, width: usize) -> Result<(Vec<Line>, [usize; 5]), Fallback> {
        let mut lines = Vec::new();
        let mut anchors = [0usize; 5];
        for section in Section::ALL {
            let body = self
                .boundary
                .render(section.id(), || self.section_lines(section, width))?;
            anchors[section.position()] = lines.len();
            lines.extend(body);
        }
        let footer = self.boundary.render("footer", || Ok(self.footer_lines()))?;
        lines.extend(footer);
        Ok((lines, anchors))
    }

    fn nav_pills(&self) -> Vec<Pill> {
        Section::ALL
            .iter()
            .enumerate()
            .map(|(idx, section)| {
                Pill::new(section.label(), *section == self.nav.active())
                    .with_key(format!("F{}", idx + 1))
            })
            .collect()
    }

    fn detail_lines(&self, viewer: &ImageViewer) -> Vec<Line> {
        let p = self.palette;
        let detail = viewer.detail();
        let mut lines = vec![Line::from_spans(vec![Span::styled(
            detail.category.clone(),
            p.heading(),
        )])];
        if let Some(client) = &detail.client {
            lines.push(Line::from_spans(vec![
                Span::styled("Client  ".to_string(), p.muted()),
                Span::styled(client.clone(), p.text()),
            ]));
        }
        if let Some(year) = &detail.year {
            lines.push(Line::from_spans(vec![
                Span::styled("Year    ".to_string(), p.muted()),
                Span::styled(year.clone(), p.text()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from_spans(vec![Span::styled(
            detail.description.clone(),
            p.text(),
        )]));
        lines.push(Line::from(""));
        if !detail.tools.is_empty() {
            let tools: Vec<Pill> = detail.tools.iter().map(|t| Pill::new(t.clone(), false)).collect();
            lines.push(Line::from_spans(pill_spans(&tools, p)));
            lines.push(Line::from(""));
        }
        match viewer.comparison() {
            Some(pair) => {
                lines.push(Line::from_spans(vec![
                    Span::styled("Before  ".to_string(), p.muted()),
                    Span::styled(pair.before.clone(), p.text()),
                ]));
                lines.push(Line::from_spans(vec![
                    Span::styled("After   ".to_string(), p.muted()),
                    Span::styled(pair.after.clone(), p.text()),
                ]));
            }
            None => {
                lines.push(Line::from_spans(vec![
                    Span::styled(
                        format!("Image {}/{}  ", viewer.index() + 1, viewer.len()),
                        p.muted(),
                    ),
                    Span::styled(viewer.current_image().to_string(), p.text()),
                ]));
            }
        }
        lines
    }

    fn shortcuts(&self) -> Vec<(&'static str, &'static str)> {
        if let Some(open) = &self.detail {
            let mut keys = vec![("\u{2190}/\u{2192}", "image")];
            if open.viewer.can_toggle() {
                keys.push(("b", "before/after"));
            }
            if open.viewer.has_previous_project() || open.viewer.has_next_project() {
                keys.push(("[ ]", "project"));
            }
            keys.push(("Esc", "close"));
            return keys;
        }
        let mut keys = match self.focus {
            Section::Hero => vec![("\u{2190}/\u{2192}", "button"), ("Enter", "go")],
            Section::About => vec![],
            Section::Portfolio => vec![
                ("\u{2190}/\u{2192}", "filter"),
                ("\u{2191}/\u{2193}", "select"),
                ("Enter", "open"),
            ],
            Section::CaseStudies => vec![("\u{2190}/\u{2192}", "tab"), ("Enter", "details")],
            Section::Contact => vec![
                ("\u{2191}/\u{2193}", "field"),
                ("Enter", "send"),
                ("Esc", "dismiss"),
            ],
        };
        keys.extend([
            ("F1-F5", "jump"),
            ("Tab", "section"),
            ("PgUp/PgDn", "scroll"),
            ("F10", "quit"),
        ]);
        keys
    }

    // -- Drawing ----------------------------------------------------------

    fn render_nav(&self, frame: &mut super::ftui_adapter::Frame, area: Rect, pills: Vec<Pill>) {
        let brand = self
            .catalog
            .profile
            .name
            .split_whitespace()
            .next()
            .unwrap_or_default();
        let title = format!(" {brand}. ");
        let outer = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(&title)
            .title_alignment(Alignment::Left)
            .style(self.palette.border());
        let inner = outer.inner(area);
        outer.render(area, frame);
        if inner.is_empty() {
            return;
        }
        Paragraph::new(Line::from_spans(pill_spans(&pills, self.palette)))
            .style(self.palette.root())
            .render(inner, frame);
    }

    fn render_page(
        &self,
        frame: &mut super::ftui_adapter::Frame,
        area: Rect,
        lines: Vec<Line>,
        anchors: [usize; 5],
    ) {
        let page = Rect::new(
            area.x + PAGE_PADDING.min(area.width),
            area.y,
            area.width.saturating_sub(PAGE_PADDING * 2),
            area.height,
        );
        let height = page.height as usize;
        let total = lines.len();
        let max_top = total.saturating_sub(height);
        let anchor_line = anchors[self.focus.position()];
        let top = (anchor_line as i64 + self.scroll as i64).clamp(0, max_top as i64) as usize;
        self.viewport.set(Viewport {
            anchor_line,
            max_top,
            height,
        });

        let visible: Vec<Line> = lines.into_iter().skip(top).take(height).collect();
        Paragraph::new(ftui::text::Text::from_lines(visible))
            .style(self.palette.root())
            .render(page, frame);
    }

    fn render_detail(
        &self,
        frame: &mut super::ftui_adapter::Frame,
        area: Rect,
        viewer: &ImageViewer,
        lines: Vec<Line>,
    ) {
        let popup_w = ((area.width as u32 * 80) / 100).min(area.width as u32) as u16;
        let popup_h = ((area.height as u32 * 80) / 100).min(area.height as u32) as u16;
        if popup_w < 20 || popup_h < 6 {
            return;
        }
        let popup_x = area.x + (area.width.saturating_sub(popup_w)) / 2;
        let popup_y = area.y + (area.height.saturating_sub(popup_h)) / 2;
        let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

        Block::new().style(self.palette.root()).render(popup_area, frame);
        let title = format!(" {} ", viewer.detail().title);
        let outer = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(&title)
            .title_alignment(Alignment::Left)
            .style(self.palette.border());
        let inner = outer.inner(popup_area);
        outer.render(popup_area, frame);
        if inner.is_empty() {
            return;
        }
        Paragraph::new(ftui::text::Text::from_lines(lines))
            .style(self.palette.root())
            .wrap(WrapMode::Word)
            .render(inner, frame);
    }

    fn render_fallback(&self, frame: &mut super::ftui_adapter::Frame, area: Rect) {
        let p = self.palette;
        let lines = vec![
            Line::from(""),
            Line::from_spans(vec![Span::styled(format!("  {FALLBACK_TITLE}"), p.error())]),
            Line::from(""),
            Line::from_spans(vec![Span::styled(format!("  {FALLBACK_BODY}"), p.text())]),
            Line::from(""),
            Line::from_spans(vec![Span::styled("  q to quit".to_string(), p.muted())]),
        ];
        Paragraph::new(ftui::text::Text::from_lines(lines))
            .style(p.root())
            .render(area, frame);
    }
}

impl super::ftui_adapter::Model for FolioApp {
    type Message = FolioMsg;

    fn init(&mut self) -> ftui::Cmd<FolioMsg> {
        // Runs after the terminal session has installed its panic hook.
        crate::site::boundary::install_boundary_panic_hook();
        ftui::Cmd::none()
    }

    fn update(&mut self, msg: FolioMsg) -> ftui::Cmd<FolioMsg> {
        // Once tripped, the page stays on the fallback panel.
        if self.boundary.is_tripped() {
            return match msg {
                FolioMsg::ForceQuit
                | FolioMsg::QuitRequested
                | FolioMsg::Dismiss
                | FolioMsg::TextInput('q') => ftui::Cmd::quit(),
                _ => ftui::Cmd::none(),
            };
        }

        match msg {
            FolioMsg::ForceQuit | FolioMsg::QuitRequested => ftui::Cmd::quit(),
            FolioMsg::NavClicked(section) => {
                self.detail = None;
                let target = self.nav.click(section);
                debug!(component = "tui", section = target.id(), "Nav click");
                self.jump_to(target);
                ftui::Cmd::none()
            }
            FolioMsg::SectionCycled { delta } => {
                if self.detail.is_none() {
                    self.jump_to(self.focus.cycle(delta));
                }
                ftui::Cmd::none()
            }
            FolioMsg::Scrolled { delta } => {
                if self.detail.is_none() {
                    self.scroll_by(delta);
                }
                ftui::Cmd::none()
            }
            FolioMsg::Paged { forward } => {
                if self.detail.is_none() {
                    let page = self.viewport.get().height.max(1) as i32;
                    self.scroll_by(if forward { page } else { -page });
                }
                ftui::Cmd::none()
            }
            FolioMsg::SubmitRequested => self.submit(),
            FolioMsg::SubmissionCompleted { ticket, outcome } => {
                let applied = self.form.complete(ticket, outcome);
                debug!(
                    component = "tui",
                    operation = "submit",
                    applied,
                    "Submission completed"
                );
                ftui::Cmd::none()
            }
            FolioMsg::Resized { .. } | FolioMsg::Tick => ftui::Cmd::none(),
            other if self.detail.is_some() => self.update_detail(other),
            other => self.update_section(other),
        }
    }

    fn view(&self, frame: &mut super::ftui_adapter::Frame) {
        let area = Rect::from_size(frame.buffer.width(), frame.buffer.height());
        if area.is_empty() {
            return;
        }
        Block::new().style(self.palette.root()).render(area, frame);

        let chunks = Flex::vertical()
            .constraints([
                Constraint::Fixed(3),
                Constraint::Min(4),
                Constraint::Fixed(1),
            ])
            .split(area);
        let width = chunks[1].width.saturating_sub(PAGE_PADDING * 2) as usize;

        let page = self
            .boundary
            .render("nav", || Ok(self.nav_pills()))
            .and_then(|pills| self.document(width).map(|doc| (pills, doc)))
            .and_then(|page| match &self.detail {
                Some(open) => self
                    .boundary
                    .render("modal", || Ok(self.detail_lines(&open.viewer)))
                    .map(|modal| (page, Some(modal))),
                None => Ok((page, None)),
            });

        match page {
            Ok(((pills, (lines, anchors)), modal)) => {
                self.render_nav(frame, chunks[0], pills);
                self.render_page(frame, chunks[1], lines, anchors);
                if let (Some(open), Some(modal)) = (&self.detail, modal) {
                    self.render_detail(frame, chunks[1], &open.viewer, modal);
                }
                draw_help_strip(frame, chunks[2], &self.shortcuts(), self.palette);
            }
            Err(Fallback) => {
                Block::new().style(self.palette.root()).render(area, frame);
                self.render_fallback(frame, area);
            }
        }
    }
}

// =========================================================================
// Runner
// =========================================================================

/// Configuration for inline mode.
#[derive(Debug, Clone, Copy)]
pub struct InlineTuiConfig {
    /// Height of the inline UI in terminal rows.
    pub ui_height: u16,
    /// Whether the UI is anchored to the top or bottom of the terminal.
    pub anchor: super::ftui_adapter::UiAnchor,
}

#[derive(Debug, Clone, Default)]
pub struct TuiOptions {
    pub inline: Option<InlineTuiConfig>,
    pub inject_fault: Option<Section>,
}

/// Run the portfolio page on the ftui runtime.
///
/// Fullscreen (alt-screen) by default; with `inline` set, the UI is anchored
/// within the terminal and scrollback is preserved.
pub fn run_tui(catalog: Arc<Catalog>, options: TuiOptions) -> anyhow::Result<()> {
    use super::ftui_adapter::FrameBudgetConfig;

    let model = FolioApp::new(catalog).with_fault(options.inject_fault);
    let budget = FrameBudgetConfig::default();
    info!(
        component = "tui",
        inline = options.inline.is_some(),
        "Starting terminal page"
    );

    if let Some(cfg) = options.inline {
        ftui::App::inline(model, cfg.ui_height)
            .anchor(cfg.anchor)
            .with_mouse()
            .with_budget(budget)
            .run()
            .map_err(|e| anyhow::anyhow!("ftui inline runtime error: {e}"))
    } else {
        ftui::App::fullscreen(model)
            .with_mouse()
            .with_budget(budget)
            .run()
            .map_err(|e| anyhow::anyhow!("ftui runtime error: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CaseStudyImages;
    use crate::ftui_harness::{buffer_to_text, render_model};
    use crate::ui::ftui_adapter::{Event, KeyCode, KeyEvent, Model, Modifiers};

    fn app() -> FolioApp {
        FolioApp::new(Arc::new(Catalog::builtin())).with_year(2024)
    }

    fn screen(app: &FolioApp) -> String {
        buffer_to_text(&render_model(app, 100, 40))
    }

    #[test]
    fn function_keys_click_nav() {
        let msg = FolioMsg::from(Event::Key(KeyEvent::new(KeyCode::F(3))));
        assert_eq!(msg, FolioMsg::NavClicked(Section::Portfolio));
        let msg = FolioMsg::from(Event::Key(
            KeyEvent::new(KeyCode::Char('c')).with_modifiers(Modifiers::CTRL),
        ));
        assert_eq!(msg, FolioMsg::ForceQuit);
        let msg = FolioMsg::from(Event::Key(
            KeyEvent::new(KeyCode::Tab).with_modifiers(Modifiers::SHIFT),
        ));
        assert_eq!(msg, FolioMsg::SectionCycled { delta: -1 });
    }

    #[test]
    fn nav_click_marks_active_and_scrolling_does_not() {
        let mut app = app();
        let _ = screen(&app);
        let _ = app.update(FolioMsg::NavClicked(Section::About));
        assert_eq!(app.nav().active(), Section::About);
        assert_eq!(app.focus(), Section::About);

        let _ = screen(&app);
        let _ = app.update(FolioMsg::Paged { forward: true });
        let _ = app.update(FolioMsg::Scrolled { delta: 3 });
        assert_eq!(app.nav().active(), Section::About);
    }

    #[test]
    fn section_cycling_leaves_nav_indicator() {
        let mut app = app();
        let _ = app.update(FolioMsg::SectionCycled { delta: 1 });
        assert_eq!(app.focus(), Section::About);
        assert_eq!(app.nav().active(), Section::Hero);
    }

    #[test]
    fn hero_buttons_jump_to_work_or_contact() {
        let mut app = app();
        let _ = app.update(FolioMsg::Activate);
        assert_eq!(app.nav().active(), Section::Portfolio);
        assert_eq!(app.focus(), Section::Portfolio);

        let mut app = self::app();
        let _ = app.update(FolioMsg::Horizontal { delta: 1 });
        let _ = app.update(FolioMsg::Activate);
        assert_eq!(app.nav().active(), Section::Contact);
    }

    #[test]
    fn gallery_filter_and_open() {
        let mut app = app();
        let _ = app.update(FolioMsg::NavClicked(Section::Portfolio));
        let _ = app.update(FolioMsg::Horizontal { delta: 1 });
        assert_eq!(app.gallery().active(), Category::Logo);
        let _ = app.update(FolioMsg::Vertical { delta: 1 });
        let _ = app.update(FolioMsg::Activate);

        let viewer = app.viewer().expect("overlay open");
        assert_eq!(viewer.detail().id, "1");
        assert!(viewer.has_previous_project());
        assert_eq!(app.detail_source(), Some(DetailSource::Gallery));

        let _ = app.update(FolioMsg::TextInput(']'));
        assert_eq!(app.viewer().expect("still open").detail().id, "5");

        let _ = app.update(FolioMsg::Dismiss);
        assert!(app.viewer().is_none());
    }

    #[test]
    fn case_study_overlay_toggles_before_after() {
        let mut app = app();
        let _ = app.update(FolioMsg::NavClicked(Section::CaseStudies));
        let _ = app.update(FolioMsg::Activate);
        let viewer = app.viewer().expect("overlay open");
        assert_eq!(viewer.detail().id, "redkoar");
        let can_toggle = viewer.can_toggle();
        let _ = app.update(FolioMsg::TextInput('b'));
        assert_eq!(
            app.viewer().expect("still open").showing_before_after(),
            can_toggle
        );
        // No project stepping for case studies.
        let _ = app.update(FolioMsg::TextInput(']'));
        assert_eq!(app.viewer().expect("still open").detail().id, "redkoar");
    }

    #[test]
    fn tabs_cycle_with_arrows() {
        let mut app = app();
        let _ = app.update(FolioMsg::NavClicked(Section::CaseStudies));
        let _ = app.update(FolioMsg::Horizontal { delta: 1 });
        assert_eq!(app.tabs().active_key(), "be-masculine");
        let _ = app.update(FolioMsg::Horizontal { delta: 1 });
        assert_eq!(app.tabs().active_key(), "be-masculine");
    }

    #[test]
    fn contact_submission_flow() {
        let mut app = app();
        let _ = app.update(FolioMsg::NavClicked(Section::Contact));
        for c in "Jane".chars() {
            let _ = app.update(FolioMsg::TextInput(c));
        }
        let _ = app.update(FolioMsg::Vertical { delta: 1 });
        for c in "jane@x.com".chars() {
            let _ = app.update(FolioMsg::TextInput(c));
        }
        let _ = app.update(FolioMsg::Vertical { delta: 1 });
        for c in "Hello".chars() {
            let _ = app.update(FolioMsg::TextInput(c));
        }
        let _ = app.update(FolioMsg::Activate);
        assert!(app.form().is_submitting());
        assert!(screen(&app).contains("Sending..."));

        let ticket = app.form().in_flight().expect("in flight");
        let _ = app.update(FolioMsg::SubmissionCompleted {
            ticket,
            outcome: Ok(()),
        });
        assert!(!app.form().is_submitting());
        for field in FormField::ALL {
            assert_eq!(app.form().value(field), "");
        }
        assert!(screen(&app).contains("Thank you for your message!"));

        let _ = app.update(FolioMsg::Dismiss);
        assert_eq!(*app.form().status(), SubmitStatus::None);
    }

    #[test]
    fn empty_form_reports_required_field() {
        let mut app = app();
        let _ = app.update(FolioMsg::NavClicked(Section::Contact));
        let _ = app.update(FolioMsg::SubmitRequested);
        assert_eq!(app.form_error(), Some(&FormError::Required(FormField::Name)));
        assert!(!app.form().is_submitting());
    }

    #[test]
    fn page_renders_sections_and_footer() {
        let mut app = app();
        let text = screen(&app);
        assert!(text.contains("Hi, I'm"));
        assert!(text.contains("F1 Home"));

        let _ = app.update(FolioMsg::NavClicked(Section::Contact));
        let text = screen(&app);
        assert!(text.contains("Get In Touch"));
        assert!(text.contains("2024"));
        assert!(text.contains("All rights reserved."));
    }

    #[test]
    fn injected_fault_shows_only_fallback() {
        let mut app = app().with_fault(Some(Section::About));
        let _ = app.update(FolioMsg::NavClicked(Section::Contact));
        let text = screen(&app);
        assert!(text.contains(FALLBACK_TITLE));
        assert!(text.contains(FALLBACK_BODY));
        assert!(!text.contains("All rights reserved."));
        assert!(!text.contains("F1 Home"));
        assert_eq!(app.fault(), Some(RenderFault::Injected(Section::About)));

        // Stays tripped.
        let _ = app.update(FolioMsg::NavClicked(Section::Hero));
        assert!(screen(&app).contains(FALLBACK_TITLE));
        assert_eq!(app.nav().active(), Section::Contact);
    }

    fn case_study_text(images: CaseStudyImages) -> Vec<String> {
        let mut catalog = Catalog::builtin();
        catalog.case_studies[0].images = images;
        let app = FolioApp::new(Arc::new(catalog));
        app.section_lines(Section::CaseStudies, 80)
            .unwrap()
            .iter()
            .map(|line| line.to_plain_text())
            .collect()
    }

    #[test]
    fn case_study_images_render_independently() {
        let before_only = case_study_text(CaseStudyImages {
            before: Some("https://example.com/before.png".to_string()),
            after: None,
            showcase: Vec::new(),
        });
        assert!(before_only.iter().any(|l| l == "Before & After"));
        assert!(before_only.iter().any(|l| l.starts_with("Before  ")));
        assert!(!before_only.iter().any(|l| l.starts_with("After   ")));
        assert!(!before_only.iter().any(|l| l.starts_with("Project Showcase")));

        let after_only = case_study_text(CaseStudyImages {
            before: None,
            after: Some("https://example.com/after.png".to_string()),
            showcase: vec!["https://example.com/s.png".to_string()],
        });
        assert!(!after_only.iter().any(|l| l.starts_with("Before  ")));
        assert!(after_only.iter().any(|l| l.starts_with("After   ")));
        assert!(after_only.iter().any(|l| l == "Project Showcase (1 images)"));

        let neither = case_study_text(CaseStudyImages::default());
        assert!(!neither.iter().any(|l| l == "Before & After"));
        assert!(!neither.iter().any(|l| l.starts_with("Project Showcase")));
    }

    #[test]
    fn wrapped_rows_fit_display_width() {
        let app = app();
        let mut lines = Vec::new();
        app.wrapped("你好 世界", 5, app.palette.text(), &mut lines);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert!(line.width() <= 5, "row wider than 5 columns");
        }

        let mut lines = Vec::new();
        app.wrapped("", 10, app.palette.text(), &mut lines);
        assert_eq!(lines.len(), 1);
    }
}
