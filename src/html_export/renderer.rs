//! Page to HTML rendering.
//!
//! Each section renders to a fragment through the page's [`ErrorBoundary`].
//! A fault in any part (nav and footer included) replaces the whole body with
//! the fallback panel.
//!
//! # Features
//!
//! - **Static first**: the initial filter and tab are applied server-side
//!   (`hidden` attributes), so the page reads correctly without scripts
//! - **XSS prevention**: all catalog text is escaped
//! - **Accessible**: landmarks, `aria-pressed` filters and `aria-selected` tabs

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, trace};

use super::template::html_escape;
use crate::model::{CaseStudy, Catalog, Category, PortfolioItem, ProjectDetail};
use crate::site::{
    ErrorBoundary, ExtraRoute, FALLBACK_BODY, FALLBACK_TITLE, RenderFault, Route, Section,
};

/// Inputs for one rendered page.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub catalog: &'a Catalog,
    pub category: Category,
    pub tab: &'a str,
    /// Footer copyright year.
    pub year: i32,
    /// Emit the modal shell and project data.
    pub interactive: bool,
    /// Force a render fault in one section.
    pub inject_fault: Option<Section>,
}

/// One independently rendered part of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Nav,
    Section(Section),
    ExtraRoute,
    Footer,
    Modal,
}

impl Part {
    fn name(self) -> &'static str {
        match self {
            Part::Nav => "nav",
            Part::Section(section) => section.id(),
            Part::ExtraRoute => "route",
            Part::Footer => "footer",
            Part::Modal => "modal",
        }
    }
}

fn page_parts(route: &Route) -> Vec<Part> {
    match route {
        Route::Home => std::iter::once(Part::Nav)
            .chain(Section::ALL.into_iter().map(Part::Section))
            .chain([Part::Footer, Part::Modal])
            .collect(),
        Route::Extra(_) => vec![Part::Nav, Part::ExtraRoute, Part::Footer],
    }
}

fn render_part(ctx: &RenderContext<'_>, route: &Route, part: Part) -> Result<String, RenderFault> {
    match (part, route) {
        (Part::Nav, _) => render_nav(ctx, route),
        (Part::Section(Section::Hero), _) => render_hero(ctx),
        (Part::Section(Section::About), _) => render_about(ctx),
        (Part::Section(Section::Portfolio), _) => render_portfolio(ctx),
        (Part::Section(Section::CaseStudies), _) => render_case_studies(ctx),
        (Part::Section(Section::Contact), _) => render_contact(ctx),
        (Part::ExtraRoute, Route::Extra(extra)) => render_extra_route(extra),
        (Part::ExtraRoute, Route::Home) => Err(RenderFault::Missing {
            part: part.name().to_string(),
            what: "an extra route".to_string(),
        }),
        (Part::Footer, _) => render_footer(ctx),
        (Part::Modal, _) => render_modal(ctx),
    }
}

/// Render the `<body>` content for `route`.
pub fn render_body(ctx: &RenderContext<'_>, route: &Route) -> String {
    let started = Instant::now();
    let boundary = ErrorBoundary::new();
    let parts = page_parts(route);

    let mut html = String::with_capacity(64 * 1024);
    for part in &parts {
        match boundary.render(part.name(), || render_part(ctx, route, *part)) {
            Ok(fragment) => {
                html.push_str(&fragment);
                html.push('\n');
            }
            Err(_) => return render_fallback(),
        }
    }

    debug!(
        component = "renderer",
        operation = "render_body_complete",
        parts = parts.len(),
        duration_ms = started.elapsed().as_millis(),
        bytes = html.len(),
        "Page body rendered"
    );
    html
}

/// Static panel shown once the boundary has tripped.
pub fn render_fallback() -> String {
    format!(
        r#"    <main class="fallback" role="alert">
        <h1>{}</h1>
        <p>{}</p>
    </main>
"#,
        html_escape(FALLBACK_TITLE),
        html_escape(FALLBACK_BODY)
    )
}

/// Relative link back to the home document; extra routes live in
/// `<route>/index.html`.
fn home_href(route: &Route) -> String {
    match route {
        Route::Home => String::new(),
        Route::Extra(extra) => {
            let depth = extra.path.split('/').filter(|s| !s.is_empty()).count();
            "../".repeat(depth)
        }
    }
}

pub fn render_nav(ctx: &RenderContext<'_>, route: &Route) -> Result<String, RenderFault> {
    let home = home_href(route);
    let links = Section::ALL
        .iter()
        .map(|section| {
            let active = if *section == Section::Hero {
                r#" class="active""#
            } else {
                ""
            };
            format!(
                r##"<li><a href="{home}#{id}" data-nav="{id}"{active}>{label}</a></li>"##,
                id = section.id(),
                label = section.label(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ");

    let first_name = ctx
        .catalog
        .profile
        .name
        .split_whitespace()
        .next()
        .unwrap_or_default();

    Ok(format!(
        r##"    <nav class="site-nav" aria-label="Primary">
        <div class="container">
            <a class="brand" href="{home}#hero" data-nav="hero">{brand}<span>.</span></a>
            <ul class="nav-links">
                {links}
            </ul>
            <a class="btn" href="{home}#contact" data-nav="contact">Hire Me</a>
        </div>
    </nav>"##,
        home = home,
        brand = html_escape(first_name),
        links = links,
    ))
}

pub fn render_hero(ctx: &RenderContext<'_>) -> Result<String, RenderFault> {
    RenderFault::check_injected(ctx.inject_fault, Section::Hero)?;
    let profile = &ctx.catalog.profile;
    Ok(format!(
        r##"    <header id="hero" class="section hero">
        <div class="container">
            <div>
                <h1>Hi, I'm <span class="accent">{name}</span></h1>
                <p class="headline">{headline}</p>
                <p class="tagline">{tagline}</p>
                <div class="hero-actions">
                    <a class="btn" href="#portfolio" data-nav="portfolio">View My Work</a>
                    <a class="btn btn-outline" href="#contact" data-nav="contact">Hire Me</a>
                </div>
            </div>
            <div class="hero-portrait">
                <img src="{portrait}" alt="{name}">
            </div>
        </div>
    </header>"##,
        name = html_escape(&profile.name),
        headline = html_escape(&profile.headline),
        tagline = html_escape(&profile.tagline),
        portrait = html_escape(&profile.portrait),
    ))
}

pub fn render_about(ctx: &RenderContext<'_>) -> Result<String, RenderFault> {
    RenderFault::check_injected(ctx.inject_fault, Section::About)?;
    let profile = &ctx.catalog.profile;
    let paragraphs: String = profile
        .about
        .iter()
        .map(|p| format!("<p>{}</p>", html_escape(p)))
        .collect::<Vec<_>>()
        .join("\n                ");
    let skills: String = profile
        .skills
        .iter()
        .map(|s| format!(r#"<span class="tag">{}</span>"#, html_escape(s)))
        .collect::<Vec<_>>()
        .join("");

    Ok(format!(
        r#"    <section id="about" class="section about">
        <div class="container">
            <div class="about-image">
                <img src="{image}" alt="About {name}" loading="lazy">
            </div>
            <div>
                <h2 class="section-title">About <span class="accent">Me</span></h2>
                {paragraphs}
                <div class="skills">{skills}</div>
                <blockquote class="quote">"{quote}"</blockquote>
            </div>
        </div>
    </section>"#,
        image = html_escape(&profile.about_image),
        name = html_escape(&profile.name),
        paragraphs = paragraphs,
        skills = skills,
        quote = html_escape(&profile.quote),
    ))
}

pub fn render_portfolio(ctx: &RenderContext<'_>) -> Result<String, RenderFault> {
    RenderFault::check_injected(ctx.inject_fault, Section::Portfolio)?;
    trace!(
        component = "renderer",
        operation = "render_portfolio",
        category = ctx.category.id(),
        items = ctx.catalog.items.len(),
        "Rendering gallery"
    );

    let filters = Category::ALL
        .iter()
        .map(|category| {
            let on = *category == ctx.category;
            format!(
                r#"<button type="button" class="filter-btn{active}" data-filter="{id}" aria-pressed="{on}">{label}</button>"#,
                active = if on { " active" } else { "" },
                id = category.id(),
                on = on,
                label = category.label(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ");

    let mut shown = 0usize;
    let cards = ctx
        .catalog
        .items
        .iter()
        .map(|item| {
            let visible = ctx.category.admits(item.category);
            if visible {
                shown += 1;
            }
            render_card(item, visible)
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!(
        r#"    <section id="portfolio" class="section portfolio">
        <div class="container">
            <h2 class="section-title">My <span class="accent">Portfolio</span></h2>
            <p class="section-lead">A selection of branding, video, image and digital design work.</p>
            <div class="filters" role="group" aria-label="Filter projects">
                {filters}
            </div>
            <div class="grid">
{cards}
            </div>
            <p id="portfolio-empty" class="empty-state"{empty_hidden}>No projects in this category</p>
        </div>
    </section>"#,
        filters = filters,
        cards = cards,
        empty_hidden = if shown > 0 { " hidden" } else { "" },
    ))
}

fn render_card(item: &PortfolioItem, visible: bool) -> String {
    format!(
        r#"                <article class="card" data-id="{id}" data-category="{category}" tabindex="0"{hidden}>
                    <img src="{image}" alt="{title}" loading="lazy">
                    <div class="card-body">
                        <span class="card-category">{label}</span>
                        <h3>{title}</h3>
                    </div>
                </article>"#,
        id = html_escape(&item.id),
        category = item.category.id(),
        hidden = if visible { "" } else { " hidden" },
        image = html_escape(&item.image),
        title = html_escape(&item.title),
        label = item.category.label(),
    )
}

pub fn render_case_studies(ctx: &RenderContext<'_>) -> Result<String, RenderFault> {
    RenderFault::check_injected(ctx.inject_fault, Section::CaseStudies)?;
    if ctx.catalog.case_study(ctx.tab).is_none() {
        return Err(RenderFault::Missing {
            part: Section::CaseStudies.id().to_string(),
            what: format!("case study '{}'", ctx.tab),
        });
    }

    let tabs = ctx
        .catalog
        .case_studies
        .iter()
        .map(|study| {
            format!(
                r#"<button type="button" class="tab-btn" role="tab" data-tab="{key}" aria-selected="{on}">{title}</button>"#,
                key = html_escape(&study.key),
                on = study.key == ctx.tab,
                title = html_escape(&study.title),
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ");

    let panels = ctx
        .catalog
        .case_studies
        .iter()
        .map(|study| render_case_panel(study, study.key == ctx.tab, ctx.interactive))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!(
        r#"    <section id="case-studies" class="section case-studies">
        <div class="container">
            <h2 class="section-title">Case <span class="accent">Studies</span></h2>
            <div class="tabs" role="tablist">
                {tabs}
            </div>
{panels}
        </div>
    </section>"#,
        tabs = tabs,
        panels = panels,
    ))
}

fn render_case_panel(study: &CaseStudy, active: bool, interactive: bool) -> String {
    let tools = study
        .tools
        .iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, html_escape(t)))
        .collect::<Vec<_>>()
        .join("");

    let mut figures = Vec::new();
    if let Some(before) = &study.images.before {
        figures.push(format!(
            r#"<figure><img src="{}" alt="Before" loading="lazy"><figcaption>Before</figcaption></figure>"#,
            html_escape(before)
        ));
    }
    if let Some(after) = &study.images.after {
        figures.push(format!(
            r#"<figure><img src="{}" alt="After" loading="lazy"><figcaption>After</figcaption></figure>"#,
            html_escape(after)
        ));
    }
    let before_after = if figures.is_empty() {
        String::new()
    } else {
        format!(
            r#"<h4>Before &amp; After</h4>
                    <div class="before-after">{}</div>"#,
            figures.join("")
        )
    };

    let showcase = if study.images.showcase.is_empty() {
        String::new()
    } else {
        format!(
            r#"<h4>Project Showcase</h4>
                    <div class="showcase">{}</div>"#,
            study
                .images
                .showcase
                .iter()
                .map(|src| format!(r#"<img src="{}" alt="" loading="lazy">"#, html_escape(src)))
                .collect::<Vec<_>>()
                .join("")
        )
    };

    let details_button = if interactive {
        format!(
            r#"<button type="button" class="btn" data-case-open="{}">View Project Details</button>"#,
            html_escape(&study.key)
        )
    } else {
        String::new()
    };

    format!(
        r#"            <article class="case-panel" role="tabpanel" data-tab="{key}"{hidden}>
                <div>
                    <h3>{title}</h3>
                    <p class="card-category">{client}</p>
                    <h4>Overview</h4>
                    <p>{description}</p>
                    <h4>Challenge</h4>
                    <p>{challenge}</p>
                    <h4>Solution</h4>
                    <p>{solution}</p>
                    <h4>Results</h4>
                    <p>{results}</p>
                    <h4>Tools Used</h4>
                    <div>{tools}</div>
                    {details_button}
                </div>
                <div>
                    {before_after}
                    {showcase}
                </div>
            </article>"#,
        key = html_escape(&study.key),
        hidden = if active { "" } else { " hidden" },
        title = html_escape(&study.title),
        client = html_escape(&study.client),
        description = html_escape(&study.description),
        challenge = html_escape(&study.challenge),
        solution = html_escape(&study.solution),
        results = html_escape(&study.results),
        tools = tools,
        details_button = details_button,
        before_after = before_after,
        showcase = showcase,
    )
}

pub fn render_contact(ctx: &RenderContext<'_>) -> Result<String, RenderFault> {
    RenderFault::check_injected(ctx.inject_fault, Section::Contact)?;
    let contact = &ctx.catalog.contact;
    Ok(format!(
        r#"    <section id="contact" class="section contact">
        <div class="container">
            <div class="contact-info">
                <h2 class="section-title">Get In <span class="accent">Touch</span></h2>
                <p>Have a project in mind? Let's create something amazing together.</p>
                <ul>
                    <li><strong>Email</strong><br><a href="{mailto}">{email}</a></li>
                    <li><strong>Phone</strong><br><a href="{tel}">{phone}</a></li>
                    <li><strong>Location</strong><br>{location}</li>
                    <li><strong>LinkedIn</strong><br><a href="{linkedin_url}" target="_blank" rel="noopener">{linkedin}</a></li>
                    <li><strong>Instagram</strong><br><a href="{instagram_url}" target="_blank" rel="noopener">{instagram}</a></li>
                </ul>
            </div>
            <form id="contact-form" class="contact-form" novalidate>
                <div id="form-status" class="form-status" role="status" hidden>
                    <span id="form-status-text"></span>
                    <button type="button" id="form-status-dismiss" aria-label="Dismiss">&times;</button>
                </div>
                <label for="contact-name">Name</label>
                <input id="contact-name" name="name" type="text" required>
                <label for="contact-email">Email</label>
                <input id="contact-email" name="email" type="email" required>
                <label for="contact-message">Message</label>
                <textarea id="contact-message" name="message" rows="5" required></textarea>
                <button type="submit" class="btn">Send Message</button>
            </form>
        </div>
    </section>"#,
        mailto = html_escape(&contact.mailto()),
        email = html_escape(&contact.email),
        tel = html_escape(&contact.tel()),
        phone = html_escape(&contact.phone),
        location = html_escape(&contact.location),
        linkedin_url = html_escape(&contact.linkedin_url()),
        linkedin = html_escape(&contact.linkedin),
        instagram_url = html_escape(&contact.instagram_url()),
        instagram = html_escape(&contact.instagram),
    ))
}

pub fn render_footer(ctx: &RenderContext<'_>) -> Result<String, RenderFault> {
    Ok(format!(
        r#"    <footer class="site-footer">
        <div class="container">
            <p>&copy; {year} {name}. All rights reserved.</p>
            <p><a href="{mailto}">{email}</a></p>
        </div>
    </footer>"#,
        year = ctx.year,
        name = html_escape(&ctx.catalog.profile.name),
        mailto = html_escape(&ctx.catalog.contact.mailto()),
        email = html_escape(&ctx.catalog.contact.email),
    ))
}

fn render_extra_route(route: &ExtraRoute) -> Result<String, RenderFault> {
    Ok(format!(
        r#"    <main class="section">
        <div class="container">
            <h1 class="section-title">{title}</h1>
            <p class="section-lead">{body}</p>
            <p style="text-align:center"><a class="btn" href="/">Back to home</a></p>
        </div>
    </main>"#,
        title = html_escape(&route.title),
        body = html_escape(&route.body),
    ))
}

#[derive(Serialize)]
struct ProjectData {
    items: BTreeMap<String, ProjectDetail>,
    cases: BTreeMap<String, ProjectDetail>,
}

/// Modal shell plus the JSON it reads. Empty when the page is static.
fn render_modal(ctx: &RenderContext<'_>) -> Result<String, RenderFault> {
    if !ctx.interactive {
        return Ok(String::new());
    }

    let data = ProjectData {
        items: ctx
            .catalog
            .items
            .iter()
            .map(|item| (item.id.clone(), ProjectDetail::from(item)))
            .collect(),
        cases: ctx
            .catalog
            .case_studies
            .iter()
            .map(|study| (study.key.clone(), ProjectDetail::from(study)))
            .collect(),
    };
    let json = serde_json::to_string(&data).map_err(|e| RenderFault::Missing {
        part: "modal".to_string(),
        what: format!("project data ({e})"),
    })?;

    Ok(format!(
        r#"    <div id="project-modal" class="modal" role="dialog" aria-modal="true" aria-labelledby="modal-title" hidden>
        <div class="modal-panel">
            <div class="modal-media">
                <img id="modal-image" src="" alt="">
                <div id="modal-compare" class="modal-compare" hidden>
                    <figure><img id="modal-before" src="" alt="Before"><figcaption>Before</figcaption></figure>
                    <figure><img id="modal-after" src="" alt="After"><figcaption>After</figcaption></figure>
                </div>
                <button type="button" id="modal-prev-img" class="modal-arrow prev" aria-label="Previous image">&lsaquo;</button>
                <button type="button" id="modal-next-img" class="modal-arrow next" aria-label="Next image">&rsaquo;</button>
                <span id="modal-counter" class="modal-counter"></span>
            </div>
            <div class="modal-info">
                <button type="button" id="modal-close" class="modal-close" aria-label="Close">&times;</button>
                <p id="modal-category" class="card-category"></p>
                <h3 id="modal-title"></h3>
                <p id="modal-client"></p>
                <p id="modal-description"></p>
                <h4>Tools Used</h4>
                <div id="modal-tools"></div>
                <button type="button" id="modal-toggle" class="btn btn-outline" hidden>View Before/After</button>
                <div class="modal-projects">
                    <button type="button" id="modal-prev-project" class="btn btn-outline">Previous Project</button>
                    <button type="button" id="modal-next-project" class="btn btn-outline">Next Project</button>
                </div>
            </div>
        </div>
    </div>
    <script type="application/json" id="project-data">{json}</script>"#,
        json = escape_script_json(&json),
    ))
}

/// Keep embedded JSON from closing its `<script>` element.
fn escape_script_json(json: &str) -> String {
    json.replace("</", "<\\/").replace("<!--", "<\\!--")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CaseStudyImages;

    fn ctx(catalog: &Catalog) -> RenderContext<'_> {
        RenderContext {
            catalog,
            category: Category::All,
            tab: "redkoar",
            year: 2025,
            interactive: true,
            inject_fault: None,
        }
    }

    #[test]
    fn home_renders_every_section_in_order() {
        let catalog = Catalog::builtin();
        let html = render_body(&ctx(&catalog), &Route::Home);
        let positions: Vec<usize> = Section::ALL
            .iter()
            .map(|s| {
                html.find(&format!(r#"id="{}""#, s.id()))
                    .unwrap_or_else(|| panic!("missing section {}", s.id()))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("&copy; 2025 Shahab Uddin. All rights reserved."));
    }

    fn panel_with(images: CaseStudyImages) -> String {
        let mut study = Catalog::builtin().case_studies[0].clone();
        study.images = images;
        render_case_panel(&study, true, true)
    }

    #[test]
    fn case_study_images_render_independently() {
        let before_only = panel_with(CaseStudyImages {
            before: Some("https://example.com/before.png".to_string()),
            after: None,
            showcase: Vec::new(),
        });
        assert!(before_only.contains("Before &amp; After"));
        assert_eq!(before_only.matches("<figure>").count(), 1);
        assert!(before_only.contains("<figcaption>Before</figcaption>"));
        assert!(!before_only.contains("Project Showcase"));

        let after_only = panel_with(CaseStudyImages {
            before: None,
            after: Some("https://example.com/after.png".to_string()),
            showcase: vec!["https://example.com/s.png".to_string()],
        });
        assert_eq!(after_only.matches("<figure>").count(), 1);
        assert!(after_only.contains("<figcaption>After</figcaption>"));
        assert!(after_only.contains("Project Showcase"));

        let neither = panel_with(CaseStudyImages::default());
        assert!(!neither.contains("Before &amp; After"));
        assert!(!neither.contains("<figure>"));
        assert!(!neither.contains("Project Showcase"));
    }

    #[test]
    fn filter_hides_non_matching_cards() {
        let catalog = Catalog::builtin();
        let context = RenderContext {
            category: Category::Video,
            ..ctx(&catalog)
        };
        let html = render_portfolio(&context).unwrap();
        assert!(html.contains(r#"data-id="2" data-category="video" tabindex="0">"#));
        assert!(html.contains(r#"data-id="14" data-category="logo" tabindex="0" hidden>"#));
        assert!(html.contains(r#"data-filter="video" aria-pressed="true""#));
        assert!(html.contains(r#"id="portfolio-empty" class="empty-state" hidden>"#));
    }

    #[test]
    fn empty_filter_shows_empty_state() {
        let mut catalog = Catalog::builtin();
        catalog.items.retain(|i| i.category != Category::Digital);
        let context = RenderContext {
            category: Category::Digital,
            ..ctx(&catalog)
        };
        let html = render_portfolio(&context).unwrap();
        assert!(html.contains(r#"class="empty-state">No projects in this category"#));
    }

    #[test]
    fn only_active_tab_panel_is_visible() {
        let catalog = Catalog::builtin();
        let context = RenderContext {
            tab: "be-masculine",
            ..ctx(&catalog)
        };
        let html = render_case_studies(&context).unwrap();
        assert!(html.contains(r#"data-tab="be-masculine">"#));
        assert!(html.contains(r#"data-tab="redkoar" hidden>"#));
        assert!(html.contains("Before &amp; After"));
        assert!(html.contains("Project Showcase"));
    }

    #[test]
    fn injected_fault_replaces_whole_page() {
        let catalog = Catalog::builtin();
        let context = RenderContext {
            inject_fault: Some(Section::About),
            ..ctx(&catalog)
        };
        let html = render_body(&context, &Route::Home);
        assert!(html.contains(FALLBACK_TITLE));
        assert!(html.contains(FALLBACK_BODY));
        assert!(!html.contains("site-footer"));
        assert!(!html.contains("site-nav"));
    }

    #[test]
    fn unknown_tab_trips_boundary() {
        let catalog = Catalog::builtin();
        let context = RenderContext {
            tab: "missing",
            ..ctx(&catalog)
        };
        let html = render_body(&context, &Route::Home);
        assert!(html.contains(FALLBACK_TITLE));
    }

    #[test]
    fn catalog_text_is_escaped() {
        let mut catalog = Catalog::builtin();
        catalog.items[0].title = "<script>alert(1)</script>".to_string();
        let html = render_body(&ctx(&catalog), &Route::Home);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn static_page_omits_modal() {
        let catalog = Catalog::builtin();
        let context = RenderContext {
            interactive: false,
            ..ctx(&catalog)
        };
        let html = render_body(&context, &Route::Home);
        assert!(!html.contains("project-modal"));
        assert!(!html.contains("data-case-open"));
    }

    #[test]
    fn extra_route_keeps_shell() {
        let catalog = Catalog::builtin();
        let route = Route::Extra(ExtraRoute {
            path: "/storyboard".into(),
            title: "Storyboard".into(),
            body: "Previews".into(),
        });
        let html = render_body(&ctx(&catalog), &route);
        assert!(html.contains("Storyboard"));
        assert!(html.contains("site-nav"));
        assert!(html.contains("site-footer"));
        assert!(!html.contains(r#"id="portfolio""#));
    }

    #[test]
    fn section_links_are_relative() {
        let catalog = Catalog::builtin();
        let home = render_body(&ctx(&catalog), &Route::Home);
        assert!(home.contains(r##"href="#portfolio""##));
        assert!(!home.contains(r##"href="/#"##));

        let route = Route::Extra(ExtraRoute {
            path: "/work/storyboard".into(),
            title: "Storyboard".into(),
            body: String::new(),
        });
        let html = render_body(&ctx(&catalog), &route);
        assert!(html.contains(r##"href="../../#contact""##));
    }
}
