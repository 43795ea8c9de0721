//! CSS generation for the exported page.
//!
//! One inline stylesheet: palette variables, the section layouts, the
//! detail modal and the print sheet. No external CSS is required, so the
//! exported page renders offline.

use super::template::ExportOptions;

/// Site palette.
pub mod palette {
    pub const ACCENT: &str = "#FFD43B";
    pub const ACCENT_HOVER: &str = "#F5C400";
    pub const DARK: &str = "#1E1E1E";
    pub const LIGHT: &str = "#F9F9F9";
    pub const MUTED: &str = "#6B7280";
    pub const BORDER: &str = "#E5E7EB";
    pub const SUCCESS: &str = "#15803D";
    pub const ERROR: &str = "#B91C1C";
}

/// Bundle of CSS styles for the template.
pub struct StyleBundle {
    /// Inline screen CSS
    pub critical_css: String,

    /// Print-specific CSS
    pub print_css: String,
}

pub fn generate_styles(options: &ExportOptions) -> StyleBundle {
    StyleBundle {
        critical_css: generate_critical_css(options),
        print_css: generate_print_css(),
    }
}

fn generate_critical_css(options: &ExportOptions) -> String {
    // The modal only exists when scripts are present to open it.
    let modal_styles = if options.include_scripts {
        MODAL_STYLES
    } else {
        ""
    };

    format!(
        r#"{base_variables}
{reset_and_base}
{nav_styles}
{hero_styles}
{about_styles}
{portfolio_styles}
{case_study_styles}
{contact_styles}
{footer_styles}
{fallback_styles}
{modal_styles}
{responsive}"#,
        base_variables = generate_base_variables(),
        reset_and_base = RESET_AND_BASE,
        nav_styles = NAV_STYLES,
        hero_styles = HERO_STYLES,
        about_styles = ABOUT_STYLES,
        portfolio_styles = PORTFOLIO_STYLES,
        case_study_styles = CASE_STUDY_STYLES,
        contact_styles = CONTACT_STYLES,
        footer_styles = FOOTER_STYLES,
        fallback_styles = FALLBACK_STYLES,
        modal_styles = modal_styles,
        responsive = RESPONSIVE,
    )
}

fn generate_base_variables() -> String {
    format!(
        r#":root {{
    --accent: {accent};
    --accent-hover: {accent_hover};
    --dark: {dark};
    --light: {light};
    --muted: {muted};
    --border: {border};
    --success: {success};
    --error: {error};
    --radius: 12px;
    --shadow: 0 10px 30px rgba(30, 30, 30, 0.08);
    --font: "Inter", system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
}}"#,
        accent = palette::ACCENT,
        accent_hover = palette::ACCENT_HOVER,
        dark = palette::DARK,
        light = palette::LIGHT,
        muted = palette::MUTED,
        border = palette::BORDER,
        success = palette::SUCCESS,
        error = palette::ERROR,
    )
}

const RESET_AND_BASE: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
html { scroll-behavior: smooth; }
body {
    margin: 0;
    font-family: var(--font);
    color: var(--dark);
    background: var(--light);
    line-height: 1.6;
}
img { max-width: 100%; display: block; }
[hidden] { display: none !important; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
.section { padding: 5rem 0; scroll-margin-top: 4.5rem; }
.section-title { font-size: 2.25rem; margin: 0 0 0.5rem; text-align: center; }
.section-title .accent { color: var(--accent); }
.section-lead { color: var(--muted); text-align: center; max-width: 42rem; margin: 0 auto 3rem; }
.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem 1.5rem;
    border-radius: 999px;
    border: 2px solid var(--accent);
    background: var(--accent);
    color: var(--dark);
    font-weight: 600;
    text-decoration: none;
    cursor: pointer;
}
.btn:hover { background: var(--accent-hover); }
.btn-outline { background: transparent; border-color: var(--dark); }
.btn:disabled { opacity: 0.6; cursor: progress; }
.tag {
    display: inline-block;
    padding: 0.2rem 0.6rem;
    margin: 0 0.35rem 0.35rem 0;
    border-radius: 999px;
    background: var(--light);
    border: 1px solid var(--border);
    font-size: 0.8rem;
}
"#;

const NAV_STYLES: &str = r#"
.site-nav {
    position: sticky;
    top: 0;
    z-index: 40;
    background: rgba(255, 255, 255, 0.95);
    border-bottom: 1px solid var(--border);
}
.site-nav .container { display: flex; align-items: center; justify-content: space-between; height: 4rem; }
.brand { font-weight: 800; font-size: 1.25rem; color: var(--dark); text-decoration: none; }
.brand span { color: var(--accent); }
.nav-links { display: flex; gap: 1.5rem; list-style: none; margin: 0; padding: 0; }
.nav-links a { color: var(--dark); text-decoration: none; font-weight: 500; padding-bottom: 0.25rem; }
.nav-links a.active { border-bottom: 2px solid var(--accent); }
"#;

const HERO_STYLES: &str = r#"
.hero { background: var(--dark); color: white; }
.hero .container { display: grid; grid-template-columns: 1.2fr 1fr; gap: 3rem; align-items: center; min-height: 80vh; }
.hero h1 { font-size: 3rem; margin: 0 0 1rem; }
.hero h1 .accent { color: var(--accent); }
.hero .headline { font-size: 1.1rem; color: #d1d5db; }
.hero .tagline { color: #9ca3af; }
.hero-actions { display: flex; gap: 1rem; margin-top: 2rem; }
.hero-actions .btn-outline { color: white; border-color: white; }
.hero-portrait img { border-radius: 50%; border: 6px solid var(--accent); aspect-ratio: 1; object-fit: cover; }
"#;

const ABOUT_STYLES: &str = r#"
.about { background: white; }
.about .container { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
.about-image img { border-radius: var(--radius); box-shadow: var(--shadow); }
.skills { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 1.5rem 0; }
.quote { border-left: 4px solid var(--accent); padding-left: 1rem; font-style: italic; }
"#;

const PORTFOLIO_STYLES: &str = r#"
.filters { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.75rem; margin-bottom: 2.5rem; }
.filter-btn {
    padding: 0.5rem 1.25rem;
    border-radius: 999px;
    border: 1px solid var(--border);
    background: white;
    cursor: pointer;
    font-weight: 500;
}
.filter-btn.active { background: var(--accent); border-color: var(--accent); }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1.5rem; }
.card {
    background: white;
    border-radius: var(--radius);
    overflow: hidden;
    box-shadow: var(--shadow);
    cursor: pointer;
    transition: transform 0.2s ease;
}
.card:hover { transform: translateY(-4px); }
.card img { width: 100%; aspect-ratio: 4 / 3; object-fit: cover; }
.card-body { padding: 1rem 1.25rem; }
.card-category { color: var(--muted); font-size: 0.85rem; }
.card h3 { margin: 0.25rem 0 0; font-size: 1.1rem; }
.empty-state { text-align: center; color: var(--muted); padding: 3rem 0; }
"#;

const CASE_STUDY_STYLES: &str = r#"
.case-studies { background: white; }
.tabs { display: flex; justify-content: center; gap: 0.75rem; margin-bottom: 2rem; }
.tab-btn { padding: 0.6rem 1.5rem; border: none; border-radius: 999px; background: var(--light); cursor: pointer; font-weight: 600; }
.tab-btn[aria-selected="true"] { background: var(--accent); }
.case-panel { display: grid; grid-template-columns: 1fr 1fr; gap: 2.5rem; }
.case-panel h3 { margin-top: 0; }
.case-panel h4 { margin-bottom: 0.25rem; }
.before-after { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.before-after figure { margin: 0; }
.before-after figcaption { font-size: 0.85rem; color: var(--muted); margin-top: 0.25rem; }
.showcase { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.75rem; margin-top: 1rem; }
.showcase img { border-radius: 8px; aspect-ratio: 1; object-fit: cover; }
"#;

const CONTACT_STYLES: &str = r#"
.contact .container { display: grid; grid-template-columns: 1fr 1.3fr; gap: 3rem; }
.contact-info ul { list-style: none; padding: 0; }
.contact-info li { margin-bottom: 1rem; }
.contact-info a { color: var(--dark); }
.contact-form { background: white; padding: 2rem; border-radius: var(--radius); box-shadow: var(--shadow); }
.contact-form label { display: block; font-weight: 600; margin-bottom: 0.35rem; }
.contact-form input, .contact-form textarea {
    width: 100%;
    padding: 0.75rem;
    margin-bottom: 1.25rem;
    border: 1px solid var(--border);
    border-radius: 8px;
    font: inherit;
}
.contact-form input:focus, .contact-form textarea:focus { outline: 2px solid var(--accent); }
.form-status { display: flex; justify-content: space-between; gap: 1rem; padding: 0.75rem 1rem; border-radius: 8px; margin-bottom: 1rem; }
.form-status.success { background: #dcfce7; color: var(--success); }
.form-status.error { background: #fee2e2; color: var(--error); }
.form-status button { background: none; border: none; cursor: pointer; font-size: 1.1rem; color: inherit; }
"#;

const FOOTER_STYLES: &str = r#"
.site-footer { background: var(--dark); color: #9ca3af; padding: 2rem 0; text-align: center; }
.site-footer a { color: var(--accent); }
"#;

const FALLBACK_STYLES: &str = r#"
.fallback {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 2rem;
}
.fallback h1 { margin-bottom: 0.5rem; }
.fallback p { color: var(--muted); }
"#;

const MODAL_STYLES: &str = r#"
.modal {
    position: fixed;
    inset: 0;
    z-index: 50;
    background: rgba(0, 0, 0, 0.75);
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1.5rem;
}
.modal-panel {
    background: white;
    border-radius: var(--radius);
    max-width: 960px;
    width: 100%;
    max-height: 90vh;
    overflow-y: auto;
    display: grid;
    grid-template-columns: 1.4fr 1fr;
}
.modal-media { position: relative; background: #111; display: flex; align-items: center; justify-content: center; min-height: 320px; }
.modal-media img { max-height: 70vh; object-fit: contain; }
.modal-compare { display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; padding: 0.5rem; }
.modal-arrow {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    background: rgba(255, 255, 255, 0.85);
    border: none;
    border-radius: 50%;
    width: 2.5rem;
    height: 2.5rem;
    cursor: pointer;
}
.modal-arrow.prev { left: 0.75rem; }
.modal-arrow.next { right: 0.75rem; }
.modal-counter { position: absolute; bottom: 0.75rem; right: 0.75rem; color: white; font-size: 0.85rem; }
.modal-info { padding: 1.75rem; }
.modal-close { float: right; background: none; border: none; font-size: 1.5rem; cursor: pointer; }
.modal-projects { display: flex; justify-content: space-between; gap: 0.5rem; margin-top: 1.5rem; }
"#;

const RESPONSIVE: &str = r#"
@media (max-width: 860px) {
    .hero .container,
    .about .container,
    .contact .container,
    .case-panel,
    .modal-panel { grid-template-columns: 1fr; }
    .nav-links { display: none; }
    .hero h1 { font-size: 2.25rem; }
}
"#;

fn generate_print_css() -> String {
    r#"@page {
    margin: 0.75in;
    size: auto;
}

@media print {
    .site-nav,
    .filters,
    .tabs,
    .contact-form,
    .modal,
    .hero-actions {
        display: none !important;
    }

    .hero {
        background: white !important;
        color: #1e1e1e !important;
    }

    .section {
        padding: 1.5rem 0;
        break-inside: avoid;
    }

    .case-panel[hidden] {
        display: grid !important;
    }
}"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_define_palette_variables() {
        let bundle = generate_styles(&ExportOptions::default());
        assert!(bundle.critical_css.contains("--accent: #FFD43B"));
        assert!(bundle.critical_css.contains("--dark: #1E1E1E"));
        assert!(bundle.critical_css.contains("--light: #F9F9F9"));
    }

    #[test]
    fn modal_styles_follow_scripts() {
        let with = generate_styles(&ExportOptions::default());
        assert!(with.critical_css.contains(".modal-panel"));

        let without = generate_styles(&ExportOptions {
            include_scripts: false,
            ..ExportOptions::default()
        });
        assert!(!without.critical_css.contains(".modal-panel"));
        assert!(without.critical_css.contains(".fallback"));
    }

    #[test]
    fn print_css_hides_interactive_parts() {
        let bundle = generate_styles(&ExportOptions::default());
        assert!(bundle.print_css.contains(".contact-form"));
        assert!(bundle.print_css.contains("display: none !important"));
    }
}
