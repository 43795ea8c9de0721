//! JavaScript generation for the exported page.
//!
//! Generates inline JavaScript for:
//! - Gallery filter buttons
//! - Case-study tabs
//! - Detail modal (paged images, before/after, previous/next project)
//! - Nav clicks (smooth scroll + active indicator, no scroll-spy)
//! - Contact form with the simulated delayed submit
//!
//! Everything degrades to the static markup when scripts are disabled.

use super::template::ExportOptions;
use crate::site::{SUBMIT_DELAY, SUCCESS_MESSAGE};

/// Bundle of JavaScript for the template.
pub struct ScriptBundle {
    /// Inline JavaScript to include in the document
    pub inline_js: String,
}

pub fn generate_scripts(options: &ExportOptions) -> ScriptBundle {
    if !options.include_scripts {
        return ScriptBundle {
            inline_js: String::new(),
        };
    }

    let scripts = [
        generate_core_utils(),
        generate_nav_js(),
        generate_filter_js(),
        generate_tabs_js(),
        generate_modal_js(),
        generate_contact_js(),
        generate_init_js(),
    ];

    ScriptBundle {
        inline_js: scripts.join("\n\n"),
    }
}

fn generate_core_utils() -> String {
    r#"// Core utilities
const $ = (sel, root = document) => root.querySelector(sel);
const $$ = (sel, root = document) => Array.from(root.querySelectorAll(sel));"#
        .to_string()
}

fn generate_nav_js() -> String {
    r#"// Nav: clicks scroll and mark active; scrolling never changes the indicator
const Nav = {
    init() {
        $$('[data-nav]').forEach((link) => {
            link.addEventListener('click', (e) => {
                const id = link.dataset.nav;
                const target = document.getElementById(id);
                if (!target) return;
                e.preventDefault();
                this.setActive(id);
                target.scrollIntoView({ behavior: 'smooth' });
            });
        });
    },

    setActive(id) {
        $$('.nav-links a').forEach((a) => {
            a.classList.toggle('active', a.dataset.nav === id);
        });
    }
};"#
    .to_string()
}

fn generate_filter_js() -> String {
    r#"// Gallery filter
const Filter = {
    init() {
        $$('.filter-btn').forEach((btn) => {
            btn.addEventListener('click', () => this.select(btn.dataset.filter));
        });
    },

    select(category) {
        $$('.filter-btn').forEach((btn) => {
            const on = btn.dataset.filter === category;
            btn.classList.toggle('active', on);
            btn.setAttribute('aria-pressed', on ? 'true' : 'false');
        });
        let shown = 0;
        $$('.card').forEach((card) => {
            const visible = category === 'all' || card.dataset.category === category;
            card.hidden = !visible;
            if (visible) shown += 1;
        });
        const empty = $('#portfolio-empty');
        if (empty) empty.hidden = shown > 0;
    }
};"#
    .to_string()
}

fn generate_tabs_js() -> String {
    r#"// Case-study tabs
const Tabs = {
    init() {
        $$('.tab-btn').forEach((btn) => {
            btn.addEventListener('click', () => this.select(btn.dataset.tab));
        });
    },

    select(key) {
        if (!$(`.case-panel[data-tab="${key}"]`)) return;
        $$('.tab-btn').forEach((btn) => {
            btn.setAttribute('aria-selected', btn.dataset.tab === key ? 'true' : 'false');
        });
        $$('.case-panel').forEach((panel) => {
            panel.hidden = panel.dataset.tab !== key;
        });
    }
};"#
    .to_string()
}

fn generate_modal_js() -> String {
    r#"// Detail modal
const Modal = {
    data: { items: {}, cases: {} },
    el: null,
    detail: null,
    index: 0,
    compare: false,
    source: null,

    init() {
        const raw = $('#project-data');
        if (raw) this.data = JSON.parse(raw.textContent);
        this.el = $('#project-modal');
        if (!this.el) return;

        $$('.card').forEach((card) => {
            card.addEventListener('click', () => this.openItem(card.dataset.id));
        });
        $$('[data-case-open]').forEach((btn) => {
            btn.addEventListener('click', () => this.open(this.data.cases[btn.dataset.caseOpen], null));
        });
        $('#modal-close', this.el).addEventListener('click', () => this.close());
        $('#modal-prev-img', this.el).addEventListener('click', () => this.page(-1));
        $('#modal-next-img', this.el).addEventListener('click', () => this.page(1));
        $('#modal-toggle', this.el).addEventListener('click', () => this.toggle());
        $('#modal-prev-project', this.el).addEventListener('click', () => this.step(-1));
        $('#modal-next-project', this.el).addEventListener('click', () => this.step(1));
        this.el.addEventListener('click', (e) => {
            if (e.target === this.el) this.close();
        });
        document.addEventListener('keydown', (e) => {
            if (this.el.hidden) return;
            if (e.key === 'Escape') this.close();
            if (e.key === 'ArrowLeft') this.page(-1);
            if (e.key === 'ArrowRight') this.page(1);
        });
    },

    visibleCards() {
        return $$('.card').filter((card) => !card.hidden);
    },

    openItem(id) {
        this.open(this.data.items[id], id);
    },

    open(detail, sourceId) {
        if (!detail) return;
        this.detail = detail;
        this.source = sourceId;
        this.index = 0;
        this.compare = false;
        this.el.hidden = false;
        this.render();
    },

    close() {
        this.el.hidden = true;
        this.detail = null;
        this.source = null;
    },

    page(delta) {
        if (!this.detail) return;
        const next = this.index + delta;
        if (next < 0 || next >= this.detail.images.length) return;
        this.index = next;
        this.render();
    },

    toggle() {
        if (!this.detail || this.detail.before_after.length === 0) return;
        this.compare = !this.compare;
        this.render();
    },

    neighbours() {
        if (this.source === null) return { prev: null, next: null };
        const cards = this.visibleCards();
        const pos = cards.findIndex((card) => card.dataset.id === this.source);
        return {
            prev: pos > 0 ? cards[pos - 1].dataset.id : null,
            next: pos >= 0 && pos + 1 < cards.length ? cards[pos + 1].dataset.id : null
        };
    },

    step(delta) {
        const n = this.neighbours();
        const target = delta < 0 ? n.prev : n.next;
        if (target !== null) this.openItem(target);
    },

    render() {
        const d = this.detail;
        const media = $('#modal-image', this.el);
        const compare = $('#modal-compare', this.el);
        if (this.compare && d.before_after.length > 0) {
            const pair = d.before_after[0];
            $('#modal-before', this.el).src = pair.before;
            $('#modal-after', this.el).src = pair.after;
            media.hidden = true;
            compare.hidden = false;
        } else {
            media.src = d.images[this.index] || '';
            media.alt = d.title;
            media.hidden = false;
            compare.hidden = true;
        }
        const multi = d.images.length > 1 && !this.compare;
        $('#modal-prev-img', this.el).hidden = !multi || this.index === 0;
        $('#modal-next-img', this.el).hidden = !multi || this.index === d.images.length - 1;
        $('#modal-counter', this.el).textContent = multi ? `${this.index + 1} / ${d.images.length}` : '';

        $('#modal-title', this.el).textContent = d.title;
        $('#modal-category', this.el).textContent = d.category;
        $('#modal-description', this.el).textContent = d.description;
        $('#modal-client', this.el).textContent = d.client ? `Client: ${d.client}` : '';
        const tools = $('#modal-tools', this.el);
        tools.replaceChildren(...d.tools.map((t) => {
            const span = document.createElement('span');
            span.className = 'tag';
            span.textContent = t;
            return span;
        }));

        const toggle = $('#modal-toggle', this.el);
        toggle.hidden = d.before_after.length === 0;
        toggle.textContent = this.compare ? 'View Normal' : 'View Before/After';

        const n = this.neighbours();
        $('#modal-prev-project', this.el).hidden = n.prev === null;
        $('#modal-next-project', this.el).hidden = n.next === null;
    }
};"#
    .to_string()
}

fn generate_contact_js() -> String {
    let success = serde_json::to_string(SUCCESS_MESSAGE).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"// Contact form: simulated submission
const Contact = {{
    delayMs: {delay_ms},
    successMessage: {success},
    submitting: false,
    seq: 0,

    init() {{
        const form = $('#contact-form');
        if (!form) return;
        form.addEventListener('submit', (e) => {{
            e.preventDefault();
            this.submit(form);
        }});
        const dismiss = $('#form-status-dismiss');
        if (dismiss) dismiss.addEventListener('click', () => this.showStatus(null));
    }},

    submit(form) {{
        if (this.submitting || !form.reportValidity()) return;
        this.submitting = true;
        const ticket = ++this.seq;
        const button = $('button[type="submit"]', form);
        button.disabled = true;
        button.textContent = 'Sending...';
        setTimeout(() => {{
            if (ticket !== this.seq) return;
            this.submitting = false;
            form.reset();
            button.disabled = false;
            button.textContent = 'Send Message';
            this.showStatus('success', this.successMessage);
        }}, this.delayMs);
    }},

    showStatus(kind, message) {{
        const status = $('#form-status');
        if (!status) return;
        if (!kind) {{
            status.hidden = true;
            return;
        }}
        status.className = `form-status ${{kind}}`;
        $('#form-status-text').textContent = message;
        status.hidden = false;
    }}
}};"#,
        delay_ms = SUBMIT_DELAY.as_millis(),
        success = success,
    )
}

fn generate_init_js() -> String {
    r#"// Initialize on DOM ready
document.addEventListener('DOMContentLoaded', () => {
    Nav.init();
    Filter.init();
    Tabs.init();
    Modal.init();
    Contact.init();
});"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts_include_every_behaviour() {
        let bundle = generate_scripts(&ExportOptions::default());
        for name in ["const Nav", "const Filter", "const Tabs", "const Modal", "const Contact"] {
            assert!(bundle.inline_js.contains(name), "missing {name}");
        }
        assert!(bundle.inline_js.contains("Contact.init()"));
    }

    #[test]
    fn contact_script_uses_fixed_delay_and_message() {
        let bundle = generate_scripts(&ExportOptions::default());
        assert!(bundle.inline_js.contains("delayMs: 1500"));
        assert!(bundle
            .inline_js
            .contains("Thank you for your message! I'll get back to you soon."));
        assert!(bundle.inline_js.contains("'Sending...'"));
    }

    #[test]
    fn disabled_scripts_produce_nothing() {
        let bundle = generate_scripts(&ExportOptions {
            include_scripts: false,
            ..ExportOptions::default()
        });
        assert!(bundle.inline_js.is_empty());
    }

    #[test]
    fn nav_script_has_no_scroll_listener() {
        let bundle = generate_scripts(&ExportOptions::default());
        assert!(!bundle.inline_js.contains("addEventListener('scroll'"));
    }
}
