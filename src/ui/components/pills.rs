//! Pill rows: gallery filters, case-study tabs and nav entries.

use ftui::text::Span;

use super::theme::SitePalette;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pill {
    pub label: String,
    /// Shortcut hint shown before the label, if any.
    pub key: Option<String>,
    pub active: bool,
}

impl Pill {
    pub fn new(label: impl Into<String>, active: bool) -> Self {
        Self {
            label: label.into(),
            key: None,
            active,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn text(&self) -> String {
        match &self.key {
            Some(key) => format!(" {key} {} ", self.label),
            None => format!(" {} ", self.label),
        }
    }
}

/// Spans for a row of pills separated by a single space.
pub fn pill_spans(pills: &[Pill], palette: SitePalette) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(pills.len() * 2);
    for (idx, pill) in pills.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if pill.active {
            palette.selected()
        } else {
            palette.chip()
        };
        spans.push(Span::styled(pill.text(), style));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pill_text_includes_key_hint() {
        let pill = Pill::new("Portfolio", true).with_key("F3");
        assert_eq!(pill.text(), " F3 Portfolio ");
        assert_eq!(Pill::new("All Projects", false).text(), " All Projects ");
    }

    #[test]
    fn pill_row_interleaves_separators() {
        let pills = vec![Pill::new("A", true), Pill::new("B", false), Pill::new("C", false)];
        let spans = pill_spans(&pills, SitePalette::default());
        assert_eq!(spans.len(), 5);
    }
}
