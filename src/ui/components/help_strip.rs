//! Contextual help strip rendering.

use ftui::core::geometry::Rect;
use ftui::layout::{Constraint, Flex};
use ftui::text::{Line, Span};
use ftui::widgets::Widget;
use ftui::widgets::paragraph::Paragraph;
use ftui::{Frame, Style};

use super::theme::SitePalette;

/// Render the help strip given a list of (key, label) pairs.
pub fn draw_help_strip(f: &mut Frame, area: Rect, shortcuts: &[(&str, &str)], palette: SitePalette) {
    let spans: Vec<Span> = shortcuts
        .iter()
        .flat_map(|(key, label)| {
            vec![
                Span::styled(
                    format!(" {key} "),
                    Style::new().fg(palette.bg).bg(palette.accent).bold(),
                ),
                Span::styled(format!(" {label}  "), palette.muted()),
            ]
        })
        .collect();

    Paragraph::new(Line::from_spans(spans))
        .style(palette.root())
        .render(area, f);
}

/// Split off a single-line help strip at the bottom of `area`.
pub fn split_help_strip(area: Rect) -> (Rect, Rect) {
    let chunks = Flex::vertical()
        .constraints([Constraint::Min(1), Constraint::Fixed(1)])
        .split(area);
    (chunks[0], chunks[1])
}
