//! Lightweight in-repo FTUI test harness.
//!
//! Renders a model into an off-screen buffer and flattens it to text so
//! tests can assert on what the terminal page would show.

use std::fmt::Write as _;

use ftui::render::buffer::Buffer;

/// Comparison mode for screen assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Byte-exact string comparison.
    Exact,
    /// Trim trailing whitespace on each line before comparing.
    TrimTrailing,
}

/// Draw `model` into a fresh `width` x `height` buffer.
pub fn render_model<M: ftui::Model>(model: &M, width: u16, height: u16) -> Buffer {
    let mut pool = ftui::GraphemePool::new();
    let mut frame = ftui::Frame::new(width, height, &mut pool);
    model.view(&mut frame);
    frame.buffer
}

/// Convert a render buffer to plain text.
pub fn buffer_to_text(buf: &Buffer) -> String {
    let capacity = (buf.width() as usize + 1) * buf.height() as usize;
    let mut out = String::with_capacity(capacity);

    for y in 0..buf.height() {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..buf.width() {
            let Some(cell) = buf.get(x, y) else {
                out.push(' ');
                continue;
            };
            if cell.is_continuation() {
                continue;
            }
            if cell.is_empty() {
                out.push(' ');
            } else if let Some(c) = cell.content.as_char() {
                out.push(c);
            } else {
                let w = cell.content.width();
                for _ in 0..w.max(1) {
                    out.push('?');
                }
            }
        }
    }
    out
}

pub fn normalize(text: &str, mode: MatchMode) -> String {
    match mode {
        MatchMode::Exact => text.to_string(),
        MatchMode::TrimTrailing => text
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Simple line-by-line diff; empty when the inputs match.
pub fn diff_text(expected: &str, actual: &str) -> String {
    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();
    let max_lines = expected_lines.len().max(actual_lines.len());
    let mut out = String::new();
    let mut has_diff = false;

    for i in 0..max_lines {
        let exp = expected_lines.get(i).copied();
        let act = actual_lines.get(i).copied();
        match (exp, act) {
            (Some(e), Some(a)) if e == a => {
                writeln!(out, " {e}").expect("write to String");
            }
            (Some(e), Some(a)) => {
                has_diff = true;
                writeln!(out, "-{e}").expect("write to String");
                writeln!(out, "+{a}").expect("write to String");
            }
            (Some(e), None) => {
                has_diff = true;
                writeln!(out, "-{e}").expect("write to String");
            }
            (None, Some(a)) => {
                has_diff = true;
                writeln!(out, "+{a}").expect("write to String");
            }
            (None, None) => {}
        }
    }

    if has_diff { out } else { String::new() }
}

/// Compare two screens under `mode`, returning the diff on mismatch.
pub fn compare_screens(expected: &str, actual: &str, mode: MatchMode) -> Result<(), String> {
    let expected = normalize(expected, mode);
    let actual = normalize(actual, mode);
    if expected == actual {
        Ok(())
    } else {
        Err(diff_text(&expected, &actual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_mode_sees_trailing_spaces() {
        assert!(compare_screens("a b\nc", "a b \nc", MatchMode::TrimTrailing).is_ok());
        assert!(compare_screens("a b", "a b ", MatchMode::Exact).is_err());
    }

    #[test]
    fn trim_trailing_keeps_inner_spacing() {
        assert_eq!(normalize("a  b   \nc ", MatchMode::TrimTrailing), "a  b\nc");
    }

    #[test]
    fn diff_marks_changed_lines() {
        let diff = diff_text("same\nold", "same\nnew");
        assert!(diff.contains("-old"));
        assert!(diff.contains("+new"));
        assert!(diff_text("x", "x").is_empty());
    }

    #[test]
    fn text_matches_buffer_dimensions() {
        let mut pool = ftui::GraphemePool::new();
        let frame = ftui::Frame::new(3, 2, &mut pool);
        let text = buffer_to_text(&frame.buffer);
        let rows: Vec<&str> = text.split('\n').collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.chars().count() == 3));
    }
}
