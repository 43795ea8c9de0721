//! Theme definitions.

use ftui::Style;
use ftui::render::cell::PackedRgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SitePalette {
    /// Brand yellow.
    pub accent: PackedRgba,
    pub bg: PackedRgba,
    pub fg: PackedRgba,
    pub surface: PackedRgba,
    pub hint: PackedRgba,
    pub success: PackedRgba,
    pub error: PackedRgba,
}

impl SitePalette {
    pub fn dark() -> Self {
        Self {
            accent: PackedRgba::rgb(0xFF, 0xD4, 0x3B),
            bg: PackedRgba::rgb(0x1E, 0x1E, 0x1E),
            fg: PackedRgba::rgb(0xF9, 0xF9, 0xF9),
            surface: PackedRgba::rgb(0x2A, 0x2A, 0x2A),
            hint: PackedRgba::rgb(0x9C, 0xA3, 0xAF),
            success: PackedRgba::rgb(0x4A, 0xDE, 0x80),
            error: PackedRgba::rgb(0xF8, 0x71, 0x71),
        }
    }

    pub fn root(self) -> Style {
        Style::new().fg(self.fg).bg(self.bg)
    }

    pub fn text(self) -> Style {
        Style::new().fg(self.fg)
    }

    pub fn muted(self) -> Style {
        Style::new().fg(self.hint)
    }

    pub fn heading(self) -> Style {
        Style::new().fg(self.accent).bold()
    }

    /// Selected pill / tab / nav entry.
    pub fn selected(self) -> Style {
        Style::new().fg(self.bg).bg(self.accent).bold()
    }

    pub fn chip(self) -> Style {
        Style::new().fg(self.fg).bg(self.surface)
    }

    pub fn border(self) -> Style {
        Style::new().fg(self.accent).bg(self.bg)
    }

    pub fn success(self) -> Style {
        Style::new().fg(self.success).bold()
    }

    pub fn error(self) -> Style {
        Style::new().fg(self.error).bold()
    }
}

impl Default for SitePalette {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_is_brand_yellow() {
        let palette = SitePalette::default();
        assert_eq!(palette.accent, PackedRgba::rgb(255, 212, 59));
        assert_eq!(palette.bg, PackedRgba::rgb(30, 30, 30));
    }
}
