use eframe::egui::{self, Color32};

// ---------------------------------------------------------------------------
// Dracula palette
// ---------------------------------------------------------------------------

/// An sRGB colour usable both by egui and in SVG markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn color32(self) -> Color32 {
        Color32::from_rgb(self.0, self.1, self.2)
    }

    /// `#rrggbb`
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

pub const BACKGROUND: Rgb = Rgb(0x28, 0x2a, 0x36);
pub const PANEL: Rgb = Rgb(0x21, 0x22, 0x2c);
pub const SELECTION: Rgb = Rgb(0x44, 0x47, 0x5a);
pub const FOREGROUND: Rgb = Rgb(0xf8, 0xf8, 0xf2);
pub const COMMENT: Rgb = Rgb(0x62, 0x72, 0xa4);
pub const RED: Rgb = Rgb(0xff, 0x55, 0x55);
pub const PINK: Rgb = Rgb(0xff, 0x79, 0xc6);
pub const PURPLE: Rgb = Rgb(0xbd, 0x93, 0xf9);
pub const GREEN: Rgb = Rgb(0x50, 0xfa, 0x7b);

/// Dark visuals with the palette's panel and window fills.
pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = PANEL.color32();
    visuals.window_fill = BACKGROUND.color32();
    visuals.extreme_bg_color = BACKGROUND.color32();
    visuals.override_text_color = Some(FOREGROUND.color32());
    visuals.selection.bg_fill = PURPLE.color32();
    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(PINK.hex(), "#ff79c6");
        assert_eq!(Rgb(0, 10, 255).hex(), "#000aff");
    }

    #[test]
    fn color32_keeps_channels() {
        assert_eq!(GREEN.color32(), Color32::from_rgb(0x50, 0xfa, 0x7b));
    }
}
