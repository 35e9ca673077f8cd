//! The application palette, resolved to concrete colors up front.

use tabular::TableStyle;
use termbuf::Rgb;

/// Named color roles for the dashboard. Built once from OKLCH
/// coordinates so related roles share lightness and hue.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Rgb,
    pub surface: Rgb,
    pub border: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub primary: Rgb,
    pub accent: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub danger: Rgb,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Rgb::oklch(0.18, 0.02, 285.0),
            surface: Rgb::oklch(0.24, 0.03, 285.0),
            border: Rgb::oklch(0.35, 0.03, 285.0),
            text: Rgb::oklch(0.90, 0.02, 285.0),
            muted: Rgb::oklch(0.62, 0.03, 285.0),
            primary: Rgb::oklch(0.72, 0.14, 300.0),
            accent: Rgb::oklch(0.72, 0.11, 250.0),
            success: Rgb::oklch(0.76, 0.13, 155.0),
            warning: Rgb::oklch(0.80, 0.12, 80.0),
            danger: Rgb::oklch(0.64, 0.18, 20.0),
        }
    }

    /// Table colors derived from the palette.
    pub fn table_style(&self) -> TableStyle {
        TableStyle {
            text: self.text,
            muted: self.muted,
            header_fg: self.text,
            header_bg: self.surface,
            cursor_fg: self.background,
            cursor_bg: self.primary,
            accent: self.accent,
            search_bg: self.surface,
        }
    }
}
