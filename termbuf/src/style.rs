use palette::{IntoColor, Oklch, Srgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from OKLCH coordinates (perceptual lightness,
    /// chroma, hue in degrees).
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        let oklch = Oklch::new(l, c, h);
        let srgb: Srgb = oklch.into_color();
        let (r, g, b) = srgb.into_format::<u8>().into_components();
        Self::new(r, g, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            dim: false,
            italic: false,
            underline: false,
        }
    }
}

/// How text is painted into the buffer. `None` color components leave
/// whatever is already in the cell untouched, so a row background can be
/// filled first and text layered on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub text: TextStyle,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            text: TextStyle::new(),
        }
    }

    pub const fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    pub const fn bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.text.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.text.dim = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.text.italic = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.text.underline = true;
        self
    }
}

/// A styled fragment of single-line text.
#[derive(Debug, Clone, Default)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::new(),
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

impl From<String> for Span {
    fn from(text: String) -> Self {
        Self::raw(text)
    }
}

impl From<&str> for Span {
    fn from(text: &str) -> Self {
        Self::raw(text)
    }
}
