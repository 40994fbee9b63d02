//! Font descriptors used for text measurement

/// Font style (normal, italic, oblique)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

/// Font weight (100-900)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const THIN: FontWeight = FontWeight(100);
    pub const EXTRA_LIGHT: FontWeight = FontWeight(200);
    pub const LIGHT: FontWeight = FontWeight(300);
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const SEMI_BOLD: FontWeight = FontWeight(600);
    pub const BOLD: FontWeight = FontWeight(700);
    pub const EXTRA_BOLD: FontWeight = FontWeight(800);
    pub const BLACK: FontWeight = FontWeight(900);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// A concrete font the measurer lays text out with.
///
/// Unlike a cascading text style every field is resolved: a measurer never
/// has to guess a size or line height.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: Option<String>,
    /// Point size.
    pub size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
    /// Explicit line height; `None` lets the measurer derive one from `size`.
    pub line_height: Option<f32>,
}

impl Font {
    pub fn new(size: f32) -> Self {
        Self {
            family: None,
            size,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
            line_height: None,
        }
    }

    /// Default body font for message text.
    pub fn body() -> Self {
        Self::new(17.0)
    }

    pub fn bold(size: f32) -> Self {
        Self::new(size).with_weight(FontWeight::BOLD)
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = Some(line_height);
        self
    }

    /// The same font at `factor` times the point size.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            size: self.size * factor,
            line_height: self.line_height.map(|height| height * factor),
            ..self.clone()
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::body()
    }
}
