use super::{Color, TextStyle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub text_style: TextStyle,
    /// `None` is fully opaque.
    pub opacity: Option<f32>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Present in the tree but not painted.
    pub fn transparent(self) -> Self {
        self.opacity(0.0)
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity.is_some_and(|o| o <= 0.0)
    }

    /// Layer `other` on top of `self`; set fields of `other` win.
    pub fn merge(mut self, other: &Style) -> Self {
        if other.background.is_some() {
            self.background = other.background.clone();
        }
        if other.foreground.is_some() {
            self.foreground = other.foreground.clone();
        }
        if other.opacity.is_some() {
            self.opacity = other.opacity;
        }
        let t = &mut self.text_style;
        t.bold |= other.text_style.bold;
        t.italic |= other.text_style.italic;
        t.underline |= other.text_style.underline;
        t.dim |= other.text_style.dim;
        t.strikethrough |= other.text_style.strikethrough;
        self
    }
}
