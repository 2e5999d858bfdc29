//! Format types for PPTX text and shape geometry.

use crate::common::RGBColor;
use crate::common::unit::inches_to_emu;

/// Position and size of a shape in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from inch measurements.
    pub fn inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            inches_to_emu(x),
            inches_to_emu(y),
            inches_to_emu(width),
            inches_to_emu(height),
        )
    }
}

/// Run-level text formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font size in points
    pub size: Option<f64>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub color: Option<RGBColor>,
}

impl TextFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, points: f64) -> Self {
        self.size = Some(points);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Value of `a:pPr/@algn`.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Alignment::Left => "l",
            Alignment::Center => "ctr",
            Alignment::Right => "r",
            Alignment::Justify => "just",
        }
    }
}

/// Paragraph-level formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParagraphFormat {
    pub alignment: Option<Alignment>,
    /// Space before the paragraph, in points
    pub space_before: Option<f64>,
    /// Space after the paragraph, in points
    pub space_after: Option<f64>,
    /// Outline level (0-8)
    pub level: u8,
}

impl ParagraphFormat {
    pub fn aligned(alignment: Alignment) -> Self {
        Self {
            alignment: Some(alignment),
            ..Self::default()
        }
    }

    /// Same spacing before and after.
    pub fn spaced(points: f64) -> Self {
        Self {
            space_before: Some(points),
            space_after: Some(points),
            ..Self::default()
        }
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level.min(8);
        self
    }
}

/// One paragraph of a text frame. A `\n` inside `text` is a line break.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub text_format: TextFormat,
    pub paragraph_format: ParagraphFormat,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, text_format: TextFormat) -> Self {
        Self {
            text: text.into(),
            text_format,
            paragraph_format: ParagraphFormat::default(),
        }
    }

    pub fn with_format(mut self, paragraph_format: ParagraphFormat) -> Self {
        self.paragraph_format = paragraph_format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_inches() {
        let rect = Rect::inches(0.5, 2.5, 9.0, 1.5);
        assert_eq!(rect, Rect::new(457_200, 2_286_000, 8_229_600, 1_371_600));
    }

    #[test]
    fn test_builders() {
        let format = TextFormat::new().size(18.0).bold().color(RGBColor::WHITE);
        assert_eq!(format.size, Some(18.0));
        assert_eq!(format.bold, Some(true));
        assert_eq!(format.italic, None);

        let para = ParagraphFormat::spaced(6.0).level(12);
        assert_eq!(para.space_after, Some(6.0));
        assert_eq!(para.level, 8);
        assert_eq!(Alignment::Center.as_attr(), "ctr");
    }
}
