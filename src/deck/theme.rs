//! Palette, type sizes and slide geometry of the demo deck.

use crate::common::RGBColor;
use crate::ooxml::pptx::Rect;

pub const PRIMARY: RGBColor = RGBColor::new(59, 130, 246);
pub const SECONDARY: RGBColor = RGBColor::new(16, 185, 129);
pub const ACCENT: RGBColor = RGBColor::new(249, 115, 22);
pub const DARK: RGBColor = RGBColor::new(15, 23, 42);
pub const LIGHT: RGBColor = RGBColor::new(241, 245, 249);
pub const WHITE: RGBColor = RGBColor::WHITE;

// Title slide
pub const COVER_TITLE_SIZE: f64 = 60.0;
pub const COVER_SUBTITLE_SIZE: f64 = 28.0;

// Content and two-column slides
pub const TITLE_SIZE: f64 = 44.0;
pub const BODY_SIZE: f64 = 18.0;
pub const BODY_SPACING: f64 = 6.0;
pub const COLUMN_SIZE: f64 = 16.0;
pub const COLUMN_SPACING: f64 = 4.0;
pub const CAPTION_SIZE: f64 = 14.0;

pub fn cover_title_rect() -> Rect {
    Rect::inches(0.5, 2.5, 9.0, 1.5)
}

pub fn cover_subtitle_rect() -> Rect {
    Rect::inches(0.5, 4.2, 9.0, 2.0)
}

/// Accent bar across the top edge.
pub fn top_bar_rect() -> Rect {
    Rect::inches(0.0, 0.0, 10.0, 0.1)
}

pub fn title_rect() -> Rect {
    Rect::inches(0.5, 0.3, 9.0, 0.8)
}

pub fn body_rect() -> Rect {
    Rect::inches(0.7, 1.3, 8.6, 5.0)
}

pub fn caption_rect() -> Rect {
    Rect::inches(0.7, 6.2, 8.6, 0.9)
}

pub fn left_column_rect() -> Rect {
    Rect::inches(0.5, 1.3, 4.5, 5.8)
}

pub fn right_column_rect() -> Rect {
    Rect::inches(5.2, 1.3, 4.3, 5.8)
}
