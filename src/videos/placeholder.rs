//! Text block left on a slide whose video could not be embedded.

use crate::ooxml::pptx::{Paragraph, Rect, TextFormat};
use std::path::Path;

/// Leading text of every placeholder, followed by the file name.
pub const PLACEHOLDER_PREFIX: &str = "🎬 VIDEO: ";

const PLACEHOLDER_SIZE: f64 = 14.0;

/// Area used by both embedded videos and placeholders.
pub fn video_rect() -> Rect {
    Rect::inches(2.0, 1.5, 6.0, 4.0)
}

/// Placeholder text naming the expected file and how to add it by hand.
pub fn placeholder_text(file_name: &str, videos_dir: &Path) -> String {
    format!(
        "{}{}\n\n(Insertar manualmente en PowerPoint:\nInsert → Video → Selecciona archivo)\n\nArchivo: {}/{}",
        PLACEHOLDER_PREFIX,
        file_name,
        videos_dir.display(),
        file_name
    )
}

/// The placeholder as a single bold paragraph; its lines become line breaks.
pub fn placeholder_paragraph(file_name: &str, videos_dir: &Path) -> Paragraph {
    Paragraph::new(
        placeholder_text(file_name, videos_dir),
        TextFormat::new().size(PLACEHOLDER_SIZE).bold(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_lines() {
        let text = placeholder_text("02-login-admin.mp4", Path::new("videos_demo"));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "🎬 VIDEO: 02-login-admin.mp4",
                "",
                "(Insertar manualmente en PowerPoint:",
                "Insert → Video → Selecciona archivo)",
                "",
                "Archivo: videos_demo/02-login-admin.mp4",
            ]
        );
    }

    #[test]
    fn test_placeholder_paragraph_format() {
        let paragraph = placeholder_paragraph("x.mp4", Path::new("v"));
        assert_eq!(paragraph.text_format.size, Some(14.0));
        assert_eq!(paragraph.text_format.bold, Some(true));
        assert_eq!(video_rect(), Rect::new(1_828_800, 1_371_600, 5_486_400, 3_657_600));
    }
}
