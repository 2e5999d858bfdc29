//! Turns slide entries into a presentation.

use crate::common::Result;
use crate::deck::content::{DECK_TITLE, SlideEntry, SlideLayout};
use crate::deck::theme;
use crate::ooxml::pptx::{
    Alignment, MutablePresentation, MutableShape, MutableSlide, Paragraph, ParagraphFormat,
    TextFormat,
};
use log::{debug, info};
use std::path::PathBuf;

/// Default file written by the deck builder.
pub const DEFAULT_OUTPUT: &str = "Turnero_ZS_Presentacion.pptx";

/// Settings for [`DeckBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    /// Destination file; an existing file is overwritten.
    pub output: PathBuf,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Builds the deck, one slide per entry, in entry order.
#[derive(Debug, Clone, Default)]
pub struct DeckBuilder {
    config: DeckConfig,
}

impl DeckBuilder {
    pub fn new(config: DeckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Lay out `entries` without touching the filesystem.
    pub fn build(&self, entries: &[SlideEntry<'_>]) -> MutablePresentation {
        let mut pres = MutablePresentation::new();
        pres.set_title(DECK_TITLE);

        for (index, entry) in entries.iter().enumerate() {
            let slide = pres.add_slide();
            match entry.layout {
                SlideLayout::Title { subtitle } => add_title_slide(slide, entry.title, subtitle),
                SlideLayout::Content { points, video } => {
                    add_content_slide(slide, entry.title, points, video)
                },
                SlideLayout::TwoColumn { left, right } => {
                    add_two_column_slide(slide, entry.title, left, right)
                },
            }
            debug!("slide {}: {}", index, entry.title);
        }

        pres
    }

    /// Build `entries` and write them to the configured output.
    ///
    /// Returns the number of slides written.
    pub fn save(&self, entries: &[SlideEntry<'_>]) -> Result<usize> {
        let pres = self.build(entries);
        info!(
            "writing {} slides to {}",
            pres.slide_count(),
            self.config.output.display()
        );
        pres.save(&self.config.output)?;
        Ok(pres.slide_count())
    }
}

fn add_title_slide(slide: &mut MutableSlide, title: &str, subtitle: &str) {
    slide.set_background(theme::PRIMARY);
    let centered = ParagraphFormat::aligned(Alignment::Center);

    slide.add_text_box(theme::cover_title_rect()).add_paragraph(
        Paragraph::new(
            title,
            TextFormat::new()
                .size(theme::COVER_TITLE_SIZE)
                .bold()
                .color(theme::WHITE),
        )
        .with_format(centered),
    );

    let subtitle_box = slide.add_text_box(theme::cover_subtitle_rect());
    subtitle_box.word_wrap(true);
    for line in subtitle.split('\n') {
        subtitle_box.add_paragraph(
            Paragraph::new(
                line,
                TextFormat::new()
                    .size(theme::COVER_SUBTITLE_SIZE)
                    .color(theme::WHITE),
            )
            .with_format(centered),
        );
    }
}

/// White background, accent bar and title shared by the inner slides.
fn add_header(slide: &mut MutableSlide, title: &str) {
    slide.set_background(theme::WHITE);
    slide
        .add_rectangle(theme::top_bar_rect())
        .fill(theme::PRIMARY)
        .line(theme::PRIMARY);
    slide.add_text_box(theme::title_rect()).add_paragraph(Paragraph::new(
        title,
        TextFormat::new()
            .size(theme::TITLE_SIZE)
            .bold()
            .color(theme::DARK),
    ));
}

fn add_points(shape: &mut MutableShape, points: &[&str], size: f64, spacing: f64) {
    shape.word_wrap(true);
    for point in points {
        shape.add_paragraph(
            Paragraph::new(*point, TextFormat::new().size(size).color(theme::DARK))
                .with_format(ParagraphFormat::spaced(spacing).level(0)),
        );
    }
}

fn add_content_slide(slide: &mut MutableSlide, title: &str, points: &[&str], video: Option<&str>) {
    add_header(slide, title);
    add_points(
        slide.add_text_box(theme::body_rect()),
        points,
        theme::BODY_SIZE,
        theme::BODY_SPACING,
    );

    if let Some(video) = video {
        slide
            .add_text_box(theme::caption_rect())
            .add_paragraph(Paragraph::new(
                format!("📹 Video: {}", video),
                TextFormat::new()
                    .size(theme::CAPTION_SIZE)
                    .italic()
                    .color(theme::SECONDARY),
            ));
    }
}

fn add_two_column_slide(slide: &mut MutableSlide, title: &str, left: &[&str], right: &[&str]) {
    add_header(slide, title);
    for (rect, points) in [
        (theme::left_column_rect(), left),
        (theme::right_column_rect(), right),
    ] {
        add_points(
            slide.add_text_box(rect),
            points,
            theme::COLUMN_SIZE,
            theme::COLUMN_SPACING,
        );
    }
}
