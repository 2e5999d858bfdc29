//! Adds the demo recordings, or placeholders for them, to a built deck.

use crate::common::{Error, Result};
use crate::ooxml::pptx::{Package, VideoClip};
use crate::videos::mapping::VideoSlot;
use crate::videos::placeholder::{placeholder_paragraph, video_rect};
use log::{info, warn};
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "Turnero_ZS_Presentacion.pptx";
pub const DEFAULT_VIDEOS_DIR: &str = "videos_demo";
pub const DEFAULT_SUFFIX: &str = "_con_videos";

/// Settings for [`VideoInserter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertConfig {
    /// Deck to read; never modified.
    pub input: PathBuf,
    /// Directory holding the recordings. Created when absent.
    pub videos_dir: PathBuf,
    /// Appended to the input's file stem to name the output.
    pub suffix: String,
}

impl Default for InsertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            videos_dir: PathBuf::from(DEFAULT_VIDEOS_DIR),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// `<stem><suffix>.<ext>` next to `input`.
///
/// ```
/// use std::path::Path;
/// use turnero_deck::videos::derive_output_path;
///
/// let out = derive_output_path(Path::new("out/Deck.pptx"), "_con_videos").unwrap();
/// assert_eq!(out, Path::new("out/Deck_con_videos.pptx"));
/// ```
pub fn derive_output_path(input: &Path, suffix: &str) -> Result<PathBuf> {
    if suffix.is_empty() {
        return Err(Error::InvalidConfig(
            "output suffix must not be empty".to_string(),
        ));
    }
    let stem = input.file_stem().ok_or_else(|| {
        Error::InvalidConfig(format!("{} has no file name", input.display()))
    })?;

    let mut name = OsString::from(stem);
    name.push(suffix);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    Ok(input.with_file_name(name))
}

/// What happened to one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotOutcome {
    /// The recording was embedded.
    Embedded,
    /// No file in the videos directory; a placeholder was written.
    Missing,
    /// The file exists but could not be embedded; a placeholder was written.
    Fallback(String),
    /// The slide index is past the end of the deck; nothing was written.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotReport {
    pub slide_index: usize,
    pub file_name: String,
    pub outcome: SlotOutcome,
}

/// Result of a [`VideoInserter::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertReport {
    pub output: PathBuf,
    pub videos_dir: PathBuf,
    pub inserted: usize,
    pub missing: usize,
    pub fallbacks: usize,
    pub skipped: usize,
    /// Number of slots in the mapping.
    pub expected: usize,
    /// Per-slot outcomes in mapping order.
    pub outcomes: Vec<SlotReport>,
}

impl InsertReport {
    /// Placeholders written, for missing and unusable files alike.
    pub fn placeholders(&self) -> usize {
        self.missing + self.fallbacks
    }
}

impl fmt::Display for InsertReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== RESUMEN ===")?;
        writeln!(f, "Videos insertados: {}", self.inserted)?;
        writeln!(f, "Placeholders agregados: {}", self.placeholders())?;
        if self.fallbacks > 0 {
            writeln!(f, "Videos que no se pudieron insertar: {}", self.fallbacks)?;
        }
        if self.skipped > 0 {
            writeln!(f, "Slides inexistentes: {}", self.skipped)?;
        }
        writeln!(f, "Total expected: {}", self.expected)?;
        writeln!(f)?;
        writeln!(f, "Si faltan videos, sigue estos pasos:")?;
        writeln!(f, "1. Crea carpeta: {}/", self.videos_dir.display())?;
        writeln!(f, "2. Graba videos según GUIA_VIDEOS.md")?;
        writeln!(f, "3. Ejecuta este script nuevamente")?;
        writeln!(f)?;
        writeln!(f, "Alternativa manual en PowerPoint:")?;
        write!(f, "Insert → Video → Selecciona archivo")
    }
}

/// Embeds each slot's recording into its slide, or a placeholder when the
/// recording is missing or unusable, and saves the result under a new name.
#[derive(Debug, Clone)]
pub struct VideoInserter<'a> {
    config: InsertConfig,
    slots: &'a [VideoSlot<'a>],
}

impl<'a> VideoInserter<'a> {
    pub fn new(config: InsertConfig, slots: &'a [VideoSlot<'a>]) -> Self {
        Self { config, slots }
    }

    pub fn config(&self) -> &InsertConfig {
        &self.config
    }

    /// Process every slot in order and write the output deck.
    ///
    /// Only opening the input and saving the output are fatal. Missing
    /// files, unusable files and out-of-range slides are logged and counted.
    pub fn run(&self) -> Result<InsertReport> {
        let output = derive_output_path(&self.config.input, &self.config.suffix)?;

        info!("Abriendo presentación: {}", self.config.input.display());
        let mut pkg = Package::open(&self.config.input)?;

        if !self.config.videos_dir.exists() {
            info!("Creando carpeta: {}", self.config.videos_dir.display());
            fs::create_dir_all(&self.config.videos_dir)?;
        }

        let slide_count = pkg.slide_count()?;
        let mut report = InsertReport {
            output,
            videos_dir: self.config.videos_dir.clone(),
            inserted: 0,
            missing: 0,
            fallbacks: 0,
            skipped: 0,
            expected: self.slots.len(),
            outcomes: Vec::with_capacity(self.slots.len()),
        };

        for slot in self.slots {
            let outcome = self.process_slot(&mut pkg, slot, slide_count)?;
            match outcome {
                SlotOutcome::Embedded => report.inserted += 1,
                SlotOutcome::Missing => report.missing += 1,
                SlotOutcome::Fallback(_) => report.fallbacks += 1,
                SlotOutcome::Skipped => report.skipped += 1,
            }
            report.outcomes.push(SlotReport {
                slide_index: slot.slide_index,
                file_name: slot.file_name.to_string(),
                outcome,
            });
        }

        info!(
            "Guardando presentación con videos: {}",
            report.output.display()
        );
        pkg.save(&report.output)?;
        Ok(report)
    }

    fn process_slot(
        &self,
        pkg: &mut Package,
        slot: &VideoSlot<'_>,
        slide_count: usize,
    ) -> Result<SlotOutcome> {
        if slot.slide_index >= slide_count {
            warn!(
                "Slide {} no existe (total slides: {})",
                slot.slide_index, slide_count
            );
            return Ok(SlotOutcome::Skipped);
        }

        let video_path = self.config.videos_dir.join(slot.file_name);
        if !video_path.is_file() {
            warn!(
                "Slide {}: {} NO encontrado",
                slot.slide_index, slot.file_name
            );
            self.add_placeholder(pkg, slot)?;
            return Ok(SlotOutcome::Missing);
        }

        info!("Slide {}: {} encontrado", slot.slide_index, slot.file_name);
        match load_clip(&video_path, slot.file_name) {
            Ok(clip) => {
                pkg.slide_mut(slot.slide_index)?.add_video(&clip)?;
                Ok(SlotOutcome::Embedded)
            },
            Err(err) => {
                warn!(
                    "Slide {}: no se pudo insertar {}: {}",
                    slot.slide_index, slot.file_name, err
                );
                self.add_placeholder(pkg, slot)?;
                Ok(SlotOutcome::Fallback(err.to_string()))
            },
        }
    }

    fn add_placeholder(&self, pkg: &mut Package, slot: &VideoSlot<'_>) -> Result<()> {
        pkg.slide_mut(slot.slide_index)?.add_text_box(
            video_rect(),
            vec![placeholder_paragraph(slot.file_name, &self.config.videos_dir)],
            true,
        )?;
        Ok(())
    }
}

/// Read and validate a recording. Errors here concern the file only.
fn load_clip(path: &Path, file_name: &str) -> Result<VideoClip> {
    let data = fs::read(path)?;
    Ok(VideoClip::new(data, file_name, video_rect())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{DECK, DeckBuilder, DeckConfig, SlideEntry};
    use crate::videos::mapping::VIDEO_SLOTS;
    use crate::videos::placeholder::PLACEHOLDER_PREFIX;
    use proptest::prelude::*;
    use tempfile::TempDir;

    const MP4_BYTES: &[u8] = b"\x00\x00\x00\x18ftypmp42\x00\x00\x00\x00mp42isomrecording";

    const TITLES: &[SlideEntry<'static>] = &[
        SlideEntry::title_slide("Uno", "a"),
        SlideEntry::title_slide("Dos", "b"),
        SlideEntry::title_slide("Tres", "c"),
    ];

    fn build_deck(dir: &TempDir) -> PathBuf {
        let output = dir.path().join("Deck.pptx");
        DeckBuilder::new(DeckConfig {
            output: output.clone(),
        })
        .save(TITLES)
        .unwrap();
        output
    }

    fn config(dir: &TempDir, input: PathBuf) -> InsertConfig {
        InsertConfig {
            input,
            videos_dir: dir.path().join("videos"),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }

    #[test]
    fn test_missing_video_gets_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let input = build_deck(&dir);
        let slots = [VideoSlot::new(1, "01-demo.mp4")];

        let report = VideoInserter::new(config(&dir, input), &slots).run().unwrap();
        assert_eq!(
            (report.inserted, report.missing, report.fallbacks, report.skipped),
            (0, 1, 0, 0)
        );
        assert_eq!(report.expected, 1);
        assert_eq!(report.output, dir.path().join("Deck_con_videos.pptx"));

        let pkg = Package::open(&report.output).unwrap();
        assert_eq!(pkg.slide_count().unwrap(), 3);
        let text = pkg.slide_text(1).unwrap();
        assert!(text.contains(&format!("{}01-demo.mp4", PLACEHOLDER_PREFIX)));
        assert!(text.contains("Insert → Video → Selecciona archivo)"));
        assert!(!pkg.slide_text(0).unwrap().contains(PLACEHOLDER_PREFIX));
        assert!(dir.path().join("videos").is_dir());
    }

    #[test]
    fn test_out_of_range_slot_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let input = build_deck(&dir);
        let before = Package::open(&input).unwrap();
        let slots = [VideoSlot::new(3, "x.mp4"), VideoSlot::new(7, "y.mp4")];

        let report = VideoInserter::new(config(&dir, input), &slots).run().unwrap();
        assert_eq!(report.skipped, 2);
        assert!(report.outcomes.iter().all(|s| s.outcome == SlotOutcome::Skipped));

        let after = Package::open(&report.output).unwrap();
        for index in 0..3 {
            assert_eq!(
                before.slide_xml(index).unwrap(),
                after.slide_xml(index).unwrap()
            );
        }
    }

    #[test]
    fn test_input_is_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let input = build_deck(&dir);
        let original = fs::read(&input).unwrap();

        let cfg = config(&dir, input.clone());
        fs::create_dir_all(&cfg.videos_dir).unwrap();
        fs::write(cfg.videos_dir.join("clip.mp4"), MP4_BYTES).unwrap();
        let slots = [VideoSlot::new(0, "clip.mp4"), VideoSlot::new(2, "gone.mp4")];

        let report = VideoInserter::new(cfg, &slots).run().unwrap();
        assert_ne!(report.output, input);
        assert_eq!(fs::read(&input).unwrap(), original);
    }

    #[test]
    fn test_video_is_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let input = build_deck(&dir);
        let cfg = config(&dir, input);
        fs::create_dir_all(&cfg.videos_dir).unwrap();
        fs::write(cfg.videos_dir.join("clip.mp4"), MP4_BYTES).unwrap();
        let slots = [VideoSlot::new(2, "clip.mp4")];

        let report = VideoInserter::new(cfg, &slots).run().unwrap();
        assert_eq!((report.inserted, report.missing), (1, 0));
        assert_eq!(report.outcomes[0].outcome, SlotOutcome::Embedded);

        let pkg = Package::open(&report.output).unwrap();
        assert!(pkg.slide_xml(2).unwrap().contains("<a:videoFile r:link="));
        assert!(!pkg.slide_text(2).unwrap().contains(PLACEHOLDER_PREFIX));
        let media: Vec<_> = pkg
            .opc_package()
            .iter_parts()
            .map(|part| part.partname().to_string())
            .filter(|name| name.starts_with("/ppt/media/"))
            .collect();
        assert_eq!(media.len(), 2);
    }

    #[test]
    fn test_unusable_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let input = build_deck(&dir);
        let cfg = config(&dir, input);
        fs::create_dir_all(&cfg.videos_dir).unwrap();
        // An MP3 behind a video extension
        fs::write(
            cfg.videos_dir.join("audio.mp4"),
            b"ID3\x04\x00\x00\x00\x00\x00\x00\x00\x00audio",
        )
        .unwrap();
        let slots = [VideoSlot::new(1, "audio.mp4")];

        let report = VideoInserter::new(cfg, &slots).run().unwrap();
        assert_eq!((report.inserted, report.missing, report.fallbacks), (0, 0, 1));
        assert!(matches!(report.outcomes[0].outcome, SlotOutcome::Fallback(_)));

        let pkg = Package::open(&report.output).unwrap();
        assert!(pkg.slide_text(1).unwrap().contains("🎬 VIDEO: audio.mp4"));
    }

    #[test]
    fn test_empty_and_text_files_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let input = build_deck(&dir);
        let cfg = config(&dir, input);
        fs::create_dir_all(&cfg.videos_dir).unwrap();
        fs::write(cfg.videos_dir.join("clip.mp4"), MP4_BYTES).unwrap();
        fs::write(cfg.videos_dir.join("empty.mp4"), b"").unwrap();
        fs::write(
            cfg.videos_dir.join("notes.mp4"),
            b"hello this is text not video",
        )
        .unwrap();
        let slots = [
            VideoSlot::new(0, "clip.mp4"),
            VideoSlot::new(1, "notes.mp4"),
            VideoSlot::new(2, "empty.mp4"),
        ];

        let report = VideoInserter::new(cfg, &slots).run().unwrap();
        assert_eq!((report.inserted, report.missing, report.fallbacks), (1, 0, 2));
        assert!(matches!(report.outcomes[1].outcome, SlotOutcome::Fallback(_)));
        assert!(matches!(report.outcomes[2].outcome, SlotOutcome::Fallback(_)));

        let pkg = Package::open(&report.output).unwrap();
        assert!(!pkg.slide_xml(1).unwrap().contains("<a:videoFile"));
        assert!(pkg.slide_text(1).unwrap().contains("🎬 VIDEO: notes.mp4"));
        assert!(pkg.slide_text(2).unwrap().contains("🎬 VIDEO: empty.mp4"));
    }

    #[test]
    fn test_full_deck_every_slot_is_filled() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Turnero_ZS_Presentacion.pptx");
        DeckBuilder::new(DeckConfig {
            output: input.clone(),
        })
        .save(DECK)
        .unwrap();

        let cfg = config(&dir, input);
        fs::create_dir_all(&cfg.videos_dir).unwrap();
        for slot in &VIDEO_SLOTS[..3] {
            fs::write(cfg.videos_dir.join(slot.file_name), MP4_BYTES).unwrap();
        }

        let report = VideoInserter::new(cfg, VIDEO_SLOTS).run().unwrap();
        assert_eq!(report.expected, VIDEO_SLOTS.len());
        assert_eq!((report.inserted, report.missing), (3, VIDEO_SLOTS.len() - 3));
        assert_eq!((report.fallbacks, report.skipped), (0, 0));

        let pkg = Package::open(&report.output).unwrap();
        assert_eq!(pkg.slide_count().unwrap(), DECK.len());
        for slot in VIDEO_SLOTS {
            let xml = pkg.slide_xml(slot.slide_index).unwrap();
            let text = pkg.slide_text(slot.slide_index).unwrap();
            assert!(
                xml.contains("<a:videoFile")
                    || text.contains(&format!("{}{}", PLACEHOLDER_PREFIX, slot.file_name)),
                "slide {} has neither video nor placeholder",
                slot.slide_index
            );
        }
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(&dir, dir.path().join("nope.pptx"));
        let err = VideoInserter::new(cfg, &[]).run().unwrap_err();
        assert!(matches!(err, Error::PresentationNotFound(_)));
    }

    #[test]
    fn test_empty_suffix_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let input = build_deck(&dir);
        let cfg = InsertConfig {
            suffix: String::new(),
            ..config(&dir, input)
        };
        assert!(matches!(
            VideoInserter::new(cfg, &[]).run(),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_report_display() {
        let report = InsertReport {
            output: PathBuf::from("Deck_con_videos.pptx"),
            videos_dir: PathBuf::from("videos_demo"),
            inserted: 2,
            missing: 16,
            fallbacks: 1,
            skipped: 0,
            expected: 19,
            outcomes: Vec::new(),
        };
        let text = report.to_string();
        assert!(text.starts_with("=== RESUMEN ===\nVideos insertados: 2\nPlaceholders agregados: 17\n"));
        assert!(text.contains("Total expected: 19"));
        assert!(text.contains("1. Crea carpeta: videos_demo/"));
        assert!(!text.contains("Slides inexistentes"));
    }

    #[test]
    fn test_derive_output_path() {
        assert_eq!(
            derive_output_path(Path::new("Turnero_ZS_Presentacion.pptx"), "_con_videos").unwrap(),
            PathBuf::from("Turnero_ZS_Presentacion_con_videos.pptx")
        );
        assert_eq!(
            derive_output_path(Path::new("dir/deck"), "_v").unwrap(),
            PathBuf::from("dir/deck_v")
        );
        assert!(derive_output_path(Path::new("deck.pptx"), "").is_err());
    }

    proptest! {
        #[test]
        fn prop_output_differs_from_input(
            stem in "[A-Za-z0-9_ -]{1,16}",
            ext in proptest::option::of("[a-z]{1,5}"),
            suffix in "[A-Za-z0-9_.-]{1,12}",
        ) {
            let name = match ext {
                Some(ext) => format!("{}.{}", stem, ext),
                None => stem,
            };
            let input = Path::new("decks").join(name);
            let output = derive_output_path(&input, &suffix).unwrap();
            prop_assert_ne!(&output, &input);
            prop_assert_eq!(output.parent(), input.parent());
        }
    }
}
