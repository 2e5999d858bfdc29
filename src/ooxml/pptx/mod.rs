//! PowerPoint (.pptx) presentation support.
//!
//! Two entry points share the same shape and text writers:
//!
//! - [`MutablePresentation`] builds a complete deck from scratch.
//! - [`Package`] opens an existing deck, reads slide text and appends text
//!   boxes or embedded videos to individual slides through [`SlideEditor`].
//!
//! ```rust,no_run
//! use turnero_deck::ooxml::pptx::{MutablePresentation, Paragraph, Rect, TextFormat};
//!
//! let mut pres = MutablePresentation::new();
//! pres.add_slide()
//!     .add_text_box(Rect::inches(0.5, 2.5, 9.0, 1.5))
//!     .add_paragraph(Paragraph::new("Turnero ZS", TextFormat::new().size(60.0).bold()));
//! pres.save("demo.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod editor;
pub mod format;
pub mod media;
pub mod package;
pub mod template;
pub mod writer;

pub use editor::SlideEditor;
pub use format::{Alignment, Paragraph, ParagraphFormat, Rect, TextFormat};
pub use media::{MediaFormat, MediaType, VideoClip};
pub use package::Package;
pub use writer::{MutablePresentation, MutableShape, MutableSlide};
