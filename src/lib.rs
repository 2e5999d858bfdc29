//! Turnero Deck - builds the Turnero ZS demo presentation and adds its videos
//!
//! The crate writes and edits PowerPoint (.pptx) packages natively, on top of
//! a small Open Packaging Conventions layer.
//!
//! # Features
//!
//! - **Deck Builder**: lays out the fixed demo copy as a 27-slide deck
//! - **Video Inserter**: embeds the demo recordings into their slides, or
//!   leaves a placeholder describing the file to add by hand
//! - **OPC layer**: parts, relationships, content types and ZIP packaging
//!
//! # Example - Building the deck
//!
//! ```no_run
//! use turnero_deck::deck::{DECK, DeckBuilder, DeckConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let slides = DeckBuilder::new(DeckConfig::default()).save(DECK)?;
//! println!("Total de slides: {}", slides);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inserting the videos
//!
//! ```no_run
//! use turnero_deck::videos::{InsertConfig, VIDEO_SLOTS, VideoInserter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = VideoInserter::new(InsertConfig::default(), VIDEO_SLOTS).run()?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

/// Units, colors, XML escaping and the crate error type
pub mod common;

/// Deck Builder: slide copy, palette and layout
pub mod deck;

/// OOXML (Office Open XML) packages and PresentationML
pub mod ooxml;

/// Video Inserter: mapping, placeholders and embedding
pub mod videos;

pub use common::{Error, Result};
