//! Deck builder for the Turnero ZS product demo.
//!
//! [`content::DECK`] holds the slide copy, [`theme`] the palette and
//! geometry, and [`DeckBuilder`] lays every entry out on its own slide.

pub mod builder;
pub mod content;
pub mod theme;

pub use builder::{DEFAULT_OUTPUT, DeckBuilder, DeckConfig};
pub use content::{DECK, SlideEntry, SlideLayout};
