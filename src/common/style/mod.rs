//! Style primitives shared by the slide writer and the deck layouts.

pub mod color;

pub use color::RGBColor;
