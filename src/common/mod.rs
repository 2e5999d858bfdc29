//! Types and helpers shared by the package layer and the deck modules.

pub mod error;
pub mod style;
pub mod unit;
pub mod xml;

pub use error::{Error, Result};
pub use style::RGBColor;
