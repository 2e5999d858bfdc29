//! XML helpers shared by the part writers.

pub mod escape;

pub use escape::{escape_xml, unescape_xml};
