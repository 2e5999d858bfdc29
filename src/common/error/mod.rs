//! Crate-wide error type.
//!
//! Format-level errors (`OoxmlError`, `OpcError`) are folded into [`Error`]
//! so the deck builder, the video inserter and the binaries share a single
//! `Result`.

pub mod conversions;
pub mod types;

pub use types::{Error, Result};
