//! Office Open XML (OOXML) support for PowerPoint decks.
//!
//! The module is organized into two layers:
//!
//! 1. **OPC Layer** (`opc`): package handling (ZIP, parts, relationships)
//! 2. **PresentationML** (`pptx`): slides, shapes, text and embedded media
pub mod error;
pub mod opc;
pub mod pptx;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

// Re-export error types
pub use error::{OoxmlError, Result};
