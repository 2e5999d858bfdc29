//! Open Packaging Conventions (OPC) layer.
//!
//! Parts, relationships, content types and the ZIP container that together
//! make up every Office Open XML file. The presentation layer in
//! [`crate::ooxml::pptx`] is built entirely on top of these types.

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgreader;
pub mod pkgwriter;
pub mod rel;

pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::{BlobPart, Part, XmlPart};
pub use rel::{Relationship, Relationships};
