//! Serializes an [`OpcPackage`] into a ZIP archive.
//!
//! Members are written in a stable order: `[Content_Types].xml`, the package
//! relationships, then every part (sorted by partname) followed by its own
//! `.rels` member.

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::content_type as ct;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::package::OpcPackage;
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::phys_pkg::PhysPkgWriter;
use log::debug;
use std::collections::BTreeMap;
use std::path::Path;

pub struct PackageWriter;

impl PackageWriter {
    /// Write `package` to `path`, replacing any existing file.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let bytes = Self::to_bytes(package)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        let mut phys_writer = PhysPkgWriter::new();

        let content_types_uri = PackURI::new(CONTENT_TYPES_URI).map_err(OpcError::InvalidPackUri)?;
        let cti = ContentTypesItem::from_package(package);
        phys_writer.write(&content_types_uri, cti.to_xml().as_bytes())?;

        let pkg_rels_uri = PackURI::new(PACKAGE_URI)
            .and_then(|uri| uri.rels_uri())
            .map_err(OpcError::InvalidPackUri)?;
        phys_writer.write(&pkg_rels_uri, package.rels().to_xml().as_bytes())?;

        let mut parts: Vec<&dyn Part> = package.iter_parts().collect();
        parts.sort_by(|a, b| a.partname().cmp(b.partname()));

        for part in parts {
            if Self::is_precompressed(part.content_type()) {
                phys_writer.write_stored(part.partname(), part.blob())?;
            } else {
                phys_writer.write(part.partname(), part.blob())?;
            }

            if !part.rels().is_empty() {
                let rels_uri = part.partname().rels_uri().map_err(OpcError::InvalidPackUri)?;
                phys_writer.write(&rels_uri, part.rels().to_xml().as_bytes())?;
            }
            debug!("wrote {} ({} bytes)", part.partname(), part.blob().len());
        }

        phys_writer.finish()
    }

    /// Video and raster images gain nothing from deflate.
    #[inline]
    fn is_precompressed(content_type: &str) -> bool {
        content_type.starts_with("video/") || content_type.starts_with("image/")
    }
}

/// Builder for `[Content_Types].xml`.
struct ContentTypesItem {
    defaults: BTreeMap<String, String>,
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();
        for part in package.iter_parts() {
            cti.add_content_type(part.partname(), part.content_type());
        }
        cti
    }

    /// Well-known extension/type pairs become a Default, the rest an Override.
    fn add_content_type(&mut self, partname: &PackURI, content_type: &str) {
        let ext = partname.ext().to_lowercase();
        if Self::is_default_content_type(&ext, content_type) {
            self.defaults.insert(ext, content_type.to_string());
        } else {
            self.overrides
                .insert(partname.to_string(), content_type.to_string());
        }
    }

    fn is_default_content_type(ext: &str, content_type: &str) -> bool {
        matches!(
            (ext, content_type),
            ("rels", ct::OPC_RELATIONSHIPS)
                | ("xml", ct::XML)
                | ("png", ct::PNG)
                | ("jpg", ct::JPEG)
                | ("jpeg", ct::JPEG)
                | ("gif", ct::GIF)
                | ("mp4", ct::MP4)
                | ("mov", ct::MOV)
                | ("avi", ct::AVI)
                | ("wmv", ct::WMV)
                | ("m4v", ct::M4V)
        )
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }
        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types_xml() {
        let mut cti = ContentTypesItem::new();
        cti.add_content_type(&PackURI::new("/ppt/media/media1.mp4").unwrap(), ct::MP4);
        cti.add_content_type(
            &PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            ct::PML_SLIDE,
        );

        let xml = cti.to_xml();

        assert!(xml.contains(r#"<Default Extension="mp4" ContentType="video/mp4"/>"#));
        assert!(xml.contains(r#"<Override PartName="/ppt/slides/slide1.xml""#));
        assert!(!xml.contains(r#"PartName="/ppt/media/media1.mp4""#));
    }

    #[test]
    fn test_precompressed_types() {
        assert!(PackageWriter::is_precompressed(ct::MP4));
        assert!(PackageWriter::is_precompressed(ct::PNG));
        assert!(!PackageWriter::is_precompressed(ct::PML_SLIDE));
    }
}
