//! Read-side view of a serialized OPC package.
//!
//! Parses `[Content_Types].xml`, the package relationships and then walks the
//! relationship graph, so only parts reachable from `/_rels/.rels` are loaded.

use crate::common::xml::unescape_xml;
use crate::ooxml::opc::constants::target_mode;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use log::debug;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};

/// A part as found in the archive, before it becomes a `Part` object.
#[derive(Debug)]
pub struct SerializedPart {
    pub partname: PackURI,
    pub content_type: String,
    /// Type of the relationship through which the part was first reached
    pub reltype: String,
    pub blob: Vec<u8>,
    pub srels: SmallVec<[SerializedRelationship; 8]>,
}

/// A relationship exactly as read from a `.rels` member.
#[derive(Debug, Clone)]
pub struct SerializedRelationship {
    pub base_uri: String,
    pub r_id: String,
    pub reltype: String,
    pub target_ref: String,
    pub target_mode: String,
}

impl SerializedRelationship {
    #[inline]
    pub fn is_external(&self) -> bool {
        self.target_mode == target_mode::EXTERNAL
    }

    pub fn target_partname(&self) -> Result<PackURI> {
        if self.is_external() {
            return Err(OpcError::InvalidRelationship(format!(
                "{} is external",
                self.r_id
            )));
        }
        PackURI::from_rel_ref(&self.base_uri, &self.target_ref).map_err(OpcError::InvalidPackUri)
    }
}

/// Default and Override content types from `[Content_Types].xml`.
struct ContentTypeMap {
    defaults: HashMap<String, String>,
    overrides: HashMap<String, String>,
}

impl ContentTypeMap {
    fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut map = Self {
            defaults: HashMap::new(),
            overrides: HashMap::new(),
        };
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    match e.local_name().as_ref() {
                        b"Default" => {
                            if let (Some(ext), Some(ct)) =
                                (attr_value(e, b"Extension")?, attr_value(e, b"ContentType")?)
                            {
                                map.defaults.insert(ext.to_lowercase(), ct);
                            }
                        },
                        b"Override" => {
                            if let (Some(pn), Some(ct)) =
                                (attr_value(e, b"PartName")?, attr_value(e, b"ContentType")?)
                            {
                                map.overrides.insert(pn.to_lowercase(), ct);
                            }
                        },
                        _ => {},
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(OpcError::XmlError(format!("Content types parse error: {}", e)));
                },
                _ => {},
            }
            buf.clear();
        }

        Ok(map)
    }

    /// Override by partname first (case-insensitive), then Default by extension.
    fn get(&self, pack_uri: &PackURI) -> Result<String> {
        if let Some(ct) = self.overrides.get(&pack_uri.as_str().to_lowercase()) {
            return Ok(ct.clone());
        }
        if let Some(ct) = self.defaults.get(&pack_uri.ext().to_lowercase()) {
            return Ok(ct.clone());
        }
        Err(OpcError::ContentTypeNotFound(pack_uri.to_string()))
    }
}

/// Value of attribute `key` on `e`, unescaped.
fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            let raw = std::str::from_utf8(&attr.value)?;
            return Ok(Some(unescape_xml(raw)));
        }
    }
    Ok(None)
}

/// Package-level relationships plus every reachable part.
pub struct PackageReader {
    pkg_srels: SmallVec<[SerializedRelationship; 8]>,
    sparts: Vec<SerializedPart>,
}

impl PackageReader {
    pub fn from_phys_reader(phys_reader: PhysPkgReader) -> Result<Self> {
        let mut members = phys_reader.into_members();

        let content_types_xml = members
            .get(CONTENT_TYPES_URI.trim_start_matches('/'))
            .ok_or_else(|| OpcError::PartNotFound("[Content_Types].xml".to_string()))?;
        let content_types = ContentTypeMap::from_xml(content_types_xml)?;

        let package_uri = PackURI::new(PACKAGE_URI).map_err(OpcError::InvalidPackUri)?;
        let pkg_srels = Self::load_rels(&members, &package_uri)?;
        let sparts = Self::load_parts(&mut members, &pkg_srels, &content_types)?;

        debug!("loaded {} parts", sparts.len());
        Ok(Self { pkg_srels, sparts })
    }

    /// Relationships of `source_uri`, empty when it has no `.rels` member.
    fn load_rels(
        members: &HashMap<String, Vec<u8>>,
        source_uri: &PackURI,
    ) -> Result<SmallVec<[SerializedRelationship; 8]>> {
        let rels_uri = source_uri.rels_uri().map_err(OpcError::InvalidPackUri)?;
        match members.get(rels_uri.membername()) {
            Some(xml) => Self::parse_rels_xml(xml, source_uri.base_uri()),
            None => Ok(SmallVec::new()),
        }
    }

    fn parse_rels_xml(
        rels_xml: &[u8],
        base_uri: &str,
    ) -> Result<SmallVec<[SerializedRelationship; 8]>> {
        let mut srels = SmallVec::new();
        let mut reader = Reader::from_reader(rels_xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    let r_id = attr_value(e, b"Id")?;
                    let reltype = attr_value(e, b"Type")?;
                    let target_ref = attr_value(e, b"Target")?;
                    let target_mode = attr_value(e, b"TargetMode")?
                        .unwrap_or_else(|| target_mode::INTERNAL.to_string());

                    if let (Some(r_id), Some(reltype), Some(target_ref)) = (r_id, reltype, target_ref)
                    {
                        srels.push(SerializedRelationship {
                            base_uri: base_uri.to_string(),
                            r_id,
                            reltype,
                            target_ref,
                            target_mode,
                        });
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OpcError::XmlError(format!("Rels parse error: {}", e))),
                _ => {},
            }
            buf.clear();
        }

        Ok(srels)
    }

    /// Depth-first walk of internal relationships; blobs are moved out of
    /// `members` so nothing is copied.
    fn load_parts(
        members: &mut HashMap<String, Vec<u8>>,
        pkg_srels: &[SerializedRelationship],
        content_types: &ContentTypeMap,
    ) -> Result<Vec<SerializedPart>> {
        let mut sparts = Vec::with_capacity(members.len());
        let mut visited: HashSet<PackURI> = HashSet::new();
        let mut work_queue: Vec<(PackURI, String)> = Vec::new();

        Self::enqueue(pkg_srels, &mut visited, &mut work_queue);

        while let Some((partname, reltype)) = work_queue.pop() {
            let part_srels = Self::load_rels(members, &partname)?;
            Self::enqueue(&part_srels, &mut visited, &mut work_queue);

            let blob = members
                .remove(partname.membername())
                .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))?;
            let content_type = content_types.get(&partname)?;

            sparts.push(SerializedPart {
                partname,
                content_type,
                reltype,
                blob,
                srels: part_srels,
            });
        }

        Ok(sparts)
    }

    fn enqueue(
        srels: &[SerializedRelationship],
        visited: &mut HashSet<PackURI>,
        work_queue: &mut Vec<(PackURI, String)>,
    ) {
        for srel in srels.iter().filter(|srel| !srel.is_external()) {
            if let Ok(partname) = srel.target_partname() {
                if visited.insert(partname.clone()) {
                    work_queue.push((partname, srel.reltype.clone()));
                }
            }
        }
    }

    pub fn pkg_srels(&self) -> &[SerializedRelationship] {
        &self.pkg_srels
    }

    /// Take ownership of all serialized parts.
    pub fn take_sparts(&mut self) -> Vec<SerializedPart> {
        std::mem::take(&mut self.sparts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::content_type as ct;

    #[test]
    fn test_content_type_map() {
        let xml = br#"<?xml version="1.0"?>
            <Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
                <Default Extension="xml" ContentType="application/xml"/>
                <Default Extension="MP4" ContentType="video/mp4"/>
                <Override PartName="/ppt/slides/slide1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>
            </Types>"#;

        let map = ContentTypeMap::from_xml(xml).unwrap();

        let uri = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        assert_eq!(map.get(&uri).unwrap(), ct::PML_SLIDE);

        let uri = PackURI::new("/ppt/media/media1.mp4").unwrap();
        assert_eq!(map.get(&uri).unwrap(), ct::MP4);

        let uri = PackURI::new("/ppt/media/image1.png").unwrap();
        assert!(map.get(&uri).is_err());
    }

    #[test]
    fn test_parse_rels_xml() {
        let xml = br#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
            <Relationship Id="rId1" Type="http://x/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
            <Relationship Id="rId2" Type="http://x/hyperlink" Target="https://a.b/?q=1&amp;r=2" TargetMode="External"/>
        </Relationships>"#;

        let srels = PackageReader::parse_rels_xml(xml, "/ppt/slides").unwrap();
        assert_eq!(srels.len(), 2);
        assert_eq!(
            srels[0].target_partname().unwrap().as_str(),
            "/ppt/slideLayouts/slideLayout1.xml"
        );
        assert!(srels[1].is_external());
        assert_eq!(srels[1].target_ref, "https://a.b/?q=1&r=2");
    }
}
