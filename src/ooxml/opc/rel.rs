//! Relationships between parts of an OPC package.
//!
//! Every part (and the package itself) owns a [`Relationships`] collection
//! keyed by rId. Internal targets are stored as references relative to the
//! source part's directory, exactly as they appear in the `.rels` XML.

use crate::common::xml::escape_xml;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use smallvec::SmallVec;
use std::collections::HashMap;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone)]
pub struct Relationship {
    r_id: String,
    reltype: String,
    target_ref: String,
    base_uri: String,
    is_external: bool,
}

impl Relationship {
    pub fn new(
        r_id: String,
        reltype: String,
        target_ref: String,
        base_uri: String,
        is_external: bool,
    ) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
            base_uri,
            is_external,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Relative part reference for internal relationships, URL for external ones.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }

    /// Absolute partname of an internal target.
    pub fn target_partname(&self) -> Result<PackURI> {
        if self.is_external {
            return Err(OpcError::InvalidRelationship(format!(
                "{} points outside the package",
                self.r_id
            )));
        }
        PackURI::from_rel_ref(&self.base_uri, &self.target_ref).map_err(OpcError::InvalidPackUri)
    }
}

/// Collection of relationships from a single source.
#[derive(Debug)]
pub struct Relationships {
    base_uri: String,
    rels: HashMap<String, Relationship>,
}

impl Relationships {
    /// Create an empty collection resolving targets against `base_uri`.
    pub fn new(base_uri: String) -> Self {
        Self {
            base_uri,
            rels: HashMap::new(),
        }
    }

    /// Insert a relationship read from a `.rels` part, keeping its rId.
    pub fn add_relationship(
        &mut self,
        reltype: String,
        target_ref: String,
        r_id: String,
        is_external: bool,
    ) {
        let rel = Relationship::new(
            r_id.clone(),
            reltype,
            target_ref,
            self.base_uri.clone(),
            is_external,
        );
        self.rels.insert(r_id, rel);
    }

    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.get(r_id)
    }

    /// Return the rId of an existing internal relationship of `reltype` to
    /// `target_ref`, or allocate a new one.
    pub fn get_or_add(&mut self, reltype: &str, target_ref: &str) -> String {
        if let Some(rel) = self.rels.values().find(|rel| {
            !rel.is_external() && rel.reltype() == reltype && rel.target_ref() == target_ref
        }) {
            return rel.r_id().to_string();
        }

        let r_id = self.next_r_id();
        self.add_relationship(reltype.to_string(), target_ref.to_string(), r_id.clone(), false);
        r_id
    }

    /// Lowest unused `rIdN`, filling gaps left by removed relationships.
    fn next_r_id(&self) -> String {
        let mut used: SmallVec<[u32; 16]> = self
            .rels
            .keys()
            .filter_map(|r_id| r_id.strip_prefix("rId"))
            .filter_map(|digits| atoi_simd::parse::<u32, false, false>(digits.as_bytes()).ok())
            .collect();
        used.sort_unstable();

        let mut next = 1u32;
        for num in used {
            if num == next {
                next += 1;
            } else if num > next {
                break;
            }
        }

        format!("rId{}", next)
    }

    /// The single relationship of `reltype`; zero or several is an error.
    pub fn part_with_reltype(&self, reltype: &str) -> Result<&Relationship> {
        let mut matching = self.rels.values().filter(|rel| rel.reltype() == reltype);
        match (matching.next(), matching.next()) {
            (Some(rel), None) => Ok(rel),
            (None, _) => Err(OpcError::RelationshipNotFound(format!(
                "No relationship of type '{}'",
                reltype
            ))),
            (Some(_), Some(_)) => Err(OpcError::InvalidRelationship(format!(
                "Multiple relationships of type '{}'",
                reltype
            ))),
        }
    }

    /// All relationships of `reltype`, ordered by rId number.
    pub fn all_with_reltype(&self, reltype: &str) -> Vec<&Relationship> {
        let mut matching: Vec<&Relationship> = self
            .rels
            .values()
            .filter(|rel| rel.reltype() == reltype)
            .collect();
        matching.sort_by_key(|rel| rid_number(rel.r_id()));
        matching
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to `.rels` XML, ordered by rId number.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        let mut rels: SmallVec<[&Relationship; 16]> = self.rels.values().collect();
        rels.sort_by_key(|rel| (rid_number(rel.r_id()), rel.r_id()));

        for rel in rels {
            let target_mode = if rel.is_external() {
                r#" TargetMode="External""#
            } else {
                ""
            };
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"{}/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref()),
                target_mode
            ));
        }

        xml.push_str("</Relationships>");
        xml
    }
}

fn rid_number(r_id: &str) -> u32 {
    r_id.strip_prefix("rId")
        .and_then(|digits| atoi_simd::parse::<u32, false, false>(digits.as_bytes()).ok())
        .unwrap_or(u32::MAX)
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new("/".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_get_or_add_reuses_matching_rel() {
        let mut rels = Relationships::new("/ppt/slides".to_string());

        assert_eq!(rels.get_or_add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"), "rId1");
        assert_eq!(rels.get_or_add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"), "rId1");
        // Same target under a different type is a distinct relationship
        assert_eq!(rels.get_or_add(rt::VIDEO, "../media/media1.mp4"), "rId2");
        assert_eq!(rels.get_or_add(rt::MEDIA, "../media/media1.mp4"), "rId3");
    }

    #[test]
    fn test_next_r_id_fills_gaps() {
        let mut rels = Relationships::new("/ppt".to_string());
        rels.add_relationship("t".into(), "a.xml".into(), "rId1".into(), false);
        rels.add_relationship("t".into(), "c.xml".into(), "rId3".into(), false);
        assert_eq!(rels.next_r_id(), "rId2");
    }

    #[test]
    fn test_target_partname() {
        let mut rels = Relationships::new("/ppt/slides".to_string());
        let r_id = rels.get_or_add(rt::IMAGE, "../media/image1.png");
        let rel = rels.get(&r_id).unwrap();
        assert_eq!(rel.target_partname().unwrap().as_str(), "/ppt/media/image1.png");
    }

    #[test]
    fn test_to_xml_orders_numerically() {
        let mut rels = Relationships::new("/ppt".to_string());
        for n in 1..=10 {
            rels.get_or_add(rt::SLIDE, &format!("slides/slide{n}.xml"));
        }
        let xml = rels.to_xml();
        let pos2 = xml.find(r#"Id="rId2""#).unwrap();
        let pos10 = xml.find(r#"Id="rId10""#).unwrap();
        assert!(pos2 < pos10);
        assert_eq!(rels.all_with_reltype(rt::SLIDE).len(), 10);
    }
}
