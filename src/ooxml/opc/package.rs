//! In-memory OPC package: parts, package relationships, load and save.

use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::{Part, PartFactory};
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::pkgreader::PackageReader;
use crate::ooxml::opc::pkgwriter::PackageWriter;
use crate::ooxml::opc::rel::Relationships;
use std::collections::{HashMap, HashSet};
use std::io::{Read, Seek};
use std::path::Path;

/// An Open Packaging Convention package held in memory.
pub struct OpcPackage {
    rels: Relationships,
    parts: HashMap<String, Box<dyn Part>>,
}

impl OpcPackage {
    /// Create an empty package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: HashMap::new(),
        }
    }

    /// Open a package file (`.pptx`, `.docx`, ...).
    ///
    /// ```no_run
    /// use turnero_deck::ooxml::opc::OpcPackage;
    ///
    /// let pkg = OpcPackage::open("Turnero_ZS_Presentacion.pptx")?;
    /// println!("{} parts", pkg.part_count());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::unmarshal(PackageReader::from_phys_reader(PhysPkgReader::open(path)?)?)
    }

    /// Load a package from any seekable reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::unmarshal(PackageReader::from_phys_reader(PhysPkgReader::new(reader)?)?)
    }

    /// Turn serialized parts and relationships into the in-memory graph.
    fn unmarshal(mut pkg_reader: PackageReader) -> Result<Self> {
        let mut package = Self::new();

        for srel in pkg_reader.pkg_srels() {
            package.rels.add_relationship(
                srel.reltype.clone(),
                srel.target_ref.clone(),
                srel.r_id.clone(),
                srel.is_external(),
            );
        }

        for spart in pkg_reader.take_sparts() {
            let mut part = PartFactory::load(spart.partname, spart.content_type, spart.blob)?;
            for srel in spart.srels {
                let is_external = srel.is_external();
                part.rels_mut()
                    .add_relationship(srel.reltype, srel.target_ref, srel.r_id, is_external);
            }
            package.add_part(part);
        }

        Ok(package)
    }

    /// The part targeted by the package's `officeDocument` relationship.
    pub fn main_document_part(&self) -> Result<&dyn Part> {
        self.part_by_reltype(relationship_type::OFFICE_DOCUMENT)
    }

    pub fn get_part(&self, partname: &PackURI) -> Result<&dyn Part> {
        self.parts
            .get(partname.as_str())
            .map(|b| &**b as &dyn Part)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    pub fn get_part_mut(&mut self, partname: &PackURI) -> Result<&mut dyn Part> {
        self.parts
            .get_mut(partname.as_str())
            .map(|b| &mut **b as &mut dyn Part)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Part reached from the package through the single relationship of `reltype`.
    pub fn part_by_reltype(&self, reltype: &str) -> Result<&dyn Part> {
        let partname = self.rels.part_with_reltype(reltype)?.target_partname()?;
        self.get_part(&partname)
    }

    /// Add a part, replacing any part with the same name.
    pub fn add_part(&mut self, part: Box<dyn Part>) {
        self.parts.insert(part.partname().to_string(), part);
    }

    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.values().map(|b| &**b as &dyn Part)
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package itself to `target`, returning the rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(PACKAGE_URI);
        self.rels.get_or_add(reltype, &target_ref)
    }

    /// First free partname for a `%d` template, e.g. `/ppt/media/media%d.mp4`.
    ///
    /// Indices already taken by parts matching the template are skipped, so
    /// gaps left in the numbering are filled first.
    pub fn next_partname(&self, template: &str) -> Result<PackURI> {
        let (prefix, suffix) = template.split_once("%d").ok_or_else(|| {
            OpcError::InvalidPackUri(format!("{} has no %d placeholder", template))
        })?;

        let used: HashSet<u32> = self
            .parts
            .values()
            .map(|part| part.partname())
            .filter(|partname| {
                let name = partname.as_str();
                name.len() > prefix.len() + suffix.len()
                    && name.starts_with(prefix)
                    && name.ends_with(suffix)
            })
            .filter_map(PackURI::idx)
            .collect();

        let n = (1..=u32::MAX)
            .find(|n| !used.contains(n))
            .ok_or_else(|| OpcError::InvalidPackUri(format!("no free partname for {}", template)))?;
        PackURI::new(format!("{}{}{}", prefix, n, suffix)).map_err(OpcError::InvalidPackUri)
    }

    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.parts.contains_key(partname.as_str())
    }

    /// Serialize the package to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PackageWriter::write(path, self)
    }

    /// Serialize the package to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(self)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::content_type as ct;
    use crate::ooxml::opc::part::{BlobPart, XmlPart};
    use std::io::Cursor;

    fn two_part_package() -> OpcPackage {
        let mut pkg = OpcPackage::new();
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        let media = PackURI::new("/ppt/media/media1.mp4").unwrap();

        let mut pres_part = XmlPart::new(
            pres.clone(),
            ct::PML_PRESENTATION_MAIN.to_string(),
            b"<p:presentation/>".to_vec(),
        );
        pres_part.relate_to(&media, relationship_type::VIDEO);

        pkg.relate_to(&pres, relationship_type::OFFICE_DOCUMENT);
        pkg.add_part(Box::new(pres_part));
        pkg.add_part(Box::new(BlobPart::new(media, ct::MP4.to_string(), vec![1, 2, 3])));
        pkg
    }

    #[test]
    fn test_save_and_reopen() {
        let bytes = two_part_package().to_bytes().unwrap();
        let pkg = OpcPackage::from_reader(Cursor::new(bytes)).unwrap();

        assert_eq!(pkg.part_count(), 2);
        let main = pkg.main_document_part().unwrap();
        assert_eq!(main.content_type(), ct::PML_PRESENTATION_MAIN);
        assert_eq!(main.rels().len(), 1);

        let media = pkg
            .get_part(&PackURI::new("/ppt/media/media1.mp4").unwrap())
            .unwrap();
        assert_eq!(media.blob(), &[1, 2, 3]);
        assert_eq!(media.content_type(), ct::MP4);
    }

    #[test]
    fn test_next_partname() {
        let pkg = two_part_package();
        assert_eq!(
            pkg.next_partname("/ppt/media/media%d.mp4").unwrap().as_str(),
            "/ppt/media/media2.mp4"
        );
        assert_eq!(
            pkg.next_partname("/ppt/media/image%d.png").unwrap().as_str(),
            "/ppt/media/image1.png"
        );
        assert!(pkg.next_partname("/ppt/media/media.mp4").is_err());
    }

    #[test]
    fn test_next_partname_fills_gaps() {
        let mut pkg = two_part_package();
        for (name, content_type) in [
            ("/ppt/media/media3.mp4", ct::MP4),
            ("/ppt/media/media3.avi", ct::AVI),
        ] {
            pkg.add_part(Box::new(BlobPart::new(
                PackURI::new(name).unwrap(),
                content_type.to_string(),
                vec![0],
            )));
        }
        assert_eq!(
            pkg.next_partname("/ppt/media/media%d.mp4").unwrap().as_str(),
            "/ppt/media/media2.mp4"
        );
        assert_eq!(
            pkg.next_partname("/ppt/media/media%d.avi").unwrap().as_str(),
            "/ppt/media/media1.avi"
        );
    }

    #[test]
    fn test_unreachable_members_are_ignored() {
        let mut pkg = two_part_package();
        // Present in the archive but no relationship points at it
        pkg.add_part(Box::new(BlobPart::new(
            PackURI::new("/ppt/media/orphan.png").unwrap(),
            ct::PNG.to_string(),
            vec![0],
        )));
        let reopened = OpcPackage::from_reader(Cursor::new(pkg.to_bytes().unwrap())).unwrap();
        assert_eq!(reopened.part_count(), 2);
    }
}
