//! Parts: the units of content inside an OPC package.
//!
//! A part has a partname, a content type, a blob and its own outgoing
//! relationships. XML parts are kept as raw UTF-8 bytes and parsed on
//! demand with quick-xml; binary parts (media, images) are opaque blobs.

use crate::common::xml::unescape_xml;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashMap;

/// A part in an OPC package.
pub trait Part {
    fn partname(&self) -> &PackURI;

    fn content_type(&self) -> &str;

    fn blob(&self) -> &[u8];

    /// Replace the part's content, keeping its name and relationships.
    fn set_blob(&mut self, blob: Vec<u8>);

    fn rels(&self) -> &Relationships;

    fn rels_mut(&mut self) -> &mut Relationships;

    /// Add or reuse a relationship to `target`, returning its rId.
    ///
    /// The stored reference is relative to this part's directory.
    fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(self.partname().base_uri());
        self.rels_mut().get_or_add(reltype, &target_ref)
    }

    /// Content decoded as UTF-8.
    fn xml_str(&self) -> Result<&str> {
        std::str::from_utf8(self.blob()).map_err(Into::into)
    }
}

/// Binary part such as a video or a poster image.
#[derive(Debug)]
pub struct BlobPart {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl BlobPart {
    pub fn new(partname: PackURI, content_type: String, blob: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            content_type,
            blob,
            rels,
        }
    }
}

impl Part for BlobPart {
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn blob(&self) -> &[u8] {
        &self.blob
    }

    fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }

    fn rels(&self) -> &Relationships {
        &self.rels
    }

    fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

/// An XML part whose bytes are guaranteed to be valid UTF-8.
#[derive(Debug)]
pub struct XmlPart {
    partname: PackURI,
    content_type: String,
    xml_bytes: Vec<u8>,
    rels: Relationships,
}

impl XmlPart {
    pub fn new(partname: PackURI, content_type: String, xml_bytes: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            content_type,
            xml_bytes,
            rels,
        }
    }

    /// Load an XML part from raw data, rejecting invalid UTF-8.
    pub fn load(partname: PackURI, content_type: String, xml_bytes: Vec<u8>) -> Result<Self> {
        std::str::from_utf8(&xml_bytes)
            .map_err(|e| OpcError::XmlError(format!("Invalid UTF-8 in {}: {}", partname, e)))?;
        Ok(Self::new(partname, content_type, xml_bytes))
    }

    /// A quick-xml reader over the part content.
    pub fn reader(&self) -> Reader<&[u8]> {
        let mut reader = Reader::from_reader(self.xml_bytes.as_slice());
        reader.config_mut().trim_text(true);
        reader
    }
}

impl Part for XmlPart {
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn blob(&self) -> &[u8] {
        &self.xml_bytes
    }

    fn set_blob(&mut self, blob: Vec<u8>) {
        self.xml_bytes = blob;
    }

    fn rels(&self) -> &Relationships {
        &self.rels
    }

    fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

/// Collect the attributes of every element whose local name is `element_name`.
///
/// Keys keep their prefix (`r:id` and `id` stay distinct); values are unescaped.
pub fn find_elements_with_attrs(
    xml: &[u8],
    element_name: &str,
) -> Result<Vec<HashMap<String, String>>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    let mut results = Vec::new();
    let element_name_bytes = element_name.as_bytes();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                if e.local_name().as_ref() == element_name_bytes {
                    let mut attrs = HashMap::new();
                    for attr in e.attributes() {
                        let attr = attr?;
                        let key = std::str::from_utf8(attr.key.as_ref())?;
                        let value = std::str::from_utf8(&attr.value)?;
                        attrs.insert(key.to_string(), unescape_xml(value));
                    }
                    results.push(attrs);
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OpcError::XmlError(format!("XML parse error: {}", e))),
            _ => {},
        }
        buf.clear();
    }

    Ok(results)
}

/// Chooses the part implementation for a content type.
pub struct PartFactory;

impl PartFactory {
    pub fn load(partname: PackURI, content_type: String, blob: Vec<u8>) -> Result<Box<dyn Part>> {
        if Self::is_xml_content_type(&content_type) {
            Ok(Box::new(XmlPart::load(partname, content_type, blob)?))
        } else {
            Ok(Box::new(BlobPart::new(partname, content_type, blob)))
        }
    }

    #[inline]
    fn is_xml_content_type(content_type: &str) -> bool {
        content_type.ends_with("+xml") || content_type.ends_with("/xml")
    }
}
