/// Package implementation for PowerPoint presentations.
use crate::common::xml::unescape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::content_type as ct;
use crate::ooxml::opc::part::find_elements_with_attrs;
use crate::ooxml::opc::{OpcPackage, PackURI, Part};
use crate::ooxml::pptx::editor::SlideEditor;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::{Read, Seek};
use std::path::Path;

/// An existing PowerPoint (.pptx) package opened for reading and editing.
///
/// Slides are addressed by their 0-based position in the presentation's
/// slide list, which is the order PowerPoint shows them in.
///
/// ```rust,no_run
/// use turnero_deck::ooxml::pptx::Package;
///
/// let pkg = Package::open("Turnero_ZS_Presentacion.pptx")?;
/// println!("Presentation has {} slides", pkg.slide_count()?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Package {
    opc: OpcPackage,
}

impl Package {
    /// Open a .pptx package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_opc(OpcPackage::open(path)?)
    }

    /// Create a .pptx package from a reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::from_opc(OpcPackage::from_reader(reader)?)
    }

    /// Wrap an OPC package after checking it holds a presentation.
    pub fn from_opc(opc: OpcPackage) -> Result<Self> {
        let main_part = opc
            .main_document_part()
            .map_err(|e| OoxmlError::PartNotFound(format!("main presentation part: {}", e)))?;

        let content_type = main_part.content_type();
        // Support both regular and macro-enabled presentations
        if content_type != ct::PML_PRESENTATION_MAIN && content_type != ct::PML_PRES_MACRO_MAIN {
            return Err(OoxmlError::InvalidContentType {
                expected: format!(
                    "{} or {}",
                    ct::PML_PRESENTATION_MAIN,
                    ct::PML_PRES_MACRO_MAIN
                ),
                got: content_type.to_string(),
            });
        }

        Ok(Self { opc })
    }

    #[inline]
    pub fn opc_package(&self) -> &OpcPackage {
        &self.opc
    }

    fn presentation_part(&self) -> Result<&dyn Part> {
        Ok(self.opc.main_document_part()?)
    }

    /// Partnames of all slides in presentation order.
    pub fn slide_partnames(&self) -> Result<Vec<PackURI>> {
        let pres = self.presentation_part()?;
        let slide_ids = find_elements_with_attrs(pres.blob(), "sldId")?;

        let mut partnames = Vec::with_capacity(slide_ids.len());
        for attrs in &slide_ids {
            // The relationship id is the namespaced `id`, whatever its prefix
            let r_id = attrs
                .iter()
                .find(|(key, _)| key.ends_with(":id"))
                .map(|(_, value)| value.as_str())
                .ok_or_else(|| OoxmlError::InvalidFormat("p:sldId without r:id".to_string()))?;
            let rel = pres.rels().get(r_id).ok_or_else(|| {
                OoxmlError::InvalidRelationship(format!("slide relationship {} not found", r_id))
            })?;
            partnames.push(rel.target_partname()?);
        }

        Ok(partnames)
    }

    pub fn slide_count(&self) -> Result<usize> {
        Ok(self.slide_partnames()?.len())
    }

    /// Partname of the slide at `index`.
    pub fn slide_partname(&self, index: usize) -> Result<PackURI> {
        let mut partnames = self.slide_partnames()?;
        if index >= partnames.len() {
            return Err(OoxmlError::PartNotFound(format!(
                "slide {} of {}",
                index,
                partnames.len()
            )));
        }
        Ok(partnames.swap_remove(index))
    }

    /// Raw XML of the slide at `index`.
    pub fn slide_xml(&self, index: usize) -> Result<&str> {
        let partname = self.slide_partname(index)?;
        Ok(self.opc.get_part(&partname)?.xml_str()?)
    }

    /// Visible text of the slide at `index`.
    ///
    /// Paragraphs are separated by newlines, as are `a:br` line breaks.
    pub fn slide_text(&self, index: usize) -> Result<String> {
        extract_text(self.slide_xml(index)?.as_bytes())
    }

    /// Open the slide at `index` for appending shapes.
    pub fn slide_mut(&mut self, index: usize) -> Result<SlideEditor<'_>> {
        let partname = self.slide_partname(index)?;
        SlideEditor::new(&mut self.opc, partname)
    }

    /// Save the package to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.opc.save(path)?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.opc.to_bytes()?)
    }
}

/// Collect `a:t` text grouped by `a:p` paragraph.
fn extract_text(xml: &[u8]) -> Result<String> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_element = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"t" => in_text_element = true,
                b"p" => current.clear(),
                b"br" => current.push('\n'),
                _ => {},
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"p" => paragraphs.push(String::new()),
                b"br" => current.push('\n'),
                _ => {},
            },
            Ok(Event::Text(e)) if in_text_element => {
                let t = std::str::from_utf8(e.as_ref())?;
                current.push_str(&unescape_xml(t));
            },
            Ok(Event::GeneralRef(e)) if in_text_element => {
                let name = std::str::from_utf8(&e)?;
                current.push_str(&unescape_xml(&format!("&{};", name)));
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_element = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {},
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
        buf.clear();
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::ooxml::pptx::format::{Paragraph, Rect, TextFormat};
    use crate::ooxml::pptx::writer::MutablePresentation;
    use std::io::Cursor;

    fn deck(titles: &[&str]) -> Package {
        let mut pres = MutablePresentation::new();
        for title in titles {
            pres.add_slide()
                .add_text_box(Rect::inches(0.5, 0.3, 9.0, 0.8))
                .add_paragraph(Paragraph::new(*title, TextFormat::new().size(44.0)));
        }
        let bytes = pres.to_package().unwrap().to_bytes().unwrap();
        Package::from_reader(Cursor::new(bytes)).unwrap()
    }

    #[test]
    fn test_slide_order_and_count() {
        let pkg = deck(&["Uno", "Dos", "Tres"]);
        assert_eq!(pkg.slide_count().unwrap(), 3);
        assert_eq!(
            pkg.slide_partname(2).unwrap().as_str(),
            "/ppt/slides/slide3.xml"
        );
        assert_eq!(pkg.slide_text(1).unwrap(), "Dos");
        assert!(pkg.slide_xml(3).is_err());
    }

    #[test]
    fn test_text_keeps_breaks_and_entities() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide();
        slide.set_background(RGBColor::WHITE);
        slide
            .add_text_box(Rect::inches(0.7, 1.3, 8.6, 5.0))
            .add_paragraph(Paragraph::new("Roles & permisos\n<admin>", TextFormat::new()))
            .add_paragraph(Paragraph::new("", TextFormat::new()))
            .add_paragraph(Paragraph::new("fin", TextFormat::new()));
        let bytes = pres.to_package().unwrap().to_bytes().unwrap();
        let pkg = Package::from_reader(Cursor::new(bytes)).unwrap();

        assert_eq!(pkg.slide_text(0).unwrap(), "Roles & permisos\n<admin>\n\nfin");
    }

    #[test]
    fn test_rejects_non_presentation() {
        use crate::ooxml::opc::XmlPart;
        use crate::ooxml::opc::constants::relationship_type as rt;

        let mut opc = OpcPackage::new();
        let uri = PackURI::new("/word/document.xml").unwrap();
        opc.add_part(Box::new(XmlPart::new(
            uri.clone(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"
                .to_string(),
            b"<w:document/>".to_vec(),
        )));
        opc.relate_to(&uri, rt::OFFICE_DOCUMENT);

        assert!(matches!(
            Package::from_opc(opc),
            Err(OoxmlError::InvalidContentType { .. })
        ));
    }
}
