/// Presentation writer for PPTX.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::{OpcPackage, PackURI, Part, XmlPart};
use crate::ooxml::pptx::template;
use chrono::Utc;
use log::debug;
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::slide::MutableSlide;

/// First `p:sldId/@id`; lower values are reserved.
const FIRST_SLIDE_ID: u32 = 256;
const SLIDE_MASTER_ID: u32 = 2_147_483_648;

/// Name written to `docProps/app.xml` and as the default creator.
const APPLICATION: &str = "turnero-deck";

/// A mutable PowerPoint presentation for writing.
///
/// Slides are kept in memory and turned into a complete package with
/// [`MutablePresentation::to_package`] or [`MutablePresentation::save`].
#[derive(Debug)]
pub struct MutablePresentation {
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    title: String,
}

impl MutablePresentation {
    /// Create a new empty presentation, 10" x 7.5".
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: template::DEFAULT_SLIDE_WIDTH,
            slide_height: template::DEFAULT_SLIDE_HEIGHT,
            title: String::new(),
        }
    }

    /// Append a blank slide and return it.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let slide_id = FIRST_SLIDE_ID + self.slides.len() as u32;
        let index = self.slides.len();
        self.slides.push(MutableSlide::new(slide_id));
        &mut self.slides[index]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut MutableSlide> {
        self.slides.get_mut(index)
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide size in EMUs.
    pub fn set_slide_size(&mut self, width: i64, height: i64) -> Result<()> {
        if width <= 0 || height <= 0 {
            return Err(OoxmlError::InvalidFormat(format!(
                "slide size must be positive, got {}x{}",
                width, height
            )));
        }
        self.slide_width = width;
        self.slide_height = height;
        Ok(())
    }

    /// Title stored in the core document properties.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Assemble every part of the presentation into an OPC package.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let mut pkg = OpcPackage::new();

        let pres_uri = partname("/ppt/presentation.xml")?;
        let master_uri = partname("/ppt/slideMasters/slideMaster1.xml")?;
        let layout_uri = partname("/ppt/slideLayouts/slideLayout1.xml")?;
        let theme_uri = partname("/ppt/theme/theme1.xml")?;

        let mut master = xml_part(&master_uri, ct::PML_SLIDE_MASTER, template::slide_master_xml());
        // The master's layout list refers to rId1
        master.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        master.relate_to(&theme_uri, rt::THEME);
        pkg.add_part(Box::new(master));

        let mut layout = xml_part(&layout_uri, ct::PML_SLIDE_LAYOUT, template::blank_layout_xml());
        layout.relate_to(&master_uri, rt::SLIDE_MASTER);
        pkg.add_part(Box::new(layout));

        pkg.add_part(Box::new(xml_part(&theme_uri, ct::OFC_THEME, template::theme_xml())));

        let mut pres = xml_part(&pres_uri, ct::PML_PRESENTATION_MAIN, String::new());
        let master_rel = pres.relate_to(&master_uri, rt::SLIDE_MASTER);

        let mut slide_rels = Vec::with_capacity(self.slides.len());
        for (i, slide) in self.slides.iter().enumerate() {
            let slide_uri = partname(&format!("/ppt/slides/slide{}.xml", i + 1))?;
            let mut part = xml_part(&slide_uri, ct::PML_SLIDE, slide.to_xml()?);
            part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
            pkg.add_part(Box::new(part));
            slide_rels.push((slide.slide_id, pres.relate_to(&slide_uri, rt::SLIDE)));
        }

        for (uri, content_type, reltype, xml) in [
            (
                "/ppt/presProps.xml",
                ct::PML_PRES_PROPS,
                rt::PRES_PROPS,
                template::pres_props_xml(),
            ),
            (
                "/ppt/viewProps.xml",
                ct::PML_VIEW_PROPS,
                rt::VIEW_PROPS,
                template::view_props_xml(),
            ),
            (
                "/ppt/tableStyles.xml",
                ct::PML_TABLE_STYLES,
                rt::TABLE_STYLES,
                template::table_styles_xml(),
            ),
        ] {
            let uri = partname(uri)?;
            pres.relate_to(&uri, reltype);
            pkg.add_part(Box::new(xml_part(&uri, content_type, xml)));
        }
        pres.relate_to(&theme_uri, rt::THEME);

        pres.set_blob(self.presentation_xml(&master_rel, &slide_rels)?.into_bytes());
        pkg.add_part(Box::new(pres));
        pkg.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);

        let core_uri = partname("/docProps/core.xml")?;
        let core = template::core_props_xml(&self.title, APPLICATION, Utc::now());
        pkg.add_part(Box::new(xml_part(&core_uri, ct::OPC_CORE_PROPERTIES, core)));
        pkg.relate_to(&core_uri, rt::CORE_PROPERTIES);

        let app_uri = partname("/docProps/app.xml")?;
        let app = template::app_props_xml(APPLICATION, self.slides.len());
        pkg.add_part(Box::new(xml_part(&app_uri, ct::OFC_EXTENDED_PROPERTIES, app)));
        pkg.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        debug!(
            "assembled presentation: {} slides, {} parts",
            self.slides.len(),
            pkg.part_count()
        );
        Ok(pkg)
    }

    /// Write the presentation to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_package()?.save(path)?;
        Ok(())
    }

    /// Generate `ppt/presentation.xml`.
    fn presentation_xml(&self, master_rel: &str, slide_rels: &[(u32, String)]) -> Result<String> {
        let mut xml = String::with_capacity(1024 + slide_rels.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
        );
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#);
        xml.push_str(r#"saveSubsetFonts="1">"#);

        write!(
            xml,
            r#"<p:sldMasterIdLst><p:sldMasterId id="{}" r:id="{}"/></p:sldMasterIdLst>"#,
            SLIDE_MASTER_ID, master_rel
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;

        if !slide_rels.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide_id, r_id) in slide_rels {
                write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide_id, r_id)
                    .map_err(|e| OoxmlError::Xml(e.to_string()))?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        // Notes size is the slide size turned portrait
        write!(
            xml,
            r#"<p:notesSz cx="{}" cy="{}"/>"#,
            self.slide_height, self.slide_width
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;

        xml.push_str("</p:presentation>");
        Ok(xml)
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

fn partname(uri: &str) -> Result<PackURI> {
    PackURI::new(uri).map_err(|e| OoxmlError::Opc(OpcError::InvalidPackUri(e)))
}

fn xml_part(partname: &PackURI, content_type: &str, xml: String) -> XmlPart {
    XmlPart::new(partname.clone(), content_type.to_string(), xml.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::ooxml::pptx::format::{Paragraph, Rect, TextFormat};

    fn sample() -> MutablePresentation {
        let mut pres = MutablePresentation::new();
        pres.set_title("Turnero ZS");
        for title in ["Uno", "Dos", "Tres"] {
            let slide = pres.add_slide();
            slide.set_background(RGBColor::WHITE);
            slide
                .add_text_box(Rect::inches(0.5, 0.3, 9.0, 0.8))
                .add_paragraph(Paragraph::new(title, TextFormat::new().size(44.0)));
        }
        pres
    }

    #[test]
    fn test_slide_ids_start_at_256() {
        let mut pres = MutablePresentation::new();
        assert_eq!(pres.add_slide().slide_id(), 256);
        assert_eq!(pres.add_slide().slide_id(), 257);
        assert_eq!(pres.slide_count(), 2);
        assert!(pres.slide_mut(2).is_none());
    }

    #[test]
    fn test_presentation_xml_lists_slides_in_order() {
        let pkg = sample().to_package().unwrap();
        let main = pkg.main_document_part().unwrap();
        let xml = main.xml_str().unwrap();

        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/><p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));

        let slide3 = main.rels().get("rId4").unwrap();
        assert_eq!(slide3.target_ref(), "slides/slide3.xml");
    }

    #[test]
    fn test_master_layout_wiring() {
        let pkg = sample().to_package().unwrap();
        let master = pkg
            .get_part(&PackURI::new("/ppt/slideMasters/slideMaster1.xml").unwrap())
            .unwrap();
        assert_eq!(
            master.rels().get("rId1").unwrap().reltype(),
            rt::SLIDE_LAYOUT
        );
        assert_eq!(master.rels().get("rId2").unwrap().reltype(), rt::THEME);

        let slide = pkg
            .get_part(&PackURI::new("/ppt/slides/slide1.xml").unwrap())
            .unwrap();
        assert_eq!(
            slide.rels().get("rId1").unwrap().target_ref(),
            "../slideLayouts/slideLayout1.xml"
        );
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        sample().save(&path).unwrap();

        let pkg = OpcPackage::open(&path).unwrap();
        // 3 slides + presentation, master, layout, theme, 3 props, core, app
        assert_eq!(pkg.part_count(), 13);
        let app = pkg.part_by_reltype(rt::EXTENDED_PROPERTIES).unwrap();
        assert!(app.xml_str().unwrap().contains("<Slides>3</Slides>"));
    }

    #[test]
    fn test_rejects_empty_slide_size() {
        let mut pres = MutablePresentation::new();
        assert!(pres.set_slide_size(0, 100).is_err());
        pres.set_slide_size(12_192_000, 6_858_000).unwrap();
        assert_eq!(pres.slide_width(), 12_192_000);
    }
}
