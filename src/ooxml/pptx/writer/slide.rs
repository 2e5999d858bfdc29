/// Slide types and implementation for PPTX presentations.
use crate::common::RGBColor;
use crate::ooxml::error::Result;

use super::shape::{MutableShape, Rect, write_solid_fill};

/// A slide under construction.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// `p:sldId/@id`, unique within the presentation (>= 256)
    pub(crate) slide_id: u32,
    pub(crate) background: Option<RGBColor>,
    pub(crate) shapes: Vec<MutableShape>,
}

impl MutableSlide {
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            background: None,
            shapes: Vec::new(),
        }
    }

    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Solid background color; `None` inherits the master background.
    pub fn set_background(&mut self, color: RGBColor) {
        self.background = Some(color);
    }

    pub fn background(&self) -> Option<RGBColor> {
        self.background
    }

    /// Add an empty text box and return it for filling.
    pub fn add_text_box(&mut self, rect: Rect) -> &mut MutableShape {
        let shape = MutableShape::new_text_box(self.next_shape_id(), rect);
        self.push(shape)
    }

    /// Add a rectangle auto shape.
    pub fn add_rectangle(&mut self, rect: Rect) -> &mut MutableShape {
        let shape = MutableShape::new_rectangle(self.next_shape_id(), rect);
        self.push(shape)
    }

    fn push(&mut self, shape: MutableShape) -> &mut MutableShape {
        let index = self.shapes.len();
        self.shapes.push(shape);
        &mut self.shapes[index]
    }

    /// ID 1 belongs to the shape tree itself.
    fn next_shape_id(&self) -> u32 {
        self.shapes.len() as u32 + 2
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Text of every text box, in z-order.
    pub fn text(&self) -> String {
        self.shapes
            .iter()
            .map(MutableShape::text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Generate the slide part XML.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048 + self.shapes.len() * 1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
        );
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);

        xml.push_str("<p:cSld>");

        // p:bg must precede p:spTree
        if let Some(ref color) = self.background {
            xml.push_str("<p:bg><p:bgPr>");
            write_solid_fill(&mut xml, color)?;
            xml.push_str("<a:effectLst/></p:bgPr></p:bg>");
        }

        xml.push_str("<p:spTree>");
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str(r#"<a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm>"#);
        xml.push_str("</p:grpSpPr>");

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::format::{Paragraph, TextFormat};

    #[test]
    fn test_shape_ids_are_sequential() {
        let mut slide = MutableSlide::new(256);
        let bar = slide.add_rectangle(Rect::inches(0.0, 0.0, 10.0, 0.1)).shape_id();
        let title = slide.add_text_box(Rect::inches(0.5, 0.3, 9.0, 0.8)).shape_id();
        assert_eq!((bar, title), (2, 3));
        assert_eq!(slide.shape_count(), 2);
    }

    #[test]
    fn test_background_precedes_tree() {
        let mut slide = MutableSlide::new(256);
        slide.set_background(RGBColor::new(59, 130, 246));
        slide
            .add_text_box(Rect::inches(0.5, 2.5, 9.0, 1.5))
            .add_paragraph(Paragraph::new("Turnero ZS", TextFormat::new().size(60.0)));

        let xml = slide.to_xml().unwrap();
        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
        assert!(xml.contains(r#"<a:srgbClr val="3B82F6"/>"#));
        assert!(xml.ends_with("</p:sld>"));
        assert_eq!(slide.text(), "Turnero ZS");
    }

    #[test]
    fn test_no_background_inherits_master() {
        let slide = MutableSlide::new(300);
        let xml = slide.to_xml().unwrap();
        assert!(!xml.contains("<p:bg>"));
        assert_eq!(slide.slide_id(), 300);
    }
}
