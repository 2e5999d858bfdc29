/// Shape types and implementation for PPTX presentations.
use crate::common::RGBColor;
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as FmtWrite;

pub use super::super::format::{Paragraph, Rect, TextFormat};

/// Language tag written on every run.
const RUN_LANG: &str = "es-AR";

/// A shape on a slide.
#[derive(Debug, Clone)]
pub struct MutableShape {
    pub(crate) shape_id: u32,
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        rect: Rect,
        paragraphs: Vec<Paragraph>,
        word_wrap: bool,
    },
    Rectangle {
        rect: Rect,
        fill_color: Option<RGBColor>,
        line_color: Option<RGBColor>,
    },
}

impl MutableShape {
    pub(crate) fn new_text_box(shape_id: u32, rect: Rect) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::TextBox {
                rect,
                paragraphs: Vec::new(),
                word_wrap: false,
            },
        }
    }

    pub(crate) fn new_rectangle(shape_id: u32, rect: Rect) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Rectangle {
                rect,
                fill_color: None,
                line_color: None,
            },
        }
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn rect(&self) -> Rect {
        match &self.shape_type {
            ShapeType::TextBox { rect, .. } | ShapeType::Rectangle { rect, .. } => *rect,
        }
    }

    /// Append a paragraph (text boxes only).
    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        if let ShapeType::TextBox {
            ref mut paragraphs, ..
        } = self.shape_type
        {
            paragraphs.push(paragraph);
        }
        self
    }

    /// Builder method: wrap text at the frame edge (text boxes only).
    pub fn word_wrap(&mut self, wrap: bool) -> &mut Self {
        if let ShapeType::TextBox {
            ref mut word_wrap, ..
        } = self.shape_type
        {
            *word_wrap = wrap;
        }
        self
    }

    /// Builder method: solid fill (rectangles only).
    pub fn fill(&mut self, color: RGBColor) -> &mut Self {
        if let ShapeType::Rectangle {
            ref mut fill_color, ..
        } = self.shape_type
        {
            *fill_color = Some(color);
        }
        self
    }

    /// Builder method: outline color (rectangles only).
    pub fn line(&mut self, color: RGBColor) -> &mut Self {
        if let ShapeType::Rectangle {
            ref mut line_color, ..
        } = self.shape_type
        {
            *line_color = Some(color);
        }
        self
    }

    /// Concatenated paragraph text, one line per paragraph.
    pub fn text(&self) -> String {
        match &self.shape_type {
            ShapeType::TextBox { paragraphs, .. } => paragraphs
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            ShapeType::Rectangle { .. } => String::new(),
        }
    }

    /// Write the `p:sp` element for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox {
                rect,
                paragraphs,
                word_wrap,
            } => {
                xml.push_str("<p:sp><p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
                    self.shape_id,
                    self.shape_id.saturating_sub(1)
                )
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#);

                xml.push_str("<p:spPr>");
                write_xfrm(xml, rect)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/>"#);
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                write!(
                    xml,
                    r#"<a:bodyPr wrap="{}" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#,
                    if *word_wrap { "square" } else { "none" }
                )
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                xml.push_str("<a:lstStyle/>");
                if paragraphs.is_empty() {
                    xml.push_str("<a:p/>");
                }
                for paragraph in paragraphs {
                    write_paragraph(xml, paragraph)?;
                }
                xml.push_str("</p:txBody></p:sp>");
            },
            ShapeType::Rectangle {
                rect,
                fill_color,
                line_color,
            } => {
                xml.push_str("<p:sp><p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Rectangle {}"/>"#,
                    self.shape_id,
                    self.shape_id.saturating_sub(1)
                )
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                xml.push_str("<p:cNvSpPr/><p:nvPr/></p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, rect)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                match fill_color {
                    Some(color) => write_solid_fill(xml, color)?,
                    None => xml.push_str("<a:noFill/>"),
                }
                if let Some(color) = line_color {
                    xml.push_str("<a:ln>");
                    write_solid_fill(xml, color)?;
                    xml.push_str("</a:ln>");
                }
                xml.push_str("</p:spPr>");
                xml.push_str("</p:sp>");
            },
        }

        Ok(())
    }
}

pub(crate) fn write_xfrm(xml: &mut String, rect: &Rect) -> Result<()> {
    write!(
        xml,
        r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        rect.x, rect.y, rect.width, rect.height
    )
    .map_err(|e| OoxmlError::Xml(e.to_string()))
}

pub(crate) fn write_solid_fill(xml: &mut String, color: &RGBColor) -> Result<()> {
    write!(
        xml,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        color.to_hex()
    )
    .map_err(|e| OoxmlError::Xml(e.to_string()))
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) -> Result<()> {
    let pf = &paragraph.paragraph_format;
    xml.push_str("<a:p>");

    write!(xml, r#"<a:pPr lvl="{}""#, pf.level).map_err(|e| OoxmlError::Xml(e.to_string()))?;
    if let Some(alignment) = pf.alignment {
        write!(xml, r#" algn="{}""#, alignment.as_attr())
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    }
    xml.push('>');
    // Schema order: spcBef before spcAft
    if let Some(points) = pf.space_before {
        write!(
            xml,
            r#"<a:spcBef><a:spcPts val="{}"/></a:spcBef>"#,
            pt_to_centipoints(points)
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    }
    if let Some(points) = pf.space_after {
        write!(
            xml,
            r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
            pt_to_centipoints(points)
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    }
    xml.push_str("</a:pPr>");

    let mut lines = paragraph.text.split('\n').peekable();
    while let Some(line) = lines.next() {
        if !line.is_empty() {
            xml.push_str("<a:r>");
            write_run_properties(xml, "a:rPr", &paragraph.text_format)?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(line))
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
            xml.push_str("</a:r>");
        }
        if lines.peek().is_some() {
            xml.push_str("<a:br>");
            write_run_properties(xml, "a:rPr", &paragraph.text_format)?;
            xml.push_str("</a:br>");
        }
    }

    // Keeps the font size on empty lines
    write_run_properties(xml, "a:endParaRPr", &paragraph.text_format)?;
    xml.push_str("</a:p>");
    Ok(())
}

fn write_run_properties(xml: &mut String, tag: &str, format: &TextFormat) -> Result<()> {
    write!(xml, r#"<{} lang="{}""#, tag, RUN_LANG).map_err(|e| OoxmlError::Xml(e.to_string()))?;
    if let Some(size) = format.size {
        write!(xml, r#" sz="{}""#, pt_to_centipoints(size))
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    }
    if let Some(bold) = format.bold {
        xml.push_str(if bold { r#" b="1""# } else { r#" b="0""# });
    }
    if let Some(italic) = format.italic {
        xml.push_str(if italic { r#" i="1""# } else { r#" i="0""# });
    }
    xml.push_str(r#" dirty="0""#);

    let Some(ref color) = format.color else {
        xml.push_str("/>");
        return Ok(());
    };
    xml.push('>');
    write_solid_fill(xml, color)?;
    write!(xml, "</{}>", tag).map_err(|e| OoxmlError::Xml(e.to_string()))?;
    Ok(())
}
