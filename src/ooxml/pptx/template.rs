//! Built-in parts of a fresh presentation.
//!
//! A new deck gets one slide master with a single blank layout, one theme and
//! the presentation-level property parts PowerPoint expects to find.

use crate::common::xml::escape_xml;
use chrono::{DateTime, Utc};

/// Slide width of a 4:3 deck (10in) in EMUs.
pub const DEFAULT_SLIDE_WIDTH: i64 = 9_144_000;
/// Slide height of a 4:3 deck (7.5in) in EMUs.
pub const DEFAULT_SLIDE_HEIGHT: i64 = 6_858_000;

/// Shape tree content shared by every empty `p:cSld`.
const EMPTY_SP_TREE: &str = concat!(
    r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree>"#,
);

const PML_NAMESPACES: &str = concat!(
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#,
);

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Slide master; its layout list points at `rId1`.
pub fn slide_master_xml() -> String {
    format!(
        concat!(
            "{decl}<p:sldMaster {ns}><p:cSld>",
            r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#,
            "{tree}</p:cSld>",
            r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
            r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" "#,
            r#"hlink="hlink" folHlink="folHlink"/>"#,
            r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#,
            "</p:sldMaster>"
        ),
        decl = XML_DECLARATION,
        ns = PML_NAMESPACES,
        tree = EMPTY_SP_TREE,
    )
}

/// The blank layout every generated slide uses.
pub fn blank_layout_xml() -> String {
    format!(
        concat!(
            r#"{decl}<p:sldLayout {ns} type="blank" preserve="1"><p:cSld name="Blank">"#,
            "{tree}</p:cSld>",
            "<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"
        ),
        decl = XML_DECLARATION,
        ns = PML_NAMESPACES,
        tree = EMPTY_SP_TREE,
    )
}

/// Office theme with the standard color, font and format schemes.
pub fn theme_xml() -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECLARATION);
    xml.push_str(
        r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme"><a:themeElements>"#,
    );

    xml.push_str(r#"<a:clrScheme name="Office">"#);
    xml.push_str(r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#);
    xml.push_str(r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#);
    for (tag, hex) in [
        ("dk2", "1F497D"),
        ("lt2", "EEECE1"),
        ("accent1", "4F81BD"),
        ("accent2", "C0504D"),
        ("accent3", "9BBB59"),
        ("accent4", "8064A2"),
        ("accent5", "4BACC6"),
        ("accent6", "F79646"),
        ("hlink", "0000FF"),
        ("folHlink", "800080"),
    ] {
        xml.push_str(&format!(r#"<a:{tag}><a:srgbClr val="{hex}"/></a:{tag}>"#));
    }
    xml.push_str("</a:clrScheme>");

    xml.push_str(r#"<a:fontScheme name="Office">"#);
    for (tag, face) in [("majorFont", "Calibri"), ("minorFont", "Calibri")] {
        xml.push_str(&format!(
            r#"<a:{tag}><a:latin typeface="{face}"/><a:ea typeface=""/><a:cs typeface=""/></a:{tag}>"#
        ));
    }
    xml.push_str("</a:fontScheme>");

    xml.push_str(r#"<a:fmtScheme name="Office">"#);
    xml.push_str("<a:fillStyleLst>");
    for _ in 0..3 {
        xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    }
    xml.push_str("</a:fillStyleLst><a:lnStyleLst>");
    for width in [9525, 25400, 38100] {
        xml.push_str(&format!(
            r#"<a:ln w="{width}"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#
        ));
    }
    xml.push_str("</a:lnStyleLst><a:effectStyleLst>");
    for _ in 0..3 {
        xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
    }
    xml.push_str("</a:effectStyleLst><a:bgFillStyleLst>");
    for _ in 0..3 {
        xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    }
    xml.push_str("</a:bgFillStyleLst></a:fmtScheme>");

    xml.push_str("</a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>");
    xml
}

pub fn pres_props_xml() -> String {
    format!("{XML_DECLARATION}<p:presentationPr {PML_NAMESPACES}/>")
}

pub fn view_props_xml() -> String {
    format!(
        concat!(
            "{decl}<p:viewPr {ns}>",
            r#"<p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr>"#,
            r#"<p:gridSpacing cx="76200" cy="76200"/></p:viewPr>"#
        ),
        decl = XML_DECLARATION,
        ns = PML_NAMESPACES,
    )
}

pub fn table_styles_xml() -> String {
    format!(
        r#"{XML_DECLARATION}<a:tblStyleLst xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#
    )
}

/// `docProps/core.xml` with creation and modification stamped at `now`.
pub fn core_props_xml(title: &str, creator: &str, now: DateTime<Utc>) -> String {
    let stamp = now.format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        concat!(
            "{decl}",
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<dc:title>{title}</dc:title><dc:creator>{creator}</dc:creator>",
            "<cp:lastModifiedBy>{creator}</cp:lastModifiedBy><cp:revision>1</cp:revision>",
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{stamp}</dcterms:created>"#,
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{stamp}</dcterms:modified>"#,
            "</cp:coreProperties>"
        ),
        decl = XML_DECLARATION,
        title = escape_xml(title),
        creator = escape_xml(creator),
        stamp = stamp,
    )
}

/// `docProps/app.xml` reporting the slide count.
pub fn app_props_xml(application: &str, slide_count: usize) -> String {
    format!(
        concat!(
            "{decl}",
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            "<Application>{app}</Application><PresentationFormat>On-screen Show (4:3)</PresentationFormat>",
            "<Slides>{slides}</Slides></Properties>"
        ),
        decl = XML_DECLARATION,
        app = escape_xml(application),
        slides = slide_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_master_references_layout() {
        let xml = slide_master_xml();
        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:cNvPr id="1" name=""/>"#));
    }

    #[test]
    fn test_theme_is_complete() {
        let xml = theme_xml();
        assert_eq!(xml.matches("<a:effectStyle>").count(), 3);
        assert!(xml.contains(r#"<a:accent6><a:srgbClr val="F79646"/></a:accent6>"#));
        assert!(xml.ends_with("</a:theme>"));
    }

    #[test]
    fn test_table_styles_braces() {
        assert!(table_styles_xml().contains(r#"def="{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}""#));
    }

    #[test]
    fn test_doc_props() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        let core = core_props_xml("Turnero ZS", "turnero-deck", now);
        assert!(core.contains("<dc:title>Turnero ZS</dc:title>"));
        assert!(core.contains(">2025-03-14T09:30:00Z</dcterms:created>"));

        let app = app_props_xml("turnero-deck", 27);
        assert!(app.contains("<Slides>27</Slides>"));
    }
}
