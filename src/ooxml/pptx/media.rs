//! Video media for PPTX slides.
//!
//! A video on a slide is a `p:pic` whose non-visual properties carry an
//! `a:videoFile` link plus the PowerPoint 2010 `p14:media` extension, and
//! whose blip fill is a poster frame image.

use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::content_type as ct;
use crate::ooxml::pptx::format::Rect;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt::Write as FmtWrite;

/// 1x1 PNG shown until the clip starts playing.
const POSTER_FRAME_PNG: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

/// Media type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Audio,
    Video,
}

/// Container formats recognised when embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFormat {
    Mp3,
    Wav,
    M4a,
    Mp4,
    M4v,
    Mov,
    Avi,
    Wmv,
    Unknown,
}

impl MediaFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "mp3" => MediaFormat::Mp3,
            "wav" => MediaFormat::Wav,
            "m4a" => MediaFormat::M4a,
            "mp4" => MediaFormat::Mp4,
            "m4v" => MediaFormat::M4v,
            "mov" => MediaFormat::Mov,
            "avi" => MediaFormat::Avi,
            "wmv" => MediaFormat::Wmv,
            _ => MediaFormat::Unknown,
        }
    }

    /// Detect format from the container header.
    pub fn detect_from_bytes(data: &[u8]) -> Self {
        if data.len() < 12 {
            return MediaFormat::Unknown;
        }

        if data.starts_with(b"ID3") {
            return MediaFormat::Mp3;
        }

        if data.starts_with(b"RIFF") {
            return match &data[8..12] {
                b"WAVE" => MediaFormat::Wav,
                b"AVI " => MediaFormat::Avi,
                _ => MediaFormat::Unknown,
            };
        }

        // ISO base media: size, "ftyp", major brand
        if &data[4..8] == b"ftyp" {
            return match &data[8..12] {
                b"M4A " | b"M4B " => MediaFormat::M4a,
                b"M4V " | b"M4VH" | b"M4VP" => MediaFormat::M4v,
                b"qt  " => MediaFormat::Mov,
                _ => MediaFormat::Mp4,
            };
        }

        // ASF header GUID
        if data[0..8] == [0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11] {
            return MediaFormat::Wmv;
        }

        MediaFormat::Unknown
    }

    /// Header sniffing first. The extension is only trusted for formats
    /// without a fixed signature; a container format whose header is not
    /// found stays `Unknown`.
    pub fn detect(data: &[u8], ext: Option<&str>) -> Self {
        if data.is_empty() {
            return MediaFormat::Unknown;
        }
        match Self::detect_from_bytes(data) {
            MediaFormat::Unknown => match ext.map(Self::from_extension) {
                Some(format) if !format.has_signature() => format,
                _ => MediaFormat::Unknown,
            },
            format => format,
        }
    }

    /// Whether the container starts with a magic number `detect_from_bytes`
    /// recognises. Raw MPEG audio frames have none.
    pub fn has_signature(&self) -> bool {
        !matches!(self, MediaFormat::Mp3 | MediaFormat::Unknown)
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            MediaFormat::Mp3 => "audio/mpeg",
            MediaFormat::Wav => "audio/wav",
            MediaFormat::M4a => "audio/mp4",
            MediaFormat::Mp4 => ct::MP4,
            MediaFormat::M4v => ct::M4V,
            MediaFormat::Mov => ct::MOV,
            MediaFormat::Avi => ct::AVI,
            MediaFormat::Wmv => ct::WMV,
            MediaFormat::Unknown => "application/octet-stream",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            MediaFormat::Mp3 => "mp3",
            MediaFormat::Wav => "wav",
            MediaFormat::M4a => "m4a",
            MediaFormat::Mp4 => "mp4",
            MediaFormat::M4v => "m4v",
            MediaFormat::Mov => "mov",
            MediaFormat::Avi => "avi",
            MediaFormat::Wmv => "wmv",
            MediaFormat::Unknown => "bin",
        }
    }

    pub fn media_type(&self) -> Option<MediaType> {
        match self {
            MediaFormat::Mp3 | MediaFormat::Wav | MediaFormat::M4a => Some(MediaType::Audio),
            MediaFormat::Mp4
            | MediaFormat::M4v
            | MediaFormat::Mov
            | MediaFormat::Avi
            | MediaFormat::Wmv => Some(MediaType::Video),
            MediaFormat::Unknown => None,
        }
    }
}

/// A video clip ready to be placed on a slide.
#[derive(Debug, Clone)]
pub struct VideoClip {
    pub data: Vec<u8>,
    pub format: MediaFormat,
    pub rect: Rect,
    /// Shape name, usually the source file name
    pub name: String,
}

impl VideoClip {
    /// Validate `data` as a video container.
    ///
    /// `file_name` supplies the shape name. Empty data and data without a
    /// recognised video header are rejected whatever the extension says.
    pub fn new(data: Vec<u8>, file_name: &str, rect: Rect) -> Result<Self> {
        if data.is_empty() {
            return Err(OoxmlError::UnsupportedMedia(format!("{} is empty", file_name)));
        }
        let ext = file_name.rsplit_once('.').map(|(_, ext)| ext);
        let format = MediaFormat::detect(&data, ext);
        match format.media_type() {
            Some(MediaType::Video) => Ok(Self {
                data,
                format,
                rect,
                name: file_name.to_string(),
            }),
            Some(MediaType::Audio) => Err(OoxmlError::UnsupportedMedia(format!(
                "{} is an audio file",
                file_name
            ))),
            None => Err(OoxmlError::UnsupportedMedia(format!(
                "{} is not a recognised video container",
                file_name
            ))),
        }
    }

    /// Write the `p:pic` element.
    ///
    /// `video_rel_id` and `media_rel_id` both target the media part;
    /// `poster_rel_id` targets the poster image.
    pub(crate) fn to_shape_xml(
        &self,
        xml: &mut String,
        shape_id: u32,
        video_rel_id: &str,
        media_rel_id: &str,
        poster_rel_id: &str,
    ) -> Result<()> {
        xml.push_str("<p:pic><p:nvPicPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"><a:hlinkClick r:id="" action="ppaction://media"/></p:cNvPr>"#,
            shape_id,
            escape_xml(&self.name)
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);

        xml.push_str("<p:nvPr>");
        write!(xml, r#"<a:videoFile r:link="{}"/>"#, video_rel_id)
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        xml.push_str(r#"<p:extLst><p:ext uri="{DAA4B4D4-6D71-4841-9C94-3DE7FCFB9230}">"#);
        write!(
            xml,
            r#"<p14:media xmlns:p14="http://schemas.microsoft.com/office/powerpoint/2010/main" r:embed="{}"/>"#,
            media_rel_id
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        xml.push_str("</p:ext></p:extLst>");
        xml.push_str("</p:nvPr></p:nvPicPr>");

        xml.push_str("<p:blipFill>");
        write!(xml, r#"<a:blip r:embed="{}"/>"#, poster_rel_id)
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        xml.push_str("<a:stretch><a:fillRect/></a:stretch></p:blipFill>");

        xml.push_str("<p:spPr>");
        super::writer::shape::write_xfrm(xml, &self.rect)?;
        xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
        xml.push_str("</p:spPr></p:pic>");

        Ok(())
    }
}

/// PNG bytes of the default poster frame.
pub fn poster_frame_png() -> Result<Vec<u8>> {
    STANDARD
        .decode(POSTER_FRAME_PNG)
        .map_err(|e| OoxmlError::Other(format!("poster frame: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MP4_HEADER: &[u8] = b"\x00\x00\x00\x18ftypmp42\x00\x00\x00\x00mp42isom";

    #[test]
    fn test_detect_video_containers() {
        assert_eq!(MediaFormat::detect_from_bytes(MP4_HEADER), MediaFormat::Mp4);
        assert_eq!(
            MediaFormat::detect_from_bytes(b"\x00\x00\x00\x14ftypqt  \x00\x00\x00\x00"),
            MediaFormat::Mov
        );
        assert_eq!(
            MediaFormat::detect_from_bytes(b"RIFF\x00\x00\x00\x00AVI LIST"),
            MediaFormat::Avi
        );
        assert_eq!(
            MediaFormat::detect_from_bytes(b"RIFF\x00\x00\x00\x00WAVEfmt "),
            MediaFormat::Wav
        );
    }

    #[test]
    fn test_extension_fallback() {
        // Container formats need their header
        assert_eq!(MediaFormat::detect(b"short", Some("MP4")), MediaFormat::Unknown);
        assert_eq!(
            MediaFormat::detect(b"hello this is text not video", Some("mov")),
            MediaFormat::Unknown
        );
        assert_eq!(MediaFormat::detect(b"", Some("mp4")), MediaFormat::Unknown);
        assert_eq!(MediaFormat::detect(b"short", None), MediaFormat::Unknown);
        // Raw MPEG frames have no signature
        assert_eq!(MediaFormat::detect(b"\xFF\xFB\x90\x64", Some("mp3")), MediaFormat::Mp3);
    }

    #[test]
    fn test_clip_rejects_non_video() {
        let rect = Rect::inches(2.0, 1.5, 6.0, 4.0);
        assert!(VideoClip::new(MP4_HEADER.to_vec(), "01-flujo.mp4", rect).is_ok());
        assert!(matches!(
            VideoClip::new(b"plain text, not a video".to_vec(), "notes.txt", rect),
            Err(OoxmlError::UnsupportedMedia(_))
        ));
        assert!(matches!(
            VideoClip::new(Vec::new(), "empty.mp4", rect),
            Err(OoxmlError::UnsupportedMedia(_))
        ));
        assert!(matches!(
            VideoClip::new(b"hello this is text not video".to_vec(), "text.mp4", rect),
            Err(OoxmlError::UnsupportedMedia(_))
        ));
        assert!(matches!(
            VideoClip::new(b"ID3\x04\x00\x00\x00\x00\x00\x00\x00\x00".to_vec(), "a.mp4", rect),
            Err(OoxmlError::UnsupportedMedia(_))
        ));
    }

    #[test]
    fn test_shape_xml() {
        let clip = VideoClip::new(MP4_HEADER.to_vec(), "demo.mp4", Rect::inches(2.0, 1.5, 6.0, 4.0))
            .unwrap();
        let mut xml = String::new();
        clip.to_shape_xml(&mut xml, 7, "rId2", "rId3", "rId4").unwrap();

        assert!(xml.contains(r#"<p:cNvPr id="7" name="demo.mp4">"#));
        assert!(xml.contains(r#"<a:videoFile r:link="rId2"/>"#));
        assert!(xml.contains(r#"r:embed="rId3"/>"#));
        assert!(xml.contains(r#"<a:blip r:embed="rId4"/>"#));
        assert!(xml.contains(r#"<a:off x="1828800" y="1371600"/>"#));
    }

    #[test]
    fn test_poster_frame_is_png() {
        let png = poster_frame_png().unwrap();
        assert!(png.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]));
    }
}
