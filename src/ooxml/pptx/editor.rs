//! In-place editing of slides in an existing package.
//!
//! New shapes are rendered with the same writers used for fresh decks and
//! spliced in front of the closing `</p:spTree>` tag, so everything already
//! on the slide is left byte-for-byte untouched.

use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::part::find_elements_with_attrs;
use crate::ooxml::opc::{BlobPart, OpcPackage, PackURI};
use crate::ooxml::pptx::format::{Paragraph, Rect};
use crate::ooxml::pptx::media::{VideoClip, poster_frame_png};
use crate::ooxml::pptx::writer::MutableShape;
use log::debug;
use memchr::memmem;

const SP_TREE_END: &[u8] = b"</p:spTree>";

/// Appends shapes to one slide of an open package.
pub struct SlideEditor<'a> {
    pkg: &'a mut OpcPackage,
    partname: PackURI,
    next_shape_id: u32,
}

impl<'a> SlideEditor<'a> {
    pub(crate) fn new(pkg: &'a mut OpcPackage, partname: PackURI) -> Result<Self> {
        let part = pkg.get_part(&partname)?;
        if memmem::rfind(part.blob(), SP_TREE_END).is_none() {
            return Err(OoxmlError::InvalidFormat(format!(
                "{} has no shape tree",
                partname
            )));
        }

        let max_id = find_elements_with_attrs(part.blob(), "cNvPr")?
            .iter()
            .filter_map(|attrs| attrs.get("id"))
            .filter_map(|id| atoi_simd::parse::<u32, false, false>(id.as_bytes()).ok())
            .max()
            .unwrap_or(1);

        Ok(Self {
            pkg,
            partname,
            next_shape_id: max_id + 1,
        })
    }

    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn take_shape_id(&mut self) -> u32 {
        let id = self.next_shape_id;
        self.next_shape_id += 1;
        id
    }

    /// Append a text box holding `paragraphs`; returns the new shape id.
    pub fn add_text_box(
        &mut self,
        rect: Rect,
        paragraphs: Vec<Paragraph>,
        word_wrap: bool,
    ) -> Result<u32> {
        let shape_id = self.take_shape_id();
        let mut shape = MutableShape::new_text_box(shape_id, rect);
        shape.word_wrap(word_wrap);
        for paragraph in paragraphs {
            shape.add_paragraph(paragraph);
        }

        let mut xml = String::with_capacity(1024);
        shape.to_xml(&mut xml)?;
        self.splice(&xml)?;
        Ok(shape_id)
    }

    /// Embed `clip` as a playable video; returns the new shape id.
    ///
    /// The clip is stored as a new media part next to a poster frame image,
    /// and the slide gains the video, media and image relationships.
    pub fn add_video(&mut self, clip: &VideoClip) -> Result<u32> {
        let media_uri = self.pkg.next_partname(&format!(
            "/ppt/media/media%d.{}",
            clip.format.extension()
        ))?;
        self.pkg.add_part(Box::new(BlobPart::new(
            media_uri.clone(),
            clip.format.mime_type().to_string(),
            clip.data.clone(),
        )));

        let poster_uri = self.pkg.next_partname("/ppt/media/image%d.png")?;
        self.pkg.add_part(Box::new(BlobPart::new(
            poster_uri.clone(),
            ct::PNG.to_string(),
            poster_frame_png()?,
        )));

        let slide = self.pkg.get_part_mut(&self.partname)?;
        let video_rel = slide.relate_to(&media_uri, rt::VIDEO);
        let media_rel = slide.relate_to(&media_uri, rt::MEDIA);
        let poster_rel = slide.relate_to(&poster_uri, rt::IMAGE);

        let shape_id = self.take_shape_id();
        let mut xml = String::with_capacity(1024);
        clip.to_shape_xml(&mut xml, shape_id, &video_rel, &media_rel, &poster_rel)?;
        self.splice(&xml)?;

        debug!(
            "embedded {} as {} on {}",
            clip.name, media_uri, self.partname
        );
        Ok(shape_id)
    }

    /// Insert `fragment` just before the last `</p:spTree>`.
    fn splice(&mut self, fragment: &str) -> Result<()> {
        let part = self.pkg.get_part_mut(&self.partname)?;
        let blob = part.blob();
        let pos = memmem::rfind(blob, SP_TREE_END).ok_or_else(|| {
            OoxmlError::InvalidFormat(format!("{} has no shape tree", self.partname))
        })?;

        let mut updated = Vec::with_capacity(blob.len() + fragment.len());
        updated.extend_from_slice(&blob[..pos]);
        updated.extend_from_slice(fragment.as_bytes());
        updated.extend_from_slice(&blob[pos..]);
        part.set_blob(updated);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::ooxml::pptx::Package;
    use crate::ooxml::pptx::format::{Paragraph, Rect, TextFormat};
    use crate::ooxml::pptx::media::VideoClip;
    use crate::ooxml::pptx::writer::MutablePresentation;
    use crate::ooxml::opc::constants::relationship_type as rt;
    use crate::ooxml::opc::PackURI;
    use std::io::Cursor;

    const MP4_BYTES: &[u8] = b"\x00\x00\x00\x18ftypmp42\x00\x00\x00\x00mp42isomfake-video-payload";

    fn two_slide_package() -> Package {
        let mut pres = MutablePresentation::new();
        for title in ["Portada", "Demo"] {
            let slide = pres.add_slide();
            slide.add_rectangle(Rect::inches(0.0, 0.0, 10.0, 0.1));
            slide
                .add_text_box(Rect::inches(0.5, 0.3, 9.0, 0.8))
                .add_paragraph(Paragraph::new(title, TextFormat::new()));
        }
        let bytes = pres.to_package().unwrap().to_bytes().unwrap();
        Package::from_reader(Cursor::new(bytes)).unwrap()
    }

    #[test]
    fn test_text_box_gets_next_free_id() {
        let mut pkg = two_slide_package();
        let before = pkg.slide_xml(1).unwrap().to_string();

        let mut editor = pkg.slide_mut(1).unwrap();
        let id = editor
            .add_text_box(
                Rect::inches(2.0, 1.5, 6.0, 4.0),
                vec![Paragraph::new("🎬 VIDEO: demo.mp4", TextFormat::new().size(14.0).bold())],
                true,
            )
            .unwrap();
        // Tree is 1, rectangle 2, title 3
        assert_eq!(id, 4);

        let after = pkg.slide_xml(1).unwrap();
        let insert_at = before.rfind("</p:spTree>").unwrap();
        assert!(after.starts_with(&before[..insert_at]));
        assert!(after.ends_with(&before[insert_at..]));
        assert!(pkg.slide_text(1).unwrap().contains("🎬 VIDEO: demo.mp4"));
        assert_eq!(pkg.slide_text(0).unwrap(), "Portada");
    }

    #[test]
    fn test_video_adds_media_and_poster_parts() {
        let mut pkg = two_slide_package();
        let parts_before = pkg.opc_package().part_count();

        let clip = VideoClip::new(MP4_BYTES.to_vec(), "demo.mp4", Rect::inches(2.0, 1.5, 6.0, 4.0))
            .unwrap();
        pkg.slide_mut(0).unwrap().add_video(&clip).unwrap();
        pkg.slide_mut(1).unwrap().add_video(&clip).unwrap();

        let opc = pkg.opc_package();
        assert_eq!(opc.part_count(), parts_before + 4);
        let media = opc
            .get_part(&PackURI::new("/ppt/media/media2.mp4").unwrap())
            .unwrap();
        assert_eq!(media.blob(), MP4_BYTES);
        assert_eq!(media.content_type(), "video/mp4");

        let slide = opc
            .get_part(&PackURI::new("/ppt/slides/slide1.xml").unwrap())
            .unwrap();
        let video = slide.rels().all_with_reltype(rt::VIDEO);
        let embedded = slide.rels().all_with_reltype(rt::MEDIA);
        assert_eq!(video.len(), 1);
        assert_eq!(embedded[0].target_ref(), "../media/media1.mp4");
        assert_eq!(
            slide.rels().all_with_reltype(rt::IMAGE)[0].target_ref(),
            "../media/image1.png"
        );

        let xml = pkg.slide_xml(0).unwrap();
        assert!(xml.contains(&format!(r#"<a:videoFile r:link="{}"/>"#, video[0].r_id())));
        assert!(xml.contains(r#"<p:cNvPr id="4" name="demo.mp4">"#));
    }

    #[test]
    fn test_embedded_video_survives_save() {
        let mut pkg = two_slide_package();
        let clip = VideoClip::new(MP4_BYTES.to_vec(), "demo.mp4", Rect::inches(2.0, 1.5, 6.0, 4.0))
            .unwrap();
        pkg.slide_mut(1).unwrap().add_video(&clip).unwrap();

        let reopened = Package::from_reader(Cursor::new(pkg.to_bytes().unwrap())).unwrap();
        assert_eq!(reopened.slide_count().unwrap(), 2);
        assert!(
            reopened
                .opc_package()
                .contains_part(&PackURI::new("/ppt/media/media1.mp4").unwrap())
        );
    }
}
