//! Part names inside an OPC package.
//!
//! A part name always begins with `/` and uses forward slashes as separators,
//! e.g. `/ppt/slides/slide3.xml`. Relationship targets are stored relative to
//! the directory of their source part and are resolved back with
//! [`PackURI::from_rel_ref`].

use std::fmt;

/// The package pseudo-partname, representing the package itself
pub const PACKAGE_URI: &str = "/";

/// The URI for the [Content_Types].xml part
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

/// An absolute part name within a package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackURI {
    uri: String,
}

impl PackURI {
    /// Create a new PackURI; the string must begin with a forward slash.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self, String> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(format!("PackURI must begin with slash, got '{}'", uri));
        }
        Ok(PackURI { uri })
    }

    /// Resolve a relative reference (`../slideLayouts/slideLayout1.xml`)
    /// against a base directory (`/ppt/slides`).
    pub fn from_rel_ref(base_uri: &str, relative_ref: &str) -> Result<Self, String> {
        // A leading slash makes the reference absolute already
        let joined = if relative_ref.starts_with('/') {
            relative_ref.to_string()
        } else if base_uri.ends_with('/') {
            format!("{}{}", base_uri, relative_ref)
        } else {
            format!("{}/{}", base_uri, relative_ref)
        };
        Self::new(normalize(&joined))
    }

    /// Directory portion, e.g. `/ppt/slides` for `/ppt/slides/slide1.xml`.
    pub fn base_uri(&self) -> &str {
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// Final path segment, empty for the package pseudo-partname.
    pub fn filename(&self) -> &str {
        self.uri
            .rfind('/')
            .map(|pos| &self.uri[pos + 1..])
            .unwrap_or("")
    }

    /// Extension without the leading period.
    pub fn ext(&self) -> &str {
        let filename = self.filename();
        filename
            .rfind('.')
            .map(|pos| &filename[pos + 1..])
            .unwrap_or("")
    }

    /// Numeric suffix of tuple partnames: 21 for `/ppt/slides/slide21.xml`.
    pub fn idx(&self) -> Option<u32> {
        let filename = self.filename();
        let stem = filename
            .rfind('.')
            .map(|pos| &filename[..pos])
            .unwrap_or(filename);
        let digits = stem
            .bytes()
            .rev()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 || digits == stem.len() {
            return None;
        }
        atoi_simd::parse::<u32, false, false>(&stem.as_bytes()[stem.len() - digits..]).ok()
    }

    /// ZIP member name, i.e. the URI without its leading slash.
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    /// Reference to this part relative to `base_uri`, as written in a `.rels` file.
    pub fn relative_ref(&self, base_uri: &str) -> String {
        if base_uri == "/" {
            return self.membername().to_string();
        }

        let from: Vec<&str> = base_uri.split('/').filter(|s| !s.is_empty()).collect();
        let to: Vec<&str> = self.uri.split('/').filter(|s| !s.is_empty()).collect();
        let common = from
            .iter()
            .zip(to.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let mut segments: Vec<&str> = Vec::with_capacity(from.len() + to.len());
        segments.extend(std::iter::repeat_n("..", from.len() - common));
        segments.extend(&to[common..]);
        segments.join("/")
    }

    /// PackURI of the `.rels` part holding this part's relationships.
    pub fn rels_uri(&self) -> Result<PackURI, String> {
        let base_uri = self.base_uri();
        if base_uri == "/" {
            Self::new(format!("/_rels/{}.rels", self.filename()))
        } else {
            Self::new(format!("{}/_rels/{}.rels", base_uri, self.filename()))
        }
    }

    /// Get the full URI string.
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

/// Collapse `.` and `..` segments of an absolute path.
fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {},
            ".." => {
                segments.pop();
            },
            other => segments.push(other),
        }
    }
    format!("/{}", segments.join("/"))
}

impl fmt::Display for PackURI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

impl AsRef<str> for PackURI {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packuri_new() {
        assert!(PackURI::new("/ppt/presentation.xml").is_ok());
        assert!(PackURI::new("ppt/presentation.xml").is_err());
    }

    #[test]
    fn test_components() {
        let uri = PackURI::new("/ppt/slides/slide12.xml").unwrap();
        assert_eq!(uri.base_uri(), "/ppt/slides");
        assert_eq!(uri.filename(), "slide12.xml");
        assert_eq!(uri.ext(), "xml");
        assert_eq!(uri.idx(), Some(12));
        assert_eq!(uri.membername(), "ppt/slides/slide12.xml");

        let root = PackURI::new("/").unwrap();
        assert_eq!(root.base_uri(), "/");
        assert_eq!(root.filename(), "");
        assert_eq!(root.membername(), "");

        let single = PackURI::new("/ppt/presentation.xml").unwrap();
        assert_eq!(single.idx(), None);
    }

    #[test]
    fn test_relative_ref() {
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();
        assert_eq!(
            layout.relative_ref("/ppt/slides"),
            "../slideLayouts/slideLayout1.xml"
        );

        let slide = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        assert_eq!(slide.relative_ref("/ppt"), "slides/slide1.xml");
        assert_eq!(slide.relative_ref("/"), "ppt/slides/slide1.xml");
    }

    #[test]
    fn test_from_rel_ref() {
        let uri = PackURI::from_rel_ref("/ppt/slides", "../media/media1.mp4").unwrap();
        assert_eq!(uri.as_str(), "/ppt/media/media1.mp4");

        let uri = PackURI::from_rel_ref("/", "ppt/presentation.xml").unwrap();
        assert_eq!(uri.as_str(), "/ppt/presentation.xml");

        let uri = PackURI::from_rel_ref("/ppt/slides", "/ppt/media/image1.png").unwrap();
        assert_eq!(uri.as_str(), "/ppt/media/image1.png");
    }

    #[test]
    fn test_rels_uri() {
        let slide = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        assert_eq!(
            slide.rels_uri().unwrap().as_str(),
            "/ppt/slides/_rels/slide1.xml.rels"
        );

        let root = PackURI::new(PACKAGE_URI).unwrap();
        assert_eq!(root.rels_uri().unwrap().as_str(), "/_rels/.rels");
    }
}
