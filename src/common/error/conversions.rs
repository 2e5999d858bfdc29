//! Conversions from the package-level error types into [`Error`].

use super::types::Error;
use crate::ooxml::error::OoxmlError;
use crate::ooxml::opc::error::OpcError;

impl From<OpcError> for Error {
    fn from(err: OpcError) -> Self {
        match err {
            OpcError::PackageNotFound(s) => Error::PresentationNotFound(s.into()),
            OpcError::PartNotFound(s)
            | OpcError::RelationshipNotFound(s)
            | OpcError::ContentTypeNotFound(s) => Error::ComponentNotFound(s),
            OpcError::InvalidPackUri(s) | OpcError::InvalidRelationship(s) => {
                Error::CorruptedFile(s)
            },
            OpcError::XmlError(s) | OpcError::AttrError(s) => Error::XmlError(s),
            OpcError::Utf8Error(e) => Error::XmlError(e.to_string()),
            OpcError::ZipError(e) => Error::ZipError(e.to_string()),
            OpcError::IoError(e) => Error::Io(e),
        }
    }
}

impl From<OoxmlError> for Error {
    fn from(err: OoxmlError) -> Self {
        match err {
            OoxmlError::Opc(e) => Error::from(e),
            OoxmlError::Xml(s) => Error::XmlError(s),
            OoxmlError::PartNotFound(s) => Error::ComponentNotFound(s),
            OoxmlError::InvalidContentType { expected, got } => {
                Error::InvalidContentType { expected, got }
            },
            OoxmlError::InvalidRelationship(s) | OoxmlError::InvalidFormat(s) => {
                Error::CorruptedFile(s)
            },
            OoxmlError::UnsupportedMedia(s) => Error::UnsupportedMedia(s),
            OoxmlError::Io(e) => Error::Io(e),
            OoxmlError::Other(s) => Error::Other(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_package_maps_to_not_found() {
        let err: Error = OpcError::PackageNotFound("deck.pptx".to_string()).into();
        assert!(matches!(err, Error::PresentationNotFound(p) if p.ends_with("deck.pptx")));
    }

    #[test]
    fn test_nested_opc_error_is_flattened() {
        let err: Error = OoxmlError::Opc(OpcError::PartNotFound("/ppt/x.xml".into())).into();
        assert!(matches!(err, Error::ComponentNotFound(_)));
    }
}
