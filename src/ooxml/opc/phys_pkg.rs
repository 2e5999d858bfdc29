//! Physical (ZIP) container of an OPC package.
//!
//! The reader inflates every member up front; packages handled here are a
//! few dozen parts plus media, and the package reader needs random access to
//! `.rels` members while walking the relationship graph.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use log::debug;
use std::collections::HashMap;
use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Upper bound on the buffer reserved from a member's declared size.
const MAX_PREALLOC: u64 = 64 << 20;

/// Buffer reservation for a member; the declared size comes from the archive
/// header and is not trusted beyond [`MAX_PREALLOC`].
fn initial_capacity(declared_size: u64) -> usize {
    declared_size.min(MAX_PREALLOC) as usize
}

/// Members of a ZIP package, keyed by member name (no leading slash).
pub struct PhysPkgReader {
    members: HashMap<String, Vec<u8>>,
}

impl PhysPkgReader {
    /// Open a package file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(OpcError::PackageNotFound(path.display().to_string()));
        }
        let file = std::fs::File::open(path)?;
        Self::new(std::io::BufReader::new(file))
    }

    /// Read every file member of the archive into memory.
    pub fn new<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let mut members = HashMap::with_capacity(archive.len());

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            if file.is_dir() {
                continue;
            }
            let name = file.name().to_string();
            let mut blob = Vec::with_capacity(initial_capacity(file.size()));
            file.read_to_end(&mut blob)?;
            members.insert(name, blob);
        }

        debug!("read {} package members", members.len());
        Ok(Self { members })
    }

    /// Blob of the member holding `pack_uri`.
    pub fn blob_for(&self, pack_uri: &PackURI) -> Result<&[u8]> {
        self.members
            .get(pack_uri.membername())
            .map(Vec::as_slice)
            .ok_or_else(|| OpcError::PartNotFound(pack_uri.to_string()))
    }

    #[inline]
    pub fn contains(&self, pack_uri: &PackURI) -> bool {
        self.members.contains_key(pack_uri.membername())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Hand the inflated members over to the package reader.
    pub fn into_members(self) -> HashMap<String, Vec<u8>> {
        self.members
    }
}

/// In-memory ZIP writer for a package.
pub struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Write a deflated member; used for XML parts.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.write_member(pack_uri, blob, CompressionMethod::Deflated)
    }

    /// Write a member without compression; used for already-compressed media.
    pub fn write_stored(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.write_member(pack_uri, blob, CompressionMethod::Stored)
    }

    fn write_member(
        &mut self,
        pack_uri: &PackURI,
        blob: &[u8],
        method: CompressionMethod,
    ) -> Result<()> {
        let options = SimpleFileOptions::default()
            .compression_method(method)
            .large_file(blob.len() as u64 >= u32::MAX as u64);
        self.archive.start_file(pack_uri.membername(), options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish the archive and return its bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}
