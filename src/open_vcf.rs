use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::VcfCountError;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcfFileKind {
    PlainText,
    Gzipped,
}

/// Sniffs the first two bytes for the gzip magic number. Anything else is
/// plain text, including files shorter than two bytes.
pub fn guess_vcf_file_kind(file_path: &Path) -> Result<VcfFileKind, VcfCountError> {
    let mut file = open_file(file_path)?;

    let mut magic = [0u8; 2];
    match file.read_exact(&mut magic) {
        Ok(()) if magic == GZIP_MAGIC => Ok(VcfFileKind::Gzipped),
        Ok(()) => Ok(VcfFileKind::PlainText),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(VcfFileKind::PlainText),
        Err(source) => Err(VcfCountError::OpenFile {
            path: file_path.to_path_buf(),
            source,
        }),
    }
}

/// Opens a VCF for line-by-line reading, decompressing on the fly when the
/// file is gzipped.
pub fn open_vcf(file_path: &Path) -> Result<Box<dyn BufRead>, VcfCountError> {
    let kind = guess_vcf_file_kind(file_path)?;
    let file = open_file(file_path)?;

    match kind {
        VcfFileKind::Gzipped => Ok(Box::new(BufReader::new(MultiGzDecoder::new(file)))),
        VcfFileKind::PlainText => Ok(Box::new(BufReader::new(file))),
    }
}

fn open_file(file_path: &Path) -> Result<File, VcfCountError> {
    File::open(file_path).map_err(|source| VcfCountError::OpenFile {
        path: file_path.to_path_buf(),
        source,
    })
}
