//! Stream acquisition
//!
//! A [`StreamSource`] turns a validated path into an owned raw character
//! stream. Ownership of the stream passes to the caller, which is what
//! guarantees release: the reader is dropped exactly once when the caller's
//! scope ends, on every exit path.
//!
//! [`FileSource`] is the standard implementation. It sniffs the two gzip
//! magic bytes without consuming them, so a gzipped resource loads exactly
//! like a plain one; the path's extension is still judged on the literal
//! path text by the validator, never here.

use std::fs::File;
use std::io::{BufRead, BufReader};

use flate2::read::MultiGzDecoder;

use crate::error::Result;

/// Magic bytes opening every gzip member (ID1=31, ID2=139)
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Opens a raw text stream for a validated resource path
///
/// Implementations must return a fresh stream per call; the loader never
/// reuses or rewinds a stream. I/O failures propagate unchanged.
pub trait StreamSource {
    /// Open the resource at `path` and hand the stream to the caller
    fn open(&self, path: &str) -> Result<Box<dyn BufRead + Send>>;
}

/// Stream source over local files with transparent gzip decompression
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl FileSource {
    /// Create a file source
    pub const fn new() -> Self {
        FileSource
    }
}

impl StreamSource for FileSource {
    fn open(&self, path: &str) -> Result<Box<dyn BufRead + Send>> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let is_gzip = {
            let peek = reader.fill_buf()?;
            peek.len() >= 2 && peek[..2] == GZIP_MAGIC
        };
        if is_gzip {
            Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
        } else {
            Ok(Box::new(reader))
        }
    }
}
