//! Binary-safe line buffer.
//!
//! A file is held as the ordered list of byte segments between newline bytes.
//! Segments never contain the newline itself, and the final segment is
//! whatever follows the last newline (empty when the file ends with one), so
//! loading and writing back an untouched buffer reproduces the file exactly.

use crate::error::Result;
use memchr::memchr_iter;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Buffer size for writing glitched output (1MB).
const WRITE_BUF_SIZE: usize = 1024 * 1024;

/// An owned, mutable sequence of newline-delimited segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    segments: Vec<Vec<u8>>,
}

impl LineBuffer {
    /// Load a file from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Ok(Self::from_bytes(&data))
    }

    /// Split raw bytes on `\n`.
    ///
    /// An empty input yields a single empty segment.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut segments = Vec::new();
        let mut start = 0;
        for pos in memchr_iter(b'\n', data) {
            segments.push(data[start..pos].to_vec());
            start = pos + 1;
        }
        segments.push(data[start..].to_vec());
        Self { segments }
    }

    /// Build a buffer directly from segments.
    pub fn from_segments(segments: Vec<Vec<u8>>) -> Self {
        Self { segments }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Vec<u8>] {
        &self.segments
    }

    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.segments.get(index).map(Vec::as_slice)
    }

    /// Remove and return the segment at `index`, shifting later ones down.
    ///
    /// Panics if `index` is out of bounds, like `Vec::remove`.
    pub(crate) fn remove(&mut self, index: usize) -> Vec<u8> {
        self.segments.remove(index)
    }

    /// Replace the segment at `index`. Panics if out of bounds.
    pub(crate) fn replace(&mut self, index: usize, segment: Vec<u8>) {
        self.segments[index] = segment;
    }

    /// Write all segments, joined by `\n`, with no newline after the last.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        if let Some((last, rest)) = self.segments.split_last() {
            for segment in rest {
                writer.write_all(segment)?;
                writer.write_all(b"\n")?;
            }
            writer.write_all(last)?;
        }
        Ok(())
    }

    /// Create (or truncate) `path` and write the buffer into it.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::with_capacity(WRITE_BUF_SIZE, file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Serialize into a fresh byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let capacity = self.segments.iter().map(|s| s.len() + 1).sum();
        let mut out = Vec::with_capacity(capacity);
        // Writing into a Vec cannot fail
        let _ = self.write_to(&mut out);
        out
    }
}
