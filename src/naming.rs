//! Collision-free output naming.

use crate::error::{GlitchError, Result};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Find the first `<stem>-<n><.ext>` next to `original` that does not exist,
/// starting at `n = start`.
///
/// `photo.jpg` becomes `photo-1.jpg`, then `photo-2.jpg` once that exists.
/// The check happens at call time, so call it right before writing.
pub fn generate_name<P: AsRef<Path>>(original: P, start: u64) -> Result<PathBuf> {
    let original = original.as_ref();
    let stem = original.file_stem().ok_or_else(|| {
        GlitchError::InvalidInput(format!("'{}' has no file name", original.display()))
    })?;
    let ext = original.extension();

    let mut n = start;
    loop {
        let candidate = original.with_file_name(suffixed_name(stem, n, ext));
        if !candidate.exists() {
            return Ok(candidate);
        }
        n += 1;
    }
}

fn suffixed_name(stem: &OsStr, n: u64, ext: Option<&OsStr>) -> OsString {
    let mut name = OsString::from(stem);
    name.push(format!("-{}", n));
    if let Some(ext) = ext {
        name.push(".");
        name.push(ext);
    }
    name
}
